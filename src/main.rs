use std::sync::Arc;

use filmrank::{AppState, build_router, config::Config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,filmrank=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let http = reqwest::Client::builder().user_agent("filmrank/0.1").build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;

    let state = AppState::new(config.clone(), db, http);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
