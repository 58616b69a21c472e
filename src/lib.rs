pub mod config;
pub mod csrf;
pub mod db;
pub mod entities;
pub mod error;
pub mod forms;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;
pub mod tmdb;

use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};
use axum_extra::extract::cookie::Key;
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{config::Config, store::FilmStore, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: FilmStore,
    pub tmdb: Arc<TmdbClient>,
    cookie_key: Key,
}

impl AppState {
    pub fn new(config: Arc<Config>, db: DatabaseConnection, http: reqwest::Client) -> Self {
        let tmdb = TmdbClient::new(
            http,
            config.tmdb_api_key.clone(),
            config.tmdb_base_url.clone(),
            config.tmdb_image_base_url.clone(),
        );
        let cookie_key = Key::derive_from(config.secret_key.as_bytes());

        Self { config, store: FilmStore::new(db), tmdb: Arc::new(tmdb), cookie_key }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/edit", get(routes::edit_form).post(routes::edit_submit))
        .route("/delete", get(routes::delete))
        .route("/add_new", get(routes::add_form).post(routes::add_search))
        .route("/find", get(routes::find))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
