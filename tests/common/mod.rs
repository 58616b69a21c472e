//! Shared harness: an in-memory database, a mocked movie database and the
//! full router.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use filmrank::{
    AppState, build_router,
    config::{Config, DEFAULT_IMAGE_BASE_URL},
    db,
    models::NewFilm,
};
use http_body_util::BodyExt;
use scraper::{Html, Selector};
use tower::ServiceExt;
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub tmdb: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        let tmdb = MockServer::start().await;
        let config = Arc::new(Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            tmdb_api_key: API_KEY.to_string(),
            tmdb_base_url: tmdb.uri(),
            tmdb_image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            secret_key: "a-test-secret-that-is-long-enough-for-key-derivation".to_string(),
            database_url: "sqlite::memory:".to_string(),
        });

        let db = db::connect_and_migrate(&config.database_url).await.expect("in-memory database");
        let state = AppState::new(config, db, reqwest::Client::new());
        let router = build_router(state.clone());

        Self { router, state, tmdb }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(
        &self,
        uri: &str,
        cookie: Option<&str>,
        fields: &[(&str, &str)],
    ) -> Response<Body> {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let mut req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        self.router.clone().oneshot(req.body(Body::from(body)).unwrap()).await.unwrap()
    }

    /// Loads a form page and returns the CSRF cookie together with the token
    /// embedded in the form.
    pub async fn form_session(&self, uri: &str) -> (String, String) {
        let resp = self.get(uri).await;
        let cookie = resp
            .headers()
            .get(header::SET_COOKIE)
            .expect("csrf cookie")
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let html = body_string(resp).await;
        let token = select_attr(&html, "input[name=csrf_token]", "value")
            .pop()
            .expect("csrf field");
        (cookie, token)
    }

    pub async fn seed(&self, title: &str, year: i32) -> filmrank::entities::film::Model {
        self.state.store.create(new_film(title, year)).await.unwrap()
    }
}

pub fn new_film(title: &str, year: i32) -> NewFilm {
    NewFilm {
        title: title.to_string(),
        year,
        description: format!("About {title}"),
        poster_url: format!(
            "{DEFAULT_IMAGE_BASE_URL}/{}.jpg",
            title.to_lowercase().replace(' ', "-")
        ),
    }
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(resp: &Response<Body>) -> &str {
    resp.headers().get(header::LOCATION).expect("location header").to_str().unwrap()
}

pub fn select_attr(html: &str, selector: &str, attr: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector).filter_map(|el| el.value().attr(attr).map(str::to_string)).collect()
}

pub fn select_text(html: &str, selector: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector).map(|el| el.text().collect::<String>().trim().to_string()).collect()
}
