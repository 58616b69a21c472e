use serde_json::Value;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::{NewFilm, SearchResult},
};

/// Client for the two TMDB endpoints the app needs. Each call is a single
/// request: no timeout, retry or rate limiting is applied.
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        image_base_url: String,
    ) -> Self {
        Self { client, api_key, base_url, image_base_url }
    }

    pub async fn search(&self, title: &str) -> AppResult<Vec<SearchResult>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        debug!(title = %title, "searching movie database");

        let body = self.get_json(&url, &[("query", title)]).await?;
        let results = body.get("results").ok_or(AppError::MissingField("results"))?;
        let results: Vec<SearchResult> = serde_json::from_value(results.clone())
            .map_err(|e| AppError::Upstream(format!("malformed search results: {e}")))?;

        debug!(title = %title, count = results.len(), "search complete");
        Ok(results)
    }

    /// Fetches a movie's details and maps them onto the fields a new film is
    /// created with. Every field is required.
    pub async fn fetch(&self, external_id: i64) -> AppResult<NewFilm> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), external_id);
        debug!(external_id, "fetching movie details");

        let body = self.get_json(&url, &[("language", "en-US")]).await?;
        film_from_details(&body, &self.image_base_url)
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> AppResult<Value> {
        let resp = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("{url} returned {status}")));
        }

        Ok(resp.json::<Value>().await?)
    }
}

pub fn film_from_details(body: &Value, image_base_url: &str) -> AppResult<NewFilm> {
    let title = required_str(body, "original_title")?;
    let poster_path = required_str(body, "poster_path")?;
    let release_date = required_str(body, "release_date")?;
    let overview = required_str(body, "overview")?;

    Ok(NewFilm {
        title: title.to_string(),
        year: release_year(release_date)?,
        description: overview.to_string(),
        poster_url: poster_url(image_base_url, poster_path),
    })
}

fn required_str<'a>(body: &'a Value, field: &'static str) -> AppResult<&'a str> {
    body.get(field).and_then(Value::as_str).ok_or(AppError::MissingField(field))
}

/// Takes the year from a `YYYY-MM-DD` date. An empty date means the movie
/// database has no release date, which is treated like a missing field.
pub fn release_year(date: &str) -> AppResult<i32> {
    let year = date.split('-').next().unwrap_or_default().trim();
    if year.is_empty() {
        return Err(AppError::MissingField("release_date"));
    }
    year.parse().map_err(|_| AppError::Upstream(format!("unparsable release date {date:?}")))
}

pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!("{}/{}", image_base_url.trim_end_matches('/'), poster_path.trim_start_matches('/'))
}
