use serde::Deserialize;

use crate::entities::film;

/// The fields a film is created with; rating and review come later.
#[derive(Clone, Debug, PartialEq)]
pub struct NewFilm {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub poster_url: String,
}

/// A stored film together with its position in the current listing.
#[derive(Clone, Debug)]
pub struct RankedFilm {
    pub ranking: usize,
    pub film: film::Model,
}

/// One candidate returned by a title search.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchResult {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl SearchResult {
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct FilmIdQuery {
    pub film_id: Option<String>,
}
