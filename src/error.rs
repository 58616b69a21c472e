use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("a film titled {0:?} already exists")]
    DuplicateTitle(String),

    #[error("movie database request failed: {0}")]
    Upstream(String),

    #[error("movie database response is missing field `{0}`")]
    MissingField(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

// Request URLs carry the API key, so they never reach the message.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.without_url().to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateTitle(_) => StatusCode::CONFLICT,
            AppError::Upstream(_) | AppError::MissingField(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(_) | AppError::DuplicateTitle(_) => self.to_string(),
            AppError::Upstream(_) | AppError::MissingField(_) => concat!(
                "The movie database could not be reached or sent an unexpected reply. ",
                "Try again later."
            )
            .to_string(),
            AppError::Database(_) => "Something went wrong while saving your films.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(_) => tracing::error!(error = %self, "request failed"),
            AppError::Upstream(_) | AppError::MissingField(_) => {
                tracing::warn!(error = %self, "upstream failure")
            },
            _ => tracing::debug!(error = %self, "request rejected"),
        }
        let body = crate::templates::error_page(status, &self.public_message());
        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
