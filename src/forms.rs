use std::collections::BTreeMap;

use serde::Deserialize;

/// Key for errors that belong to the whole form rather than one field.
pub const FORM: &str = "form";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RatingForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingInput {
    pub rating: f64,
    pub review: Option<String>,
}

impl RatingForm {
    pub fn validate(&self) -> Result<RatingInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let raw = self.rating.trim();
        let rating = if raw.is_empty() {
            errors.add("rating", "Rating is required");
            None
        } else {
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    errors.add("rating", "Rating must be a number, e.g. 7.5");
                    None
                },
            }
        };

        let review = self.review.trim();
        let review = (!review.is_empty()).then(|| review.to_string());

        match rating {
            Some(rating) if errors.is_empty() => Ok(RatingInput { rating, review }),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TitleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TitleInput {
    pub title: String,
}

impl TitleForm {
    pub fn validate(&self) -> Result<TitleInput, FieldErrors> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FieldErrors::single("title", "Title is required"));
        }
        Ok(TitleInput { title: title.to_string() })
    }
}
