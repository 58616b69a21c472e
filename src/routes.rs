use std::str::FromStr;

use axum::{
    extract::{Form, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::info;

use crate::{
    AppState, csrf,
    error::{AppError, AppResult},
    forms::{FORM, FieldErrors, RatingForm, TitleForm},
    models::FilmIdQuery,
    templates,
};

const EXPIRED_FORM: &str = "This form has expired. Please submit it again.";

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let films = state.store.list().await?;
    Ok(Html(templates::index_page(&films)))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Query(q): Query<FilmIdQuery>,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    let film = state.store.get(parse_id(&q)?).await?;
    let (jar, token) = csrf::issue(jar);

    let rating = film.rating.map(|r| r.to_string()).unwrap_or_default();
    let review = film.review.clone().unwrap_or_default();
    let body = templates::edit_page(&film, &rating, &review, &FieldErrors::default(), &token);
    Ok((jar, Html(body)).into_response())
}

pub async fn edit_submit(
    State(state): State<AppState>,
    Query(q): Query<FilmIdQuery>,
    jar: SignedCookieJar,
    Form(form): Form<RatingForm>,
) -> AppResult<Response> {
    let film = state.store.get(parse_id(&q)?).await?;

    let validated = if csrf::verify(&jar, &form.csrf_token) {
        form.validate()
    } else {
        Err(FieldErrors::single(FORM, EXPIRED_FORM))
    };

    match validated {
        Ok(input) => {
            state.store.update(film.id, input.rating, input.review).await?;
            info!(film_id = film.id, rating = input.rating, "film rated");
            Ok(found("/"))
        },
        Err(errors) => {
            let (jar, token) = csrf::issue(jar);
            let body = templates::edit_page(&film, &form.rating, &form.review, &errors, &token);
            Ok((jar, Html(body)).into_response())
        },
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Query(q): Query<FilmIdQuery>,
) -> AppResult<Response> {
    let id = parse_id(&q)?;
    state.store.delete(id).await?;
    info!(film_id = id, "film deleted");
    Ok(found("/"))
}

pub async fn add_form(jar: SignedCookieJar) -> Response {
    let (jar, token) = csrf::issue(jar);
    (jar, Html(templates::add_page("", &FieldErrors::default(), &token))).into_response()
}

pub async fn add_search(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<TitleForm>,
) -> AppResult<Response> {
    let validated = if csrf::verify(&jar, &form.csrf_token) {
        form.validate()
    } else {
        Err(FieldErrors::single(FORM, EXPIRED_FORM))
    };

    let input = match validated {
        Ok(input) => input,
        Err(errors) => {
            let (jar, token) = csrf::issue(jar);
            let body = templates::add_page(&form.title, &errors, &token);
            return Ok((jar, Html(body)).into_response());
        },
    };

    let results = state.tmdb.search(&input.title).await?;
    let body = templates::select_page(&input.title, &results, &state.config.tmdb_image_base_url);
    Ok(Html(body).into_response())
}

pub async fn find(
    State(state): State<AppState>,
    Query(q): Query<FilmIdQuery>,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    let external_id: i64 = parse_id(&q)?;
    let new_film = state.tmdb.fetch(external_id).await?;

    match state.store.create(new_film).await {
        Ok(film) => {
            info!(film_id = film.id, external_id, title = %film.title, "film added");
            Ok(found(&format!("/edit?film_id={}", film.id)))
        },
        Err(AppError::DuplicateTitle(title)) => {
            info!(external_id, title = %title, "film already listed");
            let errors = FieldErrors::single(
                "title",
                format!("\u{201c}{title}\u{201d} is already in your list"),
            );
            let (jar, token) = csrf::issue(jar);
            Ok((jar, Html(templates::add_page(&title, &errors, &token))).into_response())
        },
        Err(err) => Err(err),
    }
}

/// A missing or unparsable id is reported the same way as an unknown one.
fn parse_id<T: FromStr>(q: &FilmIdQuery) -> AppResult<T> {
    q.film_id
        .as_deref()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| AppError::NotFound("film".to_string()))
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
