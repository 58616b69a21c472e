use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    forms::{FORM, FieldErrors},
    models::{RankedFilm, SearchResult},
    tmdb,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str =
    "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

pub fn index_page(films: &[RankedFilm]) -> String {
    page(
        "My Top Films",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Films" }
                            p class="mt-2 text-gray-600" { "Ranked by your own ratings." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add_new" { "Add Film" }
                    }

                    @if films.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No films yet. Add one to get started." }
                        }
                    } @else {
                        // Highest rank first on screen; the store hands them over lowest first.
                        ol class="mt-10 space-y-4" {
                            @for ranked in films.iter().rev() {
                                (film_card(ranked))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_page(
    film: &crate::entities::film::Model,
    rating: &str,
    review: &str,
    errors: &FieldErrors,
    csrf_token: &str,
) -> String {
    let action = format!("/edit?film_id={}", film.id);

    page(
        "Rate Film",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (film.title) }
                        p class="mt-2 text-gray-600" { "Edit your rating" }

                        form class="mt-8 space-y-6" method="post" action=(action) {
                            (form_error(errors))
                            input type="hidden" name="csrf_token" value=(csrf_token);
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your rating out of 10, e.g. 7.5" }
                                input class=(INPUT_CLASS) name="rating" id="rating" value=(rating) required;
                                (field_error(errors, "rating"))
                            }
                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your review" }
                                input class=(INPUT_CLASS) name="review" id="review" value=(review) maxlength="250";
                                (field_error(errors, "review"))
                            }
                            button class=(BUTTON_CLASS) type="submit" { "Done" }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(title: &str, errors: &FieldErrors, csrf_token: &str) -> String {
    page(
        "Add Film",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add a Film" }

                        form class="mt-8 space-y-6" method="post" action="/add_new" {
                            (form_error(errors))
                            input type="hidden" name="csrf_token" value=(csrf_token);
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Film title" }
                                input class=(INPUT_CLASS) name="title" id="title" value=(title) placeholder="E.g. Harry Potter" required;
                                (field_error(errors, "title"))
                            }
                            button class=(BUTTON_CLASS) type="submit" { "Add Film" }
                        }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, results: &[SearchResult], image_base_url: &str) -> String {
    page(
        "Select Film",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "Select Film" }
                            p class="mt-2 text-gray-600" { "Results for \u{201c}" (query) "\u{201d}" }
                        }
                        a class="text-sm text-blue-600 hover:text-blue-800" href="/add_new" { "New search" }
                    }

                    @if results.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No films matched that title." }
                        }
                    } @else {
                        ul class="mt-10 bg-white shadow rounded-lg divide-y divide-gray-100" {
                            @for result in results {
                                li class="px-6 py-4 flex gap-4" {
                                    @if let Some(path) = &result.poster_path {
                                        img class="poster w-12 rounded" src=(tmdb::poster_url(image_base_url, path)) alt="";
                                    }
                                    div class="flex-1" {
                                        a class="candidate text-blue-600 hover:text-blue-800" href=(format!("/find?film_id={}", result.id)) {
                                            (result.title.as_deref().unwrap_or("Untitled"))
                                            @if let Some(year) = result.year() {
                                                span class="ml-2 text-gray-500" { "(" (year) ")" }
                                            }
                                        }
                                        @if let Some(overview) = result.overview.as_deref().filter(|o| !o.is_empty()) {
                                            p class="overview mt-1 text-sm text-gray-600 line-clamp-2" { (overview) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error " (status.as_u16()) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn film_card(ranked: &RankedFilm) -> Markup {
    let film = &ranked.film;
    html! {
        li class="film bg-white shadow rounded-lg p-6 flex gap-6" data-film-id=(film.id) data-ranking=(ranked.ranking) {
            img class="w-24 rounded" src=(film.poster_url) alt=(film.title);
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        span class="mr-2 text-gray-400" { "#" (ranked.ranking) }
                        (film.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (film.year) ")" }
                    }
                    @if let Some(rating) = film.rating {
                        span class="text-lg font-semibold text-blue-600" { (rating) }
                    }
                }
                @if let Some(review) = &film.review {
                    p class="mt-1 italic text-gray-700" { "\u{201c}" (review) "\u{201d}" }
                }
                p class="mt-2 text-sm text-gray-600" { (film.description) }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?film_id={}", film.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete?film_id={}", film.id)) { "Delete" }
                }
            }
        }
    }
}

fn field_error(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.get(field) {
            p class="error mt-2 text-sm text-red-600" data-field=(field) { (message) }
        }
    }
}

fn form_error(errors: &FieldErrors) -> Markup {
    html! {
        @if let Some(message) = errors.get(FORM) {
            div class="error rounded-md bg-red-50 p-4 text-sm text-red-700" data-field=(FORM) { (message) }
        }
    }
}
