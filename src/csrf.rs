//! Double-submit CSRF tokens: the token lives in a signed cookie and is echoed
//! back by every form as a hidden field.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

pub const COOKIE_NAME: &str = "csrf_token";

/// Returns the jar's current token, minting one if the cookie is absent.
pub fn issue(jar: SignedCookieJar) -> (SignedCookieJar, String) {
    if let Some(existing) = jar.get(COOKIE_NAME) {
        let token = existing.value().to_string();
        return (jar, token);
    }

    let token = uuid::Uuid::new_v4().simple().to_string();
    let cookie = Cookie::build((COOKIE_NAME, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(12));
    (jar.add(cookie), token)
}

pub fn verify(jar: &SignedCookieJar, submitted: &str) -> bool {
    !submitted.is_empty() && jar.get(COOKIE_NAME).is_some_and(|c| c.value() == submitted)
}
