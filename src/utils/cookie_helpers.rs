use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Credential cookie whose lifetime matches the token's own `exp`.
pub fn access_cookie(name: &str, token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build((name.to_string(), token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(true)
        .max_age(Duration::seconds(ttl_secs.max(0)))
        .build()
}

/// Removal cookie. Browsers only drop a cookie when name and path match.
pub fn clear_cookie(name: &str, path: &str) -> Cookie<'static> {
    Cookie::build((name.to_owned(), String::new()))
        .path(path.to_owned())
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(true)
        .max_age(Duration::seconds(0))
        .build()
}
