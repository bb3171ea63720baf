//! Session cookie handling.
//!
//! The cookie only carries the opaque session token; the session row itself
//! lives in the `session` table and is managed by `nutrimeal_user::Command`.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::SessionConfig;

/// Builds the cookie handed out on sign-in and sign-up.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.to_owned(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(time::Duration::seconds(config.ttl_secs()))
        .build()
}

/// Cookie that, once added to the jar, makes the browser drop the session.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.to_owned(), "")).path("/").build()
}

pub fn session_token(config: &SessionConfig, jar: &CookieJar) -> Option<String> {
    jar.get(&config.cookie_name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|token| !token.is_empty())
}
