//! One-shot flash messages carried across a redirect in a private cookie.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use maud::{Markup, html};

pub(crate) const COOKIE_FLASH: &str = "flash";

/// Add a flash message to the cookie jar, to be shown on the next page load.
pub(crate) fn set_flash(jar: PrivateCookieJar, message: &str) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_FLASH, message.to_owned()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict),
    )
}

/// Take the flash message out of the cookie jar.
///
/// Returns the jar with the flash cookie removed so the message is shown only once.
pub(crate) fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<String>) {
    match jar.get(COOKIE_FLASH) {
        Some(cookie) => {
            let message = cookie.value().to_owned();
            let jar = jar.remove(Cookie::build(COOKIE_FLASH).path("/"));

            (jar, Some(message))
        }
        None => (jar, None),
    }
}

/// Render a flash message as a success alert.
pub(crate) fn flash_view(message: &str) -> Markup {
    html! {
        div class="alert alert-success" role="alert"
        {
            p { (message) }
        }
    }
}
