//! Theme preference over HTTP
//!
//! The browser keeps the preference in the `theme` cookie. When it is
//! missing the `Sec-CH-Prefers-Color-Scheme` client hint stands in for the
//! OS color scheme; without either, pages render light.

use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};
use gbr_common::theme::STORAGE_KEY;
use gbr_common::{Error, Result, Theme, ThemeState, ThemeStore};
use tracing::{debug, warn};

/// Client hint carrying the OS color scheme
pub const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

/// One year
const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Theme store backed by the request's `Cookie` header
///
/// Saves are buffered and emitted as `Set-Cookie` on the response.
#[derive(Debug, Default)]
pub struct CookieThemeStore {
    stored: Option<String>,
    unreadable: bool,
    pending: Option<Theme>,
}

impl CookieThemeStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut store = Self::default();

        for value in headers.get_all(header::COOKIE) {
            let Ok(value) = value.to_str() else {
                store.unreadable = true;
                continue;
            };
            if let Some(theme) = cookie_value(value, STORAGE_KEY) {
                store.stored = Some(theme.to_string());
            }
        }

        store
    }

    /// `Set-Cookie` value for a saved preference
    pub fn set_cookie(&self) -> Option<String> {
        self.pending.map(|theme| {
            format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                STORAGE_KEY, theme, COOKIE_MAX_AGE_SECS
            )
        })
    }
}

impl ThemeStore for CookieThemeStore {
    fn load(&self) -> Result<Option<String>> {
        if self.unreadable && self.stored.is_none() {
            return Err(Error::Storage("Cookie header is not valid text".to_string()));
        }
        Ok(self.stored.clone())
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        self.pending = Some(theme);
        Ok(())
    }
}

/// Value of cookie `name` in a `Cookie` header
fn cookie_value<'a>(header_value: &'a str, name: &str) -> Option<&'a str> {
    header_value
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

/// OS color scheme from the client hint, light when absent
pub fn os_preference(headers: &HeaderMap) -> Theme {
    headers
        .get(COLOR_SCHEME_HINT)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Theme::parse(value.trim().trim_matches('"')))
        .unwrap_or_default()
}

/// Theme state for the current request
pub fn theme_for_request(headers: &HeaderMap) -> ThemeState<CookieThemeStore> {
    ThemeState::initialize(CookieThemeStore::from_headers(headers), os_preference(headers))
}

/// Same-site path to return to after toggling
///
/// Only the path of the `Referer` is used; anything that does not resolve
/// to a local absolute path sends the user home.
fn return_path(headers: &HeaderMap) -> String {
    let Some(referer) = headers.get(header::REFERER).and_then(|v| v.to_str().ok()) else {
        return "/".to_string();
    };

    let path = match referer.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|index| &rest[index..]).unwrap_or("/"),
        None => referer,
    };

    if path.starts_with('/') && !path.starts_with("//") {
        path.to_string()
    } else {
        "/".to_string()
    }
}

/// POST /theme
///
/// Flips the theme, stores it in the cookie and redirects back.
pub async fn toggle_theme(headers: HeaderMap) -> Response {
    let mut state = theme_for_request(&headers);
    let theme = state.toggle();
    let store = state.into_store();

    let location = return_path(&headers);
    debug!(theme = %theme, location = %location, "Theme toggled");

    // 303 See Other
    let mut response = Redirect::to(&location).into_response();

    if let Some(cookie) = store.set_cookie() {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Failed to encode theme cookie: {}", e),
        }
    }

    response
}
