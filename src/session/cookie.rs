// src/session/cookie.rs
// DOCUMENTATION: Cookie string access
// PURPOSE: Read a named value from `document.cookie` and format the token cookie

/// Name of the cookie holding the bearer token
pub const TOKEN_COOKIE: &str = "token";

/// Value of the first `name=value` pair in a cookie string
/// DOCUMENTATION: Pairs are `;`-separated; values are returned verbatim,
/// without percent-decoding
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim_start().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Cookie assignment for a freshly issued token: root path, session lifetime
pub fn token_cookie(token: &str) -> String {
    format!("{}={}; path=/", TOKEN_COOKIE, token)
}
