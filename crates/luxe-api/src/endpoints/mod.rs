//! Endpoint groups, one module per backend resource.
//!
//! Each module adds methods to [`crate::ApiClient`].

mod auth;
mod cart;
mod orders;
mod products;
mod reviews;
mod settings;
mod wishlist;

/// Encodes a path segment so ids cannot escape their route.
pub(crate) fn segment(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                char::from(b).to_string()
            }
            other => format!("%{other:02X}"),
        })
        .collect()
}
