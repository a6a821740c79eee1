//! Reason phrases for numeric status codes.
//!
//! HTTP/2 carries only the numeric `:status`; the phrase is needed when a response
//! is rendered for an HTTP/1 peer. Known codes use the registered phrase from the
//! `http` crate, anything else falls back to a phrase naming its class.

use http::StatusCode;

/// Returns the canonical reason phrase for `code`.
///
/// Total: codes without a registered phrase map to a generic phrase for their
/// class, and codes outside `100..=599` map to `"Unknown"`.
pub fn status_phrase(code: u16) -> &'static str {
    StatusCode::from_u16(code).ok().and_then(|status| status.canonical_reason()).unwrap_or_else(|| class_phrase(code))
}

/// Renders `"<code> <phrase>"`, the form used on an HTTP/1 status line.
pub fn status_line(code: u16) -> String {
    format!("{code} {}", status_phrase(code))
}

fn class_phrase(code: u16) -> &'static str {
    match code / 100 {
        1 => "Informational",
        2 => "Success",
        3 => "Redirection",
        4 => "Client Error",
        5 => "Server Error",
        _ => "Unknown",
    }
}
