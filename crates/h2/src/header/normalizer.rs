//! Builds wire-legal header sets from generic header lists.
//!
//! The outbound path starts from whatever an upstream or downstream translation layer
//! produced: a `Vec<(String, String)>`, an [`http::HeaderMap`] or plain byte pairs.
//! [`filter_to_wire`] keeps everything HTTP/2 may carry, in order, without copying a
//! byte. [`capitalize_token`] and [`sanitize_value`] rewrite caller-owned buffers in
//! place for compatibility rendering and never fail.

use tracing::trace;

use crate::header::policy::BespokePolicy;
use crate::header::validator::{is_allowed_header_name, is_legal_value};
use crate::protocol::{HeaderCollection, HeaderField};

/// Upper-cases the first letter of every dash-separated segment of `value[offset..]`.
///
/// `content-type` becomes `Content-Type`. Only used when rendering for HTTP/1 peers;
/// HTTP/2 names and pseudo-headers stay lowercase. An `offset` at or past the end
/// leaves `value` unchanged.
pub fn capitalize_token(value: &mut [u8], offset: usize) {
    let Some(token) = value.get_mut(offset..) else {
        return;
    };

    let mut segment_start = true;
    for b in token {
        if segment_start {
            b.make_ascii_uppercase();
        }
        segment_start = *b == b'-';
    }
}

/// Replaces every CR and LF byte in `value[offset..]` with a space.
///
/// Used where a value has to survive a protocol translation and rejecting it would
/// break an unrelated feature. Afterwards `value[offset..]` always passes
/// [`is_legal_value`](crate::header::is_legal_value).
pub fn sanitize_value(value: &mut [u8], offset: usize) {
    let Some(tail) = value.get_mut(offset..) else {
        return;
    };

    for b in tail.iter_mut().filter(|b| matches!(**b, b'\r' | b'\n')) {
        *b = b' ';
    }
}

/// Collects the headers of `headers` that may go on an HTTP/2 wire.
///
/// An entry is dropped when its name is disallowed in HTTP/2, when its value contains CR
/// or LF, or when `policy` marks it as bespoke; bespoke headers are for the caller to
/// synthesize separately. Values are never rewritten here, callers that would rather keep
/// such a header run [`sanitize_value`] on their own copy first. Relative
/// order of the kept entries is preserved, and every kept entry is a view into
/// `headers`' own storage.
///
/// # Example
///
/// ```
/// use micro_h2::header::{filter_to_wire, WIRE_BESPOKE};
///
/// let headers = [("content-type", "text/plain"), ("via", "1.1 edge"), ("upgrade", "h2c")];
/// let wire = filter_to_wire(&headers, &WIRE_BESPOKE);
///
/// assert_eq!(wire.len(), 1);
/// assert_eq!(wire[0].name(), b"content-type");
/// ```
pub fn filter_to_wire<'a, I, T, P>(headers: I, policy: &P) -> HeaderCollection<'a>
where
    I: IntoIterator<Item = T>,
    T: Into<HeaderField<'a>>,
    P: BespokePolicy + ?Sized,
{
    let headers = headers.into_iter();
    let mut wire = Vec::with_capacity(headers.size_hint().0);

    for header in headers {
        let header: HeaderField<'a> = header.into();
        if !is_allowed_header_name(header.name()) {
            trace!(header = %header.name_lossy(), reason = "disallowed", "skip header");
            continue;
        }
        if !is_legal_value(header.value()) {
            trace!(header = %header.name_lossy(), reason = "illegal value", "skip header");
            continue;
        }
        if policy.is_bespoke(header.name()) {
            trace!(header = %header.name_lossy(), reason = "bespoke", "skip header");
            continue;
        }
        wire.push(header);
    }

    wire
}
