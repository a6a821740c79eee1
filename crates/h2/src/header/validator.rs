//! Byte-level legality checks for header names and values.
//!
//! Every check here is a plain predicate. Whether a `false` drops one header,
//! resets the stream or tears down the connection is the session's decision;
//! [`validate_inbound`] exists for callers that simply want the whole set
//! rejected with a reason.

use tracing::debug;

use crate::ensure;
use crate::protocol::{HeaderError, HeaderField};

/// A fixed set of header names forbidden on the wire.
///
/// Matching is ASCII case-insensitive: HTTP/2 only carries lowercase names, but
/// the check is also applied to header lists coming from HTTP/1 where `Connection`
/// and `connection` are the same header.
#[derive(Debug, Clone, Copy)]
pub struct DisallowSet {
    names: &'static [&'static str],
}

impl DisallowSet {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn contains(&self, name: &[u8]) -> bool {
        self.names.iter().any(|disallowed| disallowed.as_bytes().eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.names.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Connection-specific headers that only make sense in HTTP/1 and must not appear
/// in an HTTP/2 header block.
///
/// refer: <https://www.rfc-editor.org/rfc/rfc9113.html#section-8.2.2>
pub static DISALLOWED_HEADERS: DisallowSet =
    DisallowSet::new(&["connection", "keep-alive", "proxy-connection", "te", "transfer-encoding", "upgrade"]);

/// Returns false if `value` contains a CR or LF byte.
///
/// Such a value would split the message once it is re-serialized as HTTP/1 text.
#[inline]
pub fn is_legal_value(value: &[u8]) -> bool {
    !value.iter().any(|&b| b == b'\r' || b == b'\n')
}

/// Returns false if `name` is one of [`DISALLOWED_HEADERS`].
#[inline]
pub fn is_allowed_header_name(name: &[u8]) -> bool {
    !DISALLOWED_HEADERS.contains(name)
}

/// Returns true if no header in `headers` has a disallowed name.
/// Stops at the first violation.
pub fn all_allowed(headers: &[HeaderField<'_>]) -> bool {
    headers.iter().all(|header| is_allowed_header_name(header.name()))
}

/// Returns true if every value in `headers` passes [`is_legal_value`].
pub fn all_legal(headers: &[HeaderField<'_>]) -> bool {
    headers.iter().all(|header| is_legal_value(header.value()))
}

/// Returns true if `value` consists only of SP and HTAB bytes. An empty value counts.
pub fn is_lws_value(value: &[u8]) -> bool {
    value.iter().all(|&b| b == b' ' || b == b'\t')
}

/// Returns true if `value` is not empty, not only whitespace and legal.
pub fn is_non_empty_value(value: &[u8]) -> bool {
    !is_lws_value(value) && is_legal_value(value)
}

/// Rejects `headers` if any name is disallowed or any value carries CR/LF,
/// reporting the first offending header.
///
/// # Errors
///
/// - [`HeaderError::Disallowed`] for a connection-specific header name
/// - [`HeaderError::IllegalValue`] for a value containing CR or LF
pub fn validate_inbound(headers: &[HeaderField<'_>]) -> Result<(), HeaderError> {
    for header in headers {
        let name = header.name();
        ensure!(is_allowed_header_name(name), rejected(header, HeaderError::disallowed(name)));
        ensure!(is_legal_value(header.value()), rejected(header, HeaderError::illegal_value(name)));
    }
    Ok(())
}

fn rejected(header: &HeaderField<'_>, error: HeaderError) -> HeaderError {
    debug!(header = %header.name_lossy(), cause = %error, "rejecting inbound header set");
    error
}
