//! HTTP/1 text rendering of header sets.
//!
//! When an HTTP/2 stream is bridged to a peer that only speaks HTTP/1, its headers are
//! written back out as `Name: value\r\n` lines. Names are capitalized the way HTTP/1
//! software traditionally sends them, and headers the caller synthesizes itself (see
//! [`crate::header::LEGACY_BESPOKE`]) are skipped.
//!
//! Nothing is validated here. Values must already have passed
//! [`is_legal_value`](crate::header::is_legal_value) or been through
//! [`sanitize_value`](crate::header::sanitize_value), otherwise the output can be split.

use std::io;
use std::io::Write;

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::trace;

use crate::header::normalizer::capitalize_token;
use crate::header::policy::{BespokePolicy, BespokeSet, LEGACY_BESPOKE};
use crate::protocol::{status_phrase, HeaderError, HeaderField};

/// Initial buffer size reserved for a rendered header section
const INIT_HEADER_SIZE: usize = 4 * 1024;

/// Appends one `Name: value\r\n` line per header to `dst`, skipping bespoke headers.
///
/// The terminating empty line is not written, so several header sets can be rendered
/// into one buffer.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use micro_h2::header::{render_as_legacy_text, LEGACY_BESPOKE};
///
/// let headers = [("content-type", "text/plain"), ("cookie", "a=1"), ("x-request-id", "42")];
/// let mut dst = BytesMut::new();
/// render_as_legacy_text(&headers, &LEGACY_BESPOKE, &mut dst);
///
/// assert_eq!(&dst[..], b"Content-Type: text/plain\r\nX-Request-Id: 42\r\n");
/// ```
pub fn render_as_legacy_text<'a, I, T, P>(headers: I, policy: &P, dst: &mut BytesMut)
where
    I: IntoIterator<Item = T>,
    T: Into<HeaderField<'a>>,
    P: BespokePolicy + ?Sized,
{
    for header in headers {
        let header: HeaderField<'a> = header.into();
        if policy.is_bespoke(header.name()) {
            trace!(header = %header.name_lossy(), reason = "bespoke", "skip header");
            continue;
        }

        let name_start = dst.len();
        dst.put_slice(header.name());
        capitalize_token(dst, name_start);
        dst.put_slice(b": ");
        dst.put_slice(header.value());
        dst.put_slice(b"\r\n");
    }
}

/// Writes `name: value` lines to `out`, for diagnostics.
///
/// Unlike [`render_as_legacy_text`] nothing is skipped or capitalized, so the output
/// shows the header set exactly as it is.
pub fn dump_headers<W: Write + ?Sized>(out: &mut W, headers: &[HeaderField<'_>]) -> io::Result<()> {
    for header in headers {
        out.write_all(header.name())?;
        out.write_all(b": ")?;
        out.write_all(header.value())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Encoder rendering header sets as an HTTP/1 header section, implementing [`Encoder`].
///
/// Two item shapes are accepted:
/// - `&[HeaderField]`: header lines followed by the empty line
/// - `(u16, &[HeaderField])`: an `HTTP/1.1 <code> <phrase>` status line first
#[derive(Debug, Clone, Copy)]
pub struct LegacyHeaderEncoder<P = BespokeSet> {
    policy: P,
}

impl LegacyHeaderEncoder {
    /// Creates an encoder skipping [`LEGACY_BESPOKE`] headers.
    pub fn new() -> Self {
        Self { policy: LEGACY_BESPOKE }
    }
}

impl Default for LegacyHeaderEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BespokePolicy> LegacyHeaderEncoder<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }
}

impl<'h, 'a, P: BespokePolicy> Encoder<&'h [HeaderField<'a>]> for LegacyHeaderEncoder<P> {
    type Error = HeaderError;

    fn encode(&mut self, item: &'h [HeaderField<'a>], dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(INIT_HEADER_SIZE);
        render_as_legacy_text(item, &self.policy, dst);
        dst.put_slice(b"\r\n");
        Ok(())
    }
}

impl<'h, 'a, P: BespokePolicy> Encoder<(u16, &'h [HeaderField<'a>])> for LegacyHeaderEncoder<P> {
    type Error = HeaderError;

    fn encode(&mut self, item: (u16, &'h [HeaderField<'a>]), dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (status, headers) = item;

        dst.reserve(INIT_HEADER_SIZE);
        write!(FastWrite(dst), "HTTP/1.1 {status} {}\r\n", status_phrase(status))?;
        Encoder::<&'h [HeaderField<'a>]>::encode(self, headers, dst)
    }
}

/// Fast writer implementation for writing to BytesMut.
///
/// Lets `write!` format straight into the reserved buffer.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
