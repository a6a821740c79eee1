use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;

/// A header name/value pair borrowed from storage the caller owns.
///
/// Neither half is copied: a `HeaderField` is two slices into some backing buffer,
/// whether that is a decoded header block, a `Vec<(String, String)>` from an upstream
/// translation layer or an [`http::HeaderMap`]. The lifetime `'a` ties every view to
/// that buffer, so a field can never outlive the bytes it points at.
///
/// Bytes are opaque octets. Nothing here assumes the name or value is valid UTF-8;
/// use [`HeaderField::name_lossy`] and [`HeaderField::value_lossy`] for display.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderField<'a> {
    name: &'a [u8],
    value: &'a [u8],
}

/// An ordered sequence of header fields.
///
/// Order is significant when emitting, never for lookup.
pub type HeaderCollection<'a> = Vec<HeaderField<'a>>;

impl<'a> HeaderField<'a> {
    #[inline]
    pub const fn new(name: &'a [u8], value: &'a [u8]) -> Self {
        Self { name, value }
    }

    /// Builds a view from anything that exposes its bytes, such as `String`,
    /// `&str`, [`http::HeaderName`] or [`http::HeaderValue`].
    #[inline]
    pub fn from_pair<N, V>(name: &'a N, value: &'a V) -> Self
    where
        N: AsRef<[u8]> + ?Sized,
        V: AsRef<[u8]> + ?Sized,
    {
        Self::new(name.as_ref(), value.as_ref())
    }

    #[inline]
    pub const fn name(&self) -> &'a [u8] {
        self.name
    }

    #[inline]
    pub const fn value(&self) -> &'a [u8] {
        self.value
    }

    /// Name as text, replacing invalid UTF-8 sequences.
    pub fn name_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.name)
    }

    /// Value as text, replacing invalid UTF-8 sequences.
    pub fn value_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.value)
    }

    /// Copies both halves into an [`OwnedHeaderField`] that no longer borrows
    /// from the source buffer.
    pub fn to_owned_field(&self) -> OwnedHeaderField {
        OwnedHeaderField::new(Bytes::copy_from_slice(self.name), Bytes::copy_from_slice(self.value))
    }
}

impl fmt::Debug for HeaderField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderField").field("name", &self.name_lossy()).field("value", &self.value_lossy()).finish()
    }
}

impl<'a, N, V> From<(&'a N, &'a V)> for HeaderField<'a>
where
    N: AsRef<[u8]> + ?Sized,
    V: AsRef<[u8]> + ?Sized,
{
    fn from((name, value): (&'a N, &'a V)) -> Self {
        Self::from_pair(name, value)
    }
}

impl<'a, N, V> From<&'a (N, V)> for HeaderField<'a>
where
    N: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    fn from((name, value): &'a (N, V)) -> Self {
        Self::from_pair(name, value)
    }
}

impl<'a> From<&HeaderField<'a>> for HeaderField<'a> {
    fn from(field: &HeaderField<'a>) -> Self {
        *field
    }
}

/// A header pair holding its own bytes.
///
/// Used for derived headers that have to outlive the buffer they were computed from,
/// e.g. a `via` header the caller synthesizes after [`crate::header::filter_to_wire`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OwnedHeaderField {
    name: Bytes,
    value: Bytes,
}

impl OwnedHeaderField {
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    pub const fn from_static(name: &'static str, value: &'static str) -> Self {
        Self { name: Bytes::from_static(name.as_bytes()), value: Bytes::from_static(value.as_bytes()) }
    }

    /// Borrows a view that lives as long as `self`.
    #[inline]
    pub fn as_field(&self) -> HeaderField<'_> {
        HeaderField::new(&self.name, &self.value)
    }

    pub fn name(&self) -> &Bytes {
        &self.name
    }

    pub fn value(&self) -> &Bytes {
        &self.value
    }
}

impl fmt::Debug for OwnedHeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_field(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_points_into_source() {
        let source = ("content-type".to_string(), "text/html".to_string());
        let field = HeaderField::from(&source);

        assert_eq!(field.name().as_ptr(), source.0.as_ptr());
        assert_eq!(field.value().as_ptr(), source.1.as_ptr());
    }

    #[test]
    fn lossy_views() {
        let field = HeaderField::new(b"x-bin", b"a\xffb");
        assert_eq!(field.name_lossy(), "x-bin");
        assert_eq!(field.value_lossy(), "a\u{fffd}b");
    }

    #[test]
    fn owned_round_trip_to_view() {
        let owned = HeaderField::new(b"via", b"1.1 proxy").to_owned_field();
        let view = owned.as_field();

        assert_eq!(view, HeaderField::new(b"via", b"1.1 proxy"));
        assert_eq!(format!("{owned:?}"), r#"HeaderField { name: "via", value: "1.1 proxy" }"#);
    }

    #[test]
    fn from_http_types() {
        let name = http::header::CONTENT_LENGTH;
        let value = http::HeaderValue::from_static("42");
        let field = HeaderField::from_pair(&name, &value);

        assert_eq!(field.name(), b"content-length");
        assert_eq!(field.value(), b"42");
    }
}
