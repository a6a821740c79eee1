//! Which headers the caller handles itself when translating between HTTP/1 and HTTP/2.
//!
//! Some headers cannot be copied verbatim across a translation boundary: `via` has to be
//! extended with the local hop, `cookie` is split into crumbs on HTTP/2 and joined back
//! on HTTP/1. The normalizer skips them and leaves their synthesis to the caller. The
//! exact set is policy, so it is passed in as a [`BespokePolicy`] rather than fixed here.

/// Decides whether a header name needs bespoke handling by the caller.
pub trait BespokePolicy {
    fn is_bespoke(&self, name: &[u8]) -> bool;
}

impl<P: BespokePolicy + ?Sized> BespokePolicy for &P {
    fn is_bespoke(&self, name: &[u8]) -> bool {
        (**self).is_bespoke(name)
    }
}

/// A fixed list of header names, matched ASCII case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct BespokeSet {
    names: &'static [&'static str],
}

impl BespokeSet {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

impl BespokePolicy for BespokeSet {
    fn is_bespoke(&self, name: &[u8]) -> bool {
        self.names.iter().any(|bespoke| bespoke.as_bytes().eq_ignore_ascii_case(name))
    }
}

/// Headers skipped when building an HTTP/2 header block from a generic list.
pub const WIRE_BESPOKE: BespokeSet = BespokeSet::new(&["via"]);

/// Headers skipped when rendering HTTP/1 header lines.
pub const LEGACY_BESPOKE: BespokeSet = BespokeSet::new(&["via", "cookie"]);

/// A policy that treats no header as bespoke.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBespoke;

impl BespokePolicy for NoBespoke {
    fn is_bespoke(&self, _name: &[u8]) -> bool {
        false
    }
}

/// Adapts a closure into a [`BespokePolicy`], see [`policy_fn`].
#[derive(Debug, Clone, Copy)]
pub struct PolicyFn<F> {
    f: F,
}

impl<F> BespokePolicy for PolicyFn<F>
where
    F: Fn(&[u8]) -> bool,
{
    fn is_bespoke(&self, name: &[u8]) -> bool {
        (self.f)(name)
    }
}

pub fn policy_fn<F>(f: F) -> PolicyFn<F>
where
    F: Fn(&[u8]) -> bool,
{
    PolicyFn { f }
}
