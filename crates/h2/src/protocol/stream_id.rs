use std::fmt;

/// Identifier of an HTTP/2 stream.
///
/// Stream `0` is reserved for the connection itself, see [`StreamId::CONNECTION`].
/// The reserved high bit is cleared on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StreamId(u32);

impl StreamId {
    /// The connection-level identifier.
    pub const CONNECTION: StreamId = StreamId(0);

    const MASK: u32 = 0x7fff_ffff;

    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id & Self::MASK)
    }

    #[inline]
    pub const fn is_connection(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for StreamId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
