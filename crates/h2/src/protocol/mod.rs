//! Data model shared by the header and flow-control modules.
//!
//! - [`HeaderField`]: a borrowed name/value view, [`HeaderCollection`] an ordered list of them
//! - [`OwnedHeaderField`]: a header pair holding its own bytes
//! - [`StreamId`]: stream identifier, with `0` naming the connection
//! - [`status_phrase`] / [`status_line`]: reason phrases for HTTP/1 rendering
//! - [`copy_url_component`]: pseudo-header material from a parsed URI
//! - [`HeaderError`] / [`FlowControlError`]: errors of the result-returning entry points

mod field;
pub use field::HeaderCollection;
pub use field::HeaderField;
pub use field::OwnedHeaderField;

mod stream_id;
pub use stream_id::StreamId;

mod status;
pub use status::status_line;
pub use status::status_phrase;

mod url;
pub use url::UrlComponent;
pub use url::copy_url_component;

mod error;
pub use error::FlowControlError;
pub use error::HeaderError;
