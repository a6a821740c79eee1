//! Header field processing for both directions of an HTTP/2 stream
//!
//! # Components
//!
//! - validation: byte-level checks and the connection-specific
//!   header names HTTP/2 forbids
//!   - [`is_legal_value`], [`is_allowed_header_name`], [`all_allowed`]
//!   - [`validate_inbound`] for callers that want a reason instead of a boolean
//!
//! - normalization: wire-legal header sets from generic header lists
//!   - [`filter_to_wire`] drops disallowed, CR/LF-carrying and bespoke headers, zero copy
//!   - [`capitalize_token`] and [`sanitize_value`] rewrite buffers in place
//!
//! - ordering: canonical form of decoded header sets
//!   - [`sort_and_split`] orders by name and splits NUL-joined values
//!   - [`find_unique`], [`find_first`], [`find_all`] linear lookups
//!
//! - HTTP/1 rendering: [`render_as_legacy_text`] and [`LegacyHeaderEncoder`]
//!
//! - policy: [`BespokePolicy`] decides which headers the caller synthesizes itself
//!
//! # Validation
//!
//! Inbound header sets are checked with predicates; the session decides whether a failure
//! drops a header, resets the stream or ends the connection. Outbound paths filter instead
//! of rejecting, and compatibility rendering sanitizes instead of failing.

mod legacy_encoder;
mod normalizer;
mod orderer;
mod policy;
mod validator;

pub use validator::DISALLOWED_HEADERS;
pub use validator::DisallowSet;
pub use validator::all_allowed;
pub use validator::all_legal;
pub use validator::is_allowed_header_name;
pub use validator::is_legal_value;
pub use validator::is_lws_value;
pub use validator::is_non_empty_value;
pub use validator::validate_inbound;

pub use normalizer::capitalize_token;
pub use normalizer::filter_to_wire;
pub use normalizer::sanitize_value;

pub use orderer::find_all;
pub use orderer::find_first;
pub use orderer::find_unique;
pub use orderer::sort_and_split;

pub use legacy_encoder::LegacyHeaderEncoder;
pub use legacy_encoder::dump_headers;
pub use legacy_encoder::render_as_legacy_text;

pub use policy::BespokePolicy;
pub use policy::BespokeSet;
pub use policy::LEGACY_BESPOKE;
pub use policy::NoBespoke;
pub use policy::PolicyFn;
pub use policy::WIRE_BESPOKE;
pub use policy::policy_fn;
