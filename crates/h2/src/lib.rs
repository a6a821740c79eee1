//! Header field normalization and flow-control decisions for HTTP/2
//!
//! This crate holds the parts of an HTTP/2 stack that sit between the frame codec
//! and the session state machine. It never touches a socket, never decodes a frame
//! and never compresses a header block: it works on header name/value byte pairs that
//! were already decoded elsewhere, and on integer window counters owned by the session.
//!
//! # Features
//!
//! - Byte-level legality checks for header names and values
//! - The fixed set of connection-specific headers HTTP/2 forbids on the wire
//! - Filtering and translation of generic header lists into wire-legal sets
//! - HTTP/1 style rendering for peers that still speak the text protocol
//! - Canonical ordering of header sets, splitting NUL-joined multi-values
//! - Window update decisions for streams and the connection
//!
//! # Example
//!
//! ```
//! use micro_h2::header::{filter_to_wire, find_first, find_unique, WIRE_BESPOKE};
//!
//! let upstream = vec![
//!     ("Connection".to_string(), "keep-alive".to_string()),
//!     ("X-A".to_string(), "1".to_string()),
//!     ("X-A".to_string(), "2".to_string()),
//! ];
//!
//! let wire = filter_to_wire(&upstream, &WIRE_BESPOKE);
//! assert_eq!(wire.len(), 2);
//! assert_eq!(find_first(&wire, b"X-A").map(|h| h.value()), Some(&b"1"[..]));
//! assert!(find_unique(&wire, b"X-A").is_none());
//! ```
//!
//! ```
//! use micro_h2::flow::{FlowControlConfig, FlowController, WindowRegistry};
//! use micro_h2::protocol::StreamId;
//!
//! let config = FlowControlConfig::default();
//! let controller = FlowController::new(config);
//! let mut windows = WindowRegistry::new(config);
//!
//! let stream = StreamId::new(1);
//! windows.open_stream(stream).unwrap();
//! windows.record_data(stream, 40_000).unwrap();
//!
//! assert_eq!(controller.decide_update(&mut windows, stream), Some(40_000));
//! assert_eq!(controller.decide_update(&mut windows, stream), None);
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: header field views, stream ids, status phrases and error types
//! - [`header`]: validation, normalization, ordering and HTTP/1 rendering
//! - [`flow`]: flow-control configuration, window state and the update decision
//!
//! # Ownership
//!
//! [`protocol::HeaderField`] is a pair of borrowed byte slices. Every function that
//! produces header sets without deriving new bytes hands back views into the caller's
//! storage, so the borrow checker keeps the storage alive for as long as the views are.
//! Derived values (capitalized names, sanitized values) are written into buffers the
//! caller owns.
//!
//! # Concurrency
//!
//! Nothing in this crate blocks, suspends or performs I/O. Window state and header
//! collections belong to one stream or connection and are processed by one thread at
//! a time; sharing them across threads needs external synchronization.

pub mod flow;
pub mod header;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
