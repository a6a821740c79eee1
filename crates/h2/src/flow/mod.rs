//! Receive-side flow control for streams and the connection.
//!
//! Every DATA frame shrinks the receiver's window by its length; the receiver replenishes
//! it with WINDOW_UPDATE. Sending an update per frame floods the peer with tiny frames,
//! waiting until the window is empty stalls the sender for a round trip. The decision
//! here sits in between: once the bytes consumed since the last update reach a
//! configurable share of the window (half by default), all of them are credited back at
//! once.
//!
//! - [`FlowControlConfig`] / [`UpdateThreshold`]: window sizes and the high-water mark
//! - [`WindowState`]: counters of one stream or of the connection
//! - [`FlowController`]: the update decision, through the [`WindowAccounting`] seam
//! - [`WindowRegistry`]: windows of a connection and its streams

mod config;
pub use config::DEFAULT_WINDOW_SIZE;
pub use config::FlowControlConfig;
pub use config::MAX_WINDOW_SIZE;
pub use config::UpdateThreshold;

mod window;
pub use window::WindowState;

mod controller;
pub use controller::FlowController;
pub use controller::WindowAccounting;
pub use controller::WindowRegistry;
