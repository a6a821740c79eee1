//! Flow-control configuration.
//!
//! The update threshold trades WINDOW_UPDATE frequency against how much the peer can have
//! in flight before it stalls: a low percentage sends many small updates, a high one lets
//! the window run nearly dry before it is replenished.

use crate::ensure;
use crate::protocol::FlowControlError;

/// Initial window size for streams and the connection.
///
/// refer: <https://www.rfc-editor.org/rfc/rfc9113.html#section-6.9.2>
pub const DEFAULT_WINDOW_SIZE: u32 = 65_535;

/// Largest window a peer may be granted, 2^31 - 1.
pub const MAX_WINDOW_SIZE: u32 = 0x7fff_ffff;

/// The high-water mark, as a percentage of a window's initial size, at which consumed
/// bytes are credited back to the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateThreshold {
    percent: u8,
}

impl UpdateThreshold {
    /// Half of the window.
    pub const HALF: UpdateThreshold = UpdateThreshold { percent: 50 };

    /// # Errors
    ///
    /// Returns [`FlowControlError::InvalidThreshold`] unless `percent` is within `1..=100`.
    pub fn percent(percent: u8) -> Result<Self, FlowControlError> {
        ensure!((1..=100).contains(&percent), FlowControlError::invalid_threshold(percent));
        Ok(Self { percent })
    }

    pub fn as_percent(self) -> u8 {
        self.percent
    }

    /// Number of consumed bytes at which an update becomes due for a window of
    /// `window` bytes.
    pub fn high_water_mark(self, window: u32) -> u32 {
        let mark = u64::from(window) * u64::from(self.percent) / 100;
        // mark <= window since percent <= 100
        u32::try_from(mark).unwrap_or(window)
    }
}

impl Default for UpdateThreshold {
    fn default() -> Self {
        Self::HALF
    }
}

/// Window sizes and update threshold shared by every window of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowControlConfig {
    initial_window_size: u32,
    connection_window_size: u32,
    update_threshold: UpdateThreshold,
}

impl FlowControlConfig {
    pub const fn new() -> Self {
        Self {
            initial_window_size: DEFAULT_WINDOW_SIZE,
            connection_window_size: DEFAULT_WINDOW_SIZE,
            update_threshold: UpdateThreshold::HALF,
        }
    }

    /// Sets the receive window advertised for each new stream.
    ///
    /// # Errors
    ///
    /// Returns [`FlowControlError::WindowTooLarge`] if `size` exceeds [`MAX_WINDOW_SIZE`].
    pub fn with_initial_window_size(mut self, size: u32) -> Result<Self, FlowControlError> {
        ensure!(size <= MAX_WINDOW_SIZE, FlowControlError::window_too_large(size, MAX_WINDOW_SIZE));
        self.initial_window_size = size;
        Ok(self)
    }

    /// Sets the receive window of the connection as a whole.
    ///
    /// # Errors
    ///
    /// Returns [`FlowControlError::WindowTooLarge`] if `size` exceeds [`MAX_WINDOW_SIZE`].
    pub fn with_connection_window_size(mut self, size: u32) -> Result<Self, FlowControlError> {
        ensure!(size <= MAX_WINDOW_SIZE, FlowControlError::window_too_large(size, MAX_WINDOW_SIZE));
        self.connection_window_size = size;
        Ok(self)
    }

    #[must_use]
    pub fn with_update_threshold(mut self, threshold: UpdateThreshold) -> Self {
        self.update_threshold = threshold;
        self
    }

    pub fn initial_window_size(&self) -> u32 {
        self.initial_window_size
    }

    pub fn connection_window_size(&self) -> u32 {
        self.connection_window_size
    }

    pub fn update_threshold(&self) -> UpdateThreshold {
        self.update_threshold
    }
}

impl Default for FlowControlConfig {
    fn default() -> Self {
        Self::new()
    }
}
