use crate::flow::config::{MAX_WINDOW_SIZE, UpdateThreshold};

/// Receive-side accounting for one stream or for the connection.
///
/// A window is either credited (nothing owed to the peer) or deficit-pending (consumed
/// bytes reached the high-water mark). It moves to deficit-pending through
/// [`record_consumption`](Self::record_consumption) and back to credited only when
/// [`take_update`](Self::take_update) hands out the increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    initial_window: u32,
    advertised_window: u32,
    consumed: u32,
}

impl WindowState {
    pub fn new(initial_window: u32) -> Self {
        Self { initial_window, advertised_window: initial_window, consumed: 0 }
    }

    /// Accounts `n_bytes` of received data. Pure bookkeeping.
    ///
    /// The deficit is capped at [`MAX_WINDOW_SIZE`], the largest increment a WINDOW_UPDATE
    /// can carry. A peer sending past its window is a protocol error for the session to
    /// detect, not something to credit back.
    pub fn record_consumption(&mut self, n_bytes: u32) {
        self.consumed = self.consumed.saturating_add(n_bytes).min(MAX_WINDOW_SIZE);
        self.advertised_window = self.advertised_window.saturating_sub(n_bytes);
    }

    /// Bytes received and not yet credited back to the peer.
    #[inline]
    pub fn deficit(&self) -> u32 {
        self.consumed
    }

    /// The window the peer currently believes it has.
    #[inline]
    pub fn advertised_window(&self) -> u32 {
        self.advertised_window
    }

    #[inline]
    pub fn initial_window(&self) -> u32 {
        self.initial_window
    }

    pub fn is_deficit_pending(&self, threshold: UpdateThreshold) -> bool {
        self.consumed > 0 && self.consumed >= threshold.high_water_mark(self.initial_window)
    }

    /// Returns the increment to send if the deficit reached the high-water mark, and
    /// restores the window to its initial size.
    ///
    /// Polling again without new consumption returns `None`.
    pub fn take_update(&mut self, threshold: UpdateThreshold) -> Option<u32> {
        if !self.is_deficit_pending(threshold) {
            return None;
        }

        let increment = self.consumed;
        self.consumed = 0;
        self.advertised_window = self.initial_window;
        Some(increment)
    }
}
