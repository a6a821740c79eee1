//! The WINDOW_UPDATE decision.
//!
//! The session owns the windows; [`FlowController`] only looks at them through the
//! [`WindowAccounting`] seam and tells the caller how large an increment to send, if any.
//! Encoding the WINDOW_UPDATE frame is left to the frame codec.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace, warn};

use crate::ensure;
use crate::flow::config::{FlowControlConfig, UpdateThreshold};
use crate::flow::window::WindowState;
use crate::protocol::{FlowControlError, StreamId};

/// Access to the receive windows a session keeps for its streams and itself.
pub trait WindowAccounting {
    /// Returns the window of `stream_id`, or of the connection for
    /// [`StreamId::CONNECTION`]. `None` if the stream is unknown.
    fn window_mut(&mut self, stream_id: StreamId) -> Option<&mut WindowState>;
}

impl<A: WindowAccounting + ?Sized> WindowAccounting for &mut A {
    fn window_mut(&mut self, stream_id: StreamId) -> Option<&mut WindowState> {
        (**self).window_mut(stream_id)
    }
}

/// Decides when consumed bytes are credited back to the peer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowController {
    threshold: UpdateThreshold,
}

impl FlowController {
    pub fn new(config: FlowControlConfig) -> Self {
        Self { threshold: config.update_threshold() }
    }

    pub fn with_threshold(threshold: UpdateThreshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> UpdateThreshold {
        self.threshold
    }

    /// Returns the WINDOW_UPDATE increment due for `stream_id`, or `None` if no update is
    /// needed yet. [`StreamId::CONNECTION`] evaluates the connection window.
    ///
    /// An update is due once the bytes consumed since the last one reach the high-water
    /// mark. Returning it resets the deficit to zero and the advertised window to its
    /// initial size, so polling again without new consumption returns `None`.
    pub fn decide_update<A>(&self, accounting: &mut A, stream_id: StreamId) -> Option<u32>
    where
        A: WindowAccounting + ?Sized,
    {
        let Some(window) = accounting.window_mut(stream_id) else {
            warn!(%stream_id, "window update requested for unknown stream");
            return None;
        };

        match window.take_update(self.threshold) {
            Some(increment) => {
                debug!(%stream_id, increment, "window update due");
                Some(increment)
            }
            None => {
                trace!(%stream_id, deficit = window.deficit(), "window update not needed");
                None
            }
        }
    }
}

/// Receive windows of one connection and its open streams.
///
/// A ready-made [`WindowAccounting`] for sessions that do not keep windows themselves.
#[derive(Debug, Clone)]
pub struct WindowRegistry {
    config: FlowControlConfig,
    connection: WindowState,
    streams: HashMap<StreamId, WindowState>,
}

impl WindowRegistry {
    pub fn new(config: FlowControlConfig) -> Self {
        Self {
            config,
            connection: WindowState::new(config.connection_window_size()),
            streams: HashMap::new(),
        }
    }

    /// Starts accounting for `stream_id` with the configured initial window.
    ///
    /// # Errors
    ///
    /// Returns [`FlowControlError::StreamExists`] if the stream is already open or is
    /// the connection identifier.
    pub fn open_stream(&mut self, stream_id: StreamId) -> Result<(), FlowControlError> {
        ensure!(!stream_id.is_connection(), FlowControlError::stream_exists(stream_id));

        match self.streams.entry(stream_id) {
            Entry::Occupied(_) => Err(FlowControlError::stream_exists(stream_id)),
            Entry::Vacant(entry) => {
                entry.insert(WindowState::new(self.config.initial_window_size()));
                Ok(())
            }
        }
    }

    /// Stops accounting for `stream_id`, returning its last state.
    pub fn close_stream(&mut self, stream_id: StreamId) -> Option<WindowState> {
        self.streams.remove(&stream_id)
    }

    /// Accounts `n_bytes` of DATA received on `stream_id`.
    ///
    /// Stream data counts against both the stream and the connection window;
    /// [`StreamId::CONNECTION`] only touches the connection window.
    ///
    /// # Errors
    ///
    /// Returns [`FlowControlError::UnknownStream`] if the stream is not open.
    pub fn record_data(&mut self, stream_id: StreamId, n_bytes: u32) -> Result<(), FlowControlError> {
        if !stream_id.is_connection() {
            let stream = self.streams.get_mut(&stream_id).ok_or_else(|| FlowControlError::unknown_stream(stream_id))?;
            stream.record_consumption(n_bytes);
        }
        self.connection.record_consumption(n_bytes);
        Ok(())
    }

    pub fn contains(&self, stream_id: StreamId) -> bool {
        stream_id.is_connection() || self.streams.contains_key(&stream_id)
    }

    pub fn connection(&self) -> &WindowState {
        &self.connection
    }

    pub fn stream(&self, stream_id: StreamId) -> Option<&WindowState> {
        self.streams.get(&stream_id)
    }

    /// Number of open streams.
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

impl WindowAccounting for WindowRegistry {
    fn window_mut(&mut self, stream_id: StreamId) -> Option<&mut WindowState> {
        if stream_id.is_connection() {
            Some(&mut self.connection)
        } else {
            self.streams.get_mut(&stream_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::config::MAX_WINDOW_SIZE;

    fn config(window: u32) -> FlowControlConfig {
        FlowControlConfig::new()
            .with_initial_window_size(window)
            .and_then(|config| config.with_connection_window_size(window * 4))
            .unwrap()
    }

    #[test]
    fn stream_update_after_high_water_mark() {
        let config = config(100);
        let controller = FlowController::new(config);
        let mut windows = WindowRegistry::new(config);
        let stream = StreamId::new(1);
        windows.open_stream(stream).unwrap();

        windows.record_data(stream, 60).unwrap();
        assert_eq!(controller.decide_update(&mut windows, stream), Some(60));
        assert_eq!(windows.stream(stream).unwrap().deficit(), 0);
        assert_eq!(windows.stream(stream).unwrap().advertised_window(), 100);

        assert_eq!(controller.decide_update(&mut windows, stream), None);
    }

    #[test]
    fn below_mark_is_not_due() {
        let config = config(100);
        let controller = FlowController::new(config);
        let mut windows = WindowRegistry::new(config);
        let stream = StreamId::new(3);
        windows.open_stream(stream).unwrap();

        windows.record_data(stream, 20).unwrap();
        assert_eq!(controller.decide_update(&mut windows, stream), None);
        assert_eq!(windows.stream(stream).unwrap().deficit(), 20);

        windows.record_data(stream, 30).unwrap();
        assert_eq!(controller.decide_update(&mut windows, stream), Some(50));
    }

    #[test]
    fn connection_window_is_evaluated_separately() {
        let config = config(100);
        let controller = FlowController::new(config);
        let mut windows = WindowRegistry::new(config);

        for id in [1, 3, 5] {
            let stream = StreamId::new(id);
            windows.open_stream(stream).unwrap();
            windows.record_data(stream, 70).unwrap();
            assert_eq!(controller.decide_update(&mut windows, stream), Some(70));
        }

        // 210 of 400 consumed on the connection
        assert_eq!(windows.connection().deficit(), 210);
        assert_eq!(controller.decide_update(&mut windows, StreamId::CONNECTION), Some(210));
        assert_eq!(controller.decide_update(&mut windows, StreamId::CONNECTION), None);
        assert_eq!(windows.connection().advertised_window(), 400);
    }

    #[test]
    fn connection_level_data() {
        let config = config(100);
        let mut windows = WindowRegistry::new(config);
        windows.record_data(StreamId::CONNECTION, 10).unwrap();
        assert_eq!(windows.connection().deficit(), 10);
    }

    #[test]
    fn configurable_threshold() {
        let threshold = UpdateThreshold::percent(10).unwrap();
        let config = config(1000).with_update_threshold(threshold);
        let controller = FlowController::new(config);
        assert_eq!(controller.threshold(), threshold);

        let mut windows = WindowRegistry::new(config);
        let stream = StreamId::new(1);
        windows.open_stream(stream).unwrap();

        windows.record_data(stream, 99).unwrap();
        assert_eq!(controller.decide_update(&mut windows, stream), None);
        windows.record_data(stream, 1).unwrap();
        assert_eq!(controller.decide_update(&mut windows, stream), Some(100));
    }

    #[test]
    fn overrunning_peer_gets_a_legal_increment() {
        let config = FlowControlConfig::new().with_initial_window_size(MAX_WINDOW_SIZE).unwrap();
        let controller = FlowController::new(config);
        let mut windows = WindowRegistry::new(config);
        let stream = StreamId::new(1);
        windows.open_stream(stream).unwrap();

        windows.record_data(stream, MAX_WINDOW_SIZE).unwrap();
        windows.record_data(stream, MAX_WINDOW_SIZE).unwrap();

        assert_eq!(controller.decide_update(&mut windows, stream), Some(MAX_WINDOW_SIZE));
        assert_eq!(controller.decide_update(&mut windows, StreamId::CONNECTION), Some(MAX_WINDOW_SIZE));
    }

    #[test]
    fn unknown_streams() {
        let controller = FlowController::default();
        let mut windows = WindowRegistry::new(FlowControlConfig::default());

        assert_eq!(controller.decide_update(&mut windows, StreamId::new(7)), None);
        assert_eq!(windows.record_data(StreamId::new(7), 1), Err(FlowControlError::UnknownStream { stream_id: StreamId::new(7) }));
        assert_eq!(windows.connection().deficit(), 0);
    }

    #[test]
    fn stream_lifecycle() {
        let mut windows = WindowRegistry::new(FlowControlConfig::default());
        let stream = StreamId::new(1);

        assert!(windows.is_empty());
        windows.open_stream(stream).unwrap();
        assert!(windows.contains(stream));
        assert_eq!(windows.open_stream(stream), Err(FlowControlError::StreamExists { stream_id: stream }));
        assert_eq!(
            windows.open_stream(StreamId::CONNECTION),
            Err(FlowControlError::StreamExists { stream_id: StreamId::CONNECTION })
        );
        assert_eq!(windows.len(), 1);

        windows.record_data(stream, 5).unwrap();
        assert_eq!(windows.close_stream(stream).map(|w| w.deficit()), Some(5));
        assert!(!windows.contains(stream));
        assert!(windows.close_stream(stream).is_none());
        assert!(windows.contains(StreamId::CONNECTION));
    }

    #[test]
    fn custom_accounting() {
        struct Single(WindowState);

        impl WindowAccounting for Single {
            fn window_mut(&mut self, stream_id: StreamId) -> Option<&mut WindowState> {
                stream_id.is_connection().then_some(&mut self.0)
            }
        }

        let controller = FlowController::with_threshold(UpdateThreshold::HALF);
        let mut session = Single(WindowState::new(100));
        session.0.record_consumption(100);

        assert_eq!(controller.decide_update(&mut session, StreamId::new(1)), None);
        assert_eq!(controller.decide_update(&mut &mut session, StreamId::CONNECTION), Some(100));
    }
}
