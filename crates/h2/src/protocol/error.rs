use std::io;
use thiserror::Error;

use crate::protocol::StreamId;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("header {name:?} is not allowed in HTTP/2")]
    Disallowed { name: String },

    #[error("header {name:?} has a value containing CR or LF")]
    IllegalValue { name: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl HeaderError {
    pub fn disallowed<N: AsRef<[u8]>>(name: N) -> Self {
        Self::Disallowed { name: String::from_utf8_lossy(name.as_ref()).into_owned() }
    }

    pub fn illegal_value<N: AsRef<[u8]>>(name: N) -> Self {
        Self::IllegalValue { name: String::from_utf8_lossy(name.as_ref()).into_owned() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowControlError {
    #[error("update threshold must be within 1..=100 percent, got {percent}")]
    InvalidThreshold { percent: u8 },

    #[error("window size {size} exceed the limit {max}")]
    WindowTooLarge { size: u32, max: u32 },

    #[error("stream {stream_id} is not registered")]
    UnknownStream { stream_id: StreamId },

    #[error("stream {stream_id} is already registered")]
    StreamExists { stream_id: StreamId },
}

impl FlowControlError {
    pub fn invalid_threshold(percent: u8) -> Self {
        Self::InvalidThreshold { percent }
    }

    pub fn window_too_large(size: u32, max: u32) -> Self {
        Self::WindowTooLarge { size, max }
    }

    pub fn unknown_stream(stream_id: StreamId) -> Self {
        Self::UnknownStream { stream_id }
    }

    pub fn stream_exists(stream_id: StreamId) -> Self {
        Self::StreamExists { stream_id }
    }
}
