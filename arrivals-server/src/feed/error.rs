//! Feed error types.

/// The feed bytes are not a valid GTFS-Realtime `FeedMessage`.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode feed: {0}")]
pub struct DecodeError(#[from] prost::DecodeError);

/// Errors from obtaining and decoding the real-time feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed endpoint returned a non-success status
    #[error("feed returned status {status}")]
    Status { status: u16 },

    /// Reading a local feed file failed
    #[error("failed to read feed file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bytes arrived but did not decode
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl FeedError {
    /// Whether the failure happened while fetching bytes, as opposed to
    /// while decoding them.
    pub fn is_transport(&self) -> bool {
        !matches!(self, FeedError::Decode(_))
    }
}
