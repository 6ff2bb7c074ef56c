//! Station table error types.

/// Errors that can occur when loading the station table.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The table file could not be opened
    #[error("failed to open station table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
