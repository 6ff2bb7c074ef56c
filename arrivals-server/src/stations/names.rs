//! Station name lookup.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::error::StationError;

/// One row of the station table. Other columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRow {
    #[serde(rename = "GTFS Stop ID")]
    pub stop_id: String,
    #[serde(rename = "Stop Name")]
    pub name: String,
}

/// Stop id → station name mapping.
///
/// Keys are bare stop ids without the direction suffix (`"127"`, not
/// `"127N"`). Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StationNames {
    names: HashMap<String, String>,
}

impl StationNames {
    /// Create an empty lookup. Every destination falls back to its stop id.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the table from a CSV file with `GTFS Stop ID` and `Stop Name`
    /// columns.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| StationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load the table from CSV data.
    pub fn from_reader(reader: impl Read) -> Result<Self, StationError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();
        for row in rdr.deserialize::<StationRow>() {
            rows.push(row?);
        }
        Ok(Self::from_rows(rows))
    }

    /// Build the lookup from parsed rows.
    pub fn from_rows(rows: impl IntoIterator<Item = StationRow>) -> Self {
        Self {
            names: build_map(rows),
        }
    }

    /// Look up a station name by bare stop id.
    pub fn get(&self, stop_id: &str) -> Option<&str> {
        self.names.get(stop_id).map(String::as_str)
    }

    /// Get the number of stations in the lookup.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the lookup is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Build the id → name map. Later rows win over earlier ones.
fn build_map(rows: impl IntoIterator<Item = StationRow>) -> HashMap<String, String> {
    rows.into_iter()
        .filter_map(|row| {
            let stop_id = row.stop_id.trim();
            if stop_id.is_empty() {
                return None;
            }
            Some((stop_id.to_string(), row.name))
        })
        .collect()
}
