//! Station name lookup.
//!
//! Provides bare stop id → station name mapping, loaded from a CSV table
//! at startup.

mod error;
mod names;

pub use error::StationError;
pub use names::{StationNames, StationRow};
