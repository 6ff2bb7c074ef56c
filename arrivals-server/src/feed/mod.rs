//! GTFS-Realtime feed access.
//!
//! This module fetches the agency's real-time feed and decodes it into
//! domain types.
//!
//! Key characteristics of the feed:
//! - It is a single protobuf `FeedMessage` covering every trip on the
//!   published lines, so one fetch answers any stop
//! - Stop ids carry a direction suffix (`N`/`S`)
//! - Times are POSIX seconds; a missing arrival is a real absence, not zero

mod decode;
mod error;
pub mod proto;
mod source;

pub use decode::decode_feed;
pub use error::{DecodeError, FeedError};
pub use source::{DEFAULT_FEED_URL, FeedConfig, FeedSource, FileFeedSource, HttpFeedSource};
