//! Real-time train arrivals server.
//!
//! A web application that answers: "when is the next train at this
//! stop?", by decoding the agency's GTFS-Realtime feed on the client's
//! behalf.

pub mod arrivals;
pub mod cache;
pub mod config;
pub mod designated;
pub mod domain;
pub mod feed;
pub mod stations;
pub mod web;
