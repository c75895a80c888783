//! Asynchronous memory latency modeling.
//!
//! Load and store operations are modeled as opaque latency events: issuing
//! one schedules a completion at a future cycle and nothing else. Data
//! movement happens architecturally at issue time; this module only tracks
//! occupancy.

/// Fire-and-forget timed completion events.
pub mod latency;

pub use latency::{MemoryLatency, RequestId};
