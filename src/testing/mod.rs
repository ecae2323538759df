//! Headless testing tools: a recording host, a bar pilot, snapshot helpers.
//!
//! Use [`RecordingHost`] to capture every call a coordinator makes, the
//! [`Pilot`] to drive a bar with simulated clicks and key presses, and
//! [`bar_to_string`] to turn bar state into text for snapshot assertions.

pub mod pilot;
pub mod recorder;
pub mod snapshot;

pub use pilot::Pilot;
pub use recorder::{HostCall, Journal, RecordingHost};
pub use snapshot::bar_to_string;
