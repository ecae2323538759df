//! Error types for bar construction, coordination, and host collaboration.
//!
//! [`ConfigurationError`] is returned by constructors before any state exists.
//! [`InternalInvariantError`] signals a caller bug at runtime, such as an index
//! that did not come from the option list. [`HostError`] is produced by the
//! widget layer; the coordinator logs it and carries on.

use crate::config::BarFlavor;
use crate::submenu::SlotId;

/// Errors detected while validating a bar's construction inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("a bar needs at least one option")]
    NoOptions,
    #[error(
        "initial selection {index:?} is out of range for {len} options{}",
        none_hint(.allows_none)
    )]
    InitialIndexOutOfRange {
        index: Option<usize>,
        len: usize,
        allows_none: bool,
    },
    #[error("{submenus} submenus were given for {options} options")]
    SubmenuCountMismatch { options: usize, submenus: usize },
    #[error("{flavor:?} bars do not support submenus")]
    SubmenusNotSupported { flavor: BarFlavor },
    #[error("fixed bar extent must be positive, got {extent}")]
    InvalidFixedExtent { extent: u32 },
    #[error("filter {index} is selected more than once")]
    DuplicateFilterIndex { index: usize },
    #[error("filter {index} is out of range for {len} filters")]
    FilterIndexOutOfRange { index: usize, len: usize },
}

fn none_hint(allows_none: &bool) -> &'static str {
    if *allows_none {
        " (none is allowed)"
    } else {
        ""
    }
}

/// Broken runtime contracts. These are programming errors, never user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalInvariantError {
    #[error("option index {index} is out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("this bar has no master submenu toggle")]
    MasterToggleUnavailable,
}

/// Failures reported by the host while applying a visual transition.
///
/// Non-fatal: the transition is dropped and the commit still happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("submenu slot {0:?} no longer exists")]
    SlotDestroyed(SlotId),
    #[error("host rejected the request: {0}")]
    Rejected(String),
}

/// Umbrella error for callers that construct and drive bars in one place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BarError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Invariant(#[from] InternalInvariantError),
}

// ===========================================================================
// Tests
// ===========================================================================
