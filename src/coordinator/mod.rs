//! Coordinators: the selection state machines behind every bar flavor.
//!
//! - [`SelectionCoordinator`]: top, lateral, tab and sliding bars.
//! - [`SlideSelectionCoordinator`]: sliding bar with a positional marker.
//! - [`FilterCoordinator`]: independent multi-selection filter chips.
//! - [`NeighborHighlightPropagator`]: adjacent-tab flags for tab bars.
//! - [`Commit`]: collects the visual changes of one interaction.

pub mod commit;
pub mod filter;
pub mod neighbor;
pub mod selection;
pub mod slide;
pub mod state;

pub use commit::Commit;
pub use filter::FilterCoordinator;
pub use neighbor::NeighborHighlightPropagator;
pub use selection::{SelectionChange, SelectionCoordinator};
pub use slide::SlideSelectionCoordinator;
pub use state::CoordinatorState;
