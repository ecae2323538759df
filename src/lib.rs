//! # navkit
//!
//! Selection and submenu coordination for application chrome bars.
//!
//! navkit holds the state machine behind top navigation bars, lateral
//! navigation bars, tab bars, sliding selection bars and filter chips. It
//! decides which option is selected, which submenu is open, and which tabs
//! carry neighbor highlights, then tells an injected [`BarHost`] what to draw.
//! Rendering, theming and layout stay with the host.
//!
//! ## Core Systems
//!
//! - **[`coordinator`]**: selection engines per bar flavor, neighbor highlighting, commit batching
//! - **[`sizing`]**: fixed-size (animated extent) and responsive (visibility) submenu policies
//! - **[`submenu`]**: slotmap-backed submenu slots
//! - **[`option`]**: the selectable option type
//! - **[`event`]**: tap events, crossterm conversion, handler chains
//! - **[`host`]**: the rendering collaborator trait
//! - **[`config`]**: bar flavor and construction options
//! - **[`testing`]**: recording host, pilot, snapshot helpers
//!
//! ## Example
//!
//! ```ignore
//! use navkit::{BarConfig, BarOption, NullHost, SelectionCoordinator};
//!
//! let options = vec![BarOption::new("Home"), BarOption::new("Search")];
//! let mut bar = SelectionCoordinator::new(options, None, BarConfig::top(), NullHost)?;
//! bar.select_option(1)?;
//! assert_eq!(bar.current_label(), Some("Search"));
//! ```

// Foundation
pub mod error;
pub mod geometry;

// Building blocks
pub mod config;
pub mod event;
pub mod host;
pub mod option;
pub mod sizing;
pub mod submenu;

// Coordination
pub mod coordinator;

// Headless tooling
pub mod testing;

pub use config::{BarConfig, BarFlavor};
pub use coordinator::{
    CoordinatorState, FilterCoordinator, SelectionChange, SelectionCoordinator,
    SlideSelectionCoordinator,
};
pub use error::{BarError, ConfigurationError, HostError, InternalInvariantError};
pub use host::{BarHost, NullHost, OptionVisual};
pub use option::BarOption;

