//! Sizing policies: how a submenu's open/close request is realized.
//!
//! - [`FixedSize`] animates the slot's extent between 0 and its maximum.
//! - [`ResponsiveOverlay`] toggles visibility inside a flexible region.
//! - [`Transition`] and [`Curve`] describe the animations handed to the host.

pub mod animation;
pub mod fixed;
pub mod policy;
pub mod responsive;

pub use animation::{AnimationSpec, Curve, Transition};
pub use fixed::FixedSize;
pub use policy::{SizingMode, SizingPolicy};
pub use responsive::ResponsiveOverlay;
