//! The sizing strategy seam between coordinators and slots.

use std::fmt;

use crate::error::HostError;
use crate::host::BarHost;
use crate::submenu::{SlotId, SubmenuSlot};

use super::animation::AnimationSpec;
use super::fixed::FixedSize;
use super::responsive::ResponsiveOverlay;

// ---------------------------------------------------------------------------
// SizingMode
// ---------------------------------------------------------------------------

/// Which sizing strategy a bar uses. Chosen once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizingMode {
    /// The bar has a concrete pixel size; submenus animate their extent.
    #[default]
    FixedSize,
    /// The bar expands inside a flexible layout; submenus are shown or hidden.
    ResponsiveOverlay,
}

impl SizingMode {
    /// Build the policy object for this mode.
    ///
    /// `bar_extent` is only meaningful for [`SizingMode::FixedSize`].
    pub fn policy(self, bar_extent: u32, animation: AnimationSpec) -> Box<dyn SizingPolicy> {
        match self {
            SizingMode::FixedSize => Box::new(FixedSize::new(bar_extent, animation)),
            SizingMode::ResponsiveOverlay => Box::new(ResponsiveOverlay::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// SizingPolicy
// ---------------------------------------------------------------------------

/// Strategy that turns open/close requests on a slot into state changes and
/// host calls.
///
/// Every method is a no-op for inert (zero-extent) slots and for slots already
/// in the requested state. Host failures are returned; slot state is updated
/// before the host is called and stays updated either way.
pub trait SizingPolicy: fmt::Debug {
    /// The mode this policy implements.
    fn mode(&self) -> SizingMode;

    /// Open `slot` with this policy's transition.
    fn open(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError>;

    /// Close `slot` with this policy's transition.
    fn close(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError>;

    /// Put `slot` into the open or closed state without animating.
    ///
    /// Used when required-selection bars swap which submenu is attached.
    fn snap(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        open: bool,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError>;

    /// Whether `slot` currently counts as open under this policy.
    fn is_open(&self, slot: &SubmenuSlot) -> bool;

    /// The bar's own principal dimension, if this policy fixes one.
    fn bar_extent(&self) -> Option<u32> {
        None
    }
}

// ===========================================================================
// Tests
// ===========================================================================
