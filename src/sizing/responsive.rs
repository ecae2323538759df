//! Responsive policy: submenus are shown or hidden inside a flexible region.

use tracing::trace;

use crate::error::HostError;
use crate::host::BarHost;
use crate::submenu::{SlotId, SubmenuSlot};

use super::policy::{SizingMode, SizingPolicy};

/// Toggles `visible`; the surrounding flex layout resizes instantly.
///
/// `current_extent` is never read or written and no dimension animation is
/// ever requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponsiveOverlay;

impl ResponsiveOverlay {
    pub fn new() -> Self {
        Self
    }

    fn show(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        visible: bool,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError> {
        if slot.is_inert() || slot.is_visible() == visible {
            return Ok(());
        }
        slot.set_visible(visible);
        trace!(slot = slot.attached_option_index(), visible, "responsive slot transition");
        host.set_visible(id, visible)
    }
}

impl SizingPolicy for ResponsiveOverlay {
    fn mode(&self) -> SizingMode {
        SizingMode::ResponsiveOverlay
    }

    fn open(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError> {
        self.show(id, slot, true, host)
    }

    fn close(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError> {
        self.show(id, slot, false, host)
    }

    fn snap(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        open: bool,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError> {
        self.show(id, slot, open, host)
    }

    fn is_open(&self, slot: &SubmenuSlot) -> bool {
        !slot.is_inert() && slot.is_visible()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
