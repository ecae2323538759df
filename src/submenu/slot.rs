//! Slot types: SlotId, SubmenuSpec, SubmenuSlot.

use slotmap::new_key_type;

use crate::geometry::Axis;

new_key_type! {
    /// Handle to a submenu slot in a [`SlotArena`](super::SlotArena).
    ///
    /// Stale after the slot is destroyed; lookups then return `None`.
    pub struct SlotId;
}

// ---------------------------------------------------------------------------
// SubmenuSpec
// ---------------------------------------------------------------------------

/// Construction input for one option's submenu.
///
/// Bars that mix options with and without submenus pass
/// [`SubmenuSpec::placeholder`] for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmenuSpec {
    max_extent: u32,
}

impl SubmenuSpec {
    /// A submenu that opens to `max_extent` units along its bar's axis.
    pub const fn new(max_extent: u32) -> Self {
        Self { max_extent }
    }

    /// A zero-size inert slot for an option without a submenu.
    pub const fn placeholder() -> Self {
        Self { max_extent: 0 }
    }

    /// The fully-open extent.
    pub const fn max_extent(&self) -> u32 {
        self.max_extent
    }
}

impl From<Option<u32>> for SubmenuSpec {
    fn from(value: Option<u32>) -> Self {
        value.map_or_else(Self::placeholder, Self::new)
    }
}

// ---------------------------------------------------------------------------
// SubmenuSlot
// ---------------------------------------------------------------------------

/// Runtime state of one submenu panel.
///
/// Fixed-size bars drive `current_extent`; responsive bars drive `visible`.
/// The other field is left untouched by the active sizing policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmenuSlot {
    max_extent: u32,
    current_extent: u32,
    visible: bool,
    axis: Axis,
    attached_option_index: usize,
}

impl SubmenuSlot {
    /// Create a closed slot attached to the option at `attached_option_index`.
    pub fn new(spec: SubmenuSpec, axis: Axis, attached_option_index: usize) -> Self {
        Self {
            max_extent: spec.max_extent,
            current_extent: 0,
            visible: false,
            axis,
            attached_option_index,
        }
    }

    /// The fully-open extent recorded at construction.
    pub fn max_extent(&self) -> u32 {
        self.max_extent
    }

    /// The current (target) extent under fixed-size sizing.
    pub fn current_extent(&self) -> u32 {
        self.current_extent
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The axis this slot grows along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Index of the option this slot belongs to.
    pub fn attached_option_index(&self) -> usize {
        self.attached_option_index
    }

    /// Whether this slot is a placeholder with nothing to show.
    pub fn is_inert(&self) -> bool {
        self.max_extent == 0
    }

    pub(crate) fn set_current_extent(&mut self, extent: u32) {
        self.current_extent = extent.min(self.max_extent);
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
