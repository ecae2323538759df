//! CoordinatorState: the options, slots and selection of one bar.

use crate::error::InternalInvariantError;
use crate::geometry::{Axis, Offset};
use crate::option::BarOption;
use crate::submenu::{SlotArena, SlotId, SubmenuSlot, SubmenuSpec};

/// Everything a coordinator mutates. Read-only outside the coordinator.
///
/// `options` keeps insertion order, which is visual order. When the bar has
/// submenus, `slots[i]` is the slot of `options[i]`; absent submenus are
/// stored as inert placeholders so the mapping stays dense.
#[derive(Debug)]
pub struct CoordinatorState {
    pub(crate) options: Vec<BarOption>,
    pub(crate) slots: Option<Vec<SlotId>>,
    pub(crate) arena: SlotArena,
    pub(crate) selected: Option<usize>,
    pub(crate) master_open: bool,
    pub(crate) flex_factor: Option<u16>,
    pub(crate) indicator: Option<Offset>,
}

impl CoordinatorState {
    /// Build state from options and optional submenus.
    ///
    /// Assigns dense indices and sets the initial selection flag. Inputs are
    /// expected to have been validated already.
    pub(crate) fn new(
        mut options: Vec<BarOption>,
        submenus: Option<Vec<SubmenuSpec>>,
        axis: Axis,
        selected: Option<usize>,
    ) -> Self {
        for (i, option) in options.iter_mut().enumerate() {
            option.set_index(i);
            option.set_selected(Some(i) == selected);
        }

        let mut arena = SlotArena::new();
        let slots = submenus.map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, spec)| arena.insert(SubmenuSlot::new(spec, axis, i)))
                .collect()
        });

        Self {
            options,
            slots,
            arena,
            selected,
            master_open: false,
            flex_factor: None,
            indicator: None,
        }
    }

    /// Fail with a range error unless `index` names an option.
    pub fn check_index(&self, index: usize) -> Result<(), InternalInvariantError> {
        if index < self.options.len() {
            Ok(())
        } else {
            Err(InternalInvariantError::IndexOutOfRange {
                index,
                len: self.options.len(),
            })
        }
    }

    pub fn options(&self) -> &[BarOption] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<&BarOption> {
        self.options.get(index)
    }

    /// Number of options. Fixed after construction.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false` for a constructed bar; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The selected option, or `None` when nothing is selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// How many options have their `selected` flag set.
    pub fn selected_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_selected()).count()
    }

    /// Whether the bar was built with submenus.
    pub fn has_submenus(&self) -> bool {
        self.slots.is_some()
    }

    /// Handle of the slot attached to the option at `index`.
    ///
    /// The handle may be stale if the slot was destroyed.
    pub fn slot_id(&self, index: usize) -> Option<SlotId> {
        self.slots.as_ref()?.get(index).copied()
    }

    /// The live slot attached to the option at `index`.
    pub fn slot(&self, index: usize) -> Option<&SubmenuSlot> {
        self.arena.get(self.slot_id(index)?)
    }

    pub fn arena(&self) -> &SlotArena {
        &self.arena
    }

    /// State of the master submenu toggle.
    pub fn master_open(&self) -> bool {
        self.master_open
    }

    /// The bar's current flex factor; `None` for fixed-size bars.
    pub fn flex_factor(&self) -> Option<u16> {
        self.flex_factor
    }

    /// Position of the sliding marker; `None` for bars without one.
    pub fn indicator_offset(&self) -> Option<Offset> {
        self.indicator
    }

    /// Label of the selected option.
    pub fn current_label(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(BarOption::label)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
