//! Bar options: the peer-selectable elements of a bar.
//!
//! A [`BarOption`] is the same struct for every bar flavor. Flags a flavor
//! does not use (adjacency on a lateral bar, say) simply stay `false`.

use std::fmt;

use crate::event::{HandlerChain, TapEvent};
use crate::host::OptionVisual;

/// One selectable element of a bar: a tab, nav icon, or filter chip.
///
/// # Examples
///
/// ```ignore
/// let home = BarOption::new("Home").on_select(|tap| println!("home via {:?}", tap.source));
/// let locked = BarOption::new("Admin").disabled(true);
/// ```
pub struct BarOption {
    index: usize,
    label: String,
    selected: bool,
    enabled: bool,
    left_adjacent: bool,
    right_adjacent: bool,
    handlers: HandlerChain<TapEvent>,
}

impl BarOption {
    /// Create an enabled, unselected option with no handlers.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            index: 0,
            label: label.into(),
            selected: false,
            enabled: true,
            left_adjacent: false,
            right_adjacent: false,
            handlers: HandlerChain::new(),
        }
    }

    /// Register a handler that runs after the bar has applied the selection
    /// (builder pattern). Multiple handlers run in registration order.
    pub fn on_select(mut self, handler: impl FnMut(&TapEvent) + 'static) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Set whether the option is disabled (builder pattern).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }

    /// Position among siblings. Assigned by the owning coordinator.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The option to the left of this one is selected.
    pub fn is_left_adjacent(&self) -> bool {
        self.left_adjacent
    }

    /// The option to the right of this one is selected.
    pub fn is_right_adjacent(&self) -> bool {
        self.right_adjacent
    }

    /// Whether any user handler is registered.
    pub fn has_handlers(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Snapshot of the flags a host needs to style this option.
    pub fn visual(&self) -> OptionVisual {
        OptionVisual {
            selected: self.selected,
            enabled: self.enabled,
            right_adjacent: self.right_adjacent,
            left_adjacent: self.left_adjacent,
        }
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Selecting clears both adjacency flags.
    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if selected {
            self.left_adjacent = false;
            self.right_adjacent = false;
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Ignored while selected. Setting clears `right_adjacent`.
    pub(crate) fn set_left_adjacent(&mut self, adjacent: bool) {
        if self.selected {
            return;
        }
        self.left_adjacent = adjacent;
        if adjacent {
            self.right_adjacent = false;
        }
    }

    /// Ignored while selected. Setting clears `left_adjacent`.
    pub(crate) fn set_right_adjacent(&mut self, adjacent: bool) {
        if self.selected {
            return;
        }
        self.right_adjacent = adjacent;
        if adjacent {
            self.left_adjacent = false;
        }
    }

    /// Run the user handlers with the original event.
    pub(crate) fn fire(&mut self, event: &TapEvent) -> usize {
        self.handlers.dispatch(event)
    }
}

impl fmt::Debug for BarOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarOption")
            .field("index", &self.index)
            .field("label", &self.label)
            .field("selected", &self.selected)
            .field("enabled", &self.enabled)
            .field("left_adjacent", &self.left_adjacent)
            .field("right_adjacent", &self.right_adjacent)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
