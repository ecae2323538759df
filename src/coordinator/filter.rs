//! FilterCoordinator: independent multi-selection for filter chips.
//!
//! Unlike the other bars, any number of chips may be active at once and
//! toggling one never touches another. The selection order is remembered so
//! hosts can show active filters in the order they were picked.

use tracing::debug;

use crate::error::{ConfigurationError, InternalInvariantError};
use crate::event::TapEvent;
use crate::host::BarHost;
use crate::option::BarOption;

use super::commit::Commit;

/// Multi-select bar of filter chips.
#[derive(Debug)]
pub struct FilterCoordinator<H: BarHost> {
    options: Vec<BarOption>,
    /// Active chips, oldest first.
    selected: Vec<usize>,
    host: H,
}

impl<H: BarHost> FilterCoordinator<H> {
    /// Build a filter bar with `initial` chips active, in that order.
    pub fn new(
        mut options: Vec<BarOption>,
        initial: &[usize],
        host: H,
    ) -> Result<Self, ConfigurationError> {
        if options.is_empty() {
            return Err(ConfigurationError::NoOptions);
        }
        let len = options.len();
        let mut selected = Vec::with_capacity(initial.len());
        for &index in initial {
            if index >= len {
                return Err(ConfigurationError::FilterIndexOutOfRange { index, len });
            }
            if selected.contains(&index) {
                return Err(ConfigurationError::DuplicateFilterIndex { index });
            }
            selected.push(index);
        }

        for (i, option) in options.iter_mut().enumerate() {
            option.set_index(i);
            option.set_selected(selected.contains(&i));
        }
        debug!(options = len, active = selected.len(), "filter bar created");
        Ok(Self {
            options,
            selected,
            host,
        })
    }

    /// Toggle the chip at `index` as if it had been tapped by code.
    pub fn toggle_filter(&mut self, index: usize) -> Result<bool, InternalInvariantError> {
        self.handle_tap(&TapEvent::programmatic(index))
    }

    /// Toggle the chip at `event.option` and return whether it is now active.
    ///
    /// Disabled chips keep their state and run no handlers.
    pub fn handle_tap(&mut self, event: &TapEvent) -> Result<bool, InternalInvariantError> {
        let index = event.option;
        let len = self.options.len();
        let option = self
            .options
            .get_mut(index)
            .ok_or(InternalInvariantError::IndexOutOfRange { index, len })?;
        if !option.is_enabled() {
            return Ok(option.is_selected());
        }

        let active = !option.is_selected();
        option.set_selected(active);
        if active {
            self.selected.push(index);
        } else {
            self.selected.retain(|&i| i != index);
        }
        debug!(filter = index, active, "filter toggled");

        let mut commit = Commit::new();
        commit.mark(index);
        commit.finish(&self.options, &mut self.host);
        self.options[index].fire(event);
        Ok(active)
    }

    /// Deactivate every chip with one redraw. Handlers do not run.
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let mut commit = Commit::new();
        for index in self.selected.drain(..) {
            self.options[index].set_selected(false);
            commit.mark(index);
        }
        commit.finish(&self.options, &mut self.host);
    }

    /// Active chip indices in the order they were activated.
    pub fn selected_filters(&self) -> &[usize] {
        &self.selected
    }

    /// Labels of active chips in activation order.
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selected
            .iter()
            .map(|&i| self.options[i].label())
            .collect()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(BarOption::is_selected)
    }

    pub fn options(&self) -> &[BarOption] {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

// ===========================================================================
// Tests
// ===========================================================================
