//! Commit: the single repaint issued at the end of one interaction.
//!
//! Coordinators mutate state freely while handling a tap and record what
//! changed in a [`Commit`]. Finishing the commit pushes the restyles to the
//! host and then requests exactly one redraw, so no intermediate state is
//! ever painted.

use std::collections::BTreeSet;

use tracing::trace;

use crate::host::BarHost;
use crate::option::BarOption;

/// Pending visual changes for one interaction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Commit {
    dirty: BTreeSet<usize>,
    flex: Option<u16>,
    master: Option<bool>,
}

impl Commit {
    /// Start an empty commit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the option at `index` for restyling. Repeated marks coalesce.
    pub fn mark(&mut self, index: usize) {
        self.dirty.insert(index);
    }

    /// Record a new flex factor for the bar.
    pub fn set_flex(&mut self, factor: u16) {
        self.flex = Some(factor);
    }

    /// Record a new master toggle state.
    pub fn set_master(&mut self, open: bool) {
        self.master = Some(open);
    }

    /// Dirty option indices in ascending order.
    pub fn dirty(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty.iter().copied()
    }

    /// Whether nothing was recorded. An empty commit issues no redraw.
    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty() && self.flex.is_none() && self.master.is_none()
    }

    /// Push the recorded changes to `host` and request one redraw.
    ///
    /// Does nothing for an empty commit. Returns whether a redraw was issued.
    pub fn finish(self, options: &[BarOption], host: &mut dyn BarHost) -> bool {
        if self.is_empty() {
            return false;
        }
        for index in &self.dirty {
            if let Some(option) = options.get(*index) {
                host.set_option_visual(*index, option.visual());
            }
        }
        if let Some(factor) = self.flex {
            host.set_flex_factor(factor);
        }
        if let Some(open) = self.master {
            host.set_master_toggle(open);
        }
        trace!(dirty = self.dirty.len(), "commit");
        host.request_redraw();
        true
    }
}

// ===========================================================================
// Tests
// ===========================================================================
