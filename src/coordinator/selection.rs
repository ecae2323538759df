//! SelectionCoordinator: the per-flavor selection engine.
//!
//! Every tap on an option goes through [`SelectionCoordinator::handle_tap`].
//! The coordinator updates the selection, pushes slot transitions through
//! its [`SizingPolicy`], moves neighbor flags for tab bars, finishes one
//! [`Commit`], and only then runs the option's own handlers with the original
//! event.
//!
//! # Example
//!
//! ```ignore
//! let options = vec![BarOption::new("Home"), BarOption::new("Search")];
//! let mut bar = SelectionCoordinator::new(options, None, BarConfig::top(), NullHost)?;
//! bar.select_option(1)?;
//! assert_eq!(bar.selected_index(), Some(1));
//! ```

use tracing::{debug, warn};

use crate::config::{BarConfig, BarFlavor};
use crate::error::{ConfigurationError, InternalInvariantError};
use crate::event::TapEvent;
use crate::geometry::Offset;
use crate::host::{BarHost, NullHost};
use crate::option::BarOption;
use crate::sizing::{AnimationSpec, SizingMode, SizingPolicy, Transition};
use crate::submenu::{SubmenuSlot, SubmenuSpec};

use super::commit::Commit;
use super::neighbor::NeighborHighlightPropagator;
use super::state::CoordinatorState;

// ---------------------------------------------------------------------------
// SelectionChange
// ---------------------------------------------------------------------------

/// What one tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// Selected index before the tap.
    pub previous: Option<usize>,
    /// Selected index after the tap.
    pub current: Option<usize>,
    /// Whether a redraw was requested.
    pub committed: bool,
    /// Number of user handlers that ran.
    pub handlers_run: usize,
}

impl SelectionChange {
    /// Whether the selected index moved.
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

#[derive(Debug, Clone, Copy)]
enum SlotAction {
    Open,
    Close,
    Snap(bool),
}

// ---------------------------------------------------------------------------
// SelectionCoordinator
// ---------------------------------------------------------------------------

/// Owns one bar's [`CoordinatorState`] and drives its host.
pub struct SelectionCoordinator<H: BarHost> {
    state: CoordinatorState,
    config: BarConfig,
    policy: Box<dyn SizingPolicy>,
    host: H,
}

impl<H: BarHost> SelectionCoordinator<H> {
    /// Build a bar.
    ///
    /// `submenus`, when given, must hold one entry per option; use
    /// [`SubmenuSpec::placeholder`] for options without a submenu. An empty
    /// list is the same as `None`. The initial slot state is set without any
    /// host calls; call [`sync`](Self::sync) to push it.
    pub fn new(
        options: Vec<BarOption>,
        submenus: Option<Vec<SubmenuSpec>>,
        config: BarConfig,
        host: H,
    ) -> Result<Self, ConfigurationError> {
        let submenus = submenus.filter(|specs| !specs.is_empty());
        config.validate(options.len(), submenus.as_ref().map(Vec::len))?;

        let flavor = config.flavor;
        let policy = config
            .sizing_mode
            .policy(config.fixed_bar_extent, config.slot_animation);
        let mut state =
            CoordinatorState::new(options, submenus, flavor.slot_axis(), config.initial_selected);
        state.master_open = config.master_open;

        if let Some(selected) = state.selected {
            // Lateral bars open their initial pick; required bars follow the master toggle.
            let open = flavor.allows_none() || config.master_open;
            if let Some(id) = state.slot_id(selected) {
                if let Some(slot) = state.arena.get_mut(id) {
                    // Nothing is on screen yet, so the host is bypassed.
                    if let Err(err) = policy.snap(id, slot, open, &mut NullHost) {
                        warn!(option = selected, error = %err, "initial submenu state rejected");
                    }
                }
            }
            match flavor {
                BarFlavor::TabAdjacent => {
                    NeighborHighlightPropagator::initialize(&mut state.options, selected);
                }
                BarFlavor::SlidingSingle => state.indicator = Some(Offset::at_slot(selected)),
                _ => {}
            }
        }

        let mut coordinator = Self {
            state,
            config,
            policy,
            host,
        };
        coordinator.state.flex_factor = coordinator.computed_flex();

        debug!(
            flavor = ?flavor,
            sizing = ?coordinator.config.sizing_mode,
            options = coordinator.state.len(),
            submenus = coordinator.state.has_submenus(),
            selected = ?coordinator.state.selected,
            "selection bar created"
        );
        Ok(coordinator)
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// Select the option at `index` as if it had been tapped by code.
    pub fn select_option(
        &mut self,
        index: usize,
    ) -> Result<SelectionChange, InternalInvariantError> {
        self.handle_tap(&TapEvent::programmatic(index))
    }

    /// Handle a tap on `event.option`.
    ///
    /// Disabled options ignore taps entirely. Otherwise the commit is finished
    /// before the option's handlers run, and the handlers receive `event`
    /// unchanged.
    pub fn handle_tap(
        &mut self,
        event: &TapEvent,
    ) -> Result<SelectionChange, InternalInvariantError> {
        let index = event.option;
        self.state.check_index(index)?;
        let previous = self.state.selected;

        if !self.state.options[index].is_enabled() {
            debug!(option = index, "tap on disabled option ignored");
            return Ok(SelectionChange {
                previous,
                current: previous,
                committed: false,
                handlers_run: 0,
            });
        }

        let mut commit = Commit::new();
        if self.config.flavor.allows_none() {
            self.select_optional(index, &mut commit);
        } else {
            self.select_required(index, &mut commit);
        }

        let current = self.state.selected;
        if previous != current {
            debug!(from = ?previous, to = ?current, "selection changed");
        }
        let committed = commit.finish(&self.state.options, &mut self.host);
        let handlers_run = self.state.options[index].fire(event);

        Ok(SelectionChange {
            previous,
            current,
            committed,
            handlers_run,
        })
    }

    fn select_required(&mut self, index: usize, commit: &mut Commit) {
        let previous = self.state.selected;
        if previous == Some(index) {
            return;
        }

        if let Some(prev) = previous {
            self.state.options[prev].set_selected(false);
            commit.mark(prev);
        }
        self.state.options[index].set_selected(true);
        commit.mark(index);
        self.state.selected = Some(index);

        if self.state.has_submenus() {
            // Submenus swap rather than animate.
            if let Some(prev) = previous {
                self.transition(prev, SlotAction::Snap(false));
            }
            self.transition(index, SlotAction::Snap(self.state.master_open));
            self.refresh_flex(commit);
        }

        match self.config.flavor {
            BarFlavor::TabAdjacent => {
                NeighborHighlightPropagator::propagate(
                    &mut self.state.options,
                    previous,
                    index,
                    commit,
                );
            }
            BarFlavor::SlidingSingle => self.move_indicator(index),
            _ => {}
        }
    }

    fn select_optional(&mut self, index: usize, commit: &mut Commit) {
        match self.state.selected {
            None => {
                self.state.options[index].set_selected(true);
                commit.mark(index);
                self.state.selected = Some(index);
                self.transition(index, SlotAction::Open);
            }
            Some(current) if current == index => {
                self.transition(index, SlotAction::Close);
                self.state.options[index].set_selected(false);
                commit.mark(index);
                self.state.selected = None;
            }
            Some(current) => {
                self.transition(current, SlotAction::Close);
                self.state.options[current].set_selected(false);
                commit.mark(current);
                self.state.options[index].set_selected(true);
                commit.mark(index);
                self.state.selected = Some(index);
                self.transition(index, SlotAction::Open);
            }
        }
        self.refresh_flex(commit);
    }

    /// Flip the master expand/collapse toggle and return its new state.
    ///
    /// Only top and tab bars with submenus have one. The selected option's
    /// slot follows the toggle with this bar's sizing policy.
    pub fn toggle_master_submenu(&mut self) -> Result<bool, InternalInvariantError> {
        if !self.has_master_toggle() {
            return Err(InternalInvariantError::MasterToggleUnavailable);
        }

        let open = !self.state.master_open;
        self.state.master_open = open;
        let mut commit = Commit::new();
        commit.set_master(open);

        if let Some(selected) = self.state.selected {
            let action = if open { SlotAction::Open } else { SlotAction::Close };
            self.transition(selected, action);
        }
        self.refresh_flex(&mut commit);

        debug!(open, "master submenu toggled");
        commit.finish(&self.state.options, &mut self.host);
        Ok(open)
    }

    /// Enable or disable the option at `index`. Returns whether anything
    /// changed.
    pub fn set_enabled(
        &mut self,
        index: usize,
        enabled: bool,
    ) -> Result<bool, InternalInvariantError> {
        self.state.check_index(index)?;
        if self.state.options[index].is_enabled() == enabled {
            return Ok(false);
        }
        self.state.options[index].set_enabled(enabled);
        let mut commit = Commit::new();
        commit.mark(index);
        commit.finish(&self.state.options, &mut self.host);
        Ok(true)
    }

    /// Tear down the submenu slot of the option at `index`.
    ///
    /// Later transitions on that option are dropped with a warning; selection
    /// keeps working. If the flex factor changes as a result it is reported
    /// with one redraw. Returns the slot's last state if it was still alive.
    pub fn destroy_submenu(
        &mut self,
        index: usize,
    ) -> Result<Option<SubmenuSlot>, InternalInvariantError> {
        self.state.check_index(index)?;
        let removed = self
            .state
            .slot_id(index)
            .and_then(|id| self.state.arena.remove(id));
        if removed.is_some() {
            debug!(option = index, "submenu slot destroyed");
            let mut commit = Commit::new();
            self.refresh_flex(&mut commit);
            commit.finish(&self.state.options, &mut self.host);
        }
        Ok(removed)
    }

    /// Push the complete current state to the host and redraw.
    ///
    /// For hosts attached after construction. Slots are reported with instant
    /// transitions.
    pub fn sync(&mut self) {
        let mode = self.policy.mode();
        for (id, slot) in self.state.arena.iter() {
            if slot.is_inert() {
                continue;
            }
            let result = match mode {
                SizingMode::FixedSize => self.host.animate_dimension(
                    id,
                    slot.axis(),
                    Transition::instant(0, slot.current_extent()),
                ),
                SizingMode::ResponsiveOverlay => self.host.set_visible(id, slot.is_visible()),
            };
            if let Err(err) = result {
                let option = slot.attached_option_index();
                warn!(option, error = %err, "host rejected slot sync");
            }
        }
        if let (Some(offset), Some(label)) = (self.state.indicator, self.state.current_label()) {
            if let Err(err) = self.host.move_indicator(offset, label, AnimationSpec::INSTANT) {
                warn!(error = %err, "host rejected indicator sync");
            }
        }

        let mut commit = Commit::new();
        for i in 0..self.state.len() {
            commit.mark(i);
        }
        if let Some(flex) = self.state.flex_factor {
            commit.set_flex(flex);
        }
        if self.has_master_toggle() {
            commit.set_master(self.state.master_open);
        }
        commit.finish(&self.state.options, &mut self.host);
    }

    // ── Internals ────────────────────────────────────────────────────

    fn transition(&mut self, index: usize, action: SlotAction) {
        let Some(id) = self.state.slot_id(index) else {
            return;
        };
        let Some(slot) = self.state.arena.get_mut(id) else {
            warn!(option = index, "submenu slot is gone, transition dropped");
            return;
        };
        let host: &mut dyn BarHost = &mut self.host;
        let result = match action {
            SlotAction::Open => self.policy.open(id, slot, host),
            SlotAction::Close => self.policy.close(id, slot, host),
            SlotAction::Snap(open) => self.policy.snap(id, slot, open, host),
        };
        if let Err(err) = result {
            warn!(option = index, error = %err, "host dropped submenu transition");
        }
    }

    fn move_indicator(&mut self, index: usize) {
        let offset = Offset::at_slot(index);
        self.state.indicator = Some(offset);
        let label = self.state.options[index].label();
        if let Err(err) = self
            .host
            .move_indicator(offset, label, self.config.indicator_animation)
        {
            warn!(option = index, error = %err, "host dropped indicator move");
        }
    }

    fn computed_flex(&self) -> Option<u16> {
        if self.policy.mode() != SizingMode::ResponsiveOverlay {
            return None;
        }
        let any_open = self
            .state
            .arena
            .iter()
            .any(|(_, slot)| self.policy.is_open(slot));
        Some(if any_open {
            self.config.open_flex
        } else {
            self.config.closed_flex
        })
    }

    fn refresh_flex(&mut self, commit: &mut Commit) {
        let flex = self.computed_flex();
        if flex != self.state.flex_factor {
            self.state.flex_factor = flex;
            if let Some(factor) = flex {
                commit.set_flex(factor);
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected
    }

    /// Label of the selected option.
    pub fn current_label(&self) -> Option<&str> {
        self.state.current_label()
    }

    pub fn flavor(&self) -> BarFlavor {
        self.config.flavor
    }

    pub fn sizing_mode(&self) -> SizingMode {
        self.policy.mode()
    }

    /// The bar's own fixed dimension; `None` under responsive sizing.
    pub fn bar_extent(&self) -> Option<u32> {
        self.policy.bar_extent()
    }

    pub fn flex_factor(&self) -> Option<u16> {
        self.state.flex_factor
    }

    pub fn master_open(&self) -> bool {
        self.state.master_open
    }

    /// Whether [`toggle_master_submenu`](Self::toggle_master_submenu) is
    /// available on this bar.
    pub fn has_master_toggle(&self) -> bool {
        self.config.flavor.has_master_toggle() && self.state.has_submenus()
    }

    /// Whether the slot of the option at `index` is open under this bar's
    /// sizing policy. `false` for options without a live slot.
    pub fn is_submenu_open(&self, index: usize) -> bool {
        self.state
            .slot(index)
            .is_some_and(|slot| self.policy.is_open(slot))
    }

    pub fn options(&self) -> &[BarOption] {
        self.state.options()
    }

    pub fn state(&self) -> &CoordinatorState {
        &self.state
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H: BarHost> std::fmt::Debug for SelectionCoordinator<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionCoordinator")
            .field("flavor", &self.config.flavor)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
