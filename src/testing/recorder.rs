//! RecordingHost: a headless [`BarHost`] that records every call.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::HostError;
use crate::geometry::{Axis, Offset};
use crate::host::{BarHost, OptionVisual};
use crate::sizing::{AnimationSpec, Transition};
use crate::submenu::SlotId;

/// Shared event log. Hosts and user handlers can both append to it so tests
/// can assert relative order.
pub type Journal = Rc<RefCell<Vec<String>>>;

// ---------------------------------------------------------------------------
// HostCall
// ---------------------------------------------------------------------------

/// One recorded host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    RequestRedraw,
    AnimateDimension {
        slot: SlotId,
        axis: Axis,
        transition: Transition,
    },
    SetVisible {
        slot: SlotId,
        visible: bool,
    },
    SetOptionVisual {
        index: usize,
        visual: OptionVisual,
    },
    SetFlexFactor(u16),
    SetMasterToggle(bool),
    MoveIndicator {
        offset: Offset,
        label: String,
        animation: AnimationSpec,
    },
}

impl HostCall {
    /// Short name used in journals.
    pub fn name(&self) -> &'static str {
        match self {
            HostCall::RequestRedraw => "redraw",
            HostCall::AnimateDimension { .. } => "animate",
            HostCall::SetVisible { .. } => "visible",
            HostCall::SetOptionVisual { .. } => "visual",
            HostCall::SetFlexFactor(_) => "flex",
            HostCall::SetMasterToggle(_) => "master",
            HostCall::MoveIndicator { .. } => "indicator",
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingHost
// ---------------------------------------------------------------------------

/// A host for tests.
///
/// Every call is recorded, including ones configured to fail.
///
/// # Examples
///
/// ```ignore
/// let mut bar = SelectionCoordinator::new(options, None, BarConfig::top(), RecordingHost::new())?;
/// bar.select_option(1)?;
/// assert_eq!(bar.host().redraw_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    fail_animations: bool,
    fail_visibility: bool,
    journal: Option<Journal>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every `animate_dimension` call (builder).
    pub fn failing_animations(mut self) -> Self {
        self.fail_animations = true;
        self
    }

    /// Reject every `set_visible` call (builder).
    pub fn failing_visibility(mut self) -> Self {
        self.fail_visibility = true;
        self
    }

    /// Also append each call's [`name`](HostCall::name) to `journal` (builder).
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    // ── Query ────────────────────────────────────────────────────────

    /// All calls so far, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn last_call(&self) -> Option<&HostCall> {
        self.calls.last()
    }

    /// Forget recorded calls. The journal is left alone.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Return and forget recorded calls.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn redraw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::RequestRedraw))
            .count()
    }

    /// Every `animate_dimension` call as `(slot, transition)`.
    pub fn animations(&self) -> Vec<(SlotId, Transition)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::AnimateDimension {
                    slot, transition, ..
                } => Some((*slot, *transition)),
                _ => None,
            })
            .collect()
    }

    /// Every `set_visible` call as `(slot, visible)`.
    pub fn visibility_changes(&self) -> Vec<(SlotId, bool)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::SetVisible { slot, visible } => Some((*slot, *visible)),
                _ => None,
            })
            .collect()
    }

    /// Every `set_option_visual` call as `(index, visual)`.
    pub fn visuals(&self) -> Vec<(usize, OptionVisual)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::SetOptionVisual { index, visual } => Some((*index, *visual)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: HostCall) {
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(call.name().to_owned());
        }
        self.calls.push(call);
    }
}

impl BarHost for RecordingHost {
    fn request_redraw(&mut self) {
        self.record(HostCall::RequestRedraw);
    }

    fn animate_dimension(
        &mut self,
        slot: SlotId,
        axis: Axis,
        transition: Transition,
    ) -> Result<(), HostError> {
        self.record(HostCall::AnimateDimension {
            slot,
            axis,
            transition,
        });
        if self.fail_animations {
            return Err(HostError::Rejected("animations disabled".into()));
        }
        Ok(())
    }

    fn set_visible(&mut self, slot: SlotId, visible: bool) -> Result<(), HostError> {
        self.record(HostCall::SetVisible { slot, visible });
        if self.fail_visibility {
            return Err(HostError::Rejected("visibility disabled".into()));
        }
        Ok(())
    }

    fn set_option_visual(&mut self, index: usize, visual: OptionVisual) {
        self.record(HostCall::SetOptionVisual { index, visual });
    }

    fn set_flex_factor(&mut self, factor: u16) {
        self.record(HostCall::SetFlexFactor(factor));
    }

    fn set_master_toggle(&mut self, open: bool) {
        self.record(HostCall::SetMasterToggle(open));
    }

    fn move_indicator(
        &mut self,
        offset: Offset,
        label: &str,
        animation: AnimationSpec,
    ) -> Result<(), HostError> {
        self.record(HostCall::MoveIndicator {
            offset,
            label: label.to_owned(),
            animation,
        });
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
