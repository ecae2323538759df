//! The widget layer as seen by a coordinator.
//!
//! [`BarHost`] is implemented by whatever renders the bar. The coordinator
//! calls it to start animations, flip visibility, restyle options, and finally
//! request one redraw per interaction. It never implements any of these itself.

use crate::error::HostError;
use crate::geometry::{Axis, Offset};
use crate::sizing::{AnimationSpec, Transition};
use crate::submenu::SlotId;

// ---------------------------------------------------------------------------
// OptionVisual
// ---------------------------------------------------------------------------

/// The state an option's widget should display.
///
/// Hosts map these flags to icon, color and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionVisual {
    pub selected: bool,
    pub enabled: bool,
    /// The option to the right of this one is selected.
    pub right_adjacent: bool,
    /// The option to the left of this one is selected.
    pub left_adjacent: bool,
}

// ---------------------------------------------------------------------------
// BarHost
// ---------------------------------------------------------------------------

/// Rendering primitives consumed by coordinators.
///
/// All calls for one interaction are made synchronously, in order, and are
/// followed by exactly one [`request_redraw`](BarHost::request_redraw).
/// Methods returning `Result` may fail; the coordinator logs the failure,
/// skips that visual step, and still commits.
pub trait BarHost {
    /// Repaint the bar. Issued once per interaction, after every other call.
    fn request_redraw(&mut self);

    /// Start animating a slot's extent along `axis`.
    ///
    /// A new transition on the same slot supersedes one still running.
    fn animate_dimension(
        &mut self,
        slot: SlotId,
        axis: Axis,
        transition: Transition,
    ) -> Result<(), HostError>;

    /// Show or hide a slot inside the bar's flexible region.
    fn set_visible(&mut self, slot: SlotId, visible: bool) -> Result<(), HostError>;

    /// Restyle the option at `index`.
    fn set_option_visual(&mut self, _index: usize, _visual: OptionVisual) {}

    /// Change the bar's own flex factor (responsive bars only).
    fn set_flex_factor(&mut self, _factor: u16) {}

    /// Reflect the master expand/collapse toggle state.
    fn set_master_toggle(&mut self, _open: bool) {}

    /// Move the sliding selection marker and update its caption.
    fn move_indicator(
        &mut self,
        _offset: Offset,
        _label: &str,
        _animation: AnimationSpec,
    ) -> Result<(), HostError> {
        Ok(())
    }
}

impl<H: BarHost + ?Sized> BarHost for &mut H {
    fn request_redraw(&mut self) {
        (**self).request_redraw();
    }

    fn animate_dimension(
        &mut self,
        slot: SlotId,
        axis: Axis,
        transition: Transition,
    ) -> Result<(), HostError> {
        (**self).animate_dimension(slot, axis, transition)
    }

    fn set_visible(&mut self, slot: SlotId, visible: bool) -> Result<(), HostError> {
        (**self).set_visible(slot, visible)
    }

    fn set_option_visual(&mut self, index: usize, visual: OptionVisual) {
        (**self).set_option_visual(index, visual);
    }

    fn set_flex_factor(&mut self, factor: u16) {
        (**self).set_flex_factor(factor);
    }

    fn set_master_toggle(&mut self, open: bool) {
        (**self).set_master_toggle(open);
    }

    fn move_indicator(
        &mut self,
        offset: Offset,
        label: &str,
        animation: AnimationSpec,
    ) -> Result<(), HostError> {
        (**self).move_indicator(offset, label, animation)
    }
}

// ---------------------------------------------------------------------------
// NullHost
// ---------------------------------------------------------------------------

/// A host that accepts every request and draws nothing.
///
/// Useful when only the selection state matters, e.g. in headless models.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl BarHost for NullHost {
    fn request_redraw(&mut self) {}

    fn animate_dimension(
        &mut self,
        _slot: SlotId,
        _axis: Axis,
        _transition: Transition,
    ) -> Result<(), HostError> {
        Ok(())
    }

    fn set_visible(&mut self, _slot: SlotId, _visible: bool) -> Result<(), HostError> {
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn slot_id() -> SlotId {
        let mut sm: SlotMap<SlotId, ()> = SlotMap::with_key();
        sm.insert(())
    }

    #[derive(Default)]
    struct Counter {
        redraws: usize,
        visuals: usize,
    }

    impl BarHost for Counter {
        fn request_redraw(&mut self) {
            self.redraws += 1;
        }

        fn animate_dimension(
            &mut self,
            _slot: SlotId,
            _axis: Axis,
            _transition: Transition,
        ) -> Result<(), HostError> {
            Err(HostError::Rejected("no animations".into()))
        }

        fn set_visible(&mut self, _slot: SlotId, _visible: bool) -> Result<(), HostError> {
            Ok(())
        }

        fn set_option_visual(&mut self, _index: usize, _visual: OptionVisual) {
            self.visuals += 1;
        }
    }

    #[test]
    fn null_host_accepts_everything() {
        let mut host = NullHost;
        let id = slot_id();
        assert!(host
            .animate_dimension(id, Axis::Vertical, Transition::instant(0, 1))
            .is_ok());
        assert!(host.set_visible(id, true).is_ok());
        assert!(host
            .move_indicator(Offset::new(1, 0), "B", AnimationSpec::INSTANT)
            .is_ok());
        host.request_redraw();
    }

    #[test]
    fn mut_ref_forwards_to_inner_host() {
        let mut counter = Counter::default();
        {
            let mut by_ref = &mut counter;
            by_ref.request_redraw();
            by_ref.set_option_visual(0, OptionVisual::default());
            let err = by_ref
                .animate_dimension(slot_id(), Axis::Vertical, Transition::instant(0, 1))
                .unwrap_err();
            assert_eq!(err, HostError::Rejected("no animations".into()));
        }
        assert_eq!(counter.redraws, 1);
        assert_eq!(counter.visuals, 1);
    }

    #[test]
    fn option_visual_default_is_plain() {
        let v = OptionVisual::default();
        assert!(!v.selected && !v.enabled && !v.left_adjacent && !v.right_adjacent);
    }
}
