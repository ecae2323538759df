//! Fixed-size policy: submenus animate their extent outside the bar.

use tracing::trace;

use crate::error::HostError;
use crate::host::BarHost;
use crate::submenu::{SlotId, SubmenuSlot};

use super::animation::{AnimationSpec, Transition};
use super::policy::{SizingMode, SizingPolicy};

/// Animates `current_extent` between 0 and `max_extent`.
///
/// The bar keeps its own `bar_extent`; the slot occupies space outside it
/// (a submenu bar below or beside the parent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize {
    bar_extent: u32,
    animation: AnimationSpec,
}

impl FixedSize {
    /// Create the policy for a bar of `bar_extent` units.
    pub fn new(bar_extent: u32, animation: AnimationSpec) -> Self {
        Self {
            bar_extent,
            animation,
        }
    }

    /// The transition used by `open` and `close`.
    pub fn animation(&self) -> AnimationSpec {
        self.animation
    }

    fn drive(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        target: u32,
        spec: AnimationSpec,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError> {
        if slot.is_inert() || slot.current_extent() == target {
            return Ok(());
        }
        let transition: Transition = spec.between(slot.current_extent(), target);
        slot.set_current_extent(target);
        trace!(
            slot = slot.attached_option_index(),
            from = transition.from,
            to = transition.to,
            instant = transition.is_instant(),
            "fixed-size slot transition"
        );
        host.animate_dimension(id, slot.axis(), transition)
    }
}

impl SizingPolicy for FixedSize {
    fn mode(&self) -> SizingMode {
        SizingMode::FixedSize
    }

    fn open(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError> {
        let target = slot.max_extent();
        self.drive(id, slot, target, self.animation, host)
    }

    fn close(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError> {
        self.drive(id, slot, 0, self.animation, host)
    }

    fn snap(
        &self,
        id: SlotId,
        slot: &mut SubmenuSlot,
        open: bool,
        host: &mut dyn BarHost,
    ) -> Result<(), HostError> {
        let target = if open { slot.max_extent() } else { 0 };
        self.drive(id, slot, target, AnimationSpec::INSTANT, host)
    }

    fn is_open(&self, slot: &SubmenuSlot) -> bool {
        !slot.is_inert() && slot.current_extent() == slot.max_extent()
    }

    fn bar_extent(&self) -> Option<u32> {
        Some(self.bar_extent)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;
    use crate::sizing::animation::Curve;
    use crate::submenu::{SlotArena, SubmenuSpec};
    use crate::testing::{HostCall, RecordingHost};

    fn setup(extent: u32) -> (SlotArena, SlotId, FixedSize) {
        let mut arena = SlotArena::new();
        let id = arena.insert(SubmenuSlot::new(SubmenuSpec::new(extent), Axis::Horizontal, 0));
        (arena, id, FixedSize::new(40, AnimationSpec::millis(100, Curve::EaseOut)))
    }

    #[test]
    fn open_animates_to_max() {
        let (mut arena, id, policy) = setup(80);
        let mut host = RecordingHost::new();
        let slot = arena.get_mut(id).unwrap();
        policy.open(id, slot, &mut host).unwrap();

        assert_eq!(slot.current_extent(), 80);
        assert!(policy.is_open(slot));
        assert_eq!(
            host.calls(),
            &[HostCall::AnimateDimension {
                slot: id,
                axis: Axis::Horizontal,
                transition: AnimationSpec::millis(100, Curve::EaseOut).between(0, 80),
            }]
        );
    }

    #[test]
    fn close_animates_back_to_zero() {
        let (mut arena, id, policy) = setup(120);
        let mut host = RecordingHost::new();
        let slot = arena.get_mut(id).unwrap();
        policy.open(id, slot, &mut host).unwrap();
        host.clear();
        policy.close(id, slot, &mut host).unwrap();

        assert_eq!(slot.current_extent(), 0);
        assert!(!policy.is_open(slot));
        assert_eq!(host.animations().len(), 1);
        assert_eq!(host.animations()[0].1.from, 120);
        assert_eq!(host.animations()[0].1.to, 0);
    }

    #[test]
    fn open_when_open_is_noop() {
        let (mut arena, id, policy) = setup(80);
        let mut host = RecordingHost::new();
        let slot = arena.get_mut(id).unwrap();
        policy.open(id, slot, &mut host).unwrap();
        policy.open(id, slot, &mut host).unwrap();
        assert_eq!(host.animations().len(), 1);
    }

    #[test]
    fn inert_slot_is_noop() {
        let (mut arena, id, policy) = setup(0);
        let mut host = RecordingHost::new();
        let slot = arena.get_mut(id).unwrap();
        policy.open(id, slot, &mut host).unwrap();
        policy.close(id, slot, &mut host).unwrap();
        policy.snap(id, slot, true, &mut host).unwrap();
        assert!(host.calls().is_empty());
        assert!(!policy.is_open(slot));
    }

    #[test]
    fn snap_is_instant() {
        let (mut arena, id, policy) = setup(50);
        let mut host = RecordingHost::new();
        let slot = arena.get_mut(id).unwrap();
        policy.snap(id, slot, true, &mut host).unwrap();
        assert_eq!(slot.current_extent(), 50);
        assert!(host.animations()[0].1.is_instant());
    }

    #[test]
    fn never_touches_visibility() {
        let (mut arena, id, policy) = setup(50);
        let mut host = RecordingHost::new();
        let slot = arena.get_mut(id).unwrap();
        policy.open(id, slot, &mut host).unwrap();
        assert!(!slot.is_visible());
        assert!(host.visibility_changes().is_empty());
    }

    #[test]
    fn host_failure_keeps_logical_state() {
        let (mut arena, id, policy) = setup(50);
        let mut host = RecordingHost::new().failing_animations();
        let slot = arena.get_mut(id).unwrap();
        assert!(policy.open(id, slot, &mut host).is_err());
        assert_eq!(slot.current_extent(), 50);
    }

    #[test]
    fn reports_bar_extent() {
        let (_, _, policy) = setup(1);
        assert_eq!(policy.bar_extent(), Some(40));
        assert_eq!(policy.mode(), SizingMode::FixedSize);
    }
}
