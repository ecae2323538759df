//! SlideSelectionCoordinator: single required selection with a sliding marker.

use crate::config::{BarConfig, BarFlavor};
use crate::error::{ConfigurationError, InternalInvariantError};
use crate::event::TapEvent;
use crate::geometry::Offset;
use crate::host::BarHost;
use crate::option::BarOption;

use super::selection::{SelectionChange, SelectionCoordinator};
use super::state::CoordinatorState;

/// A selection bar whose marker slides under the selected option.
///
/// Always exactly one option is selected and there are no submenus. Each
/// change moves the marker to `Offset { x: index, y: 0 }` and hands the host
/// the new caption.
#[derive(Debug)]
pub struct SlideSelectionCoordinator<H: BarHost> {
    inner: SelectionCoordinator<H>,
}

impl<H: BarHost> SlideSelectionCoordinator<H> {
    /// Build a sliding bar. The flavor in `config` is forced to
    /// [`BarFlavor::SlidingSingle`].
    pub fn new(
        options: Vec<BarOption>,
        config: BarConfig,
        host: H,
    ) -> Result<Self, ConfigurationError> {
        let config = config.with_flavor(BarFlavor::SlidingSingle);
        let inner = SelectionCoordinator::new(options, None, config, host)?;
        Ok(Self { inner })
    }

    pub fn select_option(
        &mut self,
        index: usize,
    ) -> Result<SelectionChange, InternalInvariantError> {
        self.inner.select_option(index)
    }

    pub fn handle_tap(
        &mut self,
        event: &TapEvent,
    ) -> Result<SelectionChange, InternalInvariantError> {
        self.inner.handle_tap(event)
    }

    pub fn selected_index(&self) -> usize {
        self.inner.selected_index().unwrap_or_default()
    }

    /// Caption for the marker.
    pub fn current_label(&self) -> &str {
        self.inner.current_label().unwrap_or_default()
    }

    pub fn indicator_offset(&self) -> Offset {
        self.inner
            .state()
            .indicator_offset()
            .unwrap_or_else(|| Offset::at_slot(self.selected_index()))
    }

    pub fn options(&self) -> &[BarOption] {
        self.inner.options()
    }

    pub fn state(&self) -> &CoordinatorState {
        self.inner.state()
    }

    /// Push the marker position and option styles to the host.
    pub fn sync(&mut self) {
        self.inner.sync();
    }

    pub fn host(&self) -> &H {
        self.inner.host()
    }

    pub fn into_host(self) -> H {
        self.inner.into_host()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::{AnimationSpec, Curve};
    use crate::testing::{HostCall, RecordingHost};
    use pretty_assertions::assert_eq;

    fn bar(labels: &[&str]) -> SlideSelectionCoordinator<RecordingHost> {
        let options = labels.iter().map(|l| BarOption::new(*l)).collect();
        SlideSelectionCoordinator::new(options, BarConfig::new(), RecordingHost::new()).unwrap()
    }

    #[test]
    fn initial_marker_under_initial_selection() {
        let b = bar(&["A", "B"]);
        assert_eq!(b.selected_index(), 0);
        assert_eq!(b.indicator_offset(), Offset::new(0, 0));
        assert_eq!(b.current_label(), "A");
    }

    #[test]
    fn flavor_is_forced() {
        let options = vec![BarOption::new("A")];
        let b = SlideSelectionCoordinator::new(
            options,
            BarConfig::tabs(),
            RecordingHost::new(),
        )
        .unwrap();
        assert_eq!(b.inner.flavor(), BarFlavor::SlidingSingle);
    }

    #[test]
    fn select_moves_marker_then_redraws() {
        let mut b = bar(&["A", "B"]);
        b.select_option(1).unwrap();
        assert_eq!(b.indicator_offset(), Offset::new(1, 0));
        assert_eq!(b.current_label(), "B");

        let calls = b.host().calls();
        assert_eq!(
            calls[0],
            HostCall::MoveIndicator {
                offset: Offset::new(1, 0),
                label: "B".to_owned(),
                animation: AnimationSpec::millis(200, Curve::LinearToEaseOut),
            }
        );
        assert_eq!(b.host().last_call(), Some(&HostCall::RequestRedraw));
        assert_eq!(b.host().redraw_count(), 1);
    }

    #[test]
    fn unchanged_selection_is_a_no_op() {
        let mut b = bar(&["A", "B"]);
        let change = b.select_option(0).unwrap();
        assert!(!change.committed);
        assert!(b.host().calls().is_empty());
    }

    #[test]
    fn invalid_initial_index() {
        let options = vec![BarOption::new("A")];
        let err = SlideSelectionCoordinator::new(
            options,
            BarConfig::new().with_initial_selected(Some(4)),
            RecordingHost::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::InitialIndexOutOfRange { .. }));
    }
}
