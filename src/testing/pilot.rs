//! Pilot: programmatic interaction with a headless bar.
//!
//! The `Pilot` wraps a [`SelectionCoordinator`] over a [`RecordingHost`] and
//! provides methods to simulate user input (clicks, key presses, raw crossterm
//! events) aimed at one option, then inspect the state as text.

use crossterm::event::{
    Event, KeyCode, KeyEvent as CtKeyEvent, KeyModifiers, MouseButton, MouseEvent as CtMouseEvent,
    MouseEventKind,
};

use crate::config::BarConfig;
use crate::coordinator::{SelectionChange, SelectionCoordinator};
use crate::error::{BarError, InternalInvariantError};
use crate::event::{TapEvent, TapSource};
use crate::option::BarOption;
use crate::submenu::SubmenuSpec;

use super::recorder::RecordingHost;
use super::snapshot::bar_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless bar driver for testing.
///
/// # Examples
///
/// ```ignore
/// let mut pilot = Pilot::new(vec![BarOption::new("A"), BarOption::new("B")], BarConfig::top())?;
/// pilot.click(1)?;
/// assert_eq!(pilot.snapshot(), "A [B]");
/// ```
#[derive(Debug)]
pub struct Pilot {
    bar: SelectionCoordinator<RecordingHost>,
}

impl Pilot {
    /// Build a bar without submenus.
    pub fn new(options: Vec<BarOption>, config: BarConfig) -> Result<Self, BarError> {
        Self::with_submenus(options, None, config)
    }

    /// Build a bar with optional submenus.
    pub fn with_submenus(
        options: Vec<BarOption>,
        submenus: Option<Vec<SubmenuSpec>>,
        config: BarConfig,
    ) -> Result<Self, BarError> {
        let bar = SelectionCoordinator::new(options, submenus, config, RecordingHost::new())?;
        Ok(Self { bar })
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a left click on the option at `index`.
    pub fn click(&mut self, index: usize) -> Result<SelectionChange, InternalInvariantError> {
        self.bar.handle_tap(&TapEvent::click(index, 0, 0))
    }

    /// Simulate pressing Enter while the option at `index` has focus.
    pub fn press_enter(
        &mut self,
        index: usize,
    ) -> Result<Option<SelectionChange>, InternalInvariantError> {
        let event = Event::Key(CtKeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        self.feed(index, &event)
    }

    /// Simulate a left-button press with the pointer at (x, y) over the
    /// option at `index`.
    pub fn mouse_down(
        &mut self,
        index: usize,
        x: u16,
        y: u16,
    ) -> Result<Option<SelectionChange>, InternalInvariantError> {
        let event = Event::Mouse(CtMouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        });
        self.feed(index, &event)
    }

    /// Deliver a raw crossterm event to the option at `index`.
    ///
    /// Returns `Ok(None)` when the event is not an activation.
    pub fn feed(
        &mut self,
        index: usize,
        event: &Event,
    ) -> Result<Option<SelectionChange>, InternalInvariantError> {
        match TapSource::from_crossterm(event) {
            Some(source) => self.bar.handle_tap(&TapEvent::new(index, source)).map(Some),
            None => Ok(None),
        }
    }

    /// Flip the master submenu toggle.
    pub fn toggle_master(&mut self) -> Result<bool, InternalInvariantError> {
        self.bar.toggle_master_submenu()
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn bar(&self) -> &SelectionCoordinator<RecordingHost> {
        &self.bar
    }

    pub fn bar_mut(&mut self) -> &mut SelectionCoordinator<RecordingHost> {
        &mut self.bar
    }

    pub fn host(&self) -> &RecordingHost {
        self.bar.host()
    }

    /// The bar's state as text. See [`bar_to_string`].
    pub fn snapshot(&self) -> String {
        bar_to_string(self.bar.state())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
