//! Interaction events delivered to bar options.
//!
//! [`TapEvent`] is what a coordinator receives when an option is activated and
//! what it forwards, untouched, to the option's own handlers. Its
//! [`TapSource`] records the raw input that caused it. Crossterm events are
//! converted via `From` impls and [`TapSource::from_crossterm`] so hosts built
//! on crossterm can feed bars directly.

use std::ops::BitOr;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm. Only activation-relevant keys are
/// distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    /// Any key that cannot activate an option.
    Other,
}

impl Key {
    /// Whether this key activates the focused option.
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent / MouseEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    /// Right, middle, or no button at all.
    Other,
}

/// A mouse button press at a position, with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub button: MouseBtn,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// A plain left click at (x, y).
    pub fn left_click(x: u16, y: u16) -> Self {
        Self {
            button: MouseBtn::Left,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }
}

// ---------------------------------------------------------------------------
// TapSource / TapEvent
// ---------------------------------------------------------------------------

/// The raw input behind a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapSource {
    Mouse(MouseEvent),
    Key(KeyEvent),
    /// Issued by code, e.g. `select_option` called from the host.
    Programmatic,
}

impl TapSource {
    /// Interpret a crossterm event as a tap source.
    ///
    /// Only a left-button press or an Enter/Space key press counts. Everything
    /// else (releases, drags, scrolls, other keys, resize) returns `None`.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<TapSource> {
        match event {
            crossterm::event::Event::Mouse(me) => match me.kind {
                crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                    Some(TapSource::Mouse(MouseEvent::from(*me)))
                }
                _ => None,
            },
            crossterm::event::Event::Key(ke) => {
                if ke.kind != crossterm::event::KeyEventKind::Press {
                    return None;
                }
                let key = KeyEvent::from(*ke);
                key.code.is_activation().then_some(TapSource::Key(key))
            }
            _ => None,
        }
    }
}

/// An activation of the option at `option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TapEvent {
    /// Index of the activated option within its bar.
    pub option: usize,
    pub source: TapSource,
}

impl TapEvent {
    pub fn new(option: usize, source: TapSource) -> Self {
        Self { option, source }
    }

    /// A tap issued by code rather than by user input.
    pub fn programmatic(option: usize) -> Self {
        Self::new(option, TapSource::Programmatic)
    }

    /// A left click on `option` at (x, y).
    pub fn click(option: usize, x: u16, y: u16) -> Self {
        Self::new(option, TapSource::Mouse(MouseEvent::left_click(x, y)))
    }

    /// Whether a user produced this tap.
    pub fn is_user_input(&self) -> bool {
        !matches!(self.source, TapSource::Programmatic)
    }
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

/// Convert crossterm key modifiers to our `Modifiers`.
fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.contains(crossterm::event::KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(crossterm::event::KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(crossterm::event::KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        let code = match ct.code {
            crossterm::event::KeyCode::Char(c) => Key::Char(c),
            crossterm::event::KeyCode::Enter => Key::Enter,
            _ => Key::Other,
        };
        KeyEvent {
            code,
            modifiers: convert_modifiers(ct.modifiers),
        }
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        let button = match me.kind {
            crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left)
            | crossterm::event::MouseEventKind::Up(crossterm::event::MouseButton::Left)
            | crossterm::event::MouseEventKind::Drag(crossterm::event::MouseButton::Left) => {
                MouseBtn::Left
            }
            _ => MouseBtn::Other,
        };
        MouseEvent {
            button,
            x: me.column,
            y: me.row,
            modifiers: convert_modifiers(me.modifiers),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    };

    fn ct_mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(crossterm::event::MouseEvent {
            kind,
            column: 7,
            row: 2,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn ct_key(code: KeyCode) -> Event {
        Event::Key(crossterm::event::KeyEvent::new(code, KeyModifiers::NONE))
    }

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert_eq!(mods, Modifiers(6));
    }

    // ── Key ──────────────────────────────────────────────────────────

    #[test]
    fn activation_keys() {
        assert!(Key::Enter.is_activation());
        assert!(Key::Char(' ').is_activation());
        assert!(!Key::Char('a').is_activation());
        assert!(!Key::Other.is_activation());
    }

    // ── TapEvent ─────────────────────────────────────────────────────

    #[test]
    fn programmatic_tap() {
        let tap = TapEvent::programmatic(3);
        assert_eq!(tap.option, 3);
        assert!(!tap.is_user_input());
    }

    #[test]
    fn click_tap() {
        let tap = TapEvent::click(1, 4, 0);
        assert!(tap.is_user_input());
        assert_eq!(tap.source, TapSource::Mouse(MouseEvent::left_click(4, 0)));
    }

    // ── From<crossterm> ──────────────────────────────────────────────

    #[test]
    fn crossterm_left_press_is_tap() {
        let src = TapSource::from_crossterm(&ct_mouse(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(src, Some(TapSource::Mouse(MouseEvent::left_click(7, 2))));
    }

    #[test]
    fn crossterm_other_mouse_actions_are_not_taps() {
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(TapSource::from_crossterm(&ct_mouse(kind)), None, "{kind:?}");
        }
    }

    #[test]
    fn crossterm_enter_and_space_are_taps() {
        assert_eq!(
            TapSource::from_crossterm(&ct_key(KeyCode::Enter)),
            Some(TapSource::Key(KeyEvent::new(Key::Enter, Modifiers::NONE)))
        );
        assert!(TapSource::from_crossterm(&ct_key(KeyCode::Char(' '))).is_some());
        assert!(TapSource::from_crossterm(&ct_key(KeyCode::Char('x'))).is_none());
        assert!(TapSource::from_crossterm(&ct_key(KeyCode::Tab)).is_none());
    }

    #[test]
    fn crossterm_key_release_is_not_tap() {
        let mut ke = crossterm::event::KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        ke.kind = KeyEventKind::Release;
        assert!(TapSource::from_crossterm(&Event::Key(ke)).is_none());
    }

    #[test]
    fn crossterm_resize_is_not_tap() {
        assert!(TapSource::from_crossterm(&Event::Resize(80, 24)).is_none());
    }

    #[test]
    fn crossterm_non_activation_inputs_collapse() {
        let arrow = crossterm::event::KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(KeyEvent::from(arrow).code, Key::Other);

        let right = crossterm::event::MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(MouseEvent::from(right).button, MouseBtn::Other);
        let scroll = crossterm::event::MouseEvent {
            kind: MouseEventKind::ScrollUp,
            ..right
        };
        assert_eq!(MouseEvent::from(scroll).button, MouseBtn::Other);
    }

    #[test]
    fn crossterm_key_modifiers_convert() {
        let ct = crossterm::event::KeyEvent::new(
            KeyCode::Char('A'),
            KeyModifiers::SHIFT | KeyModifiers::ALT,
        );
        let ke = KeyEvent::from(ct);
        assert_eq!(ke.code, Key::Char('A'));
        assert!(ke.modifiers.contains(Modifiers::SHIFT));
        assert!(ke.modifiers.contains(Modifiers::ALT));
        assert!(!ke.modifiers.contains(Modifiers::CTRL));
    }
}
