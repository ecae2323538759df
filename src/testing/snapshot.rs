//! Snapshot rendering helpers.
//!
//! [`bar_to_string`] turns a bar's state into compact text for assertions and
//! inline snapshots.

use std::fmt::Write;

use crate::coordinator::CoordinatorState;
use crate::option::BarOption;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a bar's state as text.
///
/// The first line lists options in order, separated by single spaces:
///
/// - `[Label]` selected
/// - `Label>` its right neighbor is selected
/// - `<Label` its left neighbor is selected
/// - `~Label~` disabled
/// - `Label` otherwise
///
/// Further lines appear only when relevant: `slots:` with each slot as
/// `current/max` (a trailing `v` when visible, `-` for inert, `x` for
/// destroyed), `master: open`, `indicator:` and `flex:`. There is never leading or
/// trailing whitespace.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(bar_to_string(bar.state()), "Home [Search] Profile");
/// ```
pub fn bar_to_string(state: &CoordinatorState) -> String {
    let mut out = state
        .options()
        .iter()
        .map(option_token)
        .collect::<Vec<_>>()
        .join(" ");

    if state.has_submenus() {
        let slots = (0..state.len())
            .map(|i| match state.slot(i) {
                None => "x".to_owned(),
                Some(slot) if slot.is_inert() => "-".to_owned(),
                Some(slot) => {
                    let mut token = format!("{}/{}", slot.current_extent(), slot.max_extent());
                    if slot.is_visible() {
                        token.push('v');
                    }
                    token
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(out, "\nslots: {slots}");
    }
    if state.master_open() {
        out.push_str("\nmaster: open");
    }
    if let Some(offset) = state.indicator_offset() {
        let _ = write!(out, "\nindicator: {}", offset.x);
    }
    if let Some(flex) = state.flex_factor() {
        let _ = write!(out, "\nflex: {flex}");
    }
    out
}

fn option_token(option: &BarOption) -> String {
    let label = option.label();
    if !option.is_enabled() {
        format!("~{label}~")
    } else if option.is_selected() {
        format!("[{label}]")
    } else if option.is_right_adjacent() {
        format!("{label}>")
    } else if option.is_left_adjacent() {
        format!("<{label}")
    } else {
        label.to_owned()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
