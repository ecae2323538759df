//! Bar configuration: flavor, sizing mode, initial selection, timings.
//!
//! [`BarConfig`] is a plain struct with builder methods. Every coordinator
//! constructor calls [`BarConfig::validate`] before building any state, so a
//! bad configuration never yields a half-built bar.

use crate::error::ConfigurationError;
use crate::geometry::Axis;
use crate::sizing::{AnimationSpec, Curve, SizingMode};

// ---------------------------------------------------------------------------
// BarFlavor
// ---------------------------------------------------------------------------

/// The selection semantics of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarFlavor {
    /// Exactly one option is always selected. Top navigation bars.
    #[default]
    TopRequired,
    /// Zero or one option is selected; clicking the selected one clears it.
    /// Lateral navigation bars.
    LateralOptional,
    /// Like `TopRequired`, plus left/right neighbor highlighting. Tab bars.
    TabAdjacent,
    /// Exactly one selected, no submenus, drives a sliding marker.
    SlidingSingle,
}

impl BarFlavor {
    /// Whether "nothing selected" is a legal state.
    pub fn allows_none(self) -> bool {
        matches!(self, BarFlavor::LateralOptional)
    }

    /// Whether options may carry submenu slots.
    pub fn supports_submenus(self) -> bool {
        !matches!(self, BarFlavor::SlidingSingle)
    }

    /// Whether the bar has a master expand/collapse toggle when it has
    /// submenus.
    pub fn has_master_toggle(self) -> bool {
        matches!(self, BarFlavor::TopRequired | BarFlavor::TabAdjacent)
    }

    /// The axis submenus grow along: beside lateral bars, below the others.
    pub fn slot_axis(self) -> Axis {
        match self {
            BarFlavor::LateralOptional => Axis::Horizontal,
            _ => Axis::Vertical,
        }
    }
}

// ---------------------------------------------------------------------------
// BarConfig
// ---------------------------------------------------------------------------

/// Construction-time configuration for a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    pub flavor: BarFlavor,
    pub sizing_mode: SizingMode,
    /// Initially selected option. `None` is only legal for `LateralOptional`.
    pub initial_selected: Option<usize>,
    /// The bar's own principal dimension. Only used by `FixedSize`.
    pub fixed_bar_extent: u32,
    /// Initial state of the master submenu toggle (required flavors).
    pub master_open: bool,
    /// Transition used when a fixed-size slot opens or closes.
    pub slot_animation: AnimationSpec,
    /// Transition used by the sliding selection marker.
    pub indicator_animation: AnimationSpec,
    /// Flex factor of a responsive bar while a submenu is shown.
    pub open_flex: u16,
    /// Flex factor of a responsive bar while no submenu is shown.
    pub closed_flex: u16,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            flavor: BarFlavor::TopRequired,
            sizing_mode: SizingMode::FixedSize,
            initial_selected: Some(0),
            fixed_bar_extent: 40,
            master_open: false,
            slot_animation: AnimationSpec::millis(100, Curve::EaseOut),
            indicator_animation: AnimationSpec::millis(200, Curve::LinearToEaseOut),
            open_flex: 2,
            closed_flex: 1,
        }
    }
}

impl BarConfig {
    /// Create a new default config (top bar, fixed size, first option selected).
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for a top navigation bar.
    pub fn top() -> Self {
        Self::default()
    }

    /// Defaults for a lateral navigation bar: nothing selected, 80 units wide.
    pub fn lateral() -> Self {
        Self {
            flavor: BarFlavor::LateralOptional,
            initial_selected: None,
            fixed_bar_extent: 80,
            ..Self::default()
        }
    }

    /// Defaults for a tab bar with neighbor highlighting.
    pub fn tabs() -> Self {
        Self {
            flavor: BarFlavor::TabAdjacent,
            ..Self::default()
        }
    }

    /// Defaults for a sliding single-selection bar.
    pub fn sliding() -> Self {
        Self {
            flavor: BarFlavor::SlidingSingle,
            ..Self::default()
        }
    }

    /// Set the flavor (builder).
    pub fn with_flavor(mut self, flavor: BarFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Set the sizing mode (builder).
    pub fn with_sizing_mode(mut self, mode: SizingMode) -> Self {
        self.sizing_mode = mode;
        self
    }

    /// Set the initial selection (builder).
    pub fn with_initial_selected(mut self, index: Option<usize>) -> Self {
        self.initial_selected = index;
        self
    }

    /// Set the fixed bar extent (builder).
    pub fn with_fixed_bar_extent(mut self, extent: u32) -> Self {
        self.fixed_bar_extent = extent;
        self
    }

    /// Set the initial master toggle state (builder).
    pub fn with_master_open(mut self, open: bool) -> Self {
        self.master_open = open;
        self
    }

    /// Set the slot open/close transition (builder).
    pub fn with_slot_animation(mut self, animation: AnimationSpec) -> Self {
        self.slot_animation = animation;
        self
    }

    /// Set the sliding marker transition (builder).
    pub fn with_indicator_animation(mut self, animation: AnimationSpec) -> Self {
        self.indicator_animation = animation;
        self
    }

    /// Set the responsive flex factors (builder).
    pub fn with_flex(mut self, open: u16, closed: u16) -> Self {
        self.open_flex = open;
        self.closed_flex = closed;
        self
    }

    /// Check this config against the bar's inputs.
    ///
    /// `submenu_count` is `None` when the bar has no submenus at all;
    /// `Some(0)` means the same.
    pub fn validate(
        &self,
        option_count: usize,
        submenu_count: Option<usize>,
    ) -> Result<(), ConfigurationError> {
        if option_count == 0 {
            return Err(ConfigurationError::NoOptions);
        }

        let allows_none = self.flavor.allows_none();
        let in_range = match self.initial_selected {
            None => allows_none,
            Some(index) => index < option_count,
        };
        if !in_range {
            return Err(ConfigurationError::InitialIndexOutOfRange {
                index: self.initial_selected,
                len: option_count,
                allows_none,
            });
        }

        if let Some(submenus) = submenu_count.filter(|&n| n > 0) {
            if !self.flavor.supports_submenus() {
                return Err(ConfigurationError::SubmenusNotSupported {
                    flavor: self.flavor,
                });
            }
            if submenus != option_count {
                return Err(ConfigurationError::SubmenuCountMismatch {
                    options: option_count,
                    submenus,
                });
            }
        }

        if self.sizing_mode == SizingMode::FixedSize && self.fixed_bar_extent == 0 {
            return Err(ConfigurationError::InvalidFixedExtent {
                extent: self.fixed_bar_extent,
            });
        }

        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    // ── BarFlavor ────────────────────────────────────────────────────

    #[test]
    fn only_lateral_allows_none() {
        assert!(BarFlavor::LateralOptional.allows_none());
        assert!(!BarFlavor::TopRequired.allows_none());
        assert!(!BarFlavor::TabAdjacent.allows_none());
        assert!(!BarFlavor::SlidingSingle.allows_none());
    }

    #[test]
    fn sliding_has_no_submenus() {
        assert!(!BarFlavor::SlidingSingle.supports_submenus());
        assert!(BarFlavor::LateralOptional.supports_submenus());
    }

    #[test]
    fn master_toggle_on_required_flavors() {
        assert!(BarFlavor::TopRequired.has_master_toggle());
        assert!(BarFlavor::TabAdjacent.has_master_toggle());
        assert!(!BarFlavor::LateralOptional.has_master_toggle());
        assert!(!BarFlavor::SlidingSingle.has_master_toggle());
    }

    #[test]
    fn slot_axis_per_flavor() {
        assert_eq!(BarFlavor::LateralOptional.slot_axis(), Axis::Horizontal);
        assert_eq!(BarFlavor::TopRequired.slot_axis(), Axis::Vertical);
        assert_eq!(BarFlavor::TabAdjacent.slot_axis(), Axis::Vertical);
    }

    // ── BarConfig defaults and builders ──────────────────────────────

    #[test]
    fn default_config() {
        let c = BarConfig::default();
        assert_eq!(c.flavor, BarFlavor::TopRequired);
        assert_eq!(c.sizing_mode, SizingMode::FixedSize);
        assert_eq!(c.initial_selected, Some(0));
        assert_eq!(c.fixed_bar_extent, 40);
        assert!(!c.master_open);
        assert_eq!(c.slot_animation.duration, Duration::from_millis(100));
        assert_eq!(c.slot_animation.curve, Curve::EaseOut);
        assert_eq!(c.indicator_animation.duration, Duration::from_millis(200));
        assert_eq!((c.open_flex, c.closed_flex), (2, 1));
    }

    #[test]
    fn lateral_preset() {
        let c = BarConfig::lateral();
        assert_eq!(c.flavor, BarFlavor::LateralOptional);
        assert_eq!(c.initial_selected, None);
        assert_eq!(c.fixed_bar_extent, 80);
    }

    #[test]
    fn builders_chain() {
        let c = BarConfig::new()
            .with_flavor(BarFlavor::TabAdjacent)
            .with_sizing_mode(SizingMode::ResponsiveOverlay)
            .with_initial_selected(Some(2))
            .with_fixed_bar_extent(64)
            .with_master_open(true)
            .with_slot_animation(AnimationSpec::INSTANT)
            .with_indicator_animation(AnimationSpec::millis(50, Curve::Linear))
            .with_flex(3, 1);
        assert_eq!(
            c,
            BarConfig {
                flavor: BarFlavor::TabAdjacent,
                sizing_mode: SizingMode::ResponsiveOverlay,
                initial_selected: Some(2),
                fixed_bar_extent: 64,
                master_open: true,
                slot_animation: AnimationSpec::INSTANT,
                indicator_animation: AnimationSpec::millis(50, Curve::Linear),
                open_flex: 3,
                closed_flex: 1,
            }
        );
    }

    // ── validate ─────────────────────────────────────────────────────

    #[test]
    fn validate_rejects_empty_options() {
        assert_eq!(
            BarConfig::top().validate(0, None),
            Err(ConfigurationError::NoOptions)
        );
    }

    #[test]
    fn validate_initial_index_required_flavor() {
        assert!(BarConfig::top().with_initial_selected(Some(2)).validate(3, None).is_ok());
        assert_eq!(
            BarConfig::top().with_initial_selected(Some(3)).validate(3, None),
            Err(ConfigurationError::InitialIndexOutOfRange {
                index: Some(3),
                len: 3,
                allows_none: false,
            })
        );
        assert!(BarConfig::top().with_initial_selected(None).validate(3, None).is_err());
    }

    #[test]
    fn validate_initial_index_optional_flavor() {
        assert!(BarConfig::lateral().validate(3, None).is_ok());
        assert!(BarConfig::lateral().with_initial_selected(Some(0)).validate(3, None).is_ok());
        assert!(BarConfig::lateral().with_initial_selected(Some(3)).validate(3, None).is_err());
    }

    #[test]
    fn validate_submenu_count() {
        assert!(BarConfig::top().validate(3, Some(3)).is_ok());
        assert_eq!(
            BarConfig::top().validate(3, Some(2)),
            Err(ConfigurationError::SubmenuCountMismatch {
                options: 3,
                submenus: 2,
            })
        );
    }

    #[test]
    fn validate_empty_submenu_list_means_none() {
        assert!(BarConfig::top().validate(3, Some(0)).is_ok());
        assert!(BarConfig::sliding().validate(2, Some(0)).is_ok());
    }

    #[test]
    fn validate_sliding_rejects_submenus() {
        assert_eq!(
            BarConfig::sliding().validate(2, Some(2)),
            Err(ConfigurationError::SubmenusNotSupported {
                flavor: BarFlavor::SlidingSingle,
            })
        );
    }

    #[test]
    fn validate_fixed_extent_only_for_fixed_mode() {
        assert_eq!(
            BarConfig::top().with_fixed_bar_extent(0).validate(1, None),
            Err(ConfigurationError::InvalidFixedExtent { extent: 0 })
        );
        assert!(BarConfig::top()
            .with_fixed_bar_extent(0)
            .with_sizing_mode(SizingMode::ResponsiveOverlay)
            .validate(1, None)
            .is_ok());
    }
}
