//! Geometry primitives for bar layout: growth axis and indicator offset.
//!
//! Pixel-level layout belongs to the host. The coordinator only needs to know
//! which way a submenu grows and where the selection marker of a sliding bar
//! sits, measured in option slots.

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// The dimension a submenu slot grows along when it opens.
///
/// Top and tab bars drop their submenus below the bar, so the slot grows
/// vertically. Lateral bars open their submenus beside the bar, so the slot
/// grows horizontally.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width changes; height is fixed by the parent bar.
    Horizontal,
    /// Height changes; width is fixed by the parent bar.
    #[default]
    Vertical,
}

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D position measured in option slots.
///
/// The sliding selection bar positions its marker at `Offset { x: index, y: 0 }`;
/// the host multiplies by its own slot width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset of the slot at `index` along a horizontal row of options.
    #[inline]
    pub fn at_slot(index: usize) -> Self {
        Self {
            x: i32::try_from(index).unwrap_or(i32::MAX),
            y: 0,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
