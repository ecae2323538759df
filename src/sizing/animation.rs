//! Animation descriptions: easing curves, timing, and extent transitions.
//!
//! The coordinator never runs animations itself. It hands a [`Transition`] to
//! the host and moves on; a later transition on the same property supersedes
//! the earlier one. [`Transition::value_at`] is provided for hosts that have no
//! animation engine of their own.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

/// Easing curve mapping linear progress `t ∈ [0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Curve {
    Linear,
    /// Fast start, gentle finish. Used for submenu extents.
    #[default]
    EaseOut,
    /// Nearly linear start that settles hard at the end. Used for the
    /// sliding selection marker.
    LinearToEaseOut,
}

impl Curve {
    /// Evaluate the curve at `t`. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseOut => 1.0 - (1.0 - t).powi(3),
            Curve::LinearToEaseOut => {
                // Blend of linear and quartic ease-out, weighted towards the
                // quartic as t grows.
                let eased = 1.0 - (1.0 - t).powi(4);
                t * (1.0 - t) + eased * t
            }
        }
    }
}

// ---------------------------------------------------------------------------
// AnimationSpec
// ---------------------------------------------------------------------------

/// Duration and curve of an animation, independent of what is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub curve: Curve,
}

impl AnimationSpec {
    /// Zero-length animation: the host applies the end value immediately.
    pub const INSTANT: AnimationSpec = AnimationSpec {
        duration: Duration::ZERO,
        curve: Curve::Linear,
    };

    /// Create a new spec.
    pub const fn new(duration: Duration, curve: Curve) -> Self {
        Self { duration, curve }
    }

    /// Shorthand for a spec measured in milliseconds.
    pub const fn millis(ms: u64, curve: Curve) -> Self {
        Self {
            duration: Duration::from_millis(ms),
            curve,
        }
    }

    /// Whether this spec applies its end value without interpolation.
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }

    /// Bind this spec to a concrete start and end extent.
    pub fn between(self, from: u32, to: u32) -> Transition {
        Transition {
            from,
            to,
            spec: self,
        }
    }
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// An extent change from `from` to `to` following `spec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: u32,
    pub to: u32,
    pub spec: AnimationSpec,
}

impl Transition {
    /// An instant jump to `to`.
    pub fn instant(from: u32, to: u32) -> Self {
        AnimationSpec::INSTANT.between(from, to)
    }

    pub fn is_instant(&self) -> bool {
        self.spec.is_instant()
    }

    /// Whether the transition grows the slot.
    pub fn is_opening(&self) -> bool {
        self.to > self.from
    }

    /// Extent at `elapsed` time since the transition started.
    ///
    /// Returns `to` once `elapsed >= duration`, and for instant transitions.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if self.spec.is_instant() || elapsed >= self.spec.duration {
            return self.to as f32;
        }
        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        let progress = self.spec.curve.apply(t);
        let from = self.from as f32;
        let to = self.to as f32;
        from + (to - from) * progress
    }
}

// ===========================================================================
// Tests
// ===========================================================================
