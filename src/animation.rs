//! Entrance/exit transition descriptors and the animation driver built from
//! them. The controller only ever starts a transition and asks whether it is
//! still in progress; easing and interpolation live in `lilt`.

use std::time::Instant;

use lilt::{Animated, Easing};

/// Easing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Curve {
    fn easing(self) -> Easing {
        match self {
            Self::Linear => Easing::Linear,
            Self::EaseIn => Easing::EaseIn,
            Self::EaseOut => Easing::EaseOut,
            Self::EaseInOut => Easing::EaseInOut,
        }
    }
}

/// Timing descriptor for an entrance or exit transition. Opaque to the
/// state machine beyond "start" and "finished yet?".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub curve: Curve,
}

impl Transition {
    pub const fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            curve: Curve::EaseInOut,
        }
    }

    /// Default fade timing.
    pub const fn fade() -> Self {
        Self {
            duration_ms: 175.0,
            delay_ms: 30.0,
            curve: Curve::EaseInOut,
        }
    }

    /// Shortest observable transition. Used as the exit floor so that a
    /// completion is always seen by the next tick even when the caller asks
    /// for a zero-duration exit.
    pub const fn instant() -> Self {
        Self {
            duration_ms: 1.0,
            delay_ms: 0.0,
            curve: Curve::Linear,
        }
    }

    #[must_use]
    pub const fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub const fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::fade()
    }
}

/// Builds a driver resting at `initial`; the caller starts it with
/// [`Animated::transition`].
pub(crate) fn driver(
    transition: Transition,
    initial: bool,
) -> Animated<bool, Instant> {
    Animated::new(initial)
        .duration(transition.duration_ms.max(0.0))
        .easing(transition.curve.easing())
        .delay(transition.delay_ms.max(0.0))
}
