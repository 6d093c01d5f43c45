//! Per-tooltip mutable state: the visibility state machine's current state,
//! the three measured rect cells, the resolved placement, and the animation
//! driver.

use std::time::Instant;

use lilt::Animated;

use crate::{
    animation::{self, Transition},
    geometry::Rect,
    placement::Placement,
};

/// Visibility lifecycle of the overlay subtree.
///
/// The subtree is mounted in every state except `Hidden`; `Hiding` keeps it
/// mounted until the exit animation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Hidden,
    /// Mounted but not yet positioned: the bubble renders invisibly while
    /// the three rects are collected.
    Measuring,
    Visible,
    Hiding,
}

#[derive(Debug, Clone)]
pub(crate) struct Tooltip {
    pub state: VisibilityState,
    pub animating: Animated<bool, Instant>,
    pub trigger_rect: Option<Rect>,
    pub viewport_rect: Option<Rect>,
    pub bubble_rect: Option<Rect>,
    pub placement: Placement,
    /// Bumped on every mount; measurement completions carrying an older
    /// generation are stale and dropped.
    pub generation: u64,
    /// A show request arrived while the exit animation was still running;
    /// honored once `Hiding` reaches `Hidden`.
    pub show_queued: bool,
}

impl Tooltip {
    pub fn new(entering: Transition) -> Self {
        Self {
            state: VisibilityState::Hidden,
            animating: animation::driver(entering, false),
            trigger_rect: None,
            viewport_rect: None,
            bubble_rect: None,
            placement: Placement::default(),
            generation: 0,
            show_queued: false,
        }
    }

    /// Forgets all measured geometry. Called on every mount and unmount so a
    /// later appearance never positions against stale rects.
    pub fn clear_geometry(&mut self) {
        self.trigger_rect = None;
        self.viewport_rect = None;
        self.bubble_rect = None;
        self.placement = Placement::default();
    }
}
