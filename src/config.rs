//! Tooltip configuration surface. Everything here is caller-provided and
//! read-only to the controller.

use crate::{
    animation::Transition,
    overlay::OverlayBackend,
    style::{BubbleStyle, Color},
};

/// Pointer base half-width used when the pointer is shown and the caller did
/// not override it. The pointer triangle's base is twice this value.
pub const DEFAULT_POINTER_SIZE: f32 = 8.0;

/// Caller-facing tooltip configuration, builder-style.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    pub with_pointer: bool,
    pub pointer_size: f32,
    /// Defaults to the bubble background when unset.
    pub pointer_color: Option<Color>,
    pub bubble_style: BubbleStyle,
    pub entering: Transition,
    pub exiting: Transition,
    pub overlay: OverlayBackend,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            with_pointer: true,
            pointer_size: DEFAULT_POINTER_SIZE,
            pointer_color: None,
            bubble_style: BubbleStyle::default(),
            entering: Transition::fade(),
            exiting: Transition::fade(),
            overlay: OverlayBackend::default(),
        }
    }
}

impl TooltipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pointer(mut self, with_pointer: bool) -> Self {
        self.with_pointer = with_pointer;
        self
    }

    #[must_use]
    pub fn pointer_size(mut self, pointer_size: f32) -> Self {
        self.pointer_size = pointer_size;
        self
    }

    #[must_use]
    pub fn pointer_color(mut self, color: Color) -> Self {
        self.pointer_color = Some(color);
        self
    }

    #[must_use]
    pub fn bubble_style(mut self, style: BubbleStyle) -> Self {
        self.bubble_style = style;
        self
    }

    #[must_use]
    pub fn entering(mut self, transition: Transition) -> Self {
        self.entering = transition;
        self
    }

    #[must_use]
    pub fn exiting(mut self, transition: Transition) -> Self {
        self.exiting = transition;
        self
    }

    #[must_use]
    pub fn overlay(mut self, backend: OverlayBackend) -> Self {
        self.overlay = backend;
        self
    }

    /// Pointer size as fed to the resolver: zero when the pointer is
    /// disabled, never negative.
    pub fn effective_pointer_size(&self) -> f32 {
        if self.with_pointer {
            self.pointer_size.max(0.0)
        } else {
            0.0
        }
    }

    /// Color the pointer is drawn with.
    pub fn effective_pointer_color(&self) -> Color {
        self.pointer_color
            .unwrap_or(self.bubble_style.background)
    }
}
