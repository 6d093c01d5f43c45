//! Visibility lifecycle orchestration.
//!
//! The controller is event-in / effects-out: the embedding host feeds it
//! [`TooltipEvent`]s (caller intent, layout signals, measurement completions,
//! animation ticks) and executes the [`Effect`]s it returns (mount/unmount
//! the overlay subtree, measure a view, invoke the close callback). It never
//! touches the view tree itself, which keeps every interleaving of
//! asynchronous host callbacks testable with plain function calls.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::{
    animation,
    config::TooltipConfig,
    error::MeasureError,
    geometry::Rect,
    placement::{self, BubblePlacement, Placement, PointerPlacement},
    tooltip::{Tooltip, VisibilityState},
};

/// Which of the three measured views a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureTarget {
    Trigger,
    Viewport,
    Bubble,
}

/// Everything that can happen to a tooltip.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipEvent {
    /// The caller set `visible = true`.
    Show,
    /// The caller set `visible = false`.
    Hide,
    /// The backdrop behind the bubble was tapped.
    BackdropPressed,
    /// The overlay subtree finished its first layout pass after mounting;
    /// the bubble can be measured now that it exists in the tree.
    OverlayLaidOut,
    /// The trigger view reported a layout change.
    TriggerLayoutChanged,
    /// The viewport resized (orientation change included).
    ViewportChanged,
    /// The OS font scale changed; content may have reflowed without any
    /// layout event on the trigger itself.
    FontScaleChanged,
    /// A measurement request completed, successfully or not.
    Measured {
        target: MeasureTarget,
        generation: u64,
        result: Result<Rect, MeasureError>,
    },
    /// The trigger view left the tree while the overlay was up.
    TriggerUnmounted,
    /// Animation-frame tick; drives exit-animation completion.
    Tick,
}

/// Commands for the embedding host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Mount the overlay subtree (backdrop, bubble, pointer) into the
    /// configured overlay backend.
    MountOverlay,
    /// Remove the overlay subtree from the tree.
    UnmountOverlay,
    /// Measure a view and report back with a `Measured` event carrying the
    /// same generation.
    Measure {
        target: MeasureTarget,
        generation: u64,
    },
    /// Invoke the caller's close callback.
    NotifyClose,
}

/// Snapshot of everything the renderer needs to draw one frame of the
/// overlay. `None` while the overlay is unmounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub bubble: Option<BubblePlacement>,
    pub pointer: Option<PointerPlacement>,
    /// Animation progress in `[0, 1]`, usually applied as opacity.
    pub progress: f32,
    /// The measurement pass is still running: render the bubble fully
    /// transparent so it can be measured without flashing at a stale
    /// position.
    pub measuring: bool,
}

pub struct TooltipController {
    config: TooltipConfig,
    tooltip: Tooltip,
    disposed: bool,
}

impl TooltipController {
    pub fn new(config: TooltipConfig) -> Self {
        let tooltip = Tooltip::new(config.entering);
        Self {
            config,
            tooltip,
            disposed: false,
        }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn state(&self) -> VisibilityState {
        self.tooltip.state
    }

    /// Whether the overlay subtree is currently in the render tree.
    pub fn is_mounted(&self) -> bool {
        self.tooltip.state != VisibilityState::Hidden
    }

    pub fn placement(&self) -> Placement {
        self.tooltip.placement
    }

    /// Marks the component unmounted. Every later event, including
    /// in-flight measurement and animation completions, is discarded.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Advances the state machine. `now` is the host's animation clock and
    /// only ever read, never stored beyond the animation driver.
    pub fn update(&mut self, event: TooltipEvent, now: Instant) -> Vec<Effect> {
        if self.disposed {
            trace!(?event, "event after dispose, dropping");
            return Vec::new();
        }

        match event {
            TooltipEvent::Show => self.on_show(),
            TooltipEvent::Hide => self.on_hide(now),
            TooltipEvent::BackdropPressed => self.on_backdrop(now),
            TooltipEvent::OverlayLaidOut => self.on_overlay_laid_out(),
            TooltipEvent::TriggerLayoutChanged
            | TooltipEvent::ViewportChanged
            | TooltipEvent::FontScaleChanged => self.remeasure(),
            TooltipEvent::Measured {
                target,
                generation,
                result,
            } => self.on_measured(target, generation, result, now),
            TooltipEvent::TriggerUnmounted => self.on_trigger_unmounted(),
            TooltipEvent::Tick => self.on_tick(now),
        }
    }

    /// Samples the current frame for the renderer.
    pub fn frame(&self, now: Instant) -> Option<OverlayFrame> {
        if self.tooltip.state == VisibilityState::Hidden {
            return None;
        }
        let placement = &self.tooltip.placement;
        Some(OverlayFrame {
            bubble: placement.bubble,
            pointer: if self.config.with_pointer {
                placement.pointer
            } else {
                None
            },
            progress: self.tooltip.animating.animate_bool(0.0, 1.0, now),
            measuring: self.tooltip.state == VisibilityState::Measuring,
        })
    }

    fn on_show(&mut self) -> Vec<Effect> {
        match self.tooltip.state {
            VisibilityState::Hidden => self.begin_show(),
            VisibilityState::Hiding => {
                debug!("show requested mid exit animation, queueing");
                self.tooltip.show_queued = true;
                Vec::new()
            }
            VisibilityState::Measuring | VisibilityState::Visible => Vec::new(),
        }
    }

    fn on_hide(&mut self, now: Instant) -> Vec<Effect> {
        match self.tooltip.state {
            VisibilityState::Measuring | VisibilityState::Visible => {
                self.begin_hide(now)
            }
            VisibilityState::Hiding => {
                // A queued re-show is cancelled by a newer hide request.
                self.tooltip.show_queued = false;
                Vec::new()
            }
            VisibilityState::Hidden => Vec::new(),
        }
    }

    fn on_backdrop(&mut self, now: Instant) -> Vec<Effect> {
        match self.tooltip.state {
            VisibilityState::Measuring | VisibilityState::Visible => {
                debug!("backdrop pressed, starting exit");
                self.begin_hide(now)
            }
            VisibilityState::Hiding | VisibilityState::Hidden => Vec::new(),
        }
    }

    fn on_overlay_laid_out(&mut self) -> Vec<Effect> {
        match self.tooltip.state {
            VisibilityState::Measuring | VisibilityState::Visible => {
                vec![Effect::Measure {
                    target: MeasureTarget::Bubble,
                    generation: self.tooltip.generation,
                }]
            }
            VisibilityState::Hiding | VisibilityState::Hidden => Vec::new(),
        }
    }

    /// Layout inputs changed; re-issue measurement requests for everything
    /// currently positionable. Completions that report unchanged rects are
    /// no-ops downstream, so a layout event firing from within another
    /// handler cannot recurse.
    fn remeasure(&mut self) -> Vec<Effect> {
        match self.tooltip.state {
            VisibilityState::Measuring | VisibilityState::Visible => {
                let generation = self.tooltip.generation;
                let mut effects = vec![
                    Effect::Measure {
                        target: MeasureTarget::Trigger,
                        generation,
                    },
                    Effect::Measure {
                        target: MeasureTarget::Viewport,
                        generation,
                    },
                ];
                if self.tooltip.bubble_rect.is_some() {
                    effects.push(Effect::Measure {
                        target: MeasureTarget::Bubble,
                        generation,
                    });
                }
                effects
            }
            VisibilityState::Hiding | VisibilityState::Hidden => Vec::new(),
        }
    }

    fn on_measured(
        &mut self,
        target: MeasureTarget,
        generation: u64,
        result: Result<Rect, MeasureError>,
        now: Instant,
    ) -> Vec<Effect> {
        if generation != self.tooltip.generation
            || self.tooltip.state == VisibilityState::Hidden
        {
            debug!(
                ?target,
                generation,
                current = self.tooltip.generation,
                "stale measurement, dropping"
            );
            return Vec::new();
        }

        match result {
            Ok(rect) => self.apply_rect(target, rect.sanitized(), now),
            Err(err) => {
                debug!(?target, %err, "measurement unavailable, keeping placement undefined");
                Vec::new()
            }
        }
    }

    fn apply_rect(
        &mut self,
        target: MeasureTarget,
        rect: Rect,
        now: Instant,
    ) -> Vec<Effect> {
        let cell = match target {
            MeasureTarget::Trigger => &mut self.tooltip.trigger_rect,
            MeasureTarget::Viewport => &mut self.tooltip.viewport_rect,
            MeasureTarget::Bubble => &mut self.tooltip.bubble_rect,
        };
        if *cell == Some(rect) {
            trace!(?target, "rect unchanged, skipping recompute");
            return Vec::new();
        }
        *cell = Some(rect);

        self.tooltip.placement = placement::resolve(
            self.tooltip.trigger_rect,
            self.tooltip.viewport_rect,
            self.tooltip.bubble_rect,
            self.config.effective_pointer_size(),
        );

        if self.tooltip.state == VisibilityState::Measuring
            && self.tooltip.placement.is_complete()
        {
            debug!("all rects known, starting entrance");
            self.tooltip.state = VisibilityState::Visible;
            // Fire and forget: entrance completion has no state-machine
            // consequence.
            self.tooltip.animating.transition(true, now);
        }
        Vec::new()
    }

    fn on_trigger_unmounted(&mut self) -> Vec<Effect> {
        if self.tooltip.state == VisibilityState::Hidden {
            return Vec::new();
        }
        // No exit animation: the coordinates are stale, so a bubble left
        // floating (or animating) over them would be wrong.
        warn!("trigger unmounted while tooltip was up, force hiding");
        self.tooltip.state = VisibilityState::Hidden;
        self.tooltip.show_queued = false;
        self.tooltip.clear_geometry();
        vec![Effect::UnmountOverlay, Effect::NotifyClose]
    }

    fn on_tick(&mut self, now: Instant) -> Vec<Effect> {
        if self.tooltip.state != VisibilityState::Hiding
            || self.tooltip.animating.in_progress(now)
        {
            return Vec::new();
        }

        // Exit animation completion is the only trigger for this unmount.
        self.tooltip.state = VisibilityState::Hidden;
        self.tooltip.clear_geometry();
        let mut effects = vec![Effect::UnmountOverlay, Effect::NotifyClose];
        if self.tooltip.show_queued {
            debug!("honoring queued show after exit completed");
            effects.extend(self.begin_show());
        }
        effects
    }

    fn begin_show(&mut self) -> Vec<Effect> {
        self.tooltip.generation += 1;
        self.tooltip.clear_geometry();
        self.tooltip.state = VisibilityState::Measuring;
        self.tooltip.show_queued = false;
        // Rest at invisible; the entrance starts once placement resolves.
        self.tooltip.animating = animation::driver(self.config.entering, false);

        let generation = self.tooltip.generation;
        debug!(generation, "mounting overlay, starting measurement pass");
        vec![
            Effect::MountOverlay,
            Effect::Measure {
                target: MeasureTarget::Trigger,
                generation,
            },
            Effect::Measure {
                target: MeasureTarget::Viewport,
                generation,
            },
        ]
    }

    fn begin_hide(&mut self, now: Instant) -> Vec<Effect> {
        self.tooltip.state = VisibilityState::Hiding;

        // Floor the exit duration so completion is always observable on a
        // later tick, even for a zero-duration descriptor.
        let mut exiting = self.config.exiting;
        exiting.duration_ms = exiting.duration_ms.max(1.0);
        self.tooltip.animating = animation::driver(exiting, true);
        self.tooltip.animating.transition(false, now);
        Vec::new()
    }
}
