//! Anchored tooltip overlay core: measures a trigger element, positions a
//! floating content bubble with a directional pointer inside the viewport,
//! and sequences entrance/exit animations with mount state.
//!
//! The crate is host-framework agnostic. [`placement::resolve`] is the pure
//! positioning math; [`TooltipController`] owns the visibility state machine
//! and talks to the embedding framework exclusively through
//! [`TooltipEvent`]s in and [`Effect`]s out. The host supplies measurement,
//! an overlay layer (see [`overlay`]), and an animation clock.

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod placement;
pub mod style;
mod tooltip;

pub use animation::{Curve, Transition};
pub use config::{DEFAULT_POINTER_SIZE, TooltipConfig};
pub use controller::{
    Effect, MeasureTarget, OverlayFrame, TooltipController, TooltipEvent,
};
pub use error::MeasureError;
pub use geometry::Rect;
pub use overlay::{OverlayBackend, PortalRegistry};
pub use placement::{
    AnchorPoint, BubblePlacement, Placement, PointerPlacement,
};
pub use style::{BubbleStyle, Color};
pub use tooltip::VisibilityState;
