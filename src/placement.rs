//! Pure placement math for the bubble and its pointer.
//!
//! [`resolve`] is a function of the three measured rects and nothing else:
//! no hidden state, identical inputs give identical outputs. The controller
//! re-runs it whenever any rect cell changes.

use crate::geometry::Rect;

/// The point where the pointer tip touches the trigger.
///
/// `pointer_down` is true when the trigger's vertical center sits at or
/// below the viewport's midpoint: the bubble then opens upward and the
/// pointer hangs under it, tip pointing down at the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    pub x: f32,
    pub y: f32,
    pub pointer_down: bool,
}

/// Screen position of the bubble's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubblePlacement {
    pub top: f32,
    pub left: f32,
}

/// Screen position and orientation of the pointer.
///
/// The unrotated pointer triangle points up; `rotation` is `180.0` degrees
/// when the pointer hangs below the bubble pointing down at the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPlacement {
    pub top: f32,
    pub left: f32,
    pub rotation: f32,
}

/// Resolver output. Any field may be `None` while its inputs are unknown;
/// that is a normal transient state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub anchor: Option<AnchorPoint>,
    pub bubble: Option<BubblePlacement>,
    pub pointer: Option<PointerPlacement>,
}

impl Placement {
    /// True once every part of the placement is known.
    pub fn is_complete(&self) -> bool {
        self.bubble.is_some()
    }
}

/// Computes bubble and pointer placement from whatever subset of the three
/// rects is currently known.
///
/// Missing trigger or viewport yields an empty placement; a missing bubble
/// rect yields the anchor only, since the bubble must be measured once
/// (rendered invisibly) before it can be positioned. The bubble is clamped
/// horizontally into the viewport, right edge first, left edge winning when
/// both would apply. No vertical clamping: a bubble taller than the viewport
/// simply overflows.
pub fn resolve(
    trigger: Option<Rect>,
    viewport: Option<Rect>,
    bubble: Option<Rect>,
    pointer_size: f32,
) -> Placement {
    let (Some(trigger), Some(viewport)) = (trigger, viewport) else {
        return Placement::default();
    };

    let pointer_size = pointer_size.max(0.0);
    let pointer_down = trigger.center_y() >= viewport.height / 2.0;
    let x = trigger.center_x();
    let y = if pointer_down {
        trigger.page_y - pointer_size
    } else {
        trigger.page_y + trigger.height
    };
    let anchor = AnchorPoint { x, y, pointer_down };

    let Some(bubble) = bubble else {
        return Placement {
            anchor: Some(anchor),
            ..Placement::default()
        };
    };

    let mut left = x - bubble.width / 2.0;
    if left + bubble.width > viewport.width {
        left = viewport.width - bubble.width;
    }
    if left < 0.0 {
        left = 0.0;
    }
    let top = if pointer_down {
        y - bubble.height
    } else {
        y + pointer_size
    };

    let pointer = PointerPlacement {
        top: y,
        left: x - pointer_size,
        rotation: if pointer_down { 180.0 } else { 0.0 },
    };

    Placement {
        anchor: Some(anchor),
        bubble: Some(BubblePlacement { top, left }),
        pointer: Some(pointer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::from_size(320.0, 600.0);
    const TRIGGER: Rect = Rect::new(0.0, 0.0, 40.0, 20.0, 100.0, 50.0);

    fn bubble(width: f32, height: f32) -> Rect {
        Rect::from_size(width, height)
    }

    #[test]
    fn trigger_in_upper_half_opens_downward() {
        let placement = resolve(
            Some(TRIGGER),
            Some(VIEWPORT),
            Some(bubble(150.0, 60.0)),
            8.0,
        );

        let anchor = placement.anchor.unwrap();
        assert!(!anchor.pointer_down);
        assert_eq!((anchor.x, anchor.y), (120.0, 70.0));

        let bubble = placement.bubble.unwrap();
        assert_eq!(bubble.top, 78.0);
        assert_eq!(bubble.left, 45.0);

        let pointer = placement.pointer.unwrap();
        assert_eq!(pointer.top, 70.0);
        assert_eq!(pointer.left, 112.0);
        assert_eq!(pointer.rotation, 0.0);
    }

    #[test]
    fn trigger_in_lower_half_opens_upward() {
        let trigger = Rect::new(0.0, 0.0, 40.0, 20.0, 100.0, 500.0);
        let placement =
            resolve(Some(trigger), Some(VIEWPORT), Some(bubble(150.0, 60.0)), 8.0);

        let anchor = placement.anchor.unwrap();
        assert!(anchor.pointer_down);
        assert_eq!(anchor.y, 492.0);

        let bubble = placement.bubble.unwrap();
        assert_eq!(bubble.top, 432.0);

        let pointer = placement.pointer.unwrap();
        assert_eq!(pointer.top, 492.0);
        assert_eq!(pointer.rotation, 180.0);
    }

    #[test]
    fn center_exactly_at_midpoint_counts_as_pointer_down() {
        // 290 + 20/2 == 300 == 600/2
        let trigger = Rect::new(0.0, 0.0, 40.0, 20.0, 100.0, 290.0);
        let placement = resolve(Some(trigger), Some(VIEWPORT), None, 8.0);
        assert!(placement.anchor.unwrap().pointer_down);
    }

    #[test]
    fn right_overflow_clamps_to_right_edge() {
        // Anchor x 300, bubble 150 wide: tentative left 225, right edge 375.
        let trigger = Rect::new(0.0, 0.0, 40.0, 20.0, 280.0, 50.0);
        let placement =
            resolve(Some(trigger), Some(VIEWPORT), Some(bubble(150.0, 60.0)), 8.0);
        assert_eq!(placement.bubble.unwrap().left, 320.0 - 150.0);
    }

    #[test]
    fn left_overflow_clamps_to_zero() {
        let placement = resolve(
            Some(TRIGGER),
            Some(VIEWPORT),
            Some(bubble(300.0, 60.0)),
            8.0,
        );
        // Tentative left -30; right check passes (270 <= 320), left clamp fires.
        assert_eq!(placement.bubble.unwrap().left, 0.0);
    }

    #[test]
    fn bubble_wider_than_viewport_pins_left() {
        let placement = resolve(
            Some(TRIGGER),
            Some(VIEWPORT),
            Some(bubble(400.0, 60.0)),
            8.0,
        );
        // Right clamp would give a negative left; the left clamp wins and the
        // bubble overflows the right edge instead.
        assert_eq!(placement.bubble.unwrap().left, 0.0);
    }

    #[test]
    fn no_vertical_clamping() {
        let placement = resolve(
            Some(TRIGGER),
            Some(VIEWPORT),
            Some(bubble(150.0, 900.0)),
            8.0,
        );
        // Taller than the viewport: allowed to run off-screen vertically.
        let bubble = placement.bubble.unwrap();
        assert_eq!(bubble.top, 78.0);
        assert!(bubble.top + 900.0 > VIEWPORT.height);
    }

    #[test]
    fn unknown_trigger_or_viewport_yields_nothing() {
        assert_eq!(
            resolve(None, Some(VIEWPORT), Some(bubble(150.0, 60.0)), 8.0),
            Placement::default()
        );
        assert_eq!(
            resolve(Some(TRIGGER), None, Some(bubble(150.0, 60.0)), 8.0),
            Placement::default()
        );
    }

    #[test]
    fn unknown_bubble_yields_anchor_only() {
        let placement = resolve(Some(TRIGGER), Some(VIEWPORT), None, 8.0);
        assert!(placement.anchor.is_some());
        assert!(placement.bubble.is_none());
        assert!(placement.pointer.is_none());
        assert!(!placement.is_complete());
    }

    #[test]
    fn negative_pointer_size_degenerates_to_zero() {
        let placement = resolve(
            Some(TRIGGER),
            Some(VIEWPORT),
            Some(bubble(150.0, 60.0)),
            -5.0,
        );
        let anchor = placement.anchor.unwrap();
        let bubble = placement.bubble.unwrap();
        let pointer = placement.pointer.unwrap();
        // Anchor sits flush on the trigger edge, pointer collapses onto it.
        assert_eq!(anchor.y, 70.0);
        assert_eq!(bubble.top, 70.0);
        assert_eq!(pointer.left, anchor.x);
    }

    #[test]
    fn zero_size_bubble_collapses_onto_anchor() {
        let placement =
            resolve(Some(TRIGGER), Some(VIEWPORT), Some(bubble(0.0, 0.0)), 0.0);
        let anchor = placement.anchor.unwrap();
        let bubble = placement.bubble.unwrap();
        assert_eq!(bubble.top, anchor.y);
        assert_eq!(bubble.left, anchor.x);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let a = resolve(
            Some(TRIGGER),
            Some(VIEWPORT),
            Some(bubble(150.0, 60.0)),
            8.0,
        );
        let b = resolve(
            Some(TRIGGER),
            Some(VIEWPORT),
            Some(bubble(150.0, 60.0)),
            8.0,
        );
        assert_eq!(a, b);
    }
}
