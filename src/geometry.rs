/// Measured geometry of a view: local origin and size plus the screen-space
/// page offset reported by the host's measurement primitive.
///
/// A `Rect` is immutable once captured; re-measurement replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub page_x: f32,
    pub page_y: f32,
}

impl Rect {
    pub const fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        page_x: f32,
        page_y: f32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            page_x,
            page_y,
        }
    }

    /// A rect anchored at the screen origin, e.g. a full-window viewport.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height, 0.0, 0.0)
    }

    /// Horizontal center in screen space.
    pub fn center_x(&self) -> f32 {
        self.page_x + self.width / 2.0
    }

    /// Vertical center in screen space.
    pub fn center_y(&self) -> f32 {
        self.page_y + self.height / 2.0
    }

    /// Clamps negative dimensions to zero. Hosts occasionally report
    /// degenerate sizes mid-layout; those must not poison placement math.
    pub fn sanitized(self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
            ..self
        }
    }
}
