/// Why a measurement request produced no usable rectangle.
///
/// Neither variant is surfaced to the caller: the affected rect cell simply
/// stays unknown and downstream placements stay undefined until a later
/// layout event re-measures the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    /// The view is not part of the layout tree (e.g. never mounted, or
    /// detached before the measurement completed).
    #[error("view is not part of the layout tree")]
    Detached,
    /// The view exists but has not been laid out yet.
    #[error("view has not been laid out yet")]
    NotLaidOut,
}
