use crate::units::Px;

/// The dimensions of the surface a layout will be drawn onto. Owned by the
/// caller, never by the engine; pass one into
/// [`position_layout`](crate::layout::position_layout) rather than relying on
/// any process-wide display state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub width: Px,
    pub height: Px,
}

impl Canvas {
    pub fn new(width: Px, height: Px) -> Canvas {
        Canvas { width, height }
    }
}
