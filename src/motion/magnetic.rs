/// How strongly a magnetic element follows the pointer.
pub const PULL: f64 = 0.1;

/// An element's box in viewport coordinates, as from `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Offset that nudges an element toward the pointer at `(x, y)`.
pub fn magnetic_offset(x: f64, y: f64, rect: Rect) -> Offset {
    let dx = x - rect.left - rect.width / 2.0;
    let dy = y - rect.top - rect.height / 2.0;
    Offset {
        x: dx * PULL,
        y: dy * PULL,
    }
}
