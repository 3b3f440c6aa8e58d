#![forbid(unsafe_code)]

//! Geometric primitives for hit testing owned regions.
//!
//! Coordinates are floating point host units, the same space as
//! [`TouchPoint`](crate::event::TouchPoint): CSS pixels on the web, logical
//! pixels on native toolkits. Negative and fractional values are valid.

/// A point in host coordinates (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle used for the dialog and trigger regions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    /// Width in host units.
    pub width: f32,
    /// Height in host units.
    pub height: f32,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Zero or negative extent on either axis. Also true for NaN sizes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whether `pos` lies inside the half-open rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        !self.is_empty()
            && pos.x >= self.x
            && pos.x < self.right()
            && pos.y >= self.y
            && pos.y < self.bottom()
    }
}
