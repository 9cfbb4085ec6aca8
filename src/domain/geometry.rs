//! Geometric types for the picker: positions, client points and allocations

use std::ops::Sub;

/// Offset from the widget center, measured in image pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Point in client (widget allocation) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Pixel dimensions of an image or a widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Smallest size covering both `self` and `other`
    pub fn union(&self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// Area assigned to the widget by the host layout
///
/// `x`/`y` locate the widget in the coordinate space pointer events are
/// delivered in. Painting always happens in surface-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Allocation {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Allocation {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Allocation of the given size placed at the origin
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    /// Geometric center using integer halves of the dimensions
    pub fn center(&self) -> Point {
        Point::new(
            (self.x + (self.width / 2) as i32) as f64,
            (self.y + (self.height / 2) as i32) as f64,
        )
    }

    /// Check if this allocation contains a client point
    pub fn contains(&self, point: Point) -> bool {
        let (left, top) = (self.x as f64, self.y as f64);
        point.x >= left
            && point.x < left + self.width as f64
            && point.y >= top
            && point.y < top + self.height as f64
    }
}

/// Size the widget asks the host layout for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requisition {
    pub width: u32,
    pub height: u32,
}
