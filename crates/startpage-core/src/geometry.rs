//! Screen-space geometry in CSS pixels (client coordinates).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when `other` is more than `slop` away on either axis
    pub fn moved_beyond(&self, other: Point, slop: f64) -> bool {
        (other.x - self.x).abs() > slop || (other.y - self.y).abs() > slop
    }

    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// An element's bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.left + self.width && p.y >= self.top && p.y < self.top + self.height
    }
}
