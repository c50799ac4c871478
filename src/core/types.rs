use serde::{Deserialize, Serialize};

use crate::error::{LegendError, LegendResult};

/// Character-cell coordinate. Origin is the top-left corner of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Half-open rectangle `[min, max)` in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Builds a rectangle, rejecting a max corner that precedes the min corner.
    pub fn new(min: Point, max: Point) -> LegendResult<Self> {
        if max.x < min.x || max.y < min.y {
            return Err(LegendError::InvalidRegion {
                width: max.x - min.x,
                height: max.y - min.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Builds a rectangle without checking corner order.
    ///
    /// An inverted rectangle reports a negative width/height, which the
    /// legend layout tolerates.
    #[must_use]
    pub const fn from_corners(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn from_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::from_corners(
            Point::new(x, y),
            Point::new(x.saturating_add(width), y.saturating_add(height)),
        )
    }

    #[must_use]
    pub const fn width(self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    #[must_use]
    pub const fn height(self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}
