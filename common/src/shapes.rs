use crate::vector::Vector;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the four regions produced by splitting a rectangle.
///
/// North is towards decreasing `y`, matching screen coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Sign of the center offset along x and y for this quadrant.
    fn offset_signs(self) -> (f32, f32) {
        match self {
            Quadrant::NorthEast => (1.0, -1.0),
            Quadrant::NorthWest => (-1.0, -1.0),
            Quadrant::SouthEast => (1.0, 1.0),
            Quadrant::SouthWest => (-1.0, 1.0),
        }
    }
}

/// Axis-aligned rectangle stored as a center and half extents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, half_width: f32, half_height: f32) -> Self {
        Self {
            x,
            y,
            half_width,
            half_height,
        }
    }

    pub fn from_center(center: Vector, half_width: f32, half_height: f32) -> Self {
        Self::new(center.x, center.y, half_width, half_height)
    }

    pub fn center(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    pub fn left(&self) -> f32 {
        self.x - self.half_width
    }

    pub fn right(&self) -> f32 {
        self.x + self.half_width
    }

    pub fn top(&self) -> f32 {
        self.y - self.half_height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.half_height
    }

    /// Finite center and finite, non-negative half extents.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.half_width.is_finite()
            && self.half_height.is_finite()
            && self.half_width >= 0.0
            && self.half_height >= 0.0
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: Vector) -> bool {
        self.contains_point(point.x, point.y)
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Rectangles that only share an edge still intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }

    /// Returns the quarter of this rectangle lying in `quadrant`.
    pub fn subdivide(&self, quadrant: Quadrant) -> Rectangle {
        let half_width = self.half_width / 2.0;
        let half_height = self.half_height / 2.0;
        let (sx, sy) = quadrant.offset_signs();
        Rectangle::new(
            self.x + sx * half_width,
            self.y + sy * half_height,
            half_width,
            half_height,
        )
    }

    /// Squared distance from a point to the closest point of the rectangle.
    pub fn distance_to_point(&self, x: f32, y: f32) -> f32 {
        let dx = (x - self.x).abs() - self.half_width;
        let dy = (y - self.y).abs() - self.half_height;
        f32::max(dx, 0.0).powi(2) + f32::max(dy, 0.0).powi(2)
    }

    pub fn intersects_circle(&self, center: Vector, radius: f32) -> bool {
        self.distance_to_point(center.x, center.y) <= radius * radius
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Vector {
        Vector::new(
            safe_randf32(rng, self.left(), self.right()),
            safe_randf32(rng, self.top(), self.bottom()),
        )
    }
}

fn safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}
