use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

/// Anything that can report a point position.
pub trait Positioned {
    fn position(&self) -> Vector;
}

/// 2D vector with chainable in-place mutators.
///
/// Every mutator returns `&mut Self`, so calls can be strung together:
/// `v.add(&velocity).limit(max_speed)`. Take a [`Vector::copy`] first when
/// the original value is still needed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Unit vector pointing along `angle` (radians).
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn random_unit<R: Rng>(rng: &mut R) -> Self {
        Self::from_angle(rng.gen_range(0.0..TAU))
    }

    pub fn copy(&self) -> Self {
        *self
    }

    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_from(&mut self, other: &Vector) -> &mut Self {
        self.set(other.x, other.y)
    }

    pub fn add(&mut self, other: &Vector) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn subtract(&mut self, other: &Vector) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn scale(&mut self, factor: f32) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// A zero divisor is not special-cased; components become infinite or NaN.
    pub fn divide(&mut self, divisor: f32) -> &mut Self {
        self.x /= divisor;
        self.y /= divisor;
        self
    }

    pub fn magnitude_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    pub fn dot(&self, other: &Vector) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Leaves a zero vector untouched.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude != 0.0 {
            self.divide(magnitude);
        }
        self
    }

    pub fn limit(&mut self, max: f32) -> &mut Self {
        if self.magnitude_sq() > max * max {
            self.set_magnitude(max);
        }
        self
    }

    pub fn set_magnitude(&mut self, magnitude: f32) -> &mut Self {
        self.normalize().scale(magnitude)
    }

    /// Moves towards `target`; `amount` is clamped to `[0, 1]`.
    pub fn lerp(&mut self, target: &Vector, amount: f32) -> &mut Self {
        let amount = amount.clamp(0.0, 1.0);
        self.x += (target.x - self.x) * amount;
        self.y += (target.y - self.y) * amount;
        self
    }

    /// Angle of the vector in radians, `atan2(y, x)`.
    pub fn heading(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Euclidean distance. Also usable as `Vector::distance(&a, &b)`.
    pub fn distance(&self, other: &Vector) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Positioned for Vector {
    fn position(&self) -> Vector {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> Vector {
        (**self).position()
    }
}

impl<T: Positioned + ?Sized> Positioned for Box<T> {
    fn position(&self) -> Vector {
        (**self).position()
    }
}

impl<T: Positioned + ?Sized> Positioned for std::rc::Rc<T> {
    fn position(&self) -> Vector {
        (**self).position()
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vector {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        Vector::add(self, &rhs);
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.subtract(&rhs);
    }
}

impl MulAssign<f32> for Vector {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale(rhs);
    }
}

impl DivAssign<f32> for Vector {
    fn div_assign(&mut self, rhs: f32) {
        self.divide(rhs);
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
