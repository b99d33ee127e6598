use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::vector::{undefined_direction, Vector};

/// 2D euclidean vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vector2D<T = f32> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2D<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Float> Vector2D<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> Vector for Vector2D<T> {
    type Scalar = T;

    fn magnitude(&self) -> T {
        self.x.hypot(self.y)
    }

    fn unit_vector(&self) -> Result<Self, GeometryError> {
        let mag = self.magnitude();
        if mag == T::zero() {
            return Err(undefined_direction("unit_vector"));
        }
        if mag.is_infinite() && self.is_finite() {
            // the norm overflowed, shrink to the largest component first
            let largest = self.x.abs().max(self.y.abs());
            return Self::new(self.x / largest, self.y / largest).unit_vector();
        }
        Ok(Self::new(self.x / mag, self.y / mag))
    }

    fn inner_product(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    fn scale(&self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "Vector2D({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "Vector2D({}, {})", self.x, self.y),
        }
    }
}

impl<T: Float> Add for Vector2D<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub for Vector2D<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> Neg for Vector2D<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Float> Mul<T> for Vector2D<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T> From<[T; 2]> for Vector2D<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<(T, T)> for Vector2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2D<T>> for [T; 2] {
    fn from(v: Vector2D<T>) -> Self {
        [v.x, v.y]
    }
}
