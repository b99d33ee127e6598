use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::vector::{undefined_direction, Vector};

/// 3D euclidean vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vector3D<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3D<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Float> Vector3D<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T: Float> Vector for Vector3D<T> {
    type Scalar = T;

    fn magnitude(&self) -> T {
        self.x.hypot(self.y).hypot(self.z)
    }

    fn unit_vector(&self) -> Result<Self, GeometryError> {
        let mag = self.magnitude();
        if mag == T::zero() {
            return Err(undefined_direction("unit_vector"));
        }
        if mag.is_infinite() && self.is_finite() {
            // the norm overflowed, shrink to the largest component first
            let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
            let shrunk = Self::new(self.x / largest, self.y / largest, self.z / largest);
            return shrunk.unit_vector();
        }
        Ok(Self::new(self.x / mag, self.y / mag, self.z / mag))
    }

    fn inner_product(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn scale(&self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "Vector3D({:.*}, {:.*}, {:.*})",
                p, self.x, p, self.y, p, self.z
            ),
            None => write!(f, "Vector3D({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

impl<T: Float> Add for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Float> Sub for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Float> Neg for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Float> Mul<T> for Vector3D<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T> From<[T; 3]> for Vector3D<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Vector3D<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vector3D<T>> for [T; 3] {
    fn from(v: Vector3D<T>) -> Self {
        [v.x, v.y, v.z]
    }
}
