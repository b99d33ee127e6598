use num_traits::{Float, One};

use crate::error::GeometryError;

/// Operations shared by the euclidean vectors.
///
/// `other` is always `Self`, so vectors of different dimensions can not be mixed.
/// None of the operations mutate their operands.
pub trait Vector: Copy + Sized {
    type Scalar: Float;

    /// Euclidean norm.
    fn magnitude(&self) -> Self::Scalar;

    /// Returns the vector of magnitude 1 with the same direction.
    ///
    /// Fails with [`GeometryError::UndefinedDirection`] on the zero vector.
    fn unit_vector(&self) -> Result<Self, GeometryError>;

    /// Dot product.
    fn inner_product(&self, other: &Self) -> Self::Scalar;

    /// Multiplies every component by `scalar`.
    fn scale(&self, scalar: Self::Scalar) -> Self;

    /// Angle to `other` in radians, in `[0, pi]`.
    ///
    /// Fails with [`GeometryError::UndefinedDirection`] if either vector is the zero vector.
    fn angle_between(&self, other: &Self) -> Result<Self::Scalar, GeometryError> {
        // unit vectors keep the dot product in range for any finite magnitude
        let cos = self.unit_vector()?.inner_product(&other.unit_vector()?);
        Ok(clamp_cosine(cos).acos())
    }

    /// Same as [`Vector::angle_between`] but in degrees.
    fn angle_between_degrees(&self, other: &Self) -> Result<Self::Scalar, GeometryError> {
        self.angle_between(other).map(Self::radians_to_degrees)
    }

    /// Projects `self` onto the direction of `other`.
    ///
    /// The result lies along `other` and its signed length is the scalar projection
    /// `self . unit(other)`. Fails with [`GeometryError::UndefinedDirection`] if `other`
    /// is the zero vector.
    fn projection_onto(&self, other: &Self) -> Result<Self, GeometryError> {
        let unit = other.unit_vector()?;
        Ok(unit.scale(self.inner_product(&unit)))
    }

    /// Converts radians to degrees. Does not depend on any vector.
    fn radians_to_degrees(radians: Self::Scalar) -> Self::Scalar {
        radians_to_degrees(radians)
    }
}

/// Converts radians to degrees (`radians * 180 / pi`).
pub fn radians_to_degrees<T: Float>(radians: T) -> T {
    radians.to_degrees()
}

// Rounding can push the cosine slightly past +-1. NaN is kept as is.
fn clamp_cosine<T: Float>(cos: T) -> T {
    let one = <T as One>::one();
    if cos > one {
        one
    } else if cos < -one {
        -one
    } else {
        cos
    }
}

pub(crate) fn undefined_direction(operation: &'static str) -> GeometryError {
    log::trace!("{}: zero vector has no direction", operation);
    GeometryError::UndefinedDirection
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_radians_to_degrees() {
        use core::f64::consts::{FRAC_PI_2, PI};

        let test_cases = vec![(0.0, 0.0), (FRAC_PI_2, 90.0), (PI, 180.0), (-PI, -180.0)];

        for (radians, expected) in test_cases {
            assert_relative_eq!(radians_to_degrees(radians), expected);
        }
        assert_relative_eq!(radians_to_degrees(core::f32::consts::PI), 180.0f32);
    }

    #[test]
    fn test_clamp_cosine() {
        let test_cases = vec![
            (1.000_000_000_000_000_2, 1.0),
            (-1.000_000_000_000_000_2, -1.0),
            (0.5, 0.5),
            (-0.25, -0.25),
        ];

        for (cos, expected) in test_cases {
            assert_eq!(clamp_cosine(cos), expected);
        }
        assert!(clamp_cosine(f64::NAN).is_nan());
        assert!(clamp_cosine(f32::NAN).is_nan());
    }
}
