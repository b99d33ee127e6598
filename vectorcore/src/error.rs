use core::fmt;

/// Error on geometric operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// An operand has zero magnitude, so its direction is not defined.
    UndefinedDirection,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::UndefinedDirection => write!(f, "zero vector has no direction"),
        }
    }
}

impl core::error::Error for GeometryError {}
