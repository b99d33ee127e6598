#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod vector;
pub mod vector2;
pub mod vector3;

pub use error::GeometryError;
pub use vector::{radians_to_degrees, Vector};
pub use vector2::Vector2D;
pub use vector3::Vector3D;
