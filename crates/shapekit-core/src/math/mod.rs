//! # Affine algebra
//!
//! 2D vectors and 3x3 homogeneous affine matrices used by every scene node.
//!
//! Matrices act on column vectors: `a * b` applied to a point applies `b`
//! first, then `a`. The bottom row of every matrix built here is `[0, 0, 1]`.
//!
//! ```rust,ignore
//! use shapekit_core::math::{Mat3, Vec2};
//!
//! let m = Mat3::translation(Vec2::new(5.0, 0.0)) * Mat3::scale(Vec2::new(2.0, 2.0));
//! assert_eq!(m.apply_to_point(Vec2::new(1.0, 1.0)), Vec2::new(7.0, 2.0));
//! ```

mod matrix;
pub mod precision;
mod vec2;

pub use matrix::Mat3;
pub use vec2::Vec2;
