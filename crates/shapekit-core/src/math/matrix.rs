use nalgebra::{Matrix3, Vector2, Vector3};
use std::ops::Mul;

use super::Vec2;
use crate::error::MathError;

/// A 3x3 homogeneous 2D affine transform.
///
/// The top-left 2x2 block holds rotation/scale, the last column holds the
/// translation and the bottom row is `[0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(Matrix3<f64>);

impl Mat3 {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Builds a matrix from rows. The bottom row should be `[0, 0, 1]`.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self(Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2], rows[2][0],
            rows[2][1], rows[2][2],
        ))
    }

    pub fn translation(offset: Vec2) -> Self {
        Self(Matrix3::new_translation(&Vector2::from(offset)))
    }

    /// Counter-clockwise rotation by `radians` about the origin.
    pub fn rotation(radians: f64) -> Self {
        Self(Matrix3::new_rotation(radians))
    }

    /// Non-uniform scale about the origin.
    pub fn scale(factors: Vec2) -> Self {
        Self(Matrix3::new_nonuniform_scaling(&Vector2::from(factors)))
    }

    /// Composes `Translation(position) ∘ Rotation(rotation) ∘ Scale(scale) ∘ Translation(anchor_shift)`.
    pub fn from_properties(position: Vec2, rotation: f64, scale: Vec2, anchor_shift: Vec2) -> Self {
        Self::translation(position)
            * Self::rotation(rotation)
            * Self::scale(scale)
            * Self::translation(anchor_shift)
    }

    /// Entry at `row`, `col`.
    pub fn m(&self, row: usize, col: usize) -> f64 {
        self.0[(row, col)]
    }

    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// Returns the inverse, or `SingularMatrix` when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Result<Mat3, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix { determinant });
        }
        self.0
            .try_inverse()
            .map(Self)
            .ok_or(MathError::SingularMatrix { determinant })
    }

    /// Transforms a point (translation applies).
    pub fn apply_to_point(&self, point: Vec2) -> Vec2 {
        let v = self.0 * Vector3::new(point.x, point.y, 1.0);
        Vec2::new(v.x, v.y)
    }

    /// Transforms a direction (translation ignored).
    pub fn apply_to_vector(&self, vector: Vec2) -> Vec2 {
        let v = self.0 * Vector3::new(vector.x, vector.y, 0.0);
        Vec2::new(v.x, v.y)
    }

    /// Lazily transforms a sequence of points, preserving order.
    pub fn apply_to_points<'a, I>(&'a self, points: I) -> impl Iterator<Item = Vec2> + 'a
    where
        I: IntoIterator<Item = Vec2>,
        I::IntoIter: 'a,
    {
        points.into_iter().map(move |p| self.apply_to_point(p))
    }

    /// The translation column as a vector.
    pub fn translation_part(&self) -> Vec2 {
        Vec2::new(self.m(0, 2), self.m(1, 2))
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Entry-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Mat3, tolerance: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    pub fn as_matrix(&self) -> &Matrix3<f64> {
        &self.0
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3(self.0 * rhs.0)
    }
}

impl Mul<Vec2> for Mat3 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply_to_point(rhs)
    }
}

impl From<Matrix3<f64>> for Mat3 {
    fn from(m: Matrix3<f64>) -> Self {
        Self(m)
    }
}
