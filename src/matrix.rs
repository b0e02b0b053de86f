//! Affine transformation matrices.
//!
//! A [`Matrix`] is a plain value, not a native handle; it has cairo's C
//! layout and is passed to the native calls by pointer. Composition order
//! follows affine-transform algebra exactly: `translate`, `scale` and
//! `rotate` apply the new operation *before* the existing transformation,
//! so rotation-then-scale and scale-then-rotation produce different
//! coefficient tuples.

use crate::error::{Result, Status};
use crate::ffi;

/// Six-coefficient affine transform, in cairo's memory layout:
///
/// ```text
/// x_new = xx * x + xy * y + x0
/// y_new = yx * x + yy * y + y0
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Matrix {
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Matrix {
        Matrix { xx, yx, xy, yy, x0, y0 }
    }

    /// The identity transform.
    pub fn identity() -> Matrix {
        Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// A transform rotating by `radians`.
    pub fn init_rotate(radians: f64) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_matrix_init_rotate(&mut matrix, radians) };
        matrix
    }

    /// A transform scaling by `(sx, sy)`.
    pub fn init_scale(sx: f64, sy: f64) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_matrix_init_scale(&mut matrix, sx, sy) };
        matrix
    }

    /// A transform translating by `(tx, ty)`.
    pub fn init_translate(tx: f64, ty: f64) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_matrix_init_translate(&mut matrix, tx, ty) };
        matrix
    }

    /// Applies a translation before the existing transformation.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        unsafe { ffi::cairo_matrix_translate(self, tx, ty) };
    }

    /// Applies a scale before the existing transformation.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        unsafe { ffi::cairo_matrix_scale(self, sx, sy) };
    }

    /// Applies a rotation before the existing transformation.
    pub fn rotate(&mut self, radians: f64) {
        unsafe { ffi::cairo_matrix_rotate(self, radians) };
    }

    /// Inverts in place. Fails with the native `InvalidMatrix` status when
    /// the transform is singular.
    pub fn invert(&mut self) -> Result<()> {
        let status = unsafe { ffi::cairo_matrix_invert(self) };
        Status::from_raw(status).to_result()
    }

    /// Returns the inverse, leaving `self` untouched.
    pub fn inverted(&self) -> Result<Matrix> {
        let mut copy = *self;
        copy.invert()?;
        Ok(copy)
    }

    /// Transforms a distance vector, ignoring the translation part.
    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut dx, mut dy) = (dx, dy);
        unsafe { ffi::cairo_matrix_transform_distance(self, &mut dx, &mut dy) };
        (dx, dy)
    }

    /// Transforms a point.
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        unsafe { ffi::cairo_matrix_transform_point(self, &mut x, &mut y) };
        (x, y)
    }

    /// The coefficients as `(xx, yx, xy, yy, x0, y0)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64, f64) {
        (self.xx, self.yx, self.xy, self.yy, self.x0, self.y0)
    }
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::identity()
    }
}

/// Matrix multiplication is transform composition; it is not commutative.
impl std::ops::Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        let mut result = Matrix::identity();
        unsafe { ffi::cairo_matrix_multiply(&mut result, &self, &rhs) };
        result
    }
}

impl std::ops::MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Matrix) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_tuple(values: (f64, f64, f64, f64, f64, f64)) -> (f64, f64, f64, f64, f64, f64) {
        fn r(v: f64) -> f64 {
            (v * 1e6).round() / 1e6
        }
        (
            r(values.0),
            r(values.1),
            r(values.2),
            r(values.3),
            r(values.4),
            r(values.5),
        )
    }

    #[test]
    fn translate_then_scale_composes_in_order() {
        let mut m = Matrix::identity();
        assert_eq!(m.as_tuple(), (1.0, 0.0, 0.0, 1.0, 0.0, 0.0));
        m.translate(12.0, 4.0);
        assert_eq!(m.as_tuple(), (1.0, 0.0, 0.0, 1.0, 12.0, 4.0));
        m.scale(2.0, 7.0);
        assert_eq!(m.as_tuple(), (2.0, 0.0, 0.0, 7.0, 12.0, 4.0));
    }

    #[test]
    fn transforms_points_and_distances() {
        let m = Matrix::new(2.0, 0.0, 0.0, 3.0, 12.0, 4.0);
        assert_eq!(m.transform_distance(1.0, 2.0), (2.0, 6.0));
        assert_eq!(m.transform_point(1.0, 2.0), (14.0, 10.0));
    }

    #[test]
    fn inversion_leaves_the_original_untouched() {
        let m = Matrix::new(2.0, 0.0, 0.0, 3.0, 12.0, 4.0);
        let inverse = m.inverted().unwrap();
        assert_eq!(
            inverse.as_tuple(),
            (0.5, 0.0, 0.0, 1.0 / 3.0, -6.0, -4.0 / 3.0)
        );
        assert_eq!(m.as_tuple(), (2.0, 0.0, 0.0, 3.0, 12.0, 4.0));

        let mut copy = m;
        copy.invert().unwrap();
        assert_eq!(copy, inverse);
    }

    #[test]
    fn singular_matrix_does_not_invert() {
        let mut m = Matrix::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(m.invert().is_err());
    }

    #[test]
    fn rotation_and_scale_do_not_commute() {
        let mut rotate_then_scale = Matrix::identity();
        rotate_then_scale.rotate(std::f64::consts::FRAC_PI_2);
        rotate_then_scale.scale(2.0, 3.0);

        let mut scale_then_rotate = Matrix::identity();
        scale_then_rotate.scale(2.0, 3.0);
        scale_then_rotate.rotate(std::f64::consts::FRAC_PI_2);

        assert_eq!(
            round_tuple(rotate_then_scale.as_tuple()),
            (0.0, 2.0, -3.0, 0.0, 0.0, 0.0)
        );
        assert_eq!(
            round_tuple(scale_then_rotate.as_tuple()),
            (0.0, 3.0, -2.0, 0.0, 0.0, 0.0)
        );
        assert_ne!(rotate_then_scale, scale_then_rotate);
    }

    #[test]
    fn multiply_matches_in_place_composition() {
        let mut m = Matrix::new(2.0, 0.0, 0.0, 3.0, 12.0, 4.0);
        m.rotate(std::f64::consts::FRAC_PI_2);
        assert_eq!(
            round_tuple(m.as_tuple()),
            (0.0, 3.0, -2.0, 0.0, 12.0, 4.0)
        );
        m *= Matrix::init_rotate(std::f64::consts::PI);
        assert_eq!(
            round_tuple(m.as_tuple()),
            (0.0, -3.0, 2.0, 0.0, -12.0, -4.0)
        );
    }
}
