use crate::{Float, Point3f, Vec3f, Normal3, Ray};
use crate::error::{Error, Result};
use cgmath::{Matrix, Matrix4, SquareMatrix, InnerSpace, Rad, Vector4, Transform as cgTransform};

/// An affine transform paired with its inverse. Every constructor either computes the
/// inverse analytically or refuses a singular matrix, so `invt` is always valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub(crate) t: Matrix4<Float>,
    pub(crate) invt: Matrix4<Float>,
}

impl Transform {
    pub fn matrix(&self) -> &Matrix4<Float> {
        &self.t
    }

    pub fn inverse_matrix(&self) -> &Matrix4<Float> {
        &self.invt
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {

    pub fn from_mat(mat: Matrix4<Float>) -> Result<Self> {
        let m_inv = mat.invert().ok_or(Error::NonInvertibleMatrix { determinant: mat.determinant() })?;
        Ok(Self::new(mat, m_inv))
    }

    /// `mat_inv` must be the inverse of `mat`; public construction goes through
    /// `from_mat` or the builders.
    pub(crate) const fn new(mat: Matrix4<Float>, mat_inv: Matrix4<Float>) -> Self {
        let t = mat;
        let invt = mat_inv;
        Self { t, invt }
    }

    pub fn identity() -> Self {
        Self::new(Matrix4::identity(), Matrix4::identity())
    }

    pub fn translate(delta: Vec3f) -> Self {
        let m = Matrix4::from_translation(delta);
        let m_inv = Matrix4::from_translation(-delta);
        Self::new(m, m_inv)
    }

    pub fn scale(sx: Float, sy: Float, sz: Float) -> Self {
        assert!(
            sx != 0.0 && sy != 0.0 && sz != 0.0,
            "scale factors must be non-zero, got ({}, {}, {})", sx, sy, sz
        );
        let m = Matrix4::from_nonuniform_scale(sx, sy, sz);
        let m_inv = Matrix4::from_nonuniform_scale(1.0 / sx, 1.0 / sy, 1.0 / sz);
        Self::new(m, m_inv)
    }

    pub fn uniform_scale(s: Float) -> Self {
        Self::scale(s, s, s)
    }

    // Rotations are orthonormal, so the inverse is the transpose.
    pub fn rotate_x(theta: impl Into<Rad<Float>>) -> Self {
        let m = Matrix4::from_angle_x(theta);
        Self::new(m, m.transpose())
    }

    pub fn rotate_y(theta: impl Into<Rad<Float>>) -> Self {
        let m = Matrix4::from_angle_y(theta);
        Self::new(m, m.transpose())
    }

    pub fn rotate_z(theta: impl Into<Rad<Float>>) -> Self {
        let m = Matrix4::from_angle_z(theta);
        Self::new(m, m.transpose())
    }

    /// Shear where each argument moves one coordinate in proportion to another, e.g.
    /// `xy` moves x in proportion to y.
    pub fn shear(xy: Float, xz: Float, yx: Float, yz: Float, zx: Float, zy: Float) -> Result<Self> {
        // cgmath takes columns, so this is the transpose of the row layout
        #[rustfmt::skip]
        let mat = Matrix4::new(
            1.0, yx,  zx,  0.0,
            xy,  1.0, zy,  0.0,
            xz,  yz,  1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Self::from_mat(mat)
    }

    /// World-to-eye transform for an eye at `from` looking towards `to`.
    pub fn look_at(from: Point3f, to: Point3f, up: Vec3f) -> Result<Self> {
        let forward = to - from;
        if forward.magnitude2() == 0.0 || up.magnitude2() == 0.0 {
            return Err(Error::ZeroLengthVector);
        }
        let forward = forward.normalize();
        let left = forward.cross(up.normalize());
        if left.magnitude2() == 0.0 {
            return Err(Error::ZeroLengthVector);
        }
        let left = left.normalize();
        let true_up = left.cross(forward);

        let eye_to_world_rot = Matrix4::from_cols(
            left.extend(0.0),
            true_up.extend(0.0),
            (-forward).extend(0.0),
            Vector4::unit_w(),
        );
        let offset = from - Point3f::new(0.0, 0.0, 0.0);

        let mat = eye_to_world_rot.transpose() * Matrix4::from_translation(-offset);
        let mat_inv = Matrix4::from_translation(offset) * eye_to_world_rot;
        Ok(Self::new(mat, mat_inv))
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.invt, self.t)
    }

    /// Apply `self`, then `next`. Reads left to right when chaining builders.
    pub fn then(self, next: Self) -> Self {
        next * self
    }

    pub fn transform_normal(&self, n: &Normal3) -> Normal3 {
        // transform by the transpose of the inverse
        Normal3(self.invt.transpose().transform_vector(n.0))
    }

    pub fn transform<T: Transformable>(&self, obj: T) -> T {
        obj.transform(*self)
    }
}

impl std::ops::Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.t * rhs.t, rhs.invt * self.invt)
    }
}

pub trait Transformable: Sized {
    fn transform(&self, t: Transform) -> Self;
}

impl Transformable for Vec3f {
    fn transform(&self, t: Transform) -> Self {
        t.t.transform_vector(*self)
    }
}

impl Transformable for Point3f {
    fn transform(&self, t: Transform) -> Self { t.t.transform_point(*self) }
}

impl Transformable for Normal3 {
    fn transform(&self, t: Transform) -> Self {
        t.transform_normal(self)
    }
}

impl Transformable for Ray {
    fn transform(&self, t: Transform) -> Ray {
        Ray {
            origin: self.origin.transform(t),
            dir: self.dir.transform(t),
        }
    }
}
