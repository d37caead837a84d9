use crate::{Vec3f, Point3f, Float};
use cgmath::InnerSpace;
use std::ops::{Deref, Neg};

pub mod bounds;
pub mod transform;

pub use bounds::*;
pub use transform::*;

/// Reflect `v` about the normal `n`.
pub fn reflect(v: Vec3f, n: &Normal3) -> Vec3f {
    v - n.0 * 2.0 * v.dot(n.0)
}

/// A ray with an unnormalized direction. Transforming a ray keeps its `t`
/// parametrization, so distances found in object space are valid in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3f,
    pub dir: Vec3f,
}

impl Ray {
    pub fn new(origin: Point3f, dir: Vec3f) -> Self {
        Self { origin, dir }
    }

    pub fn at(&self, t: Float) -> Point3f {
        self.origin + (self.dir * t)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal3(pub Vec3f);

impl Normal3 {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self(Vec3f::new(x, y, z))
    }

    pub fn normalize(self) -> Self {
        Self(self.0.normalize())
    }
}

impl Deref for Normal3 {
    type Target = Vec3f;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Neg for Normal3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Vec3f> for Normal3 {
    fn from(v: Vec3f) -> Self {
        Self(v)
    }
}

impl From<Normal3> for Vec3f {
    fn from(n: Normal3) -> Self {
        n.0
    }
}
