use crate::{Float, Point3f, Normal3, Ray, EPSILON};
use crate::math::{quadratic, INFINITY, NEG_INFINITY};
use crate::geometry::bounds::Bounds3f;
use crate::shapes::{Primitive, LocalHits};

/// Unit-radius cylinder around the y axis, truncated to `minimum < y < maximum`.
/// Both bounds are exclusive; caps are only present when `closed`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub minimum: Float,
    pub maximum: Float,
    pub closed: bool,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self { minimum: NEG_INFINITY, maximum: INFINITY, closed: false }
    }
}

impl Cylinder {
    pub fn new(minimum: Float, maximum: Float, closed: bool) -> Self {
        Self { minimum, maximum, closed }
    }

    pub(crate) fn within_walls(&self, y: Float) -> bool {
        self.minimum < y && y < self.maximum
    }

    /// Add cap hits for caps at `minimum` and `maximum`, where `radius_at(y)` gives the cap
    /// radius at that height.
    pub(crate) fn intersect_caps<F>(&self, ray: &Ray, radius_at: F, hits: &mut LocalHits)
    where
        F: Fn(Float) -> Float,
    {
        if !self.closed || ray.dir.y.abs() < EPSILON {
            return;
        }

        for &y in &[self.minimum, self.maximum] {
            let t = (y - ray.origin.y) / ray.dir.y;
            if check_cap(ray, t, radius_at(y)) {
                hits.push(t);
            }
        }
    }
}

/// Whether the ray at `t` lies within `radius` of the y axis.
fn check_cap(ray: &Ray, t: Float, radius: Float) -> bool {
    let x = ray.origin.x + t * ray.dir.x;
    let z = ray.origin.z + t * ray.dir.z;
    x * x + z * z <= radius * radius
}

impl Primitive for Cylinder {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        let mut hits = LocalHits::new();
        let a = ray.dir.x * ray.dir.x + ray.dir.z * ray.dir.z;

        // parallel to the axis: only the caps can be hit
        if a.abs() >= EPSILON {
            let b = 2.0 * (ray.origin.x * ray.dir.x + ray.origin.z * ray.dir.z);
            let c = ray.origin.x * ray.origin.x + ray.origin.z * ray.origin.z - 1.0;

            if let Some((t0, t1)) = quadratic(a, b, c) {
                for &t in &[t0, t1] {
                    if self.within_walls(ray.origin.y + t * ray.dir.y) {
                        hits.push(t);
                    }
                }
            }
        }

        self.intersect_caps(ray, |_| 1.0, &mut hits);
        hits
    }

    fn local_normal_at(&self, p: Point3f) -> Normal3 {
        let dist = p.x * p.x + p.z * p.z;
        if dist < 1.0 && p.y >= self.maximum - EPSILON {
            Normal3::new(0.0, 1.0, 0.0)
        } else if dist < 1.0 && p.y <= self.minimum + EPSILON {
            Normal3::new(0.0, -1.0, 0.0)
        } else {
            Normal3::new(p.x, 0.0, p.z)
        }
    }

    fn object_bound(&self) -> Bounds3f {
        Bounds3f::with_bounds(
            Point3f::new(-1.0, self.minimum, -1.0),
            Point3f::new(1.0, self.maximum, 1.0),
        )
    }
}
