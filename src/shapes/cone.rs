use crate::{Float, Point3f, Normal3, Ray, EPSILON};
use crate::math::quadratic;
use crate::geometry::bounds::Bounds3f;
use crate::shapes::{Primitive, LocalHits, Cylinder};

/// Double-napped cone `x^2 + z^2 = y^2`, truncated and capped like a `Cylinder`.
/// The truncation bounds and cap logic are shared with the cylinder.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cone {
    pub extent: Cylinder,
}

impl Cone {
    pub fn new(minimum: Float, maximum: Float, closed: bool) -> Self {
        Self { extent: Cylinder::new(minimum, maximum, closed) }
    }
}

impl Primitive for Cone {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        let mut hits = LocalHits::new();
        let (o, d) = (ray.origin, ray.dir);

        let a = d.x * d.x - d.y * d.y + d.z * d.z;
        let b = 2.0 * (o.x * d.x - o.y * d.y + o.z * d.z);
        let c = o.x * o.x - o.y * o.y + o.z * o.z;

        if a.abs() < EPSILON {
            // parallel to one of the halves: at most one wall hit
            if b.abs() >= EPSILON {
                let t = -c / (2.0 * b);
                if self.extent.within_walls(o.y + t * d.y) {
                    hits.push(t);
                }
            }
        } else if let Some((t0, t1)) = quadratic(a, b, c) {
            for &t in &[t0, t1] {
                if self.extent.within_walls(o.y + t * d.y) {
                    hits.push(t);
                }
            }
        }

        self.extent.intersect_caps(ray, Float::abs, &mut hits);
        hits
    }

    fn local_normal_at(&self, p: Point3f) -> Normal3 {
        let dist = p.x * p.x + p.z * p.z;
        let (min, max) = (self.extent.minimum, self.extent.maximum);

        if dist <= Float::EPSILON && p.y.abs() <= EPSILON {
            // the apex has no well-defined normal; use the axis
            let y = if p.y > 0.0 { -1.0 } else { 1.0 };
            Normal3::new(0.0, y, 0.0)
        } else if dist < max * max && p.y >= max - EPSILON {
            Normal3::new(0.0, 1.0, 0.0)
        } else if dist < min * min && p.y <= min + EPSILON {
            Normal3::new(0.0, -1.0, 0.0)
        } else {
            let y = dist.sqrt();
            let y = if p.y > 0.0 { -y } else { y };
            Normal3::new(p.x, y, p.z)
        }
    }

    fn object_bound(&self) -> Bounds3f {
        let (min, max) = (self.extent.minimum, self.extent.maximum);
        let limit = min.abs().max(max.abs());
        Bounds3f::with_bounds(
            Point3f::new(-limit, min, -limit),
            Point3f::new(limit, max, limit),
        )
    }
}
