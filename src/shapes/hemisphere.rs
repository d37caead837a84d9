use crate::{Float, Point3f, Normal3, Ray, EPSILON};
use crate::geometry::bounds::Bounds3f;
use crate::shapes::{Primitive, LocalHits, Sphere};

/// The `x >= 0` half of the unit sphere. When closed, the flat cut at `x = 0` is capped
/// with a unit disc facing `-x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hemisphere {
    pub closed: bool,
}

impl Default for Hemisphere {
    fn default() -> Self {
        Self { closed: true }
    }
}

impl Hemisphere {
    pub fn open() -> Self {
        Self { closed: false }
    }

    /// Distance to the cut plane `x = 0`, if the crossing lies inside the unit disc.
    fn cap_distance(ray: &Ray) -> Option<Float> {
        if ray.dir.x == 0.0 {
            return None;
        }
        let t = -ray.origin.x / ray.dir.x;
        let p = ray.at(t);
        if p.y * p.y + p.z * p.z <= 1.0 { Some(t) } else { None }
    }
}

impl Primitive for Hemisphere {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        let mut hits = LocalHits::new();
        for t in Sphere.local_intersect(ray) {
            if ray.at(t).x >= 0.0 {
                hits.push(t);
            } else if self.closed {
                // The plane distance stands in for whichever sphere hit was cut away,
                // but only when the crossing lies inside the unit disc. Outside the
                // disc there is no cap surface there, so the cut-away hit is dropped
                // rather than replaced.
                if let Some(t_cap) = Self::cap_distance(ray) {
                    hits.push(t_cap);
                }
            }
        }
        hits
    }

    fn local_normal_at(&self, p: Point3f) -> Normal3 {
        if self.closed && p.x < EPSILON && p.y * p.y + p.z * p.z < 1.0 - EPSILON {
            Normal3::new(-1.0, 0.0, 0.0)
        } else {
            Sphere.local_normal_at(p)
        }
    }

    fn object_bound(&self) -> Bounds3f {
        bounds3f!((0, -1, -1), (1, 1, 1))
    }
}
