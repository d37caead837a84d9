use crate::{Point3f, Normal3, Ray};
use crate::geometry::bounds::Bounds3f;
use crate::shapes::{Primitive, LocalHits};
use smallvec::smallvec;

/// Axis-aligned cube spanning `[-1, 1]` on every axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cube;

impl Primitive for Cube {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        match self.object_bound().slab_interval(ray) {
            Some((tmin, tmax)) => smallvec![tmin, tmax],
            None => LocalHits::new(),
        }
    }

    fn local_normal_at(&self, p: Point3f) -> Normal3 {
        let (ax, ay, az) = (p.x.abs(), p.y.abs(), p.z.abs());
        let maxc = ax.max(ay).max(az);

        if maxc == ax {
            Normal3::new(p.x, 0.0, 0.0)
        } else if maxc == ay {
            Normal3::new(0.0, p.y, 0.0)
        } else {
            Normal3::new(0.0, 0.0, p.z)
        }
    }

    fn object_bound(&self) -> Bounds3f {
        bounds3f!((-1, -1, -1), (1, 1, 1))
    }
}
