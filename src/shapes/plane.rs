use crate::{Float, Point3f, Normal3, Ray};
use crate::math::{EPSILON, INFINITY, NEG_INFINITY};
use crate::geometry::bounds::Bounds3f;
use crate::shapes::{Primitive, LocalHits};
use smallvec::smallvec;
use std::fmt;
use std::sync::Arc;

/// Distance to the local `y = 0` plane, or `None` for a ray running parallel to it.
fn plane_distance(ray: &Ray) -> Option<Float> {
    if ray.dir.y.abs() < EPSILON {
        None
    } else {
        Some(-ray.origin.y / ray.dir.y)
    }
}

fn up() -> Normal3 {
    Normal3::new(0.0, 1.0, 0.0)
}

/// The infinite xz plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane;

impl Primitive for Plane {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        plane_distance(ray).into_iter().collect()
    }

    fn local_normal_at(&self, _p: Point3f) -> Normal3 {
        up()
    }

    fn object_bound(&self) -> Bounds3f {
        Bounds3f::with_bounds(
            Point3f::new(NEG_INFINITY, 0.0, NEG_INFINITY),
            Point3f::new(INFINITY, 0.0, INFINITY),
        )
    }
}

/// A rectangle in the xz plane spanning `[-half_x, half_x] x [-half_z, half_z]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    pub half_x: Float,
    pub half_z: Float,
}

impl Default for Sheet {
    fn default() -> Self {
        Self { half_x: 1.0, half_z: 1.0 }
    }
}

impl Sheet {
    pub fn new(half_x: Float, half_z: Float) -> Self {
        Self { half_x, half_z }
    }

    fn covers(&self, p: Point3f) -> bool {
        p.x.abs() <= self.half_x && p.z.abs() <= self.half_z
    }
}

impl Primitive for Sheet {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        match plane_distance(ray) {
            Some(t) if self.covers(ray.at(t)) => smallvec![t],
            _ => LocalHits::new(),
        }
    }

    fn local_normal_at(&self, _p: Point3f) -> Normal3 {
        up()
    }

    fn object_bound(&self) -> Bounds3f {
        bounds3f!((-self.half_x, 0, -self.half_z), (self.half_x, 0, self.half_z))
    }
}

/// A disc of `radius` in the xz plane, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub radius: Float,
}

impl Default for Disc {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Primitive for Disc {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        match plane_distance(ray) {
            Some(t) => {
                let p = ray.at(t);
                if p.x * p.x + p.z * p.z <= self.radius * self.radius {
                    smallvec![t]
                } else {
                    LocalHits::new()
                }
            }
            None => LocalHits::new(),
        }
    }

    fn local_normal_at(&self, _p: Point3f) -> Normal3 {
        up()
    }

    fn object_bound(&self) -> Bounds3f {
        bounds3f!((-self.radius, 0, -self.radius), (self.radius, 0, self.radius))
    }
}

/// Predicate over a local hit point; `true` where the surface is solid.
pub type SolidFn = Arc<dyn Fn(Point3f) -> bool + Send + Sync>;

/// A sheet with procedural holes: hits inside the rectangle are kept only where `solid`
/// says so.
#[derive(Clone)]
pub struct PorousSheet {
    pub sheet: Sheet,
    pub solid: SolidFn,
}

impl PorousSheet {
    pub fn new(sheet: Sheet, solid: impl Fn(Point3f) -> bool + Send + Sync + 'static) -> Self {
        Self { sheet, solid: Arc::new(solid) }
    }
}

impl fmt::Debug for PorousSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PorousSheet")
            .field("sheet", &self.sheet)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PorousSheet {
    fn eq(&self, other: &Self) -> bool {
        let same_fn = std::ptr::eq(
            Arc::as_ptr(&self.solid) as *const u8,
            Arc::as_ptr(&other.solid) as *const u8,
        );
        self.sheet == other.sheet && same_fn
    }
}

impl Primitive for PorousSheet {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        let mut hits = self.sheet.local_intersect(ray);
        hits.retain(|t| (self.solid)(ray.at(*t)));
        hits
    }

    fn local_normal_at(&self, p: Point3f) -> Normal3 {
        self.sheet.local_normal_at(p)
    }

    fn object_bound(&self) -> Bounds3f {
        self.sheet.object_bound()
    }
}
