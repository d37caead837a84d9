use crate::{Float, Point3f, Vec3f, Ray};
use crate::geometry::{Transform, Transformable};
use crate::math::{EPSILON, INFINITY, NEG_INFINITY};
use cgmath::Matrix4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X, Y, Z
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Axis-aligned bounding box in some shape's local frame. The empty box has
/// `min = +inf` and `max = -inf` so that joining anything into it yields that thing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3f {
    pub min: Point3f,
    pub max: Point3f,
}

impl Default for Bounds3f {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds3f {
    pub fn empty() -> Self {
        Self {
            min: Point3f::new(INFINITY, INFINITY, INFINITY),
            max: Point3f::new(NEG_INFINITY, NEG_INFINITY, NEG_INFINITY),
        }
    }

    pub fn with_bounds(min: Point3f, max: Point3f) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn join_point(self, p: Point3f) -> Self {
        Self {
            min: Point3f::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z)),
            max: Point3f::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z)),
        }
    }

    pub fn join(self, other: &Bounds3f) -> Self {
        if other.is_empty() {
            return self;
        }
        self.join_point(other.min).join_point(other.max)
    }

    pub fn contains_point(&self, p: Point3f) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    pub fn contains(&self, other: &Bounds3f) -> bool {
        other.is_empty() || (self.contains_point(other.min) && self.contains_point(other.max))
    }

    pub fn diagonal(&self) -> Vec3f {
        self.max - self.min
    }

    pub fn centroid(&self) -> Point3f {
        self.min + (self.diagonal() / 2.0)
    }

    /// The longest finite axis, ignoring any whose extent is within `EPSILON` of zero.
    pub fn maximum_extent(&self) -> Option<Axis> {
        let d = self.diagonal();
        [(Axis::X, d.x), (Axis::Y, d.y), (Axis::Z, d.z)].iter()
            .filter(|(_, len)| len.is_finite() && *len > EPSILON)
            .fold(None, |best: Option<(Axis, Float)>, &(axis, len)| match best {
                Some((_, best_len)) if best_len >= len => best,
                _ => Some((axis, len)),
            })
            .map(|(axis, _)| axis)
    }

    /// Bisect along the longest axis. A box with no usable axis splits into two copies
    /// of itself.
    pub fn split(&self) -> (Bounds3f, Bounds3f) {
        let axis = match self.maximum_extent() {
            Some(axis) => axis.index(),
            None => return (*self, *self),
        };

        let mid = (self.min[axis] + self.max[axis]) / 2.0;
        let mut left_max = self.max;
        let mut right_min = self.min;
        left_max[axis] = mid;
        right_min[axis] = mid;

        (Bounds3f::with_bounds(self.min, left_max), Bounds3f::with_bounds(right_min, self.max))
    }

    /// Entry and exit distances of `ray` through the box, if the slabs overlap.
    pub fn slab_interval(&self, ray: &Ray) -> Option<(Float, Float)> {
        if self.is_empty() {
            return None;
        }

        let (xmin, xmax) = check_axis(ray.origin.x, ray.dir.x, self.min.x, self.max.x);
        let (ymin, ymax) = check_axis(ray.origin.y, ray.dir.y, self.min.y, self.max.y);
        let (zmin, zmax) = check_axis(ray.origin.z, ray.dir.z, self.min.z, self.max.z);

        let tmin = xmin.max(ymin).max(zmin);
        let tmax = xmax.min(ymax).min(zmax);

        if tmin > tmax { None } else { Some((tmin, tmax)) }
    }

    /// Conservative test used to prune traversal; it never produces a hit itself.
    pub fn intersects(&self, ray: &Ray) -> bool {
        self.slab_interval(ray).is_some()
    }

    pub fn iter_corners(&self) -> impl Iterator<Item = Point3f> {
        let (min, max) = (self.min, self.max);
        (0..8).map(move |i| {
            Point3f::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            )
        })
    }
}

/// Entry/exit distance against one pair of slab planes. Rays exactly parallel to the
/// slab get signed infinities depending on whether the origin lies between the planes.
/// Any non-zero component is divided through: directions are unnormalized and can be
/// arbitrarily short after scaling, so no tolerance is safe here.
pub(crate) fn check_axis(origin: Float, dir: Float, min: Float, max: Float) -> (Float, Float) {
    let tmin_num = min - origin;
    let tmax_num = max - origin;

    if dir != 0.0 {
        let t0 = tmin_num / dir;
        let t1 = tmax_num / dir;
        if t0 > t1 { (t1, t0) } else { (t0, t1) }
    } else {
        let t0 = if tmin_num > 0.0 { INFINITY } else { NEG_INFINITY };
        let t1 = if tmax_num < 0.0 { NEG_INFINITY } else { INFINITY };
        (t0, t1)
    }
}

// Infinite extents (planes) meet zero matrix entries here; skipping those terms keeps
// 0 * inf from turning a corner into NaN.
fn transform_corner(m: &Matrix4<Float>, p: Point3f) -> Point3f {
    let row = |r: usize| {
        [(m[0][r], p.x), (m[1][r], p.y), (m[2][r], p.z)].iter()
            .filter(|(c, _)| *c != 0.0)
            .map(|(c, v)| c * v)
            .sum::<Float>() + m[3][r]
    };
    Point3f::new(row(0), row(1), row(2))
}

impl Transformable for Bounds3f {
    fn transform(&self, t: Transform) -> Self {
        if self.is_empty() {
            return *self;
        }
        self.iter_corners().fold(Bounds3f::empty(), |b, p| {
            b.join_point(transform_corner(&t.t, p))
        })
    }
}
