use crate::{Point3f, Normal3, Ray};
use crate::geometry::bounds::Bounds3f;
use crate::math::quadratic;
use crate::shapes::{Primitive, LocalHits};
use cgmath::{EuclideanSpace, InnerSpace};
use smallvec::smallvec;

/// Unit sphere centred on the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sphere;

impl Primitive for Sphere {
    fn local_intersect(&self, ray: &Ray) -> LocalHits {
        let oc = ray.origin.to_vec();
        let a = ray.dir.magnitude2();
        let b = 2.0 * ray.dir.dot(oc);
        let c = oc.magnitude2() - 1.0;

        // a tangent ray still reports both (equal) roots
        match quadratic(a, b, c) {
            Some((t0, t1)) => smallvec![t0, t1],
            None => LocalHits::new(),
        }
    }

    fn local_normal_at(&self, p: Point3f) -> Normal3 {
        Normal3(p.to_vec())
    }

    fn object_bound(&self) -> Bounds3f {
        bounds3f!((-1, -1, -1), (1, 1, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn hits(origin: Point3f, dir: crate::Vec3f) -> LocalHits {
        Sphere.local_intersect(&Ray::new(origin, dir))
    }

    #[test]
    fn test_ray_through_centre() {
        let xs = hits(point3f!(0, 0, -5), vec3f!(0, 0, 1));
        assert_eq!(xs.len(), 2);
        assert_abs_diff_eq!(xs[0], 4.0, epsilon = 1e-10);
        assert_abs_diff_eq!(xs[1], 6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_tangent_ray_has_two_equal_hits() {
        let xs = hits(point3f!(0, 1, -5), vec3f!(0, 0, 1));
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0], xs[1]);
        assert_abs_diff_eq!(xs[0], 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_miss() {
        assert!(hits(point3f!(0, 2, -5), vec3f!(0, 0, 1)).is_empty());
    }

    #[test]
    fn test_origin_inside() {
        let xs = hits(point3f!(0, 0, 0), vec3f!(0, 0, 1));
        assert_abs_diff_eq!(xs[0], -1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(xs[1], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let xs = hits(point3f!(0, 0, 5), vec3f!(0, 0, 1));
        assert_abs_diff_eq!(xs[0], -6.0, epsilon = 1e-10);
        assert_abs_diff_eq!(xs[1], -4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_unnormalized_direction_keeps_parametrization() {
        let xs = hits(point3f!(0, 0, -5), vec3f!(0, 0, 2));
        assert_abs_diff_eq!(xs[0], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(xs[1], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_normals_at_hits_are_radial() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12);
        for _ in 0..200 {
            let origin = point3f!(rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0), -6.0);
            let target = point3f!(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5));
            let ray = Ray::new(origin, target - origin);
            for t in Sphere.local_intersect(&ray) {
                let n = Sphere.local_normal_at(ray.at(t));
                assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-9);
            }
        }
    }
}
