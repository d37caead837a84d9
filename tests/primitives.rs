use approx::assert_abs_diff_eq;
use cgmath::{EuclideanSpace, InnerSpace, Rad};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::f64::consts::PI;

use whitted::shapes::{Cone, Cylinder, Disc, Hemisphere, PorousSheet, Sheet, ShapeKind};
use whitted::{Point3f, Ray, Shape, Transform, Vec3f};

fn all_primitives() -> Vec<(&'static str, Shape)> {
    vec![
        ("sphere", Shape::sphere()),
        ("hemisphere", Shape::hemisphere()),
        ("open hemisphere", Shape::new(ShapeKind::Hemisphere(Hemisphere::open()))),
        ("plane", Shape::plane()),
        ("sheet", Shape::sheet()),
        ("disc", Shape::new(ShapeKind::Disc(Disc { radius: 1.5 }))),
        (
            "porous sheet",
            Shape::new(ShapeKind::PorousSheet(PorousSheet::new(Sheet::new(1.0, 1.0), |p| {
                (p.x * 2.0).floor().rem_euclid(2.0) == 0.0
            }))),
        ),
        ("cube", Shape::cube()),
        ("cylinder", Shape::cylinder()),
        ("closed cylinder", Shape::new(ShapeKind::Cylinder(Cylinder::new(-1.0, 1.0, true)))),
        ("cone", Shape::cone()),
        ("closed cone", Shape::new(ShapeKind::Cone(Cone::new(-1.0, 1.0, true)))),
    ]
}

fn random_transform(rng: &mut Xoshiro256PlusPlus) -> Transform {
    Transform::scale(rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0))
        .then(Transform::rotate_x(Rad(rng.gen_range(0.0..2.0 * PI))))
        .then(Transform::rotate_y(Rad(rng.gen_range(0.0..2.0 * PI))))
        .then(Transform::rotate_z(Rad(rng.gen_range(0.0..2.0 * PI))))
        .then(Transform::translate(Vec3f::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        )))
}

fn random_unit_vector(rng: &mut Xoshiro256PlusPlus) -> Vec3f {
    loop {
        let v = Vec3f::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        let len2 = v.magnitude2();
        if len2 > 1e-3 && len2 <= 1.0 {
            return v / len2.sqrt();
        }
    }
}

/// A ray from far away aimed close to where `transform` puts the object-space origin.
fn ray_towards(rng: &mut Xoshiro256PlusPlus, transform: &Transform) -> Ray {
    let centre = transform.transform(Point3f::origin());
    let target = centre + random_unit_vector(rng) * rng.gen_range(0.0..0.4);
    let origin = centre + random_unit_vector(rng) * 12.0;
    Ray::new(origin, (target - origin).normalize())
}

#[test]
fn normals_at_hits_are_unit_length() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(21);

    for (name, base) in all_primitives() {
        let mut hits = 0;
        for _ in 0..200 {
            let transform = random_transform(&mut rng);
            let shape = base.clone().with_transform(transform);
            let ray = ray_towards(&mut rng, &transform);

            for i in shape.intersect(&ray).iter() {
                let n = i.normal_at(ray.at(i.t));
                assert!(n.0.x.is_finite() && n.0.y.is_finite() && n.0.z.is_finite(), "{}: {:?}", name, n.0);
                assert_abs_diff_eq!(n.0.magnitude(), 1.0, epsilon = 1e-9);
                hits += 1;
            }
        }
        assert!(hits > 0, "{} was never hit", name);
    }
}

#[test]
fn hits_are_sorted_and_hit_is_first_non_negative() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(22);
    let children: Vec<Shape> = all_primitives()
        .into_iter()
        .map(|(_, s)| s.with_transform(random_transform(&mut rng)))
        .collect();
    let scene = Shape::group(children);

    for _ in 0..500 {
        let origin = Point3f::from_vec(random_unit_vector(&mut rng) * rng.gen_range(0.0..6.0));
        let ray = Ray::new(origin, random_unit_vector(&mut rng));
        let xs = scene.intersect(&ray);

        let ts: Vec<f64> = xs.iter().map(|i| i.t).collect();
        assert!(ts.windows(2).all(|w| w[0] <= w[1]), "unsorted: {:?}", ts);

        let expected = ts.iter().copied().filter(|&t| t >= 0.0).fold(None, |m: Option<f64>, t| {
            Some(m.map_or(t, |m| m.min(t)))
        });
        assert_eq!(xs.hit().map(|h| h.t), expected);
    }
}

#[test]
fn transformed_bounds_contain_hit_points() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(23);

    for (name, base) in all_primitives() {
        if name == "plane" || name == "cylinder" || name == "cone" {
            continue;
        }
        for _ in 0..100 {
            let transform = random_transform(&mut rng);
            let shape = base.clone().with_transform(transform);
            let bounds = shape.parent_space_bounds();
            let ray = ray_towards(&mut rng, &transform);

            for i in shape.intersect(&ray).iter() {
                let p = ray.at(i.t);
                let slack = Vec3f::new(1e-9, 1e-9, 1e-9);
                assert!(
                    p.x >= bounds.min.x - slack.x && p.x <= bounds.max.x + slack.x
                        && p.y >= bounds.min.y - slack.y && p.y <= bounds.max.y + slack.y
                        && p.z >= bounds.min.z - slack.z && p.z <= bounds.max.z + slack.z,
                    "{}: {:?} outside {:?}",
                    name,
                    p,
                    bounds
                );
            }
        }
    }
}
