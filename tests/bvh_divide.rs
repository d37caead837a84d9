use approx::assert_abs_diff_eq;
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use whitted::{point3f, Ray, Shape, Transform, Vec3f, World};

fn random_group(rng: &mut Xoshiro256PlusPlus, count: usize) -> Shape {
    let children = (0..count)
        .map(|i| {
            let centre = Vec3f::new(rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0));
            let scale = Transform::uniform_scale(rng.gen_range(0.05..0.5));
            let shape = if i % 3 == 0 { Shape::cube() } else { Shape::sphere() };
            shape.with_transform(scale.then(Transform::translate(centre)))
        })
        .collect();
    Shape::group(children)
}

fn sorted_hits(world: &World, ray: &Ray) -> Vec<f64> {
    let mut ts: Vec<f64> = world.intersect(ray).iter().map(|i| i.t).collect();
    ts.sort_by(|a, b| a.partial_cmp(b).unwrap());
    ts
}

#[test]
fn divide_preserves_every_leaf() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    for &threshold in &[1, 2, 4, 8] {
        let original = random_group(&mut rng, 60);
        let mut divided = original.clone();
        divided.divide(threshold);

        let before = original.as_group().unwrap().leaves();
        let after = divided.as_group().unwrap().leaves();
        assert_eq!(before.len(), after.len());
        for leaf in &before {
            let expected = before.iter().filter(|l| l == &leaf).count();
            let found = after.iter().filter(|l| l == &leaf).count();
            assert_eq!(expected, found);
        }
        assert!(divided.as_group().unwrap().group_count() > 1);
    }
}

#[test]
fn divided_group_bounds_cover_children() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(12);
    let mut shape = random_group(&mut rng, 40);
    shape.divide(3);

    fn check(shape: &Shape) {
        if let Some(group) = shape.as_group() {
            for child in group.children() {
                let cb = child.parent_space_bounds();
                assert!(group.bounds().contains(&cb), "{:?} not inside {:?}", cb, group.bounds());
                check(child);
            }
        }
    }
    check(&shape);
}

#[test]
fn divide_does_not_change_hits() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(13);
    let flat = random_group(&mut rng, 150);
    let mut divided = flat.clone();
    divided.divide(4);

    let mut flat_world = World::new();
    flat_world.add_shape(&flat);
    let mut divided_world = World::new();
    divided_world.add_shape(&divided);

    for _ in 0..300 {
        let origin = point3f!(rng.gen_range(-6.0..6.0), rng.gen_range(-6.0..6.0), -10.0);
        let dir = Vec3f::new(rng.gen_range(-0.3..0.3), rng.gen_range(-0.3..0.3), 1.0);
        let ray = Ray::new(origin, dir);

        let a = sorted_hits(&flat_world, &ray);
        let b = sorted_hits(&divided_world, &ray);
        assert_eq!(a.len(), b.len());
        for (ta, tb) in a.iter().zip(&b) {
            assert_abs_diff_eq!(*ta, *tb, epsilon = 1e-9);
        }

        let hit_a = flat_world.intersect(&ray).hit().map(|h| h.t);
        let hit_b = divided_world.intersect(&ray).hit().map(|h| h.t);
        assert_eq!(hit_a.is_some(), hit_b.is_some());
        if let (Some(ta), Some(tb)) = (hit_a, hit_b) {
            assert_abs_diff_eq!(ta, tb, epsilon = 1e-9);
        }
    }
}
