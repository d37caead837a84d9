use std::f64::consts::{FRAC_PI_2, PI};
use std::path::PathBuf;

use cgmath::{Deg, Rad};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing_subscriber::EnvFilter;

use whitted::camera::Camera;
use whitted::integrator::{render, RenderSettings};
use whitted::pattern::checkerboard::Checker;
use whitted::pattern::perlin::Perturbed;
use whitted::pattern::{Ring, Stripe, TexturedPattern};
use whitted::shapes::{Cone, Cylinder, Disc, PorousSheet, Sheet, ShapeKind};
use whitted::{
    point3f, vec3f, Colour, Material, PointLight, Shape, Transform, Vec3f, World,
    DEFAULT_RECURSION_DEPTH,
};

#[derive(Parser, Debug)]
#[clap(about = "Render the showcase scene")]
struct Args {
    #[clap(long, default_value_t = 640)]
    width: usize,

    #[clap(long, default_value_t = 360)]
    height: usize,

    /// Horizontal field of view in degrees
    #[clap(long, default_value_t = 60.0)]
    fov: f64,

    /// Reflection and refraction bounces per primary ray
    #[clap(long, default_value_t = DEFAULT_RECURSION_DEPTH)]
    depth: u32,

    /// Largest group left undivided when building the BVH
    #[clap(long, default_value_t = 4)]
    bvh_threshold: usize,

    /// Number of random spheres in the cluster
    #[clap(long, default_value_t = 200)]
    spheres: usize,

    #[clap(long, default_value_t = 7)]
    seed: u64,

    #[clap(long)]
    serial: bool,

    #[clap(long)]
    progress: bool,

    #[clap(short, long, default_value = "render.png")]
    output: PathBuf,
}

fn matte(colour: Colour) -> Material {
    Material { colour, specular: 0.1, ..Material::default() }
}

fn sphere_cluster(count: usize, seed: u64) -> Shape {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let children = (0..count)
        .map(|_| {
            let r: f64 = rng.gen_range(0.05..0.2);
            let centre = Vec3f::new(
                rng.gen_range(-1.5..1.5),
                rng.gen_range(0.0..2.0),
                rng.gen_range(-1.5..1.5),
            );
            let colour = Colour::new_with(|_| rng.gen_range(0.2..1.0));
            Shape::sphere()
                .with_transform(Transform::uniform_scale(r).then(Transform::translate(centre)))
                .with_material(Material { reflective: 0.2, ..matte(colour) })
        })
        .collect();
    Shape::group(children).with_transform(Transform::translate(vec3f!(3.5, 0.2, 2.0)))
}

fn build_scene(args: &Args) -> (Vec<Shape>, Vec<PointLight>) {
    let floor = Shape::plane().with_material(Material {
        pattern: Some(TexturedPattern::new(Checker::new(Colour::uniform(0.9), Colour::uniform(0.2)))),
        reflective: 0.1,
        ..Material::default()
    });

    let marble = Perturbed::new(
        Stripe { a: Colour::new(0.9, 0.85, 0.8), b: Colour::new(0.4, 0.3, 0.3) },
        0.3,
    );
    let marble_sphere = Shape::sphere()
        .with_transform(Transform::translate(vec3f!(-1.5, 1, 0.5)))
        .with_material(Material {
            pattern: Some(TexturedPattern::new(marble).with_transform(Transform::uniform_scale(0.2))),
            ..Material::default()
        });

    let glass_sphere = Shape::sphere()
        .with_transform(Transform::uniform_scale(0.75).then(Transform::translate(vec3f!(0.5, 0.75, -1))))
        .with_material(Material { colour: Colour::uniform(0.1), ..Material::glass() });

    let mirror_cube = Shape::cube()
        .with_transform(
            Transform::uniform_scale(0.6)
                .then(Transform::rotate_y(Deg(30.0)))
                .then(Transform::translate(vec3f!(1.5, 0.6, 2.5))),
        )
        .with_material(Material::mirror());

    let pillar = Shape::new(ShapeKind::Cylinder(Cylinder::new(0.0, 2.5, true)))
        .with_transform(Transform::scale(0.3, 1.0, 0.3).then(Transform::translate(vec3f!(-3, 0, 2))))
        .with_material(matte(Colour::new(0.6, 0.6, 0.8)));

    let cone = Shape::new(ShapeKind::Cone(Cone::new(-1.0, 0.0, true)))
        .with_transform(Transform::scale(0.4, 1.2, 0.4).then(Transform::translate(vec3f!(-3, 3.7, 2))))
        .with_material(matte(Colour::new(0.9, 0.4, 0.2)));

    let bowl = Shape::hemisphere()
        .with_transform(
            Transform::rotate_z(Rad(FRAC_PI_2))
                .then(Transform::uniform_scale(0.5))
                .then(Transform::translate(vec3f!(-0.5, 0.5, -2.2))),
        )
        .with_material(Material {
            pattern: Some(
                TexturedPattern::new(Ring { a: Colour::new(0.8, 0.2, 0.2), b: Colour::WHITE })
                    .with_transform(Transform::uniform_scale(0.15)),
            ),
            ..Material::default()
        });

    let coaster = Shape::new(ShapeKind::Disc(Disc { radius: 0.8 }))
        .with_transform(Transform::translate(vec3f!(0.5, 0.001, -1)))
        .with_material(matte(Colour::new(0.2, 0.5, 0.3)));

    let backdrop = Shape::sheet()
        .with_transform(
            Transform::scale(4.0, 1.0, 2.0)
                .then(Transform::rotate_x(Rad(-FRAC_PI_2)))
                .then(Transform::translate(vec3f!(0, 2, 6))),
        )
        .with_material(matte(Colour::new(0.3, 0.4, 0.6)));

    let grille = Shape::new(ShapeKind::PorousSheet(PorousSheet::new(Sheet::new(1.0, 1.5), |p| {
        let cell = |v: f64| (v * 4.0).rem_euclid(1.0) < 0.6;
        cell(p.x) || cell(p.z)
    })))
    .with_transform(
        Transform::rotate_x(Rad(-FRAC_PI_2))
            .then(Transform::rotate_y(Rad(-PI / 6.0)))
            .then(Transform::translate(vec3f!(-2.5, 1.5, 4))),
    )
    .with_material(matte(Colour::new(0.7, 0.7, 0.2)));

    let mut cluster = sphere_cluster(args.spheres, args.seed);
    cluster.divide(args.bvh_threshold);
    if let Some(group) = cluster.as_group() {
        tracing::info!(
            leaves = group.leaves().len(),
            groups = group.group_count(),
            "built sphere cluster"
        );
    }

    let shapes = vec![
        floor, marble_sphere, glass_sphere, mirror_cube, pillar, cone, bowl, coaster, backdrop,
        grille, cluster,
    ];
    let lights = vec![
        PointLight::new(point3f!(-10, 10, -10), Colour::uniform(0.8)),
        PointLight::new(point3f!(6, 8, -4), Colour::uniform(0.3)).without_shadows(),
    ];
    (shapes, lights)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.width > 0 && args.height > 0, "image dimensions must be non-zero");
    tracing::debug!(?args, "starting");

    let (shapes, lights) = build_scene(&args);
    let mut world = World::new();
    for shape in &shapes {
        world.add_shape(shape);
    }
    for light in &lights {
        world.add_light(light);
    }

    let camera = Camera::new(args.width, args.height, Rad::from(Deg(args.fov)).0)
        .looking_at(point3f!(0, 2.5, -7), point3f!(0, 1, 0), vec3f!(0, 1, 0))?;
    let settings = RenderSettings {
        max_depth: args.depth,
        parallel: !args.serial,
        progress: args.progress,
    };

    let film = render(&camera, &world, &settings);
    film.save(&args.output)?;
    tracing::info!(path = %args.output.display(), "wrote image");

    Ok(())
}
