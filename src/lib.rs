#[macro_use] pub mod macros; // must stay at the top
pub mod error;
pub mod math;
pub mod geometry;
pub mod colour;
pub mod fresnel;
pub mod pattern;
pub mod material;
pub mod light;
pub mod shapes;
pub mod bvh;
pub mod interaction;
pub mod world;
pub mod camera;
pub mod film;
pub mod integrator;

pub use geometry::*;
pub use error::{Error, Result};
pub use colour::Colour;
pub use material::Material;
pub use light::PointLight;
pub use shapes::{Shape, ShapeKind};
pub use bvh::ShapeGroup;
pub use interaction::{Intersection, IntersectionList, IntersectionComputation};
pub use world::World;
pub use math::{EPSILON, float_eq};

use cgmath::{Point3, Vector3};

pub type Float = f64;

pub type Point3f = Point3<Float>;
pub type Vec3f = Vector3<Float>;

/// Recursion budget for reflected and refracted rays when the caller has no opinion.
pub const DEFAULT_RECURSION_DEPTH: u32 = 5;
