use crate::bvh::ShapeGroup;
use crate::geometry::bounds::Bounds3f;
use crate::geometry::{Normal3, Ray, Transform, Transformable};
use crate::interaction::{Intersection, IntersectionList};
use crate::{Float, Material, Point3f};
use smallvec::SmallVec;

pub mod sphere;
pub mod hemisphere;
pub mod plane;
pub mod cube;
pub mod cylinder;
pub mod cone;

pub use sphere::Sphere;
pub use hemisphere::Hemisphere;
pub use plane::{Plane, Sheet, Disc, PorousSheet};
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use cone::Cone;

/// Hit distances found by a primitive in its own object space. Nothing produces more
/// than four.
pub type LocalHits = SmallVec<[Float; 4]>;

/// Geometry in its own object space. Distances are left unsorted and may be negative.
pub trait Primitive {
    fn local_intersect(&self, ray: &Ray) -> LocalHits;

    /// Outward normal at a point on the surface, not necessarily unit length.
    fn local_normal_at(&self, p: Point3f) -> Normal3;

    fn object_bound(&self) -> Bounds3f;
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Sphere(Sphere),
    Hemisphere(Hemisphere),
    Plane(Plane),
    Sheet(Sheet),
    Disc(Disc),
    PorousSheet(PorousSheet),
    Cube(Cube),
    Cylinder(Cylinder),
    Cone(Cone),
    Group(ShapeGroup),
}

impl ShapeKind {
    fn primitive(&self) -> Option<&dyn Primitive> {
        match self {
            ShapeKind::Sphere(s) => Some(s),
            ShapeKind::Hemisphere(s) => Some(s),
            ShapeKind::Plane(s) => Some(s),
            ShapeKind::Sheet(s) => Some(s),
            ShapeKind::Disc(s) => Some(s),
            ShapeKind::PorousSheet(s) => Some(s),
            ShapeKind::Cube(s) => Some(s),
            ShapeKind::Cylinder(s) => Some(s),
            ShapeKind::Cone(s) => Some(s),
            ShapeKind::Group(_) => None,
        }
    }
}

/// A primitive or group placed in its parent's space.
///
/// `transform` maps object space into the parent's space (world space for top-level
/// shapes). Hits carry the composite object-to-world transform accumulated while
/// descending through groups, so a shape never needs to know its parent.
#[derive(Clone, Debug)]
pub struct Shape {
    pub transform: Transform,
    pub material: Material,
    pub kind: ShapeKind,
}

macro_rules! leaf_constructor {
    ($name:ident, $kind:ident) => {
        pub fn $name() -> Self {
            Self::new(ShapeKind::$kind($kind::default()))
        }
    };
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self { transform: Transform::identity(), material: Material::default(), kind }
    }

    leaf_constructor!(sphere, Sphere);
    leaf_constructor!(hemisphere, Hemisphere);
    leaf_constructor!(plane, Plane);
    leaf_constructor!(sheet, Sheet);
    leaf_constructor!(disc, Disc);
    leaf_constructor!(cube, Cube);
    leaf_constructor!(cylinder, Cylinder);
    leaf_constructor!(cone, Cone);

    pub fn group(children: Vec<Shape>) -> Self {
        Self::new(ShapeKind::Group(ShapeGroup::new(children)))
    }

    pub fn with_transform(self, transform: Transform) -> Self {
        Self { transform, ..self }
    }

    pub fn with_material(self, material: Material) -> Self {
        Self { material, ..self }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ShapeKind::Group(_))
    }

    pub fn as_group(&self) -> Option<&ShapeGroup> {
        match &self.kind {
            ShapeKind::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut ShapeGroup> {
        match &mut self.kind {
            ShapeKind::Group(g) => Some(g),
            _ => None,
        }
    }

    /// All hits of `ray`, given in this shape's parent space, sorted by distance.
    pub fn intersect(&self, ray: &Ray) -> IntersectionList<'_> {
        let mut list = IntersectionList::new();
        self.add_intersections(ray, &Transform::identity(), &mut list);
        list
    }

    /// Insert every hit of `ray` into `list`. `parent_to_world` is the composite
    /// transform of everything above this shape.
    pub fn add_intersections<'a>(
        &'a self,
        ray: &Ray,
        parent_to_world: &Transform,
        list: &mut IntersectionList<'a>,
    ) {
        let local_ray = self.transform.inverse().transform(*ray);
        let object_to_world = self.transform.then(*parent_to_world);

        match &self.kind {
            ShapeKind::Group(group) => group.add_intersections(&local_ray, &object_to_world, list),
            kind => {
                if let Some(prim) = kind.primitive() {
                    for t in prim.local_intersect(&local_ray) {
                        list.insert(Intersection::new(t, self, object_to_world));
                    }
                }
            }
        }
    }

    /// World-space unit normal at `world_point`, for a shape whose composite
    /// object-to-world transform is `object_to_world`.
    ///
    /// Panics for groups: a group has no surface of its own.
    pub fn normal_at_with(&self, object_to_world: &Transform, world_point: Point3f) -> Normal3 {
        let prim = match self.kind.primitive() {
            Some(p) => p,
            None => panic!("normal_at called on a group; only leaf shapes have surfaces"),
        };
        let object_point = object_to_world.inverse().transform(world_point);
        let object_normal = prim.local_normal_at(object_point);
        object_to_world.transform_normal(&object_normal).normalize()
    }

    /// World-space unit normal for a top-level shape.
    pub fn normal_at(&self, world_point: Point3f) -> Normal3 {
        self.normal_at_with(&self.transform, world_point)
    }

    /// Bounds in this shape's object space.
    pub fn bounds(&self) -> Bounds3f {
        match &self.kind {
            ShapeKind::Group(g) => g.bounds(),
            kind => kind.primitive().map_or_else(Bounds3f::empty, |p| p.object_bound()),
        }
    }

    pub fn parent_space_bounds(&self) -> Bounds3f {
        self.bounds().transform(self.transform)
    }

    /// Subdivide this shape's hierarchy. Leaves are left alone.
    pub fn divide(&mut self, threshold: usize) {
        if let ShapeKind::Group(g) = &mut self.kind {
            g.divide(threshold);
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.transform == other.transform
            && self.material == other.material
    }
}
