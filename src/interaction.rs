use crate::{Float, Normal3, Point3f, Ray, Shape, Transform, Vec3f, reflect, EPSILON};
use crate::material::Material;
use cgmath::InnerSpace;
use std::iter::FromIterator;
use std::ops::Index;

/// A hit on a leaf shape. `object_to_world` is the composite transform of every group
/// the ray passed through plus the shape's own.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    pub t: Float,
    pub shape: &'a Shape,
    pub object_to_world: Transform,
}

impl<'a> Intersection<'a> {
    pub fn new(t: Float, shape: &'a Shape, object_to_world: Transform) -> Self {
        Self { t, shape, object_to_world }
    }

    pub fn material(&self) -> &'a Material {
        &self.shape.material
    }

    pub fn normal_at(&self, world_point: Point3f) -> Normal3 {
        self.shape.normal_at_with(&self.object_to_world, world_point)
    }

    /// Same shape, same distance.
    pub fn is_same_hit(&self, other: &Intersection<'_>) -> bool {
        std::ptr::eq(self.shape, other.shape) && self.t == other.t
    }
}

/// Hits kept sorted by distance, negative distances included.
#[derive(Clone, Debug, Default)]
pub struct IntersectionList<'a> {
    hits: Vec<Intersection<'a>>,
    hit_index: Option<usize>,
}

impl<'a> IntersectionList<'a> {
    pub fn new() -> Self {
        Self { hits: Vec::new(), hit_index: None }
    }

    /// Insert keeping the list sorted. Equal distances keep their insertion order.
    pub fn insert(&mut self, i: Intersection<'a>) {
        debug_assert!(!i.t.is_nan(), "NaN intersection distance");
        let pos = self.hits.partition_point(|x| x.t <= i.t);
        self.hits.insert(pos, i);

        let first_visible = self.hits.partition_point(|x| x.t < 0.0);
        self.hit_index = if first_visible < self.hits.len() { Some(first_visible) } else { None };
    }

    /// The nearest hit at a non-negative distance.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.hit_index.map(|i| &self.hits[i])
    }

    pub fn hit_index(&self) -> Option<usize> {
        self.hit_index
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.hits.iter()
    }

    pub fn as_slice(&self) -> &[Intersection<'a>] {
        &self.hits
    }
}

impl<'a> Index<usize> for IntersectionList<'a> {
    type Output = Intersection<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.hits[index]
    }
}

impl<'a> Extend<Intersection<'a>> for IntersectionList<'a> {
    fn extend<T: IntoIterator<Item = Intersection<'a>>>(&mut self, iter: T) {
        for i in iter {
            self.insert(i);
        }
    }
}

impl<'a> FromIterator<Intersection<'a>> for IntersectionList<'a> {
    fn from_iter<T: IntoIterator<Item = Intersection<'a>>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'l, 'a> IntoIterator for &'l IntersectionList<'a> {
    type Item = &'l Intersection<'a>;
    type IntoIter = std::slice::Iter<'l, Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

/// Everything shading needs to know about one hit.
#[derive(Clone, Debug)]
pub struct IntersectionComputation<'a> {
    pub t: Float,
    pub shape: &'a Shape,
    pub object_to_world: Transform,
    pub point: Point3f,
    /// Unit vector back towards the ray origin.
    pub eyev: Vec3f,
    /// Unit normal, flipped to face the eye.
    pub normalv: Normal3,
    /// Whether the ray origin is inside the shape.
    pub inside: bool,
    pub reflectv: Vec3f,
    /// `point` nudged along the normal; origin for shadow and reflection rays.
    pub over_point: Point3f,
    /// `point` nudged against the normal; origin for refraction rays.
    pub under_point: Point3f,
    /// Refractive index of the medium being left.
    pub n1: Float,
    /// Refractive index of the medium being entered.
    pub n2: Float,
}

impl<'a> IntersectionComputation<'a> {
    /// Shading data for `hit` assuming the ray travels through vacuum on both sides.
    pub fn new(hit: &Intersection<'a>, ray: &Ray) -> Self {
        Self::build(hit, ray, 1.0, 1.0)
    }

    /// Shading data for `hit`, with refractive indices worked out from the overlapping
    /// shapes recorded in `list`.
    pub fn with_list(hit: &Intersection<'a>, ray: &Ray, list: &IntersectionList<'a>) -> Self {
        let (n1, n2) = refractive_indices(hit, list);
        Self::build(hit, ray, n1, n2)
    }

    fn build(hit: &Intersection<'a>, ray: &Ray, n1: Float, n2: Float) -> Self {
        let point = ray.at(hit.t);
        let eyev = (-ray.dir).normalize();
        let mut normalv = hit.normal_at(point);

        let inside = normalv.dot(eyev) < 0.0;
        if inside {
            normalv = -normalv;
        }

        let reflectv = reflect(ray.dir, &normalv);
        let over_point = point + normalv.0 * EPSILON;
        let under_point = point - normalv.0 * EPSILON;

        Self {
            t: hit.t,
            shape: hit.shape,
            object_to_world: hit.object_to_world,
            point,
            eyev,
            normalv,
            inside,
            reflectv,
            over_point,
            under_point,
            n1,
            n2,
        }
    }

    pub fn material(&self) -> &'a Material {
        &self.shape.material
    }
}

/// Replay the hits up to `hit`, tracking which shapes the ray is currently inside. The
/// innermost container's index is the medium on each side of the boundary.
fn refractive_indices(hit: &Intersection<'_>, list: &IntersectionList<'_>) -> (Float, Float) {
    fn index_of(containers: &[&Shape]) -> Float {
        containers.last().map_or(1.0, |s| s.material.refractive_index)
    }

    let mut containers: Vec<&Shape> = Vec::new();

    for i in list {
        let is_hit = i.is_same_hit(hit);
        let n1 = if is_hit { Some(index_of(&containers)) } else { None };

        match containers.iter().position(|s| std::ptr::eq(*s, i.shape)) {
            Some(pos) => { containers.remove(pos); }
            None => containers.push(i.shape),
        }

        if let Some(n1) = n1 {
            return (n1, index_of(&containers));
        }
    }

    (1.0, 1.0)
}
