use crate::geometry::{Ray, Transform};
use crate::interaction::IntersectionList;
use crate::{Point3f, PointLight, Shape};
use cgmath::InnerSpace;

/// The scene as seen by the integrator: borrowed top-level shapes and lights.
///
/// The world never owns geometry; whoever built the scene keeps it alive for as long as
/// the world is in use.
#[derive(Clone, Debug, Default)]
pub struct World<'a> {
    shapes: Vec<&'a Shape>,
    lights: Vec<&'a PointLight>,
}

impl<'a> World<'a> {
    pub fn new() -> Self {
        Self { shapes: Vec::new(), lights: Vec::new() }
    }

    /// Register a top-level shape. Returns `false`, leaving the world unchanged, if this
    /// exact shape is already registered.
    pub fn add_shape(&mut self, shape: &'a Shape) -> bool {
        if self.contains(shape) {
            return false;
        }
        self.shapes.push(shape);
        true
    }

    pub fn add_light(&mut self, light: &'a PointLight) {
        self.lights.push(light);
    }

    pub fn contains(&self, shape: &Shape) -> bool {
        self.shapes.iter().any(|s| std::ptr::eq(*s, shape))
    }

    pub fn shapes(&self) -> &[&'a Shape] {
        &self.shapes
    }

    pub fn lights(&self) -> &[&'a PointLight] {
        &self.lights
    }

    /// Every hit of `ray` against every shape, sorted by distance.
    pub fn intersect(&self, ray: &Ray) -> IntersectionList<'a> {
        let mut list = IntersectionList::new();
        let identity = Transform::identity();
        for shape in &self.shapes {
            shape.add_intersections(ray, &identity, &mut list);
        }
        list
    }

    /// Whether `point` is blocked from `light` by a shadow-casting shape.
    pub fn is_shadowed_from(&self, point: Point3f, light: &PointLight) -> bool {
        if !light.casts_shadow {
            return false;
        }

        let v = light.position - point;
        let distance = v.magnitude();
        if distance == 0.0 {
            return false;
        }

        let ray = Ray::new(point, v / distance);
        self.intersect(&ray)
            .iter()
            .find(|i| i.t >= 0.0 && i.shape.material.casts_shadow)
            .map_or(false, |i| i.t < distance)
    }

    /// Whether no light reaches `point`. A world without lights leaves everything in
    /// shadow.
    pub fn is_shadowed(&self, point: Point3f) -> bool {
        self.lights.iter().all(|l| self.is_shadowed_from(point, l))
    }
}
