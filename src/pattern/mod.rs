use crate::{Colour, Float, Point3f, Transform};
use std::fmt::Debug;
use std::sync::Arc;

pub mod checkerboard;
pub mod perlin;

pub use checkerboard::Checker;
pub use perlin::Perturbed;

/// A procedural colour field evaluated in pattern space.
pub trait Pattern: Send + Sync + Debug {
    fn colour_at(&self, p: Point3f) -> Colour;
}

/// Even/odd test on the integer cell containing `x`, correct for negative `x`.
pub(crate) fn is_even_cell(x: Float) -> bool {
    (x.floor() as i64).rem_euclid(2) == 0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solid(pub Colour);

impl Pattern for Solid {
    fn colour_at(&self, _p: Point3f) -> Colour {
        self.0
    }
}

/// Alternates between two colours on unit slabs along x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stripe {
    pub a: Colour,
    pub b: Colour,
}

impl Pattern for Stripe {
    fn colour_at(&self, p: Point3f) -> Colour {
        if is_even_cell(p.x) { self.a } else { self.b }
    }
}

/// Linear blend from `a` to `b` across every unit interval of x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub a: Colour,
    pub b: Colour,
}

impl Pattern for Gradient {
    fn colour_at(&self, p: Point3f) -> Colour {
        let fraction = p.x - p.x.floor();
        Colour::lerp(fraction, self.a, self.b)
    }
}

/// Concentric rings around the y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub a: Colour,
    pub b: Colour,
}

impl Pattern for Ring {
    fn colour_at(&self, p: Point3f) -> Colour {
        let r = Float::sqrt(p.x * p.x + p.z * p.z);
        if is_even_cell(r) { self.a } else { self.b }
    }
}

/// A pattern placed on a shape. `transform` maps pattern space into the shape's object
/// space.
#[derive(Clone, Debug)]
pub struct TexturedPattern {
    pub pattern: Arc<dyn Pattern>,
    pub transform: Transform,
}

impl TexturedPattern {
    pub fn new(pattern: impl Pattern + 'static) -> Self {
        Self { pattern: Arc::new(pattern), transform: Transform::identity() }
    }

    pub fn with_transform(self, transform: Transform) -> Self {
        Self { transform, ..self }
    }

    /// Colour at a world-space point on a shape whose composite object-to-world
    /// transform is `object_to_world`.
    pub fn colour_at_object(&self, object_to_world: &Transform, world_point: Point3f) -> Colour {
        let object_point = object_to_world.inverse().transform(world_point);
        let pattern_point = self.transform.inverse().transform(object_point);
        self.pattern.colour_at(pattern_point)
    }
}

impl PartialEq for TexturedPattern {
    fn eq(&self, other: &Self) -> bool {
        let same_pattern = std::ptr::eq(
            Arc::as_ptr(&self.pattern) as *const u8,
            Arc::as_ptr(&other.pattern) as *const u8,
        );
        same_pattern && self.transform == other.transform
    }
}

/// Echoes the pattern-space point as a colour. Handy for checking which space a lookup
/// happened in.
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct CoordinatePattern;

#[cfg(test)]
impl Pattern for CoordinatePattern {
    fn colour_at(&self, p: Point3f) -> Colour {
        Colour::new(p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn stripe() -> Stripe {
        Stripe { a: Colour::WHITE, b: Colour::BLACK }
    }

    #[test]
    fn test_stripe_constant_in_y_and_z() {
        let s = stripe();
        for p in [point3f!(0, 0, 0), point3f!(0, 1, 0), point3f!(0, 2, 0), point3f!(0, 0, 2)] {
            assert_eq!(s.colour_at(p), Colour::WHITE);
        }
    }

    #[test]
    fn test_stripe_alternates_in_x() {
        let s = stripe();
        assert_eq!(s.colour_at(point3f!(0.9, 0, 0)), Colour::WHITE);
        assert_eq!(s.colour_at(point3f!(1, 0, 0)), Colour::BLACK);
        assert_eq!(s.colour_at(point3f!(-0.1, 0, 0)), Colour::BLACK);
        assert_eq!(s.colour_at(point3f!(-1, 0, 0)), Colour::BLACK);
        assert_eq!(s.colour_at(point3f!(-1.1, 0, 0)), Colour::WHITE);
    }

    #[test]
    fn test_gradient_interpolates() {
        let g = Gradient { a: Colour::WHITE, b: Colour::BLACK };
        assert_eq!(g.colour_at(point3f!(0, 0, 0)), Colour::WHITE);
        assert_abs_diff_eq!(g.colour_at(point3f!(0.25, 0, 0)), Colour::uniform(0.75), epsilon = 1e-12);
        assert_abs_diff_eq!(g.colour_at(point3f!(0.75, 0, 0)), Colour::uniform(0.25), epsilon = 1e-12);
    }

    #[test]
    fn test_ring_extends_in_x_and_z() {
        let r = Ring { a: Colour::WHITE, b: Colour::BLACK };
        assert_eq!(r.colour_at(point3f!(0, 0, 0)), Colour::WHITE);
        assert_eq!(r.colour_at(point3f!(1, 0, 0)), Colour::BLACK);
        assert_eq!(r.colour_at(point3f!(0, 0, 1)), Colour::BLACK);
        assert_eq!(r.colour_at(point3f!(0.708, 0, 0.708)), Colour::BLACK);
    }

    #[test]
    fn test_pattern_with_object_transform() {
        let p = TexturedPattern::new(CoordinatePattern);
        let object_to_world = Transform::scale(2.0, 2.0, 2.0);
        let c = p.colour_at_object(&object_to_world, point3f!(2, 3, 4));
        assert_abs_diff_eq!(c, Colour::new(1.0, 1.5, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_pattern_with_both_transforms() {
        let p = TexturedPattern::new(CoordinatePattern)
            .with_transform(Transform::translate(vec3f!(0.5, 1, 1.5)));
        let object_to_world = Transform::scale(2.0, 2.0, 2.0);
        let c = p.colour_at_object(&object_to_world, point3f!(2.5, 3, 3.5));
        assert_abs_diff_eq!(c, Colour::new(0.75, 0.5, 0.25), epsilon = 1e-12);
    }

    #[test]
    fn test_textured_pattern_equality_is_identity() {
        let p = TexturedPattern::new(stripe());
        let q = TexturedPattern::new(stripe());
        assert_eq!(p, p.clone());
        assert_ne!(p, q);
    }
}
