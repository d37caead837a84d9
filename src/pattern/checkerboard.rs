use crate::pattern::{Pattern, is_even_cell};
use crate::{Colour, Point3f};

/// 3D checkerboard of unit cubes. On a plane at an integer coordinate the cells can
/// flip from float noise; offset the plane slightly if that shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checker {
    pub a: Colour,
    pub b: Colour,
}

impl Checker {
    pub fn new(a: Colour, b: Colour) -> Self {
        Self { a, b }
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(Colour::WHITE, Colour::BLACK)
    }
}

impl Pattern for Checker {
    fn colour_at(&self, p: Point3f) -> Colour {
        let sum = p.x.floor() + p.y.floor() + p.z.floor();
        if is_even_cell(sum) { self.a } else { self.b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_repeats_in_each_axis() {
        let c = Checker::default();
        assert_eq!(c.colour_at(point3f!(0, 0, 0)), Colour::WHITE);
        assert_eq!(c.colour_at(point3f!(0.99, 0, 0)), Colour::WHITE);
        assert_eq!(c.colour_at(point3f!(1.01, 0, 0)), Colour::BLACK);
        assert_eq!(c.colour_at(point3f!(0, 0.99, 0)), Colour::WHITE);
        assert_eq!(c.colour_at(point3f!(0, 1.01, 0)), Colour::BLACK);
        assert_eq!(c.colour_at(point3f!(0, 0, 0.99)), Colour::WHITE);
        assert_eq!(c.colour_at(point3f!(0, 0, 1.01)), Colour::BLACK);
    }

    #[test]
    fn test_checker_negative_cells() {
        let c = Checker::default();
        assert_eq!(c.colour_at(point3f!(-0.5, 0, 0)), Colour::BLACK);
        assert_eq!(c.colour_at(point3f!(-0.5, -0.5, 0)), Colour::WHITE);
    }
}
