use crate::{Point3f, Colour};

/// An infinitesimal light at a position with no falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3f,
    pub intensity: Colour,
    /// When false, points are never considered shadowed from this light.
    pub casts_shadow: bool,
}

impl PointLight {
    pub fn new(position: Point3f, intensity: Colour) -> Self {
        Self { position, intensity, casts_shadow: true }
    }

    pub fn without_shadows(self) -> Self {
        Self { casts_shadow: false, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_defaults() {
        let light = PointLight::new(point3f!(0, 0, 0), Colour::WHITE);
        assert_eq!(light.position, point3f!(0, 0, 0));
        assert_eq!(light.intensity, Colour::WHITE);
        assert!(light.casts_shadow);
        assert!(!light.without_shadows().casts_shadow);
    }
}
