use crate::pattern::TexturedPattern;
use crate::{Colour, Float, Normal3, Point3f, PointLight, Transform, Vec3f, reflect};
use cgmath::InnerSpace;

/// Phong surface description plus the coefficients the recursive integrator needs for
/// reflection and refraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub colour: Colour,
    /// Overrides `colour` when present.
    pub pattern: Option<TexturedPattern>,
    pub ambient: Float,
    pub diffuse: Float,
    pub specular: Float,
    pub shininess: Float,
    pub reflective: Float,
    pub transparency: Float,
    pub refractive_index: Float,
    /// Shapes with this cleared are ignored by shadow rays.
    pub casts_shadow: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            colour: Colour::WHITE,
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            casts_shadow: true,
        }
    }
}

impl Material {
    pub fn glass() -> Self {
        Self {
            transparency: 1.0,
            refractive_index: 1.5,
            ..Self::default()
        }
    }

    pub fn mirror() -> Self {
        Self {
            colour: Colour::BLACK,
            diffuse: 0.0,
            ambient: 0.0,
            reflective: 1.0,
            ..Self::default()
        }
    }

    /// Surface colour at `world_point` before lighting.
    pub fn colour_at(&self, object_to_world: &Transform, world_point: Point3f) -> Colour {
        match &self.pattern {
            Some(pattern) => pattern.colour_at_object(object_to_world, world_point),
            None => self.colour,
        }
    }

    /// Phong reflection of a single light. `point` is expected to already be nudged off
    /// the surface; a shadowed point only receives the ambient term.
    #[allow(clippy::too_many_arguments)]
    pub fn lighting(
        &self,
        object_to_world: &Transform,
        light: &PointLight,
        point: Point3f,
        eyev: Vec3f,
        normalv: Normal3,
        in_shadow: bool,
    ) -> Colour {
        let effective = self.colour_at(object_to_world, point) * light.intensity;
        let ambient = effective * self.ambient;
        if in_shadow {
            return ambient;
        }

        let lightv = (light.position - point).normalize();
        let light_dot_normal = lightv.dot(normalv.0);
        if light_dot_normal < 0.0 {
            return ambient;
        }

        let diffuse = effective * self.diffuse * light_dot_normal;

        let reflectv = reflect(-lightv, &normalv);
        let reflect_dot_eye = reflectv.dot(eyev);
        let specular = if reflect_dot_eye <= 0.0 {
            Colour::BLACK
        } else {
            light.intensity * self.specular * reflect_dot_eye.powf(self.shininess)
        };

        ambient + diffuse + specular
    }
}
