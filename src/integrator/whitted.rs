use crate::fresnel;
use crate::interaction::IntersectionComputation;
use crate::{Colour, Float, Ray, World, EPSILON};
use cgmath::InnerSpace;

/// Reflectance at the hit described by `comps`, from Schlick's approximation.
pub fn schlick(comps: &IntersectionComputation) -> Float {
    fresnel::schlick(comps.eyev.dot(comps.normalv.0), comps.n1, comps.n2)
}

impl<'a> World<'a> {
    /// Colour seen along `ray`. Black when nothing is hit. `depth` bounds how many more
    /// reflection or refraction bounces may be traced.
    pub fn colour_at(&self, ray: &Ray, depth: u32) -> Colour {
        let list = self.intersect(ray);
        match list.hit() {
            Some(hit) => {
                let comps = IntersectionComputation::with_list(hit, ray, &list);
                self.shade_hit(&comps, depth)
            }
            None => Colour::BLACK,
        }
    }

    /// Direct Phong lighting from every light plus the recursive reflected and refracted
    /// terms.
    pub fn shade_hit(&self, comps: &IntersectionComputation, depth: u32) -> Colour {
        let material = comps.material();

        let surface: Colour = self.lights().iter()
            .map(|light| {
                let shadowed = self.is_shadowed_from(comps.over_point, light);
                material.lighting(
                    &comps.object_to_world,
                    light,
                    comps.over_point,
                    comps.eyev,
                    comps.normalv,
                    shadowed,
                )
            })
            .sum();

        let reflected = self.reflected_colour(comps, depth);
        let refracted = self.refracted_colour(comps, depth);

        if material.reflective >= EPSILON && material.transparency >= EPSILON {
            let reflectance = schlick(comps);
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    pub fn reflected_colour(&self, comps: &IntersectionComputation, depth: u32) -> Colour {
        let reflective = comps.material().reflective;
        if depth == 0 || reflective < EPSILON {
            return Colour::BLACK;
        }

        let reflect_ray = Ray::new(comps.over_point, comps.reflectv);
        self.colour_at(&reflect_ray, depth - 1) * reflective
    }

    pub fn refracted_colour(&self, comps: &IntersectionComputation, depth: u32) -> Colour {
        let transparency = comps.material().transparency;
        if depth == 0 || transparency < EPSILON {
            return Colour::BLACK;
        }

        // Snell's law
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev.dot(comps.normalv.0);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            // total internal reflection
            return Colour::BLACK;
        }

        let cos_t = Float::sqrt(1.0 - sin2_t);
        let direction = comps.normalv.0 * (n_ratio * cos_i - cos_t) - comps.eyev * n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);

        self.colour_at(&refract_ray, depth - 1) * transparency
    }
}
