use crate::{Float, Point3f, Ray, Transform, Vec3f};
use crate::error::Result;
use cgmath::{EuclideanSpace, InnerSpace};

/// Pinhole camera at the origin of its own space, looking down `-z`, with the image
/// plane one unit in front of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub hsize: usize,
    pub vsize: usize,
    pub field_of_view: Float,
    camera_to_world: Transform,
    half_width: Float,
    half_height: Float,
    pixel_size: Float,
}

impl Camera {
    /// `field_of_view` is in radians and spans the longer image side.
    pub fn new(hsize: usize, vsize: usize, field_of_view: Float) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as Float / vsize as Float;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };
        let pixel_size = half_width * 2.0 / hsize as Float;

        Self {
            hsize,
            vsize,
            field_of_view,
            camera_to_world: Transform::identity(),
            half_width,
            half_height,
            pixel_size,
        }
    }

    pub fn with_transform(self, camera_to_world: Transform) -> Self {
        Self { camera_to_world, ..self }
    }

    /// Place the camera at `from`, looking at `to`.
    pub fn looking_at(self, from: Point3f, to: Point3f, up: Vec3f) -> Result<Self> {
        let world_to_camera = Transform::look_at(from, to, up)?;
        Ok(self.with_transform(world_to_camera.inverse()))
    }

    pub fn camera_to_world(&self) -> &Transform {
        &self.camera_to_world
    }

    pub fn pixel_size(&self) -> Float {
        self.pixel_size
    }

    /// World-space ray from the eye through the centre of pixel `(px, py)`, counted from
    /// the top left corner.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let xoffset = (px as Float + 0.5) * self.pixel_size;
        let yoffset = (py as Float + 0.5) * self.pixel_size;

        let world_x = self.half_width - xoffset;
        let world_y = self.half_height - yoffset;

        let pixel = self.camera_to_world.transform(Point3f::new(world_x, world_y, -1.0));
        let origin = self.camera_to_world.transform(Point3f::origin());
        Ray::new(origin, (pixel - origin).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cgmath::Rad;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_pixel_size_horizontal() {
        let c = Camera::new(200, 125, FRAC_PI_2);
        assert_abs_diff_eq!(c.pixel_size(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_pixel_size_vertical() {
        let c = Camera::new(125, 200, FRAC_PI_2);
        assert_abs_diff_eq!(c.pixel_size(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_ray_through_centre() {
        let c = Camera::new(201, 101, FRAC_PI_2);
        let r = c.ray_for_pixel(100, 50);
        assert_abs_diff_eq!(r.origin, point3f!(0, 0, 0), epsilon = 1e-12);
        assert_abs_diff_eq!(r.dir, vec3f!(0, 0, -1), epsilon = 1e-12);
    }

    #[test]
    fn test_ray_through_corner() {
        let c = Camera::new(201, 101, FRAC_PI_2);
        let r = c.ray_for_pixel(0, 0);
        assert_abs_diff_eq!(r.dir, vec3f!(0.66519, 0.33259, -0.66851), epsilon = 1e-5);
    }

    #[test]
    fn test_ray_with_transformed_camera() {
        let world_to_camera = Transform::translate(vec3f!(0, -2, 5)).then(Transform::rotate_y(Rad(FRAC_PI_4)));
        let c = Camera::new(201, 101, FRAC_PI_2).with_transform(world_to_camera.inverse());
        let r = c.ray_for_pixel(100, 50);
        assert_abs_diff_eq!(r.origin, point3f!(0, 2, -5), epsilon = 1e-10);
        assert_abs_diff_eq!(r.dir, vec3f!(FRAC_1_SQRT_2, 0, -FRAC_1_SQRT_2), epsilon = 1e-10);
    }

    #[test]
    fn test_looking_at() {
        let c = Camera::new(11, 11, FRAC_PI_2)
            .looking_at(point3f!(0, 0, -5), point3f!(0, 0, 0), vec3f!(0, 1, 0))
            .unwrap();
        let r = c.ray_for_pixel(5, 5);
        assert_abs_diff_eq!(r.origin, point3f!(0, 0, -5), epsilon = 1e-10);
        assert_abs_diff_eq!(r.dir, vec3f!(0, 0, 1), epsilon = 1e-10);
    }
}
