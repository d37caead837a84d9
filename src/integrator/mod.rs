use rayon::prelude::*;

use crate::camera::Camera;
use crate::film::Film;
use crate::{Colour, World, DEFAULT_RECURSION_DEPTH};

pub mod whitted;

pub use whitted::schlick;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// Reflection and refraction bounces allowed per primary ray.
    pub max_depth: u32,
    pub parallel: bool,
    pub progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { max_depth: DEFAULT_RECURSION_DEPTH, parallel: true, progress: false }
    }
}

/// Trace one ray through the centre of every pixel of `camera`.
pub fn render(camera: &Camera, world: &World, settings: &RenderSettings) -> Film {
    let span = tracing::info_span!("render", width = camera.hsize, height = camera.vsize);
    let _enter = span.enter();
    let start = std::time::Instant::now();

    let mut film = Film::new(camera.hsize, camera.vsize);

    let progress = if settings.progress {
        indicatif::ProgressBar::new(camera.vsize as u64)
    } else {
        indicatif::ProgressBar::hidden()
    };

    let render_row = |(y, row): (usize, &mut [Colour])| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let ray = camera.ray_for_pixel(x, y);
            let colour = world.colour_at(&ray, settings.max_depth);
            check_colour(&colour, (x, y));
            *pixel = colour;
        }
        progress.inc(1);
    };

    if settings.parallel {
        film.rows_mut().collect::<Vec<_>>().into_par_iter().enumerate().for_each(render_row);
    } else {
        film.rows_mut().enumerate().for_each(render_row);
    }

    progress.finish_and_clear();
    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "render finished");
    film
}

pub fn render_with_pool(
    camera: &Camera,
    world: &World,
    settings: &RenderSettings,
    pool: &rayon::ThreadPool,
) -> Film {
    pool.install(|| render(camera, world, settings))
}

fn check_colour(c: &Colour, pixel: (usize, usize)) {
    debug_assert!(!c.has_nans(), "NaN colour value for pixel {:?}", pixel);
}
