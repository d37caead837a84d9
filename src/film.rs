use crate::Colour;
use image::RgbImage;
use std::path::Path;

/// A row-major grid of linear colours.
#[derive(Clone, Debug, PartialEq)]
pub struct Film {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Colour>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Colour::BLACK; width * height] }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Colour {
        self.pixels[y * self.width + x]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, c: Colour) {
        self.pixels[y * self.width + x] = c;
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Disjoint mutable rows, for filling in parallel.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Colour> {
        self.pixels.chunks_exact_mut(self.width)
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            image::Rgb(self.pixel(x as usize, y as usize).into_rgb8())
        })
    }

    /// Write the film to disk; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        self.to_rgb_image().save(path)
    }
}
