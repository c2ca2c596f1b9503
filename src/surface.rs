use egui::{Color32, ColorImage};
use image::RgbaImage;

use crate::error::PaintError;
use crate::raster::{self, Shape};

/// The committed pixel buffer of the painting session.
///
/// Dimensions never change in place: "new image" and "load image" build a
/// fresh surface and [`RasterSurface::replace`] swaps it in wholesale.
/// All writes go through [`RasterSurface::write_region`], which clips at
/// the borders instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<Color32>,
}

impl RasterSurface {
    /// Creates a surface with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Color32) -> Result<Self, PaintError> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidArgument(format!(
                "image dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    /// Builds a surface from a decoded RGBA image.
    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self, PaintError> {
        let mut surface = Self::new(image.width(), image.height(), Color32::TRANSPARENT)?;
        for (i, pixel) in image.pixels().enumerate() {
            let [r, g, b, a] = pixel.0;
            surface.pixels[i] = Color32::from_rgba_unmultiplied(r, g, b, a);
        }
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads one pixel; out-of-bounds reads fail.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Color32, PaintError> {
        if x >= self.width || y >= self.height {
            return Err(PaintError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(self.pixels[(y * self.width + x) as usize])
    }

    /// Fills all pixels covered by `shape` with `color`, source-over
    /// blended. Pixels outside the surface are clipped silently.
    pub fn write_region(&mut self, shape: &Shape, color: Color32) {
        raster::fill_shape(&mut self.pixels, self.width as usize, self.height as usize, shape, color);
    }

    /// Swaps in a whole new buffer, adopting its dimensions.
    pub fn replace(&mut self, other: RasterSurface) {
        log::debug!("surface replaced: {}x{} -> {}x{}", self.width, self.height, other.width, other.height);
        *self = other;
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    /// Copies the committed pixels into an egui image.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage {
            size: [self.width as usize, self.height as usize],
            pixels: self.pixels.clone(),
        }
    }
}
