use egui::{Color32, ColorImage};

use crate::raster::{self, Shape};
use crate::surface::RasterSurface;

/// A tentative shape shown on top of the committed surface while a line
/// or circle gesture is pending. It disappears on commit or tool change
/// and is never merged into the committed buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub shape: Shape,
    pub color: Color32,
}

/// Composites the committed surface plus an optional preview overlay into
/// `target`, resizing it to the surface dimensions.
pub fn render_into(target: &mut ColorImage, surface: &RasterSurface, overlay: Option<&Overlay>) {
    let (width, height) = (surface.width() as usize, surface.height() as usize);
    target.size = [width, height];
    target.pixels.clear();
    target.pixels.extend_from_slice(surface.pixels());
    if let Some(overlay) = overlay {
        raster::fill_shape(&mut target.pixels, width, height, &overlay.shape, overlay.color);
    }
}
