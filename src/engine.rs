use egui::{Color32, ColorImage, PointerButton, Pos2, pos2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PaintError;
use crate::gesture::ShapeGesture;
use crate::interpolate;
use crate::raster::Shape;
use crate::renderer::{self, Overlay};
use crate::surface::RasterSurface;
use crate::tools::Tool;

/// The narrow seam to the owning UI.
///
/// The engine never talks to window chrome directly; it only reports that
/// the image changed and that the color picker updated a swatch.
pub trait CanvasListener {
    /// The committed surface was mutated and needs repainting/saving.
    fn image_dirty(&mut self) {}

    /// The color picker changed the foreground (`true`) or background
    /// (`false`) color.
    fn color_picked(&mut self, _is_foreground: bool) {}
}

/// No-op listener for callers that don't track dirtiness.
impl CanvasListener for () {}

const DEFAULT_FOREGROUND: Color32 = Color32::BLACK;

/// The stateful tool engine: owns the committed surface, the active tool
/// and its settings, and the in-progress gesture, and turns pointer events
/// into pixel mutations or preview updates.
///
/// Events are processed synchronously and to completion; the engine is
/// single-threaded by design.
pub struct ToolEngine {
    surface: RasterSurface,
    tool: Tool,
    /// Effective tool size, stored as `requested + 1` so it is always >= 1.
    tool_size: u32,
    foreground: Color32,
    background: Color32,
    gesture: ShapeGesture,
    /// Last reported pointer position, at the pixel center.
    cursor: Pos2,
    /// Last reported pointer position that was inside the surface; the
    /// color picker only ever samples here.
    cursor_pixel: Option<(u32, u32)>,
    /// Previous drag sample, for stroke interpolation. Cleared on release.
    prev_sample: Option<Pos2>,
    rng: StdRng,
}

impl ToolEngine {
    /// Creates an engine over a fresh `width`×`height` surface filled with
    /// `background`. `requested_size` follows the tool-size contract: the
    /// effective size is `requested_size + 1`.
    pub fn new(width: u32, height: u32, background: Color32, requested_size: i32) -> Result<Self, PaintError> {
        Self::with_rng(width, height, background, requested_size, StdRng::from_os_rng())
    }

    /// Like [`ToolEngine::new`] with a fixed airbrush seed, for
    /// deterministic scatter in tests.
    pub fn with_seed(
        width: u32,
        height: u32,
        background: Color32,
        requested_size: i32,
        seed: u64,
    ) -> Result<Self, PaintError> {
        Self::with_rng(width, height, background, requested_size, StdRng::seed_from_u64(seed))
    }

    /// Full dependency injection of the airbrush randomness source.
    pub fn with_rng(
        width: u32,
        height: u32,
        background: Color32,
        requested_size: i32,
        rng: StdRng,
    ) -> Result<Self, PaintError> {
        let mut engine = Self {
            surface: RasterSurface::new(width, height, background)?,
            tool: Tool::Pencil,
            tool_size: 1,
            foreground: DEFAULT_FOREGROUND,
            background,
            gesture: ShapeGesture::new(),
            cursor: pos2(0.5, 0.5),
            cursor_pixel: None,
            prev_sample: None,
            rng,
        };
        engine.set_tool_size(requested_size)?;
        Ok(engine)
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn active_tool(&self) -> Tool {
        self.tool
    }

    /// Switching tools aborts any unfinished line/circle gesture.
    pub fn set_active_tool(&mut self, tool: Tool) {
        log::debug!("active tool: {} -> {}", self.tool.name(), tool.name());
        self.gesture.cancel();
        self.tool = tool;
    }

    /// Effective tool size (always >= 1).
    pub fn tool_size(&self) -> u32 {
        self.tool_size
    }

    /// Sets the tool size to `requested + 1`; fails on a negative request,
    /// leaving all state unchanged.
    pub fn set_tool_size(&mut self, requested: i32) -> Result<(), PaintError> {
        if requested < 0 {
            return Err(PaintError::InvalidArgument(format!(
                "tool size must be non-negative, got {requested}"
            )));
        }
        self.tool_size = requested as u32 + 1;
        Ok(())
    }

    pub fn foreground(&self) -> Color32 {
        self.foreground
    }

    /// A pending line/circle preview picks up the new color immediately.
    pub fn set_foreground(&mut self, color: Color32) {
        self.foreground = color;
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn set_background(&mut self, color: Color32) {
        self.background = color;
    }

    /// Replaces the image with a blank `width`×`height` surface filled
    /// with `fill`, resetting any in-progress gesture and drag.
    pub fn new_blank_image(&mut self, width: u32, height: u32, fill: Color32) -> Result<(), PaintError> {
        let surface = RasterSurface::new(width, height, fill)?;
        self.load_image(surface);
        Ok(())
    }

    /// Adopts `surface` as the committed image, resetting any in-progress
    /// gesture and drag.
    pub fn load_image(&mut self, surface: RasterSurface) {
        self.gesture.cancel();
        self.prev_sample = None;
        self.cursor_pixel = None;
        self.surface.replace(surface);
    }

    /// Pointer press with `button`, at integer pixel coordinates.
    pub fn pointer_pressed(&mut self, x: i32, y: i32, button: PointerButton, listener: &mut dyn CanvasListener) {
        self.update_cursor(x, y);
        let p = self.cursor;
        log::debug!("pointer pressed at {p:?}, tool {}", self.tool.name());

        match self.tool {
            Tool::Pencil => {
                self.surface.write_region(&Shape::stamp(p, self.stroke_width()), self.foreground);
                listener.image_dirty();
            }
            Tool::Eraser => {
                self.surface.write_region(&Shape::stamp(p, self.stroke_width()), self.background);
                listener.image_dirty();
            }
            Tool::ColorPicker => {
                if let Some((px, py)) = self.cursor_pixel {
                    if let Ok(color) = self.surface.pixel(px, py) {
                        match button {
                            PointerButton::Primary => {
                                self.foreground = color;
                                listener.color_picked(true);
                            }
                            PointerButton::Secondary => {
                                self.background = color;
                                listener.color_picked(false);
                            }
                            _ => {}
                        }
                    }
                }
            }
            Tool::Airbrush => {
                // One scatter round per half tool size, plus one.
                for _ in 0..=self.tool_size / 2 {
                    self.scatter();
                }
                listener.image_dirty();
            }
            Tool::Line => {
                if let Some(shape) = self.gesture.commit(p, self.stroke_width()) {
                    self.surface.write_region(&shape, self.foreground);
                    listener.image_dirty();
                } else {
                    self.gesture.begin_line(p);
                }
            }
            Tool::Circle => {
                if let Some(shape) = self.gesture.commit(p, self.stroke_width()) {
                    self.surface.write_region(&shape, self.foreground);
                    listener.image_dirty();
                } else {
                    self.gesture.begin_circle(p);
                }
            }
        }

        self.prev_sample = Some(p);
    }

    /// Pointer drag to integer pixel coordinates, with a button held.
    pub fn pointer_dragged(&mut self, x: i32, y: i32, listener: &mut dyn CanvasListener) {
        self.update_cursor(x, y);
        let to = self.cursor;
        let from = self.prev_sample.unwrap_or(to);
        log::trace!("pointer dragged {from:?} -> {to:?}, tool {}", self.tool.name());

        match self.tool {
            Tool::Pencil => {
                let shape = interpolate::bridge(from, to, self.half());
                self.surface.write_region(&shape, self.foreground);
                listener.image_dirty();
            }
            Tool::Eraser => {
                let shape = interpolate::bridge(from, to, self.half());
                self.surface.write_region(&shape, self.background);
                listener.image_dirty();
            }
            Tool::Airbrush => {
                self.scatter();
                listener.image_dirty();
            }
            // Line and circle are click-driven; the picker only acts on press.
            Tool::ColorPicker | Tool::Line | Tool::Circle => {}
        }

        self.prev_sample = Some(to);
    }

    /// End of a drag; resets the interpolation anchor.
    pub fn pointer_released(&mut self) {
        self.prev_sample = None;
    }

    /// Pointer motion with no button held; only moves the preview cursor.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.update_cursor(x, y);
    }

    /// The tentative line/circle geometry for the current cursor, colored
    /// with the current foreground. `None` when no gesture is pending.
    pub fn preview(&self) -> Option<Overlay> {
        self.gesture
            .preview(self.cursor, self.stroke_width())
            .map(|shape| Overlay { shape, color: self.foreground })
    }

    /// Composites the committed surface plus any active preview overlay
    /// into `target`. The committed buffer is never touched.
    pub fn render(&self, target: &mut ColorImage) {
        renderer::render_into(target, &self.surface, self.preview().as_ref());
    }

    fn stroke_width(&self) -> f32 {
        self.tool_size as f32
    }

    fn half(&self) -> f32 {
        self.tool_size as f32 / 2.0
    }

    fn update_cursor(&mut self, x: i32, y: i32) {
        self.cursor = pos2(x as f32 + 0.5, y as f32 + 0.5);
        if x >= 0 && y >= 0 && (x as u32) < self.surface.width() && (y as u32) < self.surface.height() {
            self.cursor_pixel = Some((x as u32, y as u32));
        }
    }

    /// One airbrush round: four 1x1 dots of foreground, one per quadrant
    /// around the cursor pixel, each offset uniformly within half the tool
    /// size.
    fn scatter(&mut self) {
        let px = self.cursor.x.floor() as i32;
        let py = self.cursor.y.floor() as i32;
        let reach = self.tool_size as f64 / 2.0;
        for (sx, sy) in [(-1, -1), (1, 1), (1, -1), (-1, 1)] {
            let dx = (self.rng.random::<f64>() * reach) as i32;
            let dy = (self.rng.random::<f64>() * reach) as i32;
            self.dot(px + sx * dx, py + sy * dy);
        }
    }

    fn dot(&mut self, x: i32, y: i32) {
        let rect = egui::Rect::from_min_size(pos2(x as f32, y as f32), egui::Vec2::splat(1.0));
        self.surface.write_region(&Shape::Rect(rect), self.foreground);
    }
}
