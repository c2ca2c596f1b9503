use egui::{Color32, Pos2, Rect, Vec2};
use std::ops::Range;

/// A region of pixels to fill.
///
/// This is the closed set of geometries the tools produce: square stamps
/// and rectangles, the bridging polygons used for stroke interpolation,
/// thick line segments (square caps), and circle outlines of a given
/// stroke width.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned filled rectangle.
    Rect(Rect),
    /// Filled polygon (even-odd rule).
    Polygon(Vec<Pos2>),
    /// Straight segment of the given stroke width, with square caps.
    Segment { from: Pos2, to: Pos2, width: f32 },
    /// Circle outline: an annulus of the given stroke width around `radius`.
    CircleOutline { center: Pos2, radius: f32, stroke: f32 },
}

impl Shape {
    /// The square stamp of side `size` centered at `center` (pencil/eraser
    /// footprint at a single sample).
    pub fn stamp(center: Pos2, size: f32) -> Self {
        Self::Rect(Rect::from_center_size(center, Vec2::splat(size)))
    }
}

/// Fills `shape` with `color` into a `width`×`height` grid of pixels,
/// source-over blended. Pixels outside the grid are clipped silently.
///
/// A pixel is covered iff its center `(i + 0.5, j + 0.5)` lies inside the
/// shape, with half-open `[min, max)` boundaries so that an `s`-wide stamp
/// covers exactly `s` pixels per axis for both odd and even `s`.
pub fn fill_shape(pixels: &mut [Color32], width: usize, height: usize, shape: &Shape, color: Color32) {
    match shape {
        Shape::Rect(rect) => fill_rect(pixels, width, height, *rect, color),
        Shape::Polygon(points) => fill_polygon(pixels, width, height, points, color),
        Shape::Segment { from, to, width: w } => fill_segment(pixels, width, height, *from, *to, *w, color),
        Shape::CircleOutline { center, radius, stroke } => {
            fill_circle_outline(pixels, width, height, *center, *radius, *stroke, color)
        }
    }
}

/// Source-over blend of premultiplied colors. Opaque sources replace.
pub fn blend(dst: Color32, src: Color32) -> Color32 {
    if src.a() == 255 {
        return src;
    }
    let inv = 255 - src.a() as u32;
    let ch = |s: u8, d: u8| (s as u32 + (d as u32 * inv + 127) / 255).min(255) as u8;
    Color32::from_rgba_premultiplied(
        ch(src.r(), dst.r()),
        ch(src.g(), dst.g()),
        ch(src.b(), dst.b()),
        ch(src.a(), dst.a()),
    )
}

/// Pixel indices `i` with `min <= i + 0.5 < max`, clipped to `[0, limit)`.
fn span(min: f32, max: f32, limit: usize) -> Range<usize> {
    let lo = (min - 0.5).ceil().max(0.0) as usize;
    let hi = ((max - 0.5).ceil().max(0.0) as usize).min(limit);
    lo..hi.max(lo)
}

fn paint(pixels: &mut [Color32], width: usize, x: usize, y: usize, color: Color32) {
    let idx = y * width + x;
    pixels[idx] = blend(pixels[idx], color);
}

fn fill_rect(pixels: &mut [Color32], width: usize, height: usize, rect: Rect, color: Color32) {
    for y in span(rect.min.y, rect.max.y, height) {
        for x in span(rect.min.x, rect.max.x, width) {
            paint(pixels, width, x, y, color);
        }
    }
}

fn fill_polygon(pixels: &mut [Color32], width: usize, height: usize, points: &[Pos2], color: Color32) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for y in span(min_y, max_y, height) {
        let yc = y as f32 + 0.5;
        crossings.clear();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            // Half-open crossing test counts each vertex exactly once.
            if (a.y <= yc) != (b.y <= yc) {
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            for x in span(pair[0], pair[1], width) {
                paint(pixels, width, x, y, color);
            }
        }
    }
}

fn fill_segment(pixels: &mut [Color32], width: usize, height: usize, from: Pos2, to: Pos2, stroke: f32, color: Color32) {
    let half = stroke / 2.0;
    let d = to - from;
    if d == Vec2::ZERO {
        // Degenerate segment is just the square cap.
        fill_rect(pixels, width, height, Rect::from_center_size(from, Vec2::splat(stroke)), color);
        return;
    }
    // Square caps extend each endpoint by half the stroke width, giving an
    // oriented rectangle we can fill as a polygon.
    let u = d.normalized();
    let n = Vec2::new(-u.y, u.x) * half;
    let a = from - u * half;
    let b = to + u * half;
    fill_polygon(pixels, width, height, &[a + n, b + n, b - n, a - n], color);
}

fn fill_circle_outline(
    pixels: &mut [Color32],
    width: usize,
    height: usize,
    center: Pos2,
    radius: f32,
    stroke: f32,
    color: Color32,
) {
    let half = stroke / 2.0;
    let reach = radius + half;
    for y in span(center.y - reach, center.y + reach, height) {
        for x in span(center.x - reach, center.x + reach, width) {
            let c = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            let d = c.distance(center);
            if radius - half <= d && d < radius + half {
                paint(pixels, width, x, y, color);
            }
        }
    }
}
