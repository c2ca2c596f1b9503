use egui::Pos2;

use crate::raster::Shape;

/// The anchored half of a two-click shape gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    /// First endpoint of a line has been clicked.
    LineFrom(Pos2),
    /// Center of a circle has been clicked; the next click picks the radius.
    CircleAround(Pos2),
}

/// Two-click state machine shared by the line and circle tools.
///
/// The first click anchors a point, cursor movement yields a live preview
/// via [`ShapeGesture::preview`], and the second click commits. Holding the
/// anchor inside the variant means "anchor set iff a gesture is pending"
/// by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeGesture {
    pending: Option<Pending>,
}

impl ShapeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors the first endpoint of a line.
    pub fn begin_line(&mut self, anchor: Pos2) {
        self.pending = Some(Pending::LineFrom(anchor));
    }

    /// Anchors the center of a circle.
    pub fn begin_circle(&mut self, center: Pos2) {
        self.pending = Some(Pending::CircleAround(center));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The tentative geometry for the current cursor position, if a
    /// gesture is pending. Never touches the committed surface.
    pub fn preview(&self, cursor: Pos2, stroke_width: f32) -> Option<Shape> {
        self.pending.map(|pending| geometry(pending, cursor, stroke_width))
    }

    /// Finishes the gesture at `cursor`, returning the final geometry to
    /// commit and resetting the state. `None` if nothing was pending.
    pub fn commit(&mut self, cursor: Pos2, stroke_width: f32) -> Option<Shape> {
        self.pending.take().map(|pending| geometry(pending, cursor, stroke_width))
    }

    /// Abandons any pending gesture without drawing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

fn geometry(pending: Pending, cursor: Pos2, stroke_width: f32) -> Shape {
    match pending {
        Pending::LineFrom(anchor) => Shape::Segment { from: anchor, to: cursor, width: stroke_width },
        Pending::CircleAround(center) => Shape::CircleOutline {
            center,
            radius: center.distance(cursor),
            stroke: stroke_width,
        },
    }
}
