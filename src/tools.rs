use serde::{Deserialize, Serialize};

/// The closed set of drawing tools.
///
/// Dispatch on this enum is exhaustive everywhere, so there is no
/// "unknown tool" runtime path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Pencil,
    Eraser,
    ColorPicker,
    Airbrush,
    Line,
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::ColorPicker,
        Tool::Airbrush,
        Tool::Line,
        Tool::Circle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::ColorPicker => "Color picker",
            Tool::Airbrush => "Airbrush",
            Tool::Line => "Line",
            Tool::Circle => "Circle",
        }
    }

    /// True for the two-click gesture tools that draw through a preview.
    pub fn is_shape_tool(&self) -> bool {
        matches!(self, Tool::Line | Tool::Circle)
    }
}
