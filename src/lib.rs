#![warn(clippy::all, rust_2018_idioms)]

pub mod engine;
pub mod error;
pub mod gesture;
pub mod interpolate;
pub mod raster;
pub mod renderer;
pub mod settings;
pub mod surface;
pub mod tools;

pub use engine::{CanvasListener, ToolEngine};
pub use error::PaintError;
pub use gesture::ShapeGesture;
pub use raster::Shape;
pub use renderer::Overlay;
pub use settings::ToolSettings;
pub use surface::RasterSurface;
pub use tools::Tool;
