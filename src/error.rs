use thiserror::Error;

/// Errors raised by the painting core.
///
/// Out-of-bounds *writes* are not represented here: stamping near the edge
/// of the image is routine, so write operations clip silently instead of
/// failing the stroke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    /// A caller violated an argument contract (negative tool size,
    /// zero image dimension).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A pixel read outside the surface.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}
