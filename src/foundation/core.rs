use crate::foundation::error::{DispfadeError, DispfadeResult};

pub use kurbo::Vec2;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> DispfadeResult<Self> {
        if width == 0 || height == 0 {
            return Err(DispfadeError::validation("Canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Square canvas with the given edge length.
    pub fn square(edge: u32) -> DispfadeResult<Self> {
        Self::new(edge, edge)
    }
}

/// Largest square surface edge allowed, in pixels.
pub const MAX_SURFACE_EDGE: u32 = 450;

/// Compute the square render surface edge for a viewport.
///
/// The surface takes 80% of the shorter viewport axis, capped at
/// [`MAX_SURFACE_EDGE`]. Degenerate viewports collapse to a 1px edge.
pub fn surface_fit(viewport_width: f64, viewport_height: f64) -> u32 {
    let size = viewport_width.min(viewport_height) * 0.8;
    let size = size.min(f64::from(MAX_SURFACE_EDGE));
    (size.floor().max(1.0)) as u32
}

/// Linear color sample with channels in `[0,1]`, order RGBA.
pub type RgbaF32 = [f32; 4];

/// Per-channel linear interpolation between two color samples.
pub fn mix(a: RgbaF32, b: RgbaF32, t: f32) -> RgbaF32 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}
