use std::sync::Arc;

use anyhow::Context;
use kurbo::Vec2;

use crate::foundation::{
    core::RgbaF32,
    error::{DispfadeError, DispfadeResult},
};

/// Decoded raster image in straight-alpha RGBA8, native row order.
///
/// No vertical flip is applied at decode time, so normalized UVs with a
/// top-left origin read the image the way it is stored.
#[derive(Clone, Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl Texture {
    /// Decode encoded image bytes (PNG/JPEG/...) via the `image` crate.
    pub fn decode(bytes: &[u8]) -> DispfadeResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Wrap raw straight-alpha RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> DispfadeResult<Self> {
        if width == 0 || height == 0 {
            return Err(DispfadeError::asset("texture dimensions must be > 0"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| DispfadeError::asset("texture size overflow"))?;
        if rgba8.len() != expected {
            return Err(DispfadeError::asset(format!(
                "texture bytes must be width*height*4: got {}, expected {expected}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn texel(&self, x: u32, y: u32) -> RgbaF32 {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8[idx..idx + 4];
        [
            f32::from(px[0]) / 255.0,
            f32::from(px[1]) / 255.0,
            f32::from(px[2]) / 255.0,
            f32::from(px[3]) / 255.0,
        ]
    }

    /// Bilinear sample at normalized `uv`, clamp-to-edge addressing.
    ///
    /// `uv = (0,0)` is the top-left corner; coordinates outside `[0,1]²`
    /// repeat the edge texels.
    pub fn sample(&self, uv: Vec2) -> RgbaF32 {
        let x = uv.x * f64::from(self.width) - 0.5;
        let y = uv.y * f64::from(self.height) - 0.5;

        let x0 = x.floor();
        let y0 = y.floor();
        let fx = (x - x0) as f32;
        let fy = (y - y0) as f32;

        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        let x0c = x0.clamp(0.0, max_x) as u32;
        let x1c = (x0 + 1.0).clamp(0.0, max_x) as u32;
        let y0c = y0.clamp(0.0, max_y) as u32;
        let y1c = (y0 + 1.0).clamp(0.0, max_y) as u32;

        let p00 = self.texel(x0c, y0c);
        let p10 = self.texel(x1c, y0c);
        let p01 = self.texel(x0c, y1c);
        let p11 = self.texel(x1c, y1c);

        let mut out = [0.0f32; 4];
        for (i, slot) in out.iter_mut().enumerate() {
            let top = p00[i] + (p10[i] - p00[i]) * fx;
            let bottom = p01[i] + (p11[i] - p01[i]) * fx;
            *slot = top + (bottom - top) * fy;
        }
        out
    }
}
