use kurbo::Vec2;
use rayon::prelude::*;

use crate::{
    animation::ease::Ease,
    assets::texture::Texture,
    foundation::{
        core::{Canvas, RgbaF32, mix},
        error::{DispfadeError, DispfadeResult},
    },
    render::FrameRgba,
};

/// The three sampler bindings the crossfade consumes.
#[derive(Clone, Debug)]
pub struct TextureSet {
    /// Start image (fully visible at transition 0).
    pub image_a: Texture,
    /// End image (fully visible at transition 1).
    pub image_b: Texture,
    /// Grayscale displacement map; only the red channel is read.
    pub displacement: Texture,
}

/// Per-pixel transition timing: the global scalar offset by the displacement
/// red channel and the horizontal position, clamped, then eased.
///
/// The 1.6 gain with the 0.4/0.2 offsets makes the sweep start on the left
/// and in the dark regions of the map, and guarantees every pixel reaches 1
/// by the time `trans` does.
pub fn local_transition(trans: f64, disp_red: f64, uv_x: f64) -> f64 {
    let local = (1.6 * trans - disp_red * 0.4 - uv_x * 0.2).clamp(0.0, 1.0);
    Ease::QuarticInOut.apply(local)
}

/// Shade one pixel of the displacement crossfade.
///
/// `uv` is in `[0,1]²` with a top-left origin, matching the un-flipped
/// texture orientation. `trans` outside `[0,1]` is folded in by the clamp in
/// [`local_transition`].
pub fn shade(uv: Vec2, trans: f64, textures: &TextureSet) -> RgbaF32 {
    // The displacement lookup zooms from the left edge as trans rises.
    let zoom = 0.2 + 0.8 * (1.0 - trans);
    let disp_uv = Vec2::new(uv.x * zoom, 0.5 + (uv.y - 0.5) * zoom);
    let disp = textures.displacement.sample(disp_uv);

    let local = local_transition(trans, f64::from(disp[0]), uv.x);

    // Image A drifts left and zooms out; image B settles in from its offset.
    let scale_a = 1.0 - 0.2 * local;
    let a_uv = Vec2::new(
        0.5 - 0.3 * local + (uv.x - 0.5) * scale_a,
        0.5 + (uv.y - 0.5) * scale_a,
    );
    let c0 = textures.image_a.sample(a_uv);

    let scale_b = 0.9 + 0.1 * local;
    let b_uv = Vec2::new(
        0.5 + ((1.0 - local) * 0.1).sin() + (uv.x - 0.5) * scale_b,
        0.5 + (uv.y - 0.5) * scale_b,
    );
    let c1 = textures.image_b.sample(b_uv);

    mix(c0, c1, local as f32)
}

/// Rasterize a full frame of the crossfade at transition value `trans`.
///
/// UVs are taken at pixel centers, rows in parallel.
#[tracing::instrument(skip(textures), fields(w = canvas.width, h = canvas.height))]
pub fn render_frame(canvas: Canvas, trans: f64, textures: &TextureSet) -> DispfadeResult<FrameRgba> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(DispfadeError::render("render canvas must be non-empty"));
    }
    let mut frame = FrameRgba::blank(canvas)?;
    let width = canvas.width as usize;
    let inv_w = 1.0 / f64::from(canvas.width);
    let inv_h = 1.0 / f64::from(canvas.height);

    frame
        .rgba8
        .par_chunks_exact_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let v = (y as f64 + 0.5) * inv_h;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let u = (x as f64 + 0.5) * inv_w;
                let c = shade(Vec2::new(u, v), trans, textures);
                for (dst, ch) in px.iter_mut().zip(c) {
                    *dst = (ch.clamp(0.0, 1.0) * 255.0).round() as u8;
                }
            }
        });

    Ok(frame)
}
