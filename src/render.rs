use crate::foundation::{
    core::Canvas,
    error::{DispfadeError, DispfadeResult},
};

/// One rendered output frame in straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub rgba8: Vec<u8>,
}

impl FrameRgba {
    /// Allocate a transparent frame matching `canvas`.
    pub fn blank(canvas: Canvas) -> DispfadeResult<Self> {
        let len = (canvas.width as usize)
            .checked_mul(canvas.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| DispfadeError::render("frame size overflow"))?;
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            rgba8: vec![0; len],
        })
    }
}

/// Render loop lifecycle.
///
/// `NotStarted -> Running` is one-way and happens exactly once, when the
/// texture barrier fires. `Stopped` is terminal and is the explicit
/// cancellation hook for an otherwise indefinite loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    NotStarted,
    Running,
    Stopped,
}
