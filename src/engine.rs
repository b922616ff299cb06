use crate::{
    animation::{
        ease::Ease,
        tween::{Animator, DEFAULT_DURATION},
    },
    assets::{
        loader::{REQUIRED_TEXTURES, TextureLoader},
        texture::Texture,
    },
    effects::distortion::{TextureSet, render_frame},
    foundation::{
        core::{Canvas, surface_fit},
        error::{DispfadeError, DispfadeResult},
    },
    input::{InputController, PointerEvent},
    render::{FrameRgba, LoopState},
};

/// Options for a crossfade [`Engine`].
#[derive(Clone, Copy, Debug)]
pub struct EngineOpts {
    /// Output dimensions; [`Engine::resize`] maintains these from viewport
    /// changes.
    pub canvas: Canvas,
    /// Tween duration in scheduler time units.
    pub duration: f64,
    /// Easing curve driving the tween.
    pub ease: Ease,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 450,
                height: 450,
            },
            duration: DEFAULT_DURATION,
            ease: Ease::QuarticInOut,
        }
    }
}

/// Hover-driven displacement crossfade, tick-driven.
///
/// The host owns the cooperative scheduler: it delivers resource completions
/// and pointer events as they arrive and calls [`tick`](Self::tick) once per
/// frame. Ticks return no frame until all three textures are ready; the first
/// tick-eligible completion moves the loop from `NotStarted` to `Running`
/// exactly once, and from then on every tick advances the animator and
/// rasterizes the current transition value.
pub struct Engine {
    loader: TextureLoader,
    animator: Animator,
    input: InputController,
    canvas: Canvas,
    loop_state: LoopState,
    textures: Option<TextureSet>,
}

impl Engine {
    /// Build an engine over three ordered resources: image A, image B, and
    /// the displacement map.
    pub fn new<S: Into<String>>(
        resource_ids: [S; REQUIRED_TEXTURES],
        opts: EngineOpts,
    ) -> DispfadeResult<Self> {
        Ok(Self {
            loader: TextureLoader::new(resource_ids)?,
            animator: Animator::new(opts.duration, opts.ease)?,
            input: InputController,
            canvas: opts.canvas,
            loop_state: LoopState::NotStarted,
            textures: None,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    /// Current transition scalar, `0..=1` between gestures.
    pub fn progress(&self) -> f64 {
        self.animator.progress()
    }

    /// Recompute the square output surface from viewport dimensions.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        let edge = surface_fit(viewport_width, viewport_height);
        self.canvas = Canvas {
            width: edge,
            height: edge,
        };
    }

    /// Deliver a pointer gesture: enter tweens toward 1, leave toward 0.
    pub fn pointer(&mut self, event: PointerEvent, now: f64) {
        self.input.apply(event, &mut self.animator, now);
    }

    /// Deliver encoded bytes for a texture slot. The slot that completes the
    /// set arms the render loop.
    pub fn fulfill_texture(&mut self, slot: usize, bytes: &[u8]) -> DispfadeResult<()> {
        let fired = self.loader.fulfill(slot, bytes)?;
        if fired {
            self.arm()?;
        }
        Ok(())
    }

    /// Deliver an already-decoded texture for a slot.
    pub fn fulfill_texture_decoded(&mut self, slot: usize, texture: Texture) -> DispfadeResult<()> {
        let fired = self.loader.fulfill_decoded(slot, texture)?;
        if fired {
            self.arm()?;
        }
        Ok(())
    }

    /// Record a load failure; subsequent ticks surface it as an error
    /// instead of stalling forever.
    pub fn fail_texture(&mut self, slot: usize, reason: impl Into<String>) -> DispfadeResult<()> {
        self.loader.fail(slot, reason)
    }

    /// Stop the render loop permanently.
    pub fn stop(&mut self) {
        self.loop_state = LoopState::Stopped;
    }

    /// One cooperative scheduling tick.
    ///
    /// Returns `Ok(None)` before the texture barrier fires and after
    /// [`stop`](Self::stop); returns the rendered frame while running.
    pub fn tick(&mut self, now: f64) -> DispfadeResult<Option<FrameRgba>> {
        match self.loop_state {
            LoopState::Stopped => Ok(None),
            LoopState::NotStarted => {
                if let Some(failure) = self.loader.failure() {
                    return Err(DispfadeError::asset(failure.to_string()));
                }
                Ok(None)
            }
            LoopState::Running => {
                self.animator.tick(now);
                let textures = self
                    .textures
                    .as_ref()
                    .ok_or_else(|| DispfadeError::render("running without an armed texture set"))?;
                let frame = render_frame(self.canvas, self.animator.progress(), textures)?;
                Ok(Some(frame))
            }
        }
    }

    /// Move `NotStarted -> Running` on the barrier completion.
    fn arm(&mut self) -> DispfadeResult<()> {
        if self.loop_state != LoopState::NotStarted {
            return Ok(());
        }
        let tex = |i: usize| {
            self.loader
                .texture(i)
                .cloned()
                .ok_or_else(|| DispfadeError::asset("texture barrier fired with an empty slot"))
        };
        self.textures = Some(TextureSet {
            image_a: tex(0)?,
            image_b: tex(1)?,
            displacement: tex(2)?,
        });
        self.loop_state = LoopState::Running;
        tracing::debug!(w = self.canvas.width, h = self.canvas.height, "render loop armed");
        Ok(())
    }
}
