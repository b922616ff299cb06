//! Dispfade renders a full-frame crossfade between two images, distorted by a
//! third grayscale image used as a displacement map, and drives the crossfade
//! progress with an eased tween triggered by pointer enter/leave over the
//! render surface.
//!
//! The host owns the scheduler: it delivers texture bytes and pointer events
//! to an [`Engine`] and calls [`Engine::tick`] once per frame. The first tick
//! after all three textures decode starts the render loop; each subsequent
//! tick advances the tween and rasterizes the frame on the CPU.
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod effects;
pub mod engine;
pub mod foundation;
pub mod input;
pub mod render;

pub use animation::ease::Ease;
pub use animation::tween::{Animator, AnimatorPhase, DEFAULT_DURATION, TransitionState};
pub use assets::loader::{REQUIRED_TEXTURES, TextureLoader};
pub use assets::texture::Texture;
pub use effects::distortion::{TextureSet, local_transition, render_frame, shade};
pub use engine::{Engine, EngineOpts};
pub use foundation::core::{Canvas, MAX_SURFACE_EDGE, RgbaF32, Vec2, mix, surface_fit};
pub use foundation::error::{DispfadeError, DispfadeResult};
pub use input::{InputController, PointerEvent};
pub use render::{FrameRgba, LoopState};
