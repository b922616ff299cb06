use crate::{
    assets::texture::Texture,
    foundation::error::{DispfadeError, DispfadeResult},
};

/// Number of textures the crossfade engine requires: image A, image B, and
/// the displacement map, in that order.
pub const REQUIRED_TEXTURES: usize = 3;

/// One pending or completed image resource.
#[derive(Clone, Debug)]
struct TextureSlot {
    id: String,
    texture: Option<Texture>,
}

/// Counting barrier over a fixed, ordered set of image resources.
///
/// Completions arrive in any order through [`fulfill`](Self::fulfill); the
/// one-shot ready signal fires on the completion that fills the last empty
/// slot. A slot becomes ready at most once.
///
/// A recorded [`fail`](Self::fail) does not advance the barrier; it is kept
/// so callers can surface the stall instead of waiting forever.
#[derive(Clone, Debug)]
pub struct TextureLoader {
    slots: Vec<TextureSlot>,
    ready_count: usize,
    failure: Option<String>,
}

impl TextureLoader {
    pub fn new<I, S>(ids: I) -> DispfadeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<TextureSlot> = ids
            .into_iter()
            .map(|id| TextureSlot {
                id: id.into(),
                texture: None,
            })
            .collect();
        if slots.is_empty() {
            return Err(DispfadeError::validation(
                "TextureLoader needs at least one resource id",
            ));
        }
        Ok(Self {
            slots,
            ready_count: 0,
            failure: None,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resource identifier for a slot.
    pub fn id(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|s| s.id.as_str())
    }

    /// True once every slot has completed.
    pub fn is_ready(&self) -> bool {
        self.ready_count == self.slots.len()
    }

    /// First recorded load failure, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Deliver encoded image bytes for a slot.
    ///
    /// Returns `Ok(true)` exactly when this completion fired the ready
    /// barrier. Completing a slot twice is an error.
    pub fn fulfill(&mut self, index: usize, bytes: &[u8]) -> DispfadeResult<bool> {
        let texture = Texture::decode(bytes)?;
        self.fulfill_decoded(index, texture)
    }

    /// Deliver an already-decoded texture for a slot.
    pub fn fulfill_decoded(&mut self, index: usize, texture: Texture) -> DispfadeResult<bool> {
        let total = self.slots.len();
        let slot = self.slot_mut(index)?;
        if slot.texture.is_some() {
            return Err(DispfadeError::asset(format!(
                "resource '{}' completed twice",
                slot.id
            )));
        }
        tracing::debug!(index, id = %slot.id, "texture slot ready");
        slot.texture = Some(texture);
        self.ready_count += 1;
        Ok(self.ready_count == total)
    }

    /// Record a load failure for a slot. The barrier will never fire after
    /// this; callers should surface the failure.
    pub fn fail(&mut self, index: usize, reason: impl Into<String>) -> DispfadeResult<()> {
        let reason = reason.into();
        let slot = self.slot_mut(index)?;
        tracing::warn!(index, id = %slot.id, %reason, "texture load failed");
        let recorded = format!("resource '{}' failed to load: {reason}", slot.id);
        if self.failure.is_none() {
            self.failure = Some(recorded);
        }
        Ok(())
    }

    /// Completed texture for a slot, if ready.
    pub fn texture(&self, index: usize) -> Option<&Texture> {
        self.slots.get(index).and_then(|s| s.texture.as_ref())
    }

    fn slot_mut(&mut self, index: usize) -> DispfadeResult<&mut TextureSlot> {
        let total = self.slots.len();
        self.slots.get_mut(index).ok_or_else(|| {
            DispfadeError::validation(format!("slot index {index} out of range (have {total})"))
        })
    }
}
