#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    /// Quartic in/out as used by the displacement shader.
    ///
    /// This curve carries a jump at `t = 0.5`: the in-half tops out at 0.5
    /// while the out-half starts at 0.4375. The discontinuity is part of the
    /// observable look and is kept, not smoothed over.
    #[default]
    QuarticInOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuarticInOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    -9.0 * (t - 1.0).powi(4) + 1.0
                }
            }
        }
    }
}
