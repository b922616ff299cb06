use crate::{
    animation::ease::Ease,
    foundation::error::{DispfadeError, DispfadeResult},
};

/// Tween duration in scheduler time units (seconds for wall-clock hosts).
pub const DEFAULT_DURATION: f64 = 1.5;

/// Current crossfade progress.
///
/// Created at 0.0 and mutated only by the [`Animator`] that owns it. The
/// value is kept in `[0,1]` for targets in that range; the blend stage clamps
/// regardless.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionState {
    value: f64,
}

impl TransitionState {
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// One in-flight animation request.
///
/// Captures the state value at request time; interpolation always runs
/// against this capture, never against values a superseded tween produced.
#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    target: f64,
    start_time: f64,
}

/// Animator phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorPhase {
    Idle,
    Animating,
}

/// Drives a [`TransitionState`] toward 0 or 1 over a fixed duration.
///
/// At most one tween is active at any instant. A new request cancels the
/// previous one synchronously and totally, even when both share a target.
#[derive(Clone, Debug)]
pub struct Animator {
    state: TransitionState,
    tween: Option<Tween>,
    duration: f64,
    ease: Ease,
}

impl Animator {
    pub fn new(duration: f64, ease: Ease) -> DispfadeResult<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(DispfadeError::animation(
                "Animator duration must be finite and > 0",
            ));
        }
        Ok(Self {
            state: TransitionState::default(),
            tween: None,
            duration,
            ease,
        })
    }

    pub fn phase(&self) -> AnimatorPhase {
        if self.tween.is_some() {
            AnimatorPhase::Animating
        } else {
            AnimatorPhase::Idle
        }
    }

    /// Read-only view of the owned state.
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.value()
    }

    /// Start a tween toward `target`, cancelling any in-flight one.
    ///
    /// The replaced tween contributes nothing after this call; the new tween
    /// interpolates from whatever value the state holds right now.
    pub fn request(&mut self, target: f64, now: f64) {
        self.tween = Some(Tween {
            from: self.state.value(),
            target,
            start_time: now,
        });
    }

    /// Advance the active tween, if any, to `now`.
    pub fn tick(&mut self, now: f64) {
        let Some(tw) = self.tween else {
            return;
        };
        let t = ((now - tw.start_time) / self.duration).clamp(0.0, 1.0);
        self.state.value = tw.from + (tw.target - tw.from) * self.ease.apply(t);
        if t >= 1.0 {
            self.tween = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> Animator {
        Animator::new(DEFAULT_DURATION, Ease::Linear).unwrap()
    }

    #[test]
    fn rejects_bad_durations() {
        assert!(Animator::new(0.0, Ease::Linear).is_err());
        assert!(Animator::new(-1.0, Ease::Linear).is_err());
        assert!(Animator::new(f64::NAN, Ease::Linear).is_err());
    }

    #[test]
    fn starts_idle_at_zero() {
        let anim = animator();
        assert_eq!(anim.phase(), AnimatorPhase::Idle);
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn completes_and_returns_to_idle() {
        let mut anim = animator();
        anim.request(1.0, 0.0);
        assert_eq!(anim.phase(), AnimatorPhase::Animating);

        anim.tick(0.75);
        assert_eq!(anim.progress(), 0.5);
        anim.tick(1.5);
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(anim.phase(), AnimatorPhase::Idle);
    }

    #[test]
    fn tick_without_request_is_inert() {
        let mut anim = animator();
        anim.tick(10.0);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.phase(), AnimatorPhase::Idle);
    }

    #[test]
    fn new_request_supersedes_totally() {
        let mut anim = animator();
        anim.request(1.0, 0.0);
        anim.tick(0.75); // halfway up
        assert_eq!(anim.progress(), 0.5);

        anim.request(0.0, 0.75);
        // Second request owns the state from here on: it descends from 0.5
        // toward 0 on its own clock with no residue of the first tween.
        anim.tick(0.75 + 0.75);
        assert_eq!(anim.progress(), 0.25);
        anim.tick(0.75 + 1.5);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.phase(), AnimatorPhase::Idle);
    }

    #[test]
    fn equal_target_request_still_restarts() {
        let mut anim = animator();
        anim.request(1.0, 0.0);
        anim.tick(0.75);
        anim.request(1.0, 0.75);
        // The restart recaptures from = 0.5 and the clock; completion now
        // lands at 0.75 + 1.5.
        anim.tick(1.5);
        assert_eq!(anim.progress(), 0.75);
        anim.tick(2.25);
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn release_without_prior_press_is_valid() {
        let mut anim = animator();
        anim.request(0.0, 3.0);
        assert_eq!(anim.phase(), AnimatorPhase::Animating);
        anim.tick(3.7);
        assert_eq!(anim.progress(), 0.0);
        anim.tick(4.5);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.phase(), AnimatorPhase::Idle);
    }

    #[test]
    fn time_before_start_clamps_to_capture() {
        let mut anim = animator();
        anim.request(1.0, 5.0);
        anim.tick(4.0);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.phase(), AnimatorPhase::Animating);
    }

    #[test]
    fn eased_tween_passes_through_curve_values() {
        let mut anim = Animator::new(1.0, Ease::QuarticInOut).unwrap();
        anim.request(1.0, 0.0);
        anim.tick(0.25);
        assert_eq!(anim.progress(), 8.0 * 0.25f64.powi(4));
        anim.tick(1.0);
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn progress_stays_in_unit_range_for_unit_targets() {
        let mut anim = animator();
        anim.request(1.0, 0.0);
        for i in 0..=30 {
            anim.tick(f64::from(i) * 0.1);
            assert!((0.0..=1.0).contains(&anim.progress()));
        }
    }
}
