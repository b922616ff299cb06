use crate::animation::tween::Animator;

/// Pointer stimulus over the render surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Maps pointer events to animator target requests.
///
/// Enter drives toward 1, leave toward 0. No debouncing and no queueing:
/// rapid toggling degrades to successive cancel-and-restart requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputController;

impl InputController {
    pub fn target_for(event: PointerEvent) -> f64 {
        match event {
            PointerEvent::Enter => 1.0,
            PointerEvent::Leave => 0.0,
        }
    }

    pub fn apply(&self, event: PointerEvent, animator: &mut Animator, now: f64) {
        animator.request(Self::target_for(event), now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{ease::Ease, tween::AnimatorPhase};

    #[test]
    fn enter_and_leave_map_to_unit_targets() {
        assert_eq!(InputController::target_for(PointerEvent::Enter), 1.0);
        assert_eq!(InputController::target_for(PointerEvent::Leave), 0.0);
    }

    #[test]
    fn apply_starts_a_tween() {
        let ctl = InputController;
        let mut anim = Animator::new(1.5, Ease::Linear).unwrap();
        ctl.apply(PointerEvent::Enter, &mut anim, 0.0);
        assert_eq!(anim.phase(), AnimatorPhase::Animating);
        anim.tick(1.5);
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn events_round_trip_through_serde() {
        let json = serde_json::to_string(&PointerEvent::Enter).unwrap();
        assert_eq!(json, "\"enter\"");
        let back: PointerEvent = serde_json::from_str("\"leave\"").unwrap();
        assert_eq!(back, PointerEvent::Leave);
    }
}
