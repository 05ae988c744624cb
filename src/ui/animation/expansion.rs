//! Expansion animation for the slider's collapsed and expanded states.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Duration of the expand/collapse transition.
const EXPANSION_DURATION: Duration = Duration::from_millis(150);

fn expansion_easing() -> Easing {
    Easing::EASE_IN_OUT.with_duration(EXPANSION_DURATION)
}

/// Animated expansion factor for a slider surface.
///
/// Runs between 0.0 (collapsed) and 1.0 (expanded) with an ease-in-out
/// curve. The owning widget ticks it on every redraw and derives the track
/// height and fill opacity from the current factor.
#[derive(Debug)]
pub struct ExpansionAnimation {
    animation: Animated<f32>,
}

impl Default for ExpansionAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpansionAnimation {
    /// Create a collapsed animation.
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, expansion_easing()),
        }
    }

    /// Animate towards the expanded state.
    pub fn expand(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Animate towards the collapsed state.
    pub fn collapse(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Current expansion factor (0.0 to 1.0).
    pub fn factor(&self) -> f32 {
        *self.animation.value()
    }

    /// Check if the transition is still running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Advance the transition. Must be called on each animation frame.
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let anim = ExpansionAnimation::new();
        assert_eq!(anim.factor(), 0.0);
    }

    #[test]
    fn expand_moves_towards_full_factor() {
        let mut anim = ExpansionAnimation::new();
        anim.expand();
        // The transition has either started or already arrived.
        assert!(anim.is_animating() || anim.factor() > 0.0);
    }

    #[test]
    fn factor_stays_in_range() {
        let mut anim = ExpansionAnimation::new();
        anim.expand();
        assert!(anim.factor() >= 0.0 && anim.factor() <= 1.0);

        anim.collapse();
        assert!(anim.factor() >= 0.0 && anim.factor() <= 1.0);
    }
}
