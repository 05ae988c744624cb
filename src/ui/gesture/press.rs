//! Press recognition with zero minimum duration.

use super::Phase;

/// Recognizes a press the moment the pointer makes contact.
///
/// The drag recognizer only reports positions; this one is what lets the
/// slider react to "is being touched" independently of "is being dragged".
/// It never contributes to the slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressRecognizer {
    phase: Phase,
}

impl PressRecognizer {
    /// Recognize a new contact immediately.
    pub fn press(&mut self) {
        if !self.phase.is_active() {
            self.phase = Phase::Began;
        }
    }

    /// The contact lifted normally.
    pub fn release(&mut self) {
        if self.phase.is_active() {
            self.phase = Phase::Ended;
        }
    }

    /// The contact was taken away.
    pub fn cancel(&mut self) {
        if self.phase.is_active() {
            self.phase = Phase::Cancelled;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_press_toggles_activity() {
        let mut press = PressRecognizer::default();
        assert!(!press.is_active());

        press.press();
        assert_eq!(press.phase(), Phase::Began);
        assert!(press.is_active());

        press.release();
        assert_eq!(press.phase(), Phase::Ended);
        assert!(!press.is_active());
    }

    #[test]
    fn release_without_press_is_a_no_op() {
        let mut press = PressRecognizer::default();
        press.release();
        assert_eq!(press.phase(), Phase::Possible);
    }

    #[test]
    fn cancellation_deactivates_like_a_release() {
        let mut press = PressRecognizer::default();
        press.press();
        press.cancel();
        assert_eq!(press.phase(), Phase::Cancelled);
        assert!(!press.is_active());
    }
}
