//! Per-round guess state machine: `AwaitingGuess -> GuessPlaced -> Confirmed`.

use super::geometry::{to_normalized, NormalizedPoint};
use super::layout::LayoutMetrics;
use super::scoring::score_guess;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuessPhase {
    AwaitingGuess,
    GuessPlaced { guess: NormalizedPoint, score: f64 },
    Confirmed { guess: NormalizedPoint, score: f64 },
}

/// Result of feeding a map click into the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    Placed(NormalizedPoint),
    /// Layout not measured yet.
    NoMetrics,
    /// Click landed in the letterbox margin.
    OutOfBounds,
    /// Round already confirmed.
    Frozen,
}

#[derive(Clone, Debug)]
pub struct GuessSession {
    answer: NormalizedPoint,
    phase: GuessPhase,
}

impl GuessSession {
    pub fn new(answer: NormalizedPoint) -> Self {
        Self {
            answer,
            phase: GuessPhase::AwaitingGuess,
        }
    }

    pub fn answer(&self) -> NormalizedPoint {
        self.answer
    }

    pub fn phase(&self) -> GuessPhase {
        self.phase
    }

    pub fn guess(&self) -> Option<NormalizedPoint> {
        match self.phase {
            GuessPhase::AwaitingGuess => None,
            GuessPhase::GuessPlaced { guess, .. } | GuessPhase::Confirmed { guess, .. } => {
                Some(guess)
            }
        }
    }

    /// Score computed at guess time; `None` until a guess exists.
    pub fn score(&self) -> Option<f64> {
        match self.phase {
            GuessPhase::AwaitingGuess => None,
            GuessPhase::GuessPlaced { score, .. } | GuessPhase::Confirmed { score, .. } => {
                Some(score)
            }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.phase, GuessPhase::Confirmed { .. })
    }

    pub fn can_confirm(&self) -> bool {
        matches!(self.phase, GuessPhase::GuessPlaced { .. })
    }

    /// Handle a container-relative click. Any outcome other than
    /// [`ClickOutcome::Placed`] leaves the session untouched.
    pub fn click(&mut self, click: DVec2, metrics: Option<&LayoutMetrics>) -> ClickOutcome {
        if self.is_confirmed() {
            return ClickOutcome::Frozen;
        }
        let Some(m) = metrics else {
            return ClickOutcome::NoMetrics;
        };
        match to_normalized(click, m) {
            Some(point) => {
                self.place_guess(point);
                ClickOutcome::Placed(point)
            }
            None => {
                log::trace!("[session] click ({:.1},{:.1}) outside map", click.x, click.y);
                ClickOutcome::OutOfBounds
            }
        }
    }

    /// Record a guess and its score together. Ignored once confirmed.
    pub fn place_guess(&mut self, guess: NormalizedPoint) {
        if self.is_confirmed() {
            return;
        }
        let score = score_guess(guess, self.answer);
        log::debug!(
            "[session] guess=({:.2},{:.2}) score={:.3}",
            guess.x,
            guess.y,
            score
        );
        self.phase = GuessPhase::GuessPlaced { guess, score };
    }

    /// Freeze the current guess. Returns the score only on the transition
    /// into `Confirmed`; repeated or premature calls return `None`.
    pub fn confirm(&mut self) -> Option<f64> {
        match self.phase {
            GuessPhase::GuessPlaced { guess, score } => {
                self.phase = GuessPhase::Confirmed { guess, score };
                Some(score)
            }
            _ => None,
        }
    }
}
