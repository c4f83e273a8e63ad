//! Round sequencing and the running score.

use super::error::RouteError;
use super::geometry::NormalizedPoint;
use super::layout::LayoutMetrics;
use super::scenes::{Scene, SceneCatalog};
use super::session::{ClickOutcome, GuessSession};
use glam::DVec2;
use smallvec::SmallVec;

/// Round index and cumulative score for one play-through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameProgress {
    current_round_index: usize,
    cumulative_score: f64,
}

impl GameProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_round_index(&self) -> usize {
        self.current_round_index
    }

    pub fn cumulative_score(&self) -> f64 {
        self.cumulative_score
    }

    /// Add to the running score. Negative or non-finite amounts are ignored.
    pub fn increase(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.cumulative_score += amount;
        }
    }

    pub fn reset(&mut self) {
        self.current_round_index = 0;
        self.cumulative_score = 0.0;
    }

    fn set_round(&mut self, index: usize) {
        self.current_round_index = index;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Round(usize),
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundResult {
    pub scene_identifier: &'static str,
    pub score: f64,
}

/// Logical events for the navigation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    RoundStarted(usize),
    RoundComplete { round: usize, score: f64 },
    SequenceExhausted { total: f64 },
    Restarted,
}

pub struct RoundOrchestrator {
    catalog: SceneCatalog,
    progress: GameProgress,
    session: Option<GuessSession>,
    screen: Screen,
    history: SmallVec<[RoundResult; 10]>,
}

impl RoundOrchestrator {
    pub fn new(catalog: SceneCatalog) -> Self {
        Self {
            catalog,
            progress: GameProgress::new(),
            session: None,
            screen: Screen::Home,
            history: SmallVec::new(),
        }
    }

    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    pub fn session(&self) -> Option<&GuessSession> {
        self.session.as_ref()
    }

    /// Forward a map click to the current round. `None` outside a round.
    pub fn click(&mut self, pos: DVec2, metrics: Option<&LayoutMetrics>) -> Option<ClickOutcome> {
        Some(self.session.as_mut()?.click(pos, metrics))
    }

    /// Place a guess directly in normalized space. Returns `false` outside a
    /// round or once the round is confirmed.
    pub fn place_guess(&mut self, guess: NormalizedPoint) -> bool {
        match self.session.as_mut() {
            Some(session) if !session.is_confirmed() => {
                session.place_guess(guess);
                true
            }
            _ => false,
        }
    }

    /// Whether this round already has a result in the history, e.g. after
    /// browser Back onto a finished round.
    pub fn is_scored(&self, round: usize) -> bool {
        self.catalog.get(round).is_some_and(|scene| {
            self.history
                .iter()
                .any(|r| r.scene_identifier == scene.identifier)
        })
    }

    pub fn current_scene(&self) -> Option<&'static Scene> {
        match self.screen {
            Screen::Round(i) => self.catalog.get(i),
            _ => None,
        }
    }

    /// Begin a play-through at the first scene.
    pub fn start(&mut self) -> GameEvent {
        self.progress.reset();
        self.history.clear();
        self.enter_round(0)
    }

    /// Jump to a specific round, e.g. when the player lands on a deep link.
    /// The running score is kept.
    pub fn start_round(&mut self, index: usize) -> Result<GameEvent, RouteError> {
        if index >= self.catalog.len() {
            return Err(RouteError::RoundOutOfRange {
                index,
                len: self.catalog.len(),
            });
        }
        Ok(self.enter_round(index))
    }

    /// Confirm the current guess and add its score to the running total.
    /// `None` when there is no round, no guess, or it is already confirmed.
    /// A round revisited after it was scored is revealed but adds nothing.
    pub fn confirm(&mut self) -> Option<GameEvent> {
        let Screen::Round(round) = self.screen else {
            return None;
        };
        let revisit = self.is_scored(round);
        let score = self.session.as_mut()?.confirm()?;
        if revisit {
            log::info!("[rounds] round {} already scored, not counted again", round);
            return Some(GameEvent::RoundComplete { round, score });
        }
        self.progress.increase(score);
        if let Some(scene) = self.catalog.get(round) {
            self.history.push(RoundResult {
                scene_identifier: scene.identifier,
                score,
            });
        }
        log::info!(
            "[rounds] round {} confirmed score={:.3} total={:.3}",
            round,
            score,
            self.progress.cumulative_score()
        );
        Some(GameEvent::RoundComplete { round, score })
    }

    /// Move past a confirmed round: next scene, or the finished screen after
    /// the last one. `None` until the current round is confirmed.
    pub fn advance(&mut self) -> Option<GameEvent> {
        let Screen::Round(round) = self.screen else {
            return None;
        };
        if !self.session.as_ref()?.is_confirmed() {
            return None;
        }
        let next = round + 1;
        if next < self.catalog.len() {
            Some(self.enter_round(next))
        } else {
            self.session = None;
            self.screen = Screen::Finished;
            let total = self.progress.cumulative_score();
            log::info!("[rounds] sequence exhausted total={:.3}", total);
            Some(GameEvent::SequenceExhausted { total })
        }
    }

    /// Back to the home screen with zero score and round index.
    pub fn restart(&mut self) -> GameEvent {
        self.progress.reset();
        self.history.clear();
        self.session = None;
        self.screen = Screen::Home;
        log::info!("[rounds] restart");
        GameEvent::Restarted
    }

    fn enter_round(&mut self, index: usize) -> GameEvent {
        // callers check bounds
        let answer = self.catalog.get(index).map(|s| s.answer_location).unwrap_or_default();
        self.progress.set_round(index);
        self.session = Some(GuessSession::new(answer));
        self.screen = Screen::Round(index);
        log::info!("[rounds] round {} started", index);
        GameEvent::RoundStarted(index)
    }
}
