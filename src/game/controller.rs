//! Round controller
//!
//! Owns the session, the current round and the timer, and is the only place game
//! state changes. Phases:
//!
//! ```text
//! NotStarted ──start_round──▶ RoundActive ──valid submit──▶ RoundScored ──Advance──┐
//!                                 │                                               │
//!                                 └──Expired──▶ RoundTimedOut ──Advance───────────┤
//!                                                                                 ▼
//!                                        GameOver ◀──(all rounds played)── start_round
//! ```
//!
//! `quit` jumps to `GameOver` from anywhere; `reset` zeroes the session and starts over.

use super::events::{Epoch, EventSender, GameEvent, GameEvents, GameObserver};
use super::session::{GameSession, RoundState};
use super::timer::{RoundTimer, TimerState};
use crate::config::{ConfigError, GameConfig};
use crate::core::{ScoreBreakdown, ValidationOutcome, validate};
use crate::dictionary::Dictionary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tokio::sync::mpsc;
use tokio::time::{self, Duration};
use tracing::{debug, info, warn};

/// Where the game currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    /// Timer running, submissions accepted
    RoundActive,
    /// Timer expired; waiting to move on
    RoundTimedOut,
    /// Word accepted; showing the result before moving on
    RoundScored,
    GameOver,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::RoundActive => "round active",
            Self::RoundTimedOut => "round timed out",
            Self::RoundScored => "round scored",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// What happened to a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Accepted and added to the total
    Scored(ScoreBreakdown),
    /// Failed validation; the round continues
    Rejected(ValidationOutcome),
    /// Arrived after the timer expired and was dropped
    Late,
}

/// Contract violations by the caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("Cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: RoundPhase,
    },
}

/// Drives rounds from start to game over
///
/// Must be used from within a tokio runtime: the timer and the result display delays
/// run as spawned tasks that report back through [`GameEvents`].
pub struct RoundController<D, O> {
    config: GameConfig,
    dictionary: D,
    observer: O,
    session: GameSession,
    round: Option<RoundState>,
    phase: RoundPhase,
    timer: RoundTimer,
    events: EventSender,
    epoch: Epoch,
    rng: StdRng,
}

impl<D, O> RoundController<D, O>
where
    D: Dictionary,
    O: GameObserver,
{
    /// Create a controller and the event stream the host loop must feed back into
    /// [`handle_event`](Self::handle_event)
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration cannot run a game.
    pub fn new(
        config: GameConfig,
        dictionary: D,
        observer: O,
    ) -> Result<(Self, GameEvents), ConfigError> {
        config.validate()?;

        let (events, receiver) = mpsc::unbounded_channel();
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let controller = Self {
            session: GameSession::new(config.max_rounds),
            timer: RoundTimer::new(config.round_seconds, events.clone()),
            config,
            dictionary,
            observer,
            round: None,
            phase: RoundPhase::NotStarted,
            events,
            epoch: 0,
            rng,
        };

        Ok((controller, receiver))
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Begin the next round, or end the game if every round has been played
    ///
    /// # Errors
    ///
    /// Returns `InvalidPhase` unless the game is not started or the previous round
    /// has finished (scored or timed out).
    pub async fn start_round(&mut self) -> Result<(), ControllerError> {
        match self.phase {
            RoundPhase::NotStarted | RoundPhase::RoundScored | RoundPhase::RoundTimedOut => {}
            phase => return Err(self.reject("start a round", phase)),
        }

        let Some(number) = self.session.begin_round() else {
            self.finish();
            return Ok(());
        };

        let required_length = self
            .rng
            .random_range(self.config.min_length..=self.config.max_length);
        self.round = Some(RoundState::new(
            number,
            required_length,
            self.config.round_seconds,
        ));
        self.epoch += 1;
        self.phase = RoundPhase::RoundActive;

        info!(
            round = number,
            max_rounds = self.session.max_rounds(),
            required_length,
            "Round started"
        );
        self.observer
            .on_round_start(number, self.session.max_rounds(), required_length);

        self.timer.start(self.epoch).await;
        Ok(())
    }

    /// Apply one timer or scheduler event
    ///
    /// Events from an earlier epoch are dropped, as are ticks that arrive after the
    /// round stopped accepting words.
    pub async fn handle_event(&mut self, event: GameEvent) {
        if event.epoch() != self.epoch {
            debug!(?event, current = self.epoch, "Dropping stale event");
            return;
        }

        match event {
            GameEvent::Tick { remaining, .. } => {
                if !self.accepting_words() {
                    debug!(remaining, "Ignoring tick after round stopped");
                    return;
                }
                if let Some(round) = self.round.as_mut() {
                    round.record_tick(remaining);
                }
                self.observer.on_tick(remaining);

                // The last tick closes the round; `Expired` follows but may queue
                // behind player input
                if remaining == 0 {
                    self.expire();
                }
            }
            GameEvent::Expired { .. } => {
                if !self.accepting_words() {
                    debug!("Ignoring expiry after round stopped");
                    return;
                }
                self.expire();
            }
            GameEvent::Advance { .. } => {
                if let Err(e) = self.start_round().await {
                    warn!("Scheduled advance failed: {e}");
                }
            }
        }
    }

    /// Submit a word for the current round
    ///
    /// Rejected words leave the round running so the player can try again.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPhase` when no round is in progress. State is left untouched.
    pub fn submit(&mut self, word: &str) -> Result<Submission, ControllerError> {
        match self.phase {
            RoundPhase::RoundActive => {}
            RoundPhase::RoundTimedOut => {
                debug!(word, "Submission arrived after expiry; dropped");
                return Ok(Submission::Late);
            }
            phase => return Err(self.reject("submit a word", phase)),
        }

        if self.timer.state() != TimerState::Running
            || self.round.as_ref().is_some_and(|round| round.remaining_seconds() == 0)
        {
            debug!(word, "Submission arrived after timer stopped; dropped");
            return Ok(Submission::Late);
        }

        let Some((required_length, elapsed)) = self
            .round
            .as_ref()
            .map(|round| (round.required_length(), round.elapsed_seconds()))
        else {
            return Err(self.reject("submit a word", self.phase));
        };

        let outcome = validate(word, required_length, &self.dictionary);
        if !outcome.is_valid() {
            debug!(word, %outcome, "Submission rejected");
            self.observer.on_validation_failure(outcome);
            return Ok(Submission::Rejected(outcome));
        }

        self.timer.cancel();
        let breakdown = ScoreBreakdown::for_word(word, elapsed);
        let total = self.session.record(breakdown);
        self.phase = RoundPhase::RoundScored;

        info!(
            round = self.session.current_round(),
            word,
            elapsed,
            base = breakdown.base_score,
            bonus = breakdown.time_bonus,
            total,
            "Round scored"
        );
        self.observer.on_round_scored(breakdown, total);
        self.schedule_advance(self.config.scored_delay);

        Ok(Submission::Scored(breakdown))
    }

    /// Zero the session and start again from round one
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`start_round`](Self::start_round).
    pub async fn reset(&mut self) -> Result<(), ControllerError> {
        self.timer.cancel();
        self.session.reset();
        self.round = None;
        self.phase = RoundPhase::NotStarted;
        self.epoch += 1;

        info!("Game reset");
        self.observer.on_game_reset(self.session.max_rounds());
        self.start_round().await
    }

    /// End the game immediately, keeping the score earned so far
    pub fn quit(&mut self) {
        if self.phase == RoundPhase::GameOver {
            debug!("Quit after game over; nothing to do");
            return;
        }
        info!(phase = %self.phase, "Player quit");
        self.finish();
    }

    /// Stop the timer task and wait for it to exit
    pub async fn shutdown(&mut self) {
        self.timer.shutdown().await;
    }

    fn accepting_words(&self) -> bool {
        self.phase == RoundPhase::RoundActive && self.timer.state() == TimerState::Running
    }

    fn expire(&mut self) {
        self.timer.mark_expired();
        self.phase = RoundPhase::RoundTimedOut;

        let number = self.session.current_round();
        info!(round = number, "Round timed out");
        self.observer.on_timeout(number);
        self.schedule_advance(self.config.timeout_delay);
    }

    fn finish(&mut self) {
        self.timer.cancel();
        self.round = None;
        self.phase = RoundPhase::GameOver;
        self.epoch += 1;

        let total = self.session.total_score();
        info!(total, rounds = self.session.current_round(), "Game over");
        self.observer.on_game_over(total);
    }

    fn schedule_advance(&self, delay: Duration) {
        let events = self.events.clone();
        let epoch = self.epoch;
        tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = events.send(GameEvent::Advance { epoch });
        });
    }

    fn reject(&self, operation: &'static str, phase: RoundPhase) -> ControllerError {
        warn!(operation, %phase, round = self.session.current_round(), "Invalid controller call");
        ControllerError::InvalidPhase { operation, phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Note {
        RoundStart(u32, u32, usize),
        Failure(ValidationOutcome),
        Timeout(u32),
        Scored(ScoreBreakdown, u32),
        GameOver(u32),
        Reset(u32),
    }

    #[derive(Default)]
    struct Recorder {
        notes: Vec<Note>,
        last_tick: Option<u32>,
    }

    impl GameObserver for Recorder {
        fn on_round_start(&mut self, round: u32, max_rounds: u32, required_length: usize) {
            self.notes
                .push(Note::RoundStart(round, max_rounds, required_length));
        }

        fn on_tick(&mut self, remaining: u32) {
            self.last_tick = Some(remaining);
        }

        fn on_validation_failure(&mut self, outcome: ValidationOutcome) {
            self.notes.push(Note::Failure(outcome));
        }

        fn on_timeout(&mut self, round: u32) {
            self.notes.push(Note::Timeout(round));
        }

        fn on_round_scored(&mut self, breakdown: ScoreBreakdown, total: u32) {
            self.notes.push(Note::Scored(breakdown, total));
        }

        fn on_game_over(&mut self, total: u32) {
            self.notes.push(Note::GameOver(total));
        }

        fn on_game_reset(&mut self, max_rounds: u32) {
            self.notes.push(Note::Reset(max_rounds));
        }
    }

    type TestController = RoundController<WordSet, Recorder>;

    fn fixed_length(length: usize) -> GameConfig {
        GameConfig::default().with_lengths(length, length).with_seed(7)
    }

    fn controller(config: GameConfig) -> (TestController, GameEvents) {
        let dictionary = WordSet::from_words(["cat", "dog", "apple", "cabbage", "orange"]);
        RoundController::new(config, dictionary, Recorder::default()).expect("valid config")
    }

    /// Feed events until the current round reports `remaining` seconds
    async fn run_until_remaining(c: &mut TestController, rx: &mut GameEvents, remaining: u32) {
        while let Some(event) = rx.recv().await {
            c.handle_event(event).await;
            if matches!(event, GameEvent::Tick { remaining: r, .. } if r == remaining)
                && c.round().map(RoundState::remaining_seconds) == Some(remaining)
            {
                return;
            }
        }
    }

    /// Feed events until the controller reaches `phase`
    async fn run_until_phase(c: &mut TestController, rx: &mut GameEvents, phase: RoundPhase) {
        while c.phase() != phase {
            let event = rx.recv().await.expect("event channel closed");
            c.handle_event(event).await;
        }
    }

    async fn score_cabbage_at(remaining: u32) -> (Submission, TestController) {
        let (mut c, mut rx) = controller(fixed_length(7));
        c.start_round().await.unwrap();
        run_until_remaining(&mut c, &mut rx, remaining).await;
        let submission = c.submit("cabbage").unwrap();
        (submission, c)
    }

    #[tokio::test(start_paused = true)]
    async fn start_round_draws_length_in_range() {
        let (mut c, _rx) = controller(GameConfig::default().with_seed(42));
        c.start_round().await.unwrap();

        assert_eq!(c.phase(), RoundPhase::RoundActive);
        assert_eq!(c.timer_state(), TimerState::Running);
        assert_eq!(c.session().current_round(), 1);

        let round = c.round().unwrap();
        assert!((3..=7).contains(&round.required_length()));
        assert_eq!(round.remaining_seconds(), 15);
        assert_eq!(
            c.observer().notes,
            [Note::RoundStart(1, 10, round.required_length())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cabbage_with_four_seconds_left_earns_five() {
        let (submission, c) = score_cabbage_at(4).await;
        let expected = ScoreBreakdown {
            base_score: 14,
            time_bonus: 5,
        };

        assert_eq!(submission, Submission::Scored(expected));
        assert_eq!(c.session().total_score(), 19);
        assert_eq!(c.phase(), RoundPhase::RoundScored);
        assert_eq!(c.timer_state(), TimerState::Stopped);
        assert_eq!(c.observer().notes.last(), Some(&Note::Scored(expected, 19)));
    }

    #[tokio::test(start_paused = true)]
    async fn cabbage_with_seven_seconds_left_earns_ten() {
        let (submission, c) = score_cabbage_at(7).await;
        assert_eq!(
            submission,
            Submission::Scored(ScoreBreakdown {
                base_score: 14,
                time_bonus: 10,
            })
        );
        assert_eq!(c.session().total_score(), 24);
    }

    #[tokio::test(start_paused = true)]
    async fn cabbage_with_twelve_seconds_left_earns_twenty() {
        let (submission, c) = score_cabbage_at(12).await;
        assert_eq!(
            submission,
            Submission::Scored(ScoreBreakdown {
                base_score: 14,
                time_bonus: 20,
            })
        );
        assert_eq!(c.session().total_score(), 34);
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_time_follows_last_reported_tick() {
        // Submitting right after the 5-second tick counts as 10 seconds elapsed
        let (submission, _) = score_cabbage_at(5).await;
        assert_eq!(
            submission,
            Submission::Scored(ScoreBreakdown {
                base_score: 14,
                time_bonus: 10,
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_word_keeps_round_running() {
        let (mut c, mut rx) = controller(fixed_length(5));
        c.start_round().await.unwrap();
        run_until_remaining(&mut c, &mut rx, 13).await;

        assert_eq!(
            c.submit("1a"),
            Ok(Submission::Rejected(ValidationOutcome::NotAlphabetic))
        );
        assert_eq!(
            c.submit("orange"),
            Ok(Submission::Rejected(ValidationOutcome::WrongLength(5)))
        );
        assert_eq!(
            c.submit("quoxy"),
            Ok(Submission::Rejected(ValidationOutcome::NotInDictionary))
        );
        assert_eq!(c.phase(), RoundPhase::RoundActive);
        assert_eq!(c.timer_state(), TimerState::Running);
        assert_eq!(c.session().total_score(), 0);

        // Retry within the same round still scores
        let submission = c.submit("apple").unwrap();
        assert_eq!(
            submission,
            Submission::Scored(ScoreBreakdown {
                base_score: 9,
                time_bonus: 20,
            })
        );
        assert_eq!(
            c.observer().notes[1..4],
            [
                Note::Failure(ValidationOutcome::NotAlphabetic),
                Note::Failure(ValidationOutcome::WrongLength(5)),
                Note::Failure(ValidationOutcome::NotInDictionary),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_drops_late_words_and_moves_on() {
        let (mut c, mut rx) = controller(fixed_length(3));
        c.start_round().await.unwrap();
        run_until_phase(&mut c, &mut rx, RoundPhase::RoundTimedOut).await;

        assert_eq!(c.observer().last_tick, Some(0));
        assert_eq!(c.observer().notes.last(), Some(&Note::Timeout(1)));
        assert_eq!(c.timer_state(), TimerState::Stopped);

        assert_eq!(c.submit("cat"), Ok(Submission::Late));
        assert_eq!(c.session().total_score(), 0);

        let timed_out_at = time::Instant::now();
        run_until_phase(&mut c, &mut rx, RoundPhase::RoundActive).await;
        assert_eq!(timed_out_at.elapsed(), Duration::from_secs(1));
        assert_eq!(c.session().current_round(), 2);
        assert_eq!(c.session().total_score(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn final_tick_closes_round_before_expired_arrives() {
        let (mut c, mut rx) = controller(fixed_length(3));
        c.start_round().await.unwrap();
        run_until_remaining(&mut c, &mut rx, 0).await;

        // `Expired` is still queued when the player's word comes in
        assert_eq!(rx.try_recv(), Ok(GameEvent::Expired { epoch: 1 }));
        assert_eq!(c.phase(), RoundPhase::RoundTimedOut);
        assert_eq!(c.submit("cat"), Ok(Submission::Late));
        assert_eq!(c.session().total_score(), 0);

        c.handle_event(GameEvent::Expired { epoch: 1 }).await;
        assert_eq!(c.phase(), RoundPhase::RoundTimedOut);
        let timeouts = c
            .observer()
            .notes
            .iter()
            .filter(|note| matches!(note, Note::Timeout(_)))
            .count();
        assert_eq!(timeouts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn scored_round_advances_after_display_delay() {
        let (mut c, mut rx) = controller(fixed_length(3));
        c.start_round().await.unwrap();
        run_until_remaining(&mut c, &mut rx, 14).await;
        c.submit("dog").unwrap();

        let scored_at = time::Instant::now();
        run_until_phase(&mut c, &mut rx, RoundPhase::RoundActive).await;
        assert_eq!(scored_at.elapsed(), Duration::from_secs(2));
        assert_eq!(c.session().current_round(), 2);
        assert_eq!(c.round().unwrap().remaining_seconds(), 15);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_after_scoring_are_ignored() {
        let (mut c, mut rx) = controller(fixed_length(3));
        c.start_round().await.unwrap();
        run_until_remaining(&mut c, &mut rx, 10).await;
        c.submit("cat").unwrap();

        // An in-flight tick of the same run must not change anything
        c.handle_event(GameEvent::Tick {
            epoch: 1,
            remaining: 9,
        })
        .await;
        c.handle_event(GameEvent::Expired { epoch: 1 }).await;

        assert_eq!(c.phase(), RoundPhase::RoundScored);
        assert_eq!(c.round().unwrap().remaining_seconds(), 10);
        assert_eq!(c.observer().last_tick, Some(10));
    }

    #[tokio::test(start_paused = true)]
    async fn total_is_sum_of_scored_rounds_and_game_ends() {
        let config = fixed_length(3).with_max_rounds(4);
        let (mut c, mut rx) = controller(config);
        c.start_round().await.unwrap();

        let mut expected_total = 0;
        for round in 1..=4 {
            assert_eq!(c.session().current_round(), round);
            if round == 2 {
                // Let this one time out
                run_until_phase(&mut c, &mut rx, RoundPhase::RoundTimedOut).await;
            } else {
                run_until_remaining(&mut c, &mut rx, 13).await;
                c.submit("xyz").unwrap(); // not in the dictionary
                let Submission::Scored(breakdown) = c.submit("cat").unwrap() else {
                    panic!("cat should score");
                };
                expected_total += breakdown.round_total();
            }

            let next = if round == 4 {
                RoundPhase::GameOver
            } else {
                RoundPhase::RoundActive
            };
            run_until_phase(&mut c, &mut rx, next).await;
        }

        // cat = 5 points + 20 bonus, three times
        assert_eq!(expected_total, 75);
        assert_eq!(c.session().total_score(), 75);
        assert_eq!(c.phase(), RoundPhase::GameOver);
        assert_eq!(c.observer().notes.last(), Some(&Note::GameOver(75)));

        assert!(c.submit("cat").is_err());
        assert!(c.start_round().await.is_err());
        assert_eq!(c.session().total_score(), 75);
    }

    #[test]
    fn invalid_config_is_refused() {
        let dictionary = WordSet::from_words(["cat"]);
        let result = RoundController::new(
            GameConfig::default().with_lengths(5, 3),
            dictionary,
            Recorder::default(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvertedLengths { min: 5, max: 3 })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn submit_before_start_is_a_contract_violation() {
        let (mut c, _rx) = controller(fixed_length(3));
        assert_eq!(
            c.submit("cat"),
            Err(ControllerError::InvalidPhase {
                operation: "submit a word",
                phase: RoundPhase::NotStarted,
            })
        );
        assert_eq!(c.phase(), RoundPhase::NotStarted);
        assert!(c.observer().notes.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn start_round_twice_is_rejected() {
        let (mut c, _rx) = controller(fixed_length(3));
        c.start_round().await.unwrap();
        assert!(matches!(
            c.start_round().await,
            Err(ControllerError::InvalidPhase {
                phase: RoundPhase::RoundActive,
                ..
            })
        ));
        assert_eq!(c.session().current_round(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_starts_over_and_ignores_old_events() {
        let (mut c, mut rx) = controller(fixed_length(3));
        c.start_round().await.unwrap();
        run_until_remaining(&mut c, &mut rx, 14).await;
        c.submit("cat").unwrap();
        assert!(c.session().total_score() > 0);

        c.reset().await.unwrap();
        let notes = &c.observer().notes;
        assert_eq!(
            notes[notes.len() - 2..],
            [Note::Reset(10), Note::RoundStart(1, 10, 3)]
        );
        assert_eq!(c.session().total_score(), 0);
        assert_eq!(c.session().current_round(), 1);
        assert_eq!(c.phase(), RoundPhase::RoundActive);

        // The pending advance from the scored round is stale and must not skip ahead
        run_until_remaining(&mut c, &mut rx, 10).await;
        assert_eq!(c.session().current_round(), 1);
        assert_eq!(c.phase(), RoundPhase::RoundActive);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_freezes_score_and_stops_timer() {
        let (mut c, mut rx) = controller(fixed_length(3));
        c.start_round().await.unwrap();
        run_until_remaining(&mut c, &mut rx, 14).await;
        c.submit("dog").unwrap();
        let total = c.session().total_score();

        c.quit();
        assert_eq!(c.phase(), RoundPhase::GameOver);
        assert_eq!(c.timer_state(), TimerState::Stopped);
        assert_eq!(c.observer().notes.last(), Some(&Note::GameOver(total)));

        // Pending advance arrives but the game stays over
        time::sleep(Duration::from_secs(5)).await;
        while let Ok(event) = rx.try_recv() {
            c.handle_event(event).await;
        }
        assert_eq!(c.phase(), RoundPhase::GameOver);
        assert_eq!(c.session().current_round(), 1);
        assert!(c.submit("cat").is_err());
        assert_eq!(c.session().total_score(), total);
    }

    #[tokio::test(start_paused = true)]
    async fn quitting_twice_reports_game_over_once() {
        let (mut c, _rx) = controller(fixed_length(3));
        c.start_round().await.unwrap();

        c.quit();
        c.quit();

        let game_overs = c
            .observer()
            .notes
            .iter()
            .filter(|note| matches!(note, Note::GameOver(_)))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(c.phase(), RoundPhase::GameOver);
    }
}
