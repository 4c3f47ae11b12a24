//! Game state module - the Simon state machine
//!
//! [`GameState`] is the plain data the game is about (score, the computer's
//! sequence, the player's moves, playback cursor and input guard).
//! [`GameController`] owns one `GameState` together with the presentation
//! adapters, the RNG and the timers, and is the only thing that mutates it.
//!
//! Time is virtual. The host calls [`GameController::tick`] with the elapsed
//! milliseconds; playback steps, light-offs and the next-round lead-in are
//! fire-once timers popped from a [`TimerWheel`].

use crate::display::{Display, Notifier};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::timers::{Fired, SequenceStep, TimerWheel};
use crate::types::*;

/// Timing knobs for playback and feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Interval between two playback highlights.
    pub step_ms: u32,
    /// How long a target stays lit.
    pub flash_ms: u32,
    /// Pause after a completed round before the next playback starts.
    pub round_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            step_ms: STEP_INTERVAL_MS,
            flash_ms: FLASH_MS,
            round_delay_ms: ROUND_DELAY_MS,
        }
    }
}

impl Timing {
    /// Clamp intervals so the clock always moves forward and a flash ends
    /// before the next playback step lights up.
    pub fn sanitized(self) -> Self {
        let step_ms = self.step_ms.max(2);
        Self {
            step_ms,
            flash_ms: self.flash_ms.clamp(1, step_ms - 1),
            round_delay_ms: self.round_delay_ms.max(1),
        }
    }
}

/// Authoritative game data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    score: u32,
    current_game: Vec<Choice>,
    player_moves: Vec<Choice>,
    turn_number: usize,
    last_button: Option<Choice>,
    turn_in_progress: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The computer-generated pattern.
    pub fn current_game(&self) -> &[Choice] {
        &self.current_game
    }

    /// The player's input for the current round.
    pub fn player_moves(&self) -> &[Choice] {
        &self.player_moves
    }

    /// The fixed palette.
    pub fn choices(&self) -> &'static [Choice; 4] {
        &CHOICES
    }

    pub fn turn_number(&self) -> usize {
        self.turn_number
    }

    /// Most recently accepted player input (`None` when empty).
    pub fn last_button(&self) -> Option<Choice> {
        self.last_button
    }

    pub fn turn_in_progress(&self) -> bool {
        self.turn_in_progress
    }

    pub fn phase(&self) -> Phase {
        if self.current_game.is_empty() {
            Phase::AwaitingNewGame
        } else if self.turn_in_progress {
            Phase::PlayingBackSequence
        } else {
            Phase::AwaitingPlayerInput
        }
    }
}

/// Owns the game state and drives it against a display and a notifier.
#[derive(Debug)]
pub struct GameController<D, N> {
    state: GameState,
    display: D,
    notifier: N,
    rng: SimpleRng,
    timers: TimerWheel,
    timing: Timing,
    /// Monotonic game id (increments on every `new_game`).
    generation: u32,
    best_score: u32,
    now_ms: u64,
    /// Events not yet consumed by observers.
    events: Vec<GameEvent>,
}

impl<D: Display, N: Notifier> GameController<D, N> {
    /// Create an idle controller; nothing happens until [`new_game`](Self::new_game).
    pub fn new(display: D, notifier: N, seed: u32) -> Self {
        Self::with_timing(display, notifier, seed, Timing::default())
    }

    pub fn with_timing(display: D, notifier: N, seed: u32, timing: Timing) -> Self {
        Self {
            state: GameState::new(),
            display,
            notifier,
            rng: SimpleRng::new(seed),
            timers: TimerWheel::new(),
            timing: timing.sanitized(),
            generation: 0,
            best_score: 0,
            now_ms: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Take all events emitted since the last call.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.score = self.state.score;
        out.best_score = self.best_score;
        out.sequence_len = self.state.current_game.len();
        out.player_progress = self.state.player_moves.len();
        out.turn_number = self.state.turn_number;
        out.turn_in_progress = self.state.turn_in_progress;
        out.last_button = self.state.last_button;
        out.phase = self.state.phase();
        out.generation = self.generation;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reset everything and start playback of a fresh one-element sequence.
    pub fn new_game(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.timers.cancel_sequence();

        self.state.score = 0;
        self.state.player_moves.clear();
        self.state.current_game.clear();
        self.state.turn_number = 0;

        for choice in CHOICES {
            if !self.display.is_listener_attached(choice) {
                self.display.mark_listener_attached(choice);
            }
        }

        self.display.set_score_text("0");
        self.state.last_button = None;
        self.state.turn_in_progress = true;

        tracing::info!(generation = self.generation, "new game");
        self.events.push(GameEvent::NewGame {
            generation: self.generation,
        });

        self.add_turn();
    }

    /// Append one random target and replay the whole sequence.
    pub fn add_turn(&mut self) {
        let choice = self.rng.next_choice();
        self.state.player_moves.clear();
        self.state.current_game.push(choice);

        tracing::debug!(
            %choice,
            length = self.state.current_game.len(),
            "turn added"
        );
        self.events.push(GameEvent::TurnAdded {
            choice,
            length: self.state.current_game.len(),
        });

        self.show_turns();
    }

    /// Start replaying `current_game`, one highlight per step interval.
    pub fn show_turns(&mut self) {
        self.state.turn_in_progress = true;
        self.state.turn_number = 0;

        if self.state.current_game.is_empty() {
            self.timers.cancel_sequence();
            self.finish_playback();
            return;
        }

        let due = self.now_ms + self.timing.step_ms as u64;
        self.timers
            .schedule_sequence(due, self.generation, SequenceStep::Playback);
    }

    /// Light a target and schedule it to go dark again.
    pub fn lights_on(&mut self, choice: Choice) {
        self.display.highlight(choice);
        self.display.play_cue(choice);
        self.timers
            .schedule_lights_off(self.now_ms + self.timing.flash_ms as u64, choice);
    }

    /// Validate one player move.
    pub fn player_turn(&mut self, choice: Choice) -> MoveOutcome {
        if self.state.turn_in_progress || self.state.current_game.is_empty() {
            return MoveOutcome::Ignored;
        }

        self.state.player_moves.push(choice);
        self.lights_on(choice);
        self.state.last_button = Some(choice);

        let index = self.state.player_moves.len() - 1;
        self.events.push(GameEvent::PlayerMove { choice, index });

        let expected = self.state.current_game[index];
        if expected != choice {
            tracing::info!(
                %expected,
                actual = %choice,
                score = self.state.score,
                "wrong move"
            );
            self.events.push(GameEvent::WrongMove {
                expected,
                actual: choice,
                score: self.state.score,
            });
            self.notifier.notify(WRONG_MOVE_MESSAGE);
            self.new_game();
            return MoveOutcome::WrongMove;
        }

        if self.state.player_moves.len() < self.state.current_game.len() {
            return MoveOutcome::Accepted;
        }

        self.state.score += 1;
        self.best_score = self.best_score.max(self.state.score);
        self.display.set_score_text(&self.state.score.to_string());
        self.state.player_moves.clear();
        // Input stays blocked through the lead-in to the next playback.
        self.state.turn_in_progress = true;
        let due = self.now_ms + self.timing.round_delay_ms as u64;
        self.timers
            .schedule_sequence(due, self.generation, SequenceStep::NextRound);

        tracing::debug!(score = self.state.score, "round complete");
        self.events.push(GameEvent::RoundComplete {
            score: self.state.score,
        });
        MoveOutcome::RoundComplete
    }

    /// Input-adapter entry point: only targets with a registered listener react.
    pub fn on_activation(&mut self, choice: Choice) -> MoveOutcome {
        if !self.display.is_listener_attached(choice) {
            return MoveOutcome::Ignored;
        }
        self.player_turn(choice)
    }

    /// Route a raw identifier; unknown identifiers change nothing.
    pub fn handle_input(&mut self, id: &str) -> Result<MoveOutcome, UnknownChoice> {
        let choice: Choice = id.parse()?;
        Ok(self.on_activation(choice))
    }

    /// Advance the virtual clock and fire every timer that came due.
    ///
    /// Each timer fires with the clock set to its own deadline, so whatever
    /// it schedules is timed from that deadline, not from the end of the tick.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let target = self.now_ms + elapsed_ms as u64;
        while let Some(fired) = self.timers.pop_due(target) {
            self.now_ms = self.now_ms.max(fired.due_ms());
            self.fire(fired);
        }
        self.now_ms = target;
    }

    fn fire(&mut self, fired: Fired) {
        match fired {
            Fired::LightsOff { choice, .. } => self.display.unhighlight(choice),
            Fired::Sequence { generation, .. } if generation != self.generation => {
                tracing::debug!(generation, current = self.generation, "stale timer dropped");
            }
            Fired::Sequence {
                step: SequenceStep::NextRound,
                ..
            } => self.add_turn(),
            Fired::Sequence {
                step: SequenceStep::Playback,
                due_ms,
                ..
            } => self.playback_step(due_ms),
        }
    }

    fn playback_step(&mut self, due_ms: u64) {
        let Some(&choice) = self.state.current_game.get(self.state.turn_number) else {
            self.finish_playback();
            return;
        };

        self.lights_on(choice);
        self.events.push(GameEvent::PlaybackStep {
            choice,
            turn_number: self.state.turn_number,
        });
        self.state.turn_number += 1;

        if self.state.turn_number >= self.state.current_game.len() {
            self.finish_playback();
        } else {
            self.timers.schedule_sequence(
                due_ms + self.timing.step_ms as u64,
                self.generation,
                SequenceStep::Playback,
            );
        }
    }

    fn finish_playback(&mut self) {
        self.state.turn_in_progress = false;
        self.events.push(GameEvent::PlaybackFinished {
            length: self.state.current_game.len(),
        });
    }
}
