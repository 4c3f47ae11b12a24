//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Simon state machine and everything it needs to
//! run headless. It has **no dependencies** on terminals or files:
//!
//! - **Deterministic**: Same seed produces the same sequence
//! - **Testable**: Virtual time, so playback can be stepped tick by tick
//! - **Portable**: Presentation sits behind the [`Display`] and [`Notifier`] traits
//!
//! # Module Structure
//!
//! - [`game_state`]: `GameState` data and the `GameController` state machine
//! - [`display`]: presentation traits plus recording (headless) implementations
//! - [`timers`]: fire-once timers on the controller's virtual clock
//! - [`rng`]: seeded uniform choice generator
//! - [`snapshot`]: copyable state view for renderers
//!
//! # Game Rules
//!
//! - A new game starts with a one-element sequence, played back to the player
//! - Input is ignored while the sequence is being played back
//! - Reproducing the whole sequence scores a point and extends it by one
//! - Any wrong press notifies "Wrong Move!" and starts over
//!
//! # Example
//!
//! ```
//! use tui_simon_core::{GameController, HeadlessDisplay, MessageLog};
//! use tui_simon_types::{MoveOutcome, Phase, STEP_INTERVAL_MS};
//!
//! let mut game = GameController::new(HeadlessDisplay::new(), MessageLog::new(), 7);
//! game.new_game();
//! assert_eq!(game.phase(), Phase::PlayingBackSequence);
//!
//! // Let the one-element playback finish.
//! game.tick(STEP_INTERVAL_MS);
//! assert_eq!(game.phase(), Phase::AwaitingPlayerInput);
//!
//! let expected = game.state().current_game()[0];
//! assert_eq!(game.player_turn(expected), MoveOutcome::RoundComplete);
//! assert_eq!(game.state().score(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameController::tick`](game_state::GameController::tick) every frame
//! with the elapsed milliseconds:
//! - **Step interval**: 800ms between playback highlights
//! - **Flash**: 400ms highlight per target
//! - **Round delay**: 1000ms between a completed round and the next playback

pub mod display;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod timers;

pub use tui_simon_types as types;

// Re-export commonly used types for convenience
pub use display::{Display, HeadlessDisplay, MessageLog, Notifier};
pub use game_state::{GameController, GameState, Timing};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use timers::{Fired, SequenceStep, TimerWheel};
