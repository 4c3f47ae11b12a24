//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, event journal).
//!
//! # The Palette
//!
//! The game has exactly four selectable targets, identified by the strings
//! `button1` .. `button4`. In the terminal they are laid out as a 2x2 grid:
//!
//! ```text
//! ┌─────────┬─────────┐
//! │ button1 │ button2 │
//! ├─────────┼─────────┤
//! │ button3 │ button4 │
//! └─────────┴─────────┘
//! ```
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `STEP_INTERVAL_MS` | 800 | Delay between two highlights during playback |
//! | `FLASH_MS` | 400 | How long a highlighted target stays lit |
//! | `ROUND_DELAY_MS` | 1000 | Pause between a completed round and the next playback |
//! | `BANNER_MS` | 1500 | How long a notification stays on screen |
//!
//! # Examples
//!
//! ```
//! use tui_simon_types::{Choice, CHOICES};
//!
//! let choice: Choice = "button3".parse().unwrap();
//! assert_eq!(choice, Choice::Button3);
//! assert_eq!(choice.id(), "button3");
//! assert_eq!(CHOICES.len(), 4);
//!
//! assert!("button5".parse::<Choice>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Interval between two consecutive playback highlights.
pub const STEP_INTERVAL_MS: u32 = 800;

/// Duration a target stays lit after `lights_on`.
pub const FLASH_MS: u32 = 400;

/// Pause after a completed round before the extended sequence is played.
pub const ROUND_DELAY_MS: u32 = 1000;

/// Time a notification banner stays visible.
pub const BANNER_MS: u32 = 1500;

/// Message surfaced to the player on an incorrect input.
pub const WRONG_MOVE_MESSAGE: &str = "Wrong Move!";

/// The four selectable targets, in display order.
pub const CHOICES: [Choice; 4] = [
    Choice::Button1,
    Choice::Button2,
    Choice::Button3,
    Choice::Button4,
];


/// One of the four selectable targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Button1,
    Button2,
    Button3,
    Button4,
}

impl Choice {
    /// Stable identifier (`button1` .. `button4`).
    pub fn id(&self) -> &'static str {
        match self {
            Choice::Button1 => "button1",
            Choice::Button2 => "button2",
            Choice::Button3 => "button3",
            Choice::Button4 => "button4",
        }
    }

    /// Position in [`CHOICES`].
    pub fn index(&self) -> usize {
        match self {
            Choice::Button1 => 0,
            Choice::Button2 => 1,
            Choice::Button3 => 2,
            Choice::Button4 => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        CHOICES.get(index).copied()
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Input carried an identifier outside the fixed palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown choice identifier: {0:?}")]
pub struct UnknownChoice(pub String);

impl FromStr for Choice {
    type Err = UnknownChoice;

    /// Parse one of the four exact identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_simon_types::Choice;
    ///
    /// assert_eq!("button1".parse(), Ok(Choice::Button1));
    /// assert!("BUTTON4".parse::<Choice>().is_err());
    /// assert!("circle".parse::<Choice>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button1" => Ok(Choice::Button1),
            "button2" => Ok(Choice::Button2),
            "button3" => Ok(Choice::Button3),
            "button4" => Ok(Choice::Button4),
            _ => Err(UnknownChoice(s.to_string())),
        }
    }
}

/// Coarse controller state, derived from the game state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No game has been started yet.
    AwaitingNewGame,
    /// The computer is replaying the sequence; input is ignored.
    PlayingBackSequence,
    /// The player is reproducing the sequence.
    AwaitingPlayerInput,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingNewGame => "awaiting_new_game",
            Phase::PlayingBackSequence => "playing_back_sequence",
            Phase::AwaitingPlayerInput => "awaiting_player_input",
        }
    }
}

/// Result of feeding one player activation into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Input arrived while it is not the player's turn (or no listener).
    Ignored,
    /// Correct move, round still in progress.
    Accepted,
    /// Correct move that completed the round; the next round is scheduled.
    RoundComplete,
    /// Incorrect move; the game has been reset.
    WrongMove,
}

/// Core-side event emitted as the game advances.
///
/// Emitted by the controller; the journal maps these onto its JSON records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    NewGame {
        generation: u32,
    },
    TurnAdded {
        choice: Choice,
        length: usize,
    },
    PlaybackStep {
        choice: Choice,
        turn_number: usize,
    },
    PlaybackFinished {
        length: usize,
    },
    PlayerMove {
        choice: Choice,
        index: usize,
    },
    RoundComplete {
        score: u32,
    },
    WrongMove {
        expected: Choice,
        actual: Choice,
        score: u32,
    },
}
