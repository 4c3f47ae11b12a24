use crate::types::{Choice, Phase};

/// Copyable view of the controller for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub score: u32,
    pub best_score: u32,
    pub sequence_len: usize,
    /// Moves entered so far in the current round.
    pub player_progress: usize,
    pub turn_number: usize,
    pub turn_in_progress: bool,
    pub last_button: Option<Choice>,
    pub phase: Phase,
    pub generation: u32,
    pub seed: u32,
}

impl GameSnapshot {
    /// Current round number as shown to the player (1-based, 0 when idle).
    pub fn round(&self) -> usize {
        self.sequence_len
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            score: 0,
            best_score: 0,
            sequence_len: 0,
            player_progress: 0,
            turn_number: 0,
            turn_in_progress: false,
            last_button: None,
            phase: Phase::AwaitingNewGame,
            generation: 0,
            seed: 0,
        }
    }
}
