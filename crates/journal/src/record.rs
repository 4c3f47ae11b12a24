//! Journal record types.
//!
//! One JSON object per line:
//!
//! ```text
//! {"seq":1,"ts":1718000000000,"type":"new_game","generation":1}
//! {"seq":2,"ts":1718000000000,"type":"turn_added","choice":"button3","length":1}
//! {"seq":3,"ts":1718000000800,"type":"playback_step","choice":"button3","turn_number":0}
//! ```

use serde::{Deserialize, Serialize};

use crate::types::GameEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// Monotonic per-journal sequence number, starting at 1.
    pub seq: u64,
    /// Wall-clock milliseconds since the Unix epoch.
    pub ts: u64,
    #[serde(flatten)]
    pub event: JournalEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalEvent {
    NewGame {
        generation: u32,
    },
    TurnAdded {
        choice: String,
        length: usize,
    },
    PlaybackStep {
        choice: String,
        turn_number: usize,
    },
    PlaybackFinished {
        length: usize,
    },
    PlayerMove {
        choice: String,
        index: usize,
    },
    RoundComplete {
        score: u32,
    },
    WrongMove {
        expected: String,
        actual: String,
        score: u32,
    },
}

impl From<&GameEvent> for JournalEvent {
    fn from(event: &GameEvent) -> Self {
        match *event {
            GameEvent::NewGame { generation } => JournalEvent::NewGame { generation },
            GameEvent::TurnAdded { choice, length } => JournalEvent::TurnAdded {
                choice: choice.id().to_string(),
                length,
            },
            GameEvent::PlaybackStep {
                choice,
                turn_number,
            } => JournalEvent::PlaybackStep {
                choice: choice.id().to_string(),
                turn_number,
            },
            GameEvent::PlaybackFinished { length } => JournalEvent::PlaybackFinished { length },
            GameEvent::PlayerMove { choice, index } => JournalEvent::PlayerMove {
                choice: choice.id().to_string(),
                index,
            },
            GameEvent::RoundComplete { score } => JournalEvent::RoundComplete { score },
            GameEvent::WrongMove {
                expected,
                actual,
                score,
            } => JournalEvent::WrongMove {
                expected: expected.id().to_string(),
                actual: actual.id().to_string(),
                score,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Choice;

    #[test]
    fn record_serializes_flat_with_type_tag() {
        let rec = JournalRecord {
            seq: 3,
            ts: 10,
            event: JournalEvent::from(&GameEvent::WrongMove {
                expected: Choice::Button1,
                actual: Choice::Button4,
                score: 2,
            }),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "seq": 3,
                "ts": 10,
                "type": "wrong_move",
                "expected": "button1",
                "actual": "button4",
                "score": 2
            })
        );
    }

    #[test]
    fn choices_are_written_as_ids() {
        let ev = JournalEvent::from(&GameEvent::TurnAdded {
            choice: Choice::Button3,
            length: 5,
        });
        assert_eq!(
            ev,
            JournalEvent::TurnAdded {
                choice: "button3".to_string(),
                length: 5
            }
        );
    }
}
