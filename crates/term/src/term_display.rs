//! Terminal-side implementations of the core presentation traits.
//!
//! These only hold state; [`GameView`](crate::GameView) reads them when it
//! renders a frame, and the game loop drains the pending bell.

use crate::core::{Display, Notifier};
use crate::types::{Choice, BANNER_MS};

/// Display state for the terminal frontend.
#[derive(Debug, Clone)]
pub struct TermDisplay {
    score_text: String,
    lit: [bool; 4],
    listeners: [bool; 4],
    sound: bool,
    bell_pending: bool,
}

impl TermDisplay {
    pub fn new(sound: bool) -> Self {
        Self {
            score_text: String::from("0"),
            lit: [false; 4],
            listeners: [false; 4],
            sound,
            bell_pending: false,
        }
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn is_lit(&self, choice: Choice) -> bool {
        self.lit[choice.index()]
    }

    /// Returns true once per requested cue.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}

impl Default for TermDisplay {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Display for TermDisplay {
    fn set_score_text(&mut self, text: &str) {
        self.score_text.clear();
        self.score_text.push_str(text);
    }

    fn highlight(&mut self, choice: Choice) {
        self.lit[choice.index()] = true;
    }

    fn unhighlight(&mut self, choice: Choice) {
        self.lit[choice.index()] = false;
    }

    fn mark_listener_attached(&mut self, choice: Choice) {
        self.listeners[choice.index()] = true;
    }

    fn is_listener_attached(&self, choice: Choice) -> bool {
        self.listeners[choice.index()]
    }

    fn play_cue(&mut self, _choice: Choice) {
        if self.sound {
            self.bell_pending = true;
        }
    }
}

/// Transient message overlay, the terminal stand-in for an alert box.
#[derive(Debug, Clone)]
pub struct Banner {
    message: Option<String>,
    remaining_ms: u32,
    duration_ms: u32,
}

impl Banner {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            message: None,
            remaining_ms: 0,
            duration_ms,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.message.is_none() {
            return;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.message = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
        self.remaining_ms = 0;
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(BANNER_MS)
    }
}

impl Notifier for Banner {
    fn notify(&mut self, message: &str) {
        tracing::debug!(message, "banner shown");
        self.message = Some(message.to_string());
        self.remaining_ms = self.duration_ms;
    }
}
