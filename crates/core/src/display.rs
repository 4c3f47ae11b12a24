//! Presentation seams.
//!
//! The controller never draws anything itself. It talks to a [`Display`]
//! (score text, lit targets, input listeners) and a [`Notifier`] (the
//! "Wrong Move!" message). Frontends implement both; the headless versions
//! below record every call so the state machine can be tested without a
//! rendering surface.

use crate::types::{Choice, CHOICES};

/// Rendering surface driven by the controller.
pub trait Display {
    /// Replace the visible score text.
    fn set_score_text(&mut self, text: &str);

    /// Apply the "active" treatment to a target.
    fn highlight(&mut self, choice: Choice);

    /// Remove the "active" treatment from a target.
    fn unhighlight(&mut self, choice: Choice);

    /// Record that the target's input listener is registered.
    fn mark_listener_attached(&mut self, choice: Choice);

    fn is_listener_attached(&self, choice: Choice) -> bool;

    /// Audible cue that accompanies a highlight. Silent by default.
    fn play_cue(&mut self, _choice: Choice) {}
}

/// User-facing notification channel.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Display that only records state.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDisplay {
    score_text: String,
    lit: [bool; 4],
    listeners: [bool; 4],
    /// Number of times each listener was registered.
    attach_count: [u32; 4],
    /// Every highlight, in order.
    highlights: Vec<Choice>,
    cues: usize,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn is_lit(&self, choice: Choice) -> bool {
        self.lit[choice.index()]
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&l| l).count()
    }

    pub fn attach_count(&self, choice: Choice) -> u32 {
        self.attach_count[choice.index()]
    }

    pub fn highlights(&self) -> &[Choice] {
        &self.highlights
    }

    pub fn cues(&self) -> usize {
        self.cues
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    /// True when every target reports an attached listener.
    pub fn all_listeners_attached(&self) -> bool {
        CHOICES.iter().all(|c| self.is_listener_attached(*c))
    }
}

impl Display for HeadlessDisplay {
    fn set_score_text(&mut self, text: &str) {
        self.score_text.clear();
        self.score_text.push_str(text);
    }

    fn highlight(&mut self, choice: Choice) {
        self.lit[choice.index()] = true;
        self.highlights.push(choice);
    }

    fn unhighlight(&mut self, choice: Choice) {
        self.lit[choice.index()] = false;
    }

    fn mark_listener_attached(&mut self, choice: Choice) {
        self.listeners[choice.index()] = true;
        self.attach_count[choice.index()] += 1;
    }

    fn is_listener_attached(&self, choice: Choice) -> bool {
        self.listeners[choice.index()]
    }

    fn play_cue(&mut self, _choice: Choice) {
        self.cues += 1;
    }
}

/// Notifier that keeps every message.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn count(&self, message: &str) -> usize {
        self.messages.iter().filter(|m| m.as_str() == message).count()
    }
}

impl Notifier for MessageLog {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
