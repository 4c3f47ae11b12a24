//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`InputCommand`]s. Mouse clicks are
//! resolved through a caller-supplied hit test, so the pad layout stays in
//! the renderer.

pub mod map;

pub use tui_simon_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, InputCommand};
