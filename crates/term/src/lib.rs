//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget libraries and instead renders into a
//! simple framebuffer that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Implement the core `Display`/`Notifier` traits for a terminal
//! - Share one layout between drawing and mouse hit testing

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod term_display;

pub use tui_simon_core as core;
pub use tui_simon_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use term_display::{Banner, TermDisplay};
