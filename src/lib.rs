//! TUI Simon (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_simon::{core,input,journal,term,types}`
//! and carries the environment configuration used by the binary.

pub mod config;

pub use tui_simon_core as core;
pub use tui_simon_input as input;
pub use tui_simon_journal as journal;
pub use tui_simon_term as term;
pub use tui_simon_types as types;
