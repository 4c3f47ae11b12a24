//! Game event journal - JSON lines written off the game loop
//!
//! Every [`GameEvent`](tui_simon_types::GameEvent) the controller emits can
//! be appended to a file, one JSON object per line, for replaying or
//! inspecting a session afterwards.
//!
//! # Environment Variables
//!
//! - `SIMON_LOG_PATH`: file to append to; the journal is off when unset
//!
//! # Implementation
//!
//! - A dedicated **tokio** runtime owns the writer task
//! - The game loop sends records over an unbounded channel and never blocks
//! - [`Journal::finish`] drains the channel before the process exits
//!
//! Inspect a running session with:
//!
//! ```bash
//! tail -f "$SIMON_LOG_PATH" | jq -c .
//! ```

pub mod record;
pub mod writer;

pub use tui_simon_types as types;

pub use record::{JournalEvent, JournalRecord};
pub use writer::{write_records, Journal};
