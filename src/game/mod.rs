//! Game layer: selection, matching and the session around them.
//!
//! - `controller`: the selection state machine, hints and shuffles over a
//!   borrowed board
//! - `session`: owns the board, clock, score and budgets for one game
//! - `snapshot`, `event`, `stats`: what the session reports outward

mod controller;
mod event;
mod session;
mod snapshot;
mod stats;

pub use controller::{Controller, SelectOutcome, SelectionState, ShuffleReport};
pub use event::SessionEvent;
pub use session::Session;
pub use snapshot::{GameStatus, Highlight, HighlightKind, Snapshot};
pub use stats::SessionStats;
