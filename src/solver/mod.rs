//! Solvability scanner: does any legal match exist right now?
//!
//! Used at level start (deal until solvable), after every match (reshuffle
//! when deadlocked), and to answer hint requests.

mod scanner;

pub use scanner::{find_match, is_solvable, MatchHint, Scanner};
