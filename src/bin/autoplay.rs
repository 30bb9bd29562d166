//! Plays one seeded game by always taking the first legal match.
//!
//! Usage: `autoplay [SEED]`. Set `RUST_LOG=debug` to follow every move.

use connect_tiles::{find_match, GameConfig, GameStatus, SelectOutcome, Session};
use log::{error, info};

fn main() {
    // Initialize logger from environment variable.
    env_logger::init();

    let seed = match std::env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        None => GameConfig::default().seed,
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            error!("invalid seed: {}", err);
            std::process::exit(2);
        }
    };

    let config = GameConfig::default().with_seed(seed);
    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            error!("invalid configuration: {}", err);
            std::process::exit(2);
        }
    };
    session.start();

    while session.status() == GameStatus::Playing {
        // Read the move straight from the scanner so hints stay unspent.
        let Some(hint) = find_match(session.board()) else {
            break;
        };

        session.select_cell(hint.first.row, hint.first.col);
        let outcome = session.select_cell(hint.second.row, hint.second.col);
        if !matches!(outcome, SelectOutcome::Matched(_)) {
            error!("expected a match at {} and {}, got {:?}", hint.first, hint.second, outcome);
            break;
        }
        session.tick();
    }

    let stats = session.stats();
    info!(
        "{} matches, {} shuffles, {} forced pairings",
        stats.matches,
        stats.total_shuffles(),
        stats.forced_pairings
    );

    let snapshot = session.snapshot();
    println!("{}", session.board());
    println!(
        "status: {:?}  score: {}  pairs left: {}  time left: {}",
        snapshot.status, snapshot.score, snapshot.pairs_remaining, snapshot.remaining_time
    );
}
