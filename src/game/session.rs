//! One game from deal to win or timeout.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --start--> Playing --board cleared--> Won
//!                 Playing --clock at zero--> TimedOut
//! any  --start--> Playing (fresh board, budgets and score)
//! ```
//!
//! ## Driving a session
//!
//! The presentation layer owns the frame loop. It calls [`Session::tick`]
//! once per second of game time, forwards clicks to
//! [`Session::select_cell`], and reads back [`Session::snapshot`],
//! [`Session::highlight`] and [`Session::board`] to draw. Operations that
//! are not allowed in the current state are no-ops, never errors.
//!
//! ## Solvability
//!
//! The board always has a legal match while `Playing`:
//! - At start, the deal is reshuffled, then re-dealt, then force-paired
//! - After a match that leaves a deadlock, a free shuffle runs
//! - A paid shuffle retries until solvable

use log::{debug, info};

use super::controller::{Controller, SelectOutcome, ShuffleReport};
use super::event::SessionEvent;
use super::snapshot::{GameStatus, Highlight, HighlightKind, Snapshot};
use super::stats::SessionStats;
use crate::board::Board;
use crate::core::{Cell, ConfigError, GameConfig, TileRng};
use crate::path::PathFinder;
use crate::solver::MatchHint;

/// A single game session.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    controller: Controller,
    board: Board,
    /// Layout to use on the next start instead of dealing.
    prepared: Option<Board>,
    deal_rng: TileRng,
    shuffle_rng: TileRng,
    status: GameStatus,
    score: u64,
    remaining_time: u32,
    elapsed: u32,
    hint_budget: u32,
    shuffle_budget: u32,
    highlight: Option<Highlight>,
    outbox: Vec<Snapshot>,
    events: Vec<SessionEvent>,
    stats: SessionStats,
}

impl Session {
    /// Create an idle session. The board stays empty until [`start`](Self::start).
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::from_types(config.rows, config.cols, &vec![0; config.cell_count()]);
        Ok(Self::build(config, board, None))
    }

    /// Create an idle session that plays `board` on its first start.
    ///
    /// # Panics
    ///
    /// Panics if the board's dimensions differ from the config's.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        assert!(
            board.rows() == config.rows && board.cols() == config.cols,
            "Board dimensions must match the config"
        );
        Ok(Self::build(config, board.clone(), Some(board)))
    }

    fn build(config: GameConfig, board: Board, prepared: Option<Board>) -> Self {
        let root = TileRng::new(config.seed);
        Self {
            controller: Controller::new(PathFinder::new(config.max_turns)),
            deal_rng: root.for_context("deal"),
            shuffle_rng: root.for_context("shuffle"),
            remaining_time: config.time_limit,
            hint_budget: config.hint_budget,
            shuffle_budget: config.shuffle_budget,
            board,
            prepared,
            status: GameStatus::Idle,
            score: 0,
            elapsed: 0,
            highlight: None,
            outbox: Vec::new(),
            events: Vec::new(),
            stats: SessionStats::new(),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// Ticks played since the last start.
    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    #[must_use]
    pub fn hint_budget(&self) -> u32 {
        self.hint_budget
    }

    #[must_use]
    pub fn shuffle_budget(&self) -> u32 {
        self.shuffle_budget
    }

    /// Currently selected cell.
    #[must_use]
    pub fn selection(&self) -> Option<Cell> {
        self.controller.selection()
    }

    /// Path currently highlighted, if it has not expired.
    #[must_use]
    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    /// Everything that happened since the last start, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Whether a legal match exists on the current board.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.controller.is_solvable(&self.board)
    }

    /// Current HUD state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            pairs_remaining: self.board.pairs_remaining(),
            remaining_time: self.remaining_time,
            hint_budget: self.hint_budget,
            shuffle_budget: self.shuffle_budget,
            status: self.status,
        }
    }

    /// Snapshots published since the last drain, oldest first.
    pub fn drain_snapshots(&mut self) -> Vec<Snapshot> {
        std::mem::take(&mut self.outbox)
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.outbox.push(snapshot);
    }

    // === Lifecycle ===

    /// Begin a new game, discarding any game in progress.
    pub fn start(&mut self) {
        self.score = 0;
        self.remaining_time = self.config.time_limit;
        self.elapsed = 0;
        self.hint_budget = self.config.hint_budget;
        self.shuffle_budget = self.config.shuffle_budget;
        self.highlight = None;
        self.events.clear();
        self.stats.reset();

        match self.prepared.take() {
            Some(board) => {
                self.board = board;
                self.controller.clear_selection(&mut self.board);
                if self.board.visible_count() >= 2 && !self.is_solvable() {
                    self.repair_start_board(false);
                }
            }
            None => {
                self.board = self.deal();
                self.controller.clear_selection(&mut self.board);
                if !self.is_solvable() {
                    self.repair_start_board(true);
                }
            }
        }

        self.status = GameStatus::Playing;
        let pairs = self.board.pairs_remaining();
        self.events.push(SessionEvent::Started { pairs });
        info!(
            "game started: {}x{} board, {} pairs, seed {}",
            self.config.rows, self.config.cols, pairs, self.config.seed
        );
        self.publish();

        if self.board.is_cleared() {
            self.win();
        }
    }

    fn deal(&mut self) -> Board {
        Board::new(
            self.config.rows,
            self.config.cols,
            self.config.tile_types,
            &mut self.deal_rng,
        )
    }

    /// Reshuffle, then re-deal, then force a pair until a match exists.
    fn repair_start_board(&mut self, allow_regenerate: bool) {
        let max_attempts = self.config.max_reshuffle_attempts;
        let mut regenerations = 0;
        loop {
            if let Some(attempts) =
                self.controller
                    .reshuffle(&mut self.board, &mut self.shuffle_rng, max_attempts)
            {
                self.stats.shuffle_attempts += attempts;
                debug!("start board solvable after {} shuffles", attempts);
                return;
            }
            self.stats.shuffle_attempts += max_attempts;

            if !allow_regenerate || regenerations >= self.config.max_regenerations {
                break;
            }
            regenerations += 1;
            self.stats.regenerations += 1;
            self.events.push(SessionEvent::Regenerated);
            debug!("re-dealing board ({} of {})", regenerations, self.config.max_regenerations);
            self.board = self.deal();
            if self.is_solvable() {
                return;
            }
        }

        if self.controller.force_pair(&mut self.board) {
            self.stats.forced_pairings += 1;
        }
    }

    /// Advance the clock by one tick.
    ///
    /// Does nothing unless `Playing`. Expired highlights are dropped, and
    /// running out of time drops any highlight.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.remaining_time = self.remaining_time.saturating_sub(1);
        self.elapsed += 1;
        if self
            .highlight
            .as_ref()
            .is_some_and(|h| self.elapsed >= h.expires_at)
        {
            self.highlight = None;
        }

        if self.remaining_time == 0 {
            self.status = GameStatus::TimedOut;
            self.highlight = None;
            self.controller.clear_selection(&mut self.board);
            self.events.push(SessionEvent::TimedOut { score: self.score });
            info!(
                "time up: score {}, {} pairs left",
                self.score,
                self.board.pairs_remaining()
            );
        }
        self.publish();
    }

    fn win(&mut self) {
        self.status = GameStatus::Won;
        self.highlight = None;
        self.events.push(SessionEvent::Won { score: self.score });
        info!(
            "board cleared: score {} with {} ticks left",
            self.score, self.remaining_time
        );
        self.publish();
    }

    // === Player actions ===

    /// Click the cell at `(row, col)` on the bordered lattice.
    ///
    /// Returns [`SelectOutcome::Ignored`] unless `Playing`.
    pub fn select_cell(&mut self, row: usize, col: usize) -> SelectOutcome {
        if self.status != GameStatus::Playing {
            return SelectOutcome::Ignored;
        }

        let outcome = self.controller.select(&mut self.board, Cell::new(row, col));
        if outcome == SelectOutcome::Ignored {
            return outcome;
        }
        match &outcome {
            SelectOutcome::Matched(hint) => self.on_match(hint),
            SelectOutcome::MatchFailed { previous, current } => {
                self.stats.failed_matches += 1;
                self.events.push(SessionEvent::MatchFailed {
                    previous: *previous,
                    current: *current,
                });
                debug!("no path from {} to {}", previous, current);
            }
            SelectOutcome::Ignored
            | SelectOutcome::Selected(_)
            | SelectOutcome::Deselected(_)
            | SelectOutcome::Replaced { .. } => {}
        }
        self.publish();

        if self.status == GameStatus::Playing && self.board.is_cleared() {
            self.win();
        }
        outcome
    }

    fn on_match(&mut self, hint: &MatchHint) {
        let points = u64::from(self.config.base_score)
            + u64::from(self.remaining_time / self.config.time_bonus_divisor);
        self.score += points;
        self.stats.matches += 1;
        self.events.push(SessionEvent::Matched {
            first: hint.first,
            second: hint.second,
            tile_type: hint.tile_type,
            points,
        });
        self.highlight = Some(Highlight {
            kind: HighlightKind::Match,
            path: hint.path.clone(),
            expires_at: self.elapsed.saturating_add(self.config.highlight_ticks),
        });
        debug!(
            "matched {} at {} and {} for {} points",
            hint.tile_type, hint.first, hint.second, points
        );

        if !self.board.is_cleared() && !self.is_solvable() {
            let report = self.run_shuffle();
            self.stats.automatic_shuffles += 1;
            self.events.push(SessionEvent::Shuffled {
                automatic: true,
                forced: report.forced,
            });
            info!("board deadlocked after match; shuffled for free");
        }
    }

    fn run_shuffle(&mut self) -> ShuffleReport {
        let report = self.controller.shuffle_until_solvable(
            &mut self.board,
            &mut self.shuffle_rng,
            self.config.max_reshuffle_attempts,
        );
        self.stats.shuffle_attempts += report.attempts;
        if report.forced {
            self.stats.forced_pairings += 1;
        }
        report
    }

    /// Spend a hint to find a legal match.
    ///
    /// Refused unless `Playing` with hints left. A hint is spent even when
    /// no match is found. The board is never modified.
    pub fn use_hint(&mut self) -> Option<MatchHint> {
        if self.status != GameStatus::Playing || self.hint_budget == 0 {
            return None;
        }

        self.hint_budget -= 1;
        self.stats.hints_used += 1;
        let hint = self.controller.hint(&self.board);
        self.events.push(SessionEvent::HintUsed {
            found: hint.is_some(),
        });
        match &hint {
            Some(hint) => debug!(
                "hint: {} at {} and {} ({} hints left)",
                hint.tile_type, hint.first, hint.second, self.hint_budget
            ),
            None => debug!("hint found no legal match"),
        }
        if let Some(hint) = &hint {
            self.highlight = Some(Highlight {
                kind: HighlightKind::Hint,
                path: hint.path.clone(),
                expires_at: self.elapsed.saturating_add(self.config.highlight_ticks),
            });
        }
        self.publish();
        hint
    }

    /// Spend a shuffle to reassign tile types.
    ///
    /// Refused unless `Playing` with shuffles left. Positions and per-type
    /// counts are kept, the selection and any highlight are dropped, and the
    /// result always has a legal match.
    pub fn shuffle(&mut self) -> bool {
        if self.status != GameStatus::Playing || self.shuffle_budget == 0 {
            return false;
        }

        self.shuffle_budget -= 1;
        self.stats.paid_shuffles += 1;
        self.highlight = None;
        let report = self.run_shuffle();
        self.events.push(SessionEvent::Shuffled {
            automatic: false,
            forced: report.forced,
        });
        debug!(
            "shuffled in {} attempts ({} left)",
            report.attempts, self.shuffle_budget
        );
        self.publish();
        true
    }
}
