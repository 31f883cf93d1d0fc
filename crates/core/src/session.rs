//! Session module - the game controller
//!
//! A session owns the board, the falling piece and its ghost, the gravity and
//! key-repeat timers, and the score. Front ends drive it with three calls:
//! [`Session::handle_key_down`], [`Session::handle_key_up`] and
//! [`Session::tick`]. Everything else happens synchronously inside `tick`, in
//! a fixed order: gravity, then held keys in `GameAction::ALL` order, then the
//! ghost refresh.
//!
//! Spawning and locking are transitions, not resting states: a lock commits
//! the piece, clears full rows, scores, and spawns the next piece within the
//! same call. If the new piece does not fit, the session enters
//! [`Phase::GameOver`] and ignores all further input.

use std::time::Duration;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, SessionConfig};
use crate::kick::{rotate_with_kick, KickOutcome};
use crate::piece::Piece;
use crate::repeat::KeyRepeat;
use crate::rng::PieceRandomizer;
use crate::scoring::line_clear_reward;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Direction, GameAction, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A piece is falling and input is accepted
    Falling,
    /// A spawned piece did not fit; terminal
    GameOver,
}

/// Emitted every time a piece locks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub reward: u32,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    active: Piece,
    ghost: Piece,
    randomizer: PieceRandomizer,
    keys: KeyRepeat,
    phase: Phase,
    score: u32,
    lines: u32,
    pieces: u32,
    fall_interval: Duration,
    /// Time left until the next gravity step
    fall_timer: Duration,
    last_event: Option<LockEvent>,
}

impl Session {
    /// Start a session with the first piece already spawned
    pub fn new(config: SessionConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Start a session on the default 10x20 board
    pub fn with_seed(seed: u32) -> Self {
        Self::build(SessionConfig::default(), seed)
    }

    fn build(config: SessionConfig, seed: u32) -> Self {
        let board = Board::new(config.board_width, config.board_height);
        let mut randomizer = PieceRandomizer::new(seed);
        let active = Piece::spawn(randomizer.next_kind(), &board);
        let fall_interval = config.gravity.base_interval;

        let mut session = Self {
            config,
            board,
            active,
            ghost: active.ghost(),
            randomizer,
            keys: KeyRepeat::new(config.repeat),
            phase: Phase::Falling,
            score: 0,
            lines: 0,
            pieces: 0,
            fall_interval,
            fall_timer: fall_interval,
            last_event: None,
        };
        session.begin_piece();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for building scenarios (puzzles, tests).
    ///
    /// The ghost is not refreshed until the next action or tick.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn ghost(&self) -> &Piece {
        &self.ghost
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Number of pieces spawned so far, including the current one
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Replace the falling piece, e.g. to set up a scenario.
    ///
    /// Returns false (and keeps the current piece) if `piece` collides.
    pub fn replace_active(&mut self, piece: Piece) -> bool {
        if self.is_game_over() || piece.is_colliding(&self.board) {
            return false;
        }
        self.active = Piece {
            is_ghost: false,
            ..piece
        };
        self.refresh_ghost();
        true
    }

    pub fn handle_key_down(&mut self, action: GameAction) {
        if self.is_game_over() {
            return;
        }
        self.keys.press(action);
    }

    pub fn handle_key_up(&mut self, action: GameAction) {
        self.keys.release(action);
    }

    /// Advance the simulation by `dt`
    pub fn tick(&mut self, dt: Duration) {
        if self.is_game_over() {
            return;
        }

        match self.fall_timer.checked_sub(dt) {
            Some(left) if !left.is_zero() => self.fall_timer = left,
            _ => {
                let overshoot = dt - self.fall_timer;
                self.fall_timer = self.fall_interval.saturating_sub(overshoot);
                self.apply_gravity();
            }
        }

        for action in self.keys.update(dt) {
            if self.is_game_over() {
                break;
            }
            self.apply_action(action);
        }

        if !self.is_game_over() {
            self.refresh_ghost();
        }
    }

    /// Perform one action immediately. Returns whether it had any effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.is_game_over() {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_piece(Direction::Left),
            GameAction::MoveRight => self.move_piece(Direction::Right),
            GameAction::RotateCw => self.rotate(true).succeeded(),
            GameAction::RotateCcw => self.rotate(false).succeeded(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Shift the falling piece one cell; a blocked move is a no-op
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.active.step(direction);
        if self.active.is_colliding(&self.board) {
            self.active.step(direction.opposite());
            return false;
        }
        self.refresh_ghost();
        true
    }

    /// Turn the falling piece, kicking it free if needed
    pub fn rotate(&mut self, clockwise: bool) -> KickOutcome {
        if self.is_game_over() {
            return KickOutcome::Rejected;
        }
        let outcome = rotate_with_kick(&mut self.active, &self.board, clockwise);
        if outcome.succeeded() {
            self.refresh_ghost();
        }
        outcome
    }

    /// Drop the falling piece to the floor and lock it at once
    pub fn hard_drop(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.active.drop_to_floor(&self.board);
        self.lock_active();
    }

    /// Start over on an empty board. The piece sequence continues.
    pub fn restart(&mut self) {
        self.board.clear();
        self.keys.reset();
        self.phase = Phase::Falling;
        self.score = 0;
        self.lines = 0;
        self.pieces = 0;
        self.fall_interval = self.config.gravity.base_interval;
        self.last_event = None;
        info!(seed = self.seed(), "session restarted");
        self.spawn_piece();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.cells().to_vec(),
            active: PieceSnapshot::from(&self.active),
            ghost: PieceSnapshot::from(&self.ghost),
            score: self.score,
            lines: self.lines,
            fall_interval: self.fall_interval,
            game_over: self.is_game_over(),
        }
    }

    /// Refresh `out` in place, reusing its board allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = PieceSnapshot::from(&self.active);
        out.ghost = PieceSnapshot::from(&self.ghost);
        out.score = self.score;
        out.lines = self.lines;
        out.fall_interval = self.fall_interval;
        out.game_over = self.is_game_over();
    }

    fn apply_gravity(&mut self) {
        self.active.step(Direction::Down);
        if self.active.is_colliding(&self.board) {
            self.active.step(Direction::Up);
            self.lock_active();
        }
    }

    fn lock_active(&mut self) {
        self.active.commit(&mut self.board);

        let rows = self.board.clearable_rows();
        let cleared = rows.len();
        let mut reward = 0;
        if cleared > 0 {
            self.board.clear_rows(&rows);
            reward = line_clear_reward(cleared);
            self.score = self.score.saturating_add(reward);
            self.lines = self.lines.saturating_add(cleared as u32);

            let interval = self.config.gravity.fall_interval(self.score);
            if interval != self.fall_interval {
                debug!(?interval, score = self.score, "fall interval changed");
            }
            self.fall_interval = interval;
        }

        debug!(
            kind = ?self.active.kind,
            lines = cleared,
            reward,
            score = self.score,
            "piece locked"
        );
        self.last_event = Some(LockEvent {
            kind: self.active.kind,
            lines_cleared: cleared as u32,
            reward,
        });

        self.spawn_piece();
    }

    fn spawn_piece(&mut self) {
        let kind = self.randomizer.next_kind();
        self.active = Piece::spawn(kind, &self.board);
        self.begin_piece();
    }

    fn begin_piece(&mut self) {
        self.pieces = self.pieces.wrapping_add(1);
        self.fall_timer = self.fall_interval;

        if self.active.is_colliding(&self.board) {
            self.phase = Phase::GameOver;
            self.ghost = self.active.ghost();
            self.keys.reset();
            info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces,
                "spawn blocked, game over"
            );
            return;
        }

        self.refresh_ghost();
    }

    fn refresh_ghost(&mut self) {
        let mut ghost = self.active.ghost();
        ghost.drop_to_floor(&self.board);
        self.ghost = ghost;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rgb, Vec2i};

    const GRAY: Rgb = Rgb::new(90, 90, 90);

    #[test]
    fn test_new_session() {
        let session = Session::with_seed(12345);

        assert_eq!(session.phase(), Phase::Falling);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.pieces(), 1);
        assert_eq!(session.fall_interval(), Duration::from_secs(1));
        assert_eq!(session.board().filled_count(), 0);
        assert!(!session.active().is_ghost);
        assert!(session.ghost().is_ghost);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SessionConfig::default().with_board_size(2, 2);
        assert!(Session::new(config, 1).is_err());
    }

    #[test]
    fn test_gravity_waits_for_full_interval() {
        let mut session = Session::with_seed(7);
        let start = session.active().position;

        session.tick(Duration::from_millis(999));
        assert_eq!(session.active().position, start);

        session.tick(Duration::from_millis(1));
        assert_eq!(session.active().position, start + Direction::Down.vector());
    }

    #[test]
    fn test_gravity_locks_piece_on_floor() {
        let mut session = Session::with_seed(7);
        session.replace_active(Piece::new(PieceKind::O, Vec2i::new(4, 0)));

        session.tick(Duration::from_secs(1));

        assert_eq!(session.board().filled_count(), 4);
        assert_eq!(session.pieces(), 2);
        let event = session.take_last_event().unwrap();
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!(event.lines_cleared, 0);
        assert!(session.take_last_event().is_none());
    }

    #[test]
    fn test_blocked_move_is_noop() {
        let mut session = Session::with_seed(3);
        session.replace_active(Piece::new(PieceKind::O, Vec2i::new(0, 5)));

        assert!(!session.move_piece(Direction::Left));
        assert_eq!(session.active().position, Vec2i::new(0, 5));
        assert!(session.move_piece(Direction::Right));
        assert_eq!(session.active().position, Vec2i::new(1, 5));
    }

    #[test]
    fn test_ghost_tracks_active_column() {
        let mut session = Session::with_seed(3);
        session.replace_active(Piece::new(PieceKind::O, Vec2i::new(2, 10)));
        assert_eq!(session.ghost().position, Vec2i::new(2, 0));

        session.board_mut().fill(5, 3, GRAY);
        session.move_piece(Direction::Right);
        session.move_piece(Direction::Right);
        session.move_piece(Direction::Right);
        // O now covers columns 5 and 6 and rests on the block at (5, 3).
        assert_eq!(session.ghost().position, Vec2i::new(5, 4));
        assert_eq!(session.board().filled_count(), 1);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut session = Session::with_seed(5);
        session.hard_drop();
        session.hard_drop();
        assert!(session.board().filled_count() > 0);

        session.restart();

        assert_eq!(session.board().filled_count(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.pieces(), 1);
        assert_eq!(session.phase(), Phase::Falling);
    }
}
