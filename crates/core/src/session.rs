//! Session module - the complete simulation state machine
//!
//! Ties together board, pieces, RNG, and scoring. The session owns all
//! mutable state, accepts discrete input events, and advances once per
//! frame with the caller-supplied elapsed time; it never reads a clock or
//! draws anything itself.
//!
//! Lifecycle: `Spawning -> Falling <-> Resting(lock timer) -> Locking ->
//! (Spawning | GameOver)`. `GameOver` is terminal; only `reset` leaves it.

use arrayvec::ArrayVec;

use blockfall_types::{GameEvent, InputEvent, PieceKind, LOCK_DELAY_MS};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{gravity_interval_ms, level_for_score, line_clear_score};
use crate::snapshot::GameSnapshot;

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current: Piece,
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    high_score: u32,
    /// Elapsed time since the last gravity descent.
    gravity_timer_ms: u32,
    /// Grace-window accumulator while the piece rests on an obstruction.
    lock_timer_ms: u32,
    game_over: bool,
    events: ArrayVec<GameEvent, 8>,
}

impl GameSession {
    /// Create a new session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let current = Piece::new(generator.draw());
        let next = Piece::new(generator.draw());
        Self {
            board: Board::new(),
            current,
            next,
            generator,
            score: 0,
            high_score: 0,
            gravity_timer_ms: 0,
            lock_timer_ms: 0,
            game_over: false,
            events: ArrayVec::new(),
        }
    }

    /// Create a session with a fixed first pair of pieces.
    ///
    /// Later draws still come from the seeded generator. Useful for
    /// deterministic setups in tests and demos.
    pub fn with_first_pieces(seed: u32, first: PieceKind, second: PieceKind) -> Self {
        let mut session = Self::new(seed);
        session.current = Piece::new(first);
        session.next = Piece::new(second);
        session
    }

    /// Reinitialize everything, optionally carrying a previous high score.
    pub fn reset(&mut self, high_score: Option<u32>) {
        // Continue the RNG from its current state so the replayed session
        // gets a fresh piece sequence.
        let seed = self.generator.seed();
        *self = Self::new(seed);
        if let Some(hs) = high_score {
            self.high_score = hs;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for tests and tooling that stage grid states.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Level is a pure function of score, recomputed on demand.
    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    /// Milliseconds between gravity descents at the current level.
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level())
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// True when the current piece cannot descend further.
    pub fn is_resting(&self) -> bool {
        self.board.collides(&self.current, 0, 1)
    }

    /// Drain queued notifications (rotation, line clears, game over).
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, 8> {
        std::mem::take(&mut self.events)
    }

    /// Dispatch one input event. Returns true when it changed the session.
    ///
    /// Rejected moves and rotations are normal outcomes, not errors: the
    /// piece stays where it was and the result is `false`. Directional
    /// input on a resting piece still refreshes the lock-delay window,
    /// accepted or not.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let moved = match event {
            InputEvent::MoveLeft => self.try_move(-1, 0),
            InputEvent::MoveRight => self.try_move(1, 0),
            InputEvent::SoftDrop => self.try_move(0, 1),
            InputEvent::RotateCw => self.try_rotate(true),
            InputEvent::Restart => {
                self.reset(Some(self.high_score));
                return true;
            }
            InputEvent::Quit => {
                self.end_game();
                return true;
            }
        };
        if !self.game_over && self.is_resting() {
            self.lock_timer_ms = 0;
        }
        moved
    }

    /// Try to translate the current piece. On success the lock-delay timer
    /// resets, giving a resting piece a fresh grace window.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        if self.board.collides(&self.current, dx, dy) {
            return false;
        }
        self.current.translate(dx, dy);
        self.lock_timer_ms = 0;
        true
    }

    /// Try to rotate the current piece clockwise or counter-clockwise.
    ///
    /// The rotated matrix is validated against the board before committing;
    /// a colliding rotation is discarded without touching the piece (no
    /// wall-kick search).
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        let mut candidate = self.current;
        candidate.matrix = candidate.matrix.rotated(clockwise);
        if self.board.collides(&candidate, 0, 0) {
            return false;
        }
        self.current = candidate;
        self.lock_timer_ms = 0;
        let _ = self.events.try_push(GameEvent::Rotated);
        true
    }

    /// Advance gravity and the lock-delay timer by `elapsed_ms`.
    ///
    /// Returns true when the piece descended or locked this frame.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        if self.is_resting() {
            self.lock_timer_ms += elapsed_ms;
            if self.lock_timer_ms > LOCK_DELAY_MS {
                self.lock_current();
                return true;
            }
            return false;
        }

        self.gravity_timer_ms += elapsed_ms;
        let interval = self.gravity_interval_ms();
        if self.gravity_timer_ms >= interval {
            // Keep the remainder so irregular frame times stay on pace.
            self.gravity_timer_ms -= interval;
            // Descending resets the lock-delay timer via try_move.
            return self.try_move(0, 1);
        }

        false
    }

    /// Merge the current piece, clear lines, score, and spawn the next piece.
    fn lock_current(&mut self) {
        self.board.merge(&self.current);

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.score += line_clear_score(cleared);
            let _ = self.events.try_push(GameEvent::LinesCleared(cleared));
        }

        self.gravity_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.spawn_next();
    }

    /// Promote the next piece to current and check the spawn placement.
    fn spawn_next(&mut self) {
        self.current = self.next;
        self.current.respawn();
        self.next = Piece::new(self.generator.draw());

        if self.board.collides(&self.current, 0, 0) {
            self.end_game();
            let _ = self.events.try_push(GameEvent::GameOver);
        }
    }

    /// One-way transition into the terminal state.
    fn end_game(&mut self) {
        self.game_over = true;
        self.high_score = self.high_score.max(self.score);
    }

    /// Export the render-facing view of the session.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::empty(self.current, self.next);
        snap.score = self.score;
        snap.high_score = self.high_score;
        snap.level = self.level();
        snap.game_over = self.game_over;
        self.board.write_u8_grid(&mut snap.board);
        snap
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
