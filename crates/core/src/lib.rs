//! Simulation core - pure, deterministic, and testable
//!
//! This crate owns the falling-block rules: the board grid, piece shapes and
//! rotation, collision, lock-delay, line clears, and score/level pacing. It
//! has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed replays an identical game
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: runs in any environment (terminal, headless)
//! - **Fast**: zero-allocation hot paths for the per-frame update
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision detection and line compaction
//! - [`piece`]: the seven shape templates and the 90° rotation transform
//! - [`session`]: session state machine (input, gravity, lock-delay, spawn)
//! - [`scoring`]: pure score, level, and gravity-interval derivations
//! - [`rng`]: seeded LCG with uniform piece choice
//! - [`snapshot`]: copyable render-facing view of a session
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is an independent uniform draw
//! - **No wall kicks**: a rotation that would collide is simply refused
//! - **Lock delay**: a resting piece merges 500ms after it last descended,
//!   moved, or rotated
//! - **Scoring**: `k * k * 100` for clearing `k` rows at once
//! - **Pacing**: gravity descends `5 + level` times per second, with
//!   `level = min(score / 1000 + 1, 15)`
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::InputEvent;
//!
//! let mut session = GameSession::new(12345);
//! session.handle_event(InputEvent::MoveLeft);
//! session.handle_event(InputEvent::RotateCw);
//!
//! // Advance one 16ms frame.
//! session.tick(16);
//! assert!(!session.game_over());
//! ```
//!
//! # Timing
//!
//! The session never reads a clock. Call [`GameSession::tick`] once per
//! frame with the elapsed milliseconds; input events are delivered through
//! [`GameSession::handle_event`] before the tick.

pub mod board;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::{spawn_x, Piece, ShapeMatrix};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{gravity_interval_ms, level_for_score, line_clear_score};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
