//! Terminal presentation collaborator.
//!
//! The simulation core issues no draw calls; this crate reads a
//! [`GameSnapshot`](blockfall_core::GameSnapshot) each frame, paints it into
//! a styled framebuffer, and flushes the diff to the terminal. Audio cues
//! are mapped to the terminal bell by the frame loop.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
