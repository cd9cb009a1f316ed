//! Terminal input collaborator: crossterm key events to simulation events.
//!
//! The simulation core never polls devices; this crate translates raw key
//! presses into the discrete [`InputEvent`](blockfall_types::InputEvent)s
//! the session accepts, once per frame.

pub mod map;

pub use map::{map_key_event, should_quit};
