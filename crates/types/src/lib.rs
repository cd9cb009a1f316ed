//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Empty board cell value. Values 1-7 identify the shape family that
/// occupies the cell.
pub const EMPTY_CELL: u8 = 0;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const LOCK_DELAY_MS: u32 = 500;

/// Gravity pacing: at level `n` the piece descends `5 + n` times per second.
pub const BASE_GRAVITY_STEPS_PER_SEC: u32 = 5;

/// Score / level progression
pub const LINE_SCORE_UNIT: u32 = 100;
pub const LEVEL_SCORE_STEP: u32 = 1000;
pub const MAX_LEVEL: u32 = 15;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in cell-value order (`cell_value` of `ALL[i]` is `i + 1`).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// The nonzero cell value this family writes into the board.
    pub fn cell_value(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`cell_value`](Self::cell_value). `0` (empty) and
    /// out-of-range values map to `None`.
    pub fn from_cell_value(v: u8) -> Option<Self> {
        match v {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Fixed display color for the shape family.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 255, 255),
            PieceKind::O => Rgb::new(255, 255, 0),
            PieceKind::T => Rgb::new(128, 0, 128),
            PieceKind::S => Rgb::new(0, 255, 0),
            PieceKind::Z => Rgb::new(255, 0, 0),
            PieceKind::J => Rgb::new(0, 0, 255),
            PieceKind::L => Rgb::new(255, 165, 0),
        }
    }
}

/// Display color for an already-locked board cell value.
pub fn color_for_cell(v: u8) -> Option<Rgb> {
    PieceKind::from_cell_value(v).map(|kind| kind.color())
}

/// Discrete input events delivered to the session once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    Restart,
    Quit,
}

/// Notifications emitted by the simulation for an optional sound layer.
///
/// The session queues these on the corresponding transition; a frame loop
/// may drain and forward them, or ignore them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Rotated,
    LinesCleared(u32),
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_values_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_cell_value(kind.cell_value()), Some(kind));
        }
        assert_eq!(PieceKind::from_cell_value(EMPTY_CELL), None);
        assert_eq!(PieceKind::from_cell_value(8), None);
    }

    #[test]
    fn all_order_matches_cell_values() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.cell_value() as usize, i + 1);
        }
    }

    #[test]
    fn empty_cell_has_no_color() {
        assert_eq!(color_for_cell(EMPTY_CELL), None);
        assert_eq!(color_for_cell(1), Some(Rgb::new(0, 255, 255)));
        assert_eq!(color_for_cell(7), Some(Rgb::new(255, 165, 0)));
    }

    #[test]
    fn family_colors_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(a.color(), b.color(), "{:?} vs {:?}", a, b);
                }
            }
        }
    }
}
