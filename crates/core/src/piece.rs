//! Piece model - shape templates and the rotation transform
//!
//! Each of the seven shape families has a fixed spawn matrix whose nonzero
//! cells carry the family's cell value (1-7). Rotation is a pure matrix
//! transform; it never consults the board. Collision validation is the
//! session's job, and a colliding rotation is rolled back there.

use blockfall_types::{PieceKind, Rgb, BOARD_WIDTH};

/// Largest matrix side length (the I piece uses a 4x4 template).
pub const MAX_MATRIX_DIM: usize = 4;

/// Occupancy matrix of a piece.
///
/// Backed by a fixed 4x4 array with explicit logical dimensions, so a 90°
/// rotation can transpose the dimensions (an RxC matrix becomes CxR)
/// without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    cells: [[u8; MAX_MATRIX_DIM]; MAX_MATRIX_DIM],
    width: u8,
    height: u8,
}

impl ShapeMatrix {
    /// The canonical spawn matrix for a shape family.
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[
                [0, 0, 0, 0],
                [1, 1, 1, 1],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            PieceKind::O => Self::from_rows(&[[2, 2], [2, 2]]),
            PieceKind::T => Self::from_rows(&[[0, 3, 0], [3, 3, 3], [0, 0, 0]]),
            PieceKind::S => Self::from_rows(&[[0, 4, 4], [4, 4, 0], [0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[[5, 5, 0], [0, 5, 5], [0, 0, 0]]),
            PieceKind::J => Self::from_rows(&[[6, 0, 0], [6, 6, 6], [0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[[0, 0, 7], [7, 7, 7], [0, 0, 0]]),
        }
    }

    /// Build a matrix from square row data (used by templates and tests).
    pub fn from_rows<const N: usize>(rows: &[[u8; N]; N]) -> Self {
        let mut cells = [[0u8; MAX_MATRIX_DIM]; MAX_MATRIX_DIM];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..N].copy_from_slice(row);
        }
        Self {
            cells,
            width: N as u8,
            height: N as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell value at matrix coordinates. Out-of-range coordinates read as 0.
    pub fn get(&self, x: u8, y: u8) -> u8 {
        if x < self.width && y < self.height {
            self.cells[y as usize][x as usize]
        } else {
            0
        }
    }

    /// The matrix rotated by 90°, preserving cell values.
    ///
    /// Clockwise maps `(x, y)` to `(h - 1 - y, x)`; counter-clockwise is the
    /// inverse. Output dimensions are the transpose of the input's.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut out = Self {
            cells: [[0u8; MAX_MATRIX_DIM]; MAX_MATRIX_DIM],
            width: self.height,
            height: self.width,
        };
        for y in 0..h {
            for x in 0..w {
                let v = self.cells[y][x];
                if clockwise {
                    out.cells[x][h - 1 - y] = v;
                } else {
                    out.cells[w - 1 - x][y] = v;
                }
            }
        }
        out
    }

    /// Iterate occupied cells as `(x, y, value)` in matrix coordinates.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
        let (w, h) = (self.width as usize, self.height as usize);
        (0..h).flat_map(move |y| {
            (0..w).filter_map(move |x| {
                let v = self.cells[y][x];
                (v != 0).then_some((x as i8, y as i8, v))
            })
        })
    }

    /// Number of occupied cells (always 4 for the canonical templates).
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }
}

/// Player-controlled piece: a shape matrix anchored on the board.
///
/// `x`/`y` place the matrix's top-left cell in board coordinates; `y` may go
/// negative transiently (rotation near the top edge), which the collision
/// rules deliberately permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl Piece {
    /// Create a piece with its spawn matrix at the spawn anchor.
    pub fn new(kind: PieceKind) -> Self {
        let matrix = ShapeMatrix::template(kind);
        Self {
            kind,
            matrix,
            x: spawn_x(matrix.width()),
            y: 0,
            color: kind.color(),
        }
    }

    /// Move the anchor back to the horizontally centered spawn position.
    pub fn respawn(&mut self) {
        self.x = spawn_x(self.matrix.width());
        self.y = 0;
    }

    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Iterate occupied cells as `(x, y, value)` in board coordinates.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
        let (px, py) = (self.x, self.y);
        self.matrix
            .occupied()
            .map(move |(cx, cy, v)| (px + cx, py + cy, v))
    }
}

/// Spawn column for a matrix of the given width (integer division centers it).
pub fn spawn_x(matrix_width: u8) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (matrix_width / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(matrix: &ShapeMatrix, y: u8) -> Vec<u8> {
        (0..matrix.width()).map(|x| matrix.get(x, y)).collect()
    }

    #[test]
    fn templates_match_canonical_matrices() {
        let i = ShapeMatrix::template(PieceKind::I);
        assert_eq!((i.width(), i.height()), (4, 4));
        assert_eq!(row(&i, 0), vec![0, 0, 0, 0]);
        assert_eq!(row(&i, 1), vec![1, 1, 1, 1]);

        let o = ShapeMatrix::template(PieceKind::O);
        assert_eq!((o.width(), o.height()), (2, 2));
        assert_eq!(row(&o, 0), vec![2, 2]);
        assert_eq!(row(&o, 1), vec![2, 2]);

        let t = ShapeMatrix::template(PieceKind::T);
        assert_eq!(row(&t, 0), vec![0, 3, 0]);
        assert_eq!(row(&t, 1), vec![3, 3, 3]);
        assert_eq!(row(&t, 2), vec![0, 0, 0]);

        let s = ShapeMatrix::template(PieceKind::S);
        assert_eq!(row(&s, 0), vec![0, 4, 4]);
        assert_eq!(row(&s, 1), vec![4, 4, 0]);

        let z = ShapeMatrix::template(PieceKind::Z);
        assert_eq!(row(&z, 0), vec![5, 5, 0]);
        assert_eq!(row(&z, 1), vec![0, 5, 5]);

        let j = ShapeMatrix::template(PieceKind::J);
        assert_eq!(row(&j, 0), vec![6, 0, 0]);
        assert_eq!(row(&j, 1), vec![6, 6, 6]);

        let l = ShapeMatrix::template(PieceKind::L);
        assert_eq!(row(&l, 0), vec![0, 0, 7]);
        assert_eq!(row(&l, 1), vec![7, 7, 7]);
    }

    #[test]
    fn templates_hold_the_family_cell_value() {
        for kind in PieceKind::ALL {
            let matrix = ShapeMatrix::template(kind);
            assert_eq!(matrix.occupied_count(), 4);
            for (_, _, v) in matrix.occupied() {
                assert_eq!(v, kind.cell_value());
            }
        }
    }

    #[test]
    fn rotation_transposes_dimensions_and_preserves_count() {
        for kind in PieceKind::ALL {
            let before = ShapeMatrix::template(kind);
            for clockwise in [true, false] {
                let after = before.rotated(clockwise);
                assert_eq!(after.width(), before.height());
                assert_eq!(after.height(), before.width());
                assert_eq!(after.occupied_count(), before.occupied_count());
            }
        }
    }

    #[test]
    fn four_rotations_restore_the_template() {
        for kind in PieceKind::ALL {
            for clockwise in [true, false] {
                let template = ShapeMatrix::template(kind);
                let mut matrix = template;
                for _ in 0..4 {
                    matrix = matrix.rotated(clockwise);
                }
                assert_eq!(matrix, template, "{:?} cw={}", kind, clockwise);
            }
        }
    }

    #[test]
    fn counter_clockwise_inverts_clockwise() {
        for kind in PieceKind::ALL {
            let template = ShapeMatrix::template(kind);
            assert_eq!(template.rotated(true).rotated(false), template);
        }
    }

    #[test]
    fn clockwise_i_becomes_a_column() {
        let rotated = ShapeMatrix::template(PieceKind::I).rotated(true);
        // Row 1 of the spawn matrix becomes column 2.
        let occupied: Vec<_> = rotated.occupied().collect();
        assert_eq!(
            occupied,
            vec![(2, 0, 1), (2, 1, 1), (2, 2, 1), (2, 3, 1)]
        );
    }

    #[test]
    fn spawn_anchor_is_centered() {
        assert_eq!(Piece::new(PieceKind::I).x, 3); // 5 - 2
        assert_eq!(Piece::new(PieceKind::O).x, 4); // 5 - 1
        assert_eq!(Piece::new(PieceKind::T).x, 4); // 5 - 1
        for kind in PieceKind::ALL {
            assert_eq!(Piece::new(kind).y, 0);
        }
    }

    #[test]
    fn board_cells_apply_the_anchor() {
        let mut piece = Piece::new(PieceKind::O);
        piece.x = 4;
        piece.y = 18;
        let cells: Vec<_> = piece.board_cells().collect();
        assert_eq!(
            cells,
            vec![(4, 18, 2), (5, 18, 2), (4, 19, 2), (5, 19, 2)]
        );
    }
}
