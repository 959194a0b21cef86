//! Pieces module - polyomino shapes, rotation and collision
//!
//! A [`Shape`] is one orientation of a piece: a small rectangular matrix of
//! occupied/empty cells, stored as one bitmask per row (bit `x` set means
//! column `x` is occupied). A [`Piece`] places a shape on the grid with its
//! top-left corner at `(x, y)`.
//!
//! Rotation is a plain matrix turn with no wall kicks: if the turned piece
//! does not fit where it is, the rotation is refused.

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::{Color, PieceKind};

/// Largest shape side, in cells
pub const MAX_SHAPE_SIDE: usize = 4;

/// One orientation of a polyomino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [u8; MAX_SHAPE_SIDE],
}

impl Shape {
    const fn from_masks(width: u8, height: u8, rows: [u8; MAX_SHAPE_SIDE]) -> Self {
        Self {
            width,
            height,
            rows,
        }
    }

    /// Build a shape from rows of occupied flags.
    ///
    /// The rows must be non-empty, all the same length, at most
    /// 4x4, and contain at least one occupied cell.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let height = rows.len();
        if height == 0 {
            return Err(ConfigError::MalformedShape("no rows".to_string()));
        }
        let width = rows[0].as_ref().len();
        if width == 0 {
            return Err(ConfigError::MalformedShape("empty row".to_string()));
        }
        if width > MAX_SHAPE_SIDE || height > MAX_SHAPE_SIDE {
            return Err(ConfigError::MalformedShape(format!(
                "{width}x{height} exceeds {MAX_SHAPE_SIDE}x{MAX_SHAPE_SIDE}"
            )));
        }

        let mut masks = [0u8; MAX_SHAPE_SIDE];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ConfigError::MalformedShape(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (x, &filled) in row.iter().enumerate() {
                if filled {
                    masks[y] |= 1 << x;
                }
            }
        }

        if masks.iter().all(|&m| m == 0) {
            return Err(ConfigError::MalformedShape("no occupied cells".to_string()));
        }

        Ok(Self::from_masks(width as u8, height as u8, masks))
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.rows[y] & (1 << x) != 0
    }

    /// Offsets of occupied cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height()).flat_map(move |y| {
            (0..self.width())
                .filter(move |&x| self.is_filled(x, y))
                .map(move |x| (x as i32, y as i32))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|m| m.count_ones() as usize).sum()
    }

    /// Quarter turn counter-clockwise: `new[i][j] = old[j][w - 1 - i]`.
    ///
    /// Width and height swap, so a 4x1 bar becomes 1x4.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width(), self.height());
        let mut rows = [0u8; MAX_SHAPE_SIDE];
        for (i, row) in rows.iter_mut().enumerate().take(w) {
            for j in 0..h {
                if self.is_filled(w - 1 - i, j) {
                    *row |= 1 << j;
                }
            }
        }
        Self::from_masks(h as u8, w as u8, rows)
    }

    /// Rows as strings of `#` and `.`, for tests and logs
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| if self.is_filled(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// The canonical spawn orientation of each kind
pub const fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_masks(4, 1, [0b1111, 0, 0, 0]),
        PieceKind::T => Shape::from_masks(3, 2, [0b111, 0b010, 0, 0]),
        PieceKind::L => Shape::from_masks(3, 2, [0b111, 0b001, 0, 0]),
        PieceKind::J => Shape::from_masks(3, 2, [0b111, 0b100, 0, 0]),
        PieceKind::O => Shape::from_masks(2, 2, [0b11, 0b11, 0, 0]),
        PieceKind::S => Shape::from_masks(3, 2, [0b011, 0b110, 0, 0]),
        PieceKind::Z => Shape::from_masks(3, 2, [0b110, 0b011, 0, 0]),
    }
}

/// A piece on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// A new piece of `kind` at the top row, horizontally centered on a
    /// grid `grid_width` cells wide
    pub fn spawn(kind: PieceKind, grid_width: usize) -> Self {
        let shape = canonical_shape(kind);
        Self {
            kind,
            shape,
            color: kind.color(),
            x: (grid_width / 2) as i32 - (shape.width() / 2) as i32,
            y: 0,
        }
    }

    /// Absolute grid coordinates of occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same anchor, shape turned a quarter
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }
}

/// Whether any occupied cell of `piece` is off the sides, below the floor, or
/// on a locked block. Cells above the top row only collide with the walls.
pub fn collides(piece: &Piece, grid: &Grid) -> bool {
    piece.cells().any(|(x, y)| grid.is_occupied(x, y))
}

/// The piece turned in place, or the piece unchanged if the turn collides
pub fn rotate(piece: &Piece, grid: &Grid) -> Piece {
    let candidate = piece.rotated();
    if collides(&candidate, grid) {
        *piece
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(canonical_shape(kind).cell_count(), 4, "{kind}");
        }
    }

    #[test]
    fn test_canonical_shape_layouts() {
        assert_eq!(canonical_shape(PieceKind::T).to_strings(), ["###", ".#."]);
        assert_eq!(canonical_shape(PieceKind::L).to_strings(), ["###", "#.."]);
        assert_eq!(canonical_shape(PieceKind::J).to_strings(), ["###", "..#"]);
        assert_eq!(canonical_shape(PieceKind::S).to_strings(), ["##.", ".##"]);
        assert_eq!(canonical_shape(PieceKind::Z).to_strings(), [".##", "##."]);
    }

    #[test]
    fn test_spawned_skew_pieces_keep_their_colors() {
        let green = Piece::spawn(PieceKind::S, 10);
        assert_eq!(green.color, Color::new(0x2ecc71));
        assert_eq!(green.shape.to_strings(), ["##.", ".##"]);

        let yellow = Piece::spawn(PieceKind::Z, 10);
        assert_eq!(yellow.color, Color::new(0xf1c40f));
        assert_eq!(yellow.shape.to_strings(), [".##", "##."]);
    }

    #[test]
    fn test_from_rows_matches_canonical() {
        let t = Shape::from_rows(&[[true, true, true], [false, true, false]]).unwrap();
        assert_eq!(t, canonical_shape(PieceKind::T));
    }

    #[test]
    fn test_from_rows_rejects_malformed() {
        let empty: [[bool; 2]; 0] = [];
        assert!(Shape::from_rows(&empty).is_err());
        assert!(Shape::from_rows(&[[false, false]]).is_err());
        assert!(Shape::from_rows(&[vec![true], vec![true, true]]).is_err());
        assert!(Shape::from_rows(&[[true; 5]]).is_err());
        let no_cols: [[bool; 0]; 1] = [[]];
        assert!(Shape::from_rows(&no_cols).is_err());
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let bar = canonical_shape(PieceKind::I);
        let upright = bar.rotated();
        assert_eq!((upright.width(), upright.height()), (1, 4));
        assert_eq!(upright.to_strings(), ["#", "#", "#", "#"]);
        assert_eq!(upright.rotated(), bar);
    }

    #[test]
    fn test_rotate_t_counter_clockwise() {
        // ###      #.
        // .#.  ->  ##
        //          #.
        let turned = canonical_shape(PieceKind::T).rotated();
        assert_eq!(turned.to_strings(), ["#.", "##", "#."]);
    }

    #[test]
    fn test_four_rotations_is_identity() {
        for kind in PieceKind::ALL {
            let shape = canonical_shape(kind);
            assert_eq!(shape.rotated().rotated().rotated().rotated(), shape);
        }
    }

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(Piece::spawn(PieceKind::I, 10).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O, 10).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T, 10).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T, 10).y, 0);
        assert_eq!(Piece::spawn(PieceKind::O, 10).color, PieceKind::O.color());
    }

    #[test]
    fn test_collides_with_walls_and_floor() {
        let grid = Grid::standard();
        let piece = Piece::spawn(PieceKind::O, 10);

        assert!(!collides(&piece, &grid));
        assert!(collides(&piece.moved(-5, 0), &grid));
        assert!(collides(&piece.moved(5, 0), &grid));
        assert!(!collides(&piece.moved(0, 18), &grid));
        assert!(collides(&piece.moved(0, 19), &grid));
    }

    #[test]
    fn test_cells_above_top_do_not_collide() {
        let mut grid = Grid::standard();
        grid.set(4, 0, Some(Color::new(0x123456)));

        let above = Piece::spawn(PieceKind::O, 10).moved(0, -2);
        assert!(!collides(&above, &grid));
        assert!(collides(&above.moved(0, 1), &grid));
        assert!(collides(&above.moved(-5, 0), &grid));
    }

    #[test]
    fn test_rotate_refused_against_wall() {
        let grid = Grid::standard();
        let mut upright = Piece::spawn(PieceKind::I, 10).rotated();
        upright.x = 9;

        // Turning back to a 4-wide bar at x = 9 would poke through the wall.
        assert_eq!(rotate(&upright, &grid), upright);

        upright.x = 6;
        let flat = rotate(&upright, &grid);
        assert_eq!(flat.shape, canonical_shape(PieceKind::I));
        assert_eq!((flat.x, flat.y), (6, 0));
    }

    #[test]
    fn test_rotate_refused_against_blocks() {
        let mut grid = Grid::standard();
        let piece = Piece::spawn(PieceKind::T, 10).moved(0, 5);
        // T at (4,5) turned becomes #./##/#. covering (4,7); block it.
        grid.set(4, 7, Some(Color::new(0xffffff)));

        assert_eq!(rotate(&piece, &grid), piece);
    }
}
