//! Grid module - the playfield of locked blocks
//!
//! Each cell is empty or holds the color of the piece that locked there.
//! Storage is a flat row-major vector; dimensions are fixed at construction.
//! Coordinates: (x, y) where x grows to the right and y grows downward, so
//! row 0 is the top of the board.

use crate::error::ConfigError;
use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest supported side, in cells
pub const MAX_GRID_SIDE: usize = u8::MAX as usize;

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid of `cols x rows` cells
    pub fn new(cols: usize, rows: usize) -> Result<Self, ConfigError> {
        if cols == 0 || rows == 0 || cols > MAX_GRID_SIDE || rows > MAX_GRID_SIDE {
            return Err(ConfigError::GridSize { cols, rows });
        }
        Ok(Self {
            width: cols,
            height: rows,
            cells: vec![None; cols * rows],
        })
    }

    /// The standard 10x20 grid
    pub fn standard() -> Self {
        let (width, height) = (BOARD_WIDTH as usize, BOARD_HEIGHT as usize);
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (x, y), or `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) blocks movement.
    ///
    /// Walls and the floor count as occupied. Anything above the top row is
    /// open sky, so `y < 0` is never occupied.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.width || y >= self.height as i32 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write the piece's color into every cell its shape covers.
    ///
    /// Cells above the top row are dropped. Does not check for overlap; the
    /// engine only locks pieces at positions that passed the collision check.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.color));
            }
        }
    }

    /// Row of cells at `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Indices of every full row, top to bottom
    pub fn find_full_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove `rows` and drop everything above them down.
    ///
    /// One bottom-up compaction pass: surviving rows keep their relative
    /// order, and as many empty rows as were removed appear at the top.
    /// Duplicates and out-of-range indices are ignored. Returns the number of
    /// rows actually removed.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let width = self.width;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        write_y
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}
