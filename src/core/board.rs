//! Board module - manages the settled-cell grid
//!
//! The board is a `width x height` grid where each cell is empty or holds
//! a settled block's kind. Storage is a flat row-major `Vec` because the
//! dimensions are session configuration, not compile-time constants.
//! Coordinates: (x, y) with x growing rightward and y growing downward.
//! Rows above the top (y < 0) count as empty: pieces spawn at the top
//! edge and only ever move down or sideways, so no lower bound is
//! enforced.

use crate::types::{Cell, ConfigError, PieceKind, MAX_BOARD_DIM};

/// The settled-cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Rejects zero dimensions and anything
    /// past the signed-coordinate range; this is the only hard failure
    /// in the core.
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if width > MAX_BOARD_DIM || height > MAX_BOARD_DIM {
            return Err(ConfigError::DimensionsTooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// A position is valid if it is inside the side walls, above the
    /// floor, and not settled. Positions above the top edge are valid.
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return false;
        }
        y < 0 || self.cells[y as usize * self.width as usize + x as usize].is_none()
    }

    /// Single predicate backing movement, rotation, and spawn checks:
    /// true iff every cell of the candidate layout is valid.
    pub fn fits(&self, cells: &[(i8, i8); 4]) -> bool {
        cells.iter().all(|&(x, y)| self.is_valid(x, y))
    }

    /// True iff any cell coincides with a settled cell. This is the
    /// game-over probe for a just-spawned piece; unlike `fits` it does
    /// not care about walls.
    pub fn overlaps(&self, cells: &[(i8, i8); 4]) -> bool {
        cells
            .iter()
            .any(|&(x, y)| matches!(self.get(x, y), Some(Some(_))))
    }

    /// Mark each cell as settled with the given kind.
    /// Precondition: `fits(cells)` holds.
    pub fn lock(&mut self, cells: &[(i8, i8); 4], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let start = y * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and shift the settled cells above each one
    /// down, preserving column, kind, and relative row order. Uses a
    /// bottom-up two-pointer scan with `copy_within`, so simultaneous
    /// clears compact consistently in one pass.
    /// Returns the number of rows cleared (0-4).
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_y = height;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Rows vacated at the top become empty.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Read-only view of the grid, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
