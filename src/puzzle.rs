use rand::{seq::SliceRandom, Rng};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("board dimension must be at least 1")]
    ZeroDimension,

    #[error("board dimension {0} exceeds the supported maximum of 16")]
    DimensionTooLarge(usize),

    #[error("expected {expected} cells for this dimension, found {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("board must contain exactly one blank cell, found {found}")]
    BlankCountMismatch { found: usize },

    #[error("tiles must be exactly the labels 0..n*n-1, each appearing once")]
    InvalidTileSet,
}

/// A single slide, named after the direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Right,
    Left,
    Up,
    Down,
}

impl Move {
    /// All moves in the order successors are generated.
    pub const ALL: [Move; 4] = [Move::Right, Move::Left, Move::Up, Move::Down];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Right => (0, 1),
            Move::Left => (0, -1),
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Right => "Right",
            Move::Left => "Left",
            Move::Up => "Up",
            Move::Down => "Down",
        };
        write!(f, "{}", s)
    }
}

/// An N×N sliding-tile board. Tiles carry labels `0..n*n-1`; the blank is
/// `None`. The solved board holds label `i` at row-major index `i` with the
/// blank in the last cell.
///
/// Equality and hashing cover the full grid layout, so states can be used
/// directly as visited-set keys during search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    size: usize,
    cells: Vec<Option<u8>>,
    blank_row: usize,
    blank_col: usize,
}

impl Puzzle {
    /// The solved board of the given dimension.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::ZeroDimension);
        }
        // Tile labels are u8, which caps the board at 16x16 (top label 254).
        if size > 16 {
            return Err(PuzzleError::DimensionTooLarge(size));
        }

        let area = size * size;
        let mut cells: Vec<Option<u8>> = (0..(area - 1) as u8).map(Some).collect();
        cells.push(None);

        Ok(Self {
            size,
            cells,
            blank_row: size - 1,
            blank_col: size - 1,
        })
    }

    /// A random solvable board. The tile labels are shuffled with the blank
    /// held in the last cell, reshuffling until the permutation has an even
    /// inversion count; odd permutations cannot reach the solved board by
    /// legal slides. A 1×1 board is returned as-is.
    pub fn shuffled<R: Rng>(size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        let mut puzzle = Self::new(size)?;
        if size == 1 {
            return Ok(puzzle);
        }

        let tile_count = size * size - 1;
        let mut tiles: Vec<u8> = (0..tile_count as u8).collect();

        loop {
            tiles.shuffle(rng);
            if Self::count_inversions(&tiles) % 2 == 0 {
                break;
            }
        }

        for (cell, &tile) in puzzle.cells[..tile_count].iter_mut().zip(&tiles) {
            *cell = Some(tile);
        }
        Ok(puzzle)
    }

    /// Builds a board from explicit cell contents, validating the dimension,
    /// the blank count, and the tile label multiset.
    pub fn from_cells(size: usize, cells: Vec<Option<u8>>) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::ZeroDimension);
        }

        let area = size * size;
        if cells.len() != area {
            return Err(PuzzleError::CellCountMismatch {
                expected: area,
                found: cells.len(),
            });
        }

        let blanks = cells.iter().filter(|c| c.is_none()).count();
        if blanks != 1 {
            return Err(PuzzleError::BlankCountMismatch { found: blanks });
        }

        let mut seen = vec![false; area - 1];
        for tile in cells.iter().flatten() {
            match seen.get_mut(*tile as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::InvalidTileSet),
            }
        }

        // One blank, no duplicate in-range labels: the position lookup
        // cannot fail.
        let blank_index = cells.iter().position(|c| c.is_none()).unwrap_or(area - 1);

        Ok(Self {
            size,
            cells,
            blank_row: blank_index / size,
            blank_col: blank_index % size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn blank_pos(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row * self.size + col]
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().enumerate().all(|(i, cell)| match cell {
            Some(tile) => *tile as usize == i,
            None => i == self.size * self.size - 1,
        })
    }

    /// Whether the board can reach the solved configuration by legal slides.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().flatten().copied().collect();
        let inversions = Self::count_inversions(&tiles);

        if self.size % 2 == 1 {
            // Odd-sized puzzle: solvable if inversions count is even
            inversions % 2 == 0
        } else {
            // Even-sized puzzle: solvable if (inversions + blank row) is odd
            (inversions + self.blank_row) % 2 == 1
        }
    }

    /// The board one move away, or `None` when the blank would leave the
    /// board. The original is untouched.
    pub fn try_move(&self, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();

        let new_row = self.blank_row as isize + dr;
        let new_col = self.blank_col as isize + dc;

        if new_row < 0
            || new_row >= self.size as isize
            || new_col < 0
            || new_col >= self.size as isize
        {
            return None;
        }

        let new_row = new_row as usize;
        let new_col = new_col as usize;

        let mut next = self.clone();
        next.cells[self.blank_row * self.size + self.blank_col] =
            next.cells[new_row * self.size + new_col];
        next.cells[new_row * self.size + new_col] = None;
        next.blank_row = new_row;
        next.blank_col = new_col;
        Some(next)
    }

    /// All boards reachable in one slide, in the fixed order right, left,
    /// up, down. Each successor is an independent copy.
    pub fn successors(&self) -> Vec<Self> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.try_move(movement))
            .collect()
    }

    fn count_inversions(tiles: &[u8]) -> usize {
        tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&next| next < tile).count())
            .sum()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{:2} ", tile)?,
                    None => write!(f, " _ ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
