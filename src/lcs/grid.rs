//! Dynamic-programming grid for the longest common subsequence.

use std::fmt;

/// A move from a grid cell back towards the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous line of the second file, same line of the first.
    Up,
    /// Previous line of the first file, same line of the second.
    Left,
    /// Both lines matched; step back in both files.
    Diag,
}

impl Direction {
    /// Predecessor of `(x, y)`, where `x` indexes the first file and `y` the second.
    ///
    /// Callers never step from row or column 0.
    pub fn step(self, (x, y): (usize, usize)) -> (usize, usize) {
        match self {
            Direction::Up => (x, y - 1),
            Direction::Left => (x - 1, y),
            Direction::Diag => (x - 1, y - 1),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b001,
            Direction::Left => 0b010,
            Direction::Diag => 0b100,
        }
    }
}

/// The set of moves that achieve a cell's length.
///
/// More than one direction means several longest paths tie at this cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directions(u8);

impl Directions {
    pub const NONE: Directions = Directions(0);

    pub fn only(direction: Direction) -> Self {
        Directions(direction.bit())
    }

    pub fn with(self, direction: Direction) -> Self {
        Directions(self.0 | direction.bit())
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Directions in a fixed order: up, left, diag.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        [Direction::Up, Direction::Left, Direction::Diag]
            .into_iter()
            .filter(move |d| self.contains(*d))
    }
}

impl fmt::Debug for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    /// Length of a longest common subsequence up to this cell.
    pub length: usize,
    pub directions: Directions,
}

impl Pointer {
    pub fn new(length: usize, directions: Directions) -> Self {
        Self { length, directions }
    }
}

/// A `(len(file2) + 1) x (len(file1) + 1)` grid of [`Pointer`]s.
///
/// Rows index the second file and columns the first. Row 0 and column 0 hold
/// zero-length cells with no directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Pointer>,
}

impl LcsGrid {
    /// Fill the grid for `file1` (columns) against `file2` (rows).
    ///
    /// Lines are compared verbatim: trailing whitespace and line terminators
    /// are part of a line's identity.
    pub fn build<A, B>(file1: &[A], file2: &[B]) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let rows = file2.len() + 1;
        let cols = file1.len() + 1;
        let mut grid = Self {
            rows,
            cols,
            cells: vec![Pointer::default(); rows * cols],
        };

        for i in 1..rows {
            for j in 1..cols {
                let pointer = if file1[j - 1].as_ref() == file2[i - 1].as_ref() {
                    let diag = grid.cell(i - 1, j - 1);
                    Pointer::new(diag.length + 1, Directions::only(Direction::Diag))
                } else {
                    let up = grid.cell(i - 1, j);
                    let left = grid.cell(i, j - 1);

                    if up.length == left.length {
                        Pointer::new(
                            up.length,
                            Directions::only(Direction::Up).with(Direction::Left),
                        )
                    } else if up.length > left.length {
                        Pointer::new(up.length, Directions::only(Direction::Up))
                    } else {
                        Pointer::new(left.length, Directions::only(Direction::Left))
                    }
                };
                grid.cells[i * cols + j] = pointer;
            }
        }

        grid
    }

    /// Number of rows (`len(file2) + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len(file1) + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `row` (second file) and `col` (first file).
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Pointer {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// The final cell, where backtracking starts.
    pub fn last(&self) -> Pointer {
        self.cell(self.rows - 1, self.cols - 1)
    }

    /// Length of the longest common subsequence.
    pub fn lcs_length(&self) -> usize {
        self.last().length
    }
}
