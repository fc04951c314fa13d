use crate::{GridError, Position};
use std::fmt;

/// The program text laid out as a ragged, mutable 2D character store.
///
/// Rows keep the length they had in the source. Nothing is padded and
/// nothing is ever resized: `put` only overwrites existing cells, so a
/// coordinate that is out of bounds at load time stays out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from program text.
    ///
    /// Rows are split on `'\n'` only. A trailing newline therefore yields
    /// an empty final row, and a `'\r'` stays in the row as an ordinary cell.
    pub fn from_source(source: &str) -> Self {
        let rows = source.split('\n').map(|line| line.chars().collect()).collect();
        Self { rows }
    }

    /// Number of rows, including empty ones.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`, or `None` if the row does not exist.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// True when no row contains a single cell.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The character at `position`, or `None` if no such cell exists.
    pub fn get(&self, position: Position) -> Option<char> {
        let (row, col) = Self::indices(position)?;
        self.rows.get(row)?.get(col).copied()
    }

    /// Overwrite the cell at `position`.
    pub fn put(&mut self, position: Position, ch: char) -> crate::Result<()> {
        let cell = Self::indices(position)
            .and_then(|(row, col)| self.rows.get_mut(row)?.get_mut(col))
            .ok_or(GridError::OutOfBounds { position })?;
        *cell = ch;
        Ok(())
    }

    fn indices(position: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        Some((row, col))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
