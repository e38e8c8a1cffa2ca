//! The dynamic programming table shared by both aligners.

use core::ops::{Index, IndexMut};

use distances::Number;

use crate::Direction;

/// A table of scores and backpointers for the prefixes (or substrings) of two
/// sequences.
///
/// Cell `(i, j)` holds the best score for the first `i` symbols of the first
/// sequence against the first `j` symbols of the second, together with the
/// move that achieved it. The cells live in one contiguous, row-major buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct DpTable<T> {
    /// The cells in row-major order.
    cells: Vec<(T, Direction)>,
    /// The number of columns, i.e. one more than the length of the second
    /// sequence.
    cols: usize,
}

impl<T: Number> DpTable<T> {
    /// Creates a table for sequences of lengths `m` and `n`, with every cell
    /// set to a score of zero and a `Diagonal` backpointer.
    pub(crate) fn zeros(m: usize, n: usize) -> Self {
        Self {
            cells: vec![(T::ZERO, Direction::Diagonal); (m + 1) * (n + 1)],
            cols: n + 1,
        }
    }

    /// The number of rows in the table.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// The number of columns in the table.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(i, j)`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&(T, Direction)> {
        if j < self.cols {
            self.cells.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// The bottom-right cell.
    #[must_use]
    pub fn last(&self) -> (T, Direction) {
        // There is always at least the `(0, 0)` cell.
        self.cells
            .last()
            .copied()
            .unwrap_or((T::ZERO, Direction::Diagonal))
    }

    /// Returns the coordinates and score of the first maximal cell in
    /// row-major order.
    #[must_use]
    pub fn argmax(&self) -> ((usize, usize), T) {
        let (mut best_i, mut best) = (0, T::ZERO);
        for (k, &(s, _)) in self.cells.iter().enumerate() {
            if k == 0 || s > best {
                (best_i, best) = (k, s);
            }
        }
        ((best_i / self.cols, best_i % self.cols), best)
    }

    /// Copies the table into nested rows.
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<(T, Direction)>> {
        self.cells.chunks(self.cols).map(<[_]>::to_vec).collect()
    }
}

impl<T> Index<(usize, usize)> for DpTable<T> {
    type Output = (T, Direction);

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DpTable<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[i * self.cols + j]
    }
}
