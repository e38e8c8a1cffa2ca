//! Smith-Waterman algorithm for local sequence alignment.
//!
//! * [Wikipedia](https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm)

use distances::Number;

use crate::{error::check_inputs, Alignment, Direction, DpTable, Result, Scorer};

/// A Smith-Waterman aligner.
///
/// Finds the highest-scoring pair of contiguous regions of two sequences,
/// allowing gaps inside the regions. The gap marker must not occur in the
/// sequences being aligned.
#[derive(Clone, Debug)]
pub struct Aligner<'a, S, F> {
    /// The scorer for aligned columns.
    scorer: &'a F,
    /// The gap marker.
    gap: S,
}

impl<'a, S: Copy + PartialEq, F> Aligner<'a, S, F> {
    /// Create a new Smith-Waterman aligner.
    pub const fn new(scorer: &'a F, gap: S) -> Self {
        Self { scorer, gap }
    }

    /// Get the gap marker.
    pub const fn gap(&self) -> S {
        self.gap
    }

    /// Get the scorer.
    pub const fn scorer(&self) -> &'a F {
        self.scorer
    }

    /// Compute the dynamic programming table for the Smith-Waterman algorithm,
    /// along with the position and score of its first maximal cell in
    /// row-major order.
    ///
    /// The first row and column are zero and no cell is ever negative: a zero
    /// marks the start of a fresh local alignment.
    ///
    /// The inputs are not checked for the gap marker.
    pub fn dp_table<T: Number>(&self, x: &[S], y: &[S]) -> (DpTable<T>, (usize, usize), T)
    where
        F: Scorer<S, T>,
    {
        let mut dp = DpTable::zeros(x.len(), y.len());
        let (mut best_cell, mut best) = ((0, 0), T::ZERO);

        for (i, &xc) in x.iter().enumerate() {
            let del = self.scorer.del_score(xc, self.gap);
            for (j, &yc) in y.iter().enumerate() {
                let diagonal = dp[(i, j)].0 + self.scorer.score(xc, yc);
                let up = dp[(i, j + 1)].0 + del;
                let left = dp[(i + 1, j)].0 + self.scorer.ins_score(self.gap, yc);

                let (score, direction) = Direction::best(diagonal, up, left);
                let score = if score > T::ZERO { score } else { T::ZERO };
                dp[(i + 1, j + 1)] = (score, direction);

                if score > best {
                    (best_cell, best) = ((i + 1, j + 1), score);
                }
            }
        }

        ftlog::trace!("Local table maximum {best} at {best_cell:?}");
        (dp, best_cell, best)
    }

    /// Trace back through a table built by `dp_table`, starting at `start` and
    /// stopping at the first zero cell or at the edge of the table.
    ///
    /// Returns the aligned sequences and the spans of `x` and `y` that they
    /// cover.
    #[must_use]
    pub fn trace_back<T: Number>(
        &self,
        x: &[S],
        y: &[S],
        table: &DpTable<T>,
        start: (usize, usize),
    ) -> ([Vec<S>; 2], [core::ops::Range<usize>; 2]) {
        let (mut row_i, mut col_i) = start;
        let [mut x_aligned, mut y_aligned] = [Vec::with_capacity(row_i + col_i), Vec::with_capacity(row_i + col_i)];

        while row_i > 0 && col_i > 0 && table[(row_i, col_i)].0 > T::ZERO {
            match table[(row_i, col_i)].1 {
                Direction::Diagonal => {
                    x_aligned.push(x[row_i - 1]);
                    y_aligned.push(y[col_i - 1]);
                    row_i -= 1;
                    col_i -= 1;
                }
                Direction::Up => {
                    x_aligned.push(x[row_i - 1]);
                    y_aligned.push(self.gap);
                    row_i -= 1;
                }
                Direction::Left => {
                    x_aligned.push(self.gap);
                    y_aligned.push(y[col_i - 1]);
                    col_i -= 1;
                }
            }
        }
        ftlog::trace!("Local traceback from {start:?} stopped at ({row_i}, {col_i})");

        x_aligned.reverse();
        y_aligned.reverse();

        ([x_aligned, y_aligned], [row_i..start.0, col_i..start.1])
    }

    /// Find the best local alignment of two sequences.
    ///
    /// If no pair of regions scores above zero, the alignment is empty with a
    /// score of zero.
    ///
    /// # Errors
    ///
    /// * `AlignmentError::InvalidInput` if the gap marker occurs in either
    ///   sequence.
    pub fn align<T: Number>(&self, x: &[S], y: &[S]) -> Result<Alignment<S, T>>
    where
        F: Scorer<S, T>,
    {
        check_inputs(x, y, &self.gap)?;

        let (table, best_cell, best) = self.dp_table(x, y);
        ftlog::debug!(
            "Local alignment of lengths {} and {}: score {best} ending at {best_cell:?}",
            x.len(),
            y.len()
        );

        if best > T::ZERO {
            let (aligned, ranges) = self.trace_back(x, y, &table, best_cell);
            Ok(Alignment::new(aligned, best, ranges))
        } else {
            Ok(Alignment::empty())
        }
    }

    /// Compute only the score of the best local alignment.
    ///
    /// This keeps a single row of the table, so it uses memory linear in the
    /// length of `y`.
    ///
    /// # Errors
    ///
    /// * `AlignmentError::InvalidInput` if the gap marker occurs in either
    ///   sequence.
    pub fn score<T: Number>(&self, x: &[S], y: &[S]) -> Result<T>
    where
        F: Scorer<S, T>,
    {
        check_inputs(x, y, &self.gap)?;

        let mut row = vec![T::ZERO; y.len() + 1];
        let mut best = T::ZERO;

        for &xc in x {
            let del = self.scorer.del_score(xc, self.gap);
            let mut diagonal = T::ZERO;
            for (j, &yc) in y.iter().enumerate() {
                let up = row[j + 1];
                let (score, _) = Direction::best(
                    diagonal + self.scorer.score(xc, yc),
                    up + del,
                    row[j] + self.scorer.ins_score(self.gap, yc),
                );
                let score = if score > T::ZERO { score } else { T::ZERO };
                diagonal = up;
                row[j + 1] = score;
                if score > best {
                    best = score;
                }
            }
        }

        Ok(best)
    }
}
