//! Needleman-Wunsch algorithm for global sequence alignment.
//!
//! * [Wikipedia](https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm)

use distances::Number;

use crate::{error::check_inputs, Alignment, Direction, DpTable, Result, Scorer};

/// A Needleman-Wunsch aligner.
///
/// This works with any sequence of `Copy` symbols. The gap marker must not
/// occur in the sequences being aligned.
#[derive(Clone, Debug)]
pub struct Aligner<'a, S, F> {
    /// The scorer for aligned columns.
    scorer: &'a F,
    /// The gap marker.
    gap: S,
}

impl<'a, S: Copy + PartialEq, F> Aligner<'a, S, F> {
    /// Create a new Needleman-Wunsch aligner.
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

    /// Compute the dynamic programming table for the Needleman-Wunsch
    /// algorithm.
    ///
    /// The value at position `(i, j)` is the best score of aligning the first
    /// `i` symbols of `x` with the first `j` symbols of `y`. The first row and
    /// column accumulate gap scores.
    ///
    /// The inputs are not checked for the gap marker.
    pub fn dp_table<T: Number>(&self, x: &[S], y: &[S]) -> DpTable<T>
    where
        F: Scorer<S, T>,
    {
        let mut dp = DpTable::zeros(x.len(), y.len());

        // The first column is the cost of deleting every symbol of `x`.
        for (i, &xc) in x.iter().enumerate() {
            let score = dp[(i, 0)].0 + self.scorer.del_score(xc, self.gap);
            dp[(i + 1, 0)] = (score, Direction::Up);
        }

        // The first row is the cost of inserting every symbol of `y`.
        for (j, &yc) in y.iter().enumerate() {
            let score = dp[(0, j)].0 + self.scorer.ins_score(self.gap, yc);
            dp[(0, j + 1)] = (score, Direction::Left);
        }

        for (i, &xc) in x.iter().enumerate() {
            let del = self.scorer.del_score(xc, self.gap);
            for (j, &yc) in y.iter().enumerate() {
                let diagonal = dp[(i, j)].0 + self.scorer.score(xc, yc);
                let up = dp[(i, j + 1)].0 + del;
                let left = dp[(i + 1, j)].0 + self.scorer.ins_score(self.gap, yc);
                dp[(i + 1, j + 1)] = Direction::best(diagonal, up, left);
            }
        }

        dp
    }

    /// Trace back through a table built by `dp_table` to recover the aligned
    /// sequences.
    ///
    /// The walk starts at the bottom-right cell and ends at `(0, 0)`.
    #[must_use]
    pub fn trace_back<T: Number>(&self, x: &[S], y: &[S], table: &DpTable<T>) -> [Vec<S>; 2] {
        let [mut row_i, mut col_i] = [x.len(), y.len()];
        let [mut x_aligned, mut y_aligned] = [
            Vec::with_capacity(x.len() + y.len()),
            Vec::with_capacity(x.len() + y.len()),
        ];

        while row_i > 0 || col_i > 0 {
            // Along the edges only one move is possible.
            let direction = if row_i == 0 {
                Direction::Left
            } else if col_i == 0 {
                Direction::Up
            } else {
                table[(row_i, col_i)].1
            };

            match direction {
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

        x_aligned.reverse();
        y_aligned.reverse();

        [x_aligned, y_aligned]
    }

    /// Align two sequences end-to-end.
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

        let table = self.dp_table(x, y);
        let score = table.last().0;
        ftlog::debug!(
            "Global alignment of lengths {} and {}: score {score}",
            x.len(),
            y.len()
        );

        let aligned = self.trace_back(x, y, &table);
        Ok(Alignment::new(aligned, score, [0..x.len(), 0..y.len()]))
    }

    /// Compute only the score of the best global alignment.
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

        let mut row = Vec::with_capacity(y.len() + 1);
        row.push(T::ZERO);
        for &yc in y {
            let prev = row[row.len() - 1];
            row.push(prev + self.scorer.ins_score(self.gap, yc));
        }

        for &xc in x {
            let del = self.scorer.del_score(xc, self.gap);
            // `diagonal` carries the previous row's value of the column to the left.
            let mut diagonal = row[0];
            row[0] = row[0] + del;
            for (j, &yc) in y.iter().enumerate() {
                let up = row[j + 1];
                let (best, _) = Direction::best(
                    diagonal + self.scorer.score(xc, yc),
                    up + del,
                    row[j] + self.scorer.ins_score(self.gap, yc),
                );
                diagonal = up;
                row[j + 1] = best;
            }
        }

        Ok(row[y.len()])
    }
}
