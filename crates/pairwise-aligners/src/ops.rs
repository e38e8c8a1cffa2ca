//! Backpointers and alignment results.

use core::ops::Range;

use distances::Number;

use crate::Scorer;

/// The direction of the best predecessor of a cell in the DP table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Diagonal (Up and Left) for a match or substitution.
    Diagonal,
    /// Up for a gap in the second sequence.
    Up,
    /// Left for a gap in the first sequence.
    Left,
}

impl Direction {
    /// Chooses the best of the three candidate scores.
    ///
    /// Ties are broken by preferring `Diagonal`, then `Up`, then `Left`.
    pub(crate) fn best<T: Number>(diagonal: T, up: T, left: T) -> (T, Self) {
        if diagonal >= up && diagonal >= left {
            (diagonal, Self::Diagonal)
        } else if up >= left {
            (up, Self::Up)
        } else {
            (left, Self::Left)
        }
    }
}

/// The result of aligning two sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment<S, T> {
    /// The two aligned rows. Both have the same length.
    aligned: [Vec<S>; 2],
    /// The score of the alignment.
    score: T,
    /// The spans of the input sequences covered by the alignment.
    ranges: [Range<usize>; 2],
}

impl<S: Copy + PartialEq, T: Number> Alignment<S, T> {
    /// Creates a new alignment.
    pub(crate) fn new(aligned: [Vec<S>; 2], score: T, ranges: [Range<usize>; 2]) -> Self {
        debug_assert_eq!(aligned[0].len(), aligned[1].len());
        Self { aligned, score, ranges }
    }

    /// An alignment with no columns, a score of zero, and empty spans starting
    /// at the beginning of each input.
    pub(crate) fn empty() -> Self {
        Self::new([Vec::new(), Vec::new()], T::ZERO, [0..0, 0..0])
    }

    /// The aligned first sequence.
    #[must_use]
    pub fn x(&self) -> &[S] {
        &self.aligned[0]
    }

    /// The aligned second sequence.
    #[must_use]
    pub fn y(&self) -> &[S] {
        &self.aligned[1]
    }

    /// The score of the alignment.
    #[must_use]
    pub const fn score(&self) -> T {
        self.score
    }

    /// The half-open spans of the first and second inputs that take part in
    /// the alignment.
    ///
    /// For a global alignment these cover both inputs entirely.
    #[must_use]
    pub const fn ranges(&self) -> &[Range<usize>; 2] {
        &self.ranges
    }

    /// The number of columns in the alignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned[0].len()
    }

    /// Whether the alignment has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned[0].is_empty()
    }

    /// Consumes the alignment, returning the aligned rows and the score.
    #[must_use]
    pub fn into_parts(self) -> ([Vec<S>; 2], T) {
        (self.aligned, self.score)
    }

    /// Returns both aligned rows with the gaps removed.
    #[must_use]
    pub fn ungapped(&self, gap: S) -> [Vec<S>; 2] {
        let strip = |row: &[S]| row.iter().copied().filter(|&s| s != gap).collect();
        [strip(&self.aligned[0]), strip(&self.aligned[1])]
    }

    /// Returns the column indices at which each row holds a gap.
    #[must_use]
    pub fn gap_positions(&self, gap: S) -> [Vec<usize>; 2] {
        let gaps = |row: &[S]| {
            row.iter()
                .enumerate()
                .filter_map(|(i, &s)| (s == gap).then_some(i))
                .collect()
        };
        [gaps(&self.aligned[0]), gaps(&self.aligned[1])]
    }

    /// Recomputes the score by summing the scorer over every column.
    ///
    /// For any alignment produced by this crate, this equals `score()` with the
    /// scorer and gap that produced it.
    pub fn rescore<F: Scorer<S, T>>(&self, scorer: &F, gap: S) -> T {
        self.aligned[0]
            .iter()
            .zip(self.aligned[1].iter())
            .map(|(&a, &b)| {
                if b == gap {
                    scorer.del_score(a, gap)
                } else if a == gap {
                    scorer.ins_score(gap, b)
                } else {
                    scorer.score(a, b)
                }
            })
            .fold(T::ZERO, |acc, s| acc + s)
    }

    /// The fraction of columns in which both rows hold the same non-gap
    /// symbol. An empty alignment has an identity of zero.
    #[must_use]
    pub fn identity(&self, gap: S) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let matches = self.aligned[0]
            .iter()
            .zip(self.aligned[1].iter())
            .filter(|&(&a, &b)| a == b && a != gap)
            .count();
        matches.as_f64() / self.len().as_f64()
    }
}
