//! Substitution matrix over bytes.

use core::ops::Neg;

use distances::Number;

use super::Scorer;

/// The number of distinct byte symbols.
const NUM_CHARS: usize = 256;

/// The position of a byte in a row of the matrix.
fn idx(a: u8) -> usize {
    <usize as From<u8>>::from(a)
}

/// A dense table of similarity scores for every pair of bytes, together with
/// the score of each byte against a gap.
///
/// Insertions (a gap in the first sequence) and deletions (a gap in the
/// second sequence) are scored separately.
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub struct SubstitutionMatrix<T> {
    /// The score of aligning one byte against another, in row-major order.
    sub_scores: Vec<T>,
    /// The score of a byte in the second sequence against a gap.
    ins_scores: Vec<T>,
    /// The score of a byte in the first sequence against a gap.
    del_scores: Vec<T>,
}

impl<T: Number + Neg<Output = T>> Default for SubstitutionMatrix<T> {
    fn default() -> Self {
        Self::new(T::ONE, -T::ONE, -T::ONE)
    }
}

impl<T: Number + Neg<Output = T>> SubstitutionMatrix<T> {
    /// Create a matrix with all scores set to the negative of the scores in
    /// this matrix.
    #[must_use]
    pub fn negative_matrix(&self) -> Self {
        let neg = |v: &[T]| v.iter().map(|&s| -s).collect();
        Self {
            sub_scores: neg(&self.sub_scores),
            ins_scores: neg(&self.ins_scores),
            del_scores: neg(&self.del_scores),
        }
    }
}

impl<T: Number> SubstitutionMatrix<T> {
    /// Creates a matrix that scores every identical pair with `match_score`,
    /// every other pair with `mismatch_score` and every gap with `gap_score`.
    #[must_use]
    pub fn new(match_score: T, mismatch_score: T, gap_score: T) -> Self {
        let mut sub_scores = vec![mismatch_score; NUM_CHARS * NUM_CHARS];
        for i in 0..NUM_CHARS {
            sub_scores[i * NUM_CHARS + i] = match_score;
        }
        Self {
            sub_scores,
            ins_scores: vec![gap_score; NUM_CHARS],
            del_scores: vec![gap_score; NUM_CHARS],
        }
    }

    /// Set the score of aligning `a` against `b`.
    ///
    /// The matrix is not made symmetric; set `(b, a)` as well if needed.
    #[must_use]
    pub fn with_sub_score(mut self, a: u8, b: u8, score: T) -> Self {
        self.sub_scores[idx(a) * NUM_CHARS + idx(b)] = score;
        self
    }

    /// Set the score of a gap in the first sequence against `a`.
    #[must_use]
    pub fn with_ins_score(mut self, a: u8, score: T) -> Self {
        self.ins_scores[idx(a)] = score;
        self
    }

    /// Set the score of `a` against a gap in the second sequence.
    #[must_use]
    pub fn with_del_score(mut self, a: u8, score: T) -> Self {
        self.del_scores[idx(a)] = score;
        self
    }

    /// Set both gap scores of `a`.
    #[must_use]
    pub fn with_gap_score(self, a: u8, score: T) -> Self {
        self.with_ins_score(a, score).with_del_score(a, score)
    }

    /// Get the score of aligning `a` against `b`.
    #[must_use]
    pub fn sub_score(&self, a: u8, b: u8) -> T {
        self.sub_scores[idx(a) * NUM_CHARS + idx(b)]
    }

    /// Get the score of a gap in the first sequence against `a`.
    #[must_use]
    pub fn ins_score(&self, a: u8) -> T {
        self.ins_scores[idx(a)]
    }

    /// Get the score of `a` against a gap in the second sequence.
    #[must_use]
    pub fn del_score(&self, a: u8) -> T {
        self.del_scores[idx(a)]
    }
}

impl<T: Number> Scorer<u8, T> for SubstitutionMatrix<T> {
    fn score(&self, a: u8, b: u8) -> T {
        self.sub_score(a, b)
    }

    fn del_score(&self, a: u8, _: u8) -> T {
        Self::del_score(self, a)
    }

    fn ins_score(&self, _: u8, b: u8) -> T {
        Self::ins_score(self, b)
    }
}
