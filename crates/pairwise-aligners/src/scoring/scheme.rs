//! A match/mismatch/gap scoring scheme.

use core::ops::Neg;

use distances::Number;
use serde::{Deserialize, Serialize};

use super::Scorer;

/// Fixed scores for matches, mismatches and gaps.
///
/// The default scheme scores `+1` for a match and `-1` for a mismatch or a
/// gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme<T> {
    /// The score of two identical symbols.
    pub match_score: T,
    /// The score of two different symbols.
    pub mismatch_score: T,
    /// The score of a symbol against a gap.
    pub gap_score: T,
}

impl<T: Number + Neg<Output = T>> Default for Scheme<T> {
    fn default() -> Self {
        Self::new(T::ONE, -T::ONE, -T::ONE)
    }
}

impl<T: Number> Scheme<T> {
    /// Creates a new scheme.
    pub const fn new(match_score: T, mismatch_score: T, gap_score: T) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    /// Sets the score of a match.
    #[must_use]
    pub fn with_match_score(mut self, score: T) -> Self {
        self.match_score = score;
        self
    }

    /// Sets the score of a mismatch.
    #[must_use]
    pub fn with_mismatch_score(mut self, score: T) -> Self {
        self.mismatch_score = score;
        self
    }

    /// Sets the score of a gap.
    #[must_use]
    pub fn with_gap_score(mut self, score: T) -> Self {
        self.gap_score = score;
        self
    }
}

impl<S: PartialEq, T: Number> Scorer<S, T> for Scheme<T> {
    fn score(&self, a: S, b: S) -> T {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    fn del_score(&self, _: S, _: S) -> T {
        self.gap_score
    }

    fn ins_score(&self, _: S, _: S) -> T {
        self.gap_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let scheme = Scheme::<i16>::default();
        assert_eq!(scheme, Scheme::new(1, -1, -1));
        assert_eq!(scheme.score(b'A', b'A'), 1);
        assert_eq!(scheme.score(b'A', b'C'), -1);
        assert_eq!(scheme.del_score(b'A', b'-'), -1);
        assert_eq!(scheme.ins_score(b'-', b'A'), -1);
    }

    #[test]
    fn builders() {
        let scheme = Scheme::<f32>::default()
            .with_match_score(2.0)
            .with_mismatch_score(-0.5)
            .with_gap_score(-3.0);
        assert_eq!(Scorer::<char, f32>::score(&scheme, 'x', 'x'), 2.0);
        assert_eq!(Scorer::<char, f32>::score(&scheme, 'x', 'y'), -0.5);
        assert_eq!(Scorer::<char, f32>::del_score(&scheme, 'x', '-'), -3.0);
    }
}
