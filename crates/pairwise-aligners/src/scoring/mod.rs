//! Scoring of aligned columns.
//!
//! Aligners maximize the total score, so matches should score higher than
//! mismatches and gaps. Any `Fn(S, S) -> T` is a `Scorer`; it is called with
//! the gap marker as one of its arguments to obtain the score of a gap.

mod matrix;
mod scheme;

pub use matrix::SubstitutionMatrix;
pub use scheme::Scheme;

/// Scores the columns of an alignment.
pub trait Scorer<S, T> {
    /// The score of aligning `a` from the first sequence against `b` from the
    /// second.
    fn score(&self, a: S, b: S) -> T;

    /// The score of aligning `a` from the first sequence against a gap in the
    /// second.
    fn del_score(&self, a: S, gap: S) -> T {
        self.score(a, gap)
    }

    /// The score of aligning a gap in the first sequence against `b` from the
    /// second.
    fn ins_score(&self, gap: S, b: S) -> T {
        self.score(gap, b)
    }
}

impl<S, T, F: Fn(S, S) -> T> Scorer<S, T> for F {
    fn score(&self, a: S, b: S) -> T {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::Scorer;

    #[test]
    fn closures_see_the_gap() {
        let scorer = |a: char, b: char| match (a, b) {
            ('-', _) => -3,
            (_, '-') => -2,
            _ if a == b => 1,
            _ => -1,
        };
        assert_eq!(scorer.score('a', 'a'), 1);
        assert_eq!(scorer.score('a', 'b'), -1);
        assert_eq!(scorer.del_score('a', '-'), -2);
        assert_eq!(scorer.ins_score('-', 'a'), -3);
    }
}
