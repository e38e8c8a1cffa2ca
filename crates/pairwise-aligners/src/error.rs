//! Errors reported by the aligners.

use core::fmt;

/// Which of the two input sequences an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Which {
    /// The first sequence, laid out along the rows of the DP table.
    First,
    /// The second sequence, laid out along the columns of the DP table.
    Second,
}

impl fmt::Display for Which {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// The errors that can occur while aligning two sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlignmentError {
    /// The gap marker occurs inside one of the input sequences, which would
    /// make the aligned output ambiguous.
    #[error("invalid input: the gap marker occurs in the {sequence} sequence at position {position}")]
    InvalidInput {
        /// The offending sequence.
        sequence: Which,
        /// Index of the first occurrence of the gap marker.
        position: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AlignmentError>;

/// Fails if `gap` occurs in either sequence. The first sequence is checked
/// before the second.
pub(crate) fn check_inputs<S: PartialEq>(x: &[S], y: &[S], gap: &S) -> Result<()> {
    for (sequence, seq) in [(Which::First, x), (Which::Second, y)] {
        if let Some(position) = seq.iter().position(|s| s == gap) {
            ftlog::debug!("Rejecting input: gap marker in the {sequence} sequence at {position}");
            return Err(AlignmentError::InvalidInput { sequence, position });
        }
    }
    Ok(())
}
