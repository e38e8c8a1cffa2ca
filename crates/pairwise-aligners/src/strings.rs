//! Alignment of strings, with `'-'` as the gap marker.
//!
//! The scoring function is called with pairs of characters, and with `'-'` as
//! one of the arguments to score a gap.

use distances::Number;

use crate::{needleman_wunsch, smith_waterman, Result, GAP};

/// Globally align two strings using the Needleman-Wunsch algorithm.
///
/// Returns the two aligned strings and the score of the alignment. Ties between
/// equally good moves are broken by preferring a match or substitution, then a
/// gap in `y`, then a gap in `x`.
///
/// # Errors
///
/// * `AlignmentError::InvalidInput` if either string contains `'-'`.
///
/// # Examples
///
/// ```
/// use pairwise_aligners::global_alignment;
///
/// let scoring = |a: char, b: char| if a == b { 1.0 } else { -1.0 };
/// let (x, y, score) = global_alignment("abracadabra", "dabarakadara", scoring).unwrap();
///
/// assert_eq!(x, "-ab-racadabra");
/// assert_eq!(y, "dabarakada-ra");
/// assert_eq!(score, 5.0);
/// ```
pub fn global_alignment<T, F>(x: &str, y: &str, scoring: F) -> Result<(String, String, T)>
where
    T: Number,
    F: Fn(char, char) -> T,
{
    let (x, y) = (chars(x), chars(y));
    let aln = needleman_wunsch::Aligner::new(&scoring, GAP).align(&x, &y)?;
    Ok(into_strings(aln.into_parts()))
}

/// Locally align two strings using the Smith-Waterman algorithm.
///
/// Returns the two aligned substrings and the score of the alignment. If no
/// pair of substrings scores above zero, both strings are empty and the score
/// is zero.
///
/// # Errors
///
/// * `AlignmentError::InvalidInput` if either string contains `'-'`.
///
/// # Examples
///
/// ```
/// use pairwise_aligners::local_alignment;
///
/// let scoring = |a: char, b: char| if a == b { 1.0 } else { -1.0 };
/// let (x, y, score) = local_alignment("pending itch", "unending glitch", scoring).unwrap();
///
/// assert_eq!(x, "ending --itch");
/// assert_eq!(y, "ending glitch");
/// assert_eq!(score, 9.0);
/// ```
pub fn local_alignment<T, F>(x: &str, y: &str, scoring: F) -> Result<(String, String, T)>
where
    T: Number,
    F: Fn(char, char) -> T,
{
    let (x, y) = (chars(x), chars(y));
    let aln = smith_waterman::Aligner::new(&scoring, GAP).align(&x, &y)?;
    Ok(into_strings(aln.into_parts()))
}

/// Splits a string into its characters.
fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Joins aligned rows of characters back into strings.
fn into_strings<T>(([x, y], score): ([Vec<char>; 2], T)) -> (String, String, T) {
    (x.into_iter().collect(), y.into_iter().collect(), score)
}
