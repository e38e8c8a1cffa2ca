#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod error;
mod ops;
mod table;

pub mod needleman_wunsch;
pub mod scoring;
pub mod smith_waterman;
pub mod strings;

pub use error::{AlignmentError, Result, Which};
pub use ops::{Alignment, Direction};
pub use scoring::{Scheme, Scorer, SubstitutionMatrix};
pub use strings::{global_alignment, local_alignment};
pub use table::DpTable;

/// The gap marker used by the string helpers.
pub const GAP: char = '-';

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
