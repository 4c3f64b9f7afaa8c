//! A backtracking pattern engine that enumerates *every* match, not a single
//! best one.
//!
//! [`Expression`]s compose like regular expressions (constants, sequences,
//! alternations, repetitions) but match against sequences of [`Structure`]
//! nodes, each of which may carry child structure of its own. This is
//! regular expression matching generalized from flat character strings to
//! tree-shaped input.
//!
//! Matching is demand driven: [`Expression::run`] returns a lazy iterator of
//! branches, and a caller that takes only the first branch triggers only the
//! backtracking needed to find it. This matters because the branch space of
//! nested repetitions is combinatorial.
//!
//! ```rust
//! use kleene::{parse_pattern, ToStructures};
//!
//! let pattern = parse_pattern("f*o").unwrap();
//! let input = "foo".to_structures();
//!
//! let first = pattern.run(&input).next().unwrap();
//! let matched: String = first.iter().map(|item| *item.value()).collect();
//! assert_eq!(matched, "foo"); // the repetition is greedy
//! ```

use thiserror::Error;

mod expression;
mod matcher;
mod parse;
mod structure;
mod text;

#[cfg(feature = "dot")]
mod dot;

pub use expression::{Expression, Order};
pub use matcher::{Branch, Branches};
pub use structure::{Children, Structure};
pub use text::ToStructures;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unmatched `)` at byte {at}")]
    UnmatchedClose { at: usize },
    #[error("group opened at byte {at} is never closed")]
    UnclosedGroup { at: usize },
    #[error("dangling `\\` at byte {at}")]
    DanglingEscape { at: usize },
}

/// Parse a textual pattern into an [`Expression`] over characters.
///
/// The syntax is glob-like, because a repetition absorbs a run of *any*
/// characters rather than repeating a sub-pattern: plain characters match
/// themselves, juxtaposition sequences, `|` alternates, `(`..`)` groups,
/// `*` is a greedy repetition, `*?` a lazy one, and `\` escapes the next
/// character.
pub fn parse_pattern(input: impl AsRef<str>) -> Result<Expression<char>, ParseError> {
    parse::parse(input.as_ref())
}
