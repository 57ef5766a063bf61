//! Generic wildcard matching.
//!
//! This crate matches whole sequences of symbols against patterns made of literal symbols and
//! cards. The symbols are usually characters or bytes, but any type with [`PartialEq`] works.
//!
//! # Features
//!
//! - **Configurable cards**: every special symbol can be reassigned, sets can be disabled
//! - **Custom equality**: literals and set members are compared with a pluggable predicate,
//!   e.g. [`IgnoreCase`]
//! - **Bounded stack**: backtracking uses an explicit work-list and never recurses
//! - **Lenient syntax**: a `[` that does not start a well-formed set is matched literally
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more symbols
//! - `?` - Matches exactly one symbol
//! - `[abc]` - Matches exactly one symbol equal to any of the members
//! - `[!abc]` - Matches exactly one symbol equal to none of the members
//! - `\x` - Matches `x` literally, a trailing `\` is ignored
//! - Any other symbol matches itself
//!
//! The first member of a set is always literal, so `[]]` matches `]` and `[!]]` matches anything else.
//!
//! # Examples
//!
//! ```
//! use wildcards::Pattern;
//!
//! let pattern = Pattern::new("H?llo,*W*!");
//! assert!(pattern.matches("Hello, World!"));
//! assert!(pattern.matches("Hallo, crazy WildCards!"));
//! assert!(!pattern.matches("Hallo, world!"));
//!
//! let pattern = Pattern::new("*.[!o]");
//! assert!(pattern.matches("main.c"));
//! assert!(!pattern.matches("main.o"));
//! ```
//!
//! Matching arbitrary symbols with custom cards:
//!
//! ```
//! use wildcards::{Cards, Exact, matches_with};
//!
//! let cards = Cards::new(0, -1, -2, -3, -4, -5);
//! assert!(matches_with([7, 8, 9, 42], &[7, 0, 42], &cards, &Exact));
//! assert!(matches_with([7, 2], &[7, -3, 1, 2, -4], &cards, &Exact));
//! ```

mod cards;
mod equal;
mod error;
mod matcher;
mod pattern;

pub mod set;

pub use cards::*;
pub use equal::*;
pub use error::*;
pub use matcher::*;
pub use pattern::*;
