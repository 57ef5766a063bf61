//! Set handling state machines.
//!
//! A set is `set_open [set_not] member+ set_close`. The first member may be any symbol, including
//! `set_close`, so `[]]` is a set containing `]` and `[!]]` is a set containing anything but `]`.
//!
//! All functions here take `p` as the position right after `set_open`.

// local imports
use crate::{Cards, Equal, Error, Result};

// ---

/// Tests whether a well-formed set starts at `p`, without consuming any input.
///
/// Returns `false` if sets are disabled or the pattern ends before a closing symbol.
///
/// ```
/// use wildcards::{Cards, set::is_set};
///
/// let cards = Cards::default();
/// assert!(is_set(&['a', ']'], 0, &cards));
/// assert!(!is_set(&['a', 'b'], 0, &cards));
/// ```
pub fn is_set<S: PartialEq>(pattern: &[S], p: usize, cards: &Cards<S>) -> bool {
    cards.set_enabled && scan(pattern, p, cards).is_some()
}

/// Returns the position right after the closing symbol of the set starting at `p`.
///
/// The caller is expected to validate the set with [`is_set`] first.
pub fn skip_set<S: PartialEq>(pattern: &[S], p: usize, cards: &Cards<S>) -> Result<usize> {
    if !cards.set_enabled {
        return Err(Error::SetsDisabled);
    }

    scan(pattern, p, cards).ok_or(Error::InvalidSet { position: p })
}

/// Matches a single sequence symbol against the set starting at `p`.
///
/// Returns the position right after the closing symbol if `symbol` is accepted by the set,
/// or `None` if it is not or if there is no symbol at all.
pub fn match_set<S, E>(symbol: Option<&S>, pattern: &[S], p: usize, cards: &Cards<S>, equal: &E) -> Result<Option<usize>>
where
    S: PartialEq,
    E: Equal<S> + ?Sized,
{
    if !cards.set_enabled {
        return Err(Error::SetsDisabled);
    }

    let mut state = MatchSetState::NotOrFirstIn;
    for (i, member) in pattern.iter().enumerate().skip(p) {
        match state.step(symbol, member, cards, equal) {
            Step::Continue(next) => state = next,
            Step::Done(true) => return Ok(Some(i + 1)),
            Step::Done(false) => return Ok(None),
        }
    }

    Err(Error::InvalidSet { position: p })
}

// ---

fn scan<S: PartialEq>(pattern: &[S], p: usize, cards: &Cards<S>) -> Option<usize> {
    let mut state = SetState::Open;
    for (i, symbol) in pattern.iter().enumerate().skip(p) {
        match state.step(symbol, cards) {
            Step::Continue(next) => state = next,
            Step::Done(()) => return Some(i + 1),
        }
    }

    None
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<St, R> {
    Continue(St),
    Done(R),
}

// ---

/// Syntax of a set, shared by validation and skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetState {
    Open,
    First,
    Next,
}

impl SetState {
    fn step<S: PartialEq>(self, symbol: &S, cards: &Cards<S>) -> Step<Self, ()> {
        match self {
            Self::Open if *symbol == cards.set_not => Step::Continue(Self::First),
            Self::Open | Self::First => Step::Continue(Self::Next),
            Self::Next if *symbol == cards.set_close => Step::Done(()),
            Self::Next => Step::Continue(Self::Next),
        }
    }
}

// ---

/// Evaluation of a set against one sequence symbol.
///
/// `In` states belong to inclusion mode and `Out` states to negation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchSetState {
    NotOrFirstIn,
    FirstOut,
    SkipNextIn,
    NextIn,
    NextOut,
}

impl MatchSetState {
    fn step<S, E>(self, symbol: Option<&S>, member: &S, cards: &Cards<S>, equal: &E) -> Step<Self, bool>
    where
        S: PartialEq,
        E: Equal<S> + ?Sized,
    {
        let hit = || symbol.is_some_and(|symbol| equal.equal(symbol, member));

        match self {
            Self::NotOrFirstIn if *member == cards.set_not => Step::Continue(Self::FirstOut),
            Self::NotOrFirstIn => {
                if symbol.is_none() {
                    Step::Done(false)
                } else if hit() {
                    Step::Continue(Self::SkipNextIn)
                } else {
                    Step::Continue(Self::NextIn)
                }
            }
            Self::NextIn => {
                if *member == cards.set_close || symbol.is_none() {
                    Step::Done(false)
                } else if hit() {
                    Step::Continue(Self::SkipNextIn)
                } else {
                    Step::Continue(Self::NextIn)
                }
            }
            Self::FirstOut => {
                if symbol.is_none() || hit() {
                    Step::Done(false)
                } else {
                    Step::Continue(Self::NextOut)
                }
            }
            Self::SkipNextIn => {
                if *member == cards.set_close {
                    Step::Done(true)
                } else {
                    Step::Continue(Self::SkipNextIn)
                }
            }
            Self::NextOut => {
                if *member == cards.set_close {
                    Step::Done(true)
                } else if symbol.is_none() || hit() {
                    Step::Done(false)
                } else {
                    Step::Continue(Self::NextOut)
                }
            }
        }
    }
}
