// std imports
use std::borrow::Borrow;
use std::collections::HashSet;

// local imports
use crate::{Cards, Equal, Exact, set};

// ---

/// Tests whether the whole `sequence` matches the whole `pattern` using default cards.
///
/// ```
/// use wildcards::matches;
///
/// let pattern: Vec<char> = "H?llo,*W*!".chars().collect();
/// assert!(matches("Hello, World!".chars(), &pattern));
/// assert!(!matches("Hallo, world!".chars(), &pattern));
/// ```
pub fn matches<S, I>(sequence: I, pattern: &[S]) -> bool
where
    S: PartialEq,
    Cards<S>: Default,
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Borrow<S>,
{
    matches_with(sequence, pattern, &Cards::default(), &Exact)
}

/// Tests whether the whole `sequence` matches the whole `pattern` using default cards
/// and a custom equality predicate for literals and set members.
///
/// ```
/// use wildcards::{matches_by, IgnoreCase};
///
/// assert!(matches_by("README.MD".bytes(), b"readme.[mM]d", &IgnoreCase));
/// ```
pub fn matches_by<S, I, E>(sequence: I, pattern: &[S], equal: &E) -> bool
where
    S: PartialEq,
    Cards<S>: Default,
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Borrow<S>,
    E: Equal<S> + ?Sized,
{
    matches_with(sequence, pattern, &Cards::default(), equal)
}

/// Tests whether the whole `sequence` matches the whole `pattern` using the given cards
/// and equality predicate.
pub fn matches_with<S, I, E>(sequence: I, pattern: &[S], cards: &Cards<S>, equal: &E) -> bool
where
    S: PartialEq,
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Borrow<S>,
    E: Equal<S> + ?Sized,
{
    Matcher::new(pattern, cards, equal).matches(sequence)
}

// ---

/// Matcher binds a pattern to its cards and equality predicate.
///
/// Backtracking over `anything` cards is driven by an explicit work-list, so the native stack
/// does not grow with the input. Each (sequence, pattern) position pair at an `anything` card
/// is explored at most once.
pub struct Matcher<'a, S, E: ?Sized> {
    pattern: &'a [S],
    cards: &'a Cards<S>,
    equal: &'a E,
}

impl<'a, S, E> Matcher<'a, S, E>
where
    S: PartialEq,
    E: Equal<S> + ?Sized,
{
    pub fn new(pattern: &'a [S], cards: &'a Cards<S>, equal: &'a E) -> Self {
        Self { pattern, cards, equal }
    }

    pub fn matches<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Borrow<S>,
    {
        let mut pending = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(Cursor {
            sequence: sequence.into_iter(),
            s: 0,
            p: 0,
        });

        while let Some(cursor) = next {
            if self.advance(cursor, &mut pending, &mut visited) {
                return true;
            }
            next = pending.pop();
        }

        log::trace!("no match after exploring {} anything positions", visited.len());
        false
    }

    /// Follows a single branch until it either succeeds or fails,
    /// queueing the alternatives discovered on the way.
    fn advance<I>(&self, cursor: Cursor<I>, pending: &mut Vec<Cursor<I>>, visited: &mut HashSet<(usize, usize)>) -> bool
    where
        I: Iterator + Clone,
        I::Item: Borrow<S>,
    {
        let Cursor { mut sequence, mut s, mut p } = cursor;
        let cards = self.cards;
        let mut escape = false;

        while let Some(symbol) = self.pattern.get(p) {
            if escape {
                escape = false;
                if !self.literal(&mut sequence, symbol) {
                    return false;
                }
                s += 1;
                p += 1;
            } else if *symbol == cards.anything {
                if !visited.insert((s, p)) {
                    return false;
                }
                let mut longer = sequence.clone();
                if longer.next().is_some() {
                    pending.push(Cursor {
                        sequence: longer,
                        s: s + 1,
                        p,
                    });
                }
                p += 1;
            } else if *symbol == cards.single {
                if sequence.next().is_none() {
                    return false;
                }
                s += 1;
                p += 1;
            } else if *symbol == cards.escape {
                escape = true;
                p += 1;
            } else if cards.set_enabled && *symbol == cards.set_open && set::is_set(self.pattern, p + 1, cards) {
                let item = sequence.next();
                let symbol = item.as_ref().map(<I::Item as Borrow<S>>::borrow);
                match set::match_set(symbol, self.pattern, p + 1, cards, self.equal) {
                    Ok(Some(next)) => {
                        s += 1;
                        p = next;
                    }
                    Ok(None) => return false,
                    Err(err) => {
                        log::error!("set at pattern position {} passed validation but failed to match: {}", p, err);
                        return false;
                    }
                }
            } else {
                if cards.set_enabled && *symbol == cards.set_open {
                    log::trace!("no valid set at pattern position {}, matching it literally", p);
                }
                if !self.literal(&mut sequence, symbol) {
                    return false;
                }
                s += 1;
                p += 1;
            }
        }

        sequence.next().is_none()
    }

    #[inline]
    fn literal<I>(&self, sequence: &mut I, expected: &S) -> bool
    where
        I: Iterator,
        I::Item: Borrow<S>,
    {
        sequence
            .next()
            .is_some_and(|symbol| self.equal.equal(symbol.borrow(), expected))
    }
}

// ---

struct Cursor<I> {
    sequence: I,
    s: usize,
    p: usize,
}
