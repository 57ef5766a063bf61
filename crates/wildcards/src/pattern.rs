// std imports
use std::borrow::Borrow;
use std::fmt;

// local imports
use crate::{Cards, Equal, Exact, Matcher, set};

/// A wildcard pattern owning its symbols and cards.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
/// - `[abc]` matches exactly one of the listed characters, `[!abc]` any other character
/// - `\` escapes the next character (and is ignored at the end of a pattern)
///
/// # Examples
///
/// ```
/// use wildcards::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test[0123456789].log");
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Pattern<S = char> {
    symbols: Vec<S>,
    cards: Cards<S>,
}

impl Pattern<char> {
    /// Creates a new pattern from a string using default cards.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// A `[` that does not start a well-formed set is matched literally.
    ///
    /// ```
    /// use wildcards::Pattern;
    ///
    /// let pattern = Pattern::new(r"file\*.txt");
    /// assert!(pattern.matches("file*.txt"));
    /// assert!(!pattern.matches("file123.txt"));
    ///
    /// let pattern = Pattern::new("[abc");
    /// assert!(pattern.matches("[abc"));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::with_cards(raw, Cards::default())
    }

    /// Creates a new pattern from a string using the given cards.
    pub fn with_cards(raw: impl AsRef<str>, cards: Cards<char>) -> Self {
        Self::from_symbols(raw.as_ref().chars().collect(), cards)
    }

    #[inline]
    /// Tests whether the pattern matches the whole text.
    ///
    /// ```
    /// use wildcards::Pattern;
    ///
    /// let pattern = Pattern::new("??");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        self.matches_iter(text.chars())
    }

    #[inline]
    /// Tests whether the pattern matches the whole text using a custom equality predicate.
    ///
    /// ```
    /// use wildcards::{IgnoreCase, Pattern};
    ///
    /// let pattern = Pattern::new("*.[ch]");
    /// assert!(pattern.matches_by("MAIN.C", &IgnoreCase));
    /// ```
    pub fn matches_by<E>(&self, text: &str, equal: &E) -> bool
    where
        E: Equal<char> + ?Sized,
    {
        self.matches_iter_by(text.chars(), equal)
    }
}

impl<S: PartialEq> Pattern<S> {
    pub fn from_symbols(symbols: Vec<S>, cards: Cards<S>) -> Self {
        Self { symbols, cards }
    }

    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    pub fn cards(&self) -> &Cards<S> {
        &self.cards
    }

    /// Returns the pattern split into tokens the way the matcher interprets it.
    ///
    /// ```
    /// use wildcards::{Pattern, Token};
    ///
    /// let pattern = Pattern::new(r"a\*[!xy]");
    /// let tokens: Vec<_> = pattern.tokens().collect();
    /// assert_eq!(tokens, [
    ///     Token::Literal(&'a'),
    ///     Token::Literal(&'*'),
    ///     Token::Set { negated: true, members: &['x', 'y'][..] },
    /// ]);
    /// ```
    pub fn tokens(&self) -> Tokens<'_, S> {
        Tokens {
            symbols: &self.symbols,
            cards: &self.cards,
            p: 0,
        }
    }

    /// Binds the pattern to an equality predicate for repeated matching.
    pub fn matcher<'a, E>(&'a self, equal: &'a E) -> Matcher<'a, S, E>
    where
        E: Equal<S> + ?Sized,
    {
        Matcher::new(&self.symbols, &self.cards, equal)
    }

    /// Tests whether the pattern matches the whole sequence of symbols.
    pub fn matches_iter<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Borrow<S>,
    {
        self.matches_iter_by(sequence, &Exact)
    }

    /// Tests whether the pattern matches the whole sequence of symbols using a custom equality predicate.
    pub fn matches_iter_by<I, E>(&self, sequence: I, equal: &E) -> bool
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Borrow<S>,
        E: Equal<S> + ?Sized,
    {
        self.matcher(equal).matches(sequence)
    }
}

impl<S> Default for Pattern<S>
where
    Cards<S>: Default,
{
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            cards: Cards::default(),
        }
    }
}

impl From<&str> for Pattern<char> {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Pattern<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.symbols {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

// ---

/// A pattern element as seen by the matcher.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a, S> {
    /// Zero or more arbitrary symbols.
    Anything,
    /// Exactly one arbitrary symbol.
    Single,
    /// A symbol compared literally, either plain or escaped.
    Literal(&'a S),
    /// Exactly one symbol that is (or is not, if negated) one of the members.
    Set { negated: bool, members: &'a [S] },
}

impl<S: fmt::Display> fmt::Display for Token<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anything => write!(f, "anything"),
            Self::Single => write!(f, "single"),
            Self::Literal(symbol) => write!(f, "literal {:?}", symbol.to_string()),
            Self::Set { negated, members } => {
                write!(f, "{} [", if *negated { "none of" } else { "one of" })?;
                for (i, member) in members.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", member.to_string())?;
                }
                write!(f, "]")
            }
        }
    }
}

// ---

/// Iterator over the tokens of a [`Pattern`].
pub struct Tokens<'a, S> {
    symbols: &'a [S],
    cards: &'a Cards<S>,
    p: usize,
}

impl<'a, S: PartialEq> Iterator for Tokens<'a, S> {
    type Item = Token<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let symbols = self.symbols;
        let cards = self.cards;
        let symbol = symbols.get(self.p)?;
        self.p += 1;

        if *symbol == cards.anything {
            return Some(Token::Anything);
        }

        if *symbol == cards.single {
            return Some(Token::Single);
        }

        if *symbol == cards.escape {
            let escaped = symbols.get(self.p)?;
            self.p += 1;
            return Some(Token::Literal(escaped));
        }

        if cards.set_enabled && *symbol == cards.set_open && set::is_set(symbols, self.p, cards) {
            let end = match set::skip_set(symbols, self.p, cards) {
                Ok(end) => end,
                Err(err) => {
                    log::error!("set at pattern position {} passed validation but failed to skip: {}", self.p - 1, err);
                    self.p = symbols.len();
                    return None;
                }
            };
            let body = &symbols[self.p..end - 1];
            self.p = end;
            let (negated, members) = match body.split_first() {
                Some((first, rest)) if *first == cards.set_not => (true, rest),
                _ => (false, body),
            };
            return Some(Token::Set { negated, members });
        }

        Some(Token::Literal(symbol))
    }
}

#[cfg(test)]
mod tests;
