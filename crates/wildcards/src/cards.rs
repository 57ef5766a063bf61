/// Cards defines which symbols have a special meaning in a pattern.
///
/// The default configuration for `char` and `u8` symbols uses the usual glob syntax:
///
/// | Card        | Symbol | Meaning                                        |
/// |-------------|--------|------------------------------------------------|
/// | `anything`  | `*`    | zero or more arbitrary symbols                 |
/// | `single`    | `?`    | exactly one arbitrary symbol                   |
/// | `escape`    | `\`    | next pattern symbol is compared literally      |
/// | `set_open`  | `[`    | opens a set of members matching one symbol     |
/// | `set_close` | `]`    | closes a set                                   |
/// | `set_not`   | `!`    | negates a set if it directly follows `[`       |
///
/// Any subset of the cards can be overridden:
///
/// ```
/// use wildcards::{Cards, matches_with, Exact};
///
/// let cards = Cards { anything: '%', single: '_', ..Cards::default() };
/// assert!(matches_with("hello".chars(), &['h', '_', '%'], &cards, &Exact));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cards<S> {
    pub anything: S,
    pub single: S,
    pub escape: S,
    pub set_open: S,
    pub set_close: S,
    pub set_not: S,
    pub set_enabled: bool,
}

impl<S> Cards<S> {
    /// Creates cards with sets enabled.
    pub fn new(anything: S, single: S, escape: S, set_open: S, set_close: S, set_not: S) -> Self {
        Self {
            anything,
            single,
            escape,
            set_open,
            set_close,
            set_not,
            set_enabled: true,
        }
    }

    pub fn with_anything(self, anything: S) -> Self {
        Self { anything, ..self }
    }

    pub fn with_single(self, single: S) -> Self {
        Self { single, ..self }
    }

    pub fn with_escape(self, escape: S) -> Self {
        Self { escape, ..self }
    }

    pub fn with_set(self, set_open: S, set_close: S, set_not: S) -> Self {
        Self {
            set_open,
            set_close,
            set_not,
            set_enabled: true,
            ..self
        }
    }

    pub fn with_sets_enabled(self, set_enabled: bool) -> Self {
        Self { set_enabled, ..self }
    }

    /// Returns the same cards with sets disabled, so that set symbols are matched literally.
    pub fn without_sets(self) -> Self {
        self.with_sets_enabled(false)
    }
}

impl Default for Cards<char> {
    fn default() -> Self {
        Self::new('*', '?', '\\', '[', ']', '!')
    }
}

impl Default for Cards<u8> {
    fn default() -> Self {
        Self::new(b'*', b'?', b'\\', b'[', b']', b'!')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_char_cards() {
        let cards = Cards::<char>::default();
        assert_eq!(cards.anything, '*');
        assert_eq!(cards.single, '?');
        assert_eq!(cards.escape, '\\');
        assert_eq!((cards.set_open, cards.set_close, cards.set_not), ('[', ']', '!'));
        assert!(cards.set_enabled);
    }

    #[test]
    fn test_default_byte_cards() {
        let cards = Cards::<u8>::default();
        assert_eq!(cards, Cards::new(b'*', b'?', b'\\', b'[', b']', b'!'));
    }

    #[test]
    fn test_overrides() {
        let cards = Cards::default().with_anything('%').with_single('_').without_sets();
        assert_eq!(cards.anything, '%');
        assert_eq!(cards.single, '_');
        assert_eq!(cards.escape, '\\');
        assert!(!cards.set_enabled);

        let cards = cards.with_set('{', '}', '^');
        assert_eq!((cards.set_open, cards.set_close, cards.set_not), ('{', '}', '^'));
        assert!(cards.set_enabled);
    }
}
