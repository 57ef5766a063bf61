/// Equal compares a sequence symbol with a literal or set member symbol of a pattern.
///
/// It is never used to detect cards, those are always compared with [`PartialEq`].
pub trait Equal<S: ?Sized> {
    fn equal(&self, symbol: &S, expected: &S) -> bool;
}

impl<S: ?Sized, F> Equal<S> for F
where
    F: Fn(&S, &S) -> bool,
{
    #[inline]
    fn equal(&self, symbol: &S, expected: &S) -> bool {
        self(symbol, expected)
    }
}

// ---

/// Exact compares symbols using [`PartialEq`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Exact;

impl<S: PartialEq + ?Sized> Equal<S> for Exact {
    #[inline]
    fn equal(&self, symbol: &S, expected: &S) -> bool {
        symbol == expected
    }
}

// ---

/// IgnoreCase compares symbols ignoring letter case.
///
/// Bytes are folded as ASCII, characters use simple lowercase mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreCase;

impl Equal<u8> for IgnoreCase {
    #[inline]
    fn equal(&self, symbol: &u8, expected: &u8) -> bool {
        symbol.eq_ignore_ascii_case(expected)
    }
}

impl Equal<char> for IgnoreCase {
    #[inline]
    fn equal(&self, symbol: &char, expected: &char) -> bool {
        if symbol.is_ascii() && expected.is_ascii() {
            return symbol.eq_ignore_ascii_case(expected);
        }
        symbol == expected || symbol.to_lowercase().eq(expected.to_lowercase())
    }
}
