use rstest::rstest;

use super::*;
use crate::IgnoreCase;

fn pattern(s: &str) -> Pattern {
    Pattern::new(s)
}

fn matches(pattern: &str, text: &str) -> bool {
    Pattern::new(pattern).matches(text)
}

fn tokens(s: &str) -> Vec<String> {
    pattern(s).tokens().map(|token| token.to_string()).collect()
}

#[test]
fn test_tokens_literal() {
    assert_eq!(tokens("ab"), [r#"literal "a""#, r#"literal "b""#]);
}

#[test]
fn test_tokens_wildcards() {
    assert_eq!(tokens("*?"), ["anything", "single"]);
    assert_eq!(tokens("***"), ["anything", "anything", "anything"]);
}

#[test]
fn test_tokens_escaped() {
    let p = pattern(r"\*\?\\\[");
    let tokens: Vec<_> = p.tokens().collect();
    assert_eq!(
        tokens,
        [Token::Literal(&'*'), Token::Literal(&'?'), Token::Literal(&'\\'), Token::Literal(&'[')]
    );
}

#[test]
fn test_tokens_trailing_escape() {
    let p = pattern(r"a\");
    let tokens: Vec<_> = p.tokens().collect();
    assert_eq!(tokens, [Token::Literal(&'a')]);
    assert_eq!(pattern(r"\").tokens().count(), 0);
}

#[rstest]
#[case("[abc]", r#"one of ["a", "b", "c"]"#)]
#[case("[!abc]", r#"none of ["a", "b", "c"]"#)]
#[case("[]]", r#"one of ["]"]"#)]
#[case("[!]]", r#"none of ["]"]"#)]
#[case("[!!]", r#"none of ["!"]"#)]
#[case("[a!]", r#"one of ["a", "!"]"#)]
fn test_tokens_set(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(tokens(input), [expected]);
}

#[test]
fn test_tokens_invalid_set() {
    assert_eq!(tokens("[ab"), [r#"literal "[""#, r#"literal "a""#, r#"literal "b""#]);
    assert_eq!(tokens("[!]"), [r#"literal "[""#, r#"literal "!""#, r#"literal "]""#]);
}

#[rstest]
#[case("[abc]x")]
#[case("[!abc]*")]
#[case("[]]?")]
#[case("[!]]")]
#[case("[!]")]
#[case("[]")]
#[case("[ab")]
#[case("a[[]b")]
#[case(r"\[a]")]
#[case(r"[\]]")]
#[case("[a]b[")]
fn test_tokens_agree_with_matcher(#[case] input: &str) {
    let p = pattern(input);
    let text: String = p
        .tokens()
        .map(|token| match token {
            Token::Anything => String::new(),
            Token::Single => "x".into(),
            Token::Literal(c) => c.to_string(),
            Token::Set { negated: false, members } => members[0].to_string(),
            Token::Set { negated: true, .. } => "#".into(),
        })
        .collect();
    assert!(p.matches(&text), "{:?} should match {:?}", input, text);
}

#[test]
fn test_tokens_sets_disabled() {
    let p = Pattern::with_cards("[a]", Cards::default().without_sets());
    assert_eq!(p.tokens().count(), 3);
    assert!(p.tokens().all(|token| matches!(token, Token::Literal(_))));
}

#[test]
fn test_tokens_composite() {
    assert_eq!(
        tokens(r"H?llo,*[!.]\*"),
        [
            r#"literal "H""#,
            "single",
            r#"literal "l""#,
            r#"literal "l""#,
            r#"literal "o""#,
            r#"literal ",""#,
            "anything",
            r#"none of ["."]"#,
            r#"literal "*""#,
        ]
    );
}

#[rstest]
#[case("hello", "hello", true)]
#[case("hello", "world", false)]
#[case("hello", "hell", false)]
#[case("hello", "helloo", false)]
fn test_exact_match(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("*", "")]
#[case("*", "anything")]
#[case("*", "multiple words")]
fn test_asterisk_match_any(#[case] pattern: &str, #[case] text: &str) {
    assert!(matches(pattern, text));
}

#[rstest]
#[case("*world", "world", true)]
#[case("*world", "hello world", true)]
#[case("*world", "xxxworld", true)]
#[case("*world", "world!", false)]
#[case("*world", "wor", false)]
fn test_asterisk_prefix(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("hello*", "hello", true)]
#[case("hello*", "hello world", true)]
#[case("hello*", "hell", false)]
#[case("hello*", "xhello", false)]
fn test_asterisk_suffix(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("foo*bar", "foobar", true)]
#[case("foo*bar", "fooxbar", true)]
#[case("foo*bar", "foo and bar", true)]
#[case("foo*bar", "foobarx", false)]
#[case("foo*bar", "xfoobar", false)]
#[case("foo*bar", "foo", false)]
fn test_asterisk_middle(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("*foo*bar*", "foobar", true)]
#[case("*foo*bar*", "prefix foo middle bar suffix", true)]
#[case("*foo*bar*", "foo", false)]
#[case("*foo*bar*", "barfoo", false)]
fn test_multiple_asterisks(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("???", "abc", true)]
#[case("???", "ab", false)]
#[case("???", "abcd", false)]
#[case("a?c", "axc", true)]
#[case("a?c", "ac", false)]
#[case("a*b?c", "aXXXbYc", true)]
#[case("a*b?c", "abc", false)]
fn test_question_marks(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case(r"\*", "*", true)]
#[case(r"\?", "?", true)]
#[case(r"\\", r"\", true)]
#[case(r"\[a]", "[a]", true)]
#[case(r"\*", "anything", false)]
#[case(r"\?", "a", false)]
fn test_escaped_special_chars(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[test]
fn test_trailing_backslash_is_ignored() {
    assert!(matches(r"foo\", "foo"));
    assert!(!matches(r"foo\", r"foo\"));
    assert!(matches(r"*\", r"test\"));
    assert!(matches(r"\", ""));
    assert!(!matches(r"\", r"\"));
}

#[rstest]
#[case("?", "ä")]
#[case("?", "世")]
#[case("?", "🔥")]
#[case("???", "äöü")]
#[case("???", "🔥💧🌊")]
#[case("*世界*", "hello世界world")]
#[case("🔥*💧", "🔥test💧")]
#[case("[äöü]", "ö")]
#[case("[!äöü]", "a")]
fn test_utf8(#[case] pattern: &str, #[case] text: &str) {
    assert!(matches(pattern, text));
}

#[test]
fn test_complex_patterns() {
    assert!(matches("*.txt", "path/to/file.txt"));
    assert!(!matches("*.txt", "file.pdf"));

    assert!(matches("test_*.log", "test_debug.log"));
    assert!(!matches("test_*.log", "debug.log"));

    assert!(matches("????-??-??", "2024-01-15"));
    assert!(!matches("????-??-??", "2024-1-15"));

    assert!(matches("[12][0123456789][0123456789][0123456789]-*", "2024-01-15"));
    assert!(!matches("[12][0123456789][0123456789][0123456789]-*", "3024-01-15"));
}

#[test]
fn test_backtracking() {
    assert!(matches("*.*.*", "a.b.c"));
    assert!(matches("*a*a*a*", "XaYaZa"));
    assert!(matches("*ab*cd", "ababcd"));
    assert!(matches("*foo*bar", "xfooxfooxbar"));
    assert!(matches("*aba*aba", "abaabaaba"));
    assert!(matches("*test*ing", "testesttesting"));
    assert!(!matches("*ab*xy", "ababab"));
    assert!(!matches("*a*b*c*d", "abca"));
    assert!(!matches("*abc*def", "abcabc"));
}

#[test]
fn test_pattern_with_only_wildcards() {
    assert!(matches("*?*", "x"));
    assert!(!matches("*?*", ""));
    assert!(matches("?*?", "ab"));
    assert!(!matches("?*?", "a"));
    assert!(matches("a*?*b", "aXb"));
    assert!(!matches("a*?*b", "ab"));
}

#[test]
fn test_matches_by() {
    let p = pattern("Error: *[!.]");
    assert!(p.matches_by("ERROR: disk full!", &IgnoreCase));
    assert!(!p.matches_by("ERROR: disk full.", &IgnoreCase));
    assert!(!p.matches("ERROR: disk full!"));
}

#[test]
fn test_custom_cards() {
    let p = Pattern::with_cards("%.rs", Cards::default().with_anything('%'));
    assert!(p.matches("main.rs"));
    assert!(!p.matches("main.go"));
    assert!(Pattern::with_cards("*.rs", Cards::default().with_anything('%')).matches("*.rs"));
}

#[test]
fn test_byte_patterns() {
    let p = Pattern::from_symbols(b"GET /*".to_vec(), Cards::default());
    assert!(p.matches_iter(b"GET /index.html".iter()));
    assert!(!p.matches_iter(b"POST /index.html".iter()));
    assert!(p.matches_iter_by("get /".bytes(), &IgnoreCase));
}

#[test]
fn test_matcher_reuse() {
    let p = pattern("*[0123456789]");
    let equal = Exact;
    let matcher = p.matcher(&equal);
    let selected: Vec<_> = ["a1", "b", "c22", ""].into_iter().filter(|s| matcher.matches(s.chars())).collect();
    assert_eq!(selected, ["a1", "c22"]);
}

#[rstest]
#[case("hello")]
#[case("*")]
#[case("foo*bar?")]
#[case(r"foo\*bar")]
#[case(r"foo\")]
#[case("[!abc]")]
fn test_display(#[case] input: &str) {
    assert_eq!(pattern(input).to_string(), input);
}

#[test]
fn test_default() {
    let p: Pattern = Pattern::default();
    assert!(p.matches(""));
    assert!(!p.matches("x"));
    assert_eq!(p, Pattern::from(""));
    assert_eq!(p.cards(), &Cards::default());
    assert!(p.symbols().is_empty());
}
