use crate::initialism::upper_initialism;

const DIGIT_WORDS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Returns a copy of `s` with its first char mapped to lower case.
///
/// Only the first char is touched, so multi-byte scripts work as expected:
///
/// ```
/// assert_eq!(mixedcase::lower_first("HELLO"), "hELLO");
/// assert_eq!(mixedcase::lower_first("Δέλτα"), "δέλτα");
/// ```
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper cases the first char of every whitespace separated word.
/// The remaining chars keep their case.
pub fn title(s: &str) -> String {
    let mut titled = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        match (word_start, c.is_whitespace()) {
            (_, true) => titled.push(c),
            (true, false) => titled.extend(c.to_uppercase()),
            (false, false) => titled.push(c),
        }
        word_start = c.is_whitespace();
    }
    titled
}

/// If `s` starts with an ascii digit, spells that digit out and title cases
/// the rest, which now counts as a separate word. Otherwise `s` is returned
/// as is.
///
/// Only the first digit is spelled: `"123abc"` becomes `"One23abc"`.
pub fn spell_leading_digit(s: &str) -> String {
    let mut chars = s.chars();
    let word = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|digit| DIGIT_WORDS[digit as usize]);

    match word {
        Some(word) => format!("{}{}", word, upper_initialism(&title(chars.as_str()))),
        None => s.to_owned(),
    }
}

/// Byte offset of the first char that can start an identifier.
/// `s.len()` when there is no such char.
pub(crate) fn discard_start(s: &str) -> usize {
    s.find(|c| !should_discard(c)).unwrap_or(s.len())
}

fn should_discard(c: char) -> bool {
    matches!(
        c,
        '~' | '!' | '@' | '#' | '$' | '%' | '^' | '&' | '*' | '-' | '_' | '=' | '+' | ':' | '.'
            | '<' | '>'
    )
}
