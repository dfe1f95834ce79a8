//! The translation table from folder words to key symbols
//!
//! Characters like `#` or `/` can't (portably) be used as folder names, so sound folders for
//! those keys are spelled out as words instead, e.g. `_/hash/` holds the samples for `#`.

/// Every known word and the key symbol it stands for
///
/// The symbols are written exactly as they end up in generated TOML. That's why `backslash`
/// maps to two backslashes: inside a quoted TOML string that decodes to a single `\`.
static TRANSLATIONS: [(&str, &str); 23] = [
    ("hyphen", "-"),
    ("hash", "#"),
    ("forwardslash", "/"),
    ("colon", ":"),
    ("percent", "%"),
    ("ampersand", "@"),
    ("dollar", "$"),
    ("1", "1"),
    ("2", "2"),
    ("3", "3"),
    ("4", "4"),
    ("exclamation", "!"),
    ("question", "?"),
    ("equals", "="),
    ("asterix", "*"),
    ("caret", "^"),
    ("semicolon", ";"),
    ("lessthan", "<"),
    ("at", "@"),
    ("bar", "|"),
    ("backslash", "\\\\"),
    ("plus", "+"),
    ("tilde", "~"),
];

/// Look up the key symbol for a folder word
///
/// Matching is exact, so `Hash` is not the same as `hash`.
pub fn translate(word: &str) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(candidate, _)| *candidate == word)
        .map(|(_, symbol)| *symbol)
}

/// Find all words that translate to a symbol, in table order
///
/// This is not a one-to-one mapping: both `ampersand` and `at` produce `@`.
pub fn words_for(symbol: &str) -> impl Iterator<Item = &'static str> + '_ {
    TRANSLATIONS
        .iter()
        .filter(move |(_, candidate)| *candidate == symbol)
        .map(|(word, _)| *word)
}

/// Iterate over every `(word, symbol)` pair in the table
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    TRANSLATIONS.iter().copied()
}
