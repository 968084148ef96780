use std::sync::OnceLock;

/// Characters of the `?l` class.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Characters of the `?u` class.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Characters of the `?d` class.
pub const DIGITS: &str = "0123456789";
/// Characters of the `?s` class, in ASCII order.
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Character class a placeholder token resolves to.
///
/// Class contents are fixed: a-z, A-Z, 0-9, the punctuation subset above,
/// and `Any` as their concatenation in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
    Any,
}

impl CharClass {
    /// Resolve the letter following `?` in a pattern.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'l' => Some(CharClass::Lower),
            'u' => Some(CharClass::Upper),
            'd' => Some(CharClass::Digit),
            's' => Some(CharClass::Special),
            'a' => Some(CharClass::Any),
            _ => None,
        }
    }

    /// The characters of this class, in their fixed order.
    pub fn chars(&self) -> &'static str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
            CharClass::Any => any_chars(),
        }
    }

    /// Number of characters in this class.
    pub fn cardinality(&self) -> usize {
        self.chars().len()
    }
}

fn any_chars() -> &'static str {
    static ANY: OnceLock<String> = OnceLock::new();
    ANY.get_or_init(|| format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SPECIAL}"))
}

/// Leetspeak substitutions, case-sensitive on lowercase keys.
///
/// One deterministic replacement per key; characters outside the table pass
/// through unchanged.
pub const LEET_TABLE: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('g', '9'),
    ('i', '1'),
    ('l', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Substitute for a single character, if the table maps it.
pub fn leet(c: char) -> Option<char> {
    LEET_TABLE
        .iter()
        .find(|(plain, _)| *plain == c)
        .map(|(_, replacement)| *replacement)
}
