use wordforge_core::{CharClass, Error, Result};

/// One position of a parsed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// A placeholder position ranging over a character class.
    Class(CharClass),
    /// A literal character copied unchanged.
    Literal(char),
}

/// A placeholder pattern parsed into typed tokens.
///
/// `?` introduces a placeholder and must be followed by one of
/// `l u d s a`; every other character is a literal.
#[derive(Debug, Clone)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
}

impl Pattern {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c != '?' {
                tokens.push(PatternToken::Literal(c));
                continue;
            }
            let Some(symbol) = chars.next() else {
                return Err(Error::InvalidPattern(
                    "truncated placeholder at end of pattern".to_string(),
                ));
            };
            let Some(class) = CharClass::from_symbol(symbol) else {
                return Err(Error::InvalidPattern(format!(
                    "unrecognized placeholder '?{symbol}'"
                )));
            };
            tokens.push(PatternToken::Class(class));
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Number of distinct words the pattern denotes: the product of the
    /// class sizes, with literals contributing a factor of one.
    pub fn cardinality(&self) -> u128 {
        self.tokens
            .iter()
            .map(|token| match token {
                PatternToken::Class(class) => class.cardinality() as u128,
                PatternToken::Literal(_) => 1,
            })
            .product()
    }

    /// Lazy enumeration of every word the pattern denotes, in odometer
    /// order: the rightmost placeholder varies fastest.
    pub fn words(&self) -> PatternWords {
        let positions: Vec<Vec<char>> = self
            .tokens
            .iter()
            .map(|token| match token {
                PatternToken::Class(class) => class.chars().chars().collect(),
                PatternToken::Literal(c) => vec![*c],
            })
            .collect();
        let indices = vec![0; positions.len()];
        PatternWords {
            positions,
            indices,
            exhausted: false,
        }
    }
}

/// Iterator over a pattern's words. A pattern with zero placeholders yields
/// exactly its literal string once.
#[derive(Debug)]
pub struct PatternWords {
    positions: Vec<Vec<char>>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Iterator for PatternWords {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let word: String = self
            .positions
            .iter()
            .zip(&self.indices)
            .map(|(choices, &index)| choices[index])
            .collect();

        let mut slot = self.indices.len();
        loop {
            if slot == 0 {
                self.exhausted = true;
                break;
            }
            slot -= 1;
            self.indices[slot] += 1;
            if self.indices[slot] < self.positions[slot].len() {
                break;
            }
            self.indices[slot] = 0;
        }

        Some(word)
    }
}
