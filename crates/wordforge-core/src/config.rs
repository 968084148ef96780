use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default minimum word length.
pub const DEFAULT_MIN_LEN: usize = 4;
/// Default maximum word length.
pub const DEFAULT_MAX_LEN: usize = 12;

/// Options driving filtering and termination of a generation run.
///
/// Threaded through every generator and the limiter as an immutable value;
/// nothing mutates it once a run starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Minimum length of an emitted word, in characters.
    pub min_len: usize,
    /// Maximum length of an emitted word, in characters.
    pub max_len: usize,
    /// Cap on the number of distinct words emitted. `None` means unlimited.
    pub max_words: Option<u64>,
    /// Apply leetspeak substitution to every word.
    pub leetspeak: bool,
    /// Literal prepended to every word.
    pub prefix: Option<String>,
    /// Literal appended to every word.
    pub suffix: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            max_words: None,
            leetspeak: false,
            prefix: None,
            suffix: None,
        }
    }
}

impl GenerationConfig {
    /// Reject impossible length ranges before generation starts.
    pub fn validate(&self) -> Result<()> {
        if self.min_len > self.max_len {
            return Err(Error::InvalidRange(format!(
                "min_len {} exceeds max_len {}",
                self.min_len, self.max_len
            )));
        }
        Ok(())
    }

    /// Whether a finished word satisfies the length bounds.
    pub fn within_bounds(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.min_len && len <= self.max_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GenerationConfig::default();
        assert_eq!(config.min_len, 4);
        assert_eq!(config.max_len, 12);
        assert_eq!(config.max_words, None);
        assert!(!config.leetspeak);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = GenerationConfig {
            min_len: 9,
            max_len: 3,
            ..GenerationConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidRange(_))));
    }

    #[test]
    fn bounds_count_characters_not_bytes() {
        let config = GenerationConfig {
            min_len: 4,
            max_len: 4,
            ..GenerationConfig::default()
        };
        assert!(config.within_bounds("héllo".trim_end_matches('o')));
        assert!(!config.within_bounds("hello"));
    }
}
