use std::collections::HashSet;

use wordforge_core::GenerationConfig;

/// Streaming admission gate for finished words: enforces the length bounds,
/// deduplicates preserving arrival order (first occurrence wins), and caps
/// the stream at `max_words` distinct words.
///
/// Fullness must be checked during enumeration so upstream lazy generators
/// can be short-circuited instead of run to completion.
#[derive(Debug)]
pub struct Sieve {
    config: GenerationConfig,
    seen: HashSet<String>,
    admitted: u64,
}

impl Sieve {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            config: config.clone(),
            seen: HashSet::new(),
            admitted: 0,
        }
    }

    /// Admit `word` if it is within bounds, unseen, and under the cap.
    pub fn admit(&mut self, word: &str) -> bool {
        if self.is_full() || !self.config.within_bounds(word) {
            return false;
        }
        if !self.seen.insert(word.to_string()) {
            return false;
        }
        self.admitted += 1;
        true
    }

    /// True once `max_words` distinct words have been admitted.
    pub fn is_full(&self) -> bool {
        self.config
            .max_words
            .is_some_and(|cap| self.admitted >= cap)
    }

    pub fn admitted(&self) -> u64 {
        self.admitted
    }
}
