use wordforge_core::{GenerationConfig, alphabet};

/// A pure word rewrite step. Steps run in the fixed order the pipeline was
/// assembled in; words are values, never mutated in place.
pub trait WordTransform {
    fn id(&self) -> &'static str;
    fn apply(&self, word: String) -> String;
}

/// Transform chain assembled from the run configuration:
/// leetspeak substitution, then prefix/suffix.
pub struct TransformPipeline {
    steps: Vec<Box<dyn WordTransform>>,
}

impl TransformPipeline {
    pub fn from_config(config: &GenerationConfig) -> Self {
        let mut steps: Vec<Box<dyn WordTransform>> = Vec::new();
        if config.leetspeak {
            steps.push(Box::new(Leetspeak));
        }
        let affix = Affix {
            prefix: config.prefix.clone().unwrap_or_default(),
            suffix: config.suffix.clone().unwrap_or_default(),
        };
        if !affix.prefix.is_empty() || !affix.suffix.is_empty() {
            steps.push(Box::new(affix));
        }
        Self { steps }
    }

    pub fn apply(&self, word: String) -> String {
        self.steps.iter().fold(word, |word, step| step.apply(word))
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.id()).collect()
    }
}

/// Whole-word, single-pass, case-sensitive leetspeak substitution.
struct Leetspeak;

impl WordTransform for Leetspeak {
    fn id(&self) -> &'static str {
        "transform.leetspeak"
    }

    fn apply(&self, word: String) -> String {
        word.chars()
            .map(|c| alphabet::leet(c).unwrap_or(c))
            .collect()
    }
}

struct Affix {
    prefix: String,
    suffix: String,
}

impl WordTransform for Affix {
    fn id(&self) -> &'static str {
        "transform.affix"
    }

    fn apply(&self, word: String) -> String {
        format!("{}{}{}", self.prefix, word, self.suffix)
    }
}
