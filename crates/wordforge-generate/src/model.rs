use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use wordforge_core::{GenerationConfig, PersonalInfo};

/// Full input to one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordlistRequest {
    /// Personal information to combine.
    pub profile: PersonalInfo,
    /// Placeholder pattern, e.g. `?l?l?d?d`.
    pub pattern: Option<String>,
    /// Custom alphabet for the brute-force walk.
    pub charset: Option<String>,
    /// Plain-text seed file, one word per line.
    pub seed_file: Option<PathBuf>,
    /// Filtering and transformation options.
    pub config: GenerationConfig,
    /// Destination path for the finished wordlist.
    pub output: PathBuf,
}

/// Kind of word source, in the fixed order sources are drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Personal,
    Pattern,
    Charset,
    File,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Personal => "personal",
            SourceKind::Pattern => "pattern",
            SourceKind::Charset => "charset",
            SourceKind::File => "file",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-source accounting for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: SourceKind,
    /// Words the source yielded before filtering.
    pub produced: u64,
    /// Words that survived the pipeline and the limiter.
    pub admitted: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub sources: Vec<SourceReport>,
    pub words_written: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
