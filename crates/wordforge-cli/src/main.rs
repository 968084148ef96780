mod interactive;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use wordforge_core::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, GenerationConfig, PersonalInfo};
use wordforge_generate::{GenerationEngine, GenerationError, WordlistRequest};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "wordforge",
    version,
    about = "Candidate password wordlist generator"
)]
struct Cli {
    /// Target's name.
    #[arg(long)]
    name: Option<String>,
    /// Phone number; non-digits are stripped.
    #[arg(long)]
    phone: Option<String>,
    /// Date of birth, DD/MM/YYYY.
    #[arg(long)]
    dob: Option<String>,
    /// Father's name.
    #[arg(long)]
    father_name: Option<String>,
    /// Mother's name.
    #[arg(long)]
    mother_name: Option<String>,
    /// Place or city name.
    #[arg(long)]
    place: Option<String>,
    /// Placeholder pattern: ?l ?u ?d ?s ?a plus literals, e.g. ?l?l?d?d.
    #[arg(short, long)]
    pattern: Option<String>,
    /// Custom character set to brute force within the length range.
    #[arg(short, long)]
    charset: Option<String>,
    /// Read seed words from a file, one per line.
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Minimum word length.
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    min_len: usize,
    /// Maximum word length.
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,
    /// Maximum number of words to emit.
    #[arg(long)]
    max_words: Option<u64>,
    /// Apply leetspeak substitutions (a->4, e->3, ...).
    #[arg(long, default_value_t = false)]
    leetspeak: bool,
    /// Prepend a literal to every word.
    #[arg(long)]
    prefix: Option<String>,
    /// Append a literal to every word.
    #[arg(long)]
    suffix: Option<String>,
    /// Output file path.
    #[arg(short, long)]
    output: PathBuf,
}

impl Cli {
    fn into_request(self) -> WordlistRequest {
        WordlistRequest {
            profile: PersonalInfo {
                name: self.name,
                phone: self.phone,
                dob: self.dob,
                father_name: self.father_name,
                mother_name: self.mother_name,
                place: self.place,
            },
            pattern: self.pattern,
            charset: self.charset,
            seed_file: self.file,
            config: GenerationConfig {
                min_len: self.min_len,
                max_len: self.max_len,
                max_words: self.max_words,
                leetspeak: self.leetspeak,
                prefix: self.prefix,
                suffix: self.suffix,
            },
            output: self.output,
        }
    }
}

fn main() -> Result<(), CliError> {
    logging::init();

    // No arguments at all means interactive mode, mirroring the flag set.
    let request = if std::env::args().len() <= 1 {
        interactive::collect_request()?
    } else {
        Cli::parse().into_request()
    };
    debug!(output = %request.output.display(), "request assembled");

    let result = GenerationEngine::new(request).run()?;
    println!(
        "{} words written to {}",
        result.report.words_written,
        result.output.display()
    );
    Ok(())
}
