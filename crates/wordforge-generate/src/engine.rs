use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::charset::CharsetWalker;
use crate::errors::GenerationError;
use crate::model::{GenerationReport, SourceKind, SourceReport, WordlistRequest};
use crate::output::write_wordlist;
use crate::pattern::Pattern;
use crate::personal;
use crate::seeds::load_seed_words;
use crate::sieve::Sieve;
use crate::transforms::TransformPipeline;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub output: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for assembling a wordlist from a request.
///
/// Sources are drained in fixed order (personal, pattern, charset, file),
/// one word at a time through the transform pipeline and the limiter, so a
/// combinatorially huge source is cut off the moment the cap is reached.
#[derive(Debug)]
pub struct GenerationEngine {
    request: WordlistRequest,
}

type WordSource = (SourceKind, Box<dyn Iterator<Item = String>>);

impl GenerationEngine {
    pub fn new(request: WordlistRequest) -> Self {
        Self { request }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();

        self.request.config.validate()?;
        let sources = self.build_sources()?;
        if sources.is_empty() {
            return Err(GenerationError::NoInput);
        }

        let pipeline = TransformPipeline::from_config(&self.request.config);
        let mut sieve = Sieve::new(&self.request.config);
        let mut words = Vec::new();
        let mut source_reports = Vec::new();

        info!(
            run_id = %run_id,
            sources = sources.len(),
            transforms = ?pipeline.ids(),
            max_words = self.request.config.max_words,
            "generation started"
        );

        for (kind, source) in sources {
            let mut produced = 0_u64;
            let admitted_before = sieve.admitted();

            for word in source {
                produced += 1;
                let finished = pipeline.apply(word);
                if sieve.admit(&finished) {
                    words.push(finished);
                }
                if sieve.is_full() {
                    break;
                }
            }

            let admitted = sieve.admitted() - admitted_before;
            info!(source = %kind, produced, admitted, "source drained");
            source_reports.push(SourceReport {
                source: kind,
                produced,
                admitted,
            });

            if sieve.is_full() {
                debug!(source = %kind, "word cap reached, remaining sources skipped");
                break;
            }
        }

        if words.is_empty() {
            return Err(GenerationError::NoInput);
        }

        let bytes_written =
            write_wordlist(&self.request.output, &words).map_err(|source| {
                GenerationError::OutputFile {
                    path: self.request.output.clone(),
                    source,
                }
            })?;

        let report = GenerationReport {
            run_id: run_id.clone(),
            started_at,
            sources: source_reports,
            words_written: words.len() as u64,
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            run_id = %run_id,
            words = report.words_written,
            bytes_written,
            duration_ms = report.duration_ms,
            output = %self.request.output.display(),
            "generation completed"
        );

        Ok(GenerationResult {
            output: self.request.output.clone(),
            report,
        })
    }

    fn build_sources(&self) -> Result<Vec<WordSource>, GenerationError> {
        let mut sources: Vec<WordSource> = Vec::new();

        if !self.request.profile.is_empty() {
            let candidates = personal::combine(&self.request.profile);
            debug!(candidates = candidates.len(), "personal info combined");
            sources.push((SourceKind::Personal, Box::new(candidates.into_iter())));
        }

        if let Some(raw) = self.request.pattern.as_deref() {
            let pattern = Pattern::parse(raw)?;
            debug!(pattern = raw, cardinality = %pattern.cardinality(), "pattern parsed");
            sources.push((SourceKind::Pattern, Box::new(pattern.words())));
        }

        if let Some(charset) = self.request.charset.as_deref() {
            let walker = CharsetWalker::new(
                charset,
                self.request.config.min_len,
                self.request.config.max_len,
            )?;
            debug!(alphabet = walker.alphabet().len(), "charset walk prepared");
            sources.push((SourceKind::Charset, Box::new(walker)));
        }

        if let Some(path) = self.request.seed_file.as_ref() {
            let seeds = load_seed_words(path)?;
            debug!(seeds = seeds.len(), path = %path.display(), "seed file loaded");
            sources.push((SourceKind::File, Box::new(seeds.into_iter())));
        }

        Ok(sources)
    }
}
