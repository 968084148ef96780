use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use wordforge_core::{GenerationConfig, PersonalInfo};
use wordforge_generate::{GenerationEngine, GenerationError, SourceKind, WordlistRequest};

fn run_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("wordlist.txt");
    (dir, output)
}

fn read_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .expect("output readable")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn capped_pattern_run_writes_exactly_the_cap() {
    let (_dir, output) = run_dir();
    let request = WordlistRequest {
        pattern: Some("?l?l?d?d".to_string()),
        config: GenerationConfig {
            max_words: Some(5),
            ..GenerationConfig::default()
        },
        output: output.clone(),
        ..WordlistRequest::default()
    };

    let result = GenerationEngine::new(request).run().expect("run succeeds");
    assert_eq!(result.report.words_written, 5);

    let lines = read_lines(&output);
    assert_eq!(lines.len(), 5);
    for line in &lines {
        assert_eq!(line.chars().count(), 4);
        let (letters, digits) = line.split_at(2);
        assert!(letters.chars().all(|c| c.is_ascii_lowercase()), "{line}");
        assert!(digits.chars().all(|c| c.is_ascii_digit()), "{line}");
    }
}

#[test]
fn cap_short_circuits_a_combinatorial_charset_walk() {
    let (_dir, output) = run_dir();
    // 26^12 possible words; the run must stop at the cap, not enumerate.
    let request = WordlistRequest {
        charset: Some("abcdefghijklmnopqrstuvwxyz".to_string()),
        config: GenerationConfig {
            max_words: Some(100),
            ..GenerationConfig::default()
        },
        output: output.clone(),
        ..WordlistRequest::default()
    };

    let result = GenerationEngine::new(request).run().expect("run succeeds");
    assert_eq!(result.report.words_written, 100);
    assert_eq!(result.report.sources[0].produced, 100);
    assert_eq!(read_lines(&output).len(), 100);
}

#[test]
fn seed_words_flow_through_the_transform_pipeline() {
    let (dir, output) = run_dir();
    let seed_path = dir.path().join("seeds.txt");
    fs::write(&seed_path, "abc\n\n  spaced  \n").expect("seed file written");

    let request = WordlistRequest {
        seed_file: Some(seed_path),
        config: GenerationConfig {
            prefix: Some("sec_".to_string()),
            suffix: Some("!".to_string()),
            ..GenerationConfig::default()
        },
        output: output.clone(),
        ..WordlistRequest::default()
    };

    GenerationEngine::new(request).run().expect("run succeeds");
    assert_eq!(read_lines(&output), vec!["sec_abc!", "sec_spaced!"]);
}

#[test]
fn words_are_deduplicated_across_sources() {
    let (dir, output) = run_dir();
    let seed_path = dir.path().join("seeds.txt");
    fs::write(&seed_path, "John\nJohn\nfresh\n").expect("seed file written");

    let request = WordlistRequest {
        profile: PersonalInfo {
            name: Some("John".to_string()),
            ..PersonalInfo::default()
        },
        seed_file: Some(seed_path),
        output: output.clone(),
        ..WordlistRequest::default()
    };

    GenerationEngine::new(request).run().expect("run succeeds");
    let lines = read_lines(&output);
    let distinct: HashSet<&String> = lines.iter().collect();
    assert_eq!(distinct.len(), lines.len());
    assert_eq!(lines.iter().filter(|w| *w == "John").count(), 1);
    assert!(lines.contains(&"fresh".to_string()));
}

#[test]
fn every_written_word_respects_the_length_bounds() {
    let (dir, output) = run_dir();
    let seed_path = dir.path().join("seeds.txt");
    fs::write(&seed_path, "ab\nabcd\ntoolongforthebounds\n").expect("seed file written");

    let request = WordlistRequest {
        seed_file: Some(seed_path),
        config: GenerationConfig {
            min_len: 3,
            max_len: 6,
            ..GenerationConfig::default()
        },
        output: output.clone(),
        ..WordlistRequest::default()
    };

    GenerationEngine::new(request).run().expect("run succeeds");
    let lines = read_lines(&output);
    assert_eq!(lines, vec!["abcd"]);
}

#[test]
fn sources_drain_in_fixed_order() {
    let (dir, output) = run_dir();
    let seed_path = dir.path().join("seeds.txt");
    fs::write(&seed_path, "seedword\n").expect("seed file written");

    let request = WordlistRequest {
        profile: PersonalInfo {
            name: Some("Lara".to_string()),
            ..PersonalInfo::default()
        },
        pattern: Some("?d?d?d?d".to_string()),
        seed_file: Some(seed_path),
        output,
        ..WordlistRequest::default()
    };

    let result = GenerationEngine::new(request).run().expect("run succeeds");
    let kinds: Vec<SourceKind> = result.report.sources.iter().map(|s| s.source).collect();
    assert_eq!(
        kinds,
        vec![SourceKind::Personal, SourceKind::Pattern, SourceKind::File]
    );
}

#[test]
fn no_configured_source_is_an_error() {
    let (_dir, output) = run_dir();
    let request = WordlistRequest {
        output,
        ..WordlistRequest::default()
    };
    let result = GenerationEngine::new(request).run();
    assert!(matches!(result, Err(GenerationError::NoInput)));
}

#[test]
fn all_filtered_out_is_an_error_and_leaves_no_file() {
    let (dir, output) = run_dir();
    let seed_path = dir.path().join("seeds.txt");
    fs::write(&seed_path, "ab\n").expect("seed file written");

    let request = WordlistRequest {
        seed_file: Some(seed_path),
        config: GenerationConfig {
            min_len: 10,
            max_len: 12,
            ..GenerationConfig::default()
        },
        output: output.clone(),
        ..WordlistRequest::default()
    };

    let result = GenerationEngine::new(request).run();
    assert!(matches!(result, Err(GenerationError::NoInput)));
    assert!(!output.exists());
}

#[test]
fn missing_seed_file_surfaces_the_path() {
    let (dir, output) = run_dir();
    let missing = dir.path().join("nope.txt");

    let request = WordlistRequest {
        seed_file: Some(missing.clone()),
        output,
        ..WordlistRequest::default()
    };

    match GenerationEngine::new(request).run() {
        Err(GenerationError::SeedFile { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected SeedFile error, got {other:?}"),
    }
}

#[test]
fn invalid_pattern_fails_before_any_output() {
    let (_dir, output) = run_dir();
    let request = WordlistRequest {
        pattern: Some("?z".to_string()),
        output: output.clone(),
        ..WordlistRequest::default()
    };

    let result = GenerationEngine::new(request).run();
    assert!(matches!(
        result,
        Err(GenerationError::Invalid(wordforge_core::Error::InvalidPattern(_)))
    ));
    assert!(!output.exists());
}

#[test]
fn inverted_range_fails_validation() {
    let (_dir, output) = run_dir();
    let request = WordlistRequest {
        charset: Some("ab".to_string()),
        config: GenerationConfig {
            min_len: 8,
            max_len: 2,
            ..GenerationConfig::default()
        },
        output,
        ..WordlistRequest::default()
    };

    let result = GenerationEngine::new(request).run();
    assert!(matches!(
        result,
        Err(GenerationError::Invalid(wordforge_core::Error::InvalidRange(_)))
    ));
}

#[test]
fn report_serializes_with_source_kinds() {
    let (_dir, output) = run_dir();
    let request = WordlistRequest {
        charset: Some("ab".to_string()),
        config: GenerationConfig {
            min_len: 1,
            max_len: 2,
            ..GenerationConfig::default()
        },
        output,
        ..WordlistRequest::default()
    };

    let result = GenerationEngine::new(request).run().expect("run succeeds");
    assert_eq!(result.report.words_written, 6);
    assert_eq!(result.report.bytes_written, 16);

    let json = serde_json::to_value(&result.report).expect("report serializes");
    assert_eq!(json["sources"][0]["source"], "charset");
    assert_eq!(json["sources"][0]["produced"], 6);
}
