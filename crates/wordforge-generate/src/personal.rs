use wordforge_core::PersonalInfo;

const COMMON_SUFFIXES: &[&str] = &[
    "123", "1234", "12345", "!", "@", "#", "123!", "2023", "2024", "2025",
];
const COMMON_PREFIXES: &[&str] = &["@", "#", "my"];

/// Candidate words derived from a profile.
///
/// The sequence is deterministic and stable across runs: populated field
/// values first, then per-word forms (case variants, common affixes, DOB and
/// phone attachments in both orders), then pairwise field concatenations in
/// both orders. Duplicates are left in; the limiter deduplicates downstream.
pub fn combine(profile: &PersonalInfo) -> Vec<String> {
    let mut words = Vec::new();

    let fields = profile.field_values();
    words.extend(fields.iter().cloned());

    let mut base_words = Vec::new();
    for field in profile.name_fields() {
        for form in case_forms(field) {
            if !base_words.contains(&form) {
                base_words.push(form);
            }
        }
    }

    let dob_forms = profile.dob_forms();
    let phone_forms = profile.phone_forms();

    for word in &base_words {
        words.push(word.clone());
        for suffix in COMMON_SUFFIXES {
            words.push(format!("{word}{suffix}"));
        }
        for prefix in COMMON_PREFIXES {
            words.push(format!("{prefix}{word}"));
        }
        for dob in &dob_forms {
            words.push(format!("{word}{dob}"));
            words.push(format!("{dob}{word}"));
        }
        for phone in &phone_forms {
            words.push(format!("{word}{phone}"));
            words.push(format!("{phone}{word}"));
        }
    }

    for (index, first) in fields.iter().enumerate() {
        for second in fields.iter().skip(index + 1) {
            words.push(format!("{first}{second}"));
            words.push(format!("{second}{first}"));
        }
    }

    words
}

fn case_forms(value: &str) -> [String; 4] {
    [
        value.to_string(),
        value.to_lowercase(),
        value.to_uppercase(),
        capitalize(value),
    ]
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
