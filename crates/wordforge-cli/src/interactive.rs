use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use wordforge_core::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, GenerationConfig, PersonalInfo};
use wordforge_generate::WordlistRequest;

/// Collect a full request by prompting on stdin, one field at a time.
///
/// Same fields and defaults as the CLI flags; empty answers skip optional
/// fields, numeric answers are re-prompted until they parse, and the output
/// path is required.
pub fn collect_request() -> io::Result<WordlistRequest> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("wordforge interactive mode (empty answer skips an optional field)");

    let profile = PersonalInfo {
        name: prompt(&mut input, "Name")?,
        phone: prompt(&mut input, "Phone number")?,
        dob: prompt(&mut input, "Date of birth (DD/MM/YYYY)")?,
        father_name: prompt(&mut input, "Father's name")?,
        mother_name: prompt(&mut input, "Mother's name")?,
        place: prompt(&mut input, "Place/city")?,
    };

    let pattern = prompt(&mut input, "Pattern (?l ?u ?d ?s ?a, e.g. ?l?l?d?d)")?;
    let charset = prompt(&mut input, "Charset to brute force")?;
    let seed_file = prompt(&mut input, "Seed word file")?.map(PathBuf::from);

    let min_len = prompt_number(&mut input, "Minimum word length", DEFAULT_MIN_LEN)?;
    let max_len = prompt_number(&mut input, "Maximum word length", DEFAULT_MAX_LEN)?;
    let max_words = prompt_cap(&mut input, "Maximum number of words (empty for unlimited)")?;
    let leetspeak = prompt_yes_no(&mut input, "Apply leetspeak? (y/n)")?;
    let prefix = prompt(&mut input, "Prefix")?;
    let suffix = prompt(&mut input, "Suffix")?;
    let output = prompt_required(&mut input, "Output file")?;

    Ok(WordlistRequest {
        profile,
        pattern,
        charset,
        seed_file,
        config: GenerationConfig {
            min_len,
            max_len,
            max_words,
            leetspeak,
            prefix,
            suffix,
        },
        output: PathBuf::from(output),
    })
}

fn ask(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    let answer = ask(input, label)?;
    Ok(if answer.is_empty() { None } else { Some(answer) })
}

fn prompt_required(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    loop {
        print!("{label}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{label} is required"),
            ));
        }
        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        println!("{label} is required");
    }
}

fn prompt_number(input: &mut impl BufRead, label: &str, default: usize) -> io::Result<usize> {
    loop {
        let answer = ask(input, label)?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("please enter a whole number"),
        }
    }
}

fn prompt_cap(input: &mut impl BufRead, label: &str) -> io::Result<Option<u64>> {
    loop {
        let answer = ask(input, label)?;
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("please enter a whole number"),
        }
    }
}

fn prompt_yes_no(input: &mut impl BufRead, label: &str) -> io::Result<bool> {
    let answer = ask(input, label)?.to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}
