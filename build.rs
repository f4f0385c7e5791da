//! Build script to embed the game word lists
//!
//! Reads the answer pool and the extra allowed guesses, then generates const
//! arrays. The allowed list is the union of both files so every answer is
//! always a legal guess.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let answers = read_words("data/answers.txt");
    let extra = read_words("data/allowed_extra.txt");

    // Union keeps answers guessable even if the extra file drifts
    let mut allowed: BTreeSet<String> = answers.iter().cloned().collect();
    allowed.extend(extra);

    write_word_list(
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Target words a round can be seeded with",
        answers.iter().map(String::as_str),
        answers.len(),
    );
    write_word_list(
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "Every word accepted as a guess (superset of the answers)",
        allowed.iter().map(String::as_str),
        allowed.len(),
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed_extra.txt");
}

fn read_words(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut seen = BTreeSet::new();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_lowercase)
        .inspect(|word| {
            assert!(
                word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
                "{input_path}: invalid word '{word}'"
            );
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

fn write_word_list<'a>(
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
    words: impl Iterator<Item = &'a str>,
    count: usize,
) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
