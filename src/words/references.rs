//! Proper-noun references
//!
//! A reference is a run of capitalised words, such as a character or place
//! name. A word containing `,` or `.` closes the run it belongs to.

use std::collections::HashSet;

use super::{extract_words, is_title, sanitize_word};

/// References in one line, in order of appearance
pub fn extract_references(line: &str) -> Vec<String> {
    let mut references = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for word in extract_words(line) {
        let in_run = is_title(&word);
        let closes_run = word.contains([',', '.']);
        if in_run {
            run.push(word);
        }
        if !in_run || closes_run {
            flush_run(&mut run, &mut references);
        }
    }
    flush_run(&mut run, &mut references);
    references
}

fn flush_run(run: &mut Vec<String>, references: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let reference = sanitize_word(&run.join(" "));
    run.clear();
    if !reference.is_empty() {
        references.push(reference);
    }
}

/// Every distinct reference in the document, first occurrence first,
/// leaving out anything on the banned list
pub fn collect_references(lines: &[String], banned: &[String]) -> Vec<String> {
    let banned: HashSet<&str> = banned.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    lines
        .iter()
        .map(String::as_str)
        .flat_map(extract_references)
        .filter(|reference| !banned.contains(reference.as_str()))
        .filter(|reference| seen.insert(reference.clone()))
        .collect()
}
