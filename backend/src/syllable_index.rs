//! Syllable index built over a corpus word list.
//!
//! One batch run reads a word-per-line input file, segments every word, and
//! writes two artifacts next to the input: a per-word syllable-count table
//! and a syllable-to-words JSON index.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::normalize::normalize_word;
use crate::segmenter::split_into_aksharas;

/// Per-word syllable count. One record per input line, input order
/// preserved, duplicates preserved.
#[derive(Debug)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// In-memory results of one corpus run.
///
/// The syllable map and its word-form sets are BTree collections so that
/// serialization order is deterministic: keys and values sort ascending by
/// code point.
#[derive(Debug, Default)]
pub struct SyllableIndex {
    pub counts: Vec<WordCount>,
    /// Akṣara text → distinct syllabified word forms containing it.
    pub syllable_words: BTreeMap<String, BTreeSet<String>>,
}

impl SyllableIndex {
    /// Segment every word and aggregate counts and the inverted index.
    pub fn build(words: &[String]) -> Self {
        let mut index = SyllableIndex::default();

        for word in words {
            let aksharas = split_into_aksharas(word);

            index.counts.push(WordCount {
                word: word.clone(),
                count: aksharas.len(),
            });

            let syllabified = aksharas.join(" ");

            for syl in aksharas {
                index
                    .syllable_words
                    .entry(syl)
                    .or_default()
                    .insert(syllabified.clone());
            }
        }

        index
    }

    /// Render the count table: `<word>,<count>` per line, input order.
    pub fn render_counts(&self) -> String {
        let mut out = String::new();
        for rec in &self.counts {
            out.push_str(&rec.word);
            out.push(',');
            out.push_str(&rec.count.to_string());
            out.push('\n');
        }
        out
    }

    /// Render the syllable index as pretty-printed JSON (2-space indent,
    /// non-ASCII characters emitted literally).
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.syllable_words)
            .context("Can't encode syllable index JSON")
    }
}

/// Read and normalize the input word list. Blank lines are skipped.
pub fn read_word_list(input_path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read word list: {:?}", input_path))?;

    let words: Vec<String> = content
        .lines()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect();

    Ok(words)
}

/// Derive the output file paths from the input file, stripping its extension.
pub fn output_paths(input_path: &Path) -> (PathBuf, PathBuf) {
    let base = input_path.with_extension("");
    let counts_path = PathBuf::from(format!("{}-counts.txt", base.display()));
    let json_path = PathBuf::from(format!("{}-syllables.json", base.display()));
    (counts_path, json_path)
}

/// Run the full pipeline for one input file.
///
/// Both artifacts are rendered in memory after a successful whole-file read,
/// so a read failure leaves no partial output behind.
pub fn process_file(input_path: &Path) -> Result<()> {
    let words = read_word_list(input_path)?;
    info!("Read {} words from {:?}", words.len(), input_path);

    let index = SyllableIndex::build(&words);

    let counts_text = index.render_counts();
    let json_text = index.render_json()?;

    let (counts_path, json_path) = output_paths(input_path);

    fs::write(&counts_path, counts_text)
        .with_context(|| format!("Failed to write count table: {:?}", counts_path))?;

    fs::write(&json_path, json_text)
        .with_context(|| format!("Failed to write syllable index: {:?}", json_path))?;

    info!(
        "Wrote {} word counts and {} distinct syllables",
        index.counts.len(),
        index.syllable_words.len()
    );

    Ok(())
}
