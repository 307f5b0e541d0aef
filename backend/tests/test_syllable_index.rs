use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use akshara_backend::syllable_index::{output_paths, process_file, SyllableIndex};

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_counts_preserve_input_order_and_duplicates() {
    let words = owned(&["राम", "तम्", "राम"]);
    let index = SyllableIndex::build(&words);

    assert_eq!(index.counts.len(), 3);
    assert_eq!(index.counts[0].word, "राम");
    assert_eq!(index.counts[0].count, 2);
    assert_eq!(index.counts[1].word, "तम्");
    assert_eq!(index.counts[1].count, 2);
    assert_eq!(index.counts[2].word, "राम");
    assert_eq!(index.counts[2].count, 2);
}

#[test]
fn test_duplicate_words_listed_once_per_syllable() {
    let words = owned(&["राम", "राम"]);
    let index = SyllableIndex::build(&words);

    let forms = index.syllable_words.get("रा").expect("syllable रा missing");
    assert_eq!(forms.len(), 1);
    assert!(forms.contains("रा म"));
}

#[test]
fn test_index_consistency() {
    let words = owned(&["धर्मक्षेत्रे", "कुरुक्षेत्रे", "तम्", "अं"]);
    let index = SyllableIndex::build(&words);

    for (syllable, forms) in &index.syllable_words {
        for form in forms {
            let parts: Vec<&str> = form.split(' ').collect();
            assert!(
                parts.contains(&syllable.as_str()),
                "form {:?} listed under {:?} does not contain it",
                form,
                syllable
            );
        }
    }
}

#[test]
fn test_render_counts_format() {
    let words = owned(&["राम", "तम्"]);
    let index = SyllableIndex::build(&words);

    assert_eq!(index.render_counts(), "राम,2\nतम्,2\n");
}

#[test]
fn test_json_is_sorted_and_unescaped() {
    let words = owned(&["तम्"]);
    let index = SyllableIndex::build(&words);

    let json = index.render_json().expect("Can't encode JSON");
    // Non-ASCII characters are emitted literally
    assert!(json.contains("त"));
    assert!(!json.contains("\\u"));
    // 2-space indentation
    assert!(json.contains("\n  \""));
}

#[test]
fn test_output_paths_strip_extension() {
    let (counts, json) = output_paths(&PathBuf::from("corpus/gita-words.txt"));
    assert_eq!(counts, PathBuf::from("corpus/gita-words-counts.txt"));
    assert_eq!(json, PathBuf::from("corpus/gita-words-syllables.json"));
}

#[test]
fn test_process_file_end_to_end() {
    let dir = std::env::temp_dir().join(format!("akshara-e2e-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Can't create temp dir");

    let input_path = dir.join("words.txt");
    fs::write(&input_path, "राम\nतम्\n\n").expect("Can't write input file");

    process_file(&input_path).expect("process_file failed");

    let counts = fs::read_to_string(dir.join("words-counts.txt")).expect("counts file missing");
    assert_eq!(counts, "राम,2\nतम्,2\n");

    let json = fs::read_to_string(dir.join("words-syllables.json")).expect("json file missing");
    let parsed: BTreeMap<String, Vec<String>> =
        serde_json::from_str(&json).expect("Can't parse syllable index JSON");

    let expected_keys: Vec<&str> = vec!["त", "म", "म्", "रा"];
    let keys: Vec<&str> = parsed.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, expected_keys);

    assert_eq!(parsed["रा"], vec!["रा म"]);
    assert_eq!(parsed["म"], vec!["रा म"]);
    assert_eq!(parsed["त"], vec!["त म्"]);
    assert_eq!(parsed["म्"], vec!["त म्"]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_process_file_missing_input_is_fatal() {
    let dir = std::env::temp_dir().join(format!("akshara-missing-{}", std::process::id()));
    let input_path = dir.join("no-such-file.txt");

    let result = process_file(&input_path);
    assert!(result.is_err());

    // No partial outputs were created
    let (counts_path, json_path) = output_paths(&input_path);
    assert!(!counts_path.exists());
    assert!(!json_path.exists());
}
