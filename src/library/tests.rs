use super::scan::is_audio_file;
use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn is_audio_file_matches_known_extensions_case_insensitive() {
    assert!(is_audio_file(Path::new("/tmp/a.mp3")));
    assert!(is_audio_file(Path::new("/tmp/a.WAV")));
    assert!(is_audio_file(Path::new("/tmp/a.flac")));
    assert!(is_audio_file(Path::new("/tmp/a.ogg")));
    assert!(is_audio_file(Path::new("/tmp/a.m4a")));
    assert!(!is_audio_file(Path::new("/tmp/a.txt")));
    assert!(!is_audio_file(Path::new("/tmp/a")));
}

#[test]
fn scan_indexes_nested_audio_and_skips_other_files() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sleep");
    fs::create_dir_all(&sub).unwrap();
    fs::write(dir.path().join("focus1.wav"), b"not real").unwrap();
    fs::write(sub.join("Sleep3.WAV"), b"not real").unwrap();
    fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();

    let index = SoundIndex::scan(dir.path());
    assert_eq!(index.len(), 2);
    assert_eq!(index.root(), Some(dir.path()));
    assert_eq!(index.resolve("focus1.wav"), Some(dir.path().join("focus1.wav")));
    // Lookup is by file name, case-insensitive.
    assert_eq!(index.resolve("sleep3.wav"), Some(sub.join("Sleep3.WAV")));
    assert_eq!(index.resolve("notes.txt"), None);
}

#[test]
fn resolve_uses_file_name_of_url_like_locators() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("relax2.wav"), b"not real").unwrap();

    let index = SoundIndex::scan(dir.path());
    assert_eq!(
        index.resolve("https://example.com/relax2.wav"),
        Some(dir.path().join("relax2.wav"))
    );
}

#[test]
fn resolve_accepts_existing_paths_without_index() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("custom.ogg");
    fs::write(&file, b"not real").unwrap();

    let index = SoundIndex::empty();
    assert!(index.is_empty());
    assert_eq!(index.resolve(file.to_str().unwrap()), Some(file));
    assert_eq!(index.resolve("focus1.wav"), None);
}

#[test]
fn scan_of_missing_dir_is_empty() {
    let dir = tempdir().unwrap();
    let index = SoundIndex::scan(&dir.path().join("missing"));
    assert!(index.is_empty());
}

#[test]
fn duplicate_names_resolve_to_the_first_in_name_order() {
    let dir = tempdir().unwrap();
    for sub in ["b_second", "a_first", "c_third"] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
        fs::write(dir.path().join(sub).join("ocean.wav"), b"not real").unwrap();
    }

    let index = SoundIndex::scan(dir.path());
    assert_eq!(index.len(), 1);
    assert_eq!(
        index.resolve("ocean.wav"),
        Some(dir.path().join("a_first").join("ocean.wav"))
    );
}
