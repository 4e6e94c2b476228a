//! File-backed high-score store behavior on a real filesystem.

use std::fs;
use std::path::PathBuf;

use brick_tetris::core::{FileStore, HighScoreStore};

/// Fresh scratch directory per test so runs never interfere.
struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new(tag: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "brick-tetris-store-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

#[test]
fn missing_file_loads_zero_and_is_created() {
    let scratch = Scratch::new("missing");
    let path = scratch.file("highscore.txt");

    let mut store = FileStore::new(&path);
    assert_eq!(store.load(), 0);

    // The record now exists, seeded with a zero score.
    assert_eq!(fs::read_to_string(&path).unwrap(), "0\n");
}

#[test]
fn missing_parent_directories_are_created() {
    let scratch = Scratch::new("nested");
    let path = scratch.file("deep/nested/highscore.txt");

    let mut store = FileStore::new(&path);
    assert_eq!(store.load(), 0);
    assert!(path.exists());
}

#[test]
fn save_then_load_round_trips() {
    let scratch = Scratch::new("roundtrip");
    let mut store = FileStore::new(scratch.file("highscore.txt"));

    store.save(1500);
    assert_eq!(store.load(), 1500);

    // The on-disk format is a bare decimal plus newline.
    assert_eq!(
        fs::read_to_string(scratch.file("highscore.txt")).unwrap(),
        "1500\n"
    );
}

#[test]
fn garbage_content_loads_the_sentinel() {
    let scratch = Scratch::new("garbage");
    let path = scratch.file("highscore.txt");
    fs::write(&path, "not a number\n").unwrap();

    let mut store = FileStore::new(&path);
    assert_eq!(store.load(), -1);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let scratch = Scratch::new("whitespace");
    let path = scratch.file("highscore.txt");
    fs::write(&path, "  4200 \n\n").unwrap();

    let mut store = FileStore::new(&path);
    assert_eq!(store.load(), 4200);
}

#[test]
fn unwritable_location_degrades_to_zero() {
    let scratch = Scratch::new("blocked");
    // The "parent directory" is a regular file, so the record can never be
    // created. Load falls back to zero and save is a silent no-op.
    let blocker = scratch.file("blocker");
    fs::write(&blocker, "").unwrap();
    let path = blocker.join("highscore.txt");

    let mut store = FileStore::new(&path);
    assert_eq!(store.load(), 0);
    store.save(999);
    assert_eq!(store.load(), 0);
}
