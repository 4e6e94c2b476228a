//! High-score persistence.
//!
//! The engine only speaks [`HighScoreStore`]; the binary wires up a
//! [`FileStore`] and the tests a [`MemoryStore`]. Storage failures never
//! surface as errors: a score that cannot be read or written degrades the
//! display, not the game.

use std::fs;
use std::path::{Path, PathBuf};

/// Abstract high-score storage.
///
/// `load` returns 0 when no score has ever been recorded and -1 when a
/// record exists but cannot be parsed, so callers can distinguish "fresh"
/// from "corrupt".
pub trait HighScoreStore {
    fn load(&mut self) -> i32;
    fn save(&mut self, score: u32);
}

/// File-backed store: a single ASCII decimal followed by a newline.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the file exists, seeding a missing one with "0\n".
    fn ensure_file(&self) -> bool {
        if self.path.exists() {
            return true;
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }
        fs::write(&self.path, "0\n").is_ok()
    }
}

impl HighScoreStore for FileStore {
    fn load(&mut self) -> i32 {
        if !self.ensure_file() {
            return 0;
        }
        match fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or(-1),
            Err(_) => 0,
        }
    }

    fn save(&mut self, score: u32) {
        if !self.ensure_file() {
            return;
        }
        let _ = fs::write(&self.path, format!("{score}\n"));
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: i32,
}

impl MemoryStore {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> i32 {
        self.value
    }

    fn save(&mut self, score: u32) {
        self.value = score as i32;
    }
}
