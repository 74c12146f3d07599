//! Line-oriented chunking for labeled regulatory documents.
//!
//! Documents in scope are label-structured plain text: a line carrying a `:`
//! introduces a new labeled clause, and everything accumulated since the
//! previous label is one retrievable unit.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Corpus;

/// Splits raw document text into chunk texts.
///
/// Lines are trimmed; blank lines are skipped. A line containing `:` closes
/// the running accumulator (when non-empty) and starts a new chunk from that
/// line; any other line is appended space-joined. The trailing accumulator
/// flushes at end of input. A colon on the first content line does not open
/// a new chunk. Emitted texts are non-empty and carry no surrounding
/// whitespace.
pub fn split_source_text(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.contains(':') && !current.is_empty() {
            chunks.push(std::mem::replace(&mut current, line.to_string()));
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Reads a source document as UTF-8, falling back to lossy decoding for
/// files with stray non-UTF-8 bytes.
pub fn load_document(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(path)?).to_string()),
    }
}

fn list_txt_files(root: &Path) -> Vec<PathBuf> {
    let mut txt_files = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            txt_files.push(path.to_path_buf());
        }
    }
    txt_files.sort();
    txt_files
}

impl Corpus {
    /// Chunks `text` and appends the results under the `source` label.
    pub fn add_document(&mut self, text: &str, source: &str) {
        let texts = split_source_text(text);
        tracing::debug!(source, chunks = texts.len(), "chunked document");
        for t in texts {
            self.push_text(t, source);
        }
    }

    /// Loads and chunks a single document file under the given label.
    pub fn add_file(&mut self, path: &Path, source: &str) -> Result<()> {
        let content = load_document(path)?;
        self.add_document(&content, source);
        Ok(())
    }

    /// Walks `dir` for `.txt` files in sorted order and adds each one with
    /// its file stem as the source label. Returns the number of files added.
    pub fn add_directory(&mut self, dir: &Path) -> Result<usize> {
        let files = list_txt_files(dir);
        for path in &files {
            let source = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "misc".to_string());
            self.add_file(path, &source)?;
        }
        Ok(files.len())
    }
}
