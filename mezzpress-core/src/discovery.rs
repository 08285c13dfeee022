//! File discovery module for finding video files to process.
//!
//! This module walks the input directory tree depth-first and collects the
//! files whose extension marks them as convertible source material: raw
//! camera captures (`.braw`) and general-purpose containers (`.mov`),
//! matched case-insensitively.

use std::fs;
use std::path::{Path, PathBuf};

/// Extension category of a discovered source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCategory {
    /// Raw camera capture (`.braw`); always eligible for conversion.
    Raw,
    /// General-purpose container (`.mov`); eligible only when its video
    /// stream carries a ProRes-family codec.
    Container,
    /// Any other extension. Discovery never returns these; the category
    /// exists so downstream code can reject a stray file defensively.
    Unsupported,
}

/// A discovered source file with its derived extension category.
///
/// Immutable once created; identity is the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    path: PathBuf,
    category: SourceCategory,
}

impl MediaFile {
    /// Derives the category from the path's extension (case-insensitive).
    pub fn from_path(path: PathBuf) -> Self {
        let category = match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("braw") => SourceCategory::Raw,
            Some("mov") => SourceCategory::Container,
            _ => SourceCategory::Unsupported,
        };
        Self { path, category }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn category(&self) -> SourceCategory {
        self.category
    }
}

/// Finds convertible video files under `input_dir` by depth-first traversal.
///
/// Entries within each directory are visited in file-name order, so repeated
/// runs over an unchanged tree yield the same sequence. Directories that
/// cannot be listed are logged and skipped; a single unreadable subtree
/// never aborts the scan. A root with no matches yields an empty vector.
///
/// The root itself not existing is a caller concern: it is validated at the
/// command surface before the pipeline starts, and an unreadable root here
/// degrades to a warning plus an empty result like any other directory.
/// Symbolic-link cycles are not guarded against.
pub fn find_convertible_files(input_dir: &Path) -> Vec<MediaFile> {
    let mut files = Vec::new();
    scan_directory(input_dir, &mut files);
    files
}

fn scan_directory(dir: &Path, files: &mut Vec<MediaFile>) {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            log::warn!("Could not scan directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut entries: Vec<PathBuf> = read_dir
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .collect();
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    for path in entries {
        if path.is_dir() {
            log::debug!("Scanning subfolder: {}", path.display());
            scan_directory(&path, files);
        } else if path.is_file() {
            let file = MediaFile::from_path(path);
            if file.category() != SourceCategory::Unsupported {
                files.push(file);
            }
        }
    }
}
