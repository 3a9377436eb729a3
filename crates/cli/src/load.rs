// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading extracted documents from JSON files.
//!
//! Each file holds one [`SourceDocument`]. A document without an `id` is
//! identified by its path.

use std::fs;
use std::path::{Path, PathBuf};

use tl_core::{EventStore, SourceDocument};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

const DOCUMENT_EXTENSION: &str = "json";

/// Collect document files under `paths`, recursing into directories.
///
/// Files named explicitly are kept whatever their extension. Files found
/// in directories must end in `.json`. Each directory's files are sorted
/// so loading order is stable.
pub fn document_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let default = [PathBuf::from(".")];
    let roots = if paths.is_empty() { &default[..] } else { paths };

    let mut found = Vec::new();
    for root in roots {
        if root.is_file() {
            found.push(root.clone());
            continue;
        }
        if !root.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file or directory: {}", root.display()),
            )));
        }
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == DOCUMENT_EXTENSION))
            .collect();
        files.sort();
        found.extend(files);
    }
    Ok(found)
}

/// Read one document file.
pub fn load_document(path: &Path) -> Result<SourceDocument> {
    let text = fs::read_to_string(path)?;
    let mut document: SourceDocument =
        serde_json::from_str(&text).map_err(|source| Error::Document {
            path: path.display().to_string(),
            source,
        })?;
    if document.id.trim().is_empty() {
        document.id = path.display().to_string();
    }
    debug!(
        path = %path.display(),
        events = document.events.len(),
        "loaded document"
    );
    Ok(document)
}

/// Load every document under `paths` into a store.
///
/// A document id seen twice keeps its first position and its last content.
pub fn load_store(paths: &[PathBuf]) -> Result<EventStore> {
    let mut store = EventStore::new();
    for path in document_paths(paths)? {
        let document = load_document(&path)?;
        if store.replace(document.to_document()).is_some() {
            debug!(id = %document.id, "document replaced");
        }
    }
    Ok(store)
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
