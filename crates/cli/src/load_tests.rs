// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn directories_are_walked_in_sorted_order() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "b.json", "{}");
    write(temp.path(), "a.json", "{}");
    write(temp.path(), "nested/c.json", "{}");
    write(temp.path(), "notes.md", "# not a document");

    let paths = document_paths(&[temp.path().to_path_buf()]).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
            PathBuf::from("nested/c.json")
        ]
    );
}

#[test]
fn explicit_file_kept_regardless_of_extension() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "doc.txt", "{}");
    assert_eq!(document_paths(&[path.clone()]).unwrap(), vec![path]);
}

#[test]
fn missing_path_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = document_paths(&[temp.path().join("missing")]).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn id_defaults_to_path() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "doc.json", r#"{"events": [{"name": "a"}]}"#);
    let document = load_document(&path).unwrap();
    assert_eq!(document.id, path.display().to_string());
    assert_eq!(document.events.len(), 1);
}

#[test]
fn explicit_id_kept() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "doc.json", r#"{"id": "notes/war.md"}"#);
    assert_eq!(load_document(&path).unwrap().id, "notes/war.md");
}

#[test]
fn malformed_document_names_its_path() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "bad.json", "{ not json");
    match load_document(&path).unwrap_err() {
        Error::Document { path: reported, .. } => assert_eq!(reported, path.display().to_string()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn store_keeps_document_order_and_last_content() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "1.json", r#"{"id": "x", "events": [{"name": "old"}]}"#);
    write(temp.path(), "2.json", r#"{"id": "y", "events": [{"name": "y1"}]}"#);
    write(temp.path(), "3.json", r#"{"id": "x", "events": [{"name": "new"}]}"#);

    let store = load_store(&[temp.path().to_path_buf()]).unwrap();
    let ids: Vec<_> = store.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y"]);
    let names: Vec<_> = store.events().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["new", "y1"]);
}
