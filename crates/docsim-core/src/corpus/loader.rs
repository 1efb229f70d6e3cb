//! Corpus discovery: enumerate and read documents from a directory

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{DocsimError, Result};

/// A discovered document before tokenization
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Index in enumeration order, 1-based
    pub index: usize,
    /// External identifier (file name)
    pub id: String,
    /// Full text content
    pub text: String,
}

/// Enumerate the regular files directly under `dir`, sorted by file name,
/// and read each as UTF-8 text.
///
/// Indices are assigned in enumeration order, 1-based; sorting makes the
/// assignment reproducible across platforms. Any unreadable file aborts the
/// load: dropping a document would leave the IDF table computed over a
/// different corpus than the one reported.
pub fn load_documents(dir: &Path) -> Result<Vec<RawDocument>> {
    if !dir.exists() {
        return Err(DocsimError::CorpusDirNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(DocsimError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            DocsimError::Other(format!("failed to list {}: {}", dir.display(), e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let id = entry.file_name().to_string_lossy().into_owned();
        let text = std::fs::read_to_string(entry.path()).map_err(|e| {
            DocsimError::UnreadableDocument {
                path: entry.path().to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        documents.push(RawDocument {
            index: documents.len() + 1,
            id,
            text,
        });
    }

    debug!(dir = %dir.display(), count = documents.len(), "load_documents");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_loads_files_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "<TEXT>two</TEXT>").unwrap();
        fs::write(dir.path().join("a.txt"), "<TEXT>one</TEXT>").unwrap();
        fs::write(dir.path().join("c.txt"), "<TEXT>three</TEXT>").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a.txt", "b.txt", "c.txt"]);
        let indices: Vec<_> = docs.iter().map(|d| d.index).collect();
        assert_eq!(indices, [1, 2, 3]);
        assert_eq!(docs[0].text, "<TEXT>one</TEXT>");
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("doc.txt"), "<TEXT>one</TEXT>").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.txt"), "<TEXT>x</TEXT>").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "doc.txt");
    }

    #[test]
    fn test_missing_directory_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = load_documents(&missing).unwrap_err();
        assert!(matches!(err, DocsimError::CorpusDirNotFound { .. }));
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.txt");
        fs::write(&file, "<TEXT>one</TEXT>").unwrap();
        let err = load_documents(&file).unwrap_err();
        assert!(matches!(err, DocsimError::NotADirectory { .. }));
    }

    #[test]
    fn test_unreadable_document_aborts_the_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.txt"), "<TEXT>fine</TEXT>").unwrap();
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0xfd]).unwrap();

        let err = load_documents(dir.path()).unwrap_err();
        assert!(matches!(err, DocsimError::UnreadableDocument { .. }));
    }

    #[test]
    fn test_empty_directory_yields_no_documents() {
        let dir = tempfile::tempdir().unwrap();
        let docs = load_documents(dir.path()).unwrap();
        assert!(docs.is_empty());
    }
}
