use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::Document;
use crate::error::{Error, Result};

/// Reads every regular file directly inside `dir`, ordered by file name.
///
/// The file name becomes the document name. With `expected` set, any other
/// number of files is an error.
pub fn load_directory(dir: &Path, expected: Option<usize>) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_missing_target(&e) => {
                debug!(path = ?e.path(), "Skipping entry with missing target");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let bytes = fs::read(entry.path())?;
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!(name = %name, bytes = bytes.len(), "Loaded document");

        documents.push(Document::new(
            name,
            String::from_utf8_lossy(&bytes).into_owned(),
        ));
    }

    if let Some(expected) = expected {
        if documents.len() != expected {
            return Err(Error::DocumentCount {
                expected,
                found: documents.len(),
            });
        }
    }

    info!(
        path = %dir.display(),
        documents = documents.len(),
        "Loaded corpus"
    );

    Ok(documents)
}

/// A dangling symlink directly inside the corpus directory.
fn is_missing_target(e: &walkdir::Error) -> bool {
    e.depth() == 1 && e.io_error().map(std::io::Error::kind) == Some(ErrorKind::NotFound)
}
