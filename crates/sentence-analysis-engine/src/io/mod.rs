use crate::models::{Passage, PassageSource};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse passage file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Unsupported passage format: {0} (expected .toml or .txt)")]
    UnsupportedFormat(PathBuf),
}

/// Read a passage source from a `.toml` document or a `.txt` file with one
/// sentence per line.
pub fn read_source(path: &Path) -> Result<PassageSource, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let format = path.extension().and_then(|ext| ext.to_str());
    let source = match format {
        Some("toml") => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|source| IoError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        }
        Some("txt") => PassageSource::from_lines(&fs::read_to_string(path)?),
        _ => return Err(IoError::UnsupportedFormat(path.to_path_buf())),
    };

    log::debug!(
        "Loaded {} sentence(s) from {}",
        source.sentences.len(),
        path.display()
    );
    Ok(source)
}

/// Read and analyse a passage file.
pub fn read_passage(path: &Path) -> Result<Passage, IoError> {
    let source = read_source(path)?;
    let passage = Passage::analyze(&source);

    let unbalanced = passage.unbalanced().count();
    if unbalanced > 0 {
        log::warn!(
            "{} sentence(s) in {} have unbalanced clause delimiters",
            unbalanced,
            path.display()
        );
    }
    Ok(passage)
}

/// Validate that a passage file can be opened by [`read_passage`].
pub fn validate_passage_path(path: &Path) -> Result<(), IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml" | "txt") => Ok(()),
        _ => Err(IoError::UnsupportedFormat(path.to_path_buf())),
    }
}
