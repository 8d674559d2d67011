// File: src/bin/translit/lexicon_store.rs
//! On-disk lexicon files for the command line. The library only ever sees
//! an in-memory `Lexicon`.
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;
use translit_core::Lexicon;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),
}

/// Writes `lexicon` to `path` atomically: the data goes to a temp file in
/// the same directory, which then replaces the target.
pub fn save_lexicon(lexicon: &Lexicon, path: &Path) -> Result<(), StoreError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, lexicon).map_err(StoreError::Serialize)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| StoreError::Io(e.error))?;
    debug!(path = %path.display(), "lexicon saved");
    Ok(())
}

pub fn load_lexicon(path: &Path) -> Result<Lexicon, StoreError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lexicon: Lexicon = bincode::deserialize_from(reader).map_err(StoreError::Deserialize)?;
    debug!(path = %path.display(), "lexicon loaded");
    Ok(lexicon)
}
