//! Input loading from the data directory

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Line reader for inputs stored in a data directory.
///
/// File I/O stops here: the pipeline itself only ever sees the returned
/// lines, never a file handle.
pub struct InputStore {
    data_dir: PathBuf,
}

impl InputStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Full path of a named input file
    pub fn input_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Check whether a named input file exists
    pub fn contains(&self, name: &str) -> bool {
        self.input_path(name).exists()
    }

    /// Load a named input file as lines, with the trailing newline removed
    /// and surrounding whitespace stripped from each line
    pub fn read_lines(&self, name: &str) -> Result<Vec<String>, InputError> {
        let path = self.input_path(name);
        let content = fs::read_to_string(&path).map_err(|source| InputError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(content.lines().map(|line| line.trim().to_string()).collect())
    }

}
