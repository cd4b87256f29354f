//! CSV roster ingestion used to seed the broker directory and score table.

mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

pub use parser::RosterEntry;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Empty,
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster file: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::Empty => write!(f, "roster file contains no rows"),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::Empty => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads roster rows, keeping the first row for each broker id.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterImportError> {
        let mut entries = Vec::new();
        let mut seen: HashSet<u32> = HashSet::new();

        for entry in parser::parse_entries(reader)? {
            if !seen.insert(entry.profile.id.0) {
                continue;
            }
            entries.push(entry);
        }

        if entries.is_empty() {
            return Err(RosterImportError::Empty);
        }

        Ok(entries)
    }
}
