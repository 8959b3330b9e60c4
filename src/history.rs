use crate::round::Outcome;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::{fs, io::ErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("failed to access history file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("history file {} is not valid: {source}", .path.display())]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no history ids left after {0}")]
    IdsExhausted(u64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub winner: String,
    pub date: DateTime<Local>,
    pub items: Vec<String>,
}

/// Past outcomes, oldest first. Stored as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// A missing file is treated as an empty history.
    pub fn load(path: &Path) -> Result<History, HistoryError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No history at {}, starting fresh", path.display());
                return Ok(History::new());
            }
            Err(source) => {
                return Err(HistoryError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents).map_err(|source| HistoryError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let serialized =
            serde_json::to_string_pretty(self).map_err(|source| HistoryError::Format {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, serialized).map_err(|source| HistoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Saved {} entries to {}", self.len(), path.display());
        Ok(())
    }

    pub fn record(&mut self, outcome: &Outcome) -> Result<&HistoryEntry, HistoryError> {
        let id = match self.entries.last() {
            Some(entry) => entry
                .id
                .checked_add(1)
                .ok_or(HistoryError::IdsExhausted(entry.id))?,
            None => 1,
        };
        self.entries.push(HistoryEntry {
            id,
            winner: outcome.winner.clone(),
            date: outcome.drawn_at,
            items: outcome.items.clone(),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Up to `count` entries, newest first.
    pub fn latest(&self, count: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(count)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
