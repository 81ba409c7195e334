//! Persistence of the last successful calculation so it can be reloaded.
//!
//! The record is a single JSON object with `day`, `month` (0-based), `year`
//! and an RFC 3339 `timestamp`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::age::CalendarDate;
use crate::error::RecordError;
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastCalculation {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub timestamp: DateTime<Utc>,
}

impl LastCalculation {
    pub fn new(date: CalendarDate, timestamp: DateTime<Utc>) -> Self {
        Self {
            day: date.day,
            month: date.month,
            year: date.year,
            timestamp,
        }
    }

    pub fn date(&self) -> CalendarDate {
        CalendarDate::new(self.year, self.month, self.day)
    }

    pub fn selection(&self) -> Selection {
        Selection::from(self.date())
    }
}

/// File-backed store holding at most one [`LastCalculation`].
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Overwrites any existing record.
    pub fn save(
        &self,
        date: CalendarDate,
        timestamp: DateTime<Utc>,
    ) -> Result<LastCalculation, RecordError> {
        let record = LastCalculation::new(date, timestamp);
        let json = serde_json::to_string(&record).map_err(|source| RecordError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;

        info!(path = %self.path.display(), "saved last calculation");
        Ok(record)
    }

    /// Returns `Ok(None)` when nothing has been saved.
    pub fn load(&self) -> Result<Option<LastCalculation>, RecordError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved calculation");
                return Ok(None);
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let record = serde_json::from_str(&contents).map_err(|source| RecordError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(record))
    }

    /// Removes the record. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, RecordError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "cleared last calculation");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> RecordError {
        RecordError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
