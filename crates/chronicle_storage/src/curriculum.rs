//! Read-only curriculum store.

use chronicle_core::{CurriculumEntry, JOURNEY_DAYS};
use chronicle_error::{ChronicleResult, CurriculumError, CurriculumErrorKind};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// On-disk shape of the curriculum file.
#[derive(Debug, Deserialize)]
struct CurriculumFile {
    curriculum: Vec<CurriculumEntry>,
}

/// The fixed, ordered 90-day topic list.
///
/// Loaded once at process start and immutable afterwards. Loading fails if
/// the file is unreadable, malformed, shorter than the journey, or contains
/// duplicate days.
#[derive(Debug, Clone)]
pub struct CurriculumStore {
    entries: Vec<CurriculumEntry>,
}

impl CurriculumStore {
    /// Load and validate the curriculum from a JSON file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> ChronicleResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CurriculumError::new(CurriculumErrorKind::FileRead(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;

        let file: CurriculumFile = serde_json::from_str(&raw)
            .map_err(|e| CurriculumError::new(CurriculumErrorKind::Malformed(e.to_string())))?;

        Self::from_entries(file.curriculum)
    }

    /// Validate an in-memory entry list. Used by `load` and by tests.
    pub fn from_entries(mut entries: Vec<CurriculumEntry>) -> ChronicleResult<Self> {
        if entries.len() < JOURNEY_DAYS as usize {
            return Err(CurriculumError::new(CurriculumErrorKind::TooFewEntries {
                found: entries.len(),
                expected: JOURNEY_DAYS as usize,
            })
            .into());
        }

        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.day) {
                return Err(
                    CurriculumError::new(CurriculumErrorKind::DuplicateDay(entry.day)).into(),
                );
            }
        }

        entries.sort_by_key(|entry| entry.day);

        tracing::info!(entries = entries.len(), "Loaded curriculum");
        Ok(Self { entries })
    }

    /// Look up the entry for a specific day.
    pub fn entry_for_day(&self, day: u32) -> ChronicleResult<&CurriculumEntry> {
        self.entries
            .iter()
            .find(|entry| entry.day == day)
            .ok_or_else(|| CurriculumError::new(CurriculumErrorKind::MissingDay(day)).into())
    }

    /// All entries in day order.
    pub fn entries(&self) -> &[CurriculumEntry] {
        &self.entries
    }

    /// Number of entries in the curriculum.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the curriculum holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
