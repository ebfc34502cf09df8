//! Tests for curriculum loading and validation.

use chronicle_core::{CurriculumEntry, Difficulty, JOURNEY_DAYS};
use chronicle_error::{ChronicleErrorKind, CurriculumErrorKind};
use chronicle_storage::CurriculumStore;
use tempfile::TempDir;

fn entry(day: u32) -> CurriculumEntry {
    CurriculumEntry {
        day,
        topic: format!("Topic {day}"),
        week_theme: format!("Week {}", day.div_ceil(7)),
        difficulty: Difficulty::Beginner,
        key_points: vec![],
        story_angle: String::new(),
    }
}

fn full_curriculum() -> Vec<CurriculumEntry> {
    (1..=JOURNEY_DAYS).map(entry).collect()
}

fn curriculum_error(err: chronicle_error::ChronicleError) -> CurriculumErrorKind {
    match err.kind() {
        ChronicleErrorKind::Curriculum(e) => e.kind.clone(),
        other => panic!("expected curriculum error, got {other:?}"),
    }
}

#[test]
fn test_load_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("curriculum.json");

    let json = serde_json::json!({ "curriculum": full_curriculum() });
    std::fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

    let store = CurriculumStore::load(&path).unwrap();
    assert_eq!(store.len(), 90);
    assert_eq!(store.entry_for_day(1).unwrap().topic, "Topic 1");
    assert_eq!(store.entry_for_day(90).unwrap().topic, "Topic 90");
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");

    let err = CurriculumStore::load(&path).unwrap_err();
    assert!(matches!(
        curriculum_error(err),
        CurriculumErrorKind::FileRead(_)
    ));
}

#[test]
fn test_load_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("curriculum.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = CurriculumStore::load(&path).unwrap_err();
    assert!(matches!(
        curriculum_error(err),
        CurriculumErrorKind::Malformed(_)
    ));
}

#[test]
fn test_too_few_entries_rejected() {
    let entries: Vec<_> = (1..=89).map(entry).collect();
    let err = CurriculumStore::from_entries(entries).unwrap_err();

    assert_eq!(
        curriculum_error(err),
        CurriculumErrorKind::TooFewEntries {
            found: 89,
            expected: 90,
        }
    );
}

#[test]
fn test_duplicate_day_rejected() {
    let mut entries = full_curriculum();
    entries.push(entry(45));

    let err = CurriculumStore::from_entries(entries).unwrap_err();
    assert_eq!(curriculum_error(err), CurriculumErrorKind::DuplicateDay(45));
}

#[test]
fn test_entries_sorted_by_day() {
    let mut entries = full_curriculum();
    entries.reverse();

    let store = CurriculumStore::from_entries(entries).unwrap();
    let days: Vec<u32> = store.entries().iter().map(|e| e.day).collect();
    let expected: Vec<u32> = (1..=90).collect();
    assert_eq!(days, expected);
}

#[test]
fn test_missing_day_lookup() {
    let store = CurriculumStore::from_entries(full_curriculum()).unwrap();

    let err = store.entry_for_day(91).unwrap_err();
    assert_eq!(curriculum_error(err), CurriculumErrorKind::MissingDay(91));
}
