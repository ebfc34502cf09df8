//! Tests for derived journey progress.

use chronicle_core::{Decision, Progress};

#[test]
fn test_empty_history_starts_at_day_one() {
    let progress = Progress::from_posted_days(std::iter::empty());
    assert_eq!(progress.next_day, Some(1));
    assert_eq!(progress.total_posts, 0);
    assert_eq!(progress.completion_percentage, 0.0);
    assert!(!progress.is_complete());
}

#[test]
fn test_gaps_are_selected_before_the_frontier() {
    let progress = Progress::from_posted_days([1, 2, 4]);
    assert_eq!(progress.next_day, Some(3));
}

#[test]
fn test_duplicate_days_count_once() {
    let progress = Progress::from_posted_days([1, 1, 1, 2]);
    assert_eq!(progress.total_posts, 2);
    assert_eq!(progress.next_day, Some(3));
}

#[test]
fn test_completion_percentage_rounds_to_one_decimal() {
    let progress = Progress::from_posted_days(1..=7);
    // 7 / 90 = 7.777...%
    assert_eq!(progress.completion_percentage, 7.8);
}

#[test]
fn test_full_journey_is_complete() {
    let progress = Progress::from_posted_days(1..=90);
    assert_eq!(progress.next_day, None);
    assert_eq!(progress.completion_percentage, 100.0);
    assert!(progress.is_complete());
}

#[test]
fn test_out_of_range_days_do_not_block_selection() {
    let progress = Progress::from_posted_days([95, 200]);
    assert_eq!(progress.next_day, Some(1));
}

#[test]
fn test_decision_parsing() {
    assert_eq!(Decision::parse("a"), Some(Decision::Approve));
    assert_eq!(Decision::parse("APPROVE"), Some(Decision::Approve));
    assert_eq!(Decision::parse("  r "), Some(Decision::reject(None)));
    assert_eq!(Decision::parse("quit"), Some(Decision::Quit));
    assert_eq!(Decision::parse("yes"), None);
    assert_eq!(Decision::parse(""), None);
}
