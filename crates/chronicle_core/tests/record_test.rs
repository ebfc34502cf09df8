//! Tests for posting history records.

use chronicle_core::PostRecord;

#[test]
fn test_char_count_counts_characters_not_bytes() {
    let record = PostRecord::new(1, "Accents", "café résumé naïve", None);

    assert_eq!(record.char_count, 17);
    assert!(record.content.len() > 17);
}

#[test]
fn test_post_id_is_optional() {
    let record = PostRecord::new(2, "Topic", "Content", None);
    assert!(record.post_id.is_none());
}
