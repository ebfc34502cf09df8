//! Tests for the in-memory mock publisher.

use chronicle_social::{MockPublisher, Publisher};

#[tokio::test]
async fn test_publish_records_text_in_order() {
    let publisher = MockPublisher::new();

    let first = publisher.publish("First post").await.unwrap();
    let second = publisher.publish("Second post").await.unwrap();

    assert_eq!(first.as_deref(), Some("mock_post_1"));
    assert_eq!(second.as_deref(), Some("mock_post_2"));
    assert_eq!(publisher.post_count(), 2);
    assert_eq!(publisher.posts(), vec!["First post", "Second post"]);
}

#[tokio::test]
async fn test_platform_name() {
    assert_eq!(MockPublisher::new().platform_name(), "mock");
}
