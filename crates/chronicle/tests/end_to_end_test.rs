//! End-to-end pass over the public facade: generate, approve, publish,
//! record, with history on disk.

use chronicle::{
    ApprovalGate, ChronicleDriver, ChronicleResult, ContentGenerator, CurriculumEntry,
    CurriculumStore, Decision, Difficulty, Draft, GenerateRequest, GenerateResponse,
    GenerationParams, HistoryStore, JsonHistoryStore, MockPublisher, Publisher, RunOutcome,
    Workflow, JOURNEY_DAYS,
};
use std::sync::Arc;
use tempfile::TempDir;

struct CannedDriver;

#[async_trait::async_trait]
impl ChronicleDriver for CannedDriver {
    async fn generate(&self, _req: &GenerateRequest) -> ChronicleResult<GenerateResponse> {
        Ok(GenerateResponse {
            text: "Once upon a time, a model learned to learn.".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "canned-model"
    }
}

struct ApproveEverything;

#[async_trait::async_trait]
impl ApprovalGate for ApproveEverything {
    async fn review(&self, _draft: &Draft) -> ChronicleResult<Decision> {
        Ok(Decision::Approve)
    }
}

fn curriculum() -> CurriculumStore {
    let entries = (1..=JOURNEY_DAYS)
        .map(|day| CurriculumEntry {
            day,
            topic: format!("Topic {day}"),
            week_theme: "Foundations".to_string(),
            difficulty: Difficulty::Beginner,
            key_points: vec![],
            story_angle: String::new(),
        })
        .collect();
    CurriculumStore::from_entries(entries).unwrap()
}

#[tokio::test]
async fn test_three_daily_passes_advance_the_journey() {
    let temp_dir = TempDir::new().unwrap();
    let history = Arc::new(
        JsonHistoryStore::new(temp_dir.path().join("history.json"))
            .await
            .unwrap(),
    );
    let publisher = Arc::new(MockPublisher::new());

    let mut workflow = Workflow::new(
        curriculum(),
        ContentGenerator::new(CannedDriver, GenerationParams::default()),
        Arc::clone(&publisher) as Arc<dyn Publisher>,
        Arc::clone(&history) as Arc<dyn HistoryStore>,
    );

    let gate = ApproveEverything;

    for expected_day in 1..=3u32 {
        let outcome = workflow.run_once(&gate).await.unwrap();
        let RunOutcome::Recorded(record) = outcome else {
            panic!("expected recorded outcome");
        };
        assert_eq!(record.day, expected_day);
    }

    assert_eq!(publisher.post_count(), 3);

    // A fresh workflow over the same file picks up where this one stopped.
    let mut resumed = Workflow::new(
        curriculum(),
        ContentGenerator::new(CannedDriver, GenerationParams::default()),
        Arc::new(MockPublisher::new()) as Arc<dyn Publisher>,
        Arc::clone(&history) as Arc<dyn HistoryStore>,
    );

    let draft = resumed.begin().await.unwrap();
    assert_eq!(draft.day, 4);
}
