//! Shared scripted components for workflow tests.

use chronicle_agent::{ApprovalGate, Workflow};
use chronicle_core::{
    CurriculumEntry, Decision, Difficulty, GenerateRequest, GenerateResponse, PostRecord,
    JOURNEY_DAYS,
};
use chronicle_error::{
    ChronicleResult, GenerationError, GenerationErrorKind, PublishError, PublishErrorKind,
    StorageError, StorageErrorKind,
};
use chronicle_models::{ChronicleDriver, ContentGenerator, GenerationParams};
use chronicle_social::Publisher;
use chronicle_storage::{CurriculumStore, HistoryStore};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct DriverState {
    calls: AtomicUsize,
    fail_next: AtomicBool,
    last_prompt: Mutex<Option<String>>,
}

/// Driver that replies with canned text and records every prompt it sees.
///
/// Clones share state, so a test can keep one handle while the workflow owns
/// another.
#[derive(Default, Clone)]
pub struct ScriptedDriver {
    state: Arc<DriverState>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn fail_next(&self) {
        self.state.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.state.last_prompt.lock().clone()
    }
}

#[async_trait::async_trait]
impl ChronicleDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> ChronicleResult<GenerateResponse> {
        let call = self.state.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if self.state.fail_next.swap(false, Ordering::SeqCst) {
            return Err(
                GenerationError::new(GenerationErrorKind::Api("scripted failure".into())).into(),
            );
        }

        let prompt = req
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        *self.state.last_prompt.lock() = Some(prompt);

        Ok(GenerateResponse {
            text: format!("Draft text from call {call}."),
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "test-model"
    }
}

/// Publisher that can be told to fail, counting every attempt.
#[derive(Default)]
pub struct ScriptedPublisher {
    attempts: AtomicUsize,
    fail_next: AtomicBool,
}

impl ScriptedPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl Publisher for ScriptedPublisher {
    async fn publish(&self, _text: &str) -> ChronicleResult<Option<String>> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(
                PublishError::new(PublishErrorKind::Network("scripted outage".into())).into(),
            );
        }

        Ok(Some(format!("post_{attempt}")))
    }

    fn platform_name(&self) -> &'static str {
        "scripted"
    }
}

/// In-memory history store with a switchable append failure.
#[derive(Default)]
pub struct MemoryHistory {
    records: Mutex<Vec<PostRecord>>,
    appends: AtomicUsize,
    fail_next_append: AtomicBool,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_days(days: impl IntoIterator<Item = u32>) -> Self {
        let store = Self::default();
        {
            let mut records = store.records.lock();
            for day in days {
                records.push(PostRecord::new(
                    day,
                    format!("Topic {day}"),
                    format!("Content {day}"),
                    None,
                ));
            }
        }
        store
    }

    pub fn append_count(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }

    pub fn fail_next_append(&self) {
        self.fail_next_append.store(true, Ordering::SeqCst);
    }

    pub fn days(&self) -> Vec<u32> {
        self.records.lock().iter().map(|r| r.day).collect()
    }
}

#[async_trait::async_trait]
impl HistoryStore for MemoryHistory {
    async fn records(&self) -> ChronicleResult<Vec<PostRecord>> {
        Ok(self.records.lock().clone())
    }

    async fn append(&self, record: PostRecord) -> ChronicleResult<()> {
        self.appends.fetch_add(1, Ordering::SeqCst);

        if self.fail_next_append.swap(false, Ordering::SeqCst) {
            return Err(
                StorageError::new(StorageErrorKind::Persistence("scripted disk full".into()))
                    .into(),
            );
        }

        let mut records = self.records.lock();
        if records.iter().any(|r| r.day == record.day) {
            return Err(StorageError::new(StorageErrorKind::DuplicateDay(record.day)).into());
        }
        records.push(record);
        Ok(())
    }
}

/// Gate that replays a fixed sequence of decisions.
pub struct ScriptedGate {
    decisions: Mutex<VecDeque<Decision>>,
}

impl ScriptedGate {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: Mutex::new(decisions.into_iter().collect()),
        }
    }
}

#[async_trait::async_trait]
impl ApprovalGate for ScriptedGate {
    async fn review(&self, _draft: &chronicle_models::Draft) -> ChronicleResult<Decision> {
        Ok(self
            .decisions
            .lock()
            .pop_front()
            .expect("gate script exhausted"))
    }
}

pub fn entry(day: u32) -> CurriculumEntry {
    CurriculumEntry {
        day,
        topic: format!("Topic {day}"),
        week_theme: format!("Week {}", day.div_ceil(7)),
        difficulty: Difficulty::Beginner,
        key_points: vec![format!("point {day}")],
        story_angle: String::new(),
    }
}

pub fn curriculum() -> CurriculumStore {
    CurriculumStore::from_entries((1..=JOURNEY_DAYS).map(entry).collect())
        .expect("valid test curriculum")
}

/// Assemble a workflow over scripted components, returning shared handles so
/// tests can inspect what happened.
pub fn workflow(
    history: MemoryHistory,
) -> (
    Workflow<ScriptedDriver>,
    ScriptedDriver,
    Arc<ScriptedPublisher>,
    Arc<MemoryHistory>,
) {
    let driver = ScriptedDriver::new();
    let publisher = Arc::new(ScriptedPublisher::new());
    let history = Arc::new(history);

    let generator = ContentGenerator::new(driver.clone(), GenerationParams::default());
    let workflow = Workflow::new(
        curriculum(),
        generator,
        Arc::clone(&publisher) as Arc<dyn Publisher>,
        Arc::clone(&history) as Arc<dyn HistoryStore>,
    );

    (workflow, driver, publisher, history)
}
