//! The daily posting workflow state machine.

use crate::ApprovalGate;
use chronicle_core::{Decision, PostRecord, Progress, JOURNEY_DAYS};
use chronicle_error::{
    ChronicleError, ChronicleErrorKind, ChronicleResult, CurriculumError, CurriculumErrorKind,
    WorkflowError, WorkflowErrorKind,
};
use chronicle_models::{ChronicleDriver, ContentGenerator, Draft};
use chronicle_social::Publisher;
use chronicle_storage::{CurriculumStore, HistoryStore};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Driver state. `AwaitingApproval` is the explicit suspend point between
/// [`Workflow::begin`] and [`Workflow::resume`].
#[derive(Debug, Clone)]
enum State {
    Idle,
    AwaitingApproval(Draft),
}

/// Result of resuming or running the workflow.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The draft was published and recorded; the day is complete
    Recorded(PostRecord),
    /// The draft was rejected and a replacement generated; still suspended
    Regenerated(Draft),
    /// The operator quit; state unchanged
    Quit,
    /// Every curriculum day already has a record
    Exhausted,
}

/// Sequences one day's pass: select day, generate, suspend for approval,
/// publish, record.
///
/// The next unposted day is derived from persisted history on every pass and
/// never cached, so two invocations can never disagree about progress. The
/// only path that mutates history is a successful approve-publish cycle,
/// which appends exactly one record.
pub struct Workflow<D: ChronicleDriver> {
    curriculum: CurriculumStore,
    generator: ContentGenerator<D>,
    publisher: Arc<dyn Publisher>,
    history: Arc<dyn HistoryStore>,
    state: State,
}

impl<D: ChronicleDriver> Workflow<D> {
    /// Create an idle workflow over the given components.
    pub fn new(
        curriculum: CurriculumStore,
        generator: ContentGenerator<D>,
        publisher: Arc<dyn Publisher>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            curriculum,
            generator,
            publisher,
            history,
            state: State::Idle,
        }
    }

    /// Journey progress, derived fresh from the history store.
    pub async fn progress(&self) -> ChronicleResult<Progress> {
        let days = self.history.posted_days().await?;
        Ok(Progress::from_posted_days(days))
    }

    /// The draft currently awaiting approval, if any.
    pub fn pending(&self) -> Option<&Draft> {
        match &self.state {
            State::AwaitingApproval(draft) => Some(draft),
            State::Idle => None,
        }
    }

    /// Select the next unposted day and generate its draft, suspending in
    /// the awaiting-approval state.
    ///
    /// Fails with the exhausted curriculum error when no day remains (before
    /// any API call is made), and with a generation error when the model
    /// call fails, in which case the day is not consumed and the workflow
    /// stays idle.
    #[instrument(skip(self))]
    pub async fn begin(&mut self) -> ChronicleResult<Draft> {
        if let State::AwaitingApproval(draft) = &self.state {
            return Err(WorkflowError::new(WorkflowErrorKind::AlreadyPending(draft.day)).into());
        }

        let progress = self.progress().await?;
        let day = progress.next_day.ok_or_else(|| {
            ChronicleError::from(CurriculumError::new(CurriculumErrorKind::Exhausted(
                JOURNEY_DAYS,
            )))
        })?;

        debug!(day, total_posts = progress.total_posts, "Selected next day");

        let entry = self.curriculum.entry_for_day(day)?.clone();
        let records = self.history.records().await?;
        let draft = self.generator.generate(&entry, &records, None).await?;

        self.state = State::AwaitingApproval(draft.clone());
        info!(day, "Draft awaiting approval");
        Ok(draft)
    }

    /// Resume a suspended workflow with the operator's decision.
    ///
    /// - Approve: publish, then append the record. A publish failure leaves
    ///   the workflow suspended so the operator may retry or reject. An
    ///   append failure after a successful publish is surfaced as a storage
    ///   error and the day remains locally unposted. The external post is
    ///   not rolled back, a documented inconsistency rather than a silent fix.
    /// - Reject: regenerate the same day with the operator's feedback; the
    ///   day counter never advances and nothing is written.
    /// - Quit: return with state unchanged.
    #[instrument(skip(self, decision))]
    pub async fn resume(&mut self, decision: Decision) -> ChronicleResult<RunOutcome> {
        let draft = match &self.state {
            State::AwaitingApproval(draft) => draft.clone(),
            State::Idle => {
                return Err(WorkflowError::new(WorkflowErrorKind::NothingPending).into());
            }
        };

        match decision {
            Decision::Approve => self.publish_and_record(draft).await,
            Decision::Reject { feedback } => self.regenerate(draft, feedback).await,
            Decision::Quit => {
                info!(day = draft.day, "Operator quit; draft left pending");
                Ok(RunOutcome::Quit)
            }
        }
    }

    async fn publish_and_record(&mut self, draft: Draft) -> ChronicleResult<RunOutcome> {
        let post_id = match self.publisher.publish(&draft.content).await {
            Ok(post_id) => post_id,
            Err(e) => {
                // Still suspended: the operator may retry approval or reject.
                warn!(day = draft.day, error = %e, "Publish failed; draft still pending");
                return Err(e);
            }
        };

        info!(day = draft.day, post_id = ?post_id, "Published post");

        let record = PostRecord::new(draft.day, &draft.topic, &draft.content, post_id);

        if let Err(e) = self.history.append(record.clone()).await {
            // The external post exists but no local record does. Surface the
            // gap; the day stays unposted from the local perspective.
            error!(day = draft.day, error = %e, "Post published but history write failed");
            self.state = State::Idle;
            return Err(e);
        }

        self.state = State::Idle;
        Ok(RunOutcome::Recorded(record))
    }

    async fn regenerate(
        &mut self,
        draft: Draft,
        feedback: Option<String>,
    ) -> ChronicleResult<RunOutcome> {
        info!(day = draft.day, "Draft rejected; regenerating");

        let entry = self.curriculum.entry_for_day(draft.day)?.clone();
        let records = self.history.records().await?;

        match self
            .generator
            .generate(&entry, &records, feedback.as_deref().or(Some("")))
            .await
        {
            Ok(new_draft) => {
                self.state = State::AwaitingApproval(new_draft.clone());
                Ok(RunOutcome::Regenerated(new_draft))
            }
            Err(e) => {
                // Same contract as begin: a failed generation does not
                // consume the day and the workflow returns to idle.
                self.state = State::Idle;
                Err(e)
            }
        }
    }

    /// Run one full daily pass: generate, then loop the approval gate until
    /// the day is recorded or the operator quits.
    ///
    /// Publish failures are reported and leave the gate in charge (retry or
    /// reject); all other errors propagate.
    #[instrument(skip(self, gate))]
    pub async fn run_once(&mut self, gate: &dyn ApprovalGate) -> ChronicleResult<RunOutcome> {
        let mut draft = match self.begin().await {
            Ok(draft) => draft,
            Err(e) if e.is_exhausted() => {
                info!("Curriculum exhausted; nothing to post");
                return Ok(RunOutcome::Exhausted);
            }
            Err(e) => return Err(e),
        };

        loop {
            let decision = gate.review(&draft).await?;

            match self.resume(decision).await {
                Ok(RunOutcome::Regenerated(new_draft)) => {
                    draft = new_draft;
                }
                Ok(outcome) => return Ok(outcome),
                Err(e) if matches!(e.kind(), ChronicleErrorKind::Publish(_)) => {
                    error!(error = %e, "Publish failed; awaiting operator decision");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
