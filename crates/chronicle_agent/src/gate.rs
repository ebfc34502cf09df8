//! Approval gate seam.

use async_trait::async_trait;
use chronicle_core::Decision;
use chronicle_error::ChronicleResult;
use chronicle_models::Draft;

/// Human checkpoint between generation and publishing.
///
/// The workflow driver awaits this between suspending on a draft and
/// resuming with a decision; it never reads operator input itself. The
/// console implementation lives in the binary, and tests inject scripted
/// decisions.
#[async_trait]
pub trait ApprovalGate: Send + Sync {
    /// Present a draft and return the operator's decision.
    ///
    /// Implementations handle unrecognized input themselves (re-prompt); the
    /// returned decision is always one of approve, reject, or quit.
    async fn review(&self, draft: &Draft) -> ChronicleResult<Decision>;
}
