//! Console approval gate.

use async_trait::async_trait;
use chronicle_agent::ApprovalGate;
use chronicle_core::Decision;
use chronicle_error::{ChronicleResult, IoError};
use chronicle_models::Draft;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Approval gate that presents drafts on stdout and reads decisions from
/// stdin. Unrecognized input re-prompts; only approve, reject, or quit come
/// back to the workflow.
///
/// One reader lives for the gate's lifetime, so input typed ahead of the
/// prompt is consumed in order rather than lost between reads.
pub struct ConsoleGate<R = BufReader<Stdin>> {
    reader: Mutex<R>,
}

impl ConsoleGate {
    /// Create a gate reading from stdin.
    pub fn new() -> Self {
        Self::with_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl Default for ConsoleGate {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleGate<R> {
    /// Create a gate over any buffered line source.
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }

    fn display(draft: &Draft) {
        println!();
        println!("{:=<70}", "");
        println!(
            "Day {}/90 | {} | {}",
            draft.day, draft.topic, draft.week_theme
        );
        if draft.regenerated {
            println!("(regenerated draft)");
        }
        println!("{:-<70}", "");
        println!("{}", draft.content);
        println!("{:-<70}", "");
        println!("Characters: {}", draft.char_count());
        println!("{:=<70}", "");
    }

    async fn read_line(&self) -> ChronicleResult<String> {
        let mut line = String::new();
        self.reader
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| IoError::new(format!("failed to read operator input: {e}")))?;
        Ok(line)
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> ApprovalGate for ConsoleGate<R> {
    async fn review(&self, draft: &Draft) -> ChronicleResult<Decision> {
        Self::display(draft);

        loop {
            println!();
            println!("  [a]pprove - publish this draft");
            println!("  [r]eject  - regenerate with optional feedback");
            println!("  [q]uit    - exit without posting");
            print!("Your choice: ");
            use std::io::Write;
            let _ = std::io::stdout().flush();

            let line = self.read_line().await?;

            match Decision::parse(&line) {
                Some(Decision::Reject { .. }) => {
                    println!("Feedback for the next version (enter to skip):");
                    let feedback = self.read_line().await?;
                    let feedback = feedback.trim();
                    let feedback = if feedback.is_empty() {
                        None
                    } else {
                        Some(feedback.to_string())
                    };
                    return Ok(Decision::reject(feedback));
                }
                Some(decision) => return Ok(decision),
                None => {
                    println!("Unrecognized input: {}", line.trim());
                }
            }
        }
    }
}
