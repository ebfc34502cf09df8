//! Command handlers for the chronicle binary.

use crate::cli::ConsoleGate;
use chronicle::{
    AgentConfig, ChronicleResult, ContentGenerator, Credentials, CurriculumStore, DailySchedule,
    HistoryStore, JsonHistoryStore, LinkedInClient, MockPublisher, OllamaClient, Publisher,
    RunOutcome, Workflow,
};
use chrono::Local;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Everything a command needs: the workflow plus shared handles for display.
struct Agent {
    workflow: Workflow<OllamaClient>,
    model: OllamaClient,
    curriculum: CurriculumStore,
    history: Arc<dyn HistoryStore>,
    config: AgentConfig,
}

/// Load configuration and assemble the workflow components.
async fn build_agent(config_path: &Path) -> ChronicleResult<Agent> {
    let config = AgentConfig::load(config_path)?;

    let curriculum = CurriculumStore::load(&config.storage.curriculum_path)?;
    let history: Arc<dyn HistoryStore> =
        Arc::new(JsonHistoryStore::new(&config.storage.history_path).await?);

    let driver = OllamaClient::new_with_url(&config.model.name, &config.model.base_url)?;
    let model = driver.clone();
    let generator = ContentGenerator::new(driver, config.generation.clone());

    let publisher: Arc<dyn Publisher> = if config.publisher.mock {
        warn!("Mock publisher selected; posts will not leave this machine");
        Arc::new(MockPublisher::new())
    } else {
        // Missing credentials are fatal here, before any workflow runs.
        let credentials = Credentials::from_env()?;
        Arc::new(LinkedInClient::new(
            &config.publisher.base_url,
            credentials.access_token,
            credentials.author_id,
        )?)
    };

    let workflow = Workflow::new(
        curriculum.clone(),
        generator,
        publisher,
        Arc::clone(&history),
    );

    Ok(Agent {
        workflow,
        model,
        curriculum,
        history,
        config,
    })
}

/// Run the daily schedule: sleep until the posting time, run one approval
/// pass, repeat. Missed fire times are skipped, never replayed.
pub async fn run_scheduled(config_path: &Path) -> ChronicleResult<()> {
    let mut agent = build_agent(config_path).await?;
    agent.model.validate().await?;
    let schedule = DailySchedule::new(&agent.config.posting_time)?;
    let gate = ConsoleGate::new();

    println!(
        "Scheduled mode: daily approval pass at {} (Ctrl+C to stop)",
        agent.config.posting_time
    );

    loop {
        let wait = schedule.duration_until_next(Local::now());
        info!(secs = wait.as_secs(), "Sleeping until next posting time");
        tokio::time::sleep(wait).await;

        match agent.workflow.run_once(&gate).await {
            Ok(RunOutcome::Recorded(record)) => {
                println!("Day {} posted and recorded.", record.day);
            }
            Ok(RunOutcome::Quit) => {
                println!("Exiting at operator request.");
                return Ok(());
            }
            Ok(RunOutcome::Exhausted) => {
                println!("All 90 days posted. The journey is complete!");
                return Ok(());
            }
            Ok(RunOutcome::Regenerated(_)) => unreachable!("run_once resolves regeneration"),
            Err(e) => {
                // Surface and keep the schedule alive; the operator can also
                // catch up manually with `post`.
                eprintln!("Error: {e}");
            }
        }
    }
}

/// Generate and preview the next day's draft without publishing.
pub async fn handle_generate(config_path: &Path) -> ChronicleResult<()> {
    let mut agent = build_agent(config_path).await?;
    agent.model.validate().await?;

    match agent.workflow.begin().await {
        Ok(draft) => {
            println!();
            println!("Day {}: {} ({})", draft.day, draft.topic, draft.week_theme);
            println!("{:-<70}", "");
            println!("{}", draft.content);
            println!("{:-<70}", "");
            println!("Characters: {}", draft.char_count());
            println!("Preview only; nothing was posted. Run `chronicle post` to publish.");
            Ok(())
        }
        Err(e) if e.is_exhausted() => {
            println!("All 90 days posted. The journey is complete!");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Run one full pass: generate, gate, publish, record.
pub async fn handle_post(config_path: &Path) -> ChronicleResult<()> {
    let mut agent = build_agent(config_path).await?;
    agent.model.validate().await?;
    let gate = ConsoleGate::new();

    match agent.workflow.run_once(&gate).await? {
        RunOutcome::Recorded(record) => {
            println!(
                "Day {} posted{}.",
                record.day,
                record
                    .post_id
                    .as_deref()
                    .map(|id| format!(" (post id: {id})"))
                    .unwrap_or_default()
            );
        }
        RunOutcome::Quit => println!("Exited without posting."),
        RunOutcome::Exhausted => println!("All 90 days posted. The journey is complete!"),
        RunOutcome::Regenerated(_) => unreachable!("run_once resolves regeneration"),
    }

    Ok(())
}

/// Show journey progress.
pub async fn handle_status(config_path: &Path) -> ChronicleResult<()> {
    let agent = build_agent(config_path).await?;
    let progress = agent.workflow.progress().await?;

    println!();
    println!("Journey status");
    println!("{:-<40}", "");
    println!("Posts:      {}/90", progress.total_posts);
    println!("Completion: {}%", progress.completion_percentage);

    match progress.next_day {
        Some(day) => {
            let entry = agent.curriculum.entry_for_day(day)?;
            println!("Next day:   {}", day);
            println!("Next topic: {} ({})", entry.topic, entry.week_theme);
        }
        None => println!("Next day:   none - journey complete"),
    }

    Ok(())
}

/// Show recent posting history, newest first.
pub async fn handle_history(config_path: &Path, count: usize) -> ChronicleResult<()> {
    let agent = build_agent(config_path).await?;
    let recent = agent.history.recent(count).await?;

    if recent.is_empty() {
        println!("No posts yet.");
        return Ok(());
    }

    println!();
    println!("{:<5} {:<40} {:<12} {:>6}", "Day", "Topic", "Posted", "Chars");
    println!("{:-<70}", "");
    for record in recent.iter().rev() {
        let topic = if record.topic.len() > 38 {
            let mut end = 35;
            while !record.topic.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &record.topic[..end])
        } else {
            record.topic.clone()
        };
        println!(
            "{:<5} {:<40} {:<12} {:>6}",
            record.day,
            topic,
            record.posted_at.format("%Y-%m-%d"),
            record.char_count
        );
    }

    Ok(())
}

/// Show the full curriculum with posted markers.
pub async fn handle_curriculum(config_path: &Path) -> ChronicleResult<()> {
    let agent = build_agent(config_path).await?;
    let posted = agent.history.posted_days().await?;
    let progress = agent.workflow.progress().await?;

    let mut current_theme = String::new();
    for entry in agent.curriculum.entries() {
        if entry.week_theme != current_theme {
            current_theme = entry.week_theme.clone();
            println!();
            println!("{current_theme}");
        }

        let marker = if posted.contains(&entry.day) {
            "x"
        } else if progress.next_day == Some(entry.day) {
            ">"
        } else {
            " "
        };
        println!(
            " [{marker}] Day {:>2}: {} ({})",
            entry.day, entry.topic, entry.difficulty
        );
    }

    Ok(())
}

/// What the interactive loop does after one command.
#[derive(Debug, PartialEq, Eq)]
enum LoopAction {
    Continue,
    Quit,
}

/// Report a command's outcome without ending the loop. Recoverable errors
/// are messages to the operator, not reasons to exit.
fn report(result: ChronicleResult<()>) -> LoopAction {
    if let Err(e) = result {
        eprintln!("Error: {e}");
    }
    LoopAction::Continue
}

/// Run one interactive command. Unknown commands re-prompt; only `quit`
/// ends the loop.
async fn dispatch(line: &str, config_path: &Path) -> LoopAction {
    match line.trim().to_lowercase().as_str() {
        "" => LoopAction::Continue,
        "g" | "generate" => report(handle_generate(config_path).await),
        "p" | "post" => report(handle_post(config_path).await),
        "s" | "status" => report(handle_status(config_path).await),
        "h" | "history" => report(handle_history(config_path, 10).await),
        "c" | "curriculum" => report(handle_curriculum(config_path).await),
        "q" | "quit" => {
            println!("Goodbye!");
            LoopAction::Quit
        }
        other => {
            println!("Unknown command: {other}");
            println!("Commands: generate | post | status | history | curriculum | quit");
            LoopAction::Continue
        }
    }
}

/// Interactive command loop. Only a failure to read stdin itself ends the
/// process with an error; command failures are reported and the prompt
/// returns.
pub async fn run_interactive(config_path: &Path) -> ChronicleResult<()> {
    use chronicle_error::IoError;
    use tokio::io::{AsyncBufReadExt, BufReader};

    println!("Commands: generate | post | status | history | curriculum | quit");

    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        use std::io::Write;
        let _ = std::io::stdout().flush();

        let line = reader
            .next_line()
            .await
            .map_err(|e| IoError::new(format!("failed to read command: {e}")))?;

        let Some(line) = line else {
            return Ok(());
        };

        if dispatch(&line, config_path).await == LoopAction::Quit {
            return Ok(());
        }
    }
}
