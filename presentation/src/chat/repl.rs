//! REPL (Read-Eval-Print Loop) for an interactive discussion

use super::command::ReplCommand;
use super::interrupt::Interrupts;
use super::view::DiscussionView;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use council_application::{
    AdvisorClient, ConversationLogger, CycleEnd, CycleSummary, DiscussionOrchestrator,
    DiscussionParams,
};
use council_domain::PersonaRoster;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Interactive discussion REPL
pub struct ChatRepl {
    orchestrator: DiscussionOrchestrator<dyn AdvisorClient>,
    view: DiscussionView,
    roster: Arc<PersonaRoster>,
    topic: Option<String>,
    history_path: Option<PathBuf>,
    interrupts: Option<Interrupts>,
}

impl ChatRepl {
    pub fn new(
        client: Arc<dyn AdvisorClient>,
        roster: Arc<PersonaRoster>,
        params: DiscussionParams,
    ) -> Self {
        Self {
            orchestrator: DiscussionOrchestrator::new(client, Arc::clone(&roster), params),
            view: DiscussionView::new(Arc::clone(&roster), true),
            roster,
            topic: None,
            history_path: dirs::data_dir()
                .map(|p| p.join("advisor-council").join("history.txt")),
            interrupts: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.orchestrator = self.orchestrator.with_logger(logger);
        self
    }

    /// Set whether to show spinners while rounds run
    pub fn with_progress(mut self, show: bool) -> Self {
        self.view = DiscussionView::new(Arc::clone(&self.roster), show);
        self
    }

    /// Opening topic; a random one from the pool when unset
    pub fn with_topic(mut self, topic: Option<String>) -> Self {
        self.topic = topic.filter(|t| !t.trim().is_empty());
        self
    }

    /// Interrupt source for the session; Ctrl-C when unset
    pub fn with_interrupts(mut self, interrupts: Interrupts) -> Self {
        self.interrupts = Some(interrupts);
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;
        if self.interrupts.is_none() {
            self.interrupts = Some(Interrupts::ctrl_c());
        }

        if let Some(path) = &self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.open().await;

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_input(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("Advisor Council"));
        println!();
        println!("{}", ConsoleFormatter::format_roster(&self.roster));
        println!();
        println!("{}", ReplCommand::help());
        println!();
    }

    /// Seed the transcript and run the opening round plus follow-ups
    async fn open(&mut self) {
        tokio::time::sleep(self.orchestrator.params().start_delay).await;

        let outcome = match self.topic.clone() {
            Some(topic) => {
                let round = self.orchestrator.start(&topic, &self.view);
                until_interrupted(round, self.interrupts.as_mut()).await
            }
            None => {
                let mut rng = StdRng::from_entropy();
                let round = self.orchestrator.start_random(&mut rng, &self.view);
                until_interrupted(round, self.interrupts.as_mut()).await
            }
        };

        match outcome {
            Some(Ok(outcome)) if outcome.is_merged() => {
                self.run_cycle().await;
            }
            Some(Ok(_)) => {}
            Some(Err(e)) => eprintln!("Error: {}", e),
            None => {
                self.orchestrator.abandon_round(&self.view);
            }
        }
    }

    async fn process_input(&mut self, text: &str) {
        let round = self.orchestrator.submit(text, &self.view);
        match until_interrupted(round, self.interrupts.as_mut()).await {
            Some(Ok(outcome)) if outcome.is_merged() => {
                self.run_cycle().await;
            }
            Some(Ok(_)) => {}
            Some(Err(e)) => eprintln!("{}", e.to_string().yellow()),
            None => {
                self.orchestrator.abandon_round(&self.view);
            }
        }
    }

    /// Autonomous follow-ups; an interrupt cancels the remaining rounds
    async fn run_cycle(&mut self) -> CycleSummary {
        let cancel = CancellationToken::new();
        let cycle = self.orchestrator.continue_discussion(&cancel, &self.view);

        let summary = match self.interrupts.as_mut() {
            Some(interrupts) => {
                interrupts.clear();
                tokio::pin!(cycle);
                loop {
                    tokio::select! {
                        summary = &mut cycle => break summary,
                        Some(()) = interrupts.recv(), if !cancel.is_cancelled() => cancel.cancel(),
                    }
                }
            }
            None => cycle.await,
        };

        debug!("Follow-up cycle: {:?}", summary);
        if summary.end == CycleEnd::Cancelled {
            println!("{}", "Follow-up rounds stopped.".dimmed());
        }
        summary
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => println!("\n{}\n", ReplCommand::help()),
            ReplCommand::Personas => {
                println!("\n{}\n", ConsoleFormatter::format_roster(&self.roster))
            }
            ReplCommand::Transcript => {
                println!();
                for message in self.orchestrator.transcript().messages() {
                    println!("{}", ConsoleFormatter::format_message(message, &self.roster));
                }
            }
            ReplCommand::Save(path) => match self.save_transcript(&path) {
                Ok(()) => println!("Transcript saved to {}", path.display()),
                Err(e) => {
                    warn!("Could not save transcript to {}: {}", path.display(), e);
                    eprintln!("Could not save transcript: {}", e);
                }
            },
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn save_transcript(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self.orchestrator.transcript())?;
        std::fs::write(path, json)
    }
}

/// Drive a direct round; `None` if the user interrupted it first.
///
/// Dropping the round leaves the orchestrator waiting, so the caller must
/// abandon it.
async fn until_interrupted<F: Future>(
    round: F,
    interrupts: Option<&mut Interrupts>,
) -> Option<F::Output> {
    let Some(interrupts) = interrupts else {
        return Some(round.await);
    };
    interrupts.clear();
    tokio::select! {
        output = round => Some(output),
        Some(()) = interrupts.recv() => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use council_application::ClientError;
    use council_domain::{
        DiscussionState, HistoryEntry, PersonaReply, PromptTemplate, RoundResult,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Answers the first `answered` requests, then never replies
    struct StallingClient {
        roster: PersonaRoster,
        answered: usize,
        calls: AtomicUsize,
    }

    impl StallingClient {
        fn new(answered: usize) -> Self {
            Self {
                roster: PersonaRoster::advisory_board(),
                answered,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AdvisorClient for StallingClient {
        async fn request_replies(
            &self,
            _prompt: &str,
            _history: Vec<HistoryEntry>,
        ) -> Result<RoundResult, ClientError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) >= self.answered {
                std::future::pending::<()>().await;
            }
            Ok(RoundResult::new(
                self.roster
                    .iter()
                    .map(|p| PersonaReply::success(p, format!("{} answers", p.name())))
                    .collect(),
            ))
        }
    }

    fn repl(client: StallingClient, interrupts: Interrupts) -> ChatRepl {
        ChatRepl::new(
            Arc::new(client),
            Arc::new(PersonaRoster::advisory_board()),
            DiscussionParams::default(),
        )
        .with_progress(false)
        .with_interrupts(interrupts)
    }

    /// Send one interrupt every 10ms, `count` times
    fn press_ctrl_c(tx: tokio::sync::mpsc::UnboundedSender<()>, count: usize) {
        tokio::spawn(async move {
            for _ in 0..count {
                tokio::time::sleep(Duration::from_millis(10)).await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_abandons_stalled_round() {
        let (tx, interrupts) = Interrupts::channel();
        let mut repl = repl(StallingClient::new(0), interrupts);
        press_ctrl_c(tx, 1);

        repl.process_input("Is anyone there?").await;

        assert_eq!(repl.orchestrator.state(), DiscussionState::Idle);
        let messages = repl.orchestrator.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content(), PromptTemplate::ROUND_CANCELLED_NOTICE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupts_reach_rounds_after_a_cancelled_cycle() {
        let (tx, interrupts) = Interrupts::channel();
        let mut repl = repl(StallingClient::new(1), interrupts);
        press_ctrl_c(tx, 2);

        // First interrupt lands in the pause before follow-up round 1
        repl.process_input("first").await;
        assert_eq!(repl.orchestrator.transcript().len(), 4);
        assert_eq!(repl.orchestrator.state(), DiscussionState::Idle);

        // Second interrupt frees the stalled direct round
        repl.process_input("second").await;
        let transcript = repl.orchestrator.transcript();
        assert_eq!(transcript.len(), 6);
        assert!(transcript.last().unwrap().is_notice());
        assert_eq!(repl.orchestrator.state(), DiscussionState::Idle);
    }

    #[tokio::test]
    async fn test_stale_interrupts_are_discarded() {
        let (tx, interrupts) = Interrupts::channel();
        let mut repl = ChatRepl::new(
            Arc::new(StallingClient::new(usize::MAX)),
            Arc::new(PersonaRoster::advisory_board()),
            DiscussionParams::default().without_delays(),
        )
        .with_progress(false)
        .with_interrupts(interrupts);
        tx.send(()).unwrap();

        repl.process_input("hello").await;

        // User message, the direct round and two follow-up rounds
        assert_eq!(repl.orchestrator.transcript().len(), 10);
    }
}
