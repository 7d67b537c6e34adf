//! Run Discussion use case
//!
//! Sequences rounds over a transcript: an opening round on a seeded topic,
//! a direct round for each user submission, and a fixed number of
//! autonomous follow-up rounds after either.

use crate::config::DiscussionParams;
use crate::ports::advisor_client::{AdvisorClient, ClientError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::DiscussionProgress;
use council_domain::{
    DiscussionState, HistoryEntry, Message, PersonaRoster, PromptTemplate, RoundKind, RoundResult,
    Transcript, random_topic,
};
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors for requests the orchestrator refuses outright
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DiscussionError {
    #[error("A round is already in progress")]
    Busy,

    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Discussion has already started")]
    AlreadyStarted,
}

/// Result of an opening or user round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Replies were merged; `failed` personas were left out
    Merged { appended: usize, failed: usize },
    /// The whole round failed; a notice was appended
    Failed { reason: String },
}

impl RoundOutcome {
    pub fn is_merged(&self) -> bool {
        matches!(self, RoundOutcome::Merged { .. })
    }
}

/// Why an autonomous cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEnd {
    /// All configured follow-up rounds ran
    Exhausted,
    /// The cancellation token fired between rounds
    Cancelled,
    /// A round's aggregate request failed
    Failed,
    /// The discussion was not active
    NotActive,
}

/// Summary of one autonomous continuation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    pub rounds_completed: usize,
    pub end: CycleEnd,
}

/// Drives a multi-party discussion over one exclusively owned transcript
pub struct DiscussionOrchestrator<C: AdvisorClient + ?Sized> {
    client: Arc<C>,
    roster: Arc<PersonaRoster>,
    params: DiscussionParams,
    transcript: Transcript,
    state: DiscussionState,
    logger: Arc<dyn ConversationLogger>,
}

impl<C: AdvisorClient + ?Sized> DiscussionOrchestrator<C> {
    pub fn new(client: Arc<C>, roster: Arc<PersonaRoster>, params: DiscussionParams) -> Self {
        Self {
            client,
            roster,
            params,
            transcript: Transcript::new(),
            state: DiscussionState::Idle,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> DiscussionState {
        self.state
    }

    pub fn params(&self) -> &DiscussionParams {
        &self.params
    }

    pub fn roster(&self) -> &PersonaRoster {
        &self.roster
    }

    /// Seed an empty transcript with `topic` and run the opening round
    pub async fn start(
        &mut self,
        topic: &str,
        progress: &dyn DiscussionProgress,
    ) -> Result<RoundOutcome, DiscussionError> {
        if !self.transcript.is_empty() {
            return Err(DiscussionError::AlreadyStarted);
        }
        if topic.trim().is_empty() {
            return Err(DiscussionError::EmptyInput);
        }

        info!("Opening discussion: {}", topic);
        self.state = DiscussionState::AwaitingInitialRound;
        self.append(Message::user(topic), progress);

        Ok(self
            .direct_round(RoundKind::Opening, topic, Vec::new(), progress)
            .await)
    }

    /// Like [`start`](Self::start) with a topic drawn from the fixed pool
    pub async fn start_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        progress: &dyn DiscussionProgress,
    ) -> Result<RoundOutcome, DiscussionError> {
        let topic = random_topic(rng);
        self.start(topic, progress).await
    }

    /// Append user input and run the direct round answering it
    pub async fn submit(
        &mut self,
        text: &str,
        progress: &dyn DiscussionProgress,
    ) -> Result<RoundOutcome, DiscussionError> {
        if self.state.is_loading() {
            return Err(DiscussionError::Busy);
        }
        if text.trim().is_empty() {
            return Err(DiscussionError::EmptyInput);
        }

        // History is everything before the new message
        let history = self.transcript.history();
        self.state = DiscussionState::AwaitingUserRound;
        self.append(Message::user(text), progress);

        Ok(self
            .direct_round(RoundKind::User, text, history, progress)
            .await)
    }

    /// Run the autonomous follow-up rounds.
    ///
    /// Cancellation is checked before each round and during the pause
    /// between rounds; a request already sent always runs to completion.
    /// The orchestrator is idle afterwards.
    pub async fn continue_discussion(
        &mut self,
        cancel: &CancellationToken,
        progress: &dyn DiscussionProgress,
    ) -> CycleSummary {
        if !self.state.is_active() {
            return CycleSummary {
                rounds_completed: 0,
                end: CycleEnd::NotActive,
            };
        }

        let mut rounds_completed = 0;
        let mut end = CycleEnd::Exhausted;

        for round in 1..=self.params.autonomous_rounds {
            if cancel.is_cancelled() {
                end = CycleEnd::Cancelled;
                break;
            }
            tokio::select! {
                _ = cancel.cancelled() => {
                    end = CycleEnd::Cancelled;
                    break;
                }
                _ = tokio::time::sleep(self.params.round_delay) => {}
            }

            let kind = RoundKind::Autonomous(round);
            let window = self.transcript.recent_window(self.params.context_window);
            debug!("{}: summarizing {} recent messages", kind, window.len());
            let prompt = PromptTemplate::continuation(window);
            let history = self.transcript.history();

            progress.on_round_start(kind);
            self.log_round_started(kind, &prompt);

            match self.client.request_replies(&prompt, history).await {
                Ok(round_result) => {
                    let (appended, failed) = self.merge(kind, &round_result, progress);
                    progress.on_round_complete(kind, appended, failed);
                    self.state = self.state.after_autonomous_round();
                    rounds_completed += 1;
                }
                Err(e) => {
                    warn!("Error in continuation round {}: {}", round, e);
                    self.log_round_failed(kind, &e);
                    progress.on_round_failed(kind, &e.to_string());
                    end = CycleEnd::Failed;
                    break;
                }
            }
        }

        info!(
            "Autonomous cycle ended after {} rounds ({:?})",
            rounds_completed, end
        );
        self.state = DiscussionState::Idle;
        CycleSummary {
            rounds_completed,
            end,
        }
    }

    /// Leave the active state; a no-op while a direct round is loading
    pub fn stop(&mut self) {
        if !self.state.is_loading() {
            self.state = DiscussionState::Idle;
        }
    }

    /// Give up on an opening or user round whose request was dropped
    /// before it resolved.
    ///
    /// Appends a notice and returns to idle. Returns false, changing
    /// nothing, when no such round is pending.
    pub fn abandon_round(&mut self, progress: &dyn DiscussionProgress) -> bool {
        let kind = match self.state {
            DiscussionState::AwaitingInitialRound => RoundKind::Opening,
            DiscussionState::AwaitingUserRound => RoundKind::User,
            _ => return false,
        };

        warn!("{} abandoned before replies arrived", kind);
        self.logger.log(ConversationEvent::round_abandoned(kind));
        progress.on_round_failed(kind, PromptTemplate::ROUND_CANCELLED_NOTICE);
        self.append(Message::notice(PromptTemplate::ROUND_CANCELLED_NOTICE), progress);
        self.state = DiscussionState::Idle;
        true
    }

    async fn direct_round(
        &mut self,
        kind: RoundKind,
        prompt: &str,
        history: Vec<HistoryEntry>,
        progress: &dyn DiscussionProgress,
    ) -> RoundOutcome {
        progress.on_round_start(kind);
        self.log_round_started(kind, prompt);

        match self.client.request_replies(prompt, history).await {
            Ok(round_result) => {
                let (appended, failed) = self.merge(kind, &round_result, progress);
                progress.on_round_complete(kind, appended, failed);
                self.state = self.state.after_direct_round();
                RoundOutcome::Merged { appended, failed }
            }
            Err(e) => {
                warn!("Error getting responses for {}: {}", kind, e);
                self.log_round_failed(kind, &e);
                progress.on_round_failed(kind, &e.to_string());
                self.append(Message::notice(PromptTemplate::ROUND_FAILED_NOTICE), progress);
                self.state = DiscussionState::Idle;
                RoundOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Merge a round and announce each new message; returns (appended, failed)
    fn merge(
        &mut self,
        kind: RoundKind,
        round: &RoundResult,
        progress: &dyn DiscussionProgress,
    ) -> (usize, usize) {
        if !round.matches_roster(&self.roster) {
            warn!(
                "{} returned {} replies out of roster order; merging by roster",
                kind,
                round.len()
            );
        }

        let failed = round.failures().count();
        let appended = self.transcript.merge_round(round, &self.roster);
        for message in appended {
            progress.on_message(message);
            Self::log_message(self.logger.as_ref(), message);
        }
        (appended.len(), failed)
    }

    fn append(&mut self, message: Message, progress: &dyn DiscussionProgress) {
        let message = self.transcript.push(message);
        progress.on_message(message);
        Self::log_message(self.logger.as_ref(), message);
    }

    fn log_message(logger: &dyn ConversationLogger, message: &Message) {
        logger.log(ConversationEvent::message_appended(message));
    }

    fn log_round_started(&self, kind: RoundKind, prompt: &str) {
        self.logger.log(ConversationEvent::round_started(
            kind,
            prompt,
            self.transcript.len(),
        ));
    }

    fn log_round_failed(&self, kind: RoundKind, error: &ClientError) {
        self.logger
            .log(ConversationEvent::round_failed(kind, &error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoDiscussionProgress;
    use async_trait::async_trait;
    use council_domain::{Author, PersonaReply};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    type Scripted = Result<Vec<Option<String>>, ClientError>;

    /// Client answering from a queue; `None` entries are persona failures
    struct ScriptedClient {
        roster: PersonaRoster,
        queue: Mutex<VecDeque<Scripted>>,
        requests: Mutex<Vec<(String, Vec<HistoryEntry>)>>,
        counter: Mutex<usize>,
        reversed: bool,
    }

    impl ScriptedClient {
        fn new(script: Vec<Scripted>) -> Self {
            Self {
                roster: PersonaRoster::advisory_board(),
                queue: Mutex::new(script.into()),
                requests: Mutex::new(Vec::new()),
                counter: Mutex::new(0),
                reversed: false,
            }
        }

        /// Return every round's replies in reverse roster order
        fn reversed(mut self) -> Self {
            self.reversed = true;
            self
        }

        fn requests(&self) -> Vec<(String, Vec<HistoryEntry>)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AdvisorClient for ScriptedClient {
        async fn request_replies(
            &self,
            prompt: &str,
            history: Vec<HistoryEntry>,
        ) -> Result<RoundResult, ClientError> {
            self.requests
                .lock()
                .unwrap()
                .push((prompt.to_string(), history));

            let next = self.queue.lock().unwrap().pop_front();
            let mut counter = self.counter.lock().unwrap();
            *counter += 1;
            let n = *counter;

            let round = match next {
                Some(Err(e)) => Err(e),
                Some(Ok(slots)) => Ok(RoundResult::new(
                    self.roster
                        .iter()
                        .zip(slots)
                        .map(|(persona, slot)| match slot {
                            Some(text) => PersonaReply::success(persona, text),
                            None => PersonaReply::failure(
                                persona,
                                PromptTemplate::persona_failure(persona.name()),
                            ),
                        })
                        .collect(),
                )),
                // Default: every persona answers with a unique line
                None => Ok(RoundResult::new(
                    self.roster
                        .iter()
                        .map(|p| PersonaReply::success(p, format!("r{}-{}", n, p.id())))
                        .collect(),
                )),
            }?;

            if self.reversed {
                let mut replies = round.into_replies();
                replies.reverse();
                return Ok(RoundResult::new(replies));
            }
            Ok(round)
        }
    }

    fn all(texts: [&str; 3]) -> Scripted {
        Ok(texts.iter().map(|t| Some(t.to_string())).collect())
    }

    fn orchestrator(client: ScriptedClient) -> (DiscussionOrchestrator<ScriptedClient>, Arc<ScriptedClient>) {
        let client = Arc::new(client);
        let orchestrator = DiscussionOrchestrator::new(
            Arc::clone(&client),
            Arc::new(PersonaRoster::advisory_board()),
            DiscussionParams::default().without_delays(),
        );
        (orchestrator, client)
    }

    fn persona_ids(transcript: &Transcript) -> Vec<String> {
        transcript
            .messages()
            .iter()
            .filter_map(|m| m.author().persona_id().map(|id| id.to_string()))
            .collect()
    }

    /// Records messages as they are announced
    #[derive(Default)]
    struct RecordingProgress {
        messages: Mutex<Vec<String>>,
        failures: Mutex<Vec<RoundKind>>,
    }

    impl DiscussionProgress for RecordingProgress {
        fn on_round_start(&self, _kind: RoundKind) {}

        fn on_message(&self, message: &Message) {
            self.messages
                .lock()
                .unwrap()
                .push(message.content().to_string());
        }

        fn on_round_failed(&self, kind: RoundKind, _reason: &str) {
            self.failures.lock().unwrap().push(kind);
        }
    }

    #[tokio::test]
    async fn test_opening_round_seeds_topic() {
        let (mut orchestrator, client) =
            orchestrator(ScriptedClient::new(vec![all(["e", "s", "d"])]));
        let progress = RecordingProgress::default();

        let outcome = orchestrator
            .start("Should we colonize Mars or fix Earth first?", &progress)
            .await
            .unwrap();

        assert_eq!(outcome, RoundOutcome::Merged { appended: 3, failed: 0 });
        assert_eq!(orchestrator.transcript().len(), 4);
        assert!(orchestrator.transcript().messages()[0].author().is_user());
        assert_eq!(orchestrator.state().turns_since_user(), Some(0));
        assert!(client.requests()[0].1.is_empty());
        assert_eq!(
            *progress.messages.lock().unwrap(),
            vec!["Should we colonize Mars or fix Earth first?", "e", "s", "d"]
        );
    }

    #[tokio::test]
    async fn test_start_twice_rejected() {
        let (mut orchestrator, _) = orchestrator(ScriptedClient::new(vec![]));
        orchestrator.start("topic", &NoDiscussionProgress).await.unwrap();
        assert_eq!(
            orchestrator.start("again", &NoDiscussionProgress).await,
            Err(DiscussionError::AlreadyStarted)
        );
    }

    #[tokio::test]
    async fn test_start_random_uses_topic_pool() {
        use rand::SeedableRng;
        let (mut orchestrator, _) = orchestrator(ScriptedClient::new(vec![]));
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        orchestrator
            .start_random(&mut rng, &NoDiscussionProgress)
            .await
            .unwrap();
        let topic = orchestrator.transcript().messages()[0].content();
        assert!(council_domain::TOPICS.contains(&topic));
    }

    #[tokio::test]
    async fn test_submit_merges_successes_in_roster_order() {
        let (mut orchestrator, client) =
            orchestrator(ScriptedClient::new(vec![all(["e1", "s1", "d1"])]));

        orchestrator
            .submit("What will technology look like in 2030?", &NoDiscussionProgress)
            .await
            .unwrap();

        let transcript = orchestrator.transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(persona_ids(transcript), vec!["elon", "sam", "dario"]);
        assert!(transcript.messages()[1..].iter().all(|m| !m.content().is_empty()));
        // History excludes the message being answered
        assert!(client.requests()[0].1.is_empty());
        assert_eq!(client.requests()[0].0, "What will technology look like in 2030?");
    }

    #[tokio::test]
    async fn test_submit_merges_reversed_replies_in_roster_order() {
        let (mut orchestrator, _) =
            orchestrator(ScriptedClient::new(vec![all(["e1", "s1", "d1"])]).reversed());
        let progress = RecordingProgress::default();

        orchestrator.submit("Who goes first?", &progress).await.unwrap();

        assert_eq!(persona_ids(orchestrator.transcript()), vec!["elon", "sam", "dario"]);
        assert_eq!(
            *progress.messages.lock().unwrap(),
            vec!["Who goes first?", "e1", "s1", "d1"]
        );
    }

    #[tokio::test]
    async fn test_submit_drops_failed_persona() {
        let (mut orchestrator, _) = orchestrator(ScriptedClient::new(vec![Ok(vec![
            Some("e1".into()),
            None,
            Some("d1".into()),
        ])]));

        let outcome = orchestrator.submit("Mars?", &NoDiscussionProgress).await.unwrap();

        assert_eq!(outcome, RoundOutcome::Merged { appended: 2, failed: 1 });
        assert_eq!(persona_ids(orchestrator.transcript()), vec!["elon", "dario"]);
    }

    #[tokio::test]
    async fn test_submit_history_is_prior_transcript() {
        let (mut orchestrator, client) = orchestrator(ScriptedClient::new(vec![]));
        orchestrator.start("topic", &NoDiscussionProgress).await.unwrap();
        orchestrator.submit("follow-up", &NoDiscussionProgress).await.unwrap();

        let (_, history) = &client.requests()[1];
        assert_eq!(history.len(), 4);
        assert_eq!(history[0], HistoryEntry::user("topic"));
        assert!(!history.iter().any(|h| h.content == "follow-up"));
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_and_busy() {
        let (mut orchestrator, client) = orchestrator(ScriptedClient::new(vec![]));
        assert_eq!(
            orchestrator.submit("  ", &NoDiscussionProgress).await,
            Err(DiscussionError::EmptyInput)
        );

        orchestrator.state = DiscussionState::AwaitingUserRound;
        assert_eq!(
            orchestrator.submit("hello", &NoDiscussionProgress).await,
            Err(DiscussionError::Busy)
        );
        assert!(client.requests().is_empty());
        assert!(orchestrator.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_whole_round_failure_appends_notice() {
        let (mut orchestrator, _) = orchestrator(ScriptedClient::new(vec![Err(
            ClientError::Transport("connection refused".into()),
        )]));
        let progress = RecordingProgress::default();

        let outcome = orchestrator.submit("hello", &progress).await.unwrap();

        assert!(!outcome.is_merged());
        let last = orchestrator.transcript().last().unwrap();
        assert_eq!(last.author(), &Author::Notice);
        assert_eq!(last.content(), PromptTemplate::ROUND_FAILED_NOTICE);
        assert_eq!(orchestrator.state(), DiscussionState::Idle);
        assert_eq!(*progress.failures.lock().unwrap(), vec![RoundKind::User]);

        // The failed cycle does not continue
        let summary = orchestrator
            .continue_discussion(&CancellationToken::new(), &NoDiscussionProgress)
            .await;
        assert_eq!(summary.end, CycleEnd::NotActive);

        // The user may still submit afterwards
        let outcome = orchestrator.submit("again", &NoDiscussionProgress).await.unwrap();
        assert!(outcome.is_merged());
    }

    #[tokio::test]
    async fn test_autonomous_cycle_runs_two_bounded_rounds() {
        let (mut orchestrator, client) = orchestrator(ScriptedClient::new(vec![]));
        orchestrator.start("topic", &NoDiscussionProgress).await.unwrap();
        orchestrator.submit("user turn", &NoDiscussionProgress).await.unwrap();

        let summary = orchestrator
            .continue_discussion(&CancellationToken::new(), &NoDiscussionProgress)
            .await;

        assert_eq!(
            summary,
            CycleSummary {
                rounds_completed: 2,
                end: CycleEnd::Exhausted
            }
        );
        assert_eq!(orchestrator.transcript().len(), 8 + 6);
        assert_eq!(orchestrator.state(), DiscussionState::Idle);

        let requests = client.requests();
        assert_eq!(requests.len(), 4);
        for (prompt, history) in &requests[2..] {
            assert!(prompt.starts_with("Continue the discussion."));
            // Full transcript goes out as history, only the tail is summarized
            let window_start = history.len().saturating_sub(6);
            for (i, entry) in history.iter().enumerate() {
                let line = format!("{}: {}", entry.author.label(), entry.content);
                assert_eq!(prompt.contains(&line), i >= window_start, "entry {}", i);
            }
        }
        assert_eq!(requests[3].1.len(), requests[2].1.len() + 3);
    }

    #[tokio::test]
    async fn test_autonomous_failure_keeps_merged_rounds() {
        let (mut orchestrator, _) = orchestrator(ScriptedClient::new(vec![
            all(["e", "s", "d"]),
            all(["e2", "s2", "d2"]),
            Err(ClientError::Status {
                status: 500,
                message: "Failed to process chat request".into(),
            }),
        ]));
        orchestrator.start("topic", &NoDiscussionProgress).await.unwrap();
        let summary = orchestrator
            .continue_discussion(&CancellationToken::new(), &NoDiscussionProgress)
            .await;

        assert_eq!(summary.rounds_completed, 1);
        assert_eq!(summary.end, CycleEnd::Failed);
        assert_eq!(orchestrator.transcript().len(), 7);
        // Autonomous failures are not surfaced as notices
        assert!(!orchestrator.transcript().last().unwrap().is_notice());
    }

    #[tokio::test]
    async fn test_cancelled_cycle_runs_no_rounds() {
        let (mut orchestrator, client) = orchestrator(ScriptedClient::new(vec![]));
        orchestrator.start("topic", &NoDiscussionProgress).await.unwrap();

        let cancel = CancellationToken::new();
        cancel.cancel();
        let summary = orchestrator
            .continue_discussion(&cancel, &NoDiscussionProgress)
            .await;

        assert_eq!(summary.end, CycleEnd::Cancelled);
        assert_eq!(summary.rounds_completed, 0);
        assert_eq!(client.requests().len(), 1);
        assert_eq!(orchestrator.state(), DiscussionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_delay() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let mut orchestrator = DiscussionOrchestrator::new(
            Arc::clone(&client),
            Arc::new(PersonaRoster::advisory_board()),
            DiscussionParams::default().with_round_delay(Duration::from_secs(30)),
        );
        orchestrator.start("topic", &NoDiscussionProgress).await.unwrap();

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            trigger.cancel();
        });

        let summary = orchestrator
            .continue_discussion(&cancel, &NoDiscussionProgress)
            .await;
        assert_eq!(summary.end, CycleEnd::Cancelled);
        assert_eq!(client.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_abandon_pending_round() {
        let (mut orchestrator, _) = orchestrator(ScriptedClient::new(vec![]));
        let progress = RecordingProgress::default();
        assert!(!orchestrator.abandon_round(&progress));
        assert!(orchestrator.transcript().is_empty());

        orchestrator.state = DiscussionState::AwaitingUserRound;
        assert!(orchestrator.abandon_round(&progress));

        assert_eq!(orchestrator.state(), DiscussionState::Idle);
        let last = orchestrator.transcript().last().unwrap();
        assert!(last.is_notice());
        assert_eq!(last.content(), PromptTemplate::ROUND_CANCELLED_NOTICE);
        assert_eq!(*progress.failures.lock().unwrap(), vec![RoundKind::User]);
        assert!(orchestrator.transcript().history().is_empty());
    }

    #[tokio::test]
    async fn test_stop_returns_to_idle() {
        let (mut orchestrator, _) = orchestrator(ScriptedClient::new(vec![]));
        orchestrator.start("topic", &NoDiscussionProgress).await.unwrap();
        assert!(orchestrator.state().is_active());
        orchestrator.stop();
        assert_eq!(orchestrator.state(), DiscussionState::Idle);
    }
}
