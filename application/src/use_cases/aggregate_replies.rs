//! Aggregate Replies use case
//!
//! Fans one prompt out to every persona of the roster, runs the calls
//! concurrently and joins on all of them. A failing persona never aborts its
//! siblings; it contributes a failure entry instead.

use crate::ports::advisor_client::{AdvisorClient, ClientError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use async_trait::async_trait;
use council_domain::core::string::preview;
use council_domain::{
    HistoryEntry, Model, Persona, PersonaReply, PersonaRoster, PromptTemplate, RoundResult,
    persona_context,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that reject a request before any persona is called
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Message is required")]
    InvalidPrompt,

    #[error("Generation service is not configured: {0}")]
    NotConfigured(#[source] GatewayError),
}

/// Input for the AggregateReplies use case
#[derive(Debug, Clone)]
pub struct AggregateInput {
    /// The new prompt every persona answers
    pub prompt: String,
    /// Shared conversation so far, oldest first
    pub history: Vec<HistoryEntry>,
}

impl AggregateInput {
    pub fn new(prompt: impl Into<String>, history: Vec<HistoryEntry>) -> Self {
        Self {
            prompt: prompt.into(),
            history,
        }
    }
}

/// Use case producing one reply per configured persona
pub struct AggregateRepliesUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    roster: Arc<PersonaRoster>,
    model: Model,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> AggregateRepliesUseCase<G> {
    pub fn new(gateway: Arc<G>, roster: Arc<PersonaRoster>, model: Model) -> Self {
        Self {
            gateway,
            roster,
            model,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn roster(&self) -> &PersonaRoster {
        &self.roster
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: AggregateInput) -> Result<RoundResult, AggregateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AggregateInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<RoundResult, AggregateError> {
        if input.prompt.is_empty() {
            return Err(AggregateError::InvalidPrompt);
        }
        self.gateway
            .ensure_configured()
            .map_err(AggregateError::NotConfigured)?;

        info!(
            "Fanning out to {} personas ({} history entries)",
            self.roster.len(),
            input.history.len()
        );
        progress.on_fanout_start(self.roster.len());

        let prompt: Arc<str> = Arc::from(input.prompt);
        let history = Arc::new(input.history);
        let mut join_set = JoinSet::new();

        for (index, persona) in self.roster.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let persona = persona.clone();
            let model = self.model.clone();
            let prompt = Arc::clone(&prompt);
            let history = Arc::clone(&history);

            join_set.spawn(async move {
                let result = Self::ask_persona(&gateway, &model, &persona, &prompt, &history).await;
                (index, persona, result)
            });
        }

        // Slots are indexed by roster position so completion order never
        // leaks into the result.
        let mut slots: Vec<Option<PersonaReply>> = vec![None; self.roster.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, persona, Ok(content))) => {
                    debug!(
                        "{} replied: {}",
                        persona.name(),
                        preview(&content, 80)
                    );
                    progress.on_persona_complete(&persona, true);
                    slots[index] = Some(PersonaReply::success(&persona, content));
                }
                Ok((index, persona, Err(e))) => {
                    warn!("Error getting response from {}: {}", persona.name(), e);
                    progress.on_persona_complete(&persona, false);
                    self.logger.log(ConversationEvent::persona_failed(
                        persona.id(),
                        &e.to_string(),
                    ));
                    slots[index] = Some(PersonaReply::failure(
                        &persona,
                        PromptTemplate::persona_failure(persona.name()),
                    ));
                }
                Err(e) => {
                    warn!("Persona task join error: {}", e);
                }
            }
        }

        // A panicked task leaves its slot empty; it still owes a failure entry.
        let replies = slots
            .into_iter()
            .zip(self.roster.iter())
            .map(|(slot, persona)| {
                slot.unwrap_or_else(|| {
                    PersonaReply::failure(persona, PromptTemplate::persona_failure(persona.name()))
                })
            })
            .collect();

        progress.on_fanout_complete();
        Ok(RoundResult::new(replies))
    }

    /// Query a single persona
    async fn ask_persona(
        gateway: &G,
        model: &Model,
        persona: &Persona,
        prompt: &str,
        history: &[HistoryEntry],
    ) -> Result<String, GatewayError> {
        let turns = persona_context(history, persona.id());
        debug!(
            "{}: {} of {} history entries in context",
            persona.id(),
            turns.len(),
            history.len()
        );

        let session = gateway.create_session(model, turns).await?;
        let message = PromptTemplate::persona_message(persona.instructions(), prompt);
        session.send(&message).await
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> AdvisorClient for AggregateRepliesUseCase<G> {
    async fn request_replies(
        &self,
        prompt: &str,
        history: Vec<HistoryEntry>,
    ) -> Result<RoundResult, ClientError> {
        self.execute(AggregateInput::new(prompt, history))
            .await
            .map_err(|e| match e {
                AggregateError::InvalidPrompt => ClientError::InvalidRequest(e.to_string()),
                AggregateError::NotConfigured(inner) => {
                    ClientError::NotConfigured(inner.to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::LlmSession;
    use council_domain::{ChatTurn, PersonaId, TurnRole};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// What a scripted persona session does when asked
    #[derive(Clone)]
    enum Script {
        Reply { text: String, delay_ms: u64 },
        Fail(String),
    }

    /// Record of one session, for assertions on what was sent
    #[derive(Debug, Clone)]
    struct SentCall {
        history: Vec<ChatTurn>,
        message: String,
    }

    /// Gateway handing out sessions that route on the persona named in the message
    struct ScriptedGateway {
        scripts: HashMap<String, Script>,
        configured: bool,
        sessions_created: AtomicUsize,
        calls: Arc<Mutex<Vec<SentCall>>>,
    }

    impl ScriptedGateway {
        fn new() -> Self {
            Self {
                scripts: HashMap::new(),
                configured: true,
                sessions_created: AtomicUsize::new(0),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::new()
            }
        }

        fn script(mut self, persona: &str, script: Script) -> Self {
            self.scripts.insert(persona.to_string(), script);
            self
        }

        fn calls(&self) -> Vec<SentCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn ensure_configured(&self) -> Result<(), GatewayError> {
            if self.configured {
                Ok(())
            } else {
                Err(GatewayError::MissingCredentials("GEMINI_API_KEY".into()))
            }
        }

        async fn create_session(
            &self,
            model: &Model,
            history: Vec<ChatTurn>,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.sessions_created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(RoutingSession {
                model: model.clone(),
                history,
                scripts: self.scripts.clone(),
                calls: Arc::clone(&self.calls),
            }))
        }
    }

    /// Picks its script from the persona name embedded in the instructions
    struct RoutingSession {
        model: Model,
        history: Vec<ChatTurn>,
        scripts: HashMap<String, Script>,
        calls: Arc<Mutex<Vec<SentCall>>>,
    }

    #[async_trait]
    impl LlmSession for RoutingSession {
        fn model(&self) -> &Model {
            &self.model
        }

        fn history(&self) -> &[ChatTurn] {
            &self.history
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.calls.lock().unwrap().push(SentCall {
                history: self.history.clone(),
                message: content.to_string(),
            });
            let script = self
                .scripts
                .iter()
                .find(|(name, _)| content.contains(name.as_str()))
                .map(|(_, s)| s.clone());
            match script {
                Some(Script::Reply { text, delay_ms }) => {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    Ok(text)
                }
                Some(Script::Fail(e)) => Err(GatewayError::RequestFailed(e)),
                None => Ok("(default)".to_string()),
            }
        }
    }

    fn use_case(gateway: ScriptedGateway) -> (AggregateRepliesUseCase<ScriptedGateway>, Arc<ScriptedGateway>) {
        let gateway = Arc::new(gateway);
        let use_case = AggregateRepliesUseCase::new(
            Arc::clone(&gateway),
            Arc::new(PersonaRoster::advisory_board()),
            Model::default(),
        );
        (use_case, gateway)
    }

    fn reply(text: &str, delay_ms: u64) -> Script {
        Script::Reply {
            text: text.to_string(),
            delay_ms,
        }
    }

    #[tokio::test]
    async fn test_one_reply_per_persona() {
        let (use_case, _) = use_case(
            ScriptedGateway::new()
                .script("Elon Musk", reply("Build it.", 0))
                .script("Sam Altman", reply("Timing.", 0))
                .script("Dario Amodei", reply("Carefully.", 0)),
        );

        let round = use_case
            .execute(AggregateInput::new(
                "What will technology look like in 2030?",
                vec![],
            ))
            .await
            .unwrap();

        assert_eq!(round.len(), 3);
        assert!(round.matches_roster(use_case.roster()));
        let contents: Vec<_> = round.replies().iter().filter_map(|r| r.content()).collect();
        assert_eq!(contents, vec!["Build it.", "Timing.", "Carefully."]);
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let (use_case, _) = use_case(
            ScriptedGateway::new()
                .script("Elon Musk", reply("Build it.", 0))
                .script("Sam Altman", Script::Fail("quota exceeded".into()))
                .script("Dario Amodei", reply("Carefully.", 0)),
        );

        let round = use_case
            .execute(AggregateInput::new("Mars?", vec![]))
            .await
            .unwrap();

        assert_eq!(round.len(), 3);
        let sam = &round.replies()[1];
        assert_eq!(sam.persona_id, PersonaId::new("sam").unwrap());
        assert_eq!(sam.content(), None);
        assert_eq!(sam.error(), Some("Failed to get response from Sam Altman"));
        assert_eq!(round.successes().count(), 2);
    }

    #[tokio::test]
    async fn test_order_follows_roster_not_completion() {
        let (use_case, _) = use_case(
            ScriptedGateway::new()
                .script("Elon Musk", reply("slow", 60))
                .script("Sam Altman", reply("medium", 30))
                .script("Dario Amodei", reply("fast", 0)),
        );

        let round = use_case
            .execute(AggregateInput::new("Go", vec![]))
            .await
            .unwrap();

        let ids: Vec<_> = round.replies().iter().map(|r| r.persona_id.as_str()).collect();
        assert_eq!(ids, vec!["elon", "sam", "dario"]);
        assert_eq!(round.replies()[0].content(), Some("slow"));
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected_without_calls() {
        let (use_case, gateway) = use_case(ScriptedGateway::new());

        let err = use_case
            .execute(AggregateInput::new("", vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, AggregateError::InvalidPrompt));
        assert_eq!(gateway.sessions_created.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_credentials_rejected_without_calls() {
        let (use_case, gateway) = use_case(ScriptedGateway::unconfigured());

        let err = use_case
            .execute(AggregateInput::new("Hello", vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, AggregateError::NotConfigured(_)));
        assert_eq!(gateway.sessions_created.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_each_persona_sees_only_its_own_turns() {
        let (use_case, gateway) = use_case(ScriptedGateway::new());
        let id = |s: &str| PersonaId::new(s).unwrap();
        let history = vec![
            HistoryEntry::user("topic"),
            HistoryEntry::persona(id("elon"), "Elon Musk", "elon-said"),
            HistoryEntry::persona(id("sam"), "Sam Altman", "sam-said"),
            HistoryEntry::persona(id("dario"), "Dario Amodei", "dario-said"),
        ];

        use_case
            .execute(AggregateInput::new("next", history))
            .await
            .unwrap();

        let calls = gateway.calls();
        assert_eq!(calls.len(), 3);
        for call in &calls {
            let own: Vec<_> = call
                .history
                .iter()
                .filter(|t| t.role == TurnRole::Model)
                .collect();
            assert_eq!(own.len(), 1);
            let speaker = own[0].content.trim_end_matches("-said");
            let persona = use_case.roster().find(speaker).unwrap();
            assert!(call.message.starts_with(persona.instructions()));
            assert!(call.message.ends_with("User question: next"));
        }
    }

    #[tokio::test]
    async fn test_advisor_client_maps_errors() {
        let (use_case, _) = use_case(ScriptedGateway::unconfigured());
        let err = use_case.request_replies("hi", vec![]).await.unwrap_err();
        assert!(matches!(err, ClientError::NotConfigured(_)));

        let (use_case, _) = use_case_default();
        let err = use_case.request_replies("", vec![]).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    fn use_case_default() -> (AggregateRepliesUseCase<ScriptedGateway>, Arc<ScriptedGateway>) {
        use_case(ScriptedGateway::new())
    }
}
