//! Prompt templates for persona calls

use crate::conversation::Message;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Shown to the user when a whole round could not be fetched
    pub const ROUND_FAILED_NOTICE: &'static str =
        "Sorry, there was an error getting responses. Please try again.";

    /// Shown when the user interrupts a round before the replies arrive
    pub const ROUND_CANCELLED_NOTICE: &'static str = "Request cancelled.";

    /// Outbound message for one persona: its instructions, then the prompt
    pub fn persona_message(instructions: &str, prompt: &str) -> String {
        format!("{}\n\nUser question: {}", instructions, prompt)
    }

    /// Render a transcript window as `"<author>: <content>"` blocks
    pub fn summarize<'a>(window: impl IntoIterator<Item = &'a Message>) -> String {
        window
            .into_iter()
            .map(|m| format!("{}: {}", m.author().label(), m.content()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Prompt for an autonomous follow-up round
    pub fn continuation<'a>(window: impl IntoIterator<Item = &'a Message>) -> String {
        format!(
            r#"Continue the discussion. Build on what was just said:

{}

Provide your perspective or response to the others' points."#,
            Self::summarize(window)
        )
    }

    /// Failure reason recorded for a persona whose call failed
    pub fn persona_failure(persona_name: &str) -> String {
        format!("Failed to get response from {}", persona_name)
    }
}
