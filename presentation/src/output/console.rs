//! Console output formatter for discussions and rounds

use colored::{ColoredString, Colorize};
use council_domain::{Author, Message, Persona, PersonaRoster, RoundResult};
use council_infrastructure::ChatResponse;

/// Formats transcript messages and rounds for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One transcript message with its author line
    pub fn format_message(message: &Message, roster: &PersonaRoster) -> String {
        match message.author() {
            Author::User => format!(
                "{}\n{}\n",
                "You".bold().blue(),
                Self::indent(message.content(), "  ")
            ),
            Author::Persona { id, name } => {
                let heading = match roster.get(id) {
                    Some(persona) => Self::persona_heading(persona),
                    None => name.bold(),
                };
                format!("{}\n{}\n", heading, Self::indent(message.content(), "  "))
            }
            Author::Notice => format!("{}\n", message.content().yellow()),
        }
    }

    /// Every reply of a round, failures included
    pub fn format_round(prompt: &str, round: &RoundResult, roster: &PersonaRoster) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Q:".bold(), prompt));

        for reply in round.replies() {
            let heading = match roster.get(&reply.persona_id) {
                Some(persona) => Self::persona_heading(persona),
                None => reply.persona_name.bold(),
            };
            output.push('\n');
            output.push_str(&format!("{}\n", heading));
            match (reply.content(), reply.error()) {
                (Some(text), _) => output.push_str(&Self::indent(text, "  ")),
                (None, Some(error)) => output.push_str(&format!("  {}", error.red())),
                (None, None) => output.push_str(&format!("  {}", "(empty reply)".dimmed())),
            }
            output.push('\n');
        }

        output
    }

    /// A round in the wire format of the chat endpoint
    pub fn format_json(round: &RoundResult) -> String {
        serde_json::to_string_pretty(&ChatResponse::from(round))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Board members, one per line
    pub fn format_roster(roster: &PersonaRoster) -> String {
        roster
            .iter()
            .map(|p| format!("  {} {}", Self::persona_heading(p), p.id().as_str().dimmed()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `[AV] Name · Title` in the persona's accent colour
    pub fn persona_heading(persona: &Persona) -> ColoredString {
        let (r, g, b) = persona.rgb();
        let text = if persona.title().is_empty() {
            format!("[{}] {}", persona.avatar(), persona.name())
        } else {
            format!(
                "[{}] {} · {}",
                persona.avatar(),
                persona.name(),
                persona.title()
            )
        };
        text.truecolor(r, g, b).bold()
    }

    pub fn header(title: &str) -> String {
        let line = "─".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
