//! Slash commands understood by the chat REPL

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Personas,
    Transcript,
    Save(PathBuf),
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; `None` for ordinary input
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        Some(match name {
            "help" | "h" | "?" => ReplCommand::Help,
            "personas" | "board" => ReplCommand::Personas,
            "transcript" | "history" => ReplCommand::Transcript,
            "save" if !arg.is_empty() => ReplCommand::Save(PathBuf::from(arg)),
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        })
    }

    pub fn help() -> &'static str {
        "Commands:
  /help, /h, /?        Show this help
  /personas            Show the board
  /transcript          Print the conversation so far
  /save <path>         Write the transcript as JSON
  /quit, /exit, /q     Exit chat

Anything else is sent to the board. Ctrl-C stops the follow-up rounds."
    }
}
