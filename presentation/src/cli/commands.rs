//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `ask`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One colored block per persona
    Text,
    /// The same JSON the HTTP endpoint returns
    Json,
}

/// CLI arguments for advisor-council
#[derive(Parser, Debug)]
#[command(name = "advisor-council")]
#[command(author, version, about = "Advisory board chat - three AI personas answer and debate")]
#[command(long_about = r#"
Advisor Council puts one question to a board of AI personas at once and lets
them keep the discussion going for a couple of rounds on their own.

Configuration files are loaded from (lowest to highest priority):
1. ~/.config/advisor-council/config.toml   Global config
2. ./council.toml or ./.council.toml        Project-level config
3. --config <path>                          Explicit config file
4. COUNCIL_<SECTION>__<KEY> environment variables

The Gemini API key is read from GEMINI_API_KEY.

Example:
  advisor-council serve --port 3000
  advisor-council chat --topic "Should we colonize Mars or fix Earth first?"
  advisor-council chat --server http://127.0.0.1:3000
  advisor-council ask "Is AGI near?" --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Gemini model every persona uses
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and effective values, then exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Append round and message events to this JSONL file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP chat server
    Serve(ServeArgs),
    /// Interactive discussion with the board (default)
    Chat(ChatArgs),
    /// Ask the board once and print every reply
    Ask(AskArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides [server] host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides [server] port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ChatArgs {
    /// Use a running server instead of calling Gemini in-process
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Opening topic (a random one when omitted)
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Follow-up rounds after each message (overrides [discussion] autonomous_rounds)
    #[arg(long, value_name = "N")]
    pub rounds: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// The question to put to the board
    pub prompt: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

impl Cli {
    /// The subcommand to run; bare invocation starts a chat
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Chat(ChatArgs::default()))
    }
}
