//! CLI entrypoint for Advisor Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{
    AdvisorClient, AggregateInput, AggregateRepliesUseCase, ConversationLogger,
    NoConversationLogger,
};
use council_domain::{Model, PersonaRoster};
use council_infrastructure::{
    ConfigLoader, FileConfig, GeminiLlmGateway, HttpAdvisorClient, JsonlConversationLogger,
};
use council_presentation::server::{self, ServerState};
use council_presentation::{
    AskArgs, ChatArgs, ChatRepl, Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

type Aggregator = AggregateRepliesUseCase<GeminiLlmGateway>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("Starting Advisor Council");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    // === Dependency Injection ===
    let roster = Arc::new(config.roster()?);
    let logger = conversation_logger(&config);

    let gateway = Arc::new(GeminiLlmGateway::from_env(
        config.gemini.api_key.clone(),
        config.gemini.base_url.clone(),
        config.gemini.request_timeout(),
    )?);
    let model: Model = config.gemini.model();
    info!("Model: {}, personas: {}", model, roster.len());

    let aggregator = Arc::new(
        AggregateRepliesUseCase::new(Arc::clone(&gateway), Arc::clone(&roster), model)
            .with_logger(Arc::clone(&logger)),
    );

    match cli.command() {
        Command::Serve(_) => serve(&config, &gateway, aggregator, &roster).await,
        Command::Chat(args) => chat(&config, &cli, args, &gateway, aggregator, roster, logger).await,
        Command::Ask(args) => ask(&cli, args, &aggregator, &roster).await,
    }
}

/// `-v` count maps to a level; `RUST_LOG` wins when set
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    if let Some(path) = &cli.log_conversation {
        config.logging.conversation_log = Some(path.clone());
    }
    match &cli.command {
        Some(Command::Serve(args)) => {
            if let Some(host) = &args.host {
                config.server.host = host.clone();
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
        }
        Some(Command::Chat(args)) => {
            if let Some(rounds) = args.rounds {
                config.discussion.autonomous_rounds = rounds;
            }
        }
        _ => {}
    }
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config
        .logging
        .conversation_log
        .as_ref()
        .and_then(JsonlConversationLogger::open)
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

async fn serve(
    config: &FileConfig,
    gateway: &GeminiLlmGateway,
    aggregator: Arc<Aggregator>,
    roster: &PersonaRoster,
) -> Result<()> {
    if !gateway.has_api_key() {
        warn!("GEMINI_API_KEY is not set; chat requests will fail until it is");
    }

    let state = ServerState::new(aggregator, roster.len());
    server::serve(&config.server.bind_addr(), state, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await?;
    Ok(())
}

async fn chat(
    config: &FileConfig,
    cli: &Cli,
    args: ChatArgs,
    gateway: &GeminiLlmGateway,
    aggregator: Arc<Aggregator>,
    roster: Arc<PersonaRoster>,
    logger: Arc<dyn ConversationLogger>,
) -> Result<()> {
    let client: Arc<dyn AdvisorClient> = match &args.server {
        Some(url) => {
            info!("Using chat server at {}", url);
            Arc::new(HttpAdvisorClient::new(url, config.gemini.request_timeout())?)
        }
        None => {
            if !gateway.has_api_key() {
                bail!(
                    "GEMINI_API_KEY is not configured. Set it, or use --server to talk to a running server."
                );
            }
            aggregator
        }
    };

    let mut repl = ChatRepl::new(client, roster, config.discussion.to_params())
        .with_logger(logger)
        .with_progress(!cli.quiet)
        .with_topic(args.topic);

    repl.run().await?;
    Ok(())
}

async fn ask(cli: &Cli, args: AskArgs, aggregator: &Aggregator, roster: &PersonaRoster) -> Result<()> {
    let input = AggregateInput::new(args.prompt.clone(), Vec::new());

    let round = if cli.quiet || args.output == OutputFormat::Json {
        aggregator.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        aggregator.execute_with_progress(input, &progress).await?
    };

    let output = match args.output {
        OutputFormat::Text => ConsoleFormatter::format_round(&args.prompt, &round, roster),
        OutputFormat::Json => ConsoleFormatter::format_json(&round),
    };
    println!("{}", output);

    if round.successes().next().is_none() {
        bail!("No advisor answered");
    }
    Ok(())
}
