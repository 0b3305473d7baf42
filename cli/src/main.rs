//! CLI entrypoint for nutri-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use nutri_application::{
    ConversationController, ConversationLogger, InMemorySessionStorage, RequestDispatcher,
    SessionStoragePort, SessionStore, SubmitOutcome,
};
use nutri_domain::{ConversationMode, Severity};
use nutri_infrastructure::{
    ConfigLoader, FileConfig, FileSessionStorage, JsonlConversationLogger, ReqwestApiTransport,
};
use nutri_presentation::{ChatRepl, Cli, ConsoleRenderer, OutputConfig, ReplConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("Config error: {}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    OutputConfig {
        color: config.output.color,
    }
    .apply();

    info!("Starting nutri-chat against {}", config.api.base_url);

    // === Dependency Injection ===
    let storage: Arc<dyn SessionStoragePort> = match config.session.file_path() {
        Some(path) => Arc::new(FileSessionStorage::new(path)),
        None => {
            warn!("No data directory available; the session id will not be saved");
            Arc::new(InMemorySessionStorage::new())
        }
    };
    let sessions = Arc::new(SessionStore::with_key(storage, config.session.key.clone()));
    if cli.new_session {
        let id = sessions.rotate();
        info!("Started fresh session {}", id);
    }

    let transport = ReqwestApiTransport::new(config.api.base_url.clone(), config.api.timeout())
        .context("Failed to create HTTP client")?;
    let dispatcher = Arc::new(RequestDispatcher::new(Arc::new(transport)));
    let renderer = Arc::new(ConsoleRenderer::new().with_progress(config.repl.show_progress));

    let mut controller = ConversationController::new(
        dispatcher,
        sessions,
        renderer,
        config.to_conversation_config(),
    );
    if let Some(path) = config.logging.conversation_log_path()
        && let Some(logger) = JsonlConversationLogger::new(&path)
    {
        info!("Writing conversation transcript to {}", logger.path().display());
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        controller = controller.with_conversation_logger(logger);
    }
    let controller = Arc::new(controller);

    // Single message mode
    if let Some(message) = cli.message {
        let outcome = controller.submit(&message).await;
        return match outcome {
            SubmitOutcome::Answered => Ok(ExitCode::SUCCESS),
            SubmitOutcome::Ignored => bail!("Message is empty"),
            SubmitOutcome::Busy | SubmitOutcome::Failed(_) => Ok(ExitCode::FAILURE),
        };
    }

    // Interactive mode
    let repl = ChatRepl::new(controller).with_config(ReplConfig {
        show_progress: config.repl.show_progress,
        history_file: config.repl.history_path(),
    });
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}

/// Command-line flags take precedence over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(mode) = cli.mode {
        config.repl.mode = ConversationMode::from(mode).as_str().to_string();
    }
    if let Some(goal) = &cli.goal {
        config.recipe.goal = goal.clone();
    }
    if let Some(dislikes) = &cli.dislikes {
        config.recipe.dislikes = dislikes.clone();
    }
    if let Some(diet) = &cli.diet {
        config.recipe.dietary_constraints = diet.clone();
    }
    if let Some(level) = cli.innovation {
        config.recipe.innovation_level = i64::from(level);
    }
    if cli.no_hybrid {
        config.search.use_hybrid = false;
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }
}
