pub mod api;
pub mod config;
pub mod prompt_engine;

pub use api::{handle_optimize, tools_overview, OptimizeRequest, OptimizeResponse, ToolsResponse};
pub use config::OptimizerConfig;
pub use prompt_engine::{
    Complexity, Intent, Language, OptimizationResult, OptimizerError, PromptAnalysis,
    PromptAnalyzer, PromptOptimizer, RewriteRoutine, ToolKnowledge, ToolProfile,
};

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Rewrite a prompt for an AI coding tool and explain the changes
#[derive(Debug, Parser)]
#[command(name = "prompt-tuner", version)]
struct Cli {
    /// Target tool id (defaults to the configured tool)
    #[arg(short, long)]
    tool: Option<String>,

    /// Optional JSON config file
    #[arg(short, long, env = "PROMPT_TUNER_CONFIG")]
    config: Option<PathBuf>,

    /// Print the supported tools instead of optimizing
    #[arg(long)]
    list_tools: bool,

    /// Prompt text
    prompt: Vec<String>,
}

fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn print_json<T: Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            false
        }
    }
}

/// CLI entry point. Returns the process exit code.
pub fn run() -> i32 {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref());
    init_tracing(&config.log_filter);

    let optimizer = match PromptOptimizer::from_config(&config) {
        Ok(optimizer) => optimizer,
        Err(e) => {
            tracing::warn!("Failed to load profiles: {}. Using built-in tools.", e);
            PromptOptimizer::with_knowledge(ToolKnowledge::new(), config.default_language)
        }
    };

    if cli.list_tools {
        let printed = print_json(&tools_overview(optimizer.knowledge()));
        return if printed { 0 } else { 1 };
    }

    let request = OptimizeRequest {
        prompt: cli.prompt.join(" "),
        tool: cli.tool.unwrap_or_else(|| config.default_tool.clone()),
    };

    let response = handle_optimize(&optimizer, request);
    let printed = print_json(&response);
    if printed && response.success {
        0
    } else {
        1
    }
}
