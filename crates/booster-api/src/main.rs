//! Prompt Booster API entry point.
//!
//! Binary name: `prompt-booster`
//!
//! Parses CLI arguments, initializes tracing, loads the configuration, then
//! dispatches to the requested command.

mod cli;

use clap::Parser;
use clap_complete::generate;

use booster_observe::TracingOptions;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "prompt-booster", &mut std::io::stdout());
        return Ok(());
    }

    let options = TracingOptions {
        default_filter: cli.default_log_filter().to_string(),
        json: cli.json_logs,
        otel: cli.otel,
    };
    booster_observe::init_tracing(&options)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Every exit path below must reach shutdown_tracing, so no early `?`
    let result = run(&cli).await;

    booster_observe::shutdown_tracing();
    result
}

async fn run(args: &Cli) -> anyhow::Result<()> {
    match &args.command {
        Commands::Serve(settings) => {
            let state = settings.load_state().await?;
            cli::serve::serve(state, args.quiet).await
        }
        Commands::Config { settings, json } => {
            let state = settings.load_state().await?;
            cli::show_config::show_config(&state, *json)
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}
