mod cli;
mod commands;
mod config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::App;
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load();
    let app = App::new(config, cli.api_key);

    match &cli.command {
        Commands::Generate {
            topic,
            options,
            sample_on_error,
        } => app.generate(topic, options, *sample_on_error).await,
        Commands::Sample { topic, options } => app.sample(topic, options),
        Commands::Repurpose {
            format,
            file,
            options,
        } => app.repurpose(format, file.as_deref(), options).await,
        Commands::Translate {
            language,
            code,
            file,
        } => app.translate(language, code, file.as_deref()).await,
        Commands::Enhance {
            topic,
            style,
            audience,
            intent,
            length,
        } => app.enhance(topic, style, audience, intent, length).await,
        Commands::History { command } => app.run_history(command),
    }
}
