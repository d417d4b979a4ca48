use clap::Parser;
use std::io;
use task_cli::cli::Cli;
use task_cli::config::Config;
use task_cli::prompt::TerminalPrompt;
use task_cli::repository::JsonFileRepository;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    let config = Config::from_env()?;
    let repository = JsonFileRepository::new(config.file);
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stdout());

    task_cli::run(args.command, &repository, &mut prompt, &mut io::stdout())?;
    Ok(())
}
