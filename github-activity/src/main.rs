use clap::Parser;
use github_activity::EventFetcher;
use github_activity::cli::{Cli, Invocation, USAGE};
use github_activity::config::Config;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let username = match Cli::parse().invocation() {
        Invocation::Usage => {
            println!("{USAGE}");
            return Ok(());
        }
        Invocation::Activity {
            username,
            blank_username,
        } => {
            if blank_username {
                println!("{USAGE}");
            }
            username
        }
    };

    let config = Config::from_env()?;
    let fetcher = EventFetcher::new(config.api_base_url)?;
    github_activity::run(&fetcher, &username, &mut io::stdout())?;
    Ok(())
}
