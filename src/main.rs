use anyhow::Result;
use clap::Parser;

use atlantis_bootstrap::cli::commands::fork::ForkCommand;
use atlantis_bootstrap::cli::commands::pull_request::PullRequestCommand;
use atlantis_bootstrap::cli::commands::run::RunCommand;
use atlantis_bootstrap::cli::commands::webhook::WebhookCommand;
use atlantis_bootstrap::cli::commands::Command;
use atlantis_bootstrap::cli::{Cli, Commands};
use atlantis_bootstrap::{init_telemetry, shutdown_telemetry, BootstrapConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_file_loaded = BootstrapConfig::load_env_file()?;
    let config = BootstrapConfig::load()?;
    init_telemetry(&config.observability)?;
    if env_file_loaded {
        tracing::info!("Loaded environment variables from .env file");
    }

    let result = match cli.command {
        Commands::Fork { owner, repo } => ForkCommand { owner, repo }.execute(&config).await,
        Commands::Webhook { owner, repo, url } => {
            WebhookCommand { owner, repo, url }.execute(&config).await
        }
        Commands::PullRequest {
            owner,
            repo,
            head,
            base,
        } => {
            PullRequestCommand {
                owner,
                repo,
                head,
                base,
            }
            .execute(&config)
            .await
        }
        Commands::Run {
            owner,
            repo,
            url,
            head,
            base,
            require_fork,
            json,
        } => {
            RunCommand {
                owner,
                repo,
                url,
                head,
                base,
                require_fork,
                json,
            }
            .execute(&config)
            .await
        }
    };

    shutdown_telemetry();
    result
}
