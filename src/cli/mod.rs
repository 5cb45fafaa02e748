use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "atlantis-bootstrap")]
#[command(about = "One-time GitHub repository setup for Atlantis")]
#[command(long_about = "Forks a repository into your account, registers the Atlantis webhook on it \
                       and opens a welcome pull request. Every step is safe to re-run except the \
                       webhook registration, which adds a new hook each time.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fork a repository into the authenticated account and wait for GitHub to accept it
    Fork {
        /// Owner of the upstream repository
        #[arg(long)]
        owner: String,
        /// Name of the upstream repository
        #[arg(long)]
        repo: String,
    },
    /// Register the Atlantis webhook on a repository
    Webhook {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        repo: String,
        /// Atlantis events endpoint, e.g. https://atlantis.example.com/events
        #[arg(long)]
        url: String,
    },
    /// Open the welcome pull request unless one is already open for the same branches
    PullRequest {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        repo: String,
        /// Branch with the changes
        #[arg(long)]
        head: String,
        /// Branch to merge into
        #[arg(long, default_value = "main")]
        base: String,
    },
    /// Fork, register the webhook on the fork and open the welcome pull request
    Run {
        /// Owner of the upstream repository
        #[arg(long)]
        owner: String,
        /// Name of the upstream repository
        #[arg(long)]
        repo: String,
        /// Atlantis events endpoint
        #[arg(long)]
        url: String,
        #[arg(long)]
        head: String,
        #[arg(long, default_value = "main")]
        base: String,
        /// Fail instead of continuing when the fork cannot be confirmed
        #[arg(long, help = "Abort when GitHub does not accept the fork request")]
        require_fork: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults_base_to_main() {
        let cli = Cli::try_parse_from([
            "atlantis-bootstrap",
            "run",
            "--owner",
            "runatlantis",
            "--repo",
            "atlantis-example",
            "--url",
            "https://atlantis.example.com/events",
            "--head",
            "atlantis-example",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                base,
                require_fork,
                json,
                ..
            } => {
                assert_eq!(base, "main");
                assert!(!require_fork);
                assert!(!json);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_webhook_requires_url() {
        let result = Cli::try_parse_from([
            "atlantis-bootstrap",
            "webhook",
            "--owner",
            "atlantis-bot",
            "--repo",
            "atlantis-example",
        ]);

        assert!(result.is_err());
    }
}
