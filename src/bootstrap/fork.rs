use tracing::{debug, info, warn};

use super::BootstrapClient;
use crate::github::client::RepositoryHost;
use crate::github::errors::is_fork_scheduled;
use crate::github::types::{ForkOutcome, ForkRequest};
use crate::github::GitHubError;

impl<H: RepositoryHost> BootstrapClient<H> {
    /// Request a fork of `owner/repo` into the authenticated account.
    ///
    /// A "scheduled, try again later" answer is `ForkOutcome::AlreadyScheduled`,
    /// not an error. Every other failure is returned unchanged. Safe to call
    /// repeatedly while GitHub is still copying the repository.
    pub async fn fork_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<ForkOutcome, GitHubError> {
        let request = ForkRequest::new(owner, repo);

        match self.host.create_fork(&request).await {
            Ok(()) => {
                debug!(owner, repo, "Fork requested");
                Ok(ForkOutcome::Created)
            }
            Err(error) if is_fork_scheduled(&error) => {
                debug!(owner, repo, "Fork scheduled on GitHub side");
                Ok(ForkOutcome::AlreadyScheduled)
            }
            Err(error) => Err(error),
        }
    }

    /// Poll `fork_repository` until one attempt does not hard-fail.
    ///
    /// Returns `false` once every attempt failed. A `true` result only means
    /// GitHub accepted the request; forks can take minutes to become usable.
    pub async fn await_fork_completion(&self, owner: &str, repo: &str) -> bool {
        let outcome = self
            .retry
            .poll("fork", |_| self.fork_repository(owner, repo))
            .await;

        match outcome {
            Some(outcome) => {
                info!(owner, repo, ?outcome, "Fork accepted");
                true
            }
            None => {
                warn!(
                    owner,
                    repo,
                    attempts = self.retry.config().max_attempts,
                    "Could not confirm fork"
                );
                false
            }
        }
    }
}
