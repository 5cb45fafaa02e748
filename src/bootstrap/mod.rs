//! One-time repository bootstrapping for Atlantis.
//!
//! Forks an upstream repository into the controlling account, registers the
//! Atlantis webhook on the fork and opens the welcome pull request. GitHub
//! completes forks asynchronously, so forking is polled on a fixed schedule.

mod fork;
mod pull_request;
mod webhook;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn, Instrument};

use crate::github::client::RepositoryHost;
use crate::github::retry::{FixedIntervalRetry, RetryConfig};
use crate::github::types::ForkRequest;
use crate::github::GitHubError;
use crate::telemetry::{create_bootstrap_span, generate_correlation_id};

pub use pull_request::{WELCOME_PULL_REQUEST_BODY, WELCOME_PULL_REQUEST_TITLE};

/// Runs the bootstrap operations against a repository host.
///
/// Holds no state besides the host and the fork polling schedule, so a single
/// client can be reused for any number of repositories.
#[derive(Debug)]
pub struct BootstrapClient<H> {
    host: H,
    retry: FixedIntervalRetry,
}

impl<H: RepositoryHost> BootstrapClient<H> {
    pub fn new(host: H) -> Self {
        Self::with_retry(host, RetryConfig::default())
    }

    pub fn with_retry(host: H, retry: RetryConfig) -> Self {
        Self {
            host,
            retry: FixedIntervalRetry::new(retry),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Full bootstrap: fork, webhook on the fork, welcome pull request on the fork.
    pub async fn run(&self, plan: &BootstrapPlan) -> Result<BootstrapReport, GitHubError> {
        let correlation_id = generate_correlation_id();
        let span = create_bootstrap_span(
            "run",
            &plan.upstream.owner,
            &plan.upstream.repo,
            Some(&correlation_id),
        );

        async {
            let fork_ready = self
                .await_fork_completion(&plan.upstream.owner, &plan.upstream.repo)
                .await;

            if !fork_ready {
                if plan.require_fork_ready {
                    return Err(GitHubError::Timeout {
                        operation: format!(
                            "fork {}/{}",
                            plan.upstream.owner, plan.upstream.repo
                        ),
                        duration_ms: self.retry.config().worst_case_wait().as_millis() as u64,
                    });
                }
                warn!("Fork not confirmed, continuing with webhook and pull request");
            }

            self.register_webhook(&plan.fork_owner, &plan.upstream.repo, &plan.hook_url)
                .await?;

            let pull_request = self
                .ensure_pull_request(
                    &plan.fork_owner,
                    &plan.upstream.repo,
                    &plan.head_ref,
                    &plan.base_ref,
                )
                .await?;

            info!(url = %pull_request.url, "Bootstrap complete");

            Ok(BootstrapReport {
                correlation_id: correlation_id.clone(),
                fork_owner: plan.fork_owner.clone(),
                repo: plan.upstream.repo.clone(),
                fork_ready,
                pull_request_url: pull_request.url,
                pull_request_created: pull_request.created,
                completed_at: Utc::now(),
            })
        }
        .instrument(span)
        .await
    }
}

/// Inputs for a full bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub upstream: ForkRequest,
    /// Account the fork lands in (the authenticated user)
    pub fork_owner: String,
    pub hook_url: String,
    pub head_ref: String,
    pub base_ref: String,
    pub require_fork_ready: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BootstrapReport {
    pub correlation_id: String,
    pub fork_owner: String,
    pub repo: String,
    pub fork_ready: bool,
    pub pull_request_url: String,
    pub pull_request_created: bool,
    pub completed_at: DateTime<Utc>,
}
