use crate::bootstrap::BootstrapClient;
use crate::config::BootstrapConfig;
use crate::github::GitHubClient;
use anyhow::Result;

pub mod fork;
pub mod pull_request;
pub mod run;
pub mod webhook;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self, config: &BootstrapConfig) -> Result<()>;
}

/// Build an octocrab-backed bootstrap client from configuration and hand it to `f`.
pub async fn with_bootstrap_client<F, Fut, R>(config: &BootstrapConfig, f: F) -> Result<R>
where
    F: FnOnce(BootstrapClient<GitHubClient>) -> Fut,
    Fut: std::future::Future<Output = Result<R>>,
{
    let github = GitHubClient::new(&config.github)?;
    let client = BootstrapClient::with_retry(github, config.fork.retry_config());
    f(client).await
}

/// Resolve `fut`, or bail out when the user hits Ctrl-C first.
pub async fn until_interrupted<T>(fut: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    tokio::select! {
        result = fut => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, abandoning bootstrap step");
            Err(anyhow::anyhow!("interrupted"))
        }
    }
}
