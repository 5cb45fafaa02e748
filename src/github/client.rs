use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::GitHubError;
use super::types::{ForkRequest, NewPullRequest, PullRequestSummary, WebhookSpec};
use crate::config::GitHubConfig;

const PAGE_SIZE: usize = 100;

/// The GitHub operations the bootstrap needs, as a seam for test doubles.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Ask GitHub to fork the repository into the authenticated account.
    async fn create_fork(&self, request: &ForkRequest) -> Result<(), GitHubError>;
    async fn create_webhook(
        &self,
        owner: &str,
        repo: &str,
        spec: &WebhookSpec,
    ) -> Result<(), GitHubError>;
    /// Open pull requests, every page.
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestSummary>, GitHubError>;
    /// Returns the HTML URL of the created pull request.
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull: &NewPullRequest,
    ) -> Result<String, GitHubError>;
}

#[derive(Debug, Deserialize)]
struct GitRef {
    #[serde(rename = "ref")]
    ref_field: String,
}

// Stripped down `pulls` payload; octocrab's full model is much stricter than we need.
#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    head: GitRef,
    base: GitRef,
    html_url: String,
}

impl From<PullRequestPayload> for PullRequestSummary {
    fn from(pull: PullRequestPayload) -> Self {
        Self {
            head_ref: pull.head.ref_field,
            base_ref: pull.base.ref_field,
            html_url: pull.html_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct ListParams {
    per_page: usize,
    page: u32,
}

#[derive(Debug, Serialize)]
struct ForkParams {}

/// Requests that never produced a response become `NetworkError`; everything
/// GitHub answered stays an `ApiError`.
fn classify(error: octocrab::Error) -> GitHubError {
    match error {
        octocrab::Error::Service { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Http { .. } => GitHubError::NetworkError(error.to_string()),
        other => GitHubError::ApiError(other),
    }
}

/// Octocrab-backed `RepositoryHost`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self, GitHubError> {
        let token = config.require_token()?.to_string();

        let mut builder = Octocrab::builder().personal_token(token);
        if let Some(api_base) = &config.api_base {
            builder = builder.base_uri(api_base.as_str())?;
        }

        Ok(Self::from_octocrab(builder.build()?))
    }

    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn create_fork(&self, request: &ForkRequest) -> Result<(), GitHubError> {
        let route = format!("/repos/{}/{}/forks", request.owner, request.repo);
        let _: serde_json::Value = self
            .octocrab
            .post(route, Some(&ForkParams {}))
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn create_webhook(
        &self,
        owner: &str,
        repo: &str,
        spec: &WebhookSpec,
    ) -> Result<(), GitHubError> {
        let route = format!("/repos/{owner}/{repo}/hooks");
        let _: serde_json::Value = self
            .octocrab
            .post(route, Some(spec))
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestSummary>, GitHubError> {
        let route = format!("/repos/{owner}/{repo}/pulls");
        let mut pulls = Vec::new();
        let mut page = 1;

        loop {
            let params = ListParams {
                per_page: PAGE_SIZE,
                page,
            };
            let batch: Vec<PullRequestPayload> = self
                .octocrab
                .get(&route, Some(&params))
                .await
                .map_err(classify)?;
            let last_page = batch.len() < PAGE_SIZE;
            debug!(owner, repo, page, count = batch.len(), "Fetched pull request page");

            pulls.extend(batch.into_iter().map(PullRequestSummary::from));
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(pulls)
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull: &NewPullRequest,
    ) -> Result<String, GitHubError> {
        let route = format!("/repos/{owner}/{repo}/pulls");
        let created: PullRequestPayload = self
            .octocrab
            .post(route, Some(pull))
            .await
            .map_err(classify)?;
        Ok(created.html_url)
    }
}
