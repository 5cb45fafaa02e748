use tracing::info;

use super::BootstrapClient;
use crate::github::client::RepositoryHost;
use crate::github::types::{NewPullRequest, PullRequestQuery, PullRequestResult};
use crate::github::GitHubError;

pub const WELCOME_PULL_REQUEST_TITLE: &str = "Welcome to Atlantis!";

pub const WELCOME_PULL_REQUEST_BODY: &str = "\
Welcome to Atlantis! This pull request was opened so you can try Atlantis end to end.

* Atlantis has already run `terraform plan` for this pull request; the output is in the comments below.
* Comment `atlantis plan` to run the plan again.
* Comment `atlantis apply` to apply the changes.
* Merge or close this pull request when you are done.

See https://www.runatlantis.io/docs/ for the full list of commands and how to configure Atlantis for your repositories.
";

impl<H: RepositoryHost> BootstrapClient<H> {
    /// Make sure a pull request from `head` into `base` exists and return its URL.
    ///
    /// Open pull requests are scanned first and an exact head/base match is
    /// returned as-is. Listing and creating are separate requests, so two
    /// concurrent callers can still both create one.
    pub async fn ensure_pull_request(
        &self,
        owner: &str,
        repo: &str,
        head: &str,
        base: &str,
    ) -> Result<PullRequestResult, GitHubError> {
        let query = PullRequestQuery {
            owner: owner.to_string(),
            repo: repo.to_string(),
            head_ref: head.to_string(),
            base_ref: base.to_string(),
        };

        let pulls = self
            .host
            .list_pull_requests(&query.owner, &query.repo)
            .await?;
        if let Some(existing) = pulls.iter().find(|pull| query.matches(pull)) {
            info!(owner, repo, head, base, url = %existing.html_url, "Pull request already open");
            return Ok(PullRequestResult {
                url: existing.html_url.clone(),
                created: false,
            });
        }

        let pull = NewPullRequest {
            title: WELCOME_PULL_REQUEST_TITLE.to_string(),
            head: query.head_ref,
            base: query.base_ref,
            body: WELCOME_PULL_REQUEST_BODY.to_string(),
        };
        let url = self
            .host
            .create_pull_request(&query.owner, &query.repo, &pull)
            .await?;

        info!(owner, repo, head, base, url = %url, "Pull request created");
        Ok(PullRequestResult { url, created: true })
    }
}
