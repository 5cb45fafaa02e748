use serde::{Deserialize, Serialize};

/// Identifies the upstream repository to fork into the authenticated account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkRequest {
    pub owner: String,
    pub repo: String,
}

impl ForkRequest {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

/// Result of a single fork attempt that did not hard-fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkOutcome {
    Created,
    /// GitHub queued the fork; asking again later is expected.
    AlreadyScheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEvent {
    IssueComment,
    PullRequest,
    PullRequestReview,
    Push,
}

impl WebhookEvent {
    pub const ATLANTIS: [WebhookEvent; 4] = [
        WebhookEvent::IssueComment,
        WebhookEvent::PullRequest,
        WebhookEvent::PullRequestReview,
        WebhookEvent::Push,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    pub content_type: String,
}

/// Body of a repository webhook creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSpec {
    pub name: String,
    pub active: bool,
    pub events: Vec<WebhookEvent>,
    pub config: WebhookConfig,
}

impl WebhookSpec {
    /// The hook Atlantis needs: comments, PRs, reviews and pushes, delivered as JSON.
    pub fn atlantis(hook_url: &str) -> Self {
        Self {
            name: "web".to_string(),
            active: true,
            events: WebhookEvent::ATLANTIS.to_vec(),
            config: WebhookConfig {
                url: hook_url.to_string(),
                content_type: "json".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestQuery {
    pub owner: String,
    pub repo: String,
    pub head_ref: String,
    pub base_ref: String,
}

impl PullRequestQuery {
    /// Exact ref-name equality; no normalization of `refs/heads/` or `owner:` prefixes.
    pub fn matches(&self, pull: &PullRequestSummary) -> bool {
        pull.head_ref == self.head_ref && pull.base_ref == self.base_ref
    }
}

/// The parts of a listed pull request the bootstrap cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub head_ref: String,
    pub base_ref: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPullRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestResult {
    pub url: String,
    /// False when an open pull request for the same head/base already existed.
    pub created: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_atlantis_webhook_body() {
        let spec = WebhookSpec::atlantis("https://atlantis.example.com/events");

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "name": "web",
                "active": true,
                "events": ["issue_comment", "pull_request", "pull_request_review", "push"],
                "config": {
                    "url": "https://atlantis.example.com/events",
                    "content_type": "json"
                }
            })
        );
    }

    #[test]
    fn test_query_matches_exact_refs_only() {
        let query = PullRequestQuery {
            owner: "acme".to_string(),
            repo: "infra".to_string(),
            head_ref: "feature-x".to_string(),
            base_ref: "main".to_string(),
        };
        let pull = |head: &str, base: &str| PullRequestSummary {
            head_ref: head.to_string(),
            base_ref: base.to_string(),
            html_url: "https://x/1".to_string(),
        };

        assert!(query.matches(&pull("feature-x", "main")));
        assert!(!query.matches(&pull("feature-x", "master")));
        assert!(!query.matches(&pull("refs/heads/feature-x", "main")));
        assert!(!query.matches(&pull("Feature-X", "main")));
    }
}
