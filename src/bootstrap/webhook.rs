use tracing::info;

use super::BootstrapClient;
use crate::github::client::RepositoryHost;
use crate::github::types::WebhookSpec;
use crate::github::GitHubError;

impl<H: RepositoryHost> BootstrapClient<H> {
    /// Register the Atlantis webhook on `owner/repo`, delivering to `hook_url`.
    ///
    /// Issues exactly one creation request. Existing hooks are not inspected, so
    /// calling this twice registers two hooks.
    pub async fn register_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook_url: &str,
    ) -> Result<(), GitHubError> {
        let spec = WebhookSpec::atlantis(hook_url);
        self.host.create_webhook(owner, repo, &spec).await?;

        info!(owner, repo, hook_url, "Webhook registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::client::MockRepositoryHost;
    use crate::github::types::WebhookEvent;

    #[tokio::test]
    async fn test_registers_atlantis_events_as_json() {
        let mut host = MockRepositoryHost::new();
        host.expect_create_webhook()
            .withf(|owner, repo, spec| {
                owner == "atlantis-bot"
                    && repo == "atlantis-example"
                    && spec.name == "web"
                    && spec.active
                    && spec.events
                        == vec![
                            WebhookEvent::IssueComment,
                            WebhookEvent::PullRequest,
                            WebhookEvent::PullRequestReview,
                            WebhookEvent::Push,
                        ]
                    && spec.config.url == "https://atlantis.example.com/events"
                    && spec.config.content_type == "json"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let client = BootstrapClient::new(host);

        client
            .register_webhook(
                "atlantis-bot",
                "atlantis-example",
                "https://atlantis.example.com/events",
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_failure_is_not_retried() {
        let mut host = MockRepositoryHost::new();
        host.expect_create_webhook()
            .times(1)
            .returning(|_, _, _| Err(GitHubError::NetworkError("Validation Failed".to_string())));

        let client = BootstrapClient::new(host);

        let error = client
            .register_webhook("atlantis-bot", "atlantis-example", "http://localhost")
            .await
            .unwrap_err();
        assert!(error.to_string().contains("Validation Failed"));
    }
}
