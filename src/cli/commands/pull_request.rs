use anyhow::Result;

use super::{with_bootstrap_client, Command};
use crate::config::BootstrapConfig;

pub struct PullRequestCommand {
    pub owner: String,
    pub repo: String,
    pub head: String,
    pub base: String,
}

impl Command for PullRequestCommand {
    async fn execute(&self, config: &BootstrapConfig) -> Result<()> {
        let result = with_bootstrap_client(config, |client| async move {
            Ok(client
                .ensure_pull_request(&self.owner, &self.repo, &self.head, &self.base)
                .await?)
        })
        .await?;

        if result.created {
            println!("📋 Created pull request: {}", result.url);
        } else {
            println!("📋 Pull request already open: {}", result.url);
        }
        Ok(())
    }
}
