use anyhow::Result;

use super::{with_bootstrap_client, Command};
use crate::config::BootstrapConfig;

pub struct WebhookCommand {
    pub owner: String,
    pub repo: String,
    pub url: String,
}

impl Command for WebhookCommand {
    async fn execute(&self, config: &BootstrapConfig) -> Result<()> {
        with_bootstrap_client(config, |client| async move {
            client
                .register_webhook(&self.owner, &self.repo, &self.url)
                .await?;
            Ok(())
        })
        .await?;

        println!("🪝 Webhook registered on {}/{} → {}", self.owner, self.repo, self.url);
        Ok(())
    }
}
