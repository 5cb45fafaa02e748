use anyhow::Result;

use super::{until_interrupted, with_bootstrap_client, Command};
use crate::config::BootstrapConfig;

pub struct ForkCommand {
    pub owner: String,
    pub repo: String,
}

impl Command for ForkCommand {
    async fn execute(&self, config: &BootstrapConfig) -> Result<()> {
        println!("🍴 Forking {}/{}...", self.owner, self.repo);

        let ready = with_bootstrap_client(config, |client| async move {
            until_interrupted(async {
                Ok(client.await_fork_completion(&self.owner, &self.repo).await)
            })
            .await
        })
        .await?;

        if ready {
            println!("✅ GitHub accepted the fork (it may take a few minutes to appear)");
        } else {
            println!(
                "⚠️  Could not confirm the fork after {} attempts",
                config.fork.max_attempts
            );
        }
        Ok(())
    }
}
