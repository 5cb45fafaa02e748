use anyhow::Result;

use super::{until_interrupted, with_bootstrap_client, Command};
use crate::bootstrap::BootstrapPlan;
use crate::config::BootstrapConfig;
use crate::github::types::ForkRequest;

pub struct RunCommand {
    pub owner: String,
    pub repo: String,
    pub url: String,
    pub head: String,
    pub base: String,
    pub require_fork: bool,
    pub json: bool,
}

impl RunCommand {
    fn plan(&self, config: &BootstrapConfig) -> Result<BootstrapPlan> {
        Ok(BootstrapPlan {
            upstream: ForkRequest::new(&self.owner, &self.repo),
            fork_owner: config.github_username()?.to_string(),
            hook_url: self.url.clone(),
            head_ref: self.head.clone(),
            base_ref: self.base.clone(),
            require_fork_ready: self.require_fork || config.fork.require_ready,
        })
    }
}

impl Command for RunCommand {
    async fn execute(&self, config: &BootstrapConfig) -> Result<()> {
        let plan = self.plan(config)?;

        let report = with_bootstrap_client(config, |client| async move {
            until_interrupted(async { Ok(client.run(&plan).await?) }).await
        })
        .await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("🚀 Bootstrap complete for {}/{}", report.fork_owner, report.repo);
        if !report.fork_ready {
            println!("   ⚠️  Fork was not confirmed; it may still be in progress");
        }
        let verb = if report.pull_request_created { "created" } else { "already open" };
        println!("   📋 Pull request {}: {}", verb, report.pull_request_url);
        Ok(())
    }
}
