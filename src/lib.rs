// Atlantis Bootstrap Library - one-time GitHub repository setup for Atlantis
// This exposes the core components for testing and integration

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod github;
pub mod telemetry;

// Re-export key types for easy access
pub use bootstrap::{BootstrapClient, BootstrapPlan, BootstrapReport};
pub use config::BootstrapConfig;
pub use github::{GitHubClient, GitHubError, RepositoryHost};
pub use telemetry::{init_telemetry, shutdown_telemetry, generate_correlation_id, create_bootstrap_span};
