pub mod client;
pub mod types;
pub mod errors;
pub mod retry;

pub use client::{GitHubClient, RepositoryHost};
pub use errors::{is_fork_scheduled, GitHubError};
pub use retry::RetryConfig;
