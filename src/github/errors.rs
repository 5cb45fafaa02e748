use octocrab::Error as OctocrabError;
use thiserror::Error;

/// Message GitHub attaches to a fork request it accepted but has not finished yet.
pub const FORK_SCHEDULED_PHRASE: &str = "job scheduled on GitHub side; try again later";

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error(
        "GitHub token not found: {0}\n\
         → Set a token: export ATLANTIS_BOOTSTRAP_GITHUB_TOKEN=your_token\n\
         → Create one at: https://github.com/settings/tokens (needs 'repo' and 'admin:repo_hook')"
    )]
    TokenNotFound(String),
    #[error("GitHub configuration error: {0}")]
    ConfigNotFound(String),
    /// Any failure reported by the GitHub API, carried as-is.
    #[error(transparent)]
    ApiError(#[from] OctocrabError),
    #[error("GitHub network error: {0}")]
    NetworkError(String),
    #[error("GitHub operation '{operation}' did not complete within {duration_ms}ms")]
    Timeout { operation: String, duration_ms: u64 },
}

impl GitHubError {
    /// HTTP status reported by GitHub, when the failure came with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GitHubError::ApiError(OctocrabError::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            _ => None,
        }
    }
}

/// Whether a failed fork request only means GitHub queued the fork.
///
/// A 202 Accepted fork response never reaches this: octocrab returns it as
/// success and the fork counts as created. What is left is GitHub refusing the
/// request with the documented message while an earlier fork job is running.
pub fn is_fork_scheduled(error: &GitHubError) -> bool {
    match error {
        GitHubError::ApiError(OctocrabError::GitHub { source, .. }) => {
            source.message.contains(FORK_SCHEDULED_PHRASE)
        }
        other => other.to_string().contains(FORK_SCHEDULED_PHRASE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduled_phrase_is_detected() {
        let error = GitHubError::NetworkError(format!("POST /forks: {FORK_SCHEDULED_PHRASE}"));
        assert!(is_fork_scheduled(&error));
    }

    #[test]
    fn test_other_errors_are_not_scheduling() {
        let errors = [
            GitHubError::NetworkError("connection reset by peer".to_string()),
            GitHubError::TokenNotFound("no token".to_string()),
            GitHubError::NetworkError("job scheduled".to_string()),
        ];

        for error in &errors {
            assert!(!is_fork_scheduled(error), "misclassified: {error}");
        }
    }

    #[test]
    fn test_status_code_absent_without_api_error() {
        let error = GitHubError::Timeout {
            operation: "fork".to_string(),
            duration_ms: 8000,
        };
        assert_eq!(error.status_code(), None);
        assert!(error.to_string().contains("'fork'"));
    }
}
