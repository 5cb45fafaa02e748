use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::ObservabilityConfig;

/// Initialize structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()?;
    }

    tracing::info!("Atlantis bootstrap telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking related operations
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span carrying the repository a bootstrap step works on
pub fn create_bootstrap_span(
    operation: &str,
    owner: &str,
    repo: &str,
    correlation_id: Option<&str>,
) -> tracing::Span {
    tracing::info_span!(
        "bootstrap",
        operation = operation,
        repo.owner = owner,
        repo.name = repo,
        correlation.id = correlation_id,
        otel.kind = "internal"
    )
}

pub fn shutdown_telemetry() {
    tracing::info!("Atlantis bootstrap telemetry shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_ids_are_unique() {
        let first = generate_correlation_id();
        let second = generate_correlation_id();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }
}
