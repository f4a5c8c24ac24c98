//! Error handling for the dashboard rule set.
//!
//! The derivation rules themselves are total functions and never fail;
//! only fixture loading and configuration validation return errors.

/// Specialized error type for dashboard operations
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Error parsing embedded fixture data
    #[error("failed to parse {name} fixtures: {source}")]
    Fixture {
        /// Name of the fixture set that failed to parse
        name: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
    /// Error with configuration values
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
