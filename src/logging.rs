//! Logging setup for column-lattice.
//!
//! The crate instruments trie insertion and the containment query paths
//! with `tracing` events (insertions at `DEBUG`, per-query traces at
//! `TRACE`). This module provides an opt-in subscriber setup for binaries
//! and tests that want to see them; library consumers with their own
//! subscriber should ignore it.

use tracing::Level;

/// Configuration for the crate's logging setup.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application.
    pub level: Level,
    /// Log level for column-lattice events specifically.
    pub lattice_level: Level,
    /// Whether to use JSON output format.
    pub json_format: bool,
    /// Environment filter override.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            lattice_level: Level::DEBUG,
            json_format: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration for production use: warnings only, JSON.
    pub fn production() -> Self {
        Self {
            level: Level::WARN,
            lattice_level: Level::INFO,
            json_format: true,
            env_filter: None,
        }
    }

    /// Creates a verbose configuration for debugging a search, including
    /// per-query traces.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            lattice_level: Level::TRACE,
            json_format: false,
            env_filter: None,
        }
    }

    /// Sets the log level for the application.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the log level for column-lattice events.
    pub fn with_lattice_level(mut self, level: Level) -> Self {
        self.lattice_level = level;
        self
    }

    /// Sets whether to use JSON output format.
    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// Sets a custom environment filter.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the environment filter string.
    pub fn env_filter(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            filter.clone()
        } else {
            format!(
                "{},column_lattice={}",
                self.level.as_str().to_lowercase(),
                self.lattice_level.as_str().to_lowercase()
            )
        }
    }
}

/// Initializes a global `tracing` subscriber from the configuration.
///
/// `RUST_LOG` takes precedence over the configured filter when set.
/// Fails if a global subscriber is already installed.
///
/// # Examples
///
/// ```rust,no_run
/// use column_lattice::logging::{init_logging, LoggingConfig};
///
/// init_logging(LoggingConfig::development()).unwrap();
/// ```
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
