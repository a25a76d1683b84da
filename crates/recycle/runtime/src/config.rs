//! Configuration for the contract host

use recycle_types::Principal;
use serde::{Deserialize, Serialize};

/// Receipts a journal keeps unless configured otherwise.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 4096;

/// Main host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Owner of the minter and verifier registries
    #[serde(default = "default_owner")]
    pub owner: Principal,

    /// Block clock configuration
    #[serde(default)]
    pub chain: ChainConfig,

    /// Receipt journal configuration
    #[serde(default)]
    pub journal: JournalConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            chain: ChainConfig::default(),
            journal: JournalConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Block clock configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Height of the first block
    #[serde(default)]
    pub initial_block_height: u64,
}

/// Receipt journal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Record a receipt for every call
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Receipts retained; 0 keeps everything
    #[serde(default = "default_journal_capacity")]
    pub capacity: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_journal_capacity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_owner() -> Principal {
    Principal::new("CONTRACT_OWNER")
}

fn default_true() -> bool {
    true
}

fn default_journal_capacity() -> usize {
    DEFAULT_JOURNAL_CAPACITY
}

fn default_log_level() -> String {
    "info".to_string()
}

impl HostConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&HostConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Add environment variables with RECYCLE_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("RECYCLE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Configuration with an explicit owner and otherwise default settings
    pub fn with_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: Principal::new(owner),
            ..Default::default()
        }
    }
}
