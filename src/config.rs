//! Service configuration
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `HANDS_`-prefixed environment variables (`HANDS_SERVER__PORT=6000`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{HandsError, Result};
use crate::hands::{HandLabel, HAND_LANDMARK_COUNT};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub producer: ProducerConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Where published frames come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Generated hand motion
    Synthetic,
    /// Newline-delimited JSON recording
    Replay,
    /// No built-in producer
    None,
}

/// Producer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerConfig {
    #[serde(default = "default_source")]
    pub source: SourceKind,

    /// Delay between frames in milliseconds
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Landmarks per generated hand
    #[serde(default = "default_landmark_count")]
    pub landmark_count: usize,

    /// Hands emitted by the synthetic source
    #[serde(default = "default_hands")]
    pub hands: Vec<HandLabel>,

    /// Recording read by the replay source
    #[serde(default)]
    pub replay_path: Option<PathBuf>,

    /// Restart the recording when it ends
    #[serde(default)]
    pub replay_loop: bool,
}

fn default_source() -> SourceKind {
    SourceKind::Synthetic
}

fn default_frame_interval_ms() -> u64 {
    33
}

fn default_landmark_count() -> usize {
    HAND_LANDMARK_COUNT
}

fn default_hands() -> Vec<HandLabel> {
    HandLabel::ALL.to_vec()
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            frame_interval_ms: default_frame_interval_ms(),
            landmark_count: default_landmark_count(),
            hands: default_hands(),
            replay_path: None,
            replay_loop: false,
        }
    }
}

impl ProducerConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Reject producer settings the sources cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            return Err(HandsError::InvalidConfig(
                "producer.frame_interval_ms must be non-zero".to_string(),
            ));
        }

        if self.landmark_count == 0 {
            return Err(HandsError::InvalidConfig(
                "producer.landmark_count must be non-zero".to_string(),
            ));
        }

        if self.source == SourceKind::Replay && self.replay_path.is_none() {
            return Err(HandsError::InvalidConfig(
                "producer.replay_path is required for the replay source".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from an optional file and the process environment
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with(path, config::Environment::default())
    }

    /// Load configuration from an optional file and the given environment source
    ///
    /// `producer.hands` is read from the environment as a comma-separated list
    /// (`HANDS_PRODUCER__HANDS=Left,Right`).
    pub fn load_with(path: &str, environment: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                environment
                    .prefix("HANDS")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("producer.hands")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(HandsError::InvalidConfig(
                "server.port must be non-zero".to_string(),
            ));
        }

        self.producer.validate()
    }
}
