//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.twenty48/config.toml`. It is only ever read; a missing
//! file simply means "use the defaults".

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Twenty48Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub cell_width: Option<u16>,
    pub cell_height: Option<u16>,
    pub margin: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Terminal cells are about twice as tall as they are wide, so a 10×5 cell
/// looks roughly square.
pub const DEFAULT_CELL_WIDTH: u16 = 10;
pub const DEFAULT_CELL_HEIGHT: u16 = 5;
pub const DEFAULT_MARGIN: u16 = 1;
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;

pub const SEED_ENV: &str = "TWENTY48_SEED";
pub const LOG_FILE_ENV: &str = "TWENTY48_LOG_FILE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub cell_width: u16,
    pub cell_height: u16,
    pub margin: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            margin: DEFAULT_MARGIN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub seed: Option<u64>,
    pub display: DisplaySettings,
    /// Logging is off unless a file is configured.
    pub log_file: Option<PathBuf>,
    pub log_level: log::LevelFilter,
}

/// Values that came from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.twenty48/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".twenty48").join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.twenty48/config.toml`.
///
/// A missing default file yields `Twenty48Config::default()`. An explicit
/// path that cannot be read is an error, as is a malformed file.
pub fn load_config(explicit: Option<&Path>) -> Result<Twenty48Config, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            Some(_) => {
                debug!("No config file found, using defaults");
                return Ok(Twenty48Config::default());
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(Twenty48Config::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Twenty48Config, ConfigError> {
    let config: Twenty48Config = toml::from_str(contents).map_err(ConfigError::Parse)?;
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &Twenty48Config, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with<F>(config: &Twenty48Config, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Seed: CLI → env → config → None (OS entropy)
    let seed = cli
        .seed
        .or_else(|| {
            env(SEED_ENV).and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    warn!("Ignoring {}={:?}: {}", SEED_ENV, raw, e);
                    None
                }
            })
        })
        .or(config.game.seed);

    // Log file: CLI → env → config → disabled
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(LOG_FILE_ENV).filter(|s| !s.is_empty()).map(PathBuf::from))
        .or_else(|| config.log.file.as_ref().map(PathBuf::from));

    let log_level = match config.log.level.as_deref() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using {}", raw, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Zero-sized cells would collapse the layout
    let display = DisplaySettings {
        cell_width: config
            .display
            .cell_width
            .unwrap_or(DEFAULT_CELL_WIDTH)
            .max(1),
        cell_height: config
            .display
            .cell_height
            .unwrap_or(DEFAULT_CELL_HEIGHT)
            .max(1),
        margin: config.display.margin.unwrap_or(DEFAULT_MARGIN),
    };

    ResolvedConfig {
        seed,
        display,
        log_file,
        log_level,
    }
}
