//! Configuration for the storefront binary.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (STOREFRONT_MUSIC_SPEED, STOREFRONT_VIDEO_SPEED,
//!    STOREFRONT_FORMAT)
//! 2. Config file (--config / STOREFRONT_CONFIG, else .storefront/config.yaml)
//! 3. Defaults (music 5 MB/s, video 20 MB/s, text output)
//!
//! Config file discovery:
//! - Searches current directory and parents for .storefront/config.yaml
//! - Falls back to ~/.storefront/config.yaml
//!
//! Catalog contents are never configured here; only server speeds and
//! output settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::library::samples::{DEFAULT_MUSIC_SPEED_MBPS, DEFAULT_VIDEO_SPEED_MBPS};
use crate::library::ContentKind;
use crate::render::OutputFormat;

pub const ENV_CONFIG: &str = "STOREFRONT_CONFIG";
pub const ENV_MUSIC_SPEED: &str = "STOREFRONT_MUSIC_SPEED";
pub const ENV_VIDEO_SPEED: &str = "STOREFRONT_VIDEO_SPEED";
pub const ENV_FORMAT: &str = "STOREFRONT_FORMAT";

/// Only config schema version understood
pub const CONFIG_VERSION: &str = "1";

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub speeds: SpeedsConfig,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeedsConfig {
    /// Music server download speed (MB/s)
    pub music: Option<f64>,
    /// Video server download speed (MB/s)
    pub video: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

/// Resolved configuration with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub music_speed_mbps: f64,
    pub video_speed_mbps: f64,
    pub format: OutputFormat,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            music_speed_mbps: DEFAULT_MUSIC_SPEED_MBPS,
            video_speed_mbps: DEFAULT_VIDEO_SPEED_MBPS,
            format: OutputFormat::default(),
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Download speed configured for a content kind
    pub fn speed_for(&self, kind: ContentKind) -> f64 {
        match kind {
            ContentKind::Music => self.music_speed_mbps,
            ContentKind::Video => self.video_speed_mbps,
        }
    }
}

/// Find config file by searching `start` and its parents, then the home dir
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".storefront").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".storefront").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    if config.version != CONFIG_VERSION {
        anyhow::bail!(
            "Unsupported config version {:?} in {} (expected {:?})",
            config.version,
            path.display(),
            CONFIG_VERSION
        );
    }

    Ok(config)
}

/// Speeds must be finite and non-negative; zero means "never finishes"
fn validate_speed(source: &str, speed: f64) -> Result<f64> {
    if !speed.is_finite() || speed < 0.0 {
        anyhow::bail!("Invalid download speed from {}: {}", source, speed);
    }
    Ok(speed)
}

fn parse_speed(source: &str, raw: &str) -> Result<f64> {
    let speed: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid download speed from {}: {:?}", source, raw))?;
    validate_speed(source, speed)
}

/// Merge an optional config file with environment overrides
fn resolve(
    file: Option<(PathBuf, ConfigFile)>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some((path, config)) = file {
        let source = path.display().to_string();

        if let Some(music) = config.speeds.music {
            resolved.music_speed_mbps = validate_speed(&source, music)?;
        }
        if let Some(video) = config.speeds.video {
            resolved.video_speed_mbps = validate_speed(&source, video)?;
        }
        if let Some(format) = config.output.and_then(|o| o.format) {
            resolved.format = format;
        }

        resolved.config_file = Some(path);
    }

    if let Some(raw) = env(ENV_MUSIC_SPEED) {
        resolved.music_speed_mbps = parse_speed(ENV_MUSIC_SPEED, &raw)?;
    }
    if let Some(raw) = env(ENV_VIDEO_SPEED) {
        resolved.video_speed_mbps = parse_speed(ENV_VIDEO_SPEED, &raw)?;
    }
    if let Some(raw) = env(ENV_FORMAT) {
        resolved.format = raw
            .parse()
            .with_context(|| format!("Invalid {}", ENV_FORMAT))?;
    }

    Ok(resolved)
}

/// Load configuration from all sources.
///
/// `explicit` is a config path given on the command line (or via
/// STOREFRONT_CONFIG); it must exist. Without it the file is discovered.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file does not exist: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            find_config_file(&cwd)
        }
    };

    let file = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            let config = load_config_file(&path)?;
            Some((path, config))
        }
        None => None,
    };

    resolve(file, |key| std::env::var(key).ok())
}
