//! Command-line interface for the storefront.
//!
//! Provides commands for running the sample checkouts, checking out a
//! wish list against one of the sample catalogs, listing catalogs, and
//! showing the resolved configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{self, ResolvedConfig};
use crate::core::{Receipt, Storefront};
use crate::library::{samples, Catalog, Content, ContentKind};
use crate::render::{self, OutputFormat};

/// storefront - digital content checkout
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (skips discovery)
    #[arg(short, long, global = true, env = "STOREFRONT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides config and STOREFRONT_FORMAT)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the sample music checkout, then the sample video checkout
    Demo,

    /// Check out a wish list against a sample catalog
    Checkout {
        /// Catalog to check out from
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Download speed in MB/s (overrides config)
        #[arg(short, long)]
        speed: Option<f64>,

        /// Titles to buy, in order
        titles: Vec<String>,
    },

    /// List a sample catalog
    Catalog {
        /// Catalog to list
        #[arg(short, long, value_enum)]
        kind: KindArg,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Content kind for CLI (maps to ContentKind)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Songs
    Music,

    /// Movies
    Video,
}

impl From<KindArg> for ContentKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Music => ContentKind::Music,
            KindArg::Video => ContentKind::Video,
        }
    }
}

/// Output format for CLI (maps to OutputFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let cfg = config::load_config(self.config.as_deref())?;
        let format = self.format.map(OutputFormat::from).unwrap_or(cfg.format);

        match self.command {
            Commands::Demo => run_demo(&cfg, format),
            Commands::Checkout {
                kind,
                speed,
                titles,
            } => run_checkout(&cfg, kind.into(), speed, titles, format),
            Commands::Catalog { kind } => list_catalog(&cfg, kind.into()),
            Commands::Config => show_config(&cfg),
        }
    }
}

/// Build a storefront over the sample catalog of `kind`
fn sample_storefront(kind: ContentKind, speed_mbps: f64) -> Result<Storefront> {
    let store = match kind {
        ContentKind::Music => Storefront::new(
            samples::music_server(speed_mbps).context("Failed to build music catalog")?,
        ),
        ContentKind::Video => Storefront::new(
            samples::video_server(speed_mbps).context("Failed to build video catalog")?,
        ),
    };
    Ok(store)
}

fn print_receipt(receipt: &Receipt, format: OutputFormat) -> Result<()> {
    println!("{}", render::render(receipt, format)?);
    Ok(())
}

/// Two checkouts through one storefront, switching servers in between
fn run_demo(cfg: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    let mut store = sample_storefront(ContentKind::Music, cfg.music_speed_mbps)?;

    println!("Run 1 (Music)");
    let first = store.checkout(["Aurora", "Quasar", "Nope"]);
    print_receipt(&first, format)?;

    store.set_active_server(
        samples::video_server(cfg.video_speed_mbps).context("Failed to build video catalog")?,
    );

    println!("Run 2 (Video)");
    let second = store.checkout(["Solaris Rising", "Starlight Express"]);
    print_receipt(&second, format)?;

    Ok(())
}

fn run_checkout(
    cfg: &ResolvedConfig,
    kind: ContentKind,
    speed: Option<f64>,
    titles: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let speed = speed.unwrap_or_else(|| cfg.speed_for(kind));
    if !speed.is_finite() || speed < 0.0 {
        anyhow::bail!("Download speed must be a non-negative number, got {}", speed);
    }

    let store = sample_storefront(kind, speed)?;
    let receipt = store.checkout(titles);
    print_receipt(&receipt, format)
}

fn list_catalog(cfg: &ResolvedConfig, kind: ContentKind) -> Result<()> {
    let speed = cfg.speed_for(kind);
    match kind {
        ContentKind::Music => print_catalog(samples::music_server(speed)?.catalog(), speed),
        ContentKind::Video => print_catalog(samples::video_server(speed)?.catalog(), speed),
    }
    Ok(())
}

fn print_catalog<T: Content>(catalog: &Catalog<T>, speed_mbps: f64) {
    println!("{:<30} {:>10} {:>10}", "TITLE", "SIZE (MB)", "PRICE");
    println!("{}", "-".repeat(52));

    for item in catalog {
        println!(
            "{:<30} {:>10.1} {:>10}",
            item.title(),
            item.size_mb(),
            format!("${:.2}", item.price())
        );
    }

    println!(
        "\n{} {} items at {} MB/s",
        catalog.len(),
        T::KIND,
        speed_mbps
    );
}

fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("Storefront Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Download speeds:");
    println!("  Music: {} MB/s", cfg.music_speed_mbps);
    println!("  Video: {} MB/s", cfg.video_speed_mbps);
    println!();
    println!("Output format: {}", cfg.format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checkout_command() {
        let cli = Cli::try_parse_from([
            "storefront",
            "checkout",
            "--kind",
            "video",
            "--speed",
            "10",
            "Solaris Rising",
            "Nope",
        ])
        .unwrap();

        match cli.command {
            Commands::Checkout {
                kind,
                speed,
                titles,
            } => {
                assert_eq!(ContentKind::from(kind), ContentKind::Video);
                assert_eq!(speed, Some(10.0));
                assert_eq!(titles, vec!["Solaris Rising", "Nope"]);
            }
            other => panic!("Expected checkout, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_format() {
        let cli = Cli::try_parse_from(["storefront", "demo", "--format", "json"]).unwrap();

        assert!(matches!(cli.command, Commands::Demo));
        assert!(matches!(cli.format, Some(FormatArg::Json)));
    }

    #[test]
    fn test_parse_config_path() {
        let cli =
            Cli::try_parse_from(["storefront", "config", "--config", "/tmp/store.yaml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/store.yaml")));
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn test_checkout_requires_kind() {
        assert!(Cli::try_parse_from(["storefront", "checkout", "Aurora"]).is_err());
    }

    #[test]
    fn test_sample_storefront_kind() {
        let store = sample_storefront(ContentKind::Video, 20.0).unwrap();
        assert_eq!(store.active_kind(), ContentKind::Video);

        let receipt = store.checkout(["Solaris Rising", "Starlight Express"]);
        assert_eq!(receipt.total_price, 22.98);
    }
}
