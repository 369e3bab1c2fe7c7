//! Entry point for the portfolio site.
//!
//! Loads the site configuration, sets up logging and launches the Dioxus
//! desktop window with the portfolio view.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use portfolio_core::{SiteConfig, TimingConfig};
use portfolio_site::STYLES_CSS;
use portfolio_site::components::PortfolioView;

/// Configuration resolved from the command line, read by the root component.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "portfolio-site")]
#[command(about = "Single-page personal portfolio")]
struct Args {
    /// TOML site configuration (uses the built-in sample content if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Shorten the splash and carousel timers
    #[arg(long)]
    quick: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .init();

    let mut config = match &args.config {
        Some(path) => SiteConfig::load_from(path)
            .with_context(|| format!("Failed to load site config from {}", path.display()))?,
        None => SiteConfig::default(),
    };

    if args.dark {
        config.start_dark = true;
    }
    if args.quick {
        let quick = TimingConfig::quick();
        config.timing.splash_ms = quick.splash_ms;
        config.timing.carousel_interval_ms = quick.carousel_interval_ms;
    }

    if args.dump_config {
        println!("{}", config.to_toml_string()?);
        return Ok(());
    }

    tracing::info!(
        owner = %config.profile.name,
        projects = config.catalog.projects.len(),
        dark = config.start_dark,
        "Starting portfolio site"
    );

    let title = format!("{} - Portfolio", config.profile.name);
    SITE_CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Site config already initialized"))?;

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component providing the site configuration to the view.
#[component]
fn RootApp() -> Element {
    use_context_provider(|| SITE_CONFIG.get().cloned().unwrap_or_default());

    use_drop(|| {
        tracing::info!("Shutting down portfolio site");
    });

    rsx! {
        PortfolioView {}
    }
}
