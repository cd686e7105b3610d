#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::HeroConfig;
use folio_ui::StaticHost;

/// Global hero configuration, set from command line
static HERO_CONFIG: OnceLock<HeroConfig> = OnceLock::new();

/// Get the hero configuration (set from command line or default)
pub fn get_hero_config() -> HeroConfig {
    HERO_CONFIG.get().cloned().unwrap_or_default()
}

/// Folio - Portfolio landing hero
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - Animated portfolio hero section")]
struct Args {
    /// Hero config file (JSON). Defaults to <config dir>/folio/hero.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable the entrance animation regardless of the system setting
    #[arg(long, conflicts_with = "allow_motion")]
    reduced_motion: bool,

    /// Animate even if the system asks for reduced motion
    #[arg(long)]
    allow_motion: bool,

    /// Window width
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Print a static render of the hero to stdout and exit
    #[arg(long)]
    render_html: bool,

    /// Viewport width assumed by --render-html
    #[arg(long, requires = "render_html")]
    viewport_width: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Reduced-motion override from the flags, if any.
    fn motion_override(&self) -> Option<bool> {
        if self.reduced_motion {
            Some(true)
        } else if self.allow_motion {
            Some(false)
        } else {
            None
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Default config location (<config dir>/folio/hero.json)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("hero.json"))
}

fn load_config(args: &Args) -> Result<HeroConfig> {
    let mut config = if let Some(ref path) = args.config {
        HeroConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else if let Some(path) = default_config_path().filter(|p| p.exists()) {
        HeroConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else {
        HeroConfig::default()
    };

    if let Some(reduced) = args.motion_override() {
        config.reduced_motion = Some(reduced);
    }
    Ok(config)
}

fn render_page(config: HeroConfig, viewport_width: Option<f64>) -> String {
    let body = folio_ui::render_to_string(
        config,
        StaticHost {
            viewport_width,
            prefers_reduced_motion: None,
        },
    );
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<style>{}</style>\n</head>\n<body>\n<main class=\"landing\">{}</main>\n</body>\n</html>\n",
        theme::GLOBAL_STYLES,
        body
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = load_config(&args)?;

    if args.render_html {
        print!("{}", render_page(config, args.viewport_width));
        return Ok(());
    }

    tracing::info!(
        nav_delay_ms = config.nav_delay_ms,
        reduced_motion = ?config.reduced_motion,
        "Starting Folio"
    );

    // Store config globally
    let _ = HERO_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
