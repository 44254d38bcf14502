use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foldscroll_core::{Align, AppConfig, EasingType};

mod amount;
mod commands;
mod window_file;

use amount::ScrollAmount;
use window_file::WindowOverrides;

#[derive(Parser)]
#[command(name = "foldscroll")]
#[command(author, version, about = "Fold-aware scroll arithmetic for editor windows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ~/.config/foldscroll/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    window: WindowOverrides,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold-aware distance between two lines
    Delta {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
    /// Line reached after walking a (possibly fractional) delta
    Resolve {
        #[arg(long)]
        line: usize,
        #[arg(long, allow_hyphen_values = true)]
        delta: f64,
    },
    /// Effective scroll-off of the window
    ScrollOff,
    /// Place the cursor (line clamped, column defaults to curswant)
    Cursor {
        #[arg(long)]
        line: Option<usize>,
        #[arg(long, allow_hyphen_values = true)]
        col: Option<i64>,
    },
    /// Print where a scroll would end as JSON
    Plan {
        /// Rows to scroll: a number, or half/page with an optional leading '-'
        #[arg(allow_hyphen_values = true)]
        amount: ScrollAmount,
    },
    /// Print the view change that puts the cursor line at top, center or bottom
    Align {
        #[arg(value_enum)]
        position: AlignArg,
    },
    /// Animate a scroll and print one JSON frame per tick
    Animate {
        #[arg(allow_hyphen_values = true)]
        amount: ScrollAmount,
        /// Override the configured easing curve
        #[arg(long, value_parser = parse_easing)]
        easing: Option<EasingType>,
        /// Override the configured animation duration
        #[arg(long)]
        duration_ms: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AlignArg {
    Top,
    Center,
    Bottom,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Top => Align::Top,
            AlignArg::Center => Align::Center,
            AlignArg::Bottom => Align::Bottom,
        }
    }
}

fn parse_easing(s: &str) -> std::result::Result<EasingType, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("unknown easing '{}'", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let mut window = cli.window.build(&config.scroll)?;

    match cli.command {
        Commands::Delta { from, to } => commands::delta::run(&window, from, to),
        Commands::Resolve { line, delta } => commands::resolve::run(&window, line, delta),
        Commands::ScrollOff => commands::scroll_off::run(&window),
        Commands::Cursor { line, col } => commands::cursor::run(&mut window, line, col),
        Commands::Plan { amount } => commands::plan::run(&window, amount, &config.scroll),
        Commands::Align { position } => commands::align::run(&window, position.into()),
        Commands::Animate {
            amount,
            easing,
            duration_ms,
        } => {
            if let Some(easing) = easing {
                config.scroll.easing = easing;
            }
            if let Some(duration_ms) = duration_ms {
                config.scroll.animation_duration_ms = duration_ms;
            }
            commands::animate::run(window, amount, config.scroll).await
        }
    }
}
