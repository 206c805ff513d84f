//! Welcomer - first-run welcome screens in the terminal

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::path::PathBuf;
use std::time::Duration;
use welcomer::gate::{DEFAULT_PRESENTATION_DELAY, GateOptions, WelcomeGate};
use welcomer::presets::Preset;
use welcomer::store::{DEFAULT_WELCOME_KEY, FileStore};
use welcomer::tui::{Handler, Host};
use welcomer::{PrivacyAction, WelcomeConfig, WelcomeStyle, paths, render};

/// Show first-run welcome screens in the terminal
#[derive(Parser)]
#[command(name = "welcomer")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    screen: ScreenArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demo host and show the welcome screen if it has not been seen
    Show {
        #[command(flatten)]
        screen: ScreenArgs,

        /// Delay before the screen appears, in milliseconds (default: the gate default)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Forget that a welcome screen was seen
    Reset {
        /// Welcome key to reset
        #[arg(long, default_value = DEFAULT_WELCOME_KEY)]
        key: String,
    },
    /// Print whether a welcome screen was seen
    Status {
        /// Welcome key to inspect; all keys when omitted
        #[arg(long)]
        key: Option<String>,
    },
    /// Print the rendered welcome screen as text
    Preview {
        #[command(flatten)]
        screen: ScreenArgs,
    },
}

#[derive(Args)]
struct ScreenArgs {
    /// Welcome config JSON file
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in sample config (basic, customized, minimal, immersive)
    #[arg(long)]
    preset: Option<Preset>,

    /// Layout (standard or immersive)
    #[arg(long)]
    style: Option<WelcomeStyle>,

    /// Welcome key the screen is gated on
    #[arg(long)]
    key: Option<String>,
}

/// Config, layout and key resolved from the command line.
struct Screen {
    config: WelcomeConfig,
    style: WelcomeStyle,
    key: String,
}

impl ScreenArgs {
    fn resolve(self) -> Result<Screen> {
        let privacy = PrivacyAction::new(|| tracing::info!("Privacy link opened"));

        let (config, style, key) = if let Some(preset) = self.preset {
            (preset.config(privacy), preset.style(), preset.key())
        } else {
            let path = self.config.unwrap_or_else(paths::default_config_path);
            let config = if path.exists() {
                WelcomeConfig::load_from(&path)?
            } else {
                tracing::debug!("No config at {}, using the basic preset", path.display());
                Preset::Basic.config(privacy)
            };
            (config, WelcomeStyle::default(), DEFAULT_WELCOME_KEY)
        };

        Ok(Screen {
            config,
            style: self.style.unwrap_or(style),
            key: self.key.unwrap_or_else(|| key.to_string()),
        })
    }
}

fn main() -> Result<()> {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0
        && let (Some(dir), Some(file)) = (log_path.parent(), log_path.file_name())
    {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never(dir, file);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {e}");
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Show { screen, delay_ms }) => cmd_show(
            screen,
            presentation_delay(delay_ms),
        ),
        Some(Commands::Reset { key }) => cmd_reset(&key),
        Some(Commands::Status { key }) => cmd_status(key.as_deref()),
        Some(Commands::Preview { screen }) => cmd_preview(screen),
        None => cmd_show(cli.screen, DEFAULT_PRESENTATION_DELAY),
    }
}

fn presentation_delay(delay_ms: Option<u64>) -> Duration {
    delay_ms.map_or(DEFAULT_PRESENTATION_DELAY, Duration::from_millis)
}

fn cmd_show(args: ScreenArgs, presentation_delay: Duration) -> Result<()> {
    let screen = args.resolve()?;
    let store = FileStore::open_default();
    tracing::info!(path = %store.path().display(), key = %screen.key, "Starting welcome host");

    let options = GateOptions { presentation_delay };
    let app_name = screen.config.app_name.clone();
    let mut host = Host::new(
        WelcomeGate::with_options(store, options),
        screen.config,
        screen.style,
        screen.key,
    );

    welcomer::tui::run(&mut host, Handler::default(), |frame| {
        draw_demo_content(frame, &app_name);
    })
    .context("Terminal session failed")
}

fn draw_demo_content(frame: &mut Frame<'_>, app_name: &str) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            app_name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Main application content"),
        Line::from("The welcome screen appears on first launch."),
        Line::from(""),
        Line::from("Press q to quit"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, frame.area());
}

fn cmd_reset(key: &str) -> Result<()> {
    let store = FileStore::open_default();
    let path = store.path().to_path_buf();
    WelcomeGate::new(store)
        .reset(key)
        .with_context(|| format!("Failed to reset welcome flag in {}", path.display()))?;
    println!("Reset welcome flag {key:?}; the screen will show on next launch.");
    Ok(())
}

fn cmd_status(key: Option<&str>) -> Result<()> {
    let store = FileStore::open_default();
    let entries = store
        .entries()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    println!("Store: {}", store.path().display());
    let selected: Vec<_> = entries
        .iter()
        .filter(|(name, _)| key.is_none_or(|key| key == name))
        .collect();

    if selected.is_empty() {
        println!("{}: not seen", key.unwrap_or("(no keys)"));
        return Ok(());
    }

    for (name, entry) in selected {
        let state = if entry.seen { "seen" } else { "not seen" };
        println!(
            "{name}: {state} (updated {})",
            entry.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}

fn cmd_preview(args: ScreenArgs) -> Result<()> {
    let screen = args.resolve()?;
    for line in render(&screen.config, screen.style).to_text_lines() {
        println!("{line}");
    }
    Ok(())
}
