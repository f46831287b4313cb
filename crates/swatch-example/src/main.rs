//! Example CLI consumer for umbra.
//!
//! Persists the theme preference under the user config directory, detects
//! the OS color scheme, and prints the active palette as terminal swatches.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use umbra::{ColorRole, FilePreferences, OsScheme, PaletteSet, ThemeMode, ThemeStore};

#[derive(Parser)]
#[command(name = "swatch", about = "Preview and switch the umbra demo theme")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the active palette
    Show,
    /// Set an explicit theme mode (light or dark)
    Set { mode: String },
    /// Flip between light and dark
    Toggle,
    /// Follow the OS preference again
    Auto,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "umbra=debug" } else { "umbra=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let prefs_path = dirs::config_dir()
        .context("no user config directory available")?
        .join("swatch")
        .join("theme");
    debug!(path = %prefs_path.display(), "using preference file");

    let mut store = ThemeStore::new(
        PaletteSet::builtin(),
        Box::new(FilePreferences::new(prefs_path)),
        Box::new(OsScheme::new()),
        ThemeMode::Light,
    );

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::Set { mode } => {
            let mode: ThemeMode = mode.parse()?;
            store.set_mode(mode);
        }
        Command::Toggle => {
            store.toggle();
        }
        Command::Auto => store.follow_system(),
    }

    print_swatches(&store);
    Ok(())
}

fn print_swatches(store: &ThemeStore) {
    let source = if store.follows_system() {
        "following OS preference"
    } else {
        "explicit choice"
    };
    println!(
        "theme: {} {}\n",
        console::style(store.mode()).bold(),
        console::style(format!("({})", source)).dim()
    );

    let palette = store.palette();
    for role in ColorRole::ALL {
        let rgb = palette.get(role);
        println!(
            "  {:<16} {}  {}",
            role.as_str(),
            rgb.to_hex(),
            palette.style(role).apply_to("\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}")
        );
    }
}
