//! Grid Dashboard - CLI entry point
//!
//! Runs the dashboard TUI by default and offers subcommands to inspect or
//! reset the persisted layout and to manage the configuration file.

use clap::{Parser, Subcommand};
use grid_dashboard::config::{default, loader::ConfigLoader, schema::Config, xdg};
use grid_dashboard::layout::{hydrate, persist, Layout, LAYOUT_STORAGE_KEY};
use grid_dashboard::logging::{self, LogTarget};
use grid_dashboard::storage::{FileStorage, MemoryStorage, Storage};
use grid_dashboard::tui::app::App;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Widget grid dashboard
#[derive(Parser)]
#[command(name = "grid-dashboard")]
#[command(version, about = "Terminal widget dashboard with a persisted grid layout")]
struct Cli {
    /// Configuration file (defaults to the XDG config path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the grid-dashboard CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard (default)
    Tui {
        /// Keep the layout in memory only; nothing is written to disk
        #[arg(long)]
        ephemeral: bool,
    },

    /// Inspect or reset the persisted layout
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `layout` subcommand.
#[derive(Subcommand)]
enum LayoutAction {
    /// Print the persisted layout as JSON
    Show,
    /// Restore and persist the default layout
    Reset,
    /// Show the layout file path
    Path,
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Tui { ephemeral: false }) {
        Commands::Tui { ephemeral } => {
            let Some(config) = load_config(config_path) else {
                return ExitCode::FAILURE;
            };
            init_logging(&config, true);
            run_tui(&config, ephemeral)
        }
        Commands::Layout { action } => {
            let Some(config) = load_config(config_path) else {
                return ExitCode::FAILURE;
            };
            init_logging(&config, false);
            run_layout_command(&config, action)
        }
        Commands::Config { action } => {
            init_logging(&Config::default(), false);
            run_config_command(config_path, action)
        }
    }
}

/// Loads the configuration, reporting failures on stderr.
fn load_config(path: Option<&Path>) -> Option<Config> {
    match ConfigLoader::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

fn init_logging(config: &Config, interactive: bool) {
    let target = LogTarget::for_config(&config.log, interactive);
    if let Err(e) = logging::init(config.log.level, target) {
        eprintln!("Warning: failed to open log file: {}", e);
    }
}

fn run_tui(config: &Config, ephemeral: bool) -> ExitCode {
    let storage: Box<dyn Storage> = if ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(FileStorage::new(config.storage.resolved_dir()))
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = rt.block_on(async {
        let mut app = App::new(storage, config);
        app.run().await
    }) {
        eprintln!("TUI error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_layout_command(config: &Config, action: LayoutAction) -> ExitCode {
    let mut storage = FileStorage::new(config.storage.resolved_dir());
    match action {
        LayoutAction::Show => match hydrate(&storage).to_json_pretty() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        LayoutAction::Reset => match persist(&mut storage, &Layout::default_arrangement()) {
            Ok(()) => {
                println!(
                    "Layout reset to default at {}",
                    storage.entry_path(LAYOUT_STORAGE_KEY).display()
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        LayoutAction::Path => {
            println!("{}", storage.entry_path(LAYOUT_STORAGE_KEY).display());
            ExitCode::SUCCESS
        }
    }
}

fn run_config_command(path: Option<&Path>, action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => {
            let created = match path {
                Some(p) => default::create_default_config_at(p, force).map(|()| p.to_path_buf()),
                None => default::create_default_config(force),
            };
            created.map(|p| println!("Created configuration at {}", p.display()))
        }
        ConfigAction::Path => {
            let p = path.map_or_else(xdg::config_path, Path::to_path_buf);
            println!("{}", p.display());
            Ok(())
        }
        ConfigAction::Validate => ConfigLoader::load(path).map(|config| {
            println!("Configuration is valid");
            println!("{config:#?}");
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
