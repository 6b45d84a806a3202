mod config;
mod todo;
mod tui;

use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use std::fs::{self, File};
use std::io;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use todo::persistence;
use todo::store::FileStore;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "todos")]
#[command(about = "A terminal to-do list that remembers what you still have to do")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
    #[command(about = "Forget saved todos; the next start shows the demo list")]
    Reset,
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (currently only 'store_path' is supported)")]
        key: String,
        #[arg(help = "Configuration value", value_hint = ValueHint::FilePath)]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        Some(Commands::Reset) => {
            if let Err(e) = reset_store() {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = init_logging() {
                eprintln!("Warning: logging disabled: {:#}", e);
            }
            if let Err(e) = run_main_app() {
                log::error!("Exiting with error: {:#}", e);
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn check_key(key: &str) {
    if key != "store_path" {
        eprintln!("Error: Unknown configuration key '{}'. Only 'store_path' is supported.", key);
        std::process::exit(1);
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            check_key(&key);

            let mut config = Config::load_or_default()?;
            config.set_store_path(value);
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            check_key(&key);

            let config = Config::load_or_default()?;
            println!("{}", config.store_path);
        }
        ConfigAction::List => {
            let config = Config::load_or_default()?;
            println!("store_path = {}", config.store_path);
        }
    }
    Ok(())
}

/// The terminal belongs to the TUI, so logs go to a file in the data directory.
fn init_logging() -> Result<()> {
    let log_dir = config::data_dir()?;
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_path = log_dir.join("todos.log");
    let log_file = File::create(&log_path)
        .with_context(|| format!("Failed to create {}", log_path.display()))?;

    WriteLogger::init(LevelFilter::Debug, log_config, log_file)?;
    Ok(())
}

fn open_store() -> Result<FileStore> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    Ok(FileStore::new(config.store_path))
}

fn reset_store() -> Result<()> {
    let mut store = open_store()?;
    persistence::reset(&mut store)?;
    println!("Saved todos removed from {}", store.path().display());
    Ok(())
}

fn run_main_app() -> Result<()> {
    let store = open_store()?;
    log::info!("Starting with store at {}", store.path().display());

    let mut app = App::load(Box::new(store));

    run_tui(&mut app)?;

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
