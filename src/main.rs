use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use article_params::article::ArticleField;
use article_params::catalog::DEFAULT_ARTICLE_STATE;
use article_params::{config, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "article-params")]
#[command(about = "Article styling settings panel", long_about = "Article styling settings panel\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display current configuration
    Config,
    /// List the options available for every article field
    Options,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("panel_width: {}", cfg.display.panel_width());
    println!();
    println!("[article]");
    let document_default = cfg.article.resolve();
    for field in ArticleField::ALL {
        let option = field.get(&document_default);
        let note = if option == field.get(&DEFAULT_ARTICLE_STATE) { "" } else { " (differs from panel default)" };
        println!("{}: {} ({}){}", field.key(), option.value, option.title, note);
    }
}

/// Handle the options command - list every catalog, marking the defaults
fn handle_options_command() {
    for field in ArticleField::ALL {
        println!("{} [{}]", field.title(), field.key());
        let default = field.get(&DEFAULT_ARTICLE_STATE);
        for option in field.catalog() {
            let marker = if *option == default { "*" } else { " " };
            println!("  {} {:<20} {}", marker, option.title, option.value);
        }
        println!();
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }
    if let Some(e) = config_error {
        warn!("CONFIG: {:#}, using defaults", e);
    }

    match cli.command {
        None => tui::run(config).await.context("Error running TUI")?,
        Some(Commands::Config) => handle_config_command(&config),
        Some(Commands::Options) => handle_options_command(),
    }

    Ok(())
}
