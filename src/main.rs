use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};
use unicode_width::UnicodeWidthStr;

use nihongo_pocket::{
    config::Config,
    kana::{KanaChart, KanaTable, COLUMN_LABELS, ROW_LABELS},
    phrases::PhraseBank,
    pocket_tui::App,
    session::Session,
};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()
        .context("Failed to load configuration")?
        .with_seed(cli.seed);
    config.validate()?;

    // The TUI owns the terminal, so it logs to the file only
    init_logging(&config, cli.command.is_some());

    match cli.command {
        Some(command) => run_command(command, &config),
        None => run_tui(&config),
    }
}

fn init_logging(config: &Config, to_stderr: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nihongo_pocket=info"));

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(EnvFilter::new("warn"))
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .with(stderr_layer)
        .init();
}

fn run_tui(config: &Config) -> Result<()> {
    info!("Starting Nihongo Pocket TUI (log file: {})", config.log_path().display());

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Session::from_config(config));
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(()) => {
            info!("Nihongo Pocket exited with {} words", app.session.vocabulary().len());
            Ok(())
        }
        Err(e) => {
            error!("Nihongo Pocket encountered an error: {}", e);
            Err(e)
        }
    }
}

/// Handle CLI mode commands - print output and exit
fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Chart { system, json } => {
            info!("Printing {} chart", system);
            let table = KanaChart::chart(system);
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print_chart(&table);
            }
        }
        Commands::Phrase { all, json } => {
            if all {
                let phrases = PhraseBank::all();
                if json {
                    println!("{}", serde_json::to_string_pretty(phrases)?);
                } else {
                    for phrase in phrases {
                        println!("{}  {}  {}", phrase.source, phrase.reading, phrase.meaning);
                    }
                }
            } else {
                let mut session = Session::from_config(config);
                let phrase = session.random_phrase();
                info!("Phrase of the day: {}", phrase.source);
                if json {
                    println!("{}", serde_json::to_string_pretty(phrase)?);
                } else {
                    println!("{}", phrase.source);
                    println!("{}", phrase.reading);
                    println!("{}", phrase.meaning);
                }
            }
        }
    }

    Ok(())
}

/// Pad to a display width; kana take two terminal columns
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn print_chart(table: &KanaTable) {
    const CELL: usize = 12;

    println!("{} ({} characters)", table.system().title(), table.character_count());
    println!();

    let mut header = pad("", 4);
    for label in COLUMN_LABELS {
        header.push_str(&pad(label, CELL));
    }
    println!("{}", header.trim_end());
    println!("{}", "-".repeat(4 + CELL * COLUMN_LABELS.len()));

    for (i, row) in table.rows().iter().enumerate() {
        let mut line = pad(ROW_LABELS.get(i).copied().unwrap_or(""), 4);
        for label in row {
            line.push_str(&pad(label, CELL));
        }
        println!("{}", line.trim_end());
    }
}
