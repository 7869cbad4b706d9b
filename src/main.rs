// sortty: step-by-step sorting and data structure visualizer

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sortty::config::{Cli, Settings};
use sortty::dump::dump_run;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match Settings::from_cli(Cli::parse()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(&settings)?;

    if settings.dump {
        let stdout = io::stdout();
        dump_run(&settings, io::BufWriter::new(stdout.lock()))?;
        return Ok(());
    }

    tracing::info!(
        mode = ?settings.mode,
        algorithm = %settings.algorithm,
        structure = %settings.structure,
        len = settings.data.len(),
        "starting interface"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Logs go to `--log-file` when given. The interface owns the terminal, so
/// without a file they are dropped, except in `--dump` mode where stderr is free.
fn init_logging(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env().add_directive("sortty=info".parse()?);

    if let Some(path) = &settings.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if settings.dump {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init();
    }

    Ok(())
}
