use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Timelike;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kidclock::app::App;
use kidclock::clock::ClockTime;
use kidclock::config::{Config, SUPPORTED_LANGUAGES};
use kidclock::event::EventHandler;
use kidclock::ui::screen;

#[derive(Parser)]
#[command(name = "kidclock", version, about = "Terminal analog clock for learning to tell time")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Display language (en, ja)")]
    lang: Option<String>,

    #[arg(short, long, help = "Starting time, e.g. 9:00", conflicts_with = "now")]
    start: Option<ClockTime>,

    #[arg(long, help = "Start at the current local time")]
    now: bool,

    #[arg(long, help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "Save the effective settings to the config file and exit")]
    save_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        warn!(%err, "could not load config, using defaults");
        Config::default()
    });
    apply_cli(&mut config, &cli);

    if cli.save_config {
        let path = Config::config_path();
        config.save_to(&path)?;
        println!("Saved {}", path.display());
        return Ok(());
    }

    rust_i18n::set_locale(&config.language);
    let mut app = App::new(config);
    info!(time = %app.clock.time(), "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn apply_cli(config: &mut Config, cli: &Cli) {
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if let Some(lang) = &cli.lang {
        if SUPPORTED_LANGUAGES.contains(&lang.as_str()) {
            config.language = lang.clone();
        } else {
            warn!(lang = %lang, "unsupported language");
        }
    }
    if let Some(start) = cli.start {
        config.start_time = start;
    } else if cli.now {
        let now = chrono::Local::now();
        let total = (now.hour() % 12) * 60 + now.minute();
        config.start_time = ClockTime::from_total_minutes(total as u16);
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let mut drawn = None;
        terminal.draw(|frame| drawn = Some(screen::render(frame, app)))?;
        app.layout = drawn;

        let event = events.next()?;
        app.handle_event(event, Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
