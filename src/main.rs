mod app;
mod config;
mod icons;
mod ui;
mod weather;

use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use parking_lot::Mutex;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;
use icons::IconStore;
use weather::WeatherSnapshot;

#[derive(Parser, Debug)]
#[command(name = "surfside")]
#[command(about = "TUI campus weather dashboard")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/surfside/config.toml")]
    config: String,

    /// Disable graphics-protocol icons
    #[arg(long)]
    no_graphics: bool,
}

/// Which screen the shell is showing. The weather card only invokes its
/// navigation callback; the destination is decided out here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    SurfReport,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surfside=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config)?;

    // Icon store queries the terminal, so it must exist before raw mode
    let icon_store = if cli.no_graphics {
        IconStore::disabled()
    } else {
        IconStore::new()
    };
    let icons = Arc::new(Mutex::new(icon_store));

    // Watch the snapshot file the external fetcher maintains
    let mut snapshots = spawn_snapshot_watcher(config.weather.snapshot_path.clone());

    // The navigation capability handed to the card: it signals, the shell routes.
    let surf_requested = Rc::new(Cell::new(false));
    let request = surf_requested.clone();
    let mut app = App::new(config, Box::new(move || request.set(true)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(
        &mut terminal,
        &mut app,
        Some(&icons),
        &mut snapshots,
        &surf_requested,
    )
    .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    icons: Option<&Arc<Mutex<IconStore>>>,
    snapshots: &mut mpsc::UnboundedReceiver<Option<WeatherSnapshot>>,
    surf_requested: &Rc<Cell<bool>>,
) -> Result<()> {
    let mut screen = Screen::Dashboard;

    loop {
        // Apply whatever the fetcher produced since the last pass. A
        // withdrawn snapshot is applied too - the card goes back to loading.
        while let Ok(snapshot) = snapshots.try_recv() {
            if let (Some(snapshot), Some(store)) = (snapshot.as_ref(), icons) {
                preload_icons(app, snapshot, store);
            }
            app.set_snapshot(snapshot);
        }

        if surf_requested.take() {
            screen = Screen::SurfReport;
        }

        terminal.draw(|f| match screen {
            Screen::Dashboard => ui::draw(f, app, icons),
            Screen::SurfReport => ui::draw_surf_report(f, app),
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (screen, key.code) {
                    (_, KeyCode::Char('c'))
                        if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                    {
                        return Ok(());
                    }
                    (Screen::Dashboard, KeyCode::Char('q') | KeyCode::Esc) => return Ok(()),
                    (Screen::Dashboard, KeyCode::Enter | KeyCode::Char('s')) => {
                        app.activate_surf_report();
                    }
                    (Screen::SurfReport, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q')) => {
                        screen = Screen::Dashboard;
                    }
                    _ => {}
                }
            }
        } else {
            app.on_tick();
        }
    }
}

/// Poll the snapshot file and forward wholesale replacements.
///
/// One message per observed mtime change: `Some` for a readable snapshot,
/// `None` when the file went away or stopped parsing.
fn spawn_snapshot_watcher(path: PathBuf) -> mpsc::UnboundedReceiver<Option<WeatherSnapshot>> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut seen: Option<SystemTime> = None;
        loop {
            let mtime = weather::snapshot_mtime(&path);
            if mtime != seen {
                seen = mtime;
                if tx.send(weather::load_snapshot(&path)).is_err() {
                    break;
                }
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    });

    rx
}

/// Warm the icon cache for a fresh snapshot so the draw path stays
/// cache-only. Failures are the loader's business; rendering proceeds
/// without an image either way.
fn preload_icons(app: &App, snapshot: &WeatherSnapshot, store: &Arc<Mutex<IconStore>>) {
    let base = &app.config().weather.icon_base_url;
    let mut store = store.lock();
    if !store.supports_graphics() {
        return;
    }
    store.load(base, &snapshot.current.icon_key);
    for day in &snapshot.daily {
        store.load(base, &day.icon_key);
    }
}
