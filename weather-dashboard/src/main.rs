//! weather-dashboard binary
//!
//! ```sh
//! # Open-Meteo lookups for the default cities
//! cargo run -p weather-dashboard
//!
//! # Any endpoint returning [{"city": "...", "temperature": 21.5}]
//! cargo run -p weather-dashboard -- --url http://localhost:8080/api/weather/summary
//!
//! # Offline, from a JSON file
//! cargo run -p weather-dashboard -- --file summary.json --threshold 30
//! ```

use std::cell::RefCell;
use std::error::Error;
use std::io;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dashboard_core::{EventKind, EventOutcome, Runtime, TaskManager};
use ratatui::{backend::CrosstermBackend, Terminal};

use weather_dashboard::action::Action;
use weather_dashboard::components::{Component, Dashboard, DashboardProps};
use weather_dashboard::config::{Args, DashboardConfig};
use weather_dashboard::effect::{Effect, LOAD_TASK};
use weather_dashboard::loader::{source_from_config, WeatherSource};
use weather_dashboard::logging::init_file_logging;
use weather_dashboard::reducer::reducer;
use weather_dashboard::state::DashboardState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = DashboardConfig::load(&args)?;

    if let Some(path) = &config.log_file {
        init_file_logging(path)
            .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
    }

    let source = source_from_config(&config.source, config.timeout)?;
    tracing::info!(
        source = %source.describe(),
        threshold = config.alert_threshold,
        "Starting dashboard"
    );

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, source, config.alert_threshold).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Dashboard exited with error");
    }
    Ok(result?)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    source: Arc<dyn WeatherSource>,
    alert_threshold: f64,
) -> io::Result<()> {
    let state = DashboardState::new(source.describe(), alert_threshold);
    let mut runtime = Runtime::new(state, reducer);
    runtime.enqueue(Action::DashboardMount);

    let ui = RefCell::new(Dashboard::default());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                ui.borrow_mut()
                    .render(frame, area, DashboardProps { state });
            },
            |event, state| map_event(&mut ui.borrow_mut(), event, state),
            |action| matches!(action, Action::Quit),
            |effect, tasks| handle_effect(&source, effect, tasks),
        )
        .await
}

fn map_event(
    dashboard: &mut Dashboard,
    event: &EventKind,
    state: &DashboardState,
) -> EventOutcome<Action> {
    if let EventKind::Resize(..) = event {
        return EventOutcome::Redraw;
    }
    EventOutcome::from(dashboard.handle_event(event, DashboardProps { state }))
}

/// Turn reducer effects into tasks
fn handle_effect(
    source: &Arc<dyn WeatherSource>,
    effect: Effect,
    tasks: &mut TaskManager<Action>,
) {
    match effect {
        Effect::LoadSummary => {
            let source = Arc::clone(source);
            tasks.spawn(LOAD_TASK, async move {
                match source.fetch_summary().await {
                    Ok(records) => Action::LoadDidComplete(records),
                    Err(e) => {
                        tracing::warn!(error = %e, "Summary load failed");
                        Action::LoadDidFail(e.to_string())
                    }
                }
            });
        }
        Effect::CancelLoad => {
            tasks.cancel(LOAD_TASK);
        }
    }
}
