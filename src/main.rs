use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use campaign_admin::config::AppConfig;
use campaign_admin::core::campaign::ListViewParams;
use campaign_admin::core::logging;
use campaign_admin::tui::app::AppState;
use campaign_admin::tui::services::Services;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();
    config.validate()?;

    // Keep the guard alive so buffered records are flushed on exit
    let _log_guard = logging::init_tui(&config.data_dir());
    log::info!("{} v{} starting", campaign_admin::NAME, campaign_admin::VERSION);

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let services = Services::init(&config, event_tx)?;
    let params = ListViewParams::new(
        config.session.organization_id.clone(),
        config.session.admin_perms,
    );
    let mut app = AppState::new(event_rx, services, params);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("Event loop failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("Shutting down");
    Ok(())
}
