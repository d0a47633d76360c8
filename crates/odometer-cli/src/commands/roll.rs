use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use odometer_core::AppConfig;
use odometer_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    roll::SetOutcome,
    App,
};

use super::run::{draw, restore_terminal, setup_terminal, Tui};

/// How long the settled number stays on screen before exit
const HOLD: Duration = Duration::from_millis(600);

pub async fn run(config: Arc<AppConfig>, from: i64, to: i64) -> Result<()> {
    let mut app = App::new(&config);
    app.odometer.set_number(from, false);

    let event_handler = EventHandler::new(&config.ui);
    let mut terminal = setup_terminal()?;

    let result = roll_once(&mut terminal, &mut app, &event_handler, to).await;
    restore_terminal(&mut terminal)?;
    result?;

    println!("{}", app.odometer.display_text());
    Ok(())
}

async fn roll_once(
    terminal: &mut Tui,
    app: &mut App,
    event_handler: &EventHandler,
    to: i64,
) -> Result<()> {
    if let SetOutcome::Started { tracks } = app.show(to, Instant::now()) {
        info!("Rolling {} tracks to {}", tracks, to);
    }

    while app.needs_fast_update() {
        app.tick();
        terminal.draw(|frame| draw(frame, app))?;

        if let Some(AppEvent::Key(key)) = event_handler.next_animation()? {
            if handle_key_event(key) == Action::Quit {
                app.handle_action(Action::StopAnimation);
            }
        }
    }

    terminal.draw(|frame| draw(frame, app))?;
    tokio::time::sleep(HOLD).await;
    Ok(())
}
