use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

use odometer_core::AppConfig;
use odometer_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{OdometerView, StatusBarWidget},
    App,
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(
    config: Arc<AppConfig>,
    from: i64,
    auto: Option<u64>,
    step: Option<i64>,
) -> Result<()> {
    let mut app = App::new(&config);
    if let Some(step) = step {
        app.step = step;
    }
    app.odometer.set_number(from, false);

    let event_handler = EventHandler::new(&config.ui);

    // Channel for automatic steps
    let (auto_tx, mut auto_rx) = mpsc::unbounded_channel::<()>();
    let auto_task = auto.map(|ms| {
        info!("Auto-stepping by {} every {}ms", app.step, ms);
        spawn_auto_increment(ms, auto_tx)
    });

    let mut terminal = setup_terminal()?;

    let result = run_loop(&mut terminal, &mut app, &event_handler, &mut auto_rx);

    if let Some(task) = auto_task {
        task.abort();
    }
    restore_terminal(&mut terminal)?;

    result
}

fn run_loop(
    terminal: &mut Tui,
    app: &mut App,
    event_handler: &EventHandler,
    auto_rx: &mut mpsc::UnboundedReceiver<()>,
) -> Result<()> {
    loop {
        // Apply pending automatic steps (non-blocking)
        while auto_rx.try_recv().is_ok() {
            if !app.needs_fast_update() {
                let step = app.step;
                app.add(step, Instant::now());
            }
        }

        app.tick();
        terminal.draw(|frame| draw(frame, app))?;

        // Faster polling while digits are rolling
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(AppEvent::Key(key)) = event {
            app.handle_action(handle_key_event(key));
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Send a step request every `interval_ms` until the receiver is dropped
pub fn spawn_auto_increment(interval_ms: u64, tx: mpsc::UnboundedSender<()>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            if tx.send(()).is_err() {
                break;
            }
        }
    })
}

/// Counter centered in the screen with the status bar underneath
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let counter_area = centered_rows(chunks[0], app.odometer.font().height());
    frame.render_widget(
        OdometerView::new(&app.odometer).alignment(Alignment::Center),
        counter_area,
    );
    StatusBarWidget::render(frame, chunks[1], app);
}

fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Odometer"))?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
