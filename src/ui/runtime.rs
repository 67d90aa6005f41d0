use crate::config::Config;
use crate::service::{GiftService, HttpGiftService};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// Blocks the calling thread; the request task runs on `runtime`.
pub fn run(config: &Config, runtime: Handle) -> io::Result<()> {
    let service: Arc<dyn GiftService> =
        Arc::new(HttpGiftService::new(&config.service).map_err(io::Error::other)?);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app =
        App::new(service, events.sender(), runtime).with_alert_ticks(config.ui.alert_ticks);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Gifts(outcome)) => app.on_gifts(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI closed");
    Ok(())
}
