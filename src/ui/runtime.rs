//! Main loop: events in, reducer transitions, frames out.

use std::time::Duration;

use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::bridge;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::router::Route;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config, initial_route: Route) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(50));

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let api = bridge::spawn(client, events.sender());

    let mut app = App::new(config);
    app.set_api_sender(api);
    app.navigate(initial_route);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks the new size up from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::PurchaseSettled(outcome)) => app.on_purchase_settled(outcome),
            Ok(AppEvent::AchievementsSettled { seq, result }) => {
                app.on_achievements_settled(seq, result);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
