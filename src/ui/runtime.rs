use crate::navigation::{NavOutcome, NavRequest, NavigationController};
use crate::ui::input::is_ctrl_char;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view::ScreenView;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Drive the visible screen until every screen has been closed.
pub fn run(controller: &mut NavigationController<dyn ScreenView>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    loop {
        if controller.is_closed() {
            break;
        }
        terminal.draw(|frame| {
            let area = frame.area();
            if let Some(screen) = controller.visible_screen() {
                screen.render(frame, area);
            }
        })?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(request) = route_key(controller, key) {
                    for outcome in controller.dispatch(request) {
                        log_outcome(&outcome);
                    }
                }
            }
            // Size changes are picked up by the next draw.
            _ => {}
        }
    }

    guard.restore();
    Ok(())
}

/// Ctrl+Q closes the application from any screen; everything else belongs
/// to the visible screen.
pub fn route_key(
    controller: &mut NavigationController<dyn ScreenView>,
    key: KeyEvent,
) -> Option<NavRequest> {
    if is_ctrl_char(key, 'q') {
        return Some(NavRequest::RequestCloseAll);
    }
    controller
        .visible_screen_mut()
        .and_then(|screen| screen.handle_key(key))
}

fn log_outcome(outcome: &NavOutcome) {
    match outcome {
        NavOutcome::Moved { to, .. } => tracing::debug!(to = %to, "Navigation applied"),
        NavOutcome::Denied(reason) => tracing::debug!(?reason, "Navigation denied"),
        NavOutcome::Closed => tracing::debug!("All screens closed"),
    }
}
