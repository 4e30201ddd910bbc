//! Raw-mode terminal setup with guaranteed teardown.

use std::io::{self, Stdout};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way it was found.
///
/// Restoration runs at most once: on `restore`, on drop, or from the panic
/// hook, whichever comes first.
pub struct TerminalGuard {
    armed: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let guard = Self {
            armed: Arc::new(Mutex::new(true)),
        };

        let armed = Arc::clone(&guard.armed);
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            disarm(&armed);
            previous_hook(info);
        }));

        guard
    }

    pub fn restore(&self) {
        disarm(&self.armed);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn disarm(armed: &Mutex<bool>) {
    let mut armed = armed.lock();
    if std::mem::replace(&mut *armed, false) {
        leave_terminal();
    }
}

/// Errors are ignored: there is nothing left to report them to.
fn leave_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(AppTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
