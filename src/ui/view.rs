use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::navigation::{NavRequest, Screen};

/// A screen that can draw itself and react to keys.
///
/// Keys are either handled locally or turned into a navigation request for
/// the controller.
pub trait ScreenView: Screen {
    fn render(&self, frame: &mut Frame<'_>, area: Rect);

    fn handle_key(&mut self, key: KeyEvent) -> Option<NavRequest>;
}
