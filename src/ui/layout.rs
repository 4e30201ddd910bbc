use ratatui::layout::Rect;

/// Split a screen's inner area into a body and a one-line status bar.
pub fn screen_regions(area: Rect) -> (Rect, Rect) {
    let status_height = 1.min(area.height);
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(status_height),
    };
    let status = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(status_height),
        width: area.width,
        height: status_height,
    };
    (body, status)
}
