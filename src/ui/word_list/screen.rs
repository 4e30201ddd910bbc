use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::navigation::{
    ControlId, ControlTree, Direction, EventSource, NavRequest, Screen, ScreenContext, ScreenKind,
    ScreenMeta,
};
use crate::presenter::WordListPresenter;
use crate::ui::footer::StatusBar;
use crate::ui::input::typed_char;
use crate::ui::layout::screen_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, TEXT};
use crate::ui::view::ScreenView;
use crate::ui::word_list::intent::WordListIntent;

const HINTS: &str =
    "Type: Search │ Tab: Field │ F2: Match mode │ Esc: Clear │ Enter: Open │ Ctrl+Q: Quit";

#[derive(Debug, Clone, Copy)]
struct WordListControls {
    search_box: ControlId,
    grid: ControlId,
}

/// Read-only grid of lexicon entries with a search box.
pub struct WordListScreen {
    meta: ScreenMeta,
    presenter: WordListPresenter,
    controls: Option<WordListControls>,
}

impl WordListScreen {
    pub fn new(meta: ScreenMeta, presenter: WordListPresenter) -> Self {
        Self {
            meta,
            presenter,
            controls: None,
        }
    }

    pub fn presenter(&self) -> &WordListPresenter {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut WordListPresenter {
        &mut self.presenter
    }

    /// The grid raises navigation; before mounting the screen stands in.
    fn grid_source(&self) -> EventSource {
        match self.controls {
            Some(controls) => EventSource::Control(controls.grid),
            None => EventSource::Screen(self.meta.name.clone()),
        }
    }

    pub fn search_box(&self) -> Option<ControlId> {
        self.controls.map(|c| c.search_box)
    }

    pub fn grid(&self) -> Option<ControlId> {
        self.controls.map(|c| c.grid)
    }
}

impl Screen for WordListScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::WordList
    }

    fn meta(&self) -> &ScreenMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ScreenMeta {
        &mut self.meta
    }

    /// Rows are reloaded on every show so saved edits appear.
    fn show(&mut self) {
        self.meta.visible = true;
        self.presenter.refresh();
    }

    fn context(&self) -> ScreenContext {
        ScreenContext {
            selected_entry: self.presenter.selected_entry(),
        }
    }

    fn receive_context(&mut self, context: &ScreenContext, _direction: Direction) {
        if let Some(id) = context.selected_entry {
            self.presenter.dispatch(WordListIntent::Select { id });
        }
    }

    fn mount(&mut self, root: ControlId, tree: &mut ControlTree) {
        let search_panel = tree.attach(root, "search-panel");
        let search_box = tree.attach(search_panel, "search-box");
        let grid_panel = tree.attach(root, "grid-panel");
        let grid = tree.attach(grid_panel, "word-grid");
        self.controls = Some(WordListControls { search_box, grid });
    }
}

impl ScreenView for WordListScreen {
    fn handle_key(&mut self, key: KeyEvent) -> Option<NavRequest> {
        let intent = match key.code {
            KeyCode::Enter | KeyCode::PageDown => {
                return Some(NavRequest::RequestNext {
                    source: self.grid_source(),
                });
            }
            KeyCode::Up => WordListIntent::MoveUp,
            KeyCode::Down => WordListIntent::MoveDown,
            KeyCode::Tab => WordListIntent::ToggleField,
            KeyCode::F(2) => WordListIntent::ToggleStartPoint,
            KeyCode::Esc => WordListIntent::ClearQuery,
            KeyCode::Backspace => WordListIntent::QueryBackspace,
            _ => match typed_char(key) {
                Some(ch) => WordListIntent::QueryInput(ch),
                None => return None,
            },
        };
        self.presenter.dispatch(intent);
        None
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let state = self.presenter.state();
        let outer = Block::default()
            .title(self.meta.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let (body, status) = screen_regions(inner);
        let [search_area, grid_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(body);

        let search = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} · {}: ", state.field.label(), state.start_point.label()),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(state.query.as_str(), Style::default().fg(TEXT)),
        ]))
        .block(
            Block::default()
                .title("Search")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );
        frame.render_widget(search, search_area);

        let rows = state.rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.entry.as_str()),
                Cell::from(row.meaning.as_str()),
            ])
        });
        let table = Table::new(rows, [Constraint::Percentage(35), Constraint::Percentage(65)])
            .header(
                Row::new(vec!["Entry", "Meaning"])
                    .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .title(format!("Words ({})", state.rows.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .row_highlight_style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            );
        let mut table_state =
            TableState::default().with_selected((!state.rows.is_empty()).then_some(state.selected));
        frame.render_stateful_widget(table, grid_area, &mut table_state);

        let bar = match &state.error {
            Some(message) => StatusBar::Error(message),
            None => StatusBar::Hints(HINTS),
        };
        frame.render_widget(bar.widget(status), status);
    }
}
