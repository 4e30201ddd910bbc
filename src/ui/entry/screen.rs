use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::navigation::{
    ControlId, ControlTree, Direction, EventSource, Gate, NavRequest, Screen, ScreenContext,
    ScreenKind, ScreenMeta,
};
use crate::presenter::LexiconEntryPresenter;
use crate::ui::entry::intent::EntryIntent;
use crate::ui::entry::state::{EntryField, StatusLine};
use crate::ui::footer::StatusBar;
use crate::ui::input::{is_ctrl_char, typed_char};
use crate::ui::layout::screen_regions;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT};
use crate::ui::view::ScreenView;

const HINTS: &str =
    "Tab: Next field │ Ctrl+S: Save │ Ctrl+N: New │ Ctrl+D: Delete │ Esc: Discard/Back │ Ctrl+Q: Quit";

/// Detail screen for one lexicon entry.
///
/// While the draft has unsaved edits both gates are closed, so the screen
/// cannot be left until the edits are saved or discarded.
pub struct LexiconEntryScreen {
    meta: ScreenMeta,
    presenter: LexiconEntryPresenter,
    /// Editor control per field, in `EntryField::ALL` order.
    editors: Option<[ControlId; 3]>,
}

impl LexiconEntryScreen {
    pub fn new(meta: ScreenMeta, presenter: LexiconEntryPresenter) -> Self {
        Self {
            meta,
            presenter,
            editors: None,
        }
    }

    pub fn presenter(&self) -> &LexiconEntryPresenter {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut LexiconEntryPresenter {
        &mut self.presenter
    }

    pub fn editor(&self, field: EntryField) -> Option<ControlId> {
        let index = EntryField::ALL.iter().position(|f| *f == field)?;
        self.editors.map(|editors| editors[index])
    }

    /// Navigation is raised by whichever editor has focus.
    fn focused_source(&self) -> EventSource {
        match self.editor(self.presenter.state().focused) {
            Some(id) => EventSource::Control(id),
            None => EventSource::Screen(self.meta.name.clone()),
        }
    }

    fn sync_gates(&mut self) {
        let gate = if self.presenter.is_dirty() {
            Gate::StayOnCurrentScreen
        } else {
            Gate::MoveToNextScreen
        };
        self.meta.backward_gate = gate;
        self.meta.forward_gate = gate;
    }
}

impl Screen for LexiconEntryScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::LexiconEntry
    }

    fn meta(&self) -> &ScreenMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ScreenMeta {
        &mut self.meta
    }

    fn close(&mut self) {
        if self.presenter.is_dirty() {
            tracing::warn!("Closing entry screen with unsaved edits");
        }
        self.meta.visible = false;
    }

    fn context(&self) -> ScreenContext {
        ScreenContext {
            selected_entry: self.presenter.current_id(),
        }
    }

    fn receive_context(&mut self, context: &ScreenContext, _direction: Direction) {
        self.presenter.load(context.selected_entry);
        self.sync_gates();
    }

    fn mount(&mut self, root: ControlId, tree: &mut ControlTree) {
        let form = tree.attach(root, "entry-form");
        let editors = EntryField::ALL.map(|field| {
            let frame = tree.attach(form, format!("{}-frame", field.label()));
            tree.attach(frame, format!("{}-editor", field.label()))
        });
        tree.attach(root, "status-bar");
        self.editors = Some(editors);
    }
}

impl ScreenView for LexiconEntryScreen {
    fn handle_key(&mut self, key: KeyEvent) -> Option<NavRequest> {
        let request = if is_ctrl_char(key, 's') {
            self.presenter.save();
            None
        } else if is_ctrl_char(key, 'n') {
            self.presenter.new_entry();
            None
        } else if is_ctrl_char(key, 'd') {
            self.presenter.remove();
            None
        } else {
            match key.code {
                KeyCode::PageUp => Some(NavRequest::RequestPrevious {
                    source: self.focused_source(),
                }),
                KeyCode::PageDown => Some(NavRequest::RequestNext {
                    source: self.focused_source(),
                }),
                KeyCode::Esc if self.presenter.is_dirty() => {
                    self.presenter.discard();
                    None
                }
                KeyCode::Esc => Some(NavRequest::RequestPrevious {
                    source: self.focused_source(),
                }),
                KeyCode::Tab | KeyCode::Enter => {
                    self.presenter.dispatch(EntryIntent::FocusNext);
                    None
                }
                KeyCode::BackTab => {
                    self.presenter.dispatch(EntryIntent::FocusPrevious);
                    None
                }
                KeyCode::Backspace => {
                    self.presenter.dispatch(EntryIntent::Backspace);
                    None
                }
                _ => {
                    if let Some(ch) = typed_char(key) {
                        self.presenter.dispatch(EntryIntent::Input(ch));
                    }
                    None
                }
            }
        };
        self.sync_gates();
        request
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let state = self.presenter.state();
        let marker = match (state.is_new(), state.dirty) {
            (_, true) => " [modified]",
            (true, false) => " [new]",
            (false, false) => "",
        };
        let outer = Block::default()
            .title(format!("{}{}", self.meta.title, marker))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let (body, status) = screen_regions(inner);
        let areas = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
        ])
        .split(body);

        for (field, field_area) in EntryField::ALL.iter().zip(areas.iter()) {
            let focused = *field == state.focused;
            let border = if focused {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(GLOBAL_BORDER)
            };
            let editor = Paragraph::new(state.draft.field(*field))
                .style(Style::default().fg(TEXT))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(field.label())
                        .borders(Borders::ALL)
                        .border_style(border),
                );
            frame.render_widget(editor, *field_area);
        }

        let bar = match &state.status {
            Some(StatusLine::Info(message)) => StatusBar::Info(message),
            Some(StatusLine::Error(message)) => StatusBar::Error(message),
            None => StatusBar::Hints(HINTS),
        };
        frame.render_widget(bar.widget(status), status);
    }
}
