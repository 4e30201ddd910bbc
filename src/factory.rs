//! Builds concrete screens from a [`ScreenKind`].
//!
//! The factory owns the chain topology: which screen follows which and how
//! each gate starts out.

use crate::navigation::{
    ControlId, Gate, NavigationController, RegistryError, ScreenKind, ScreenMeta,
    LEXICON_ENTRY_SCREEN, WORD_LIST_SCREEN,
};
use crate::presenter::{LexiconEntryPresenter, WordListPresenter};
use crate::service::SharedService;
use crate::ui::entry::LexiconEntryScreen;
use crate::ui::view::ScreenView;
use crate::ui::word_list::WordListScreen;

pub struct ScreenFactory {
    title_prefix: String,
}

impl ScreenFactory {
    /// `title_prefix` is prepended to every screen title, e.g.
    /// `"Lexicon Manager 2019.1 - "`.
    pub fn new(title_prefix: impl Into<String>) -> Self {
        Self {
            title_prefix: title_prefix.into(),
        }
    }

    pub fn meta(&self, kind: ScreenKind) -> ScreenMeta {
        match kind {
            ScreenKind::WordList => {
                let mut meta = ScreenMeta::new(WORD_LIST_SCREEN);
                meta.next_screen_name = LEXICON_ENTRY_SCREEN.to_string();
                meta.backward_gate = Gate::StayOnCurrentScreen;
                meta.forward_gate = Gate::MoveToNextScreen;
                meta.title = format!("{}Word List Grid", self.title_prefix);
                meta
            }
            ScreenKind::LexiconEntry => {
                let mut meta = ScreenMeta::new(LEXICON_ENTRY_SCREEN);
                meta.previous_screen_name = WORD_LIST_SCREEN.to_string();
                meta.next_screen_name = WORD_LIST_SCREEN.to_string();
                meta.backward_gate = Gate::MoveToNextScreen;
                meta.forward_gate = Gate::MoveToNextScreen;
                meta.title = format!("{}Data Entry Screen", self.title_prefix);
                meta
            }
        }
    }

    pub fn create(&self, kind: ScreenKind, service: &SharedService) -> Box<dyn ScreenView> {
        let meta = self.meta(kind);
        match kind {
            ScreenKind::WordList => Box::new(WordListScreen::new(
                meta,
                WordListPresenter::new(service.clone()),
            )),
            ScreenKind::LexiconEntry => Box::new(LexiconEntryScreen::new(
                meta,
                LexiconEntryPresenter::new(service.clone()),
            )),
        }
    }

    /// Create a screen of `kind` and register it with `controller`.
    pub fn install(
        &self,
        kind: ScreenKind,
        service: &SharedService,
        controller: &mut NavigationController<dyn ScreenView>,
    ) -> Result<ControlId, RegistryError> {
        controller.register_screen(self.create(kind, service))
    }

    /// Install one screen of every kind, in chain order.
    pub fn install_all(
        &self,
        service: &SharedService,
        controller: &mut NavigationController<dyn ScreenView>,
    ) -> Result<(), RegistryError> {
        for kind in ScreenKind::ALL {
            self.install(kind, service, controller)?;
        }
        Ok(())
    }
}
