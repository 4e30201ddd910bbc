pub mod entry;
pub mod footer;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view;
pub mod word_list;

pub use view::ScreenView;
