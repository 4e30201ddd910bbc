use thiserror::Error;

use crate::navigation::screen::Screen;

/// Errors raised while registering a screen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Screen name must not be empty")]
    EmptyName,

    #[error("Screen '{name}' is already registered")]
    DuplicateName { name: String },
}

/// The live set of screens, in registration order.
pub struct ScreenRegistry<S: ?Sized + Screen> {
    screens: Vec<Box<S>>,
}

impl<S: ?Sized + Screen> ScreenRegistry<S> {
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
        }
    }

    /// Check that a screen called `name` could be added.
    pub fn ensure_available(&self, name: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.position(name).is_some() {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn insert(&mut self, screen: Box<S>) -> Result<(), RegistryError> {
        self.ensure_available(screen.name())?;
        self.screens.push(screen);
        Ok(())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.screens.iter().position(|s| s.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&S> {
        self.screens.iter().find(|s| s.name() == name).map(|s| &**s)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut S> {
        self.screens
            .iter_mut()
            .find(|s| s.name() == name)
            .map(|s| &mut **s)
    }

    pub fn at(&self, index: usize) -> Option<&S> {
        self.screens.get(index).map(|s| &**s)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut S> {
        self.screens.get_mut(index).map(|s| &mut **s)
    }

    /// Mutable access to two distinct screens at once.
    ///
    /// Returns `None` if either index is out of range or they are equal.
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut S, &mut S)> {
        if first == second || first >= self.screens.len() || second >= self.screens.len() {
            return None;
        }
        if first < second {
            let (head, tail) = self.screens.split_at_mut(second);
            Some((&mut *head[first], &mut *tail[0]))
        } else {
            let (head, tail) = self.screens.split_at_mut(first);
            Some((&mut *tail[0], &mut *head[second]))
        }
    }

    pub fn visible(&self) -> Option<&S> {
        self.screens.iter().find(|s| s.is_visible()).map(|s| &**s)
    }

    pub fn visible_mut(&mut self) -> Option<&mut S> {
        self.screens
            .iter_mut()
            .find(|s| s.is_visible())
            .map(|s| &mut **s)
    }

    pub fn names(&self) -> Vec<String> {
        self.screens.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.screens.iter().map(|s| &**s)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut S> {
        self.screens.iter_mut().map(|s| &mut **s)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Close every screen, then drop them all.
    pub fn close_all(&mut self) {
        for screen in self.screens.iter_mut() {
            screen.close();
        }
        self.screens.clear();
    }
}

impl<S: ?Sized + Screen> Default for ScreenRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
