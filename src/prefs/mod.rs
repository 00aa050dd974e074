//! Preference management module
//!
//! Holds the two user preferences (color theme and accent color), persists
//! them across sessions, and notifies presentational subscribers after
//! every mutation. Mutations write through to durable storage before the
//! in-memory record changes.

use std::str::FromStr;

use crate::Result;

pub mod persistence;

use persistence::PreferenceStorage;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The opposite theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted name of this theme
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Accent color for highlighted UI elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentColor {
    #[default]
    Cyan,
    Purple,
    Blue,
}

impl AccentColor {
    /// All accent colors in picker order
    pub fn all() -> [Self; 3] {
        [AccentColor::Cyan, AccentColor::Purple, AccentColor::Blue]
    }

    /// The next accent color in picker order, wrapping around
    pub fn cycled(self) -> Self {
        match self {
            AccentColor::Cyan => AccentColor::Purple,
            AccentColor::Purple => AccentColor::Blue,
            AccentColor::Blue => AccentColor::Cyan,
        }
    }

    /// Persisted name of this accent color
    pub fn as_str(self) -> &'static str {
        match self {
            AccentColor::Cyan => "cyan",
            AccentColor::Purple => "purple",
            AccentColor::Blue => "blue",
        }
    }
}

impl FromStr for AccentColor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cyan" => Ok(AccentColor::Cyan),
            "purple" => Ok(AccentColor::Purple),
            "blue" => Ok(AccentColor::Blue),
            other => Err(format!("unknown accent color: {}", other)),
        }
    }
}

/// Current preference record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub accent: AccentColor,
}

/// Callback invoked with the new record after every mutation
pub type Subscriber = Box<dyn Fn(Preferences)>;

/// Process-wide preference store with write-through persistence
pub struct PreferenceStore {
    prefs: Preferences,
    storage: PreferenceStorage,
    subscribers: Vec<Subscriber>,
}

impl PreferenceStore {
    /// Open the store backed by the standard preferences file, reading
    /// any persisted values
    pub fn open() -> Result<Self> {
        Ok(Self::with_storage(PreferenceStorage::new()?))
    }

    /// Open the store over explicit storage (injectable for tests)
    pub fn with_storage(storage: PreferenceStorage) -> Self {
        let prefs = storage.load();
        Self {
            prefs,
            storage,
            subscribers: Vec::new(),
        }
    }

    /// Current record, defaults filled in for anything never persisted
    pub fn get(&self) -> Preferences {
        self.prefs
    }

    /// Flip between light and dark; persists before returning
    pub fn toggle_theme(&mut self) -> Result<()> {
        let mut next = self.prefs;
        next.theme = next.theme.toggled();
        self.commit(next)
    }

    /// Set the accent color; persists before returning
    pub fn set_accent(&mut self, accent: AccentColor) -> Result<()> {
        let mut next = self.prefs;
        next.accent = accent;
        self.commit(next)
    }

    /// Register a synchronous state-change callback
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(Preferences) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Persist `next`, adopt it, then notify subscribers. The in-memory
    /// record never moves ahead of the durable one.
    fn commit(&mut self, next: Preferences) -> Result<()> {
        self.storage.save(&next)?;
        self.prefs = next;
        for subscriber in &self.subscribers {
            subscriber(self.prefs);
        }
        Ok(())
    }
}
