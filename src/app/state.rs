//! Section navigation state
//!
//! The portfolio is a ring of sections under one shell. This module maps
//! keyboard events to navigation actions and tracks the active section.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Portfolio sections in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Landing view with name, title, and tagline
    Hero,
    /// Rotating quote card
    Quotes,
    /// Bio, highlight cards, and stats
    About,
    /// Grouped technical skills and soft skills
    Skills,
    /// Project showcase
    Projects,
    /// Mini-games
    Games,
    /// Contact channels
    Contact,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Quotes,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Games,
        Section::Contact,
    ];

    /// Tab title for the section
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Quotes => "Quotes",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Games => "Games",
            Section::Contact => "Contact",
        }
    }

    /// Position in page order
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    /// Next section, wrapping past the end
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping past the start
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::Hero
    }
}

/// Shell-level actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move to the next section (Tab)
    NextSection,
    /// Move to the previous section (Shift+Tab)
    PrevSection,
    /// Return to the hero section, or quit from there (Esc)
    Back,
    /// Flip the color theme (t)
    ToggleTheme,
    /// Cycle the accent color (c)
    CycleAccent,
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Not a shell action; the key belongs to the active screen
    None,
}

/// Active-section tracker
#[derive(Debug, Default)]
pub struct Navigator {
    current: Section,
    should_quit: bool,
}

impl Navigator {
    /// Start at the hero section
    pub fn new() -> Self {
        Self::default()
    }

    /// The active section
    pub fn current(&self) -> Section {
        self.current
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Jump straight to a section
    pub fn goto(&mut self, section: Section) {
        self.current = section;
    }

    /// Apply a shell action
    pub fn handle(&mut self, action: NavAction) {
        match action {
            NavAction::NextSection => self.current = self.current.next(),
            NavAction::PrevSection => self.current = self.current.previous(),
            NavAction::Back => {
                if self.current == Section::Hero {
                    self.should_quit = true;
                } else {
                    self.current = Section::Hero;
                }
            }
            NavAction::Quit => self.should_quit = true,
            // Theme and accent actions need the preference store; the app
            // controller handles them before delegating here
            NavAction::ToggleTheme | NavAction::CycleAccent | NavAction::None => {}
        }
    }

    /// Convert a keyboard event to a shell action
    pub fn key_to_action(key: KeyEvent) -> NavAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => NavAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => NavAction::Quit,

            KeyCode::Tab => NavAction::NextSection,
            KeyCode::BackTab => NavAction::PrevSection,

            KeyCode::Esc => NavAction::Back,

            KeyCode::Char('t') | KeyCode::Char('T') => NavAction::ToggleTheme,
            KeyCode::Char('c') | KeyCode::Char('C') => NavAction::CycleAccent,

            _ => NavAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_navigator_starts_at_hero() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Section::Hero);
        assert!(!nav.should_quit());
    }

    #[test]
    fn test_section_ring_wraps_both_ways() {
        let mut section = Section::Hero;
        for expected in Section::ALL {
            assert_eq!(section, expected);
            section = section.next();
        }
        assert_eq!(section, Section::Hero);

        section = section.previous();
        assert_eq!(section, Section::Contact);
    }

    #[test]
    fn test_next_prev_navigation() {
        let mut nav = Navigator::new();
        nav.handle(NavAction::NextSection);
        assert_eq!(nav.current(), Section::Quotes);
        nav.handle(NavAction::PrevSection);
        assert_eq!(nav.current(), Section::Hero);
        nav.handle(NavAction::PrevSection);
        assert_eq!(nav.current(), Section::Contact);
    }

    #[test]
    fn test_back_returns_to_hero_then_quits() {
        let mut nav = Navigator::new();
        nav.goto(Section::Games);

        nav.handle(NavAction::Back);
        assert_eq!(nav.current(), Section::Hero);
        assert!(!nav.should_quit());

        nav.handle(NavAction::Back);
        assert!(nav.should_quit());
    }

    #[test]
    fn test_key_to_action() {
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavAction::Quit
        );
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavAction::Quit
        );
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavAction::NextSection
        );
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavAction::PrevSection
        );
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavAction::Back
        );
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)),
            NavAction::ToggleTheme
        );
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            NavAction::CycleAccent
        );
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE)),
            NavAction::None
        );
    }

    #[test]
    fn test_quit_handling() {
        let mut nav = Navigator::new();
        nav.handle(NavAction::Quit);
        assert!(nav.should_quit());

        let mut nav2 = Navigator::new();
        nav2.quit();
        assert!(nav2.should_quit());
    }
}
