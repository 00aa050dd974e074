//! Main application controller
//!
//! Wires the preference store, portfolio content, and section screens
//! into one event loop: drain pending reaction-timer fires, draw the
//! active section, then process at most one key event.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Datelike, Local};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use tokio::sync::mpsc;

use crate::{
    app::{
        palette::Palette,
        screens::{
            AboutScreen, ContactScreen, GamesScreen, HeroScreen, ProjectsScreen, QuotesScreen,
            SkillsScreen,
        },
        state::{NavAction, Navigator, Section},
        tui::Tui,
    },
    content::Content,
    games::FireRequest,
    prefs::{PreferenceStore, Preferences},
    FolioError, Result,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Section navigation
    nav: Navigator,
    /// Preference store (theme and accent color)
    store: PreferenceStore,
    /// Latest record published by the store's subscription
    prefs_view: Rc<Cell<Preferences>>,
    /// Portfolio content (footer identity; screens own their slices)
    content: Content,
    /// Section screens
    hero: HeroScreen,
    quotes: QuotesScreen,
    about: AboutScreen,
    skills: SkillsScreen,
    projects: ProjectsScreen,
    games: GamesScreen,
    contact: ContactScreen,
    /// Reaction-timer fire channel
    fire_tx: mpsc::Sender<u64>,
    fire_rx: mpsc::Receiver<u64>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let mut store = PreferenceStore::open()?;
        let content = Content::load()?;

        // Screens read preferences through the store's change
        // notifications rather than querying it on every frame
        let prefs_view = Rc::new(Cell::new(store.get()));
        let sink = Rc::clone(&prefs_view);
        store.subscribe(move |prefs| sink.set(prefs));

        let (fire_tx, fire_rx) = mpsc::channel(16);

        Ok(Self {
            tui: Tui::new().map_err(|e| FolioError::TuiError(e.to_string()))?,
            nav: Navigator::new(),
            store,
            prefs_view,
            hero: HeroScreen::new(content.profile.clone()),
            quotes: QuotesScreen::new(content.quotes.clone()),
            about: AboutScreen::new(content.profile.clone()),
            skills: SkillsScreen::new(content.skill_groups.clone(), content.soft_skills.clone()),
            projects: ProjectsScreen::new(content.projects.clone()),
            games: GamesScreen::new(),
            contact: ContactScreen::new(content.contact.clone()),
            content,
            fire_tx,
            fire_rx,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| FolioError::TuiError(e.to_string()))
    }

    /// Restore the terminal; safe to call more than once
    pub fn restore(&mut self) {
        let _ = self.tui.restore();
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.nav.should_quit() {
            while let Ok(round) = self.fire_rx.try_recv() {
                self.games.on_fire(round);
            }
            self.draw()?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Draw the chrome and the active section
    fn draw(&mut self) -> Result<()> {
        let palette = Palette::from_prefs(self.prefs_view.get());
        let section = self.nav.current();
        let year = Local::now().year();

        self.tui
            .draw(|f| {
                let size = f.size();
                f.render_widget(
                    Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
                    size,
                );

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3), // section tabs
                        Constraint::Min(10),   // section body
                        Constraint::Length(2), // footer
                    ])
                    .split(size);

                render_tabs(f, chunks[0], &palette, section);

                match section {
                    Section::Hero => self.hero.render(f, chunks[1], &palette),
                    Section::Quotes => self.quotes.render(f, chunks[1], &palette),
                    Section::About => self.about.render(f, chunks[1], &palette),
                    Section::Skills => self.skills.render(f, chunks[1], &palette),
                    Section::Projects => self.projects.render(f, chunks[1], &palette),
                    Section::Games => self.games.render(f, chunks[1], &palette),
                    Section::Contact => self.contact.render(f, chunks[1], &palette),
                }

                render_footer(f, chunks[2], &palette, &self.content.profile.name, year);
            })
            .map_err(|e| FolioError::TuiError(e.to_string()))
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self
            .tui
            .handle_events()
            .map_err(|e| FolioError::TuiError(e.to_string()))?
        {
            match Navigator::key_to_action(key) {
                NavAction::ToggleTheme => self.store.toggle_theme()?,
                NavAction::CycleAccent => {
                    let next = self.store.get().accent.cycled();
                    self.store.set_accent(next)?;
                }
                NavAction::None => self.dispatch_key(key),
                action => self.nav.handle(action),
            }
        }
        Ok(())
    }

    /// Forward a key the shell did not claim to the active screen
    fn dispatch_key(&mut self, key: KeyEvent) {
        match self.nav.current() {
            Section::Quotes => self.quotes.handle_key(key),
            Section::Skills => self.skills.handle_key(key),
            Section::Projects => self.projects.handle_key(key),
            Section::Games => {
                if let Some(request) = self.games.handle_key(key) {
                    self.schedule_fire(request);
                }
            }
            Section::Hero | Section::About | Section::Contact => {}
        }
    }

    /// Deliver the reaction game's go signal after its random delay.
    /// A stale delivery is rejected by the engine's round guard, so the
    /// task needs no explicit cancellation.
    fn schedule_fire(&self, request: FireRequest) {
        let tx = self.fire_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(request.delay).await;
            let _ = tx.send(request.round).await;
        });
    }
}

/// Render the section tab bar
fn render_tabs(f: &mut Frame, area: Rect, palette: &Palette, active: Section) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|section| Line::from(section.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.on_accent)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(tabs, area);
}

/// Render the persistent footer: copyright plus key hints
fn render_footer(f: &mut Frame, area: Rect, palette: &Palette, name: &str, year: i32) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let copyright = Paragraph::new(format!("© {} {}. All rights reserved.", year, name))
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    f.render_widget(copyright, chunks[0]);

    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(palette.accent)),
        Span::raw(" Next  "),
        Span::styled("Shift+Tab", Style::default().fg(palette.accent)),
        Span::raw(" Prev  "),
        Span::styled("t", Style::default().fg(palette.accent)),
        Span::raw(" Theme  "),
        Span::styled("c", Style::default().fg(palette.accent)),
        Span::raw(" Accent  "),
        Span::styled("q", Style::default().fg(palette.accent)),
        Span::raw(" Quit"),
    ]);
    f.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        chunks[1],
    );
}
