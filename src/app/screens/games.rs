//! Games screen implementation
//!
//! Hosts the three mini-games behind a tab row: number guessing,
//! tic-tac-toe, and the reaction timer. The screen owns the engines,
//! routes keys to whichever game is active, and hands reaction-timer
//! fire requests up to the app so the event loop can schedule them.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::{centered_box, section_header};
use crate::app::palette::Palette;
use crate::games::{FireRequest, GuessGame, Mark, ReactionGame, ReactionPhase, TicTacToe};
use crate::util::format_millis;

/// Maximum digits accepted into the guess input
const GUESS_INPUT_MAX: usize = 3;

/// The selectable game tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTab {
    Guess,
    TicTacToe,
    Reaction,
}

impl GameTab {
    /// All tabs in display order
    pub fn all() -> [Self; 3] {
        [GameTab::Guess, GameTab::TicTacToe, GameTab::Reaction]
    }

    /// Tab label
    pub fn title(self) -> &'static str {
        match self {
            GameTab::Guess => "Number Guessing",
            GameTab::TicTacToe => "Tic Tac Toe",
            GameTab::Reaction => "Reaction Time",
        }
    }

    fn index(self) -> usize {
        Self::all()
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or(0)
    }

    fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    fn previous(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Games section component
pub struct GamesScreen {
    active: GameTab,
    guess: GuessGame,
    guess_input: String,
    tictactoe: TicTacToe,
    reaction: ReactionGame,
}

impl GamesScreen {
    /// Create the screen with all three games in their initial state
    pub fn new() -> Self {
        Self {
            active: GameTab::Guess,
            guess: GuessGame::new(),
            guess_input: String::new(),
            tictactoe: TicTacToe::new(),
            reaction: ReactionGame::new(),
        }
    }

    /// The active game tab
    pub fn active_tab(&self) -> GameTab {
        self.active
    }

    /// Access to the guessing game (tests and diagnostics)
    pub fn guess_game(&self) -> &GuessGame {
        &self.guess
    }

    /// Access to the tic-tac-toe game
    pub fn tictactoe_game(&self) -> &TicTacToe {
        &self.tictactoe
    }

    /// Access to the reaction game
    pub fn reaction_game(&self) -> &ReactionGame {
        &self.reaction
    }

    /// Deliver a scheduled reaction-timer fire
    pub fn on_fire(&mut self, round: u64) {
        self.reaction.fire(round);
    }

    /// Route a key to the tab row or the active game. Returns a fire
    /// request when the reaction game arms a round.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FireRequest> {
        match key.code {
            KeyCode::Left => {
                self.active = self.active.previous();
                return None;
            }
            KeyCode::Right => {
                self.active = self.active.next();
                return None;
            }
            _ => {}
        }

        match self.active {
            GameTab::Guess => {
                self.handle_guess_key(key);
                None
            }
            GameTab::TicTacToe => {
                self.handle_tictactoe_key(key);
                None
            }
            GameTab::Reaction => self.handle_reaction_key(key),
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if !self.guess.is_over() && self.guess_input.len() < GUESS_INPUT_MAX {
                    self.guess_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.guess_input.pop();
            }
            KeyCode::Enter => {
                if self.guess.is_over() {
                    self.guess.reset();
                    self.guess_input.clear();
                } else if !self.guess_input.is_empty() {
                    self.guess.guess(&self.guess_input.clone());
                    self.guess_input.clear();
                }
            }
            // Reset is only offered once the round is over
            KeyCode::Char('r') | KeyCode::Char('R') if self.guess.is_over() => {
                self.guess.reset();
                self.guess_input.clear();
            }
            _ => {}
        }
    }

    fn handle_tictactoe_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let cell = c as usize - '1' as usize;
                self.tictactoe.play(cell);
            }
            KeyCode::Char('r') | KeyCode::Char('R') if self.tictactoe.is_over() => {
                self.tictactoe.reset();
            }
            _ => {}
        }
    }

    fn handle_reaction_key(&mut self, key: KeyEvent) -> Option<FireRequest> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.reaction.tap(),
            _ => None,
        }
    }

    /// Render the games section
    pub fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = section_header(f, area, palette, "Have Some Fun", "Mini Games");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // game tabs
                Constraint::Min(8),    // game body
                Constraint::Length(1), // help
            ])
            .split(body);

        self.render_tabs(f, chunks[0], palette);
        match self.active {
            GameTab::Guess => self.render_guess(f, chunks[1], palette),
            GameTab::TicTacToe => self.render_tictactoe(f, chunks[1], palette),
            GameTab::Reaction => self.render_reaction(f, chunks[1], palette),
        }
        self.render_help(f, chunks[2], palette);
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let titles: Vec<Line> = GameTab::all()
            .iter()
            .map(|tab| Line::from(tab.title()))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active.index())
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

    fn render_guess(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let card = centered_box(area, 46, 8);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(GameTab::Guess.title());
        let inner = block.inner(card);
        f.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // message
                Constraint::Length(1), // input
                Constraint::Length(1), // attempts
                Constraint::Min(0),
            ])
            .split(inner);

        let message = Paragraph::new(self.guess.message().to_string())
            .style(Style::default().fg(palette.fg))
            .alignment(Alignment::Center);
        f.render_widget(message, chunks[0]);

        let input = if self.guess.is_over() {
            Line::from(Span::styled(
                "Enter: play again",
                Style::default().fg(palette.accent),
            ))
        } else {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(palette.accent)),
                Span::styled(
                    format!("{}_", self.guess_input),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                ),
            ])
        };
        f.render_widget(Paragraph::new(input).alignment(Alignment::Center), chunks[1]);

        let attempts = Paragraph::new(format!("Attempts: {}", self.guess.attempts()))
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        f.render_widget(attempts, chunks[2]);
    }

    fn render_tictactoe(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let card = centered_box(area, 46, 10);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(GameTab::TicTacToe.title());
        let inner = block.inner(card);
        f.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // status
                Constraint::Min(5),    // grid
            ])
            .split(inner);

        let status = if let Some(winner) = self.tictactoe.winner() {
            Span::styled(
                format!("{} wins!", winner),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else if self.tictactoe.is_draw() {
            Span::styled("It's a draw!", Style::default().fg(palette.muted))
        } else {
            Span::styled(
                format!("Next: {}", self.tictactoe.next_mark()),
                Style::default().fg(palette.muted),
            )
        };
        f.render_widget(
            Paragraph::new(Line::from(status)).alignment(Alignment::Center),
            chunks[0],
        );

        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            let mut spans = Vec::new();
            for col in 0..3 {
                let cell = row * 3 + col;
                let span = match self.tictactoe.cell(cell) {
                    Some(Mark::X) => Span::styled(
                        " X ",
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Some(Mark::O) => Span::styled(
                        " O ",
                        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                    ),
                    // Empty cells show the key that claims them
                    None => Span::styled(
                        format!(" {} ", cell + 1),
                        Style::default().fg(palette.muted),
                    ),
                };
                spans.push(span);
                if col < 2 {
                    spans.push(Span::styled("|", Style::default().fg(palette.muted)));
                }
            }
            lines.push(Line::from(spans));
            if row < 2 {
                lines.push(Line::from(Span::styled(
                    "---+---+---",
                    Style::default().fg(palette.muted),
                )));
            }
        }
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[1],
        );
    }

    fn render_reaction(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let card = centered_box(area, 46, 9);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(GameTab::Reaction.title());
        let inner = block.inner(card);
        f.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // phase banner
                Constraint::Length(1), // best time
            ])
            .split(inner);

        let banner: Vec<Line> = match self.reaction.phase() {
            ReactionPhase::Idle => vec![Line::from(Span::styled(
                "Press Space to start",
                Style::default().fg(palette.muted),
            ))],
            ReactionPhase::Armed => vec![Line::from(Span::styled(
                "Wait for green...",
                Style::default().fg(ratatui::style::Color::Red),
            ))],
            ReactionPhase::Live => vec![Line::from(Span::styled(
                "PRESS NOW!",
                Style::default()
                    .fg(ratatui::style::Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))],
            ReactionPhase::FalseStart => vec![Line::from(Span::styled(
                "Too early! Press Space to retry",
                Style::default().fg(ratatui::style::Color::Red),
            ))],
            ReactionPhase::Scored => {
                let last = self
                    .reaction
                    .last_reaction()
                    .map(format_millis)
                    .unwrap_or_default();
                vec![
                    Line::from(Span::styled(
                        last,
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Press Space to try again",
                        Style::default().fg(palette.muted),
                    )),
                ]
            }
        };
        f.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            chunks[0],
        );

        if let Some(best) = self.reaction.best_reaction() {
            let best_line = Paragraph::new(format!("Best: {}", format_millis(best)))
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Center);
            f.render_widget(best_line, chunks[1]);
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let hint = match self.active {
            GameTab::Guess => "←→ Switch game  0-9 Type  Enter Guess  r Restart",
            GameTab::TicTacToe => "←→ Switch game  1-9 Place mark  r Restart",
            GameTab::Reaction => "←→ Switch game  Space Tap",
        };
        let help = Paragraph::new(hint)
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        f.render_widget(help, area);
    }
}

impl Default for GamesScreen {
    fn default() -> Self {
        Self::new()
    }
}
