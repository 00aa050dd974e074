//! Quotes screen implementation
//!
//! Shows one quote at a time; refreshing picks a different quote at
//! random, re-rolling until it actually changes.

use crossterm::event::{KeyCode, KeyEvent};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{centered_box, section_header};
use crate::app::palette::Palette;

/// Quotes section component
#[derive(Debug)]
pub struct QuotesScreen {
    quotes: Vec<String>,
    current: usize,
    rng: SmallRng,
}

impl QuotesScreen {
    /// Create the screen with a random starting quote
    pub fn new(quotes: Vec<String>) -> Self {
        let mut rng = SmallRng::from_entropy();
        let current = if quotes.is_empty() {
            0
        } else {
            rng.gen_range(0..quotes.len())
        };
        Self {
            quotes,
            current,
            rng,
        }
    }

    /// The quote currently on display
    pub fn current_quote(&self) -> Option<&str> {
        self.quotes.get(self.current).map(String::as_str)
    }

    /// Pick a different quote at random
    pub fn shuffle(&mut self) {
        if self.quotes.len() < 2 {
            return;
        }
        let mut next = self.current;
        while next == self.current {
            next = self.rng.gen_range(0..self.quotes.len());
        }
        self.current = next;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R')
        ) {
            self.shuffle();
        }
    }

    /// Render the quotes section
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = section_header(f, area, palette, "Words To Build By", "Quotes");
        let card = centered_box(body, 64, 8);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent));
        let inner = block.inner(card);
        f.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // quote
                Constraint::Length(1), // hint
            ])
            .split(inner);

        let quote = self
            .current_quote()
            .map(|q| format!("\"{}\"", q))
            .unwrap_or_default();
        f.render_widget(
            Paragraph::new(quote)
                .style(
                    Style::default()
                        .fg(palette.fg)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        f.render_widget(
            Paragraph::new("Enter  Inspire me")
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Center),
            chunks[1],
        );
    }
}
