//! Hero screen implementation
//!
//! Landing view: name, title, tagline, and the quick stats row.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::centered_box;
use crate::app::palette::Palette;
use crate::content::Profile;

/// Hero section component
#[derive(Debug)]
pub struct HeroScreen {
    profile: Profile,
}

impl HeroScreen {
    /// Create the hero screen for a profile
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Render the hero section
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let card = centered_box(area, 64, 12);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // kicker
                Constraint::Length(3), // name
                Constraint::Length(2), // tagline
                Constraint::Length(2), // stats
                Constraint::Length(2), // call to action
                Constraint::Min(0),
            ])
            .split(card);

        let kicker = Paragraph::new(self.profile.title.to_uppercase())
            .style(Style::default().fg(palette.accent))
            .alignment(Alignment::Center);
        f.render_widget(kicker, chunks[0]);

        let name = Paragraph::new(self.profile.name.clone())
            .style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            );
        f.render_widget(name, chunks[1]);

        let tagline = Paragraph::new(self.profile.tagline.clone())
            .style(Style::default().fg(palette.fg))
            .alignment(Alignment::Center);
        f.render_widget(tagline, chunks[2]);

        let stats: Vec<Span> = self
            .profile
            .stats
            .iter()
            .enumerate()
            .flat_map(|(i, stat)| {
                let mut spans = Vec::new();
                if i > 0 {
                    spans.push(Span::styled("   ", Style::default()));
                }
                spans.push(Span::styled(
                    stat.value.clone(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" {}", stat.label),
                    Style::default().fg(palette.muted),
                ));
                spans
            })
            .collect();
        f.render_widget(
            Paragraph::new(Line::from(stats)).alignment(Alignment::Center),
            chunks[3],
        );

        let cta = Paragraph::new("Tab through the sections to explore")
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        f.render_widget(cta, chunks[4]);
    }
}
