//! About screen implementation
//!
//! Bio paragraphs on the left, highlight cards on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::palette::Palette;
use crate::content::Profile;

use super::section_header;

/// About section component
#[derive(Debug)]
pub struct AboutScreen {
    profile: Profile,
}

impl AboutScreen {
    /// Create the about screen for a profile
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Render the about section
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = section_header(f, area, palette, "Get To Know Me", "About Me");

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(body);

        self.render_bio(f, columns[0], palette);
        self.render_highlights(f, columns[1], palette);
    }

    fn render_bio(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let mut lines: Vec<Line> = Vec::new();
        for paragraph in &self.profile.bio {
            lines.push(Line::from(paragraph.clone()));
            lines.push(Line::from(""));
        }
        for stat in &self.profile.stats {
            lines.push(Line::from(format!("{}  {}", stat.value, stat.label)));
        }

        let bio = Paragraph::new(lines)
            .style(Style::default().fg(palette.fg))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted))
                    .title("Bio"),
            );
        f.render_widget(bio, area);
    }

    fn render_highlights(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title("Highlights");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        for highlight in &self.profile.highlights {
            lines.push(Line::styled(
                highlight.title.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(
                highlight.blurb.clone(),
                Style::default().fg(palette.muted),
            ));
            lines.push(Line::from(""));
        }

        let highlights = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        f.render_widget(highlights, inner);
    }
}
