//! Contact screen implementation
//!
//! Contact channels rendered as a simple labelled table.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use super::{centered_box, section_header};
use crate::app::palette::Palette;
use crate::content::ContactChannel;

/// Contact section component
#[derive(Debug)]
pub struct ContactScreen {
    channels: Vec<ContactChannel>,
}

impl ContactScreen {
    /// Create the contact screen
    pub fn new(channels: Vec<ContactChannel>) -> Self {
        Self { channels }
    }

    /// Render the contact section
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = section_header(f, area, palette, "Let's Connect", "Get In Touch");
        let card = centered_box(body, 60, (self.channels.len() as u16 + 4).max(6));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(3)])
            .split(card);

        let pitch = Paragraph::new("Open to interesting projects and conversations.")
            .style(Style::default().fg(palette.fg))
            .alignment(Alignment::Center);
        f.render_widget(pitch, chunks[0]);

        let rows: Vec<Row> = self
            .channels
            .iter()
            .map(|channel| {
                Row::new(vec![channel.label.clone(), channel.value.clone()])
                    .style(Style::default().fg(palette.fg))
            })
            .collect();

        let table = Table::new(
            rows,
            [Constraint::Length(12), Constraint::Percentage(100)],
        )
        .column_spacing(2)
        .header(
            Row::new(vec!["Channel", "Where"]).style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
        f.render_widget(table, chunks[1]);
    }
}
