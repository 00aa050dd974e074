//! Section screens
//!
//! One component per portfolio section. Each screen owns its slice of
//! content plus any interaction state, renders into the body area the
//! app hands it, and receives the key events the shell did not claim.

pub mod about;
pub mod contact;
pub mod games;
pub mod hero;
pub mod projects;
pub mod quotes;
pub mod skills;

pub use about::AboutScreen;
pub use contact::ContactScreen;
pub use games::{GameTab, GamesScreen};
pub use hero::HeroScreen;
pub use projects::ProjectsScreen;
pub use quotes::QuotesScreen;
pub use skills::SkillsScreen;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::palette::Palette;

/// Render the kicker-plus-title header every section opens with and
/// return the remaining body area
pub(crate) fn section_header(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    kicker: &str,
    title: &str,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // kicker
            Constraint::Length(2), // title
            Constraint::Min(0),    // body
        ])
        .split(area);

    let kicker_line = Paragraph::new(Line::from(kicker.to_uppercase()))
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Center);
    f.render_widget(kicker_line, chunks[0]);

    let title_line = Paragraph::new(Line::from(title.to_string()))
        .style(
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title_line, chunks[1]);

    chunks[2]
}

/// Center a fixed-size box inside `area`, clamped to its bounds
pub(crate) fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box_centers() {
        let area = Rect::new(0, 0, 100, 40);
        let boxed = centered_box(area, 60, 10);
        assert_eq!(boxed, Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_box_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 8);
        let boxed = centered_box(area, 100, 100);
        assert_eq!(boxed, area);
    }
}
