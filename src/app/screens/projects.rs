//! Projects screen implementation
//!
//! Project list on the left with a detail pane on the right.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::section_header;
use crate::app::palette::Palette;
use crate::content::Project;
use crate::util::ellipsize;

/// Projects section component
#[derive(Debug)]
pub struct ProjectsScreen {
    projects: Vec<Project>,
    selected: usize,
    list_state: ListState,
}

impl ProjectsScreen {
    /// Create the projects screen
    pub fn new(projects: Vec<Project>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            projects,
            selected: 0,
            list_state,
        }
    }

    /// The currently selected project
    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    /// Move selection up, wrapping to the end
    pub fn select_previous(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.projects.len() - 1;
        }
        self.list_state.select(Some(self.selected));
    }

    /// Move selection down, wrapping to the start
    pub fn select_next(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        if self.selected < self.projects.len() - 1 {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
        self.list_state.select(Some(self.selected));
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            _ => {}
        }
    }

    /// Render the projects section
    pub fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = section_header(f, area, palette, "My Work", "Featured Projects");

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body);

        self.render_list(f, columns[0], palette);
        self.render_detail(f, columns[1], palette);
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = self
            .projects
            .iter()
            .map(|project| {
                let marker = if project.featured { "* " } else { "  " };
                ListItem::new(ellipsize(&format!("{}{}", marker, project.title), width))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted))
                    .title("Projects"),
            )
            .style(Style::default().fg(palette.fg))
            .highlight_style(
                Style::default()
                    .bg(palette.accent)
                    .fg(palette.on_accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_detail(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let Some(project) = self.selected_project() else {
            return;
        };

        let mut lines: Vec<Line> = vec![Line::from(project.description.clone()), Line::from("")];

        lines.push(Line::from(vec![
            Span::styled("Stack: ", Style::default().fg(palette.muted)),
            Span::styled(
                project.tech.join(", "),
                Style::default().fg(palette.accent),
            ),
        ]));

        if let Some(repo) = &project.repo {
            lines.push(Line::from(vec![
                Span::styled("Repo:  ", Style::default().fg(palette.muted)),
                Span::styled(repo.clone(), Style::default().fg(palette.fg)),
            ]));
        }

        if project.featured {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "* Featured project",
                Style::default().fg(palette.accent),
            ));
        }

        let detail = Paragraph::new(lines)
            .style(Style::default().fg(palette.fg))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted))
                    .title(project.title.clone()),
            );
        f.render_widget(detail, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn test_screen() -> ProjectsScreen {
        ProjectsScreen::new(Content::default().projects)
    }

    #[test]
    fn test_selection_starts_at_first_project() {
        let screen = test_screen();
        assert_eq!(
            screen.selected_project().map(|p| p.title.as_str()),
            Some("AyurVerse")
        );
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut screen = test_screen();
        let count = screen.projects.len();

        screen.select_previous();
        assert_eq!(screen.selected, count - 1);
        screen.select_next();
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn test_empty_projects_are_harmless() {
        let mut screen = ProjectsScreen::new(Vec::new());
        screen.select_next();
        assert!(screen.selected_project().is_none());
    }
}
