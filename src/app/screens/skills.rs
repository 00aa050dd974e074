//! Skills screen implementation
//!
//! Skill groups in a selectable list on the left, the selected group's
//! skills on the right, soft skills along the bottom.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::section_header;
use crate::app::palette::Palette;
use crate::content::SkillGroup;

/// Skills section component
#[derive(Debug)]
pub struct SkillsScreen {
    groups: Vec<SkillGroup>,
    soft_skills: Vec<String>,
    selected: usize,
    list_state: ListState,
}

impl SkillsScreen {
    /// Create the skills screen
    pub fn new(groups: Vec<SkillGroup>, soft_skills: Vec<String>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            groups,
            soft_skills,
            selected: 0,
            list_state,
        }
    }

    /// The currently selected group
    pub fn selected_group(&self) -> Option<&SkillGroup> {
        self.groups.get(self.selected)
    }

    /// Move selection up, wrapping to the end
    pub fn select_previous(&mut self) {
        if self.groups.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.groups.len() - 1;
        }
        self.list_state.select(Some(self.selected));
    }

    /// Move selection down, wrapping to the start
    pub fn select_next(&mut self) {
        if self.groups.is_empty() {
            return;
        }
        if self.selected < self.groups.len() - 1 {
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

    /// Render the skills section
    pub fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let body = section_header(f, area, palette, "What I Work With", "Skills");

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(body);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[0]);

        self.render_groups(f, columns[0], palette);
        self.render_group_detail(f, columns[1], palette);
        self.render_soft_skills(f, rows[1], palette);
    }

    fn render_groups(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let items: Vec<ListItem> = self
            .groups
            .iter()
            .map(|group| ListItem::new(format!("{} {}", group.badge, group.title)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted))
                    .title("Areas"),
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

    fn render_group_detail(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let Some(group) = self.selected_group() else {
            return;
        };

        let mut lines: Vec<Line> = Vec::new();
        for skill in &group.skills {
            lines.push(Line::styled(
                skill.name.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(
                format!("  {}", skill.blurb),
                Style::default().fg(palette.muted),
            ));
        }

        let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted))
                .title(group.title.clone()),
        );
        f.render_widget(detail, area);
    }

    fn render_soft_skills(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let soft = Paragraph::new(self.soft_skills.join("  ·  "))
            .style(Style::default().fg(palette.muted))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted))
                    .title("Soft Skills"),
            );
        f.render_widget(soft, area);
    }
}
