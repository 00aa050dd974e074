//! Integration tests for section navigation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::app::{NavAction, Navigator, Section};

#[test]
fn test_tab_cycles_through_every_section() {
    let mut nav = Navigator::new();

    let mut visited = vec![nav.current()];
    for _ in 1..Section::ALL.len() {
        nav.handle(NavAction::NextSection);
        visited.push(nav.current());
    }
    assert_eq!(visited, Section::ALL.to_vec());

    nav.handle(NavAction::NextSection);
    assert_eq!(nav.current(), Section::Hero);
}

#[test]
fn test_escape_backs_out_then_quits() {
    let mut nav = Navigator::new();
    nav.goto(Section::Projects);

    let action = Navigator::key_to_action(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    nav.handle(action);
    assert_eq!(nav.current(), Section::Hero);
    assert!(!nav.should_quit());

    nav.handle(action);
    assert!(nav.should_quit());
}

#[test]
fn test_q_quits_from_anywhere() {
    for section in Section::ALL {
        let mut nav = Navigator::new();
        nav.goto(section);
        nav.handle(Navigator::key_to_action(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        assert!(nav.should_quit());
    }
}

#[test]
fn test_screen_keys_are_not_shell_actions() {
    // Keys the games and list screens rely on must pass through
    for code in [
        KeyCode::Char('5'),
        KeyCode::Char(' '),
        KeyCode::Enter,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Char('r'),
        KeyCode::Backspace,
    ] {
        assert_eq!(
            Navigator::key_to_action(KeyEvent::new(code, KeyModifiers::NONE)),
            NavAction::None,
            "{:?} should reach the active screen",
            code
        );
    }
}

#[test]
fn test_section_titles_are_unique() {
    let mut titles: Vec<&str> = Section::ALL.iter().map(|s| s.title()).collect();
    titles.sort();
    titles.dedup();
    assert_eq!(titles.len(), Section::ALL.len());
}
