use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn make_key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn press(code: KeyCode) -> Action {
    handle_key_event(make_key(code, KeyModifiers::NONE))
}

#[test]
fn test_should_quit_on_q() {
    assert!(should_quit(make_key(KeyCode::Char('q'), KeyModifiers::NONE)));
}

#[test]
fn test_should_quit_on_ctrl_c() {
    assert!(should_quit(make_key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

#[test]
fn test_should_not_quit_on_other_keys() {
    assert!(!should_quit(make_key(KeyCode::Char('c'), KeyModifiers::NONE)));
    assert!(!should_quit(make_key(KeyCode::Enter, KeyModifiers::NONE)));
    assert!(!should_quit(make_key(KeyCode::Esc, KeyModifiers::NONE)));
}

#[test]
fn test_event_handler_creation() {
    let handler = EventHandler::new(Duration::from_millis(250));
    assert_eq!(handler.tick_rate, Duration::from_millis(250));
}

#[test]
fn test_event_resize_variant() {
    match Event::Resize(80, 24) {
        Event::Resize(w, h) => assert_eq!((w, h), (80, 24)),
        other => panic!("expected Resize variant, got {other:?}"),
    }
}

#[test]
fn test_t_toggles_theme() {
    assert_eq!(press(KeyCode::Char('t')), Action::ToggleTheme);
    assert_eq!(
        handle_key_event(make_key(KeyCode::Char('T'), KeyModifiers::SHIFT)),
        Action::ToggleTheme
    );
}

#[test]
fn test_r_resets_layout() {
    assert_eq!(press(KeyCode::Char('r')), Action::ResetLayout);
}

#[test]
fn test_tab_cycles_focus() {
    assert_eq!(press(KeyCode::Tab), Action::FocusNext);
    assert_eq!(
        handle_key_event(make_key(KeyCode::BackTab, KeyModifiers::SHIFT)),
        Action::FocusPrevious
    );
}

#[test]
fn test_esc_clears_focus() {
    assert_eq!(press(KeyCode::Esc), Action::ClearFocus);
}

#[test]
fn test_arrows_move() {
    assert_eq!(
        press(KeyCode::Left),
        Action::Gesture(Gesture::Move { dx: -1, dy: 0 })
    );
    assert_eq!(
        press(KeyCode::Right),
        Action::Gesture(Gesture::Move { dx: 1, dy: 0 })
    );
    assert_eq!(
        press(KeyCode::Up),
        Action::Gesture(Gesture::Move { dx: 0, dy: -1 })
    );
    assert_eq!(
        press(KeyCode::Down),
        Action::Gesture(Gesture::Move { dx: 0, dy: 1 })
    );
}

#[test]
fn test_shift_arrows_resize() {
    let key = make_key(KeyCode::Right, KeyModifiers::SHIFT);
    assert_eq!(
        handle_key_event(key),
        Action::Gesture(Gesture::Resize { dw: 1, dh: 0 })
    );
    let key = make_key(KeyCode::Up, KeyModifiers::SHIFT);
    assert_eq!(
        handle_key_event(key),
        Action::Gesture(Gesture::Resize { dw: 0, dh: -1 })
    );
}

#[test]
fn test_release_is_ignored() {
    let mut key = make_key(KeyCode::Char('t'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    assert_eq!(handle_key_event(key), Action::None);
}

#[test]
fn test_unmapped_key_is_none() {
    assert_eq!(press(KeyCode::Char('x')), Action::None);
    assert_eq!(press(KeyCode::Enter), Action::None);
}
