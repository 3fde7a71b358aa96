//! Terminal events mapped to game inputs.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input actions shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Jump / start / retry (Space, Up, Enter, or a click or tap).
    Jump,
    /// Leave the program (Esc, q, Ctrl+C, or the window closing).
    Quit,
    /// Anything else.
    Other,
}

/// Map a key press to a game input. Key releases and repeats are `Other`.
pub fn map_key_event(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Jump,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Pointer-down counts as a jump, matching a tap on a touch screen.
pub fn map_mouse_event(mouse: MouseEvent) -> GameInput {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => GameInput::Jump,
        _ => GameInput::Other,
    }
}

pub fn map_event(event: Event) -> GameInput {
    match event {
        Event::Key(key) => map_key_event(key),
        Event::Mouse(mouse) => map_mouse_event(mouse),
        _ => GameInput::Other,
    }
}
