use macroquad::prelude::*;

/// Keys the viewer reacts to; everything else is never turned into an event
pub const WATCHED_KEYS: [KeyCode; 8] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Escape,
    KeyCode::Minus,
    KeyCode::Equal,
    KeyCode::T,
];

/// Discrete input delivered to the viewer once per frame
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputEvent {
    KeyChanged { key: KeyCode, pressed: bool },
    MouseClicked { button: MouseButton, x: f64, y: f64 },
    CursorMoved { x: f64, y: f64 },
    /// Positive deltas scroll up (zoom in), negative ones scroll down
    Scrolled { delta: f32 },
}

/// Poll macroquad for this frame's input.
/// Cursor movement comes first so clicks and scrolls see the current position.
pub fn poll_events(last_cursor: Option<(f64, f64)>) -> Vec<InputEvent> {
    let mut events = Vec::new();

    let (mx, my) = mouse_position();
    let cursor = (f64::from(mx), f64::from(my));
    if last_cursor != Some(cursor) {
        events.push(InputEvent::CursorMoved { x: cursor.0, y: cursor.1 });
    }

    for key in WATCHED_KEYS {
        if is_key_pressed(key) {
            events.push(InputEvent::KeyChanged { key, pressed: true });
        }
        if is_key_released(key) {
            events.push(InputEvent::KeyChanged { key, pressed: false });
        }
    }

    for button in [MouseButton::Left, MouseButton::Right] {
        if is_mouse_button_pressed(button) {
            events.push(InputEvent::MouseClicked { button, x: cursor.0, y: cursor.1 });
        }
    }

    let wheel = mouse_wheel().1;
    if wheel != 0.0 {
        events.push(InputEvent::Scrolled { delta: wheel });
    }

    events
}
