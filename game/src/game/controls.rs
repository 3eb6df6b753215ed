use raylib::consts::KeyboardKey;
use raylib::RaylibHandle;

/// Arrow-key directions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Direction),
    Released(Direction),
}

const ARROWS: [(KeyboardKey, Direction); 4] = [
    (KeyboardKey::KEY_LEFT, Direction::Left),
    (KeyboardKey::KEY_RIGHT, Direction::Right),
    (KeyboardKey::KEY_UP, Direction::Up),
    (KeyboardKey::KEY_DOWN, Direction::Down),
];

/// Arrow key transitions since the last frame
pub fn poll_events(rl: &RaylibHandle) -> Vec<KeyEvent> {
    let mut events = Vec::new();
    for (key, dir) in ARROWS {
        if rl.is_key_pressed(key) {
            events.push(KeyEvent::Pressed(dir));
        }
        if rl.is_key_released(key) {
            events.push(KeyEvent::Released(dir));
        }
    }
    events
}

/// Per-frame turn (degrees) and move (map units) deltas held by the keyboard.
///
/// Left/Right set the turn, Up/Down set the move. Releasing a key only zeroes
/// its delta while that key's sign is still in effect, so releasing Left while
/// Right is held keeps turning right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveInput {
    pub turn: f64,
    pub advance: f64,
}

impl MoveInput {
    pub fn apply(&mut self, event: KeyEvent, turn_step: f64, move_step: f64) {
        match event {
            KeyEvent::Pressed(Direction::Left) => self.turn = -turn_step,
            KeyEvent::Pressed(Direction::Right) => self.turn = turn_step,
            KeyEvent::Pressed(Direction::Up) => self.advance = move_step,
            KeyEvent::Pressed(Direction::Down) => self.advance = -move_step,
            KeyEvent::Released(Direction::Left) => {
                if self.turn < 0.0 {
                    self.turn = 0.0;
                }
            }
            KeyEvent::Released(Direction::Right) => {
                if self.turn > 0.0 {
                    self.turn = 0.0;
                }
            }
            KeyEvent::Released(Direction::Up) => {
                if self.advance > 0.0 {
                    self.advance = 0.0;
                }
            }
            KeyEvent::Released(Direction::Down) => {
                if self.advance < 0.0 {
                    self.advance = 0.0;
                }
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        self.turn == 0.0 && self.advance == 0.0
    }
}
