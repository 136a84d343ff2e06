//! Key press to navigation command lookup

/// A key press, reduced to what the browser cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl held together with a character.
    Ctrl(char),
    Left,
    Right,
    Esc,
    Other,
}

/// Navigation command a key maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Quit,
    Unknown,
}

impl Command {
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Char('n') | Key::Char(' ') | Key::Right => Command::Next,
            Key::Char('p') | Key::Left => Command::Previous,
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

/// Bindings shown in the help block, as (description, keys).
pub const BINDINGS: [(&str, &str); 3] = [
    ("Display next image", "n, spacebar, right arrow"),
    ("Display previous image", "p, left arrow"),
    ("Quit", "q, esc"),
];
