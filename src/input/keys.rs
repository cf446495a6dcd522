//! Key identities the router understands.

/// A pressed key, reduced to what the router distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Char(char),
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    ///
    /// ```rust
    /// use mediadeck::input::Key;
    ///
    /// assert_eq!(Key::from_dom_key(" "), Key::Space);
    /// assert_eq!(Key::from_dom_key("ArrowLeft"), Key::ArrowLeft);
    /// assert_eq!(Key::from_dom_key("F"), Key::Char('F'));
    /// assert_eq!(Key::from_dom_key("Shift"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            " " | "Spacebar" => Self::Space,
            "Enter" => Self::Enter,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}
