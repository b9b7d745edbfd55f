use crossterm::style::Color;

use crate::error::GameError;

/// Handle into a [`SpriteSheet`]. Consecutive entries share a base handle,
/// so `id.offset(n)` picks the n-th variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u16);

impl SpriteId {
    pub fn offset(self, n: u16) -> SpriteId {
        SpriteId(self.0 + n)
    }
}

/// One drawable: a tile glyph, or a line of text for full-screen images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub text: &'static str,
    pub color: Color,
}

impl Glyph {
    pub fn symbol(&self) -> char {
        self.text.chars().next().unwrap_or(' ')
    }
}

const BUILTIN: &[(&str, &str, Color)] = &[
    ("maze", "#", Color::Blue),
    ("door", "-", Color::Magenta),
    ("dot 0", ".", Color::White),
    ("dot 1", "o", Color::White),
    // Closed mouth, then open toward Up, Left, Down, Right.
    ("pacman 0", "O", Color::Yellow),
    ("pacman 1", "V", Color::Yellow),
    ("pacman 2", ">", Color::Yellow),
    ("pacman 3", "A", Color::Yellow),
    ("pacman 4", "<", Color::Yellow),
    ("blinky", "M", Color::Red),
    ("pinky", "M", Color::Magenta),
    ("inky", "M", Color::Cyan),
    ("clyde", "M", Color::DarkYellow),
    ("scared 0", "W", Color::Blue),
    ("scared 1", "W", Color::White),
    ("eyes", "\"", Color::White),
    ("winlose 0", "YOU WIN!", Color::Green),
    ("winlose 1", "GAME OVER", Color::Red),
];

/// Name → glyph lookup.
pub struct SpriteSheet {
    entries: Vec<(String, Glyph)>,
}

impl SpriteSheet {
    /// The terminal sheet shipped with the game.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|&(name, text, color)| (name.to_string(), Glyph { text, color }))
                .collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<SpriteId, GameError> {
        self.entries
            .iter()
            .position(|(n, _)| n == name)
            .map(|i| SpriteId(i as u16))
            .ok_or_else(|| GameError::MissingSprite(name.to_string()))
    }

    pub fn glyph(&self, id: SpriteId) -> Glyph {
        self.entries.get(id.0 as usize).map_or(
            Glyph {
                text: "?",
                color: Color::Grey,
            },
            |(_, g)| *g,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_offsets() {
        let sheet = SpriteSheet::builtin();
        let dot = sheet.lookup("dot 0").unwrap();
        assert_eq!(sheet.glyph(dot).symbol(), '.');
        assert_eq!(sheet.glyph(dot.offset(1)).symbol(), 'o');

        let winlose = sheet.lookup("winlose 0").unwrap();
        assert_eq!(sheet.glyph(winlose.offset(1)).text, "GAME OVER");
    }

    #[test]
    fn missing_sprite_is_an_error() {
        let sheet = SpriteSheet::builtin();
        assert!(matches!(
            sheet.lookup("fruit 0"),
            Err(GameError::MissingSprite(name)) if name == "fruit 0"
        ));
    }
}
