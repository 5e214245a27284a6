use std::str::FromStr;

/// The sixteen mIRC palette colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
    Blue,
    Green,
    Red,
    Brown,
    Purple,
    Orange,
    Yellow,
    LightGreen,
    Teal,
    LightCyan,
    LightBlue,
    Pink,
    Grey,
    LightGrey,
}

impl Color {
    const ALL: [Color; 16] = [
        Color::White,
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Brown,
        Color::Purple,
        Color::Orange,
        Color::Yellow,
        Color::LightGreen,
        Color::Teal,
        Color::LightCyan,
        Color::LightBlue,
        Color::Pink,
        Color::Grey,
        Color::LightGrey,
    ];

    /// Palette index used on the wire
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Brown => "brown",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::LightGreen => "light green",
            Color::Teal => "teal",
            Color::LightCyan => "light cyan",
            Color::LightBlue => "light blue",
            Color::Pink => "pink",
            Color::Grey => "grey",
            Color::LightGrey => "light grey",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown colour: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    /// Accepts "light green", "light_green", "lightgreen" and "gray" spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase()
            .replace("gray", "grey");

        Color::ALL
            .into_iter()
            .find(|color| color.name().replace(' ', "") == wanted)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// Rich-text capability provided by the chat host
pub trait TextStyler: Send + Sync {
    fn color(&self, text: &str, color: Color) -> String;

    fn bold(&self, text: &str) -> String;

    fn underline(&self, text: &str) -> String;

    /// Remove every formatting code from `text`
    fn strip(&self, text: &str) -> String;
}

/// Host without any formatting support
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl TextStyler for PlainStyler {
    fn color(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn underline(&self, text: &str) -> String {
        text.to_string()
    }

    fn strip(&self, text: &str) -> String {
        text.to_string()
    }
}
