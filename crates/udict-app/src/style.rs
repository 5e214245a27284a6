use udict_core::{Color, TextStyler};

const BOLD: char = '\x02';
const COLOR: char = '\x03';
const MONOSPACE: char = '\x11';
const RESET: char = '\x0f';
const REVERSE: char = '\x16';
const ITALIC: char = '\x1d';
const STRIKETHROUGH: char = '\x1e';
const UNDERLINE: char = '\x1f';

/// mIRC control-code formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct MircStyler;

impl TextStyler for MircStyler {
    fn color(&self, text: &str, color: Color) -> String {
        format!("{COLOR}{:02}{text}{COLOR}", color.code())
    }

    fn bold(&self, text: &str) -> String {
        format!("{BOLD}{text}{BOLD}")
    }

    fn underline(&self, text: &str) -> String {
        format!("{UNDERLINE}{text}{UNDERLINE}")
    }

    fn strip(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                BOLD | MONOSPACE | RESET | REVERSE | ITALIC | STRIKETHROUGH | UNDERLINE => i += 1,
                COLOR => {
                    i += 1;
                    let fg = count_digits(&chars[i..]);
                    i += fg;
                    // ",bg" only belongs to the code when a foreground came first
                    if fg > 0 && chars.get(i) == Some(&',') {
                        let bg = count_digits(&chars[i + 1..]);
                        if bg > 0 {
                            i += 1 + bg;
                        }
                    }
                }
                c => {
                    out.push(c);
                    i += 1;
                }
            }
        }

        out
    }
}

/// Leading ASCII digits, at most two
fn count_digits(chars: &[char]) -> usize {
    chars
        .iter()
        .take(2)
        .take_while(|c| c.is_ascii_digit())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_wraps_with_padded_code() {
        assert_eq!(MircStyler.color("hello", Color::Red), "\x0304hello\x03");
        assert_eq!(MircStyler.color("x", Color::LightBlue), "\x0312x\x03");
    }

    #[test]
    fn strip_removes_formatting() {
        let styled = format!(
            "{} :: {} and {}",
            MircStyler.color("term", Color::Red),
            MircStyler.bold("bold"),
            MircStyler.underline("under"),
        );

        assert_eq!(MircStyler.strip(&styled), "term :: bold and under");
    }

    #[test]
    fn strip_handles_background_and_digits() {
        assert_eq!(MircStyler.strip("\x0304,12red on blue\x03"), "red on blue");
        assert_eq!(MircStyler.strip("\x03042021"), "2021");
        assert_eq!(MircStyler.strip("\x034,x"), ",x");
        assert_eq!(MircStyler.strip("\x03,5plain"), ",5plain");
        assert_eq!(MircStyler.strip("\x1dit\x1d \x16rev\x0f\x1e\x11"), "it rev");
    }

    #[test]
    fn strip_keeps_plain_text() {
        let text = "no codes here, 100% plain | Tags: a";
        assert_eq!(MircStyler.strip(text), text);
        assert_eq!(MircStyler.strip(&MircStyler.strip(text)), text);
    }
}
