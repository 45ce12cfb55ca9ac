//! Color roles used by the picker and the git-style color specs that configure them.
//!
//! Callers hand the picker a [`Palette`]: an enabled flag plus one [`RoleStyle`] per
//! [`ColorRole`]. With color disabled every role paints as plain text. With color
//! enabled the escape sequences come from `colored`, which still honors its global
//! switch, so binaries should call `colored::control::set_override` with the same
//! flag. Prefix highlighting falls back to brackets when painting yields plain text.
//!
//! # Public API
//! - [`ColorRole`]: prompt, header, help, error
//! - [`RoleStyle`]: foreground/background color and text attributes
//! - [`Palette`]: the four role styles plus the enabled flag
//! - [`parse_color_spec`]: parse values like `bold blue`, `red black ul`, `#ff8800`

use crate::core::error::{GitStagerError, Result};
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Prompt,
    Header,
    Help,
    Error,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Prompt,
        ColorRole::Header,
        ColorRole::Help,
        ColorRole::Error,
    ];

    /// Config slot name, as in `color.interactive.<slot>`
    pub fn slot(&self) -> &'static str {
        match self {
            ColorRole::Prompt => "prompt",
            ColorRole::Header => "header",
            ColorRole::Help => "help",
            ColorRole::Error => "error",
        }
    }

    pub fn from_slot(slot: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.slot().eq_ignore_ascii_case(slot))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleStyle {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub dimmed: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reversed: bool,
    pub strikethrough: bool,
}

impl RoleStyle {
    pub fn bold(foreground: Option<Color>) -> Self {
        Self {
            foreground,
            bold: true,
            ..Default::default()
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(color) = self.foreground {
            painted = painted.color(color);
        }
        if let Some(color) = self.background {
            painted = painted.on_color(color);
        }
        if self.bold {
            painted = painted.bold();
        }
        if self.dimmed {
            painted = painted.dimmed();
        }
        if self.italic {
            painted = painted.italic();
        }
        if self.underline {
            painted = painted.underline();
        }
        if self.blink {
            painted = painted.blink();
        }
        if self.reversed {
            painted = painted.reversed();
        }
        if self.strikethrough {
            painted = painted.strikethrough();
        }
        painted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
    pub prompt: RoleStyle,
    pub header: RoleStyle,
    pub help: RoleStyle,
    pub error: RoleStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            enabled: true,
            prompt: RoleStyle::bold(Some(Color::Blue)),
            header: RoleStyle::bold(None),
            help: RoleStyle::bold(Some(Color::Red)),
            error: RoleStyle::bold(Some(Color::Red)),
        }
    }
}

impl Palette {
    /// Default role styles with color turned off
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn style(&self, role: ColorRole) -> &RoleStyle {
        match role {
            ColorRole::Prompt => &self.prompt,
            ColorRole::Header => &self.header,
            ColorRole::Help => &self.help,
            ColorRole::Error => &self.error,
        }
    }

    pub fn set_style(&mut self, role: ColorRole, style: RoleStyle) {
        match role {
            ColorRole::Prompt => self.prompt = style,
            ColorRole::Header => self.header = style,
            ColorRole::Help => self.help = style,
            ColorRole::Error => self.error = style,
        }
    }

    /// `text` in the role's style, or unchanged when color is off
    pub fn paint(&self, role: ColorRole, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        self.style(role).paint(text).to_string()
    }
}

/// Parse a git-style color value for `slot`.
///
/// Up to two colors (foreground, then background) and any number of attributes,
/// separated by whitespace. Attributes may be negated with a `no` prefix.
pub fn parse_color_spec(slot: &str, value: &str) -> Result<RoleStyle> {
    let mut style = RoleStyle::default();
    let mut colors_seen = 0;

    for word in value.split_whitespace() {
        let word = word.to_ascii_lowercase();

        if let Some(enabled) = apply_attribute(&mut style, &word) {
            if !enabled {
                return Err(GitStagerError::invalid_color(slot, value));
            }
            continue;
        }

        let color =
            parse_color_word(&word).ok_or_else(|| GitStagerError::invalid_color(slot, value))?;
        match colors_seen {
            0 => style.foreground = color,
            1 => style.background = color,
            _ => return Err(GitStagerError::invalid_color(slot, value)),
        }
        colors_seen += 1;
    }

    Ok(style)
}

/// Returns `Some(true)` when `word` was an attribute, `Some(false)` for a malformed
/// negation, `None` when it is not an attribute at all.
fn apply_attribute(style: &mut RoleStyle, word: &str) -> Option<bool> {
    let (name, on) = match word.strip_prefix("no") {
        Some(rest) if !rest.is_empty() && rest != "rmal" => (rest.trim_start_matches('-'), false),
        _ => (word, true),
    };

    let flag = match name {
        "bold" => &mut style.bold,
        "dim" => &mut style.dimmed,
        "italic" => &mut style.italic,
        "ul" | "underline" => &mut style.underline,
        "blink" => &mut style.blink,
        "reverse" => &mut style.reversed,
        "strike" => &mut style.strikethrough,
        _ if on => return None,
        _ => return Some(false),
    };
    *flag = on;
    Some(true)
}

/// `Some(None)` for "normal"/"default", `Some(Some(color))` for a color, `None` if invalid
fn parse_color_word(word: &str) -> Option<Option<Color>> {
    if word == "normal" || word == "default" {
        return Some(None);
    }

    if let Some(hex) = word.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        return Some(Some(Color::TrueColor {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        }));
    }

    if let Ok(code) = word.parse::<u8>() {
        return Some(Some(ansi256(code)));
    }

    let (bright, name) = match word.strip_prefix("bright") {
        Some(rest) => (true, rest),
        None => (false, word),
    };
    let color = match (name, bright) {
        ("black", false) => Color::Black,
        ("red", false) => Color::Red,
        ("green", false) => Color::Green,
        ("yellow", false) => Color::Yellow,
        ("blue", false) => Color::Blue,
        ("magenta", false) => Color::Magenta,
        ("cyan", false) => Color::Cyan,
        ("white", false) => Color::White,
        ("black", true) => Color::BrightBlack,
        ("red", true) => Color::BrightRed,
        ("green", true) => Color::BrightGreen,
        ("yellow", true) => Color::BrightYellow,
        ("blue", true) => Color::BrightBlue,
        ("magenta", true) => Color::BrightMagenta,
        ("cyan", true) => Color::BrightCyan,
        ("white", true) => Color::BrightWhite,
        _ => return None,
    };
    Some(Some(color))
}

/// Map an xterm 256-color code onto the colors `colored` can emit
fn ansi256(code: u8) -> Color {
    const BASIC: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    match code {
        0..=15 => BASIC[code as usize],
        16..=231 => {
            let cube = code - 16;
            Color::TrueColor {
                r: LEVELS[(cube / 36) as usize],
                g: LEVELS[((cube / 6) % 6) as usize],
                b: LEVELS[(cube % 6) as usize],
            }
        }
        _ => {
            let gray = 8 + 10 * (code - 232);
            Color::TrueColor {
                r: gray,
                g: gray,
                b: gray,
            }
        }
    }
}
