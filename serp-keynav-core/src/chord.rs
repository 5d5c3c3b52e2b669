//! Key chords
//!
//! A pattern such as `"ctrl+return, command+return"` is a list of alternative
//! chords; each chord is a set of modifiers plus exactly one base key.
//! Pattern text is case-insensitive and whitespace is ignored.

use std::fmt;
use std::str::FromStr;

use crate::error::{NavError, NavResult};

/// Base key of a chord or key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character (space is `Char(' ')`)
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,
    Insert,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key F1..F19
    F(u8),
}

impl Key {
    /// Parse a single key name (already lowercased)
    fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "return" | "enter" => Self::Enter,
            "space" => Self::Char(' '),
            "escape" | "esc" => Self::Esc,
            "tab" => Self::Tab,
            "backspace" => Self::Backspace,
            "delete" | "del" => Self::Delete,
            "insert" | "ins" => Self::Insert,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "home" => Self::Home,
            "end" => Self::End,
            "pageup" | "pgup" => Self::PageUp,
            "pagedown" | "pgdn" => Self::PageDown,
            "plus" => Self::Char('+'),
            "comma" => Self::Char(','),
            _ => {
                if let Some(n) = name.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    if (1..=19).contains(&n) {
                        return Some(Self::F(n));
                    }
                }
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    fn is_char(self) -> bool {
        matches!(self, Self::Char(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(' ') => f.write_str("space"),
            Self::Char(',') => f.write_str("comma"),
            Self::Char('+') => f.write_str("plus"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Enter => f.write_str("return"),
            Self::Esc => f.write_str("escape"),
            Self::Tab => f.write_str("tab"),
            Self::Backspace => f.write_str("backspace"),
            Self::Delete => f.write_str("delete"),
            Self::Insert => f.write_str("insert"),
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
            Self::Home => f.write_str("home"),
            Self::End => f.write_str("end"),
            Self::PageUp => f.write_str("pageup"),
            Self::PageDown => f.write_str("pagedown"),
            Self::F(n) => write!(f, "f{n}"),
        }
    }
}

/// Modifier set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Command / Super / Windows key
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    fn is_name(name: &str) -> bool {
        let mut scratch = Self::NONE;
        scratch.set_by_name(name)
    }

    /// Set the modifier named `name`; `false` if it is not a modifier name
    fn set_by_name(&mut self, name: &str) -> bool {
        match name {
            "ctrl" | "control" => self.ctrl = true,
            "alt" | "option" => self.alt = true,
            "shift" => self.shift = true,
            "meta" | "cmd" | "command" | "super" => self.meta = true,
            _ => return false,
        }
        true
    }
}

/// One key-down event delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl KeyPress {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Stop propagation and prevent the host's default action
    pub fn suppress(&mut self) {
        self.propagation_stopped = true;
        self.default_prevented = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether the host should skip its own handling of this key
    pub fn is_suppressed(&self) -> bool {
        self.propagation_stopped || self.default_prevented
    }
}

/// Free-function form used by binding handlers
pub fn suppress(event: &mut KeyPress) {
    event.suppress();
}

/// A single chord: modifiers plus one base key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl Chord {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Check whether a key press triggers this chord
    ///
    /// Character keys compare case-insensitively, and the press's shift
    /// state is ignored for them unless the chord names `shift`.
    pub fn matches(&self, press: &KeyPress) -> bool {
        let key_matches = match (self.key, press.key) {
            (Key::Char(expected), Key::Char(actual)) => expected == fold_case(actual),
            (expected, actual) => expected == actual,
        };
        if !key_matches {
            return false;
        }

        let mut modifiers = press.modifiers;
        if self.key.is_char() && !self.modifiers.shift {
            modifiers.shift = false;
        }
        modifiers == self.modifiers
    }

    fn parse(pattern: &str, text: &str) -> NavResult<Self> {
        let mut segments: Vec<&str> = text.split('+').collect();
        // "ctrl++" / "+" : two trailing empty segments mean the plus key itself
        let n = segments.len();
        if n > 1 && segments[n - 1].is_empty() {
            if !segments[n - 2].is_empty() && !Modifiers::is_name(segments[n - 2]) {
                return Err(NavError::invalid_chord(pattern, "dangling '+' after key"));
            }
            segments.pop();
            if let Some(last) = segments.last_mut() {
                if last.is_empty() {
                    *last = "plus";
                }
            }
        }

        let mut modifiers = Modifiers::NONE;
        let mut key = None;
        for segment in segments {
            if segment.is_empty() {
                return Err(NavError::invalid_chord(pattern, "empty chord segment"));
            }
            if modifiers.set_by_name(segment) {
                continue;
            }
            if key.is_some() {
                return Err(NavError::invalid_chord(
                    pattern,
                    "multiple non-modifier keys in chord",
                ));
            }
            key = Some(Key::from_name(segment).ok_or_else(|| {
                NavError::invalid_chord(pattern, format!("unknown key '{segment}'"))
            })?);
        }

        let key = key.ok_or_else(|| NavError::invalid_chord(pattern, "missing key in chord"))?;
        Ok(Self { key, modifiers })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (on, name) in [
            (m.ctrl, "ctrl"),
            (m.alt, "alt"),
            (m.shift, "shift"),
            (m.meta, "command"),
        ] {
            if on {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// Comma separated alternative chords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordPattern {
    alternatives: Vec<Chord>,
}

impl ChordPattern {
    pub fn parse(pattern: &str) -> NavResult<Self> {
        let compact: String = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if compact.is_empty() {
            return Err(NavError::invalid_chord(pattern, "empty pattern"));
        }

        let mut pieces: Vec<String> = compact.split(',').map(str::to_string).collect();
        // "ctrl+," : a trailing empty alternative means the comma key itself
        if pieces.len() > 1 && pieces.last().is_some_and(String::is_empty) {
            pieces.pop();
            if let Some(previous) = pieces.last_mut() {
                previous.push(',');
            }
        }

        let alternatives = pieces
            .iter()
            .map(|piece| {
                if piece.is_empty() {
                    Err(NavError::invalid_chord(pattern, "empty alternative"))
                } else if piece == "," || piece.ends_with("+,") {
                    // the comma key re-attached above
                    Self::parse_comma_chord(pattern, piece)
                } else {
                    Chord::parse(pattern, piece)
                }
            })
            .collect::<NavResult<Vec<_>>>()?;

        Ok(Self { alternatives })
    }

    fn parse_comma_chord(pattern: &str, piece: &str) -> NavResult<Chord> {
        let prefix = &piece[..piece.len() - 1];
        let mut chord = if prefix.is_empty() {
            Chord::new(Key::Char(','), Modifiers::NONE)
        } else {
            Chord::parse(pattern, &format!("{prefix}comma"))?
        };
        chord.key = Key::Char(',');
        Ok(chord)
    }

    pub fn alternatives(&self) -> &[Chord] {
        &self.alternatives
    }

    /// Whether any alternative matches the key press
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.alternatives.iter().any(|chord| chord.matches(press))
    }
}

impl FromStr for ChordPattern {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ChordPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{chord}")?;
        }
        Ok(())
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
