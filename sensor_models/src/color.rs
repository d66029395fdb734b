//! Packed color codes and the name lookup table.
//!
//! A [`Color`] is an opaque, equality-comparable code. By convention the
//! low 24 bits hold `0x00RRGGBB`, but nothing in the workspace ever
//! decomposes one — colors are only compared against configured channels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque packed color code.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Color(pub u32);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

pub const RED: Color = Color(0x00ff0000);
pub const GREEN: Color = Color(0x0000ff00);
pub const BLUE: Color = Color(0x000000ff);
pub const YELLOW: Color = Color(0x00ffff00);
pub const CYAN: Color = Color(0x0000ffff);
pub const MAGENTA: Color = Color(0x00ff00ff);
pub const BLACK: Color = Color(0x00000000);
pub const WHITE: Color = Color(0x00ffffff);
pub const GRAY: Color = Color(0x00808080);
pub const ORANGE: Color = Color(0x00ffa500);
pub const PURPLE: Color = Color(0x00a020f0);

/// Name → color table for scenario and configuration files.
const NAMED: &[(&str, Color)] = &[
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("cyan", CYAN),
    ("magenta", MAGENTA),
    ("black", BLACK),
    ("white", WHITE),
    ("gray", GRAY),
    ("grey", GRAY),
    ("orange", ORANGE),
    ("purple", PURPLE),
];

/// Look up a color by name. Case-insensitive.
pub fn lookup_color(name: &str) -> Option<Color> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_names() {
        assert_eq!(lookup_color("red"), Some(RED));
        assert_eq!(lookup_color("MAGENTA"), Some(MAGENTA));
        assert_eq!(lookup_color("grey"), Some(GRAY));
    }

    #[test]
    fn lookup_unknown_name() {
        assert_eq!(lookup_color("mauve"), None);
    }
}
