//! Group color lookup.
//!
//! Maps group keys to their canonical RGB color. The registry is generated at
//! build time from `groups.json` into a static perfect-hash map, so every
//! lookup is a read of immutable data and every color is valid by
//! construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ColorError;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Returned by [`get_color`] for any group that is not registered.
pub const DEFAULT_COLOR: Rgb = Rgb::new(255, 255, 255);

include!(concat!(env!("OUT_DIR"), "/group_colors.rs"));

impl Rgb {
    /// Builds a color from its red, green and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        self.0
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        self.1
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.2
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parses `#rrggbb` or `rrggbb`, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

/// Identifier selecting a registered color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey(pub u32);

impl GroupKey {
    /// The key's color, or [`DEFAULT_COLOR`] when the key is not registered.
    pub fn color(self) -> Rgb {
        GROUP_COLORS.get(&self.0).copied().unwrap_or(DEFAULT_COLOR)
    }

    pub fn is_registered(self) -> bool {
        GROUP_COLORS.contains_key(&self.0)
    }
}

impl FromStr for GroupKey {
    type Err = ColorError;

    /// Accepts the canonical decimal form only: no sign, no surrounding
    /// whitespace and no leading zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(ColorError::InvalidGroup(s.to_string()));
        }
        s.parse::<u32>()
            .map(GroupKey)
            .map_err(|_| ColorError::InvalidGroup(s.to_string()))
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Looks up a group's color, returning `None` for unregistered groups.
pub fn lookup(group: i64) -> Option<Rgb> {
    let key = u32::try_from(group).ok()?;
    GROUP_COLORS.get(&key).copied()
}

/// Returns the color for `group`, or [`DEFAULT_COLOR`] if the group is unknown.
pub fn get_color(group: i64) -> Rgb {
    lookup(group).unwrap_or_else(|| {
        tracing::trace!(group, "Unknown group, using default color");
        DEFAULT_COLOR
    })
}

/// Like [`get_color`], for textual input. Anything that is not exactly a
/// canonical decimal group key yields [`DEFAULT_COLOR`].
pub fn get_color_str(input: &str) -> Rgb {
    match input.parse::<GroupKey>() {
        Ok(key) => key.color(),
        Err(e) => {
            tracing::trace!(error = %e, "Unparseable group, using default color");
            DEFAULT_COLOR
        }
    }
}

/// Number of registered groups.
pub fn count_groups() -> usize {
    GROUP_COLORS.len()
}

/// Every registered group and its color, ordered by key.
pub fn groups() -> Vec<(GroupKey, Rgb)> {
    let mut entries: Vec<_> = GROUP_COLORS
        .entries()
        .map(|(key, color)| (GroupKey(*key), *color))
        .collect();
    entries.sort_unstable_by_key(|(key, _)| *key);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_nonempty() {
        assert!(!GROUP_COLORS.is_empty());
        assert!(!GROUP_COLORS.contains_key(&0));
    }

    #[test]
    fn test_group_key_rejects_signs() {
        assert!("+2".parse::<GroupKey>().is_err());
        assert!("-2".parse::<GroupKey>().is_err());
        assert_eq!("2".parse::<GroupKey>(), Ok(GroupKey(2)));
    }

    #[test]
    fn test_group_key_requires_canonical_form() {
        for input in [" 2", "2 ", " 3\n", "02", "0004", "00"] {
            assert_eq!(
                input.parse::<GroupKey>(),
                Err(ColorError::InvalidGroup(input.to_string())),
                "Failed for {:?}",
                input
            );
        }
        assert_eq!("0".parse::<GroupKey>(), Ok(GroupKey(0)));
        assert_eq!("10".parse::<GroupKey>(), Ok(GroupKey(10)));
    }

    #[test]
    fn test_lookup_out_of_u32_range() {
        assert_eq!(lookup(i64::from(u32::MAX) + 2), None);
        assert_eq!(lookup(-1), None);
    }
}
