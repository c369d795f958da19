//! Parsing and validation of the group color table (`groups.json`).
//!
//! Shared with `build.rs`, which turns the validated table into the static
//! registry. Keys must be positive `u32`s, defined once, and every channel
//! must fit in `0..=255`.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Group {
    group: i64,
    color: [i64; 3],
}

/// Parses the JSON table into a key-ordered map of validated colors.
pub fn parse_table(json: &str) -> Result<BTreeMap<u32, [u8; 3]>, String> {
    let groups: Vec<Group> =
        serde_json::from_str(json).map_err(|e| format!("invalid table: {e}"))?;

    let mut colors = BTreeMap::new();
    for Group { group, color } in groups {
        let key = u32::try_from(group)
            .ok()
            .filter(|key| *key != 0)
            .ok_or_else(|| format!("group key {group} must be a positive u32"))?;

        let mut channels = [0u8; 3];
        for (slot, value) in channels.iter_mut().zip(color) {
            *slot = u8::try_from(value)
                .map_err(|_| format!("group {group} has channel {value} outside 0..=255"))?;
        }

        if colors.insert(key, channels).is_some() {
            return Err(format!("group {key} is defined more than once"));
        }
    }

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_table_is_valid() {
        let table = parse_table(include_str!("../groups.json")).unwrap();
        let keys: Vec<u32> = table.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
        assert_eq!(table[&2], [255, 0, 0]);
    }

    #[test]
    fn test_rejects_channel_above_range() {
        let error = parse_table(r#"[{ "group": 2, "color": [256, 0, 0] }]"#).unwrap_err();
        assert_eq!(error, "group 2 has channel 256 outside 0..=255");
    }

    #[test]
    fn test_rejects_negative_channel() {
        let error = parse_table(r#"[{ "group": 1, "color": [-1, 0, 0] }]"#).unwrap_err();
        assert_eq!(error, "group 1 has channel -1 outside 0..=255");
    }

    #[test]
    fn test_rejects_zero_and_negative_keys() {
        for key in ["0", "-3", "4294967296"] {
            let json = format!(r#"[{{ "group": {key}, "color": [0, 0, 0] }}]"#);
            assert_eq!(
                parse_table(&json).unwrap_err(),
                format!("group key {key} must be a positive u32"),
                "Failed for key {}",
                key
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let json = r#"[
            { "group": 3, "color": [0, 255, 0] },
            { "group": 3, "color": [0, 0, 255] }
        ]"#;
        assert_eq!(
            parse_table(json).unwrap_err(),
            "group 3 is defined more than once"
        );
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert!(parse_table(r#"[{ "group": 1, "color": [0, 0] }]"#).is_err());
        assert!(parse_table(r#"[{ "group": "1", "color": [0, 0, 0] }]"#).is_err());
        assert!(parse_table("{}").is_err());
    }

    #[test]
    fn test_empty_table() {
        assert!(parse_table("[]").unwrap().is_empty());
    }
}
