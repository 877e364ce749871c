/// Color used for notes that are not pinned to any beat.
pub const DEFAULT_NOTE_COLOR: &str = "#fff59d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beat {
    pub key: &'static str,
    pub color: &'static str,
}

/// The fifteen "Save the Cat" beats in story order. Keys are the wire
/// identifiers clients send as `beat_item`; colors are the fixed palette
/// the board renders them with.
pub const BEAT_STRUCTURE: [Beat; 15] = [
    Beat { key: "openingImage", color: "#FFEB3B" },
    Beat { key: "themeStated", color: "#FFCC80" },
    Beat { key: "setUp", color: "#EF9A9A" },
    Beat { key: "catalyst", color: "#CE93D8" },
    Beat { key: "debate", color: "#B39DDB" },
    Beat { key: "breakIntoTwo", color: "#9FA8DA" },
    Beat { key: "bStory", color: "#90CAF9" },
    Beat { key: "funAndGames", color: "#81D4FA" },
    Beat { key: "midpoint", color: "#A5D6A7" },
    Beat { key: "badGuysCloseIn", color: "#E6EE9C" },
    Beat { key: "allIsLost", color: "#FFE082" },
    Beat { key: "darkNightOfTheSoul", color: "#FFD54F" },
    Beat { key: "breakIntoThree", color: "#C5E1A5" },
    Beat { key: "finale", color: "#BCAAA4" },
    Beat { key: "finalImage", color: "#CFD8DC" },
];

/// Resolves the display color for a `beat_item` value. Empty or unknown
/// keys fall back to the default note color.
pub fn color_for_beat(beat_item: &str) -> &'static str {
    BEAT_STRUCTURE
        .iter()
        .find(|beat| beat.key == beat_item)
        .map(|beat| beat.color)
        .unwrap_or(DEFAULT_NOTE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_beats_with_unique_keys() {
        let mut keys: Vec<_> = BEAT_STRUCTURE.iter().map(|beat| beat.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 15);
    }

    #[test]
    fn color_for_known_beat_is_stable() {
        assert_eq!(color_for_beat("catalyst"), "#CE93D8");
        assert_eq!(color_for_beat("catalyst"), color_for_beat("catalyst"));
    }

    #[test]
    fn color_for_empty_or_unknown_beat_is_default() {
        assert_eq!(color_for_beat(""), DEFAULT_NOTE_COLOR);
        assert_eq!(color_for_beat("notABeat"), DEFAULT_NOTE_COLOR);
    }

    #[test]
    fn beat_keys_are_case_sensitive() {
        assert_eq!(color_for_beat("OpeningImage"), DEFAULT_NOTE_COLOR);
        assert_eq!(color_for_beat("openingImage"), "#FFEB3B");
    }
}
