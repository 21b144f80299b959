//! Built-in map tables.

use super::{Alias, Catalog};

/// Canonical map names in release order.
const OPTIONS: &[&str] = &[
    // base game
    "Fall",
    "Winter",
    // Underworld expansion
    "Lake",
    "Mountain",
    // community maps
    "Spring",
    "Summer",
];

/// Alias tokens in match-priority order, lowercase canonical names
/// included so an exact-but-lowercased OCR line still resolves.
const ALIASES: &[(&str, &str)] = &[
    // English variations
    ("fall", "Fall"),
    ("autumn", "Fall"),
    ("winter", "Winter"),
    ("lake", "Lake"),
    ("mountain", "Mountain"),
    ("spring", "Spring"),
    ("summer", "Summer"),
    // French translations
    ("automne", "Fall"),
    ("hiver", "Winter"),
    ("lac", "Lake"),
    ("montagne", "Mountain"),
    ("printemps", "Spring"),
    ("été", "Summer"),
];

/// One-line UI blurb per canonical map name.
const DESCRIPTIONS: &[(&str, &str)] = &[
    ("Fall", "Base game map - balanced terrain"),
    ("Winter", "Base game map - frozen river variation"),
    ("Lake", "Underworld expansion - lake centerpiece"),
    ("Mountain", "Underworld expansion - mountain terrain"),
    ("Spring", "Community map - spring theme"),
    ("Summer", "Community map - summer theme"),
];

/// Builds the built-in map catalog.
pub fn catalog() -> Catalog {
    Catalog {
        options: OPTIONS.iter().map(|o| o.to_string()).collect(),
        aliases: ALIASES
            .iter()
            .map(|(token, target)| Alias {
                token: token.to_string(),
                target: target.to_string(),
            })
            .collect(),
    }
}

/// Returns the UI description for a canonical map name.
pub fn description(map: &str) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == map)
        .map(|(_, description)| *description)
}
