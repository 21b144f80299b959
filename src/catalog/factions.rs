//! Built-in faction tables.
//!
//! Canonical names, OCR/translation aliases, and display colors for
//! every shipped Root faction.

use super::{Alias, Catalog};

/// Canonical faction names in release order.
const OPTIONS: &[&str] = &[
    // base game
    "Marquise de Cat",
    "Eyrie",
    "Woodland Alliance",
    // Vagabond characters (base game)
    "Vagabond - Thief",
    "Vagabond - Ranger",
    "Vagabond - Tinker",
    // Riverfolk expansion
    "Lizard Cult",
    "Riverfolk Company",
    "Vagabond - Vagrant",
    "Vagabond - Arbiter",
    // Vagabond Pack expansion
    "Vagabond - Ronin",
    "Vagabond - Adventurer",
    "Vagabond - Harrier",
    "Vagabond - Scoundrel",
    // Underworld expansion
    "Underground Duchy",
    "Corvid Conspiracy",
    // Marauder expansion
    "Lord of the Hundreds",
    "Keepers in Iron",
    // Homeland expansion
    "Knaves of Deepwood",
    "Lilypad Diaspora",
    "Twilight Council",
];

/// Alias tokens in match-priority order.
///
/// Order matters: the matcher takes the first containment hit, and the
/// generic "vagabond"/"vb" tokens sit before the character tokens so a
/// bare Vagabond line defaults to the Thief.
const ALIASES: &[(&str, &str)] = &[
    // English variations
    ("marquise", "Marquise de Cat"),
    ("cat", "Marquise de Cat"),
    ("cats", "Marquise de Cat"),
    ("eyrie", "Eyrie"),
    ("birds", "Eyrie"),
    ("dynasty", "Eyrie"),
    ("woodland", "Woodland Alliance"),
    ("alliance", "Woodland Alliance"),
    ("wa", "Woodland Alliance"),
    // generic Vagabond tokens
    ("vagabond", "Vagabond - Thief"),
    ("vb", "Vagabond - Thief"),
    // Vagabond characters
    ("thief", "Vagabond - Thief"),
    ("ranger", "Vagabond - Ranger"),
    ("tinker", "Vagabond - Tinker"),
    ("tinkerer", "Vagabond - Tinker"),
    ("vagrant", "Vagabond - Vagrant"),
    ("arbiter", "Vagabond - Arbiter"),
    ("ronin", "Vagabond - Ronin"),
    ("adventurer", "Vagabond - Adventurer"),
    ("harrier", "Vagabond - Harrier"),
    ("scoundrel", "Vagabond - Scoundrel"),
    // French translations
    ("canopée", "Eyrie"),
    ("marquis", "Marquise de Cat"),
    // expansions
    ("lizard", "Lizard Cult"),
    ("cult", "Lizard Cult"),
    ("riverfolk", "Riverfolk Company"),
    ("otters", "Riverfolk Company"),
    ("duchy", "Underground Duchy"),
    ("moles", "Underground Duchy"),
    ("corvid", "Corvid Conspiracy"),
    ("crows", "Corvid Conspiracy"),
    ("lord", "Lord of the Hundreds"),
    ("rats", "Lord of the Hundreds"),
    ("keepers", "Keepers in Iron"),
    ("badgers", "Keepers in Iron"),
    // Homeland expansion
    ("knaves", "Knaves of Deepwood"),
    ("lilypad", "Lilypad Diaspora"),
    ("twilight", "Twilight Council"),
];

/// Display colors (hex) for UI theming, keyed by canonical name.
const COLORS: &[(&str, &str)] = &[
    ("Marquise de Cat", "#f59e0b"),
    ("Eyrie", "#3b82f6"),
    ("Woodland Alliance", "#22c55e"),
    // Vagabond characters share the purple range
    ("Vagabond - Thief", "#8b5cf6"),
    ("Vagabond - Ranger", "#a855f7"),
    ("Vagabond - Tinker", "#9333ea"),
    ("Vagabond - Vagrant", "#c026d3"),
    ("Vagabond - Arbiter", "#7c3aed"),
    ("Vagabond - Ronin", "#a78bfa"),
    ("Vagabond - Adventurer", "#6d28d9"),
    ("Vagabond - Harrier", "#8b5cf6"),
    ("Vagabond - Scoundrel", "#a855f7"),
    ("Lizard Cult", "#eab308"),
    ("Riverfolk Company", "#06b6d4"),
    ("Underground Duchy", "#78716c"),
    ("Corvid Conspiracy", "#000000"),
    ("Lord of the Hundreds", "#dc2626"),
    ("Keepers in Iron", "#6b7280"),
    ("Knaves of Deepwood", "#059669"),
    ("Lilypad Diaspora", "#10b981"),
    ("Twilight Council", "#4f46e5"),
];

/// Builds the built-in faction catalog.
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

/// Returns the display color for a canonical faction name.
pub fn color(faction: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(name, _)| *name == faction)
        .map(|(_, color)| *color)
}
