use tracing::trace;

use crate::catalog::Catalog;

/// Matches free text against a catalog, in strict precedence order:
///
/// 1. Exact match against a canonical option (case-insensitive).
/// 2. Alias containment, in table order: the normalized input contains
///    the alias token, or the token contains the input.
/// 3. The same containment test against the canonical options
///    themselves.
///
/// First hit wins. Containment is deliberately loose and
/// order-sensitive: "vagabond ranger" resolves through the generic
/// "vagabond" alias to the Thief, not through "ranger", because the
/// generic token comes first in the table.
///
/// Empty input never matches. Every token trivially contains the empty
/// string, so vacuous hits are cut off up front.
pub fn fuzzy_match<'a>(text: &str, catalog: &'a Catalog) -> Option<&'a str> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    // Exact match
    for option in catalog.options() {
        if option.to_lowercase() == normalized {
            trace!(input = %normalized, option = %option, "exact match");
            return Some(option);
        }
    }

    // Alias match (tokens are lowercase by catalog invariant)
    for alias in catalog.aliases() {
        if normalized.contains(alias.token.as_str()) || alias.token.contains(normalized.as_str()) {
            trace!(input = %normalized, token = %alias.token, target = %alias.target, "alias match");
            return Some(&alias.target);
        }
    }

    // Partial match against the canonical options
    for option in catalog.options() {
        let lowered = option.to_lowercase();
        if normalized.contains(lowered.as_str()) || lowered.contains(normalized.as_str()) {
            trace!(input = %normalized, option = %option, "partial match");
            return Some(option);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceData;

    #[test]
    fn test_exact_match_canonical_name() {
        let data = ReferenceData::builtin();
        assert_eq!(fuzzy_match("Eyrie", &data.factions), Some("Eyrie"));
        assert_eq!(
            fuzzy_match("Marquise de Cat", &data.factions),
            Some("Marquise de Cat")
        );
        assert_eq!(fuzzy_match("Fall", &data.maps), Some("Fall"));
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let data = ReferenceData::builtin();
        assert_eq!(fuzzy_match("EYRIE", &data.factions), Some("Eyrie"));
        assert_eq!(fuzzy_match("woodland alliance", &data.factions), Some("Woodland Alliance"));
        assert_eq!(fuzzy_match("wInTeR", &data.maps), Some("Winter"));
    }

    #[test]
    fn test_alias_match() {
        let data = ReferenceData::builtin();
        assert_eq!(fuzzy_match("birds", &data.factions), Some("Eyrie"));
        assert_eq!(fuzzy_match("BIRDS", &data.factions), Some("Eyrie"));
        assert_eq!(fuzzy_match("cats", &data.factions), Some("Marquise de Cat"));
        assert_eq!(fuzzy_match("otters", &data.factions), Some("Riverfolk Company"));
        assert_eq!(fuzzy_match("crows", &data.factions), Some("Corvid Conspiracy"));
        assert_eq!(fuzzy_match("rats", &data.factions), Some("Lord of the Hundreds"));
    }

    #[test]
    fn test_french_aliases() {
        let data = ReferenceData::builtin();
        assert_eq!(fuzzy_match("canopée", &data.factions), Some("Eyrie"));
        assert_eq!(fuzzy_match("CANOPÉE", &data.factions), Some("Eyrie"));
        assert_eq!(fuzzy_match("marquis", &data.factions), Some("Marquise de Cat"));
        assert_eq!(fuzzy_match("automne", &data.maps), Some("Fall"));
        assert_eq!(fuzzy_match("été", &data.maps), Some("Summer"));
    }

    #[test]
    fn test_input_containing_alias() {
        let data = ReferenceData::builtin();
        assert_eq!(fuzzy_match("eyrie dynasty", &data.factions), Some("Eyrie"));
        assert_eq!(
            fuzzy_match("the woodland alliance", &data.factions),
            Some("Woodland Alliance")
        );
    }

    #[test]
    fn test_alias_containing_input() {
        // Truncated OCR output still resolves
        let data = ReferenceData::builtin();
        assert_eq!(fuzzy_match("vagab", &data.factions), Some("Vagabond - Thief"));
        assert_eq!(fuzzy_match("printem", &data.maps), Some("Spring"));
    }

    #[test]
    fn test_first_alias_in_table_order_wins() {
        // The generic "vagabond" token precedes the character tokens,
        // so a line naming both resolves to the Thief.
        let data = ReferenceData::builtin();
        assert_eq!(
            fuzzy_match("vagabond ranger", &data.factions),
            Some("Vagabond - Thief")
        );
    }

    #[test]
    fn test_partial_match_against_canonical_options() {
        // "hundreds" is no alias token, but it is a substring of the
        // canonical "Lord of the Hundreds".
        let data = ReferenceData::builtin();
        assert_eq!(
            fuzzy_match("hundreds", &data.factions),
            Some("Lord of the Hundreds")
        );
        assert_eq!(
            fuzzy_match("deepwood", &data.factions),
            Some("Knaves of Deepwood")
        );
    }

    #[test]
    fn test_empty_input_never_matches() {
        let data = ReferenceData::builtin();
        assert_eq!(fuzzy_match("", &data.factions), None);
        assert_eq!(fuzzy_match("   ", &data.factions), None);
        assert_eq!(fuzzy_match("\t", &data.maps), None);
    }

    #[test]
    fn test_unrelated_text_never_matches() {
        let data = ReferenceData::builtin();
        assert_eq!(fuzzy_match("some random text", &data.factions), None);
        assert_eq!(fuzzy_match("zzz", &data.factions), None);
        assert_eq!(fuzzy_match("some random text", &data.maps), None);
    }
}
