use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::state::NO_PICK;

/// Historical, relocated, and alternate abbreviations mapped to one canonical
/// code per franchise. Built once; never mutated.
static TEAM_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("JAC", "JAX"),
        ("JAX", "JAX"),
        ("WSH", "WAS"),
        ("WAS", "WAS"),
        ("LA", "LAR"),
        ("LAR", "LAR"),
        ("STL", "LAR"),
        ("SD", "LAC"),
        ("LAC", "LAC"),
        ("OAK", "LV"),
        ("LVR", "LV"),
        ("LV", "LV"),
        ("ARZ", "ARI"),
        ("ARI", "ARI"),
        ("AZ", "ARI"),
        ("TAM", "TB"),
        ("TBB", "TB"),
        ("TB", "TB"),
        ("GNB", "GB"),
        ("GB", "GB"),
        ("KAN", "KC"),
        ("KCC", "KC"),
        ("KC", "KC"),
        ("NWE", "NE"),
        ("NE", "NE"),
        ("NOS", "NO"),
        ("NO", "NO"),
        ("SFO", "SF"),
        ("SF", "SF"),
        ("CLV", "CLE"),
        ("CLE", "CLE"),
        ("HST", "HOU"),
        ("HOU", "HOU"),
        ("BLT", "BAL"),
        ("BAL", "BAL"),
        ("NYG", "NYG"),
        ("NYJ", "NYJ"),
        ("SEA", "SEA"),
        ("BUF", "BUF"),
        ("MIA", "MIA"),
        ("MIN", "MIN"),
        ("PHI", "PHI"),
        ("PIT", "PIT"),
        ("DET", "DET"),
        ("CHI", "CHI"),
        ("DAL", "DAL"),
        ("TEN", "TEN"),
        ("ATL", "ATL"),
        ("CAR", "CAR"),
    ])
});

/// Canonical code for any team token: strip non-alphabetic characters,
/// uppercase, then map known aliases. Unknown codes pass through as their own
/// canonical form. The no-pick sentinel is never normalized.
pub fn normalize_team(token: &str) -> String {
    if token.is_empty() || token == NO_PICK {
        return token.to_string();
    }
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    match TEAM_ALIASES.get(cleaned.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_canonical_codes() {
        assert_eq!(normalize_team("JAC"), "JAX");
        assert_eq!(normalize_team("STL"), "LAR");
        assert_eq!(normalize_team("LA"), "LAR");
        assert_eq!(normalize_team("OAK"), "LV");
        assert_eq!(normalize_team("WSH"), "WAS");
    }

    #[test]
    fn normalization_is_a_fixed_point() {
        for code in ["JAX", "LAR", "LV", "KC", "NE"] {
            assert_eq!(normalize_team(code), code);
            assert_eq!(normalize_team(&normalize_team(code)), code);
        }
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        assert_eq!(normalize_team("jac"), "JAX");
        assert_eq!(normalize_team("Jac."), "JAX");
        assert_eq!(normalize_team(" kan "), "KC");
    }

    #[test]
    fn unknown_codes_pass_through_uppercased() {
        assert_eq!(normalize_team("XYZ"), "XYZ");
        assert_eq!(normalize_team("xyz"), "XYZ");
    }

    #[test]
    fn sentinel_is_left_alone() {
        assert_eq!(normalize_team("-"), "-");
        assert_eq!(normalize_team(""), "");
    }
}
