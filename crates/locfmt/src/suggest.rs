//! Typo suggestions for unknown identifiers.

use strsim::levenshtein;

/// Compute up to three close matches for `name` among `available`.
///
/// Comparison ignores ASCII case. Names of three characters or fewer accept a
/// distance of 1, longer names a distance of 2. Exact matches are excluded and
/// results are sorted by distance.
pub(crate) fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let name = name.to_ascii_lowercase();
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(&name, &candidate.to_ascii_lowercase());
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_allow_one_edit() {
        assert_eq!(compute_suggestions("bx", &["bs", "bg_BG", "kw"]), vec!["bs"]);
        assert!(compute_suggestions("xyz", &["bs"]).is_empty());
    }

    #[test]
    fn longer_names_allow_two_edits_sorted_by_distance() {
        let available = ["en_NU", "es_US", "ca_IT"];
        assert_eq!(compute_suggestions("en_US", &available), vec!["es_US", "en_NU"]);
    }

    #[test]
    fn exact_match_is_not_a_suggestion() {
        assert!(compute_suggestions("EN_nu", &["en_NU"]).is_empty());
    }
}
