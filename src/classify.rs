use serde::{Deserialize, Serialize};

/// Canonical outcome category for a single scorecard marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Hit,
    MissedLeft,
    MissedRight,
    Missed,
    /// Non-empty marking that matches no configured list. Still an attempted
    /// mark, so it counts as an opportunity but towards no subtotal.
    Unknown,
    /// "N/A", empty or absent. Never an opportunity.
    NotRecorded,
}

impl Mark {
    pub const fn is_opportunity(&self) -> bool {
        !matches!(self, Mark::NotRecorded)
    }
}

/// Marker lists for one stat, in match priority order. Greens have no
/// directional lists and leave them empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryLists<'a> {
    pub hit: &'a [String],
    pub missed_left: &'a [String],
    pub missed_right: &'a [String],
    pub missed: &'a [String],
}

/// Maps a raw per-hole marking onto its canonical category. Matching is
/// case-insensitive exact equality, priority Hit > MissedLeft > MissedRight
/// > Missed.
pub fn classify(raw: Option<&str>, lists: CategoryLists) -> Mark {
    let value = match raw {
        Some(value) => value.trim(),
        None => return Mark::NotRecorded,
    };
    if value.is_empty() || value.eq_ignore_ascii_case("N/A") {
        return Mark::NotRecorded;
    }
    let matches = |list: &[String]| {
        list.iter()
            .any(|marker| marker.trim().eq_ignore_ascii_case(value))
    };
    if matches(lists.hit) {
        Mark::Hit
    } else if matches(lists.missed_left) {
        Mark::MissedLeft
    } else if matches(lists.missed_right) {
        Mark::MissedRight
    } else if matches(lists.missed) {
        Mark::Missed
    } else {
        Mark::Unknown
    }
}

#[cfg(test)]
mod test {
    use super::{classify, CategoryLists, Mark};
    use crate::scorecard::MarkingConfig;

    fn lists(config: &MarkingConfig) -> CategoryLists {
        CategoryLists {
            hit: &config.fairway.hit,
            missed_left: &config.fairway.missed_left,
            missed_right: &config.fairway.missed_right,
            missed: &config.fairway.missed,
        }
    }

    #[test]
    fn configured_hit_markers_classify_as_hit() {
        let config = MarkingConfig::default();
        for marker in &config.fairway.hit {
            assert_eq!(classify(Some(marker.as_str()), lists(&config)), Mark::Hit);
            let upper = marker.to_uppercase();
            assert_eq!(classify(Some(upper.as_str()), lists(&config)), Mark::Hit);
        }
    }

    #[test]
    fn not_available_is_never_an_opportunity() {
        let config = MarkingConfig::default();
        for raw in [Some("N/A"), Some("n/a"), Some(""), Some("  "), None] {
            let mark = classify(raw, lists(&config));
            assert_eq!(mark, Mark::NotRecorded);
            assert!(!mark.is_opportunity());
        }
    }

    #[test]
    fn hit_wins_over_directional_lists() {
        let mut config = MarkingConfig::default();
        config.fairway.hit.push("◎".to_string());
        config.fairway.missed_left.push("◎".to_string());
        assert_eq!(classify(Some("◎"), lists(&config)), Mark::Hit);
    }

    #[test]
    fn unrecognised_symbol_is_unknown_but_still_an_opportunity() {
        let config = MarkingConfig::default();
        let mark = classify(Some("☂"), lists(&config));
        assert_eq!(mark, Mark::Unknown);
        assert!(mark.is_opportunity());
    }

    #[test]
    fn directional_markers_resolve_to_their_side() {
        let config = MarkingConfig::default();
        assert_eq!(classify(Some("←"), lists(&config)), Mark::MissedLeft);
        assert_eq!(classify(Some("Missed Right"), lists(&config)), Mark::MissedRight);
        assert_eq!(classify(Some("✗"), lists(&config)), Mark::Missed);
    }
}
