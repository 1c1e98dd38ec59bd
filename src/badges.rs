//! Badge string classification.
//!
//! Twitch attaches a comma-separated badge list to every chat message, e.g.
//! `broadcaster/1,subscriber/6`. The permission gate only cares about which
//! badges a chatter holds, not their versions, so this module reduces the
//! raw string to a set of badge names.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a single `name/version` badge entry.
static BADGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)/(\d+)").unwrap());

/// Parses a raw badge tag into the set of badge names it contains.
///
/// The version number after the slash is discarded. Entries that do not
/// match the `name/version` shape are silently dropped; a missing tag yields
/// an empty set. This function never fails.
///
/// # Examples
///
/// ```
/// let badges = parse_badges(Some("founder/1,subscriber/6"));
/// assert!(badges.contains("founder"));
/// assert!(badges.contains("subscriber"));
/// ```
pub fn parse_badges(raw: Option<&str>) -> HashSet<String> {
    let Some(raw) = raw else {
        return HashSet::new();
    };

    raw.split(',')
        .filter_map(|entry| BADGE.captures(entry))
        .map(|captures| captures[1].to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_badges_two_entries() {
        let badges = parse_badges(Some("founder/1,subscriber/6"));

        assert_eq!(badges.len(), 2);
        assert!(badges.contains("founder"));
        assert!(badges.contains("subscriber"));
    }

    #[test]
    fn test_parse_badges_none_returns_empty_set() {
        assert!(parse_badges(None).is_empty());
    }

    #[test]
    fn test_parse_badges_empty_string_returns_empty_set() {
        assert!(parse_badges(Some("")).is_empty());
    }

    #[test]
    fn test_parse_badges_discards_version() {
        let badges = parse_badges(Some("broadcaster/1"));

        assert_eq!(badges.len(), 1);
        assert!(badges.contains("broadcaster"));
        assert!(!badges.contains("broadcaster/1"));
    }

    #[test]
    fn test_parse_badges_drops_malformed_entries() {
        let badges = parse_badges(Some("vip/1,no-version,/2,subscriber/abc"));

        assert_eq!(badges.len(), 1);
        assert!(badges.contains("vip"));
    }

    #[test]
    fn test_parse_badges_duplicate_names_collapse() {
        let badges = parse_badges(Some("subscriber/6,subscriber/12"));

        assert_eq!(badges.len(), 1);
    }
}
