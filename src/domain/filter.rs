//! Case-insensitive multi-field search over DAO lists.
//!
//! A DAO matches when the query is a substring of its name, its address or
//! any of its proposal addresses. Results are grouped by the field that
//! matched (name, then address, then proposal) and deduplicated by address.

use super::dao::Dao;
use std::collections::HashSet;

/// Filters `daos` against `search`.
///
/// An empty query returns the input unchanged, duplicates included. Any other
/// query returns name matches in input order, followed by address matches
/// not yet emitted, followed by proposal matches not yet emitted. The first
/// occurrence of an address wins.
///
/// # Examples
///
/// ```
/// use daospaces::domain::{filter_daos, Dao};
///
/// let daos = vec![
///     Dao::new("0xA", "Alpha").with_proposals(["Upgrade v2"]),
///     Dao::new("0xB", "Beta"),
/// ];
///
/// assert_eq!(filter_daos(&daos, "0xb")[0].name(), "Beta");
/// assert_eq!(filter_daos(&daos, "upgrade")[0].name(), "Alpha");
/// assert_eq!(filter_daos(&daos, "").len(), 2);
/// ```
#[must_use]
pub fn filter_daos(daos: &[Dao], search: &str) -> Vec<Dao> {
    let _span = tracing::debug_span!(
        "filter_daos",
        total = daos.len(),
        query_len = search.len()
    )
    .entered();

    if search.is_empty() {
        return daos.to_vec();
    }

    let needle = search.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let by_name = daos.iter().filter(|dao| contains(dao.name()));
    let by_address = daos.iter().filter(|dao| contains(dao.address()));
    let by_proposal = daos
        .iter()
        .filter(|dao| dao.dao_proposals.iter().any(|p| contains(p)));

    let mut seen: HashSet<&str> = HashSet::new();
    let filtered: Vec<Dao> = by_name
        .chain(by_address)
        .chain(by_proposal)
        .filter(|dao| seen.insert(dao.address()))
        .cloned()
        .collect();

    tracing::debug!(matched = filtered.len(), "daos filtered");
    filtered
}

/// Returns the character ranges of `text` where `search` occurs.
///
/// Ranges are `(start, end)` char indices with exclusive end, non-overlapping,
/// left to right. Comparison is case-insensitive per character.
#[must_use]
pub fn match_ranges(text: &str, search: &str) -> Vec<(usize, usize)> {
    fn fold(c: char) -> char {
        c.to_lowercase().next().unwrap_or(c)
    }

    let needle: Vec<char> = search.chars().map(fold).collect();
    if needle.is_empty() {
        return vec![];
    }

    let hay: Vec<char> = text.chars().map(fold).collect();
    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= hay.len() {
        if hay[pos..pos + needle.len()] == needle[..] {
            ranges.push((pos, pos + needle.len()));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Dao> {
        vec![
            Dao::new("0xA", "Alpha").with_proposals(["Upgrade v2"]),
            Dao::new("0xB", "Beta"),
        ]
    }

    fn names(daos: &[Dao]) -> Vec<&str> {
        daos.iter().map(Dao::name).collect()
    }

    #[test]
    fn empty_search_returns_input_unchanged() {
        let mut daos = sample();
        daos.push(Dao::new("0xA", "Alpha duplicate"));
        assert_eq!(filter_daos(&daos, ""), daos);
    }

    #[test]
    fn matches_name_case_insensitively() {
        assert_eq!(names(&filter_daos(&sample(), "alpha")), vec!["Alpha"]);
        assert_eq!(names(&filter_daos(&sample(), "BET")), vec!["Beta"]);
    }

    #[test]
    fn matches_address() {
        assert_eq!(names(&filter_daos(&sample(), "0xb")), vec!["Beta"]);
    }

    #[test]
    fn matches_proposal() {
        assert_eq!(names(&filter_daos(&sample(), "upgrade")), vec!["Alpha"]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_daos(&sample(), "gamma").is_empty());
        assert!(filter_daos(&[], "anything").is_empty());
    }

    #[test]
    fn name_matches_precede_address_and_proposal_matches() {
        let daos = vec![
            Dao::new("EQ-core", "Treasury"),
            Dao::new("EQ-x", "Misc").with_proposals(["core vote"]),
            Dao::new("EQ-y", "Core Devs"),
        ];

        let found = filter_daos(&daos, "core");
        assert_eq!(names(&found), vec!["Core Devs", "Treasury", "Misc"]);
    }

    #[test]
    fn entity_matching_several_fields_appears_once() {
        let daos = vec![Dao::new("alpha-addr", "Alpha").with_proposals(["alpha plan"])];
        assert_eq!(filter_daos(&daos, "alpha").len(), 1);
    }

    #[test]
    fn duplicate_addresses_keep_first_occurrence() {
        let daos = vec![
            Dao::new("0xA", "Alpha one"),
            Dao::new("0xA", "Alpha two"),
            Dao::new("0xC", "Alpha three"),
        ];

        let found = filter_daos(&daos, "alpha");
        assert_eq!(names(&found), vec!["Alpha one", "Alpha three"]);
    }

    #[test]
    fn every_result_matches_some_field() {
        let daos = vec![
            Dao::new("0x1", "Ocean").with_proposals(["p-sea"]),
            Dao::new("0x2", "Desert"),
            Dao::new("0xsea", "Forest"),
            Dao::new("0x4", "Seal Club"),
        ];
        let query = "SEA";

        for dao in filter_daos(&daos, query) {
            let q = query.to_lowercase();
            let hit = dao.name().to_lowercase().contains(&q)
                || dao.address().to_lowercase().contains(&q)
                || dao.dao_proposals.iter().any(|p| p.to_lowercase().contains(&q));
            assert!(hit, "{} should not be in results", dao.name());
        }
    }

    #[test]
    fn match_ranges_finds_all_occurrences() {
        assert_eq!(match_ranges("Alpha alp", "ALP"), vec![(0, 3), (6, 9)]);
        assert_eq!(match_ranges("Beta", "x"), Vec::<(usize, usize)>::new());
        assert!(match_ranges("Beta", "").is_empty());
    }

    #[test]
    fn match_ranges_uses_char_indices() {
        assert_eq!(match_ranges("Общий фонд", "фонд"), vec![(6, 10)]);
    }
}
