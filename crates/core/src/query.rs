//! # Query Engine
//!
//! Pure filtering over a loaded catalog. Matching is a case-insensitive
//! substring test on the project name; the term is not trimmed.

use crate::models::ProjectRecord;
use serde::Serialize;

/// Outcome of one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult<'a> {
    /// Matching records in catalog order, never empty
    Matches(Vec<&'a ProjectRecord>),
    /// A term was given but nothing matched
    EmptyWithQuery,
    /// No term (or an empty one) was given
    NoQuery,
}

impl<'a> QueryResult<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matches(_))
    }

    /// The matched records, empty for the non-match variants
    pub fn into_matches(self) -> Vec<&'a ProjectRecord> {
        match self {
            Self::Matches(records) => records,
            Self::EmptyWithQuery | Self::NoQuery => Vec::new(),
        }
    }
}

/// Records sharing one category bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub projects: Vec<&'a ProjectRecord>,
}

/// `needle` must already be lowercased
fn name_contains(record: &ProjectRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
}

/// Filter `records` by `term`
pub fn query<'a>(records: &'a [ProjectRecord], term: Option<&str>) -> QueryResult<'a> {
    let term = match term {
        Some(t) if !t.is_empty() => t,
        _ => return QueryResult::NoQuery,
    };

    let needle = term.to_lowercase();
    let matches: Vec<&ProjectRecord> = records
        .iter()
        .filter(|r| name_contains(r, &needle))
        .collect();

    if matches.is_empty() {
        QueryResult::EmptyWithQuery
    } else {
        QueryResult::Matches(matches)
    }
}

/// Partition records by category bucket
///
/// Groups appear in the order their category is first seen; records keep
/// their relative order inside each group.
pub fn group_by_category<'a, I>(records: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    for record in records {
        let bucket = record.category_bucket();
        match groups.iter_mut().find(|g| g.category == bucket) {
            Some(group) => group.projects.push(record),
            None => groups.push(CategoryGroup {
                category: bucket,
                projects: vec![record],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ProjectRecord {
        ProjectRecord::new(name, format!("https://{}.xyz/kit", name.to_lowercase()))
    }

    fn names<'a>(records: &[&'a ProjectRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_substring_match_ignores_case() {
        let catalog = vec![record("Acme"), record("acme2"), record("Zebra")];

        let result = query(&catalog, Some("ac"));
        match result {
            QueryResult::Matches(found) => assert_eq!(names(&found), vec!["Acme", "acme2"]),
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn test_match_is_not_prefix_only() {
        let catalog = vec![record("Uniswap"), record("SushiSwap")];
        let found = query(&catalog, Some("SWAP")).into_matches();
        assert_eq!(names(&found), vec!["Uniswap", "SushiSwap"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<ProjectRecord> = Vec::new();
        assert_eq!(query(&catalog, Some("x")), QueryResult::EmptyWithQuery);
        assert_eq!(query(&catalog, None), QueryResult::NoQuery);
    }

    #[test]
    fn test_absent_and_empty_term_are_no_query() {
        let catalog = vec![record("Foo")];
        assert_eq!(query(&catalog, None), QueryResult::NoQuery);
        assert_eq!(query(&catalog, Some("")), QueryResult::NoQuery);
    }

    #[test]
    fn test_no_match() {
        let catalog = vec![record("Foo")];
        assert_eq!(query(&catalog, Some("zz")), QueryResult::EmptyWithQuery);
        assert!(!query(&catalog, Some("zz")).is_match());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let catalog = vec![record("Base Paint"), record("Zora")];
        let found = query(&catalog, Some(" ")).into_matches();
        assert_eq!(names(&found), vec!["Base Paint"]);

        assert_eq!(query(&catalog, Some(" zora")), QueryResult::EmptyWithQuery);
    }

    #[test]
    fn test_query_is_deterministic() {
        let catalog = vec![record("Acme"), record("Beta"), record("acme3")];
        assert_eq!(query(&catalog, Some("ACME")), query(&catalog, Some("ACME")));
    }

    #[test]
    fn test_matches_are_sound_complete_and_ordered() {
        let catalog = vec![
            record("Moonwell"),
            record("Aerodrome"),
            record("Seamless"),
            record("Moonbeam"),
            record("Extra Finance"),
        ];

        let contains = |r: &ProjectRecord, term: &str| {
            r.name.to_lowercase().contains(&term.to_lowercase())
        };

        for term in ["moon", "e", "a", "xyz", "SEAM"] {
            let found = query(&catalog, Some(term)).into_matches();

            // Soundness
            assert!(found.iter().all(|r| contains(r, term)));
            // Completeness
            let expected: Vec<&ProjectRecord> =
                catalog.iter().filter(|r| contains(r, term)).collect();
            assert_eq!(found, expected, "term {:?}", term);
        }
    }

    #[test]
    fn test_group_by_category() {
        let catalog = vec![
            record("Aerodrome").with_category("DeFi"),
            record("Zora").with_category("NFT"),
            record("Mystery"),
            record("Moonwell").with_category("DeFi"),
        ];

        let groups = group_by_category(&catalog);
        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["DeFi", "NFT", "Other"]);
        assert_eq!(names(&groups[0].projects), vec!["Aerodrome", "Moonwell"]);
        assert_eq!(names(&groups[2].projects), vec!["Mystery"]);
    }

    #[test]
    fn test_grouping_is_an_exact_partition() {
        let catalog = vec![
            record("A").with_category("DeFi"),
            record("B"),
            record("C").with_category("NFT"),
            record("D"),
            record("E").with_category("DeFi"),
        ];

        let groups = group_by_category(&catalog);
        let total: usize = groups.iter().map(|g| g.projects.len()).sum();
        assert_eq!(total, catalog.len());

        for r in &catalog {
            let owners = groups
                .iter()
                .filter(|g| g.projects.iter().any(|p| std::ptr::eq(*p, r)))
                .count();
            assert_eq!(owners, 1, "{} should appear in exactly one group", r.name);
        }
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let catalog = vec![
            record("A").with_category("DeFi"),
            record("B"),
            record("C").with_category("NFT"),
            record("D").with_category("DeFi"),
        ];

        let first = group_by_category(&catalog);
        let flattened: Vec<&ProjectRecord> =
            first.iter().flat_map(|g| g.projects.iter().copied()).collect();
        let second = group_by_category(flattened);
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_matches_only() {
        let catalog = vec![
            record("Acme").with_category("DeFi"),
            record("Zebra").with_category("NFT"),
            record("acme2"),
        ];

        let found = query(&catalog, Some("acme")).into_matches();
        let groups = group_by_category(found);
        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["DeFi", "Other"]);
    }
}
