//! Service filter parsing and category resolution
//!
//! Tokens look like `service` or `service:category`. Parsing never fails and
//! knows nothing about which services exist; validation happens when the
//! filter map is registered.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Category a bare `service` token selects
pub const DEFAULT_CATEGORY: &str = "basic";

/// Category that selects every group of a service
pub const ALL_CATEGORY: &str = "all";

/// Duplicate-free set of category tokens for one service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(BTreeSet<String>);

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding only `basic`
    pub fn basic() -> Self {
        Self::from_iter([DEFAULT_CATEGORY])
    }

    pub fn insert(&mut self, category: impl Into<String>) -> bool {
        self.0.insert(category.into())
    }

    /// Literal membership, without the `all` wildcard
    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "[{}]", joined.join(","))
    }
}

/// Service name (as typed) to requested categories
pub type ServiceFilterMap = BTreeMap<String, CategorySet>;

/// Parse `service[:category]` tokens into a filter map
///
/// Splits on the first `:` only. A bare service seeds `basic` when the
/// service has no entry yet; an empty category after the separator is
/// dropped.
pub fn parse_service_filters<S: AsRef<str>>(tokens: &[S]) -> ServiceFilterMap {
    let mut filters = ServiceFilterMap::new();

    for token in tokens {
        let token = token.as_ref();
        match token.split_once(':') {
            Some((service, category)) => {
                if !category.is_empty() {
                    filters.entry(service.to_string()).or_default().insert(category);
                }
            }
            None => {
                filters.entry(token.to_string()).or_insert_with(CategorySet::basic);
            }
        }
    }

    filters
}

/// True if `wanted` was requested or `all` was
pub fn has_category(categories: &CategorySet, wanted: &str) -> bool {
    categories.contains(wanted) || categories.contains(ALL_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> CategorySet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_bare_service_defaults_to_basic() {
        let filters = parse_service_filters(&["droplets"]);
        assert_eq!(filters["droplets"], set(&["basic"]));
    }

    #[test]
    fn test_later_category_keeps_basic() {
        let filters = parse_service_filters(&["droplets", "droplets:actions"]);
        assert_eq!(filters["droplets"], set(&["basic", "actions"]));
    }

    #[test]
    fn test_bare_after_category_does_not_add_basic() {
        let filters = parse_service_filters(&["droplets:actions", "droplets"]);
        assert_eq!(filters["droplets"], set(&["actions"]));
    }

    #[test]
    fn test_repeated_tokens_accumulate() {
        let filters = parse_service_filters(&["networking:dns", "networking:vpc", "networking:dns"]);
        assert_eq!(filters["networking"], set(&["dns", "vpc"]));
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn test_splits_on_first_separator() {
        let filters = parse_service_filters(&["databases:pg:extra"]);
        assert!(filters["databases"].contains("pg:extra"));
    }

    #[test]
    fn test_empty_category_dropped() {
        let filters = parse_service_filters(&["droplets:"]);
        assert!(filters.is_empty());

        let filters = parse_service_filters(&["droplets:", "droplets"]);
        assert_eq!(filters["droplets"], set(&["basic"]));
    }

    #[test]
    fn test_unknown_services_pass_through() {
        let filters = parse_service_filters(&["bogus:all"]);
        assert_eq!(filters["bogus"], set(&["all"]));
    }

    #[test]
    fn test_empty_input() {
        let tokens: [&str; 0] = [];
        assert!(parse_service_filters(&tokens).is_empty());
    }

    #[test]
    fn test_has_category() {
        assert!(has_category(&set(&["all"]), "firewall"));
        assert!(!has_category(&set(&["lb"]), "firewall"));
        assert!(has_category(&set(&["lb", "firewall"]), "firewall"));
        assert!(has_category(&set(&["all"]), ""));
        assert!(!has_category(&CategorySet::new(), "basic"));
    }

    #[test]
    fn test_has_category_is_exact_match() {
        assert!(!has_category(&set(&["Basic"]), "basic"));
        assert!(!has_category(&set(&["alls"]), "dns"));
    }

    #[test]
    fn test_display() {
        assert_eq!(set(&["vpc", "dns"]).to_string(), "[dns,vpc]");
    }
}
