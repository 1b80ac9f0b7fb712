//! Service catalog
//!
//! Read-only table from service to activation function. The table is built
//! once on first use and never mutated. `ServiceName::from_str` is the only
//! place a user-supplied string becomes a service.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::error::RegistryError;
use super::filter::{has_category, CategorySet, DEFAULT_CATEGORY};
use crate::tools::CapabilityGroup;

/// Top-level area of the DigitalOcean API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceName {
    Apps,
    Networking,
    Droplets,
    Accounts,
    Spaces,
    Databases,
    Marketplace,
    Insights,
    Doks,
}

impl ServiceName {
    /// Catalog order
    pub const ALL: &'static [ServiceName] = &[
        ServiceName::Apps,
        ServiceName::Networking,
        ServiceName::Droplets,
        ServiceName::Accounts,
        ServiceName::Spaces,
        ServiceName::Databases,
        ServiceName::Marketplace,
        ServiceName::Insights,
        ServiceName::Doks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceName::Apps => "apps",
            ServiceName::Networking => "networking",
            ServiceName::Droplets => "droplets",
            ServiceName::Accounts => "accounts",
            ServiceName::Spaces => "spaces",
            ServiceName::Databases => "databases",
            ServiceName::Marketplace => "marketplace",
            ServiceName::Insights => "insights",
            ServiceName::Doks => "doks",
        }
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceName::ALL
            .iter()
            .copied()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownService {
                service: s.to_string(),
                supported: supported_services(),
            })
    }
}

/// Pure mapping from requested categories to groups
pub type ActivationFn = fn(&CategorySet) -> Vec<CapabilityGroup>;

/// One row of the catalog
#[derive(Debug, Clone, Copy)]
pub struct ServiceCatalogEntry {
    pub service: ServiceName,
    pub default_category: &'static str,
    /// Categories the service understands, besides `all`
    pub categories: &'static [&'static str],
    pub activate: ActivationFn,
}

/// Groups registered no matter which services were requested
pub const COMMON_GROUPS: &[CapabilityGroup] = &[CapabilityGroup::Regions];

/// Label used in errors for the common groups
pub const COMMON_SERVICE: &str = "common";

static CATALOG: Lazy<Vec<ServiceCatalogEntry>> =
    Lazy::new(|| ServiceName::ALL.iter().map(|&service| catalog_entry(service)).collect());

fn catalog_entry(service: ServiceName) -> ServiceCatalogEntry {
    let row = |categories: &'static [&'static str], activate: ActivationFn| ServiceCatalogEntry {
        service,
        default_category: DEFAULT_CATEGORY,
        categories,
        activate,
    };

    match service {
        ServiceName::Apps => row(&["basic"], activate_apps),
        ServiceName::Networking => row(&["basic", "lb", "firewall", "dns", "vpc", "ip"], activate_networking),
        ServiceName::Droplets => row(&["basic", "actions", "images", "sizes"], activate_droplets),
        ServiceName::Accounts => row(&["basic", "info", "billing", "keys", "actions"], activate_accounts),
        ServiceName::Spaces => row(&["basic", "keys", "cdn"], activate_spaces),
        ServiceName::Databases => row(
            &[
                "basic",
                "cluster",
                "postgresql",
                "mysql",
                "mongodb",
                "redis",
                "kafka",
                "opensearch",
                "users",
                "firewall",
            ],
            activate_databases,
        ),
        ServiceName::Marketplace => row(&["basic"], activate_marketplace),
        ServiceName::Insights => row(&["basic", "uptime", "alerts"], activate_insights),
        ServiceName::Doks => row(&["basic"], activate_doks),
    }
}

/// All catalog entries, in catalog order
pub fn catalog() -> &'static [ServiceCatalogEntry] {
    &CATALOG
}

/// Catalog entry of a service
pub fn entry(service: ServiceName) -> Option<&'static ServiceCatalogEntry> {
    CATALOG.iter().find(|e| e.service == service)
}

/// Service names, sorted, as listed in error messages
pub fn supported_services() -> Vec<String> {
    let mut names: Vec<String> = ServiceName::ALL.iter().map(|s| s.as_str().to_string()).collect();
    names.sort();
    names
}

fn activate_apps(_: &CategorySet) -> Vec<CapabilityGroup> {
    vec![CapabilityGroup::Apps]
}

fn activate_marketplace(_: &CategorySet) -> Vec<CapabilityGroup> {
    vec![CapabilityGroup::OneClicks]
}

fn activate_doks(_: &CategorySet) -> Vec<CapabilityGroup> {
    vec![CapabilityGroup::Kubernetes]
}

fn activate_droplets(categories: &CategorySet) -> Vec<CapabilityGroup> {
    let mut groups = Vec::new();
    if has_category(categories, "basic") {
        groups.push(CapabilityGroup::Droplets);
    }
    if has_category(categories, "actions") {
        groups.push(CapabilityGroup::DropletActions);
    }
    if has_category(categories, "images") {
        groups.push(CapabilityGroup::Images);
        groups.push(CapabilityGroup::ImageActions);
    }
    if has_category(categories, "sizes") {
        groups.push(CapabilityGroup::Sizes);
    }
    groups
}

// basic means load balancers
fn activate_networking(categories: &CategorySet) -> Vec<CapabilityGroup> {
    let mut groups = Vec::new();
    if has_category(categories, "basic") || has_category(categories, "lb") {
        groups.push(CapabilityGroup::LoadBalancers);
    }
    if has_category(categories, "firewall") {
        groups.push(CapabilityGroup::Firewalls);
    }
    if has_category(categories, "dns") {
        groups.push(CapabilityGroup::Domains);
        groups.push(CapabilityGroup::Certificates);
    }
    if has_category(categories, "vpc") {
        groups.push(CapabilityGroup::Vpcs);
        groups.push(CapabilityGroup::VpcPeerings);
    }
    if has_category(categories, "ip") {
        groups.push(CapabilityGroup::ReservedIps);
        groups.push(CapabilityGroup::ByoipPrefixes);
    }
    groups
}

fn activate_accounts(categories: &CategorySet) -> Vec<CapabilityGroup> {
    let mut groups = Vec::new();
    if has_category(categories, "basic") || has_category(categories, "info") {
        groups.push(CapabilityGroup::Account);
    }
    if has_category(categories, "billing") {
        groups.push(CapabilityGroup::Balance);
        groups.push(CapabilityGroup::BillingHistory);
        groups.push(CapabilityGroup::Invoices);
    }
    if has_category(categories, "keys") {
        groups.push(CapabilityGroup::SshKeys);
    }
    if has_category(categories, "actions") {
        groups.push(CapabilityGroup::AccountActions);
    }
    groups
}

fn activate_spaces(categories: &CategorySet) -> Vec<CapabilityGroup> {
    let mut groups = Vec::new();
    if has_category(categories, "basic") || has_category(categories, "keys") {
        groups.push(CapabilityGroup::SpacesKeys);
    }
    if has_category(categories, "cdn") {
        groups.push(CapabilityGroup::CdnEndpoints);
    }
    groups
}

fn activate_insights(categories: &CategorySet) -> Vec<CapabilityGroup> {
    let mut groups = Vec::new();
    if has_category(categories, "basic") || has_category(categories, "uptime") {
        groups.push(CapabilityGroup::UptimeChecks);
        groups.push(CapabilityGroup::UptimeCheckAlerts);
    }
    if has_category(categories, "alerts") {
        groups.push(CapabilityGroup::AlertPolicies);
    }
    groups
}

fn activate_databases(categories: &CategorySet) -> Vec<CapabilityGroup> {
    const ENGINES: &[(&str, CapabilityGroup)] = &[
        ("postgresql", CapabilityGroup::Postgresql),
        ("mysql", CapabilityGroup::Mysql),
        ("mongodb", CapabilityGroup::Mongodb),
        ("redis", CapabilityGroup::Redis),
        ("kafka", CapabilityGroup::Kafka),
        ("opensearch", CapabilityGroup::Opensearch),
    ];

    let mut groups = Vec::new();
    if has_category(categories, "basic") || has_category(categories, "cluster") {
        groups.push(CapabilityGroup::DatabaseClusters);
    }
    for (category, group) in ENGINES {
        if has_category(categories, category) {
            groups.push(*group);
        }
    }
    if has_category(categories, "users") {
        groups.push(CapabilityGroup::DatabaseUsers);
    }
    if has_category(categories, "firewall") {
        groups.push(CapabilityGroup::DatabaseFirewall);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(items: &[&str]) -> CategorySet {
        items.iter().copied().collect()
    }

    fn activate(service: ServiceName, categories: &[&str]) -> Vec<CapabilityGroup> {
        (entry(service).unwrap().activate)(&set(categories))
    }

    #[test]
    fn test_from_str() {
        assert_eq!("droplets".parse::<ServiceName>().unwrap(), ServiceName::Droplets);
        assert_eq!("doks".parse::<ServiceName>().unwrap(), ServiceName::Doks);

        let err = "bogus".parse::<ServiceName>().unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!(err.to_string().contains("droplets"));

        assert!("Droplets".parse::<ServiceName>().is_err());
    }

    #[test]
    fn test_every_service_has_an_entry() {
        assert_eq!(catalog().len(), ServiceName::ALL.len());
        for service in ServiceName::ALL {
            let e = entry(*service).unwrap();
            assert_eq!(e.default_category, "basic");
            assert!(e.categories.contains(&"basic"));
        }
    }

    #[test]
    fn test_basic_activates_something_everywhere() {
        for e in catalog() {
            assert!(!(e.activate)(&CategorySet::basic()).is_empty(), "{} basic is empty", e.service);
        }
    }

    #[test]
    fn test_all_is_superset_of_every_category() {
        for e in catalog() {
            let all: HashSet<_> = (e.activate)(&set(&["all"])).into_iter().collect();
            let union: HashSet<_> = (e.activate)(&e.categories.iter().copied().collect()).into_iter().collect();
            assert_eq!(all, union, "{} all differs from the union of its categories", e.service);
            for category in e.categories {
                for group in (e.activate)(&set(&[*category])) {
                    assert!(all.contains(&group));
                }
            }
        }
    }

    #[test]
    fn test_networking_all() {
        let groups = activate(ServiceName::Networking, &["all"]);
        assert_eq!(
            groups,
            vec![
                CapabilityGroup::LoadBalancers,
                CapabilityGroup::Firewalls,
                CapabilityGroup::Domains,
                CapabilityGroup::Certificates,
                CapabilityGroup::Vpcs,
                CapabilityGroup::VpcPeerings,
                CapabilityGroup::ReservedIps,
                CapabilityGroup::ByoipPrefixes,
            ]
        );
    }

    #[test]
    fn test_basic_aliases() {
        assert_eq!(activate(ServiceName::Networking, &["lb"]), activate(ServiceName::Networking, &["basic"]));
        assert_eq!(activate(ServiceName::Accounts, &["info"]), vec![CapabilityGroup::Account]);
        assert_eq!(activate(ServiceName::Spaces, &["keys"]), vec![CapabilityGroup::SpacesKeys]);
        assert_eq!(
            activate(ServiceName::Insights, &["uptime"]),
            vec![CapabilityGroup::UptimeChecks, CapabilityGroup::UptimeCheckAlerts]
        );
        assert_eq!(activate(ServiceName::Databases, &["cluster"]), vec![CapabilityGroup::DatabaseClusters]);
    }

    #[test]
    fn test_category_without_basic() {
        assert_eq!(activate(ServiceName::Droplets, &["sizes"]), vec![CapabilityGroup::Sizes]);
        assert_eq!(
            activate(ServiceName::Databases, &["redis", "users"]),
            vec![CapabilityGroup::Redis, CapabilityGroup::DatabaseUsers]
        );
    }

    #[test]
    fn test_unknown_category_activates_nothing() {
        assert!(activate(ServiceName::Droplets, &["bogus"]).is_empty());
    }

    #[test]
    fn test_single_group_services_ignore_categories() {
        assert_eq!(activate(ServiceName::Apps, &["whatever"]), vec![CapabilityGroup::Apps]);
        assert_eq!(activate(ServiceName::Doks, &[]), vec![CapabilityGroup::Kubernetes]);
        assert_eq!(activate(ServiceName::Marketplace, &["all"]), vec![CapabilityGroup::OneClicks]);
    }

    #[test]
    fn test_groups_belong_to_one_service() {
        let mut owner = std::collections::HashMap::new();
        for e in catalog() {
            for group in (e.activate)(&set(&["all"])) {
                if let Some(previous) = owner.insert(group, e.service) {
                    panic!("{} activated by {} and {}", group, previous, e.service);
                }
            }
        }
        for group in COMMON_GROUPS {
            assert!(!owner.contains_key(group));
        }
        assert_eq!(owner.len() + COMMON_GROUPS.len(), CapabilityGroup::ALL.len());
    }

    #[test]
    fn test_supported_services_sorted() {
        let names = supported_services();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 9);
    }
}
