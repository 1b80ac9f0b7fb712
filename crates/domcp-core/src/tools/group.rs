//! Capability groups
//!
//! A group is the unit of activation: the registry turns service categories
//! into groups, and each group expands into a fixed set of tools. A group is
//! registered completely or not at all.

use std::collections::HashSet;
use std::fmt;

use super::error::ToolError;
use super::handler::{api_tool, ServerTool};
use super::spec::ToolSpec;
use super::{account, apps, common, dbaas, doks, droplet, insights, marketplace, networking, spaces};
use crate::client::ClientProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityGroup {
    // droplets
    Droplets,
    DropletActions,
    Images,
    ImageActions,
    Sizes,
    // networking
    LoadBalancers,
    Firewalls,
    Domains,
    Certificates,
    Vpcs,
    VpcPeerings,
    ReservedIps,
    ByoipPrefixes,
    // accounts
    Account,
    Balance,
    BillingHistory,
    Invoices,
    SshKeys,
    AccountActions,
    // spaces
    SpacesKeys,
    CdnEndpoints,
    // insights
    UptimeChecks,
    UptimeCheckAlerts,
    AlertPolicies,
    // databases
    DatabaseClusters,
    Postgresql,
    Mysql,
    Mongodb,
    Redis,
    Kafka,
    Opensearch,
    DatabaseUsers,
    DatabaseFirewall,
    // single-group services
    Apps,
    Kubernetes,
    OneClicks,
    // common
    Regions,
}

impl CapabilityGroup {
    pub const ALL: &'static [CapabilityGroup] = &[
        CapabilityGroup::Droplets,
        CapabilityGroup::DropletActions,
        CapabilityGroup::Images,
        CapabilityGroup::ImageActions,
        CapabilityGroup::Sizes,
        CapabilityGroup::LoadBalancers,
        CapabilityGroup::Firewalls,
        CapabilityGroup::Domains,
        CapabilityGroup::Certificates,
        CapabilityGroup::Vpcs,
        CapabilityGroup::VpcPeerings,
        CapabilityGroup::ReservedIps,
        CapabilityGroup::ByoipPrefixes,
        CapabilityGroup::Account,
        CapabilityGroup::Balance,
        CapabilityGroup::BillingHistory,
        CapabilityGroup::Invoices,
        CapabilityGroup::SshKeys,
        CapabilityGroup::AccountActions,
        CapabilityGroup::SpacesKeys,
        CapabilityGroup::CdnEndpoints,
        CapabilityGroup::UptimeChecks,
        CapabilityGroup::UptimeCheckAlerts,
        CapabilityGroup::AlertPolicies,
        CapabilityGroup::DatabaseClusters,
        CapabilityGroup::Postgresql,
        CapabilityGroup::Mysql,
        CapabilityGroup::Mongodb,
        CapabilityGroup::Redis,
        CapabilityGroup::Kafka,
        CapabilityGroup::Opensearch,
        CapabilityGroup::DatabaseUsers,
        CapabilityGroup::DatabaseFirewall,
        CapabilityGroup::Apps,
        CapabilityGroup::Kubernetes,
        CapabilityGroup::OneClicks,
        CapabilityGroup::Regions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CapabilityGroup::Droplets => "droplets",
            CapabilityGroup::DropletActions => "droplet-actions",
            CapabilityGroup::Images => "images",
            CapabilityGroup::ImageActions => "image-actions",
            CapabilityGroup::Sizes => "sizes",
            CapabilityGroup::LoadBalancers => "load-balancers",
            CapabilityGroup::Firewalls => "firewalls",
            CapabilityGroup::Domains => "domains",
            CapabilityGroup::Certificates => "certificates",
            CapabilityGroup::Vpcs => "vpcs",
            CapabilityGroup::VpcPeerings => "vpc-peerings",
            CapabilityGroup::ReservedIps => "reserved-ips",
            CapabilityGroup::ByoipPrefixes => "byoip-prefixes",
            CapabilityGroup::Account => "account",
            CapabilityGroup::Balance => "balance",
            CapabilityGroup::BillingHistory => "billing-history",
            CapabilityGroup::Invoices => "invoices",
            CapabilityGroup::SshKeys => "ssh-keys",
            CapabilityGroup::AccountActions => "account-actions",
            CapabilityGroup::SpacesKeys => "spaces-keys",
            CapabilityGroup::CdnEndpoints => "cdn-endpoints",
            CapabilityGroup::UptimeChecks => "uptime-checks",
            CapabilityGroup::UptimeCheckAlerts => "uptime-check-alerts",
            CapabilityGroup::AlertPolicies => "alert-policies",
            CapabilityGroup::DatabaseClusters => "database-clusters",
            CapabilityGroup::Postgresql => "postgresql",
            CapabilityGroup::Mysql => "mysql",
            CapabilityGroup::Mongodb => "mongodb",
            CapabilityGroup::Redis => "redis",
            CapabilityGroup::Kafka => "kafka",
            CapabilityGroup::Opensearch => "opensearch",
            CapabilityGroup::DatabaseUsers => "database-users",
            CapabilityGroup::DatabaseFirewall => "database-firewall",
            CapabilityGroup::Apps => "apps",
            CapabilityGroup::Kubernetes => "kubernetes",
            CapabilityGroup::OneClicks => "one-clicks",
            CapabilityGroup::Regions => "regions",
        }
    }

    /// Static tool definitions of the group
    pub fn specs(&self) -> &'static [ToolSpec] {
        match self {
            CapabilityGroup::Droplets => droplet::DROPLET_TOOLS,
            CapabilityGroup::DropletActions => droplet::DROPLET_ACTION_TOOLS,
            CapabilityGroup::Images => droplet::IMAGE_TOOLS,
            CapabilityGroup::ImageActions => droplet::IMAGE_ACTION_TOOLS,
            CapabilityGroup::Sizes => droplet::SIZE_TOOLS,
            CapabilityGroup::LoadBalancers => networking::LOAD_BALANCER_TOOLS,
            CapabilityGroup::Firewalls => networking::FIREWALL_TOOLS,
            CapabilityGroup::Domains => networking::DOMAIN_TOOLS,
            CapabilityGroup::Certificates => networking::CERTIFICATE_TOOLS,
            CapabilityGroup::Vpcs => networking::VPC_TOOLS,
            CapabilityGroup::VpcPeerings => networking::VPC_PEERING_TOOLS,
            CapabilityGroup::ReservedIps => networking::RESERVED_IP_TOOLS,
            CapabilityGroup::ByoipPrefixes => networking::BYOIP_PREFIX_TOOLS,
            CapabilityGroup::Account => account::ACCOUNT_TOOLS,
            CapabilityGroup::Balance => account::BALANCE_TOOLS,
            CapabilityGroup::BillingHistory => account::BILLING_TOOLS,
            CapabilityGroup::Invoices => account::INVOICE_TOOLS,
            CapabilityGroup::SshKeys => account::KEY_TOOLS,
            CapabilityGroup::AccountActions => account::ACTION_TOOLS,
            CapabilityGroup::SpacesKeys => spaces::SPACES_KEY_TOOLS,
            CapabilityGroup::CdnEndpoints => spaces::CDN_TOOLS,
            CapabilityGroup::UptimeChecks => insights::UPTIME_CHECK_TOOLS,
            CapabilityGroup::UptimeCheckAlerts => insights::UPTIME_CHECK_ALERT_TOOLS,
            CapabilityGroup::AlertPolicies => insights::ALERT_POLICY_TOOLS,
            CapabilityGroup::DatabaseClusters => dbaas::CLUSTER_TOOLS,
            CapabilityGroup::Postgresql => dbaas::POSTGRESQL_TOOLS,
            CapabilityGroup::Mysql => dbaas::MYSQL_TOOLS,
            CapabilityGroup::Mongodb => dbaas::MONGODB_TOOLS,
            CapabilityGroup::Redis => dbaas::REDIS_TOOLS,
            CapabilityGroup::Kafka => dbaas::KAFKA_TOOLS,
            CapabilityGroup::Opensearch => dbaas::OPENSEARCH_TOOLS,
            CapabilityGroup::DatabaseUsers => dbaas::USER_TOOLS,
            CapabilityGroup::DatabaseFirewall => dbaas::FIREWALL_TOOLS,
            CapabilityGroup::Apps => apps::APP_TOOLS,
            CapabilityGroup::Kubernetes => doks::KUBERNETES_TOOLS,
            CapabilityGroup::OneClicks => marketplace::ONE_CLICK_TOOLS,
            CapabilityGroup::Regions => common::REGION_TOOLS,
        }
    }

    /// Construct the group's tools, all bound to `provider`
    ///
    /// Fails without producing anything if a definition is invalid or two
    /// tools share a name.
    pub fn build(&self, provider: &ClientProvider) -> Result<Vec<ServerTool>, ToolError> {
        let specs = self.specs();
        let mut names = HashSet::with_capacity(specs.len());
        for spec in specs {
            spec.validate()?;
            if !names.insert(spec.name) {
                return Err(ToolError::DuplicateTool(spec.name.to_string()));
            }
        }
        Ok(specs.iter().map(|spec| api_tool(spec, provider.clone())).collect())
    }
}

impl fmt::Display for CapabilityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::unavailable_provider;

    #[test]
    fn test_every_group_builds() {
        let provider = unavailable_provider();
        for group in CapabilityGroup::ALL {
            let tools = group
                .build(&provider)
                .unwrap_or_else(|e| panic!("{} failed to build: {}", group, e));
            assert!(!tools.is_empty(), "{} has no tools", group);
            assert_eq!(tools.len(), group.specs().len());
        }
    }

    #[test]
    fn test_tool_names_unique_across_groups() {
        let mut seen = HashSet::new();
        for group in CapabilityGroup::ALL {
            for spec in group.specs() {
                assert!(seen.insert(spec.name), "{} appears in more than one group", spec.name);
            }
        }
    }

    #[test]
    fn test_group_names_unique() {
        let names: HashSet<_> = CapabilityGroup::ALL.iter().map(|g| g.name()).collect();
        assert_eq!(names.len(), CapabilityGroup::ALL.len());
    }

    #[test]
    fn test_list_tools_paginate() {
        for group in CapabilityGroup::ALL {
            for spec in group.specs() {
                if spec.name.ends_with("-list") && !spec.path.ends_with("/1-clicks") {
                    assert!(
                        spec.params.iter().any(|p| p.name == "per_page"),
                        "{} does not accept per_page",
                        spec.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_build_preserves_definition_order() {
        let tools = CapabilityGroup::Droplets.build(&unavailable_provider()).unwrap();
        let names: Vec<_> = tools.iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names[0], "droplet-list");
        assert!(names.contains(&"droplet-power-on".to_string()));
    }
}
