//! Registration driver
//!
//! Turns raw `service[:category]` tokens into tools on a `ToolSurface`:
//! parse, validate every service, resolve groups per service in catalog
//! order, then add the common groups. Each group is built at most once per
//! call.

use std::collections::{HashMap, HashSet};

use super::catalog::{catalog, ServiceName, COMMON_GROUPS, COMMON_SERVICE};
use super::error::{RegistryError, RegistryResult};
use super::filter::{parse_service_filters, CategorySet, ServiceFilterMap};
use crate::client::ClientProvider;
use crate::logging::Logger;
use crate::{log_debug, log_info};
use crate::tools::{CapabilityGroup, ServerTool, ToolError, ToolSurface};

/// Groups a registration call will activate, before anything is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPlan {
    /// Requested services in catalog order, with their groups
    pub services: Vec<(ServiceName, Vec<CapabilityGroup>)>,
    pub common: Vec<CapabilityGroup>,
}

impl RegistrationPlan {
    /// Every group in activation order, duplicates removed
    pub fn groups(&self) -> Vec<CapabilityGroup> {
        let mut seen = HashSet::new();
        self.services
            .iter()
            .flat_map(|(_, groups)| groups.iter())
            .chain(self.common.iter())
            .copied()
            .filter(|group| seen.insert(*group))
            .collect()
    }
}

/// Outcome of a successful registration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    pub services: Vec<ServiceName>,
    /// Activated groups, in the order their tools were added
    pub groups: Vec<CapabilityGroup>,
    pub tool_count: usize,
}

impl RegistrationReport {
    pub fn contains(&self, group: CapabilityGroup) -> bool {
        self.groups.contains(&group)
    }
}

/// Resolve tokens to groups without building anything
///
/// Fails on the first service missing from the catalog. With no tokens
/// every service is requested with its default category.
pub fn plan<S: AsRef<str>>(tokens: &[S]) -> RegistryResult<RegistrationPlan> {
    let filters = if tokens.is_empty() {
        parse_service_filters(ServiceName::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>().as_slice())
    } else {
        parse_service_filters(tokens)
    };
    plan_filters(&filters)
}

fn plan_filters(filters: &ServiceFilterMap) -> RegistryResult<RegistrationPlan> {
    let mut requested: HashMap<ServiceName, &CategorySet> = HashMap::with_capacity(filters.len());
    for (name, categories) in filters {
        let service: ServiceName = name.parse()?;
        requested.insert(service, categories);
    }

    let services = catalog()
        .iter()
        .filter_map(|entry| {
            requested
                .get(&entry.service)
                .map(|categories| (entry.service, (entry.activate)(categories)))
        })
        .collect();

    Ok(RegistrationPlan {
        services,
        common: COMMON_GROUPS.to_vec(),
    })
}

/// Register the tools selected by `tokens` on `surface`
///
/// Nothing is added when a service is unknown. A construction failure aborts
/// the call; groups added before it stay on the surface.
pub fn register<S: AsRef<str>>(
    surface: &dyn ToolSurface,
    provider: &ClientProvider,
    logger: &dyn Logger,
    tokens: &[S],
) -> RegistryResult<RegistrationReport> {
    register_with(surface, logger, tokens, |group| group.build(provider))
}

/// `register` with a caller-supplied group constructor
pub fn register_with<S, F>(
    surface: &dyn ToolSurface,
    logger: &dyn Logger,
    tokens: &[S],
    mut build: F,
) -> RegistryResult<RegistrationReport>
where
    S: AsRef<str>,
    F: FnMut(CapabilityGroup) -> Result<Vec<ServerTool>, ToolError>,
{
    if tokens.is_empty() {
        logger.warn("[Registry] No services specified, loading basic tools for all services");
    }

    let plan = plan(tokens)?;
    let mut report = RegistrationReport::default();
    let mut activated = HashSet::new();

    let common = (COMMON_SERVICE, plan.common.as_slice());
    let batches = plan
        .services
        .iter()
        .map(|(service, groups)| (service.as_str(), groups.as_slice()))
        .chain(std::iter::once(common));

    for (service, groups) in batches {
        if service != COMMON_SERVICE {
            log_debug!(
                logger,
                "[Registry] Registering tools for service: {}, groups: {:?}",
                service,
                groups.iter().map(|g| g.name()).collect::<Vec<_>>()
            );
        }

        for &group in groups {
            if !activated.insert(group) {
                continue;
            }
            let tools = build(group).map_err(|e| RegistryError::construction(service, e))?;
            report.tool_count += tools.len();
            report.groups.push(group);
            surface.add_tools(tools);
        }
    }

    report.services = plan.services.iter().map(|(service, _)| *service).collect();
    log_info!(
        logger,
        "[Registry] Registered {} tools from {} groups",
        report.tool_count,
        report.groups.len()
    );
    Ok(report)
}
