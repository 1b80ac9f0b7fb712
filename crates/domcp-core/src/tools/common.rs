//! Tools registered regardless of the selected services

use super::spec::{tool, ToolSpec, PAGE, PER_PAGE};

pub static REGION_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/regions" => "region-list", "List datacenter regions and their availability",
        params: [PAGE, PER_PAGE]),
];
