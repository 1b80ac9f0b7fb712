//! 1-Click applications

use super::spec::{tool, Param, ParamKind as K, ToolSpec};

pub static ONE_CLICK_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/1-clicks" => "1-click-list", "List 1-Click applications",
        params: [Param::query("type", K::String, "droplet or kubernetes")]),
    tool!(Post "/v2/1-clicks/kubernetes" => "1-click-kubernetes-app-install", "Install 1-Click applications on a Kubernetes cluster",
        params: [
            Param::body("addon_slugs", K::Array, "Slugs of the applications to install").required(),
            Param::body("cluster_uuid", K::String, "Target cluster").required(),
        ]),
];
