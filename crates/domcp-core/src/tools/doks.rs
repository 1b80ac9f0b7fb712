//! Kubernetes (DOKS)

use super::spec::{tool, Param, ParamKind as K, ToolSpec, PAGE, PER_PAGE};

const CLUSTER_ID: Param = Param::path("cluster_id", "Kubernetes cluster ID");
const POOL_ID: Param = Param::path("node_pool_id", "Node pool ID");

pub static KUBERNETES_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/kubernetes/clusters" => "doks-list-clusters", "List Kubernetes clusters",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/kubernetes/clusters/{cluster_id}" => "doks-get-cluster", "Get a Kubernetes cluster",
        params: [CLUSTER_ID]),
    tool!(Post "/v2/kubernetes/clusters" => "doks-create-cluster", "Create a Kubernetes cluster",
        params: [
            Param::body("name", K::String, "Cluster name").required(),
            Param::body("region", K::String, "Region slug").required(),
            Param::body("version", K::String, "Kubernetes version slug, e.g. latest").required(),
            Param::body("node_pools", K::Array, "Node pools ({name, size, count})").required(),
            Param::body("vpc_uuid", K::String, "VPC to place the cluster in"),
            Param::body("ha", K::Boolean, "Highly available control plane"),
            Param::body("auto_upgrade", K::Boolean, "Upgrade automatically in the maintenance window"),
            Param::body("tags", K::Array, "Tags to apply"),
        ]),
    tool!(Delete "/v2/kubernetes/clusters/{cluster_id}" => "doks-delete-cluster", "Delete a Kubernetes cluster",
        params: [CLUSTER_ID]),
    tool!(Get "/v2/kubernetes/clusters/{cluster_id}/kubeconfig" => "doks-get-kubeconfig", "Get the kubeconfig of a cluster",
        params: [CLUSTER_ID, Param::query("expiry_seconds", K::Integer, "Credential lifetime in seconds")]),
    tool!(Get "/v2/kubernetes/clusters/{cluster_id}/upgrades" => "doks-list-upgrades", "List available version upgrades for a cluster",
        params: [CLUSTER_ID]),
    tool!(Get "/v2/kubernetes/clusters/{cluster_id}/node_pools" => "doks-list-node-pools", "List node pools of a cluster",
        params: [CLUSTER_ID]),
    tool!(Get "/v2/kubernetes/clusters/{cluster_id}/node_pools/{node_pool_id}" => "doks-get-node-pool", "Get a node pool",
        params: [CLUSTER_ID, POOL_ID]),
    tool!(Post "/v2/kubernetes/clusters/{cluster_id}/node_pools" => "doks-create-node-pool", "Add a node pool to a cluster",
        params: [
            CLUSTER_ID,
            Param::body("name", K::String, "Pool name").required(),
            Param::body("size", K::String, "Droplet size slug").required(),
            Param::body("count", K::Integer, "Number of nodes").required(),
            Param::body("auto_scale", K::Boolean, "Enable autoscaling"),
            Param::body("min_nodes", K::Integer, "Autoscaling minimum"),
            Param::body("max_nodes", K::Integer, "Autoscaling maximum"),
        ]),
    tool!(Put "/v2/kubernetes/clusters/{cluster_id}/node_pools/{node_pool_id}" => "doks-update-node-pool", "Update a node pool",
        params: [
            CLUSTER_ID,
            POOL_ID,
            Param::body("name", K::String, "Pool name").required(),
            Param::body("count", K::Integer, "Number of nodes").required(),
            Param::body("auto_scale", K::Boolean, "Enable autoscaling"),
            Param::body("min_nodes", K::Integer, "Autoscaling minimum"),
            Param::body("max_nodes", K::Integer, "Autoscaling maximum"),
        ]),
    tool!(Delete "/v2/kubernetes/clusters/{cluster_id}/node_pools/{node_pool_id}" => "doks-delete-node-pool", "Delete a node pool",
        params: [CLUSTER_ID, POOL_ID]),
    tool!(Get "/v2/kubernetes/options" => "doks-get-options", "List Kubernetes versions, regions and node sizes"),
];
