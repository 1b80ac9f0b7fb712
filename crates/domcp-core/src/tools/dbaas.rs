//! Managed databases

use super::spec::{tool, Param, ParamKind as K, ToolSpec, PAGE, PER_PAGE};

const CLUSTER_ID: Param = Param::path("id", "Database cluster UUID");
const USERNAME: Param = Param::path("username", "Database user name");
const CONFIG: Param = Param::body("config", K::Object, "Engine configuration fields to change");

pub static CLUSTER_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases" => "db-cluster-list", "List database clusters",
        params: [Param::query("tag_name", K::String, "Only clusters with this tag"), PAGE, PER_PAGE]),
    tool!(Get "/v2/databases/{id}" => "db-cluster-get", "Get a database cluster",
        params: [CLUSTER_ID]),
    tool!(Post "/v2/databases" => "db-cluster-create", "Create a database cluster",
        params: [
            Param::body("name", K::String, "Cluster name").required(),
            Param::body("engine", K::String, "pg, mysql, redis, valkey, mongodb, kafka or opensearch").required(),
            Param::body("version", K::String, "Engine version"),
            Param::body("region", K::String, "Region slug").required(),
            Param::body("size", K::String, "Node size slug, e.g. db-s-1vcpu-1gb").required(),
            Param::body("num_nodes", K::Integer, "Number of nodes").required(),
            Param::body("private_network_uuid", K::String, "VPC to place the cluster in"),
            Param::body("tags", K::Array, "Tags to apply"),
        ]),
    tool!(Delete "/v2/databases/{id}" => "db-cluster-delete", "Destroy a database cluster",
        params: [CLUSTER_ID]),
    tool!(Put "/v2/databases/{id}/resize" => "db-cluster-resize", "Resize a database cluster",
        params: [
            CLUSTER_ID,
            Param::body("size", K::String, "Node size slug").required(),
            Param::body("num_nodes", K::Integer, "Number of nodes").required(),
        ]),
    tool!(Get "/v2/databases/{id}/backups" => "db-cluster-list-backups", "List backups of a database cluster",
        params: [CLUSTER_ID]),
    tool!(Get "/v2/databases/{id}/ca" => "db-cluster-get-ca", "Get the CA certificate of a database cluster",
        params: [CLUSTER_ID]),
    tool!(Get "/v2/databases/options" => "db-cluster-options", "List engines, versions, regions and sizes available for databases"),
];

pub static POSTGRESQL_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases/{id}/config" => "db-postgresql-get-config", "Get PostgreSQL configuration",
        params: [CLUSTER_ID]),
    tool!(Patch "/v2/databases/{id}/config" => "db-postgresql-update-config", "Update PostgreSQL configuration",
        params: [CLUSTER_ID, CONFIG.required()]),
    tool!(Get "/v2/databases/{id}/pools" => "db-postgresql-list-pools", "List PgBouncer connection pools",
        params: [CLUSTER_ID]),
    tool!(Post "/v2/databases/{id}/pools" => "db-postgresql-create-pool", "Create a PgBouncer connection pool",
        params: [
            CLUSTER_ID,
            Param::body("name", K::String, "Pool name").required(),
            Param::body("mode", K::String, "session, transaction or statement").required(),
            Param::body("size", K::Integer, "Pool size").required(),
            Param::body("db", K::String, "Database").required(),
            Param::body("user", K::String, "User"),
        ]),
];

pub static MYSQL_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases/{id}/config" => "db-mysql-get-config", "Get MySQL configuration",
        params: [CLUSTER_ID]),
    tool!(Patch "/v2/databases/{id}/config" => "db-mysql-update-config", "Update MySQL configuration",
        params: [CLUSTER_ID, CONFIG.required()]),
    tool!(Get "/v2/databases/{id}/sql_mode" => "db-mysql-get-sql-mode", "Get the global SQL mode",
        params: [CLUSTER_ID]),
    tool!(Put "/v2/databases/{id}/sql_mode" => "db-mysql-set-sql-mode", "Set the global SQL mode",
        params: [CLUSTER_ID, Param::body("sql_mode", K::String, "Comma separated SQL modes").required()]),
];

pub static MONGODB_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases/{id}/config" => "db-mongodb-get-config", "Get MongoDB configuration",
        params: [CLUSTER_ID]),
    tool!(Patch "/v2/databases/{id}/config" => "db-mongodb-update-config", "Update MongoDB configuration",
        params: [CLUSTER_ID, CONFIG.required()]),
];

pub static REDIS_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases/{id}/config" => "db-redis-get-config", "Get Redis configuration",
        params: [CLUSTER_ID]),
    tool!(Patch "/v2/databases/{id}/config" => "db-redis-update-config", "Update Redis configuration",
        params: [CLUSTER_ID, CONFIG.required()]),
    tool!(Get "/v2/databases/{id}/eviction_policy" => "db-redis-get-eviction-policy", "Get the eviction policy",
        params: [CLUSTER_ID]),
    tool!(Put "/v2/databases/{id}/eviction_policy" => "db-redis-set-eviction-policy", "Set the eviction policy",
        params: [CLUSTER_ID, Param::body("eviction_policy", K::String, "e.g. allkeys_lru").required()]),
];

pub static KAFKA_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases/{id}/config" => "db-kafka-get-config", "Get Kafka configuration",
        params: [CLUSTER_ID]),
    tool!(Patch "/v2/databases/{id}/config" => "db-kafka-update-config", "Update Kafka configuration",
        params: [CLUSTER_ID, CONFIG.required()]),
    tool!(Get "/v2/databases/{id}/topics" => "db-kafka-list-topics", "List Kafka topics",
        params: [CLUSTER_ID]),
    tool!(Post "/v2/databases/{id}/topics" => "db-kafka-create-topic", "Create a Kafka topic",
        params: [
            CLUSTER_ID,
            Param::body("name", K::String, "Topic name").required(),
            Param::body("replication_factor", K::Integer, "Replication factor"),
            Param::body("partition_count", K::Integer, "Number of partitions"),
        ]),
    tool!(Delete "/v2/databases/{id}/topics/{topic_name}" => "db-kafka-delete-topic", "Delete a Kafka topic",
        params: [CLUSTER_ID, Param::path("topic_name", "Topic name")]),
];

pub static OPENSEARCH_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases/{id}/config" => "db-opensearch-get-config", "Get OpenSearch configuration",
        params: [CLUSTER_ID]),
    tool!(Patch "/v2/databases/{id}/config" => "db-opensearch-update-config", "Update OpenSearch configuration",
        params: [CLUSTER_ID, CONFIG.required()]),
    tool!(Get "/v2/databases/{id}/indexes" => "db-opensearch-list-indexes", "List OpenSearch indexes",
        params: [CLUSTER_ID]),
    tool!(Delete "/v2/databases/{id}/indexes/{index_name}" => "db-opensearch-delete-index", "Delete an OpenSearch index",
        params: [CLUSTER_ID, Param::path("index_name", "Index name")]),
];

pub static USER_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases/{id}/users" => "db-user-list", "List users of a database cluster",
        params: [CLUSTER_ID, PAGE, PER_PAGE]),
    tool!(Get "/v2/databases/{id}/users/{username}" => "db-user-get", "Get a database user",
        params: [CLUSTER_ID, USERNAME]),
    tool!(Post "/v2/databases/{id}/users" => "db-user-create", "Create a database user",
        params: [
            CLUSTER_ID,
            Param::body("name", K::String, "User name").required(),
            Param::body("mysql_settings", K::Object, "MySQL auth plugin settings"),
            Param::body("readonly", K::Boolean, "Read-only user (where supported)"),
        ]),
    tool!(Post "/v2/databases/{id}/users/{username}/reset_auth" => "db-user-reset-auth", "Reset a database user's password",
        params: [CLUSTER_ID, USERNAME]),
    tool!(Delete "/v2/databases/{id}/users/{username}" => "db-user-delete", "Delete a database user",
        params: [CLUSTER_ID, USERNAME]),
];

pub static FIREWALL_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/databases/{id}/firewall" => "db-firewall-get", "List trusted sources of a database cluster",
        params: [CLUSTER_ID]),
    tool!(Put "/v2/databases/{id}/firewall" => "db-firewall-update", "Replace the trusted sources of a database cluster",
        params: [CLUSTER_ID, Param::body("rules", K::Array, "Rules ({type, value})").required()]),
];
