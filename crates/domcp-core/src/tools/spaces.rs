//! Spaces access keys and CDN endpoints

use super::spec::{tool, Param, ParamKind as K, ToolSpec, PAGE, PER_PAGE};

const ACCESS_KEY: Param = Param::path("access_key", "Spaces access key ID");
const CDN_ID: Param = Param::path("id", "CDN endpoint ID");

pub static SPACES_KEY_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/spaces/keys" => "spaces-key-list", "List Spaces access keys",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/spaces/keys/{access_key}" => "spaces-key-get", "Get a Spaces access key",
        params: [ACCESS_KEY]),
    tool!(Post "/v2/spaces/keys" => "spaces-key-create", "Create a Spaces access key",
        params: [
            Param::body("name", K::String, "Key name").required(),
            Param::body("grants", K::Array, "Bucket grants ({bucket, permission})"),
        ]),
    tool!(Put "/v2/spaces/keys/{access_key}" => "spaces-key-update", "Rename a Spaces access key or change its grants",
        params: [
            ACCESS_KEY,
            Param::body("name", K::String, "New name"),
            Param::body("grants", K::Array, "Bucket grants"),
        ]),
    tool!(Delete "/v2/spaces/keys/{access_key}" => "spaces-key-delete", "Delete a Spaces access key",
        params: [ACCESS_KEY]),
];

pub static CDN_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/cdn/endpoints" => "cdn-list", "List CDN endpoints",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/cdn/endpoints/{id}" => "cdn-get", "Get a CDN endpoint",
        params: [CDN_ID]),
    tool!(Post "/v2/cdn/endpoints" => "cdn-create", "Create a CDN endpoint for a Spaces bucket",
        params: [
            Param::body("origin", K::String, "Origin host, e.g. bucket.nyc3.digitaloceanspaces.com").required(),
            Param::body("ttl", K::Integer, "Cache TTL in seconds"),
            Param::body("custom_domain", K::String, "Custom domain"),
            Param::body("certificate_id", K::String, "Certificate for the custom domain"),
        ]),
    tool!(Put "/v2/cdn/endpoints/{id}" => "cdn-update", "Update a CDN endpoint",
        params: [
            CDN_ID,
            Param::body("ttl", K::Integer, "Cache TTL in seconds"),
            Param::body("custom_domain", K::String, "Custom domain"),
            Param::body("certificate_id", K::String, "Certificate for the custom domain"),
        ]),
    tool!(Delete "/v2/cdn/endpoints/{id}" => "cdn-delete", "Delete a CDN endpoint",
        params: [CDN_ID]),
    tool!(Delete "/v2/cdn/endpoints/{id}/cache" => "cdn-flush-cache", "Purge cached files from a CDN endpoint",
        params: [CDN_ID, Param::body("files", K::Array, "Paths to purge, * for everything").required()]),
];
