//! Uptime checks and monitoring alert policies

use super::spec::{tool, Param, ParamKind as K, ToolSpec, PAGE, PER_PAGE};

const CHECK_ID: Param = Param::path("id", "Uptime check ID");
const ALERT_CHECK_ID: Param = Param::path("check_id", "Uptime check ID");
const ALERT_ID: Param = Param::path("alert_id", "Uptime alert ID");
const POLICY_ID: Param = Param::path("uuid", "Alert policy UUID");

pub static UPTIME_CHECK_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/uptime/checks" => "uptimecheck-list", "List uptime checks",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/uptime/checks/{id}" => "uptimecheck-get", "Get an uptime check",
        params: [CHECK_ID]),
    tool!(Get "/v2/uptime/checks/{id}/state" => "uptimecheck-get-state", "Get the current state of an uptime check",
        params: [CHECK_ID]),
    tool!(Post "/v2/uptime/checks" => "uptimecheck-create", "Create an uptime check",
        params: [
            Param::body("name", K::String, "Check name").required(),
            Param::body("type", K::String, "ping, http or https").required(),
            Param::body("target", K::String, "URL or host to check").required(),
            Param::body("regions", K::Array, "Probe regions (us_east, eu_west, ...)"),
            Param::body("enabled", K::Boolean, "Whether the check runs"),
        ]),
    tool!(Put "/v2/uptime/checks/{id}" => "uptimecheck-update", "Update an uptime check",
        params: [
            CHECK_ID,
            Param::body("name", K::String, "Check name"),
            Param::body("type", K::String, "ping, http or https"),
            Param::body("target", K::String, "URL or host to check"),
            Param::body("regions", K::Array, "Probe regions"),
            Param::body("enabled", K::Boolean, "Whether the check runs"),
        ]),
    tool!(Delete "/v2/uptime/checks/{id}" => "uptimecheck-delete", "Delete an uptime check",
        params: [CHECK_ID]),
];

pub static UPTIME_CHECK_ALERT_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/uptime/checks/{check_id}/alerts" => "uptimecheck-alert-list", "List alerts of an uptime check",
        params: [ALERT_CHECK_ID, PAGE, PER_PAGE]),
    tool!(Get "/v2/uptime/checks/{check_id}/alerts/{alert_id}" => "uptimecheck-alert-get", "Get an uptime check alert",
        params: [ALERT_CHECK_ID, ALERT_ID]),
    tool!(Post "/v2/uptime/checks/{check_id}/alerts" => "uptimecheck-alert-create", "Create an alert on an uptime check",
        params: [
            ALERT_CHECK_ID,
            Param::body("name", K::String, "Alert name").required(),
            Param::body("type", K::String, "latency, down, down_global or ssl_expiry").required(),
            Param::body("notifications", K::Object, "Email/Slack notification targets").required(),
            Param::body("threshold", K::Integer, "Threshold for latency/ssl_expiry"),
            Param::body("comparison", K::String, "greater_than or less_than"),
            Param::body("period", K::String, "Evaluation window, e.g. 2m"),
        ]),
    tool!(Delete "/v2/uptime/checks/{check_id}/alerts/{alert_id}" => "uptimecheck-alert-delete", "Delete an uptime check alert",
        params: [ALERT_CHECK_ID, ALERT_ID]),
];

pub static ALERT_POLICY_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/monitoring/alerts" => "alert-policy-list", "List monitoring alert policies",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/monitoring/alerts/{uuid}" => "alert-policy-get", "Get a monitoring alert policy",
        params: [POLICY_ID]),
    tool!(Post "/v2/monitoring/alerts" => "alert-policy-create", "Create a monitoring alert policy",
        params: [
            Param::body("type", K::String, "Metric, e.g. v1/insights/droplet/cpu").required(),
            Param::body("description", K::String, "Description").required(),
            Param::body("compare", K::String, "GreaterThan or LessThan").required(),
            Param::body("value", K::Number, "Threshold").required(),
            Param::body("window", K::String, "5m, 10m, 30m or 1h").required(),
            Param::body("entities", K::Array, "Droplet IDs"),
            Param::body("tags", K::Array, "Droplet tags"),
            Param::body("alerts", K::Object, "Email/Slack notification targets").required(),
            Param::body("enabled", K::Boolean, "Whether the policy is active"),
        ]),
    tool!(Delete "/v2/monitoring/alerts/{uuid}" => "alert-policy-delete", "Delete a monitoring alert policy",
        params: [POLICY_ID]),
];
