//! Droplets, droplet actions, images and sizes

use super::spec::{tool, Param, ParamKind as K, ToolSpec, PAGE, PER_PAGE};

const DROPLET_ID: Param = Param::path_id("id", "Droplet ID");
const IMAGE_ID: Param = Param::path_id("id", "Image ID");

/// Core CRUD and power management
pub static DROPLET_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/droplets" => "droplet-list", "List droplets, optionally filtered by tag",
        params: [Param::query("tag_name", K::String, "Only droplets carrying this tag"), PAGE, PER_PAGE]),
    tool!(Get "/v2/droplets/{id}" => "droplet-get", "Get a droplet by ID",
        params: [DROPLET_ID]),
    tool!(Post "/v2/droplets" => "droplet-create", "Create a new droplet",
        params: [
            Param::body("name", K::String, "Droplet name").required(),
            Param::body("region", K::String, "Region slug, e.g. nyc3").required(),
            Param::body("size", K::String, "Size slug, e.g. s-1vcpu-1gb").required(),
            Param::body("image", K::String, "Image slug or ID").required(),
            Param::body("ssh_keys", K::Array, "SSH key IDs or fingerprints"),
            Param::body("backups", K::Boolean, "Enable automated backups"),
            Param::body("ipv6", K::Boolean, "Enable IPv6"),
            Param::body("monitoring", K::Boolean, "Install the monitoring agent"),
            Param::body("tags", K::Array, "Tags to apply"),
            Param::body("vpc_uuid", K::String, "VPC to place the droplet in"),
            Param::body("user_data", K::String, "Cloud-init user data"),
        ]),
    tool!(Delete "/v2/droplets/{id}" => "droplet-delete", "Delete a droplet",
        params: [DROPLET_ID]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-power-on", "Power on a droplet",
        params: [DROPLET_ID], fixed: ["type" = "power_on"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-power-off", "Hard power off a droplet",
        params: [DROPLET_ID], fixed: ["type" = "power_off"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-shutdown", "Gracefully shut down a droplet",
        params: [DROPLET_ID], fixed: ["type" = "shutdown"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-reboot", "Reboot a droplet",
        params: [DROPLET_ID], fixed: ["type" = "reboot"]),
    tool!(Get "/v2/droplets/{id}/neighbors" => "droplet-neighbors", "List droplets on the same physical host",
        params: [DROPLET_ID]),
];

/// Lifecycle actions beyond power
pub static DROPLET_ACTION_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/droplets/{id}/actions" => "droplet-action-list", "List actions performed on a droplet",
        params: [DROPLET_ID, PAGE, PER_PAGE]),
    tool!(Get "/v2/droplets/{id}/actions/{action_id}" => "droplet-action-get", "Get a droplet action",
        params: [DROPLET_ID, Param::path_id("action_id", "Action ID")]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-power-cycle", "Power cycle a droplet",
        params: [DROPLET_ID], fixed: ["type" = "power_cycle"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-resize", "Resize a droplet",
        params: [
            DROPLET_ID,
            Param::body("size", K::String, "Target size slug").required(),
            Param::body("disk", K::Boolean, "Also resize the disk (irreversible)"),
        ],
        fixed: ["type" = "resize"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-rebuild", "Rebuild a droplet from an image",
        params: [DROPLET_ID, Param::body("image", K::String, "Image slug or ID").required()],
        fixed: ["type" = "rebuild"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-rename", "Rename a droplet",
        params: [DROPLET_ID, Param::body("name", K::String, "New name").required()],
        fixed: ["type" = "rename"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-snapshot", "Take a snapshot of a droplet",
        params: [DROPLET_ID, Param::body("name", K::String, "Snapshot name")],
        fixed: ["type" = "snapshot"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-enable-backups", "Enable backups on a droplet",
        params: [DROPLET_ID], fixed: ["type" = "enable_backups"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-disable-backups", "Disable backups on a droplet",
        params: [DROPLET_ID], fixed: ["type" = "disable_backups"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-password-reset", "Reset the root password of a droplet",
        params: [DROPLET_ID], fixed: ["type" = "password_reset"]),
    tool!(Post "/v2/droplets/{id}/actions" => "droplet-enable-ipv6", "Enable IPv6 on a droplet",
        params: [DROPLET_ID], fixed: ["type" = "enable_ipv6"]),
];

pub static IMAGE_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/images" => "image-list", "List images",
        params: [
            Param::query("type", K::String, "distribution or application"),
            Param::query("private", K::Boolean, "Only the account's own images"),
            PAGE, PER_PAGE,
        ]),
    tool!(Get "/v2/images/{id}" => "image-get", "Get an image by ID",
        params: [IMAGE_ID]),
    tool!(Put "/v2/images/{id}" => "image-update", "Update an image's name or description",
        params: [
            IMAGE_ID,
            Param::body("name", K::String, "New name"),
            Param::body("description", K::String, "New description"),
        ]),
    tool!(Delete "/v2/images/{id}" => "image-delete", "Delete a snapshot or custom image",
        params: [IMAGE_ID]),
];

pub static IMAGE_ACTION_TOOLS: &[ToolSpec] = &[
    tool!(Post "/v2/images/{id}/actions" => "image-transfer", "Transfer an image to another region",
        params: [IMAGE_ID, Param::body("region", K::String, "Destination region slug").required()],
        fixed: ["type" = "transfer"]),
    tool!(Post "/v2/images/{id}/actions" => "image-convert", "Convert a backup to a snapshot",
        params: [IMAGE_ID], fixed: ["type" = "convert"]),
    tool!(Get "/v2/images/{id}/actions/{action_id}" => "image-action-get", "Get an image action",
        params: [IMAGE_ID, Param::path_id("action_id", "Action ID")]),
];

pub static SIZE_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/sizes" => "size-list", "List droplet sizes with pricing",
        params: [PAGE, PER_PAGE]),
];
