//! Load balancers, firewalls, DNS, certificates, VPCs and IP addressing

use super::spec::{tool, Param, ParamKind as K, ToolSpec, PAGE, PER_PAGE};

const LB_ID: Param = Param::path("id", "Load balancer ID");
const FIREWALL_ID: Param = Param::path("id", "Firewall ID");
const DOMAIN: Param = Param::path("domain_name", "Domain name, e.g. example.com");
const CERT_ID: Param = Param::path("id", "Certificate ID");
const VPC_ID: Param = Param::path("id", "VPC ID");
const PEERING_ID: Param = Param::path("id", "VPC peering ID");
const RESERVED_IP: Param = Param::path("ip", "Reserved IP address");
const PREFIX_ID: Param = Param::path("uuid", "BYOIP prefix UUID");

pub static LOAD_BALANCER_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/load_balancers" => "lb-list", "List load balancers",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/load_balancers/{id}" => "lb-get", "Get a load balancer",
        params: [LB_ID]),
    tool!(Post "/v2/load_balancers" => "lb-create", "Create a load balancer",
        params: [
            Param::body("name", K::String, "Load balancer name").required(),
            Param::body("region", K::String, "Region slug").required(),
            Param::body("forwarding_rules", K::Array, "Forwarding rules (entry/target protocol and port)").required(),
            Param::body("droplet_ids", K::Array, "Droplets to balance"),
            Param::body("tag", K::String, "Balance droplets with this tag instead"),
            Param::body("health_check", K::Object, "Health check settings"),
            Param::body("size_unit", K::Integer, "Number of nodes"),
            Param::body("vpc_uuid", K::String, "VPC to place the load balancer in"),
        ]),
    tool!(Delete "/v2/load_balancers/{id}" => "lb-delete", "Delete a load balancer",
        params: [LB_ID]),
    tool!(Post "/v2/load_balancers/{id}/droplets" => "lb-add-droplets", "Add droplets to a load balancer",
        params: [LB_ID, Param::body("droplet_ids", K::Array, "Droplet IDs").required()]),
    tool!(Delete "/v2/load_balancers/{id}/droplets" => "lb-remove-droplets", "Remove droplets from a load balancer",
        params: [LB_ID, Param::body("droplet_ids", K::Array, "Droplet IDs").required()]),
    tool!(Post "/v2/load_balancers/{id}/forwarding_rules" => "lb-add-forwarding-rules", "Add forwarding rules to a load balancer",
        params: [LB_ID, Param::body("forwarding_rules", K::Array, "Forwarding rules").required()]),
];

pub static FIREWALL_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/firewalls" => "firewall-list", "List cloud firewalls",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/firewalls/{id}" => "firewall-get", "Get a cloud firewall",
        params: [FIREWALL_ID]),
    tool!(Post "/v2/firewalls" => "firewall-create", "Create a cloud firewall",
        params: [
            Param::body("name", K::String, "Firewall name").required(),
            Param::body("inbound_rules", K::Array, "Inbound rules"),
            Param::body("outbound_rules", K::Array, "Outbound rules"),
            Param::body("droplet_ids", K::Array, "Droplets to protect"),
            Param::body("tags", K::Array, "Protect droplets with these tags"),
        ]),
    tool!(Delete "/v2/firewalls/{id}" => "firewall-delete", "Delete a cloud firewall",
        params: [FIREWALL_ID]),
    tool!(Post "/v2/firewalls/{id}/rules" => "firewall-add-rules", "Add rules to a cloud firewall",
        params: [
            FIREWALL_ID,
            Param::body("inbound_rules", K::Array, "Inbound rules"),
            Param::body("outbound_rules", K::Array, "Outbound rules"),
        ]),
    tool!(Delete "/v2/firewalls/{id}/rules" => "firewall-remove-rules", "Remove rules from a cloud firewall",
        params: [
            FIREWALL_ID,
            Param::body("inbound_rules", K::Array, "Inbound rules"),
            Param::body("outbound_rules", K::Array, "Outbound rules"),
        ]),
    tool!(Post "/v2/firewalls/{id}/droplets" => "firewall-add-droplets", "Attach droplets to a cloud firewall",
        params: [FIREWALL_ID, Param::body("droplet_ids", K::Array, "Droplet IDs").required()]),
];

pub static DOMAIN_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/domains" => "domain-list", "List DNS domains",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/domains/{domain_name}" => "domain-get", "Get a DNS domain",
        params: [DOMAIN]),
    tool!(Post "/v2/domains" => "domain-create", "Add a domain to DNS management",
        params: [
            Param::body("name", K::String, "Domain name").required(),
            Param::body("ip_address", K::String, "Create an A record for the apex pointing here"),
        ]),
    tool!(Delete "/v2/domains/{domain_name}" => "domain-delete", "Remove a domain",
        params: [DOMAIN]),
    tool!(Get "/v2/domains/{domain_name}/records" => "domain-record-list", "List records of a domain",
        params: [
            DOMAIN,
            Param::query("type", K::String, "Only records of this type, e.g. A"),
            Param::query("name", K::String, "Only records with this fully qualified name"),
            PAGE, PER_PAGE,
        ]),
    tool!(Post "/v2/domains/{domain_name}/records" => "domain-record-create", "Create a DNS record",
        params: [
            DOMAIN,
            Param::body("type", K::String, "Record type (A, AAAA, CNAME, MX, TXT, ...)").required(),
            Param::body("name", K::String, "Host name, @ for the apex").required(),
            Param::body("data", K::String, "Record value").required(),
            Param::body("ttl", K::Integer, "Time to live in seconds"),
            Param::body("priority", K::Integer, "Priority for MX/SRV"),
        ]),
    tool!(Delete "/v2/domains/{domain_name}/records/{record_id}" => "domain-record-delete", "Delete a DNS record",
        params: [DOMAIN, Param::path_id("record_id", "Record ID")]),
];

pub static CERTIFICATE_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/certificates" => "certificate-list", "List TLS certificates",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/certificates/{id}" => "certificate-get", "Get a TLS certificate",
        params: [CERT_ID]),
    tool!(Post "/v2/certificates" => "certificate-create", "Upload a custom certificate or request a Let's Encrypt one",
        params: [
            Param::body("name", K::String, "Certificate name").required(),
            Param::body("type", K::String, "custom or lets_encrypt"),
            Param::body("dns_names", K::Array, "Domains for a Let's Encrypt certificate"),
            Param::body("private_key", K::String, "PEM private key (custom)"),
            Param::body("leaf_certificate", K::String, "PEM certificate (custom)"),
            Param::body("certificate_chain", K::String, "PEM chain (custom)"),
        ]),
    tool!(Delete "/v2/certificates/{id}" => "certificate-delete", "Delete a TLS certificate",
        params: [CERT_ID]),
];

pub static VPC_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/vpcs" => "vpc-list", "List VPCs",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/vpcs/{id}" => "vpc-get", "Get a VPC",
        params: [VPC_ID]),
    tool!(Post "/v2/vpcs" => "vpc-create", "Create a VPC",
        params: [
            Param::body("name", K::String, "VPC name").required(),
            Param::body("region", K::String, "Region slug").required(),
            Param::body("ip_range", K::String, "CIDR range, e.g. 10.10.10.0/24"),
            Param::body("description", K::String, "Description"),
        ]),
    tool!(Delete "/v2/vpcs/{id}" => "vpc-delete", "Delete a VPC",
        params: [VPC_ID]),
    tool!(Get "/v2/vpcs/{id}/members" => "vpc-list-members", "List resources in a VPC",
        params: [VPC_ID, Param::query("resource_type", K::String, "Only this resource type"), PAGE, PER_PAGE]),
];

pub static VPC_PEERING_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/vpc_peerings" => "vpc-peering-list", "List VPC peerings",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/vpc_peerings/{id}" => "vpc-peering-get", "Get a VPC peering",
        params: [PEERING_ID]),
    tool!(Post "/v2/vpc_peerings" => "vpc-peering-create", "Peer two VPCs",
        params: [
            Param::body("name", K::String, "Peering name").required(),
            Param::body("vpc_ids", K::Array, "The two VPC IDs to peer").required(),
        ]),
    tool!(Delete "/v2/vpc_peerings/{id}" => "vpc-peering-delete", "Delete a VPC peering",
        params: [PEERING_ID]),
];

pub static RESERVED_IP_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/reserved_ips" => "reserved-ip-list", "List reserved IPs",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/reserved_ips/{ip}" => "reserved-ip-get", "Get a reserved IP",
        params: [RESERVED_IP]),
    tool!(Post "/v2/reserved_ips" => "reserved-ip-create", "Reserve an IP in a region or for a droplet",
        params: [
            Param::body("region", K::String, "Region slug (unassigned IP)"),
            Param::body("droplet_id", K::Integer, "Droplet to assign the IP to"),
        ]),
    tool!(Delete "/v2/reserved_ips/{ip}" => "reserved-ip-delete", "Release a reserved IP",
        params: [RESERVED_IP]),
    tool!(Post "/v2/reserved_ips/{ip}/actions" => "reserved-ip-assign", "Assign a reserved IP to a droplet",
        params: [RESERVED_IP, Param::body("droplet_id", K::Integer, "Droplet ID").required()],
        fixed: ["type" = "assign"]),
    tool!(Post "/v2/reserved_ips/{ip}/actions" => "reserved-ip-unassign", "Unassign a reserved IP",
        params: [RESERVED_IP], fixed: ["type" = "unassign"]),
];

pub static BYOIP_PREFIX_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/byoip_prefixes" => "byoip-prefix-list", "List bring-your-own-IP prefixes",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/byoip_prefixes/{uuid}" => "byoip-prefix-get", "Get a BYOIP prefix",
        params: [PREFIX_ID]),
    tool!(Post "/v2/byoip_prefixes" => "byoip-prefix-create", "Start onboarding a BYOIP prefix",
        params: [
            Param::body("prefix", K::String, "CIDR prefix").required(),
            Param::body("region", K::String, "Region slug").required(),
            Param::body("signature", K::String, "Signed ownership message").required(),
        ]),
    tool!(Delete "/v2/byoip_prefixes/{uuid}" => "byoip-prefix-delete", "Delete a BYOIP prefix",
        params: [PREFIX_ID]),
];
