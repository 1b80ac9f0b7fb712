//! Account information, billing, SSH keys and account-wide actions

use super::spec::{tool, Param, ParamKind as K, ToolSpec, PAGE, PER_PAGE};

const INVOICE: Param = Param::path("invoice_uuid", "Invoice UUID");
const KEY: Param = Param::path("key_id", "SSH key ID or fingerprint");

pub static ACCOUNT_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/account" => "account-get-information", "Retrieves account information for the current user"),
];

pub static BALANCE_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/customers/my/balance" => "balance-get", "Get balance information for the user account"),
];

pub static BILLING_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/customers/my/billing_history" => "billing-history-list", "List billing history entries",
        params: [PAGE, PER_PAGE]),
];

pub static INVOICE_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/customers/my/invoices" => "invoice-list", "List invoices",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/customers/my/invoices/{invoice_uuid}" => "invoice-get", "Get the line items of an invoice",
        params: [INVOICE, PAGE, PER_PAGE]),
    tool!(Get "/v2/customers/my/invoices/{invoice_uuid}/summary" => "invoice-summary", "Get the summary of an invoice",
        params: [INVOICE]),
];

pub static KEY_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/account/keys" => "key-list", "List SSH keys on the account",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/account/keys/{key_id}" => "key-get", "Get an SSH key",
        params: [KEY]),
    tool!(Post "/v2/account/keys" => "key-create", "Add an SSH public key",
        params: [
            Param::body("name", K::String, "Key name").required(),
            Param::body("public_key", K::String, "Public key in OpenSSH format").required(),
        ]),
    tool!(Put "/v2/account/keys/{key_id}" => "key-update", "Rename an SSH key",
        params: [KEY, Param::body("name", K::String, "New name").required()]),
    tool!(Delete "/v2/account/keys/{key_id}" => "key-delete", "Delete an SSH key",
        params: [KEY]),
];

pub static ACTION_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/actions" => "action-list", "List all actions performed on the account",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/actions/{action_id}" => "action-get", "Get an action",
        params: [Param::path_id("action_id", "Action ID")]),
];
