//! App Platform

use super::spec::{tool, Param, ParamKind as K, ToolSpec, PAGE, PER_PAGE};

const APP_ID: Param = Param::path("id", "App ID");

pub static APP_TOOLS: &[ToolSpec] = &[
    tool!(Get "/v2/apps" => "apps-list", "List App Platform apps",
        params: [PAGE, PER_PAGE]),
    tool!(Get "/v2/apps/{id}" => "apps-get-info", "Get an app",
        params: [APP_ID]),
    tool!(Post "/v2/apps" => "apps-create-app-from-spec", "Create an app from an app spec",
        params: [Param::body("spec", K::Object, "App spec (name, region, services, ...)").required()]),
    tool!(Put "/v2/apps/{id}" => "apps-update", "Replace the spec of an app",
        params: [APP_ID, Param::body("spec", K::Object, "New app spec").required()]),
    tool!(Delete "/v2/apps/{id}" => "apps-delete", "Delete an app",
        params: [APP_ID]),
    tool!(Get "/v2/apps/{id}/deployments" => "apps-deployment-list", "List deployments of an app",
        params: [APP_ID, PAGE, PER_PAGE]),
    tool!(Post "/v2/apps/{id}/deployments" => "apps-deployment-create", "Trigger a new deployment",
        params: [APP_ID, Param::body("force_build", K::Boolean, "Rebuild even if nothing changed")]),
    tool!(Get "/v2/apps/{app_id}/deployments/{deployment_id}" => "apps-deployment-get", "Get a deployment",
        params: [
            Param::path("app_id", "App ID"),
            Param::path("deployment_id", "Deployment ID"),
        ]),
    tool!(Get "/v2/apps/regions" => "apps-list-regions", "List regions App Platform can deploy to"),
];
