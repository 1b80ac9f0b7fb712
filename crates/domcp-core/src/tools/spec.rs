//! Declarative tool definitions
//!
//! Every DigitalOcean tool is one REST call: a method, a path template with
//! `{placeholders}`, and a set of parameters that land in the path, the query
//! string or the JSON body. A `ToolSpec` describes that call; the generic
//! handler in `handler.rs` executes it.

use std::collections::BTreeSet;

use serde_json::{json, Map, Value};

use super::error::ToolError;
use crate::client::{ApiRequest, ClientError, ClientResult, HttpMethod};

/// JSON type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamKind {
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
            ParamKind::Object => "object",
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Integer => value.is_i64() || value.is_u64(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::Array => value.is_array(),
            ParamKind::Object => value.is_object(),
        }
    }
}

/// Where a parameter goes in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
}

impl Param {
    /// Required string path segment
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Path,
            required: true,
            description,
        }
    }

    /// Required numeric path segment
    pub const fn path_id(name: &'static str, description: &'static str) -> Self {
        Self {
            kind: ParamKind::Integer,
            ..Self::path(name, description)
        }
    }

    /// Optional query parameter
    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            location: ParamLocation::Query,
            required: false,
            description,
        }
    }

    /// Optional body field
    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            location: ParamLocation::Body,
            required: false,
            description,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

pub const PAGE: Param = Param::query("page", ParamKind::Integer, "Page number, starting at 1");
pub const PER_PAGE: Param = Param::query("per_page", ParamKind::Integer, "Items per page (max 200)");

/// One tool = one API call
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Path template, e.g. `/v2/droplets/{id}/actions`
    pub path: &'static str,
    pub params: &'static [Param],
    /// Constant body fields, e.g. the action `type`
    pub fixed: &'static [(&'static str, &'static str)],
}

/// Builds a `ToolSpec` literal
///
/// Expands to a struct literal so the parameter slices are promoted to
/// `'static` inside `static` tables.
macro_rules! tool {
    (
        $method:ident $path:literal => $name:literal, $desc:literal
        $(, params: [$($param:expr),* $(,)?])?
        $(, fixed: [$($key:literal = $val:literal),* $(,)?])?
        $(,)?
    ) => {
        $crate::tools::ToolSpec {
            name: $name,
            description: $desc,
            method: $crate::client::HttpMethod::$method,
            path: $path,
            params: &[$($($param),*)?],
            fixed: &[$($(($key, $val)),*)?],
        }
    };
}
pub(crate) use tool;

/// Names of the `{placeholders}` in a path template, in order
fn placeholders(path: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

/// Render a scalar argument for a path segment or query string
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Option<Vec<String>> = items.iter().map(scalar_to_string).collect();
            parts.map(|p| p.join(","))
        }
        _ => None,
    }
}

/// Percent-encoded path segment
///
/// `None` for empty values, `.` and `..`, and anything that is not a scalar.
fn path_segment(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    match raw.as_str() {
        "" | "." | ".." => None,
        _ => Some(urlencoding::encode(&raw).into_owned()),
    }
}

impl ToolSpec {
    /// Check the definition is self-consistent
    ///
    /// Every placeholder needs a required path parameter and every path
    /// parameter needs a placeholder; parameter names are unique.
    pub fn validate(&self) -> Result<(), ToolError> {
        if !self.path.starts_with("/v2/") {
            return Err(ToolError::invalid_spec(self.name, format!("path must start with /v2/: {}", self.path)));
        }
        if self.path.matches('{').count() != self.path.matches('}').count() {
            return Err(ToolError::invalid_spec(self.name, "unbalanced braces in path"));
        }

        let mut seen = BTreeSet::new();
        for param in self.params {
            if !seen.insert(param.name) {
                return Err(ToolError::invalid_spec(self.name, format!("parameter {} declared twice", param.name)));
            }
        }

        let in_path: BTreeSet<&str> = placeholders(self.path).into_iter().collect();
        for name in &in_path {
            let declared = self
                .params
                .iter()
                .any(|p| p.name == *name && p.location == ParamLocation::Path && p.required);
            if !declared {
                return Err(ToolError::invalid_spec(self.name, format!("placeholder {{{}}} has no required path parameter", name)));
            }
        }
        for param in self.params.iter().filter(|p| p.location == ParamLocation::Path) {
            if !in_path.contains(param.name) {
                return Err(ToolError::invalid_spec(self.name, format!("path parameter {} missing from path", param.name)));
            }
        }
        for (key, _) in self.fixed {
            if seen.contains(key) {
                return Err(ToolError::invalid_spec(self.name, format!("fixed field {} shadows a parameter", key)));
            }
        }
        Ok(())
    }

    /// JSON Schema for the tool's arguments
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in self.params {
            properties.insert(
                param.name.to_string(),
                json!({ "type": param.kind.json_type(), "description": param.description }),
            );
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// Turn call arguments into a request
    ///
    /// Unknown arguments are ignored; missing required ones and type
    /// mismatches are `ClientError::InvalidArgument`.
    pub fn build_request(&self, args: &Value) -> ClientResult<ApiRequest> {
        let empty = Map::new();
        let args = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => return Err(ClientError::invalid_argument("arguments must be a JSON object")),
        };

        let mut path = self.path.to_string();
        let mut query = Vec::new();
        let mut body = Map::new();

        for param in self.params {
            let value = match args.get(param.name) {
                Some(Value::Null) | None if param.required => {
                    return Err(ClientError::invalid_argument(format!("{} is required", param.name)));
                }
                Some(Value::Null) | None => continue,
                Some(value) => value,
            };
            // Path segments take any scalar; agents often quote numeric ids
            let kind_ok = param.kind.accepts(value)
                || (param.location == ParamLocation::Path && (value.is_string() || value.is_number()));
            if !kind_ok {
                return Err(ClientError::invalid_argument(format!(
                    "{} must be of type {}",
                    param.name,
                    param.kind.json_type()
                )));
            }

            match param.location {
                ParamLocation::Path => {
                    let segment = path_segment(value)
                        .ok_or_else(|| ClientError::invalid_argument(format!("{} is not a valid path segment", param.name)))?;
                    path = path.replace(&format!("{{{}}}", param.name), &segment);
                }
                ParamLocation::Query => {
                    if let Some(rendered) = scalar_to_string(value) {
                        query.push((param.name.to_string(), rendered));
                    }
                }
                ParamLocation::Body => {
                    body.insert(param.name.to_string(), value.clone());
                }
            }
        }
        for (key, value) in self.fixed {
            body.insert(key.to_string(), Value::String(value.to_string()));
        }

        let mut request = query
            .into_iter()
            .fold(ApiRequest::new(self.method, path), |request, (key, value)| request.with_query(key, value));
        if !body.is_empty() {
            request = request.with_body(Value::Object(body));
        }
        Ok(request)
    }
}
