//! Request boundary for the item store.
//!
//! Maps HTTP-style requests (method, path, optional JSON body) onto
//! `ItemStore` calls and produces a status code plus JSON body. There is no
//! socket handling here; an HTTP server only needs to translate its own
//! request type into `ApiRequest` and write back the `ApiResponse`.
//!
//! Store failures are logged and reported as an opaque 500; their details
//! never reach the caller.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};
use tracing::{debug, error};

use crate::error::TodoError;
use crate::storage::traits::ItemStore;
use crate::storage::validation::{parse_item_patch, parse_new_item};

/// Default mount point for the item routes.
pub const DEFAULT_MOUNT: &str = "/api/todos";

/// Health check route, always served regardless of the mount.
pub const HEALTH_PATH: &str = "/health";

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

const MSG_TODO_NOT_FOUND: &str = "Todo not found";
const MSG_ROUTE_NOT_FOUND: &str = "Route not found";
const MSG_INTERNAL: &str = "Internal server error";

/// Request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl FromStr for Method {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(TodoError::InvalidInput(format!(
                "Unsupported method '{}' (expected GET, POST, PUT or DELETE)",
                other
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// An incoming request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The outcome of handling a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }

    pub fn no_content() -> Self {
        Self {
            status: STATUS_NO_CONTENT,
            body: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where a path landed after matching.
enum Route<'a> {
    Health,
    Collection,
    Member(&'a str),
    Unknown,
}

/// Routes requests under a mount point to an item store.
#[derive(Debug, Clone)]
pub struct Router {
    mount: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(DEFAULT_MOUNT)
    }
}

impl Router {
    /// Create a router serving items under `mount` (e.g. `/api/todos`).
    pub fn new(mount: impl Into<String>) -> Self {
        let mount = mount.into();
        let trimmed = mount.trim_end_matches('/');
        let mount = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { mount }
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }

    /// Handle one request against `store`.
    pub fn handle(&self, store: &mut dyn ItemStore, request: &ApiRequest) -> ApiResponse {
        debug!(method = %request.method, path = %request.path, "handling request");

        let body = request.body.clone().unwrap_or_else(|| json!({}));
        match (request.method, self.route(&request.path)) {
            (Method::Get, Route::Health) => ApiResponse::json(
                STATUS_OK,
                json!({ "status": "OK", "message": "Todo API is running" }),
            ),
            (Method::Get, Route::Collection) => match store.list_items() {
                Ok(items) => ApiResponse::json(STATUS_OK, json!(items)),
                Err(err) => failure(err),
            },
            (Method::Post, Route::Collection) => {
                let new_item = match parse_new_item(&body) {
                    Ok(new_item) => new_item,
                    Err(err) => return failure(err),
                };
                match store.create_item(&new_item) {
                    Ok(item) => ApiResponse::json(STATUS_CREATED, json!(item)),
                    Err(err) => failure(err),
                }
            }
            (Method::Get, Route::Member(id)) => match store.get_item(id) {
                Ok(Some(item)) => ApiResponse::json(STATUS_OK, json!(item)),
                Ok(None) => ApiResponse::error(STATUS_NOT_FOUND, MSG_TODO_NOT_FOUND),
                Err(err) => failure(err),
            },
            (Method::Put, Route::Member(id)) => {
                let patch = match parse_item_patch(&body) {
                    Ok(patch) => patch,
                    Err(err) => return failure(err),
                };
                match store.update_item(id, &patch) {
                    Ok(Some(item)) => ApiResponse::json(STATUS_OK, json!(item)),
                    Ok(None) => ApiResponse::error(STATUS_NOT_FOUND, MSG_TODO_NOT_FOUND),
                    Err(err) => failure(err),
                }
            }
            (Method::Delete, Route::Member(id)) => match store.delete_item(id) {
                Ok(true) => ApiResponse::no_content(),
                Ok(false) => ApiResponse::error(STATUS_NOT_FOUND, MSG_TODO_NOT_FOUND),
                Err(err) => failure(err),
            },
            _ => ApiResponse::error(STATUS_NOT_FOUND, MSG_ROUTE_NOT_FOUND),
        }
    }

    fn route<'a>(&self, raw_path: &'a str) -> Route<'a> {
        let path = raw_path.split('?').next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if path == HEALTH_PATH {
            return Route::Health;
        }
        if path == self.mount {
            return Route::Collection;
        }
        // A root mount contributes no prefix before the member id.
        let prefix = if self.mount == "/" { "" } else { self.mount.as_str() };
        match path
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Member(id),
            _ => Route::Unknown,
        }
    }
}

/// Map a core error onto a response: input errors are the caller's problem,
/// everything else is an opaque internal error.
fn failure(err: TodoError) -> ApiResponse {
    match err {
        TodoError::InvalidInput(message) => ApiResponse::error(STATUS_BAD_REQUEST, &message),
        other => {
            error!(error = %other, "store operation failed");
            ApiResponse::error(STATUS_INTERNAL_ERROR, MSG_INTERNAL)
        }
    }
}
