//! The generated OpenAPI document.

use serde::Serialize;
use utoipa::openapi::info::Info;
use utoipa::openapi::path::{Operation, PathItem, Paths};
use utoipa::openapi::schema::Components;
use utoipa::openapi::server::Server;

use crate::error::{GeneratorError, Result};

/// OpenAPI version the documents declare.
///
/// Downstream tooling for the API gateway only reads 3.0.x documents.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// HTTP method of a generated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read-only call.
    Get,
    /// State-changing call.
    Post,
}

impl Method {
    /// Lower-case method name as used as an OpenAPI path item key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }

    /// Wraps an operation into a path item under this method.
    #[must_use]
    pub fn path_item(self, operation: Operation) -> PathItem {
        let mut item = PathItem::default();
        match self {
            Self::Get => item.get = Some(operation),
            Self::Post => item.post = Some(operation),
        }
        item
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete OpenAPI document: metadata, servers, paths and components.
#[derive(Debug, Clone, Serialize)]
pub struct SpecDocument {
    /// OpenAPI version string.
    pub openapi: String,

    /// Title, version, description and contact metadata.
    pub info: Info,

    /// Servers the API is reachable on.
    pub servers: Vec<Server>,

    /// Resource path to path item, in insertion order.
    pub paths: Paths,

    /// Reusable schemas and security schemes.
    pub components: Components,
}

impl SpecDocument {
    /// Creates a document with no paths.
    #[must_use]
    pub fn new(info: Info, servers: Vec<Server>, components: Components) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info,
            servers,
            paths: Paths::new(),
            components,
        }
    }

    /// Inserts a path item, replacing any previous item at the same path.
    ///
    /// A replaced path keeps its original position in the document.
    pub fn insert_path(&mut self, path: impl Into<String>, item: PathItem) -> Option<PathItem> {
        self.paths.paths.insert(path.into(), item)
    }

    /// Number of paths in the document.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.paths.len()
    }

    /// Iterates over the document's paths in order.
    pub fn path_names(&self) -> impl Iterator<Item = &str> {
        self.paths.paths.keys().map(String::as_str)
    }

    /// Looks up the operation registered for `method` at `path`.
    #[must_use]
    pub fn operation(&self, path: &str, method: Method) -> Option<&Operation> {
        let item = self.paths.paths.get(path)?;
        match method {
            Method::Get => item.get.as_ref(),
            Method::Post => item.post.as_ref(),
        }
    }

    /// Iterates mutably over every operation of every path.
    pub fn operations_mut(&mut self) -> impl Iterator<Item = &mut Operation> {
        self.paths.paths.values_mut().flat_map(|item| {
            [
                &mut item.get,
                &mut item.put,
                &mut item.post,
                &mut item.delete,
                &mut item.options,
                &mut item.head,
                &mut item.patch,
                &mut item.trace,
            ]
            .into_iter()
            .filter_map(Option::as_mut)
        })
    }

    /// Serializes the document as JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Serialize`] if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(GeneratorError::Serialize)
    }

    /// Converts the document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Serialize`] if serialization fails.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(GeneratorError::Serialize)
    }
}
