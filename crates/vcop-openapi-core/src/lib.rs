//! # vcop-openapi-core
//!
//! Generates OpenAPI documents for the VCOP Protocol from compiled contract
//! ABIs.
//!
//! Every non-`pure` contract function becomes an HTTP operation that a
//! gateway could front: `view` functions as `GET` with query parameters,
//! state-changing functions as `POST` with a JSON body. A few hand-authored
//! endpoints (health, positions, liquidations) are added, and a Spanish copy
//! of the document is produced alongside the English one.
//!
//! ## Architecture
//!
//! - [`abi`] - ABI model read from compiler artifacts
//! - [`loader`] - Artifact discovery and parsing; failures skip a contract
//! - [`types`] - Solidity type to wire type mapping
//! - [`builder`] - ABI item to OpenAPI operation mapping
//! - [`base`] - Static metadata, components and auxiliary endpoints
//! - [`models`] - Payload types behind the fixed component schemas
//! - [`document`] - The generated document
//! - [`localize`] - Spanish post-process
//! - [`writer`] - Output to disk
//! - [`config`] - Layered configuration
//! - [`pipeline`] - One full generation run
//! - [`error`] - Unified error type

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod abi;
pub mod base;
pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod localize;
pub mod models;
pub mod pipeline;
pub mod types;
pub mod writer;

// Re-export primary types for convenience
pub use abi::{ContractAbi, InterfaceItem, ItemKind, Param, StateMutability};
pub use builder::{build_document, FunctionCase, OperationDescriptor};
pub use self::config::{is_valid_contract_name, GeneratorConfig, DEFAULT_CONTRACTS};
pub use document::{Method, SpecDocument, OPENAPI_VERSION};
pub use error::{GeneratorError, Result};
pub use loader::{AbiLoader, LoadedContracts, SkippedContract};
pub use localize::{Localization, SPANISH};
pub use pipeline::{generate, GeneratedDocuments, GenerationReport};
pub use types::WireType;
pub use writer::write_documents;
