//! Unified error types for the generator.
//!
//! Failures fall into two tiers:
//!
//! - **Recoverable**: a single contract artifact is missing or malformed. The
//!   loader logs a warning and skips that contract.
//! - **Fatal**: the output directory cannot be created or a document cannot be
//!   written. The run stops and the binary exits with a non-zero status.
//!
//! Configuration problems are reported separately so the binary can tell a
//! usage error apart from a failed generation.
//!
//! # Example
//!
//! ```rust
//! use vcop_openapi_core::error::{GeneratorError, Result};
//! use std::path::PathBuf;
//!
//! fn require_dir(path: &PathBuf) -> Result<()> {
//!     if !path.is_dir() {
//!         return Err(GeneratorError::InvalidConfig(format!(
//!             "{} is not a directory",
//!             path.display()
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for all generator operations.
#[derive(Debug, Error)]
pub enum GeneratorError {
    // =========================================================================
    // ARTIFACT ERRORS (recoverable)
    // =========================================================================
    /// The contract artifact could not be read from disk.
    #[error("Could not read ABI for {contract} at {}: {source}", .path.display())]
    ArtifactRead {
        /// Contract whose artifact was requested.
        contract: String,
        /// Artifact path that was tried.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The contract artifact was read but is not a valid artifact document.
    #[error("Could not parse ABI for {contract} at {}: {source}", .path.display())]
    ArtifactParse {
        /// Contract whose artifact was requested.
        contract: String,
        /// Artifact path that was parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    // =========================================================================
    // OUTPUT ERRORS (fatal)
    // =========================================================================
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A generated document could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A generated document could not be serialized.
    #[error("Failed to serialize OpenAPI document: {0}")]
    Serialize(#[source] serde_json::Error),

    // =========================================================================
    // CONFIGURATION ERRORS
    // =========================================================================
    /// The configuration sources could not be loaded or merged.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// The configuration was loaded but contains invalid values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The effective configuration could not be rendered as TOML.
    #[error("Failed to render configuration: {0}")]
    RenderConfig(#[from] toml::ser::Error),
}

/// A specialized [`Result`] type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

impl GeneratorError {
    /// Returns `true` if the run can continue after this error.
    ///
    /// Only per-contract artifact failures are recoverable; the affected
    /// contract is left out of the generated paths.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ArtifactRead { .. } | Self::ArtifactParse { .. })
    }

    /// Returns `true` if this error is related to configuration.
    #[inline]
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidConfig(_) | Self::RenderConfig(_)
        )
    }

    /// Returns `true` if this error happened while producing output files.
    #[inline]
    #[must_use]
    pub const fn is_output_error(&self) -> bool {
        matches!(
            self,
            Self::CreateOutputDir { .. } | Self::WriteOutput { .. } | Self::Serialize(_)
        )
    }

    /// Process exit status the binary should use for this error.
    ///
    /// `2` for configuration problems, `1` for everything else.
    #[inline]
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }

    /// Returns a machine-readable error code.
    #[inline]
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ArtifactRead { .. } => "ARTIFACT_READ_ERROR",
            Self::ArtifactParse { .. } => "ARTIFACT_PARSE_ERROR",
            Self::CreateOutputDir { .. } => "CREATE_OUTPUT_DIR_ERROR",
            Self::WriteOutput { .. } => "WRITE_OUTPUT_ERROR",
            Self::Serialize(_) => "SERIALIZE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::RenderConfig(_) => "RENDER_CONFIG_ERROR",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
