//! Generator configuration.
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults (Foundry's `out/` directory, `docs/api/` output and
//!    the protocol's core contracts)
//! 2. A TOML configuration file
//! 3. Environment variables prefixed with `VCOP_OPENAPI_`
//!
//! Command-line flags are applied on top by the binary.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::builder::FunctionCase;
use crate::error::{GeneratorError, Result};

/// Prefix of environment variables read by [`GeneratorConfig::load`].
pub const ENV_PREFIX: &str = "VCOP_OPENAPI";

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "vcop-openapi.toml";

/// Contracts documented by default.
pub const DEFAULT_CONTRACTS: &[&str] = &[
    "VCOPCollateralized",
    "VCOPCollateralManager",
    "VCOPHealthManager",
    "VCOPLiquidationEngine",
    "VCOPFlashLoan",
    "VCOPOracle",
];

static CONTRACT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid contract name regex"));

/// Returns `true` if `name` is a valid Solidity identifier.
#[must_use]
pub fn is_valid_contract_name(name: &str) -> bool {
    CONTRACT_NAME.is_match(name)
}

/// Effective generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Build output directory holding the compiled artifacts.
    pub abi_dir: PathBuf,

    /// Extension of the per-contract artifact directory (`<Name>.<ext>/`).
    pub artifact_extension: String,

    /// Directory the documents are written to.
    pub output_dir: PathBuf,

    /// Contracts to document, in output order.
    pub contracts: Vec<String>,

    /// File name of the English document.
    pub english_file: String,

    /// File name of the Spanish document.
    pub localized_file: String,

    /// Casing of function names in generated paths.
    pub function_case: FunctionCase,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            abi_dir: PathBuf::from("out"),
            artifact_extension: "sol".to_string(),
            output_dir: PathBuf::from("docs/api"),
            contracts: DEFAULT_CONTRACTS.iter().map(ToString::to_string).collect(),
            english_file: "openapi-en.json".to_string(),
            localized_file: "openapi-es.json".to_string(),
            function_case: FunctionCase::default(),
        }
    }
}

impl GeneratorConfig {
    /// Loads the configuration from defaults, an optional file and the
    /// environment.
    ///
    /// With `path` set the file must exist. Without it,
    /// [`DEFAULT_CONFIG_FILE`] is used if present in the working directory.
    ///
    /// The merged result is not validated. Call
    /// [`GeneratorConfig::validate`] once every layer, command-line flags
    /// included, has been applied.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Config`] if a source cannot be read or
    /// deserialized.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder().add_source(
            Config::try_from(&Self::default()).map_err(GeneratorError::Config)?,
        );

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml)),
            None => builder.add_source(
                File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
            ),
        };

        Ok(builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("contracts"),
            )
            .build()?
            .try_deserialize()?)
    }

    /// Parses a configuration from TOML text layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this type or
    /// validation fails.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::RenderConfig`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks the configuration for values the generator cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] listing every problem found.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        let mut seen = HashSet::new();
        for name in &self.contracts {
            if !is_valid_contract_name(name) {
                problems.push(format!("contract name '{name}' is not a Solidity identifier"));
            } else if !seen.insert(name.as_str()) {
                problems.push(format!("contract '{name}' is listed more than once"));
            }
        }

        if self.artifact_extension.is_empty() || self.artifact_extension.contains(['/', '\\']) {
            problems.push(format!(
                "artifact_extension '{}' must be a non-empty plain extension",
                self.artifact_extension
            ));
        }

        for (key, file) in [
            ("english_file", &self.english_file),
            ("localized_file", &self.localized_file),
        ] {
            if !is_plain_file_name(file) {
                problems.push(format!("{key} '{file}' must be a plain file name"));
            }
        }
        if self.english_file == self.localized_file {
            problems.push("english_file and localized_file must differ".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(GeneratorError::InvalidConfig(problems.join("; ")))
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.abi_dir, PathBuf::from("out"));
        assert_eq!(config.output_dir, PathBuf::from("docs/api"));
        assert_eq!(config.contracts.len(), 6);
        assert_eq!(config.contracts[0], "VCOPCollateralized");
        assert_eq!(config.english_file, "openapi-en.json");
        assert_eq!(config.localized_file, "openapi-es.json");
        assert_eq!(config.function_case, FunctionCase::Lower);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_contract_name_validation() {
        assert!(is_valid_contract_name("VCOPOracle"));
        assert!(is_valid_contract_name("_Impl$2"));
        assert!(!is_valid_contract_name("2Fast"));
        assert!(!is_valid_contract_name("../etc"));
        assert!(!is_valid_contract_name(""));
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = GeneratorConfig::from_toml(
            r#"
            abi_dir = "build/artifacts"
            contracts = ["VCOPOracle"]
            function_case = "preserve"
            "#,
        )
        .unwrap();

        assert_eq!(config.abi_dir, PathBuf::from("build/artifacts"));
        assert_eq!(config.contracts, vec!["VCOPOracle".to_string()]);
        assert_eq!(config.function_case, FunctionCase::Preserve);
        // Untouched keys keep their defaults.
        assert_eq!(config.output_dir, PathBuf::from("docs/api"));
        assert_eq!(config.artifact_extension, "sol");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("generator.toml");
        std::fs::write(&path, "output_dir = \"site/openapi\"\n").unwrap();

        let config = GeneratorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("site/openapi"));
    }

    #[test]
    fn test_load_leaves_validation_to_the_caller() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("generator.toml");
        std::fs::write(&path, "contracts = [\"bad-name\"]\n").unwrap();

        let mut config = GeneratorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.contracts, vec!["bad-name"]);
        assert!(config.validate().unwrap_err().is_config_error());

        config.contracts = vec!["VCOPOracle".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = GeneratorConfig::load(Some(&temp_dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_values_are_reported_together() {
        let config = GeneratorConfig {
            contracts: vec![
                "VCOPOracle".to_string(),
                "VCOPOracle".to_string(),
                "not-valid".to_string(),
            ],
            english_file: "docs/openapi.json".to_string(),
            localized_file: "docs/openapi.json".to_string(),
            ..GeneratorConfig::default()
        };

        let err = config.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("listed more than once"));
        assert!(message.contains("'not-valid'"));
        assert!(message.contains("english_file"));
        assert!(message.contains("must differ"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_function_case_is_rejected() {
        let err = GeneratorConfig::from_toml("function_case = \"upper\"").unwrap_err();
        assert!(matches!(err, GeneratorError::Config(_)));
    }

    #[test]
    fn test_toml_rendering_round_trips() {
        let config = GeneratorConfig {
            contracts: vec!["VCOPOracle".to_string()],
            ..GeneratorConfig::default()
        };
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("function_case = \"lower\""));
        assert_eq!(GeneratorConfig::from_toml(&rendered).unwrap(), config);
    }
}
