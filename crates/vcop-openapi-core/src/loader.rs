//! Reads compiled contract artifacts from the build output directory.
//!
//! Artifacts live at `<abi_dir>/<Contract>.<ext>/<Contract>.json`, the layout
//! Foundry writes under `out/`. A missing or malformed artifact never stops
//! the run: the contract is skipped and a warning is logged.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::abi::{ContractAbi, ContractArtifact};
use crate::error::{GeneratorError, Result};

/// A contract that could not be loaded, and why.
#[derive(Debug)]
pub struct SkippedContract {
    /// Contract name from the allowlist.
    pub name: String,
    /// The recoverable error that caused the skip.
    pub error: GeneratorError,
}

/// Outcome of loading the allowlisted contracts.
#[derive(Debug, Default)]
pub struct LoadedContracts {
    /// Successfully parsed contracts, in allowlist order.
    pub contracts: Vec<ContractAbi>,
    /// Contracts that were skipped.
    pub skipped: Vec<SkippedContract>,
}

/// Loads contract ABIs from a build output directory.
#[derive(Debug, Clone)]
pub struct AbiLoader {
    abi_dir: PathBuf,
    extension: String,
}

impl AbiLoader {
    /// Creates a loader rooted at `abi_dir`, expecting artifacts in
    /// `<name>.<extension>` subdirectories.
    pub fn new(abi_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            abi_dir: abi_dir.into(),
            extension: extension.into(),
        }
    }

    /// Directory artifacts are read from.
    #[must_use]
    pub fn abi_dir(&self) -> &Path {
        &self.abi_dir
    }

    /// Conventional artifact path for `contract`.
    #[must_use]
    pub fn artifact_path(&self, contract: &str) -> PathBuf {
        self.abi_dir
            .join(format!("{contract}.{}", self.extension))
            .join(format!("{contract}.json"))
    }

    /// Reads and parses the artifact of a single contract.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ArtifactRead`] if the file cannot be read and
    /// [`GeneratorError::ArtifactParse`] if it is not an artifact with an
    /// `abi` array.
    pub fn load_contract(&self, contract: &str) -> Result<ContractAbi> {
        let path = self.artifact_path(contract);

        let content =
            std::fs::read_to_string(&path).map_err(|source| GeneratorError::ArtifactRead {
                contract: contract.to_owned(),
                path: path.clone(),
                source,
            })?;

        let artifact: ContractArtifact =
            serde_json::from_str(&content).map_err(|source| GeneratorError::ArtifactParse {
                contract: contract.to_owned(),
                path,
                source,
            })?;

        Ok(ContractAbi::new(contract, artifact.abi))
    }

    /// Loads every contract in `names`, skipping the ones that fail.
    pub fn load_all<S: AsRef<str>>(&self, names: &[S]) -> LoadedContracts {
        let mut loaded = LoadedContracts::default();

        for name in names {
            let name = name.as_ref();
            match self.load_contract(name) {
                Ok(contract) => {
                    info!(
                        contract = name,
                        items = contract.items.len(),
                        "Loaded contract ABI"
                    );
                    loaded.contracts.push(contract);
                }
                Err(error) => {
                    warn!(contract = name, error = %error, "Skipping contract");
                    loaded.skipped.push(SkippedContract {
                        name: name.to_owned(),
                        error,
                    });
                }
            }
        }

        info!(
            abi_dir = %self.abi_dir().display(),
            loaded = loaded.contracts.len(),
            skipped = loaded.skipped.len(),
            "Found contracts"
        );
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ORACLE: &str = r#"{
        "abi": [
            {
                "type": "function",
                "name": "getPrice",
                "inputs": [{ "name": "token", "type": "address" }],
                "outputs": [{ "name": "", "type": "uint256" }],
                "stateMutability": "view"
            }
        ]
    }"#;

    fn write_artifact(dir: &Path, contract: &str, content: &str) {
        let artifact_dir = dir.join(format!("{contract}.sol"));
        std::fs::create_dir_all(&artifact_dir).unwrap();
        std::fs::write(artifact_dir.join(format!("{contract}.json")), content).unwrap();
    }

    #[test]
    fn test_artifact_path_layout() {
        let loader = AbiLoader::new("out", "sol");
        assert_eq!(loader.abi_dir(), Path::new("out"));
        assert_eq!(
            loader.artifact_path("VCOPOracle"),
            PathBuf::from("out/VCOPOracle.sol/VCOPOracle.json")
        );
    }

    #[test]
    fn test_load_contract() {
        let temp_dir = TempDir::new().unwrap();
        write_artifact(temp_dir.path(), "VCOPOracle", ORACLE);

        let loader = AbiLoader::new(temp_dir.path(), "sol");
        let contract = loader.load_contract("VCOPOracle").unwrap();

        assert_eq!(contract.name, "VCOPOracle");
        assert_eq!(contract.items.len(), 1);
        assert_eq!(contract.items[0].name, "getPrice");
    }

    #[test]
    fn test_missing_artifact_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let loader = AbiLoader::new(temp_dir.path(), "sol");

        let err = loader.load_contract("VCOPFlashLoan").unwrap_err();
        assert!(matches!(err, GeneratorError::ArtifactRead { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_malformed_artifacts_are_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        write_artifact(temp_dir.path(), "Broken", "{ not json");
        write_artifact(temp_dir.path(), "NoAbi", r#"{ "bytecode": "0x" }"#);

        let loader = AbiLoader::new(temp_dir.path(), "sol");
        for name in ["Broken", "NoAbi"] {
            let err = loader.load_contract(name).unwrap_err();
            assert!(matches!(err, GeneratorError::ArtifactParse { .. }), "{name}");
        }
    }

    #[test]
    fn test_load_all_skips_failures_and_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        write_artifact(temp_dir.path(), "VCOPOracle", ORACLE);
        write_artifact(temp_dir.path(), "VCOPHealthManager", r#"{ "abi": [] }"#);
        write_artifact(temp_dir.path(), "VCOPFlashLoan", "[]");

        let loader = AbiLoader::new(temp_dir.path(), "sol");
        let loaded = loader.load_all(&[
            "VCOPHealthManager",
            "VCOPCollateralized",
            "VCOPFlashLoan",
            "VCOPOracle",
        ]);

        let names: Vec<&str> = loaded.contracts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["VCOPHealthManager", "VCOPOracle"]);

        let skipped: Vec<&str> = loaded.skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skipped, vec!["VCOPCollateralized", "VCOPFlashLoan"]);
        assert!(loaded.skipped.iter().all(|s| s.error.is_recoverable()));
    }

    #[test]
    fn test_load_all_from_missing_directory_is_empty() {
        let loader = AbiLoader::new("/nonexistent/build/out", "sol");
        let loaded = loader.load_all(&["VCOPOracle"]);
        assert!(loaded.contracts.is_empty());
        assert_eq!(loaded.skipped.len(), 1);
    }
}
