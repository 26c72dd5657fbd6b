//! One generation run: load → build → localize → write.

use std::path::PathBuf;

use tracing::{info, info_span};

use crate::abi::ContractAbi;
use crate::builder::build_document;
use crate::config::GeneratorConfig;
use crate::document::SpecDocument;
use crate::error::Result;
use crate::loader::{AbiLoader, SkippedContract};
use crate::localize::SPANISH;
use crate::writer::write_documents;

/// Summary of a completed run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Contracts that made it into the documents.
    pub contracts: Vec<String>,
    /// Contracts that were skipped, with the reason.
    pub skipped: Vec<SkippedContract>,
    /// Number of paths in each document, auxiliary endpoints included.
    pub paths: usize,
    /// Files written, English first.
    pub written: Vec<PathBuf>,
}

/// English and Spanish documents for the same contracts.
#[derive(Debug, Clone)]
pub struct GeneratedDocuments {
    /// The English document.
    pub english: SpecDocument,
    /// The Spanish copy.
    pub localized: SpecDocument,
}

impl GeneratedDocuments {
    /// Builds both documents from already-loaded contracts.
    #[must_use]
    pub fn build(contracts: &[ContractAbi], config: &GeneratorConfig) -> Self {
        let english = build_document(contracts, config.function_case);
        let localized = SPANISH.apply(&english);
        Self { english, localized }
    }
}

/// Runs the whole pipeline for `config`.
///
/// Unreadable artifacts are skipped; only output failures abort the run.
///
/// # Errors
///
/// Returns an output error from [`write_documents`].
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let _span = info_span!("generate", output_dir = %config.output_dir.display()).entered();
    info!("Generating OpenAPI specification");

    let loader = AbiLoader::new(&config.abi_dir, &config.artifact_extension);
    let loaded = loader.load_all(&config.contracts);

    let documents = GeneratedDocuments::build(&loaded.contracts, config);
    let written = write_documents(
        &config.output_dir,
        &[
            (config.english_file.as_str(), &documents.english),
            (config.localized_file.as_str(), &documents.localized),
        ],
    )?;

    info!(files = written.len(), "OpenAPI specifications generated");

    Ok(GenerationReport {
        contracts: loaded.contracts.into_iter().map(|c| c.name).collect(),
        skipped: loaded.skipped,
        paths: documents.english.path_count(),
        written,
    })
}
