//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use vcop_openapi_core::{FunctionCase, GeneratorConfig};

use crate::logging::LogFormat;

/// Generate the VCOP Protocol OpenAPI documents from compiled contract ABIs.
///
/// Settings are read from defaults, then the configuration file, then
/// `VCOP_OPENAPI_*` environment variables; flags given here win over all of
/// them.
#[derive(Debug, Parser)]
#[command(name = "vcop-openapi", version, about)]
pub struct Cli {
    /// Configuration file (TOML). Defaults to `vcop-openapi.toml` in the
    /// working directory when it exists.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build output directory with the compiled artifacts.
    #[arg(long, value_name = "DIR")]
    pub abi_dir: Option<PathBuf>,

    /// Directory the documents are written to.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Contract to document; repeat to list several. Replaces the configured
    /// list.
    #[arg(long = "contract", value_name = "NAME")]
    pub contracts: Vec<String>,

    /// Casing of function names in generated paths.
    #[arg(long, value_enum)]
    pub function_case: Option<CaseArg>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, env = "VCOP_OPENAPI_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

/// `--function-case` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    /// Lower-case function names.
    Lower,
    /// Keep declared casing.
    Preserve,
}

impl From<CaseArg> for FunctionCase {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Lower => Self::Lower,
            CaseArg::Preserve => Self::Preserve,
        }
    }
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply_overrides(&self, config: &mut GeneratorConfig) {
        if let Some(dir) = &self.abi_dir {
            config.abi_dir.clone_from(dir);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if !self.contracts.is_empty() {
            config.contracts.clone_from(&self.contracts);
        }
        if let Some(case) = self.function_case {
            config.function_case = case.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "vcop-openapi",
            "--abi-dir",
            "build/out",
            "--contract",
            "VCOPOracle",
            "--contract",
            "VCOPFlashLoan",
            "--function-case",
            "preserve",
        ]);

        let mut config = GeneratorConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.abi_dir, PathBuf::from("build/out"));
        assert_eq!(config.output_dir, PathBuf::from("docs/api"));
        assert_eq!(config.contracts, vec!["VCOPOracle", "VCOPFlashLoan"]);
        assert_eq!(config.function_case, FunctionCase::Preserve);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["vcop-openapi"]);
        let mut config = GeneratorConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, GeneratorConfig::default());
        assert!(!cli.print_config);
    }
}
