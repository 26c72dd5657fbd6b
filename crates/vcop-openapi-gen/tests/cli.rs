use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::tempdir;

const ORACLE_ARTIFACT: &str = r#"{
    "abi": [
        {
            "type": "function",
            "name": "getBalance",
            "inputs": [{ "name": "user", "type": "address", "internalType": "address" }],
            "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }],
            "stateMutability": "view"
        }
    ]
}"#;

fn bin(workdir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("vcop-openapi").expect("binary");
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .env_remove("VCOP_OPENAPI_FUNCTION_CASE")
        .env_remove("VCOP_OPENAPI_OUTPUT_DIR")
        .env_remove("VCOP_OPENAPI_CONTRACTS");
    cmd
}

fn write_oracle(root: &Path) {
    let dir = root.join("out").join("VCOPOracle.sol");
    fs::create_dir_all(&dir).expect("artifact dir");
    fs::write(dir.join("VCOPOracle.json"), ORACLE_ARTIFACT).expect("artifact");
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read output")).expect("valid json")
}

#[test]
fn generates_both_documents_with_defaults() {
    let tmp = tempdir().expect("tmpdir");
    write_oracle(tmp.path());

    bin(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Contracts: 1"))
        .stdout(predicate::str::contains("openapi-en.json"))
        .stdout(predicate::str::contains("openapi-es.json"))
        .stderr(predicate::str::contains("Skipping contract"));

    let english = read_json(&tmp.path().join("docs/api/openapi-en.json"));
    assert_eq!(english["openapi"], "3.0.3");
    assert_eq!(
        english["paths"]["/contracts/vcoporacle/getbalance"]["get"]["parameters"][0]["name"],
        "user"
    );

    let spanish = read_json(&tmp.path().join("docs/api/openapi-es.json"));
    assert_eq!(spanish["servers"][0]["description"], "Servidor de producción");
}

#[test]
fn empty_build_directory_still_succeeds() {
    let tmp = tempdir().expect("tmpdir");

    bin(tmp.path())
        .arg("--output-dir")
        .arg("site")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contracts: 0"))
        .stdout(predicate::str::contains("Paths: 3"));

    for file in ["openapi-en.json", "openapi-es.json"] {
        let doc = read_json(&tmp.path().join("site").join(file));
        assert_eq!(doc["paths"].as_object().expect("paths").len(), 3);
    }
}

#[test]
fn output_dir_blocked_by_file_exits_non_zero() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(tmp.path().join("docs"), "not a directory").expect("blocker");

    bin(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to create output directory"));

    assert!(!tmp.path().join("docs/api/openapi-en.json").exists());
}

#[test]
fn invalid_contract_name_is_a_usage_error() {
    let tmp = tempdir().expect("tmpdir");

    bin(tmp.path())
        .arg("--contract")
        .arg("9Lives")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a Solidity identifier"));
}

#[test]
fn config_file_and_environment_are_layered() {
    let tmp = tempdir().expect("tmpdir");
    write_oracle(tmp.path());
    fs::write(
        tmp.path().join("vcop-openapi.toml"),
        "contracts = [\"VCOPOracle\"]\noutput_dir = \"from-file\"\n",
    )
    .expect("config file");

    bin(tmp.path())
        .env("VCOP_OPENAPI_FUNCTION_CASE", "preserve")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contracts: 1"));

    let english = read_json(&tmp.path().join("from-file/openapi-en.json"));
    assert!(english["paths"]
        .get("/contracts/vcoporacle/getBalance")
        .is_some());
}

#[test]
fn contract_flag_replaces_invalid_configured_contracts() {
    let tmp = tempdir().expect("tmpdir");
    write_oracle(tmp.path());
    fs::write(
        tmp.path().join("vcop-openapi.toml"),
        "contracts = [\"bad-name\"]\n",
    )
    .expect("config file");

    bin(tmp.path())
        .arg("--contract")
        .arg("VCOPOracle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contracts: 1"));

    bin(tmp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("'bad-name' is not a Solidity identifier"));
}

#[test]
fn print_config_shows_effective_settings() {
    let tmp = tempdir().expect("tmpdir");

    bin(tmp.path())
        .arg("--print-config")
        .arg("--abi-dir")
        .arg("artifacts")
        .assert()
        .success()
        .stdout(predicate::str::contains("abi_dir = \"artifacts\""))
        .stdout(predicate::str::contains("VCOPLiquidationEngine"));

    assert!(!tmp.path().join("docs").exists());
}
