//! Contract ABI model.
//!
//! Mirrors the subset of a Solidity compiler artifact the generator reads:
//! the `abi` array and, inside it, each entry's kind, name, parameters and
//! state mutability. Everything else in the artifact (bytecode, metadata,
//! source maps) is ignored.

use serde::Deserialize;

/// A compiled contract artifact as written by the build toolchain.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// Ordered interface items exported by the contract.
    pub abi: Vec<InterfaceItem>,
}

/// Kind of an ABI entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Callable function.
    Function,
    /// Contract constructor.
    Constructor,
    /// Emitted event.
    Event,
    /// Custom error.
    Error,
    /// Fallback function.
    Fallback,
    /// Plain ether receive function.
    Receive,
    /// Any entry kind this generator does not know about.
    #[serde(other)]
    Unknown,
}

/// Declared read/write nature of a contract function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    /// No state access at all.
    Pure,
    /// Read-only state access.
    View,
    /// State-modifying, rejects attached value.
    ///
    /// Legacy artifacts without a `stateMutability` field land here.
    #[default]
    Nonpayable,
    /// State-modifying, accepts attached value.
    Payable,
    /// Unrecognized classification, treated as state-modifying.
    #[serde(other)]
    Unknown,
}

impl StateMutability {
    /// Returns `true` for functions that may change contract state.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        !matches!(self, Self::Pure | Self::View)
    }
}

/// One function parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    /// Declared name; empty for unnamed parameters.
    #[serde(default)]
    pub name: String,

    /// Native Solidity type, e.g. `uint256` or `address[]`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Param {
    /// Creates a parameter from its name and native type.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// The declared name, or `<prefix><index>` when the parameter is unnamed.
    #[must_use]
    pub fn name_or_positional(&self, prefix: &str, index: usize) -> String {
        if self.name.is_empty() {
            format!("{prefix}{index}")
        } else {
            self.name.clone()
        }
    }
}

/// One exported ABI entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceItem {
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Entry name; constructors, fallbacks and receives have none.
    #[serde(default)]
    pub name: String,

    /// Ordered input parameters.
    #[serde(default)]
    pub inputs: Vec<Param>,

    /// Ordered return values.
    #[serde(default)]
    pub outputs: Vec<Param>,

    /// Mutability classification.
    #[serde(default)]
    pub state_mutability: StateMutability,
}

impl InterfaceItem {
    /// Creates a function entry.
    pub fn function(
        name: impl Into<String>,
        inputs: Vec<Param>,
        outputs: Vec<Param>,
        state_mutability: StateMutability,
    ) -> Self {
        Self {
            kind: ItemKind::Function,
            name: name.into(),
            inputs,
            outputs,
            state_mutability,
        }
    }

    /// Returns `true` if this entry should become an HTTP operation.
    ///
    /// Only functions qualify, and `pure` functions never touch chain state
    /// so there is nothing to front with an endpoint.
    #[must_use]
    pub fn is_exposed(&self) -> bool {
        self.kind == ItemKind::Function && self.state_mutability != StateMutability::Pure
    }
}

/// A contract name together with its interface items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractAbi {
    /// Contract name as listed in the allowlist.
    pub name: String,

    /// Interface items in artifact order.
    pub items: Vec<InterfaceItem>,
}

impl ContractAbi {
    /// Creates a contract entry.
    pub fn new(name: impl Into<String>, items: Vec<InterfaceItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Iterates over the items that become HTTP operations.
    pub fn exposed_items(&self) -> impl Iterator<Item = &InterfaceItem> {
        self.items.iter().filter(|item| item.is_exposed())
    }
}
