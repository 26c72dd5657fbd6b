//! Native-to-wire type mapping.
//!
//! Solidity integers do not fit the safe integer range of JSON numbers, so
//! every integer width travels as a decimal string. The mapping is lossy on
//! purpose: the generated document only names primitive types.

use utoipa::openapi::schema::Type;

/// Wire-level primitive a native ABI type is transported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    /// Any integer width, transported as a decimal string.
    NumericString,
    /// `bool`.
    Boolean,
    /// Addresses, byte strings, strings and anything unrecognized.
    String,
    /// Fixed-size and dynamic arrays.
    Array,
}

impl WireType {
    /// Maps a native Solidity type name to its wire type.
    ///
    /// Array types are recognized first; the scalar rules then apply in
    /// order: `int` → numeric string, `bool` → boolean, `address` → string,
    /// `bytes` → string, anything else → string.
    #[must_use]
    pub fn from_solidity(native: &str) -> Self {
        if native.contains("[]") || native.ends_with(']') {
            Self::Array
        } else if native.contains("int") {
            Self::NumericString
        } else if native == "bool" {
            Self::Boolean
        } else {
            // address, bytes, bytesN, string, tuple, ...
            Self::String
        }
    }

    /// The OpenAPI schema type used in the generated document.
    #[must_use]
    pub const fn schema_type(self) -> Type {
        match self {
            Self::NumericString | Self::String => Type::String,
            Self::Boolean => Type::Boolean,
            Self::Array => Type::Array,
        }
    }
}
