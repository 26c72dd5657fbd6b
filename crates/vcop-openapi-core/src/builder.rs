//! Turns loaded contract ABIs into OpenAPI operations.
//!
//! Every exposed function becomes exactly one operation at
//! `/contracts/<contract>/<function>`. `view` functions are read with `GET`
//! and query parameters; everything else is a `POST` with a JSON body that
//! also names the sending address. A body input that would shadow the
//! sender field is given its positional name (`input<index>`) instead.
//!
//! Overloaded functions are not told apart: the path only carries the
//! function name, so a later overload replaces an earlier one.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::path::{Operation, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
use utoipa::openapi::{RefOr, Required};

use crate::abi::{ContractAbi, InterfaceItem, Param, StateMutability};
use crate::base::{
    auxiliary_paths, base_document, bearer_requirement, error_response, json_response, typed,
};
use crate::document::{Method, SpecDocument};
use crate::types::WireType;

/// How the function name is cased in generated paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionCase {
    /// `getBalance` → `getbalance`.
    #[default]
    Lower,
    /// Keep the declared casing.
    Preserve,
}

/// Path and method an interface item is exposed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Resource path, e.g. `/contracts/vcoporacle/getprice`.
    pub path: String,
    /// HTTP method.
    pub method: Method,
}

impl OperationDescriptor {
    /// Derives the descriptor for `item` of `contract`.
    ///
    /// Returns `None` for items that are not exposed (non-functions and
    /// `pure` functions).
    #[must_use]
    pub fn derive(contract: &str, item: &InterfaceItem, case: FunctionCase) -> Option<Self> {
        if !item.is_exposed() {
            return None;
        }

        let function = match case {
            FunctionCase::Lower => item.name.to_lowercase(),
            FunctionCase::Preserve => item.name.clone(),
        };
        let method = if item.state_mutability == StateMutability::View {
            Method::Get
        } else {
            Method::Post
        };

        Some(Self {
            path: format!("/contracts/{}/{function}", contract.to_lowercase()),
            method,
        })
    }
}

/// Request body property carrying the sending address.
const SENDER_FIELD: &str = "from";

/// One input parameter, resolved to its wire name and type.
struct Input<'a> {
    name: String,
    param: &'a Param,
    wire: WireType,
}

impl<'a> Input<'a> {
    fn resolve(inputs: &'a [Param]) -> Vec<Self> {
        inputs
            .iter()
            .enumerate()
            .map(|(index, param)| Self {
                name: param.name_or_positional("input", index),
                param,
                wire: WireType::from_solidity(&param.kind),
            })
            .collect()
    }

    /// Like [`Input::resolve`], but an input named like the sender field
    /// gets its positional name instead.
    fn resolve_body(inputs: &'a [Param]) -> Vec<Self> {
        let mut resolved = Self::resolve(inputs);
        for (index, input) in resolved.iter_mut().enumerate() {
            if input.name == SENDER_FIELD {
                input.name = format!("input{index}");
            }
        }
        resolved
    }

    fn description(&self) -> String {
        format!("{} parameter of type {}", self.name, self.param.kind)
    }

    fn schema(&self) -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(self.wire.schema_type())
                .description(Some(self.description()))
                .build(),
        ))
    }
}

/// Builds the operation fronting `item` of `contract`.
#[must_use]
pub fn contract_operation(contract: &str, item: &InterfaceItem, method: Method) -> Operation {
    let mut operation = OperationBuilder::new()
        .tag(contract)
        .summary(Some(format!("{} - {contract}", item.name)))
        .description(Some(format!(
            "Execute {} function on {contract} contract",
            item.name
        )));

    match method {
        Method::Post => {
            operation =
                operation.request_body(Some(request_body(&Input::resolve_body(&item.inputs))));
        }
        Method::Get => {
            for input in &Input::resolve(&item.inputs) {
                operation = operation.parameter(
                    ParameterBuilder::new()
                        .name(input.name.as_str())
                        .parameter_in(ParameterIn::Query)
                        .required(Required::True)
                        .schema(Some(typed(input.wire.schema_type())))
                        .description(Some(input.description()))
                        .build(),
                );
            }
        }
    }

    operation
        .response(
            "200",
            json_response("Transaction successful", success_schema(&item.outputs)),
        )
        .response("400", error_response("Invalid parameters"))
        .response("500", error_response("Transaction failed"))
        .security(bearer_requirement())
        .build()
}

fn request_body(inputs: &[Input<'_>]) -> RequestBody {
    let mut schema = ObjectBuilder::new()
        .schema_type(Type::Object)
        .property(
            SENDER_FIELD,
            RefOr::T(Schema::Object(
                ObjectBuilder::new()
                    .schema_type(Type::String)
                    .description(Some("Sender address"))
                    .build(),
            )),
        )
        .required(SENDER_FIELD);

    // `required` entries must be unique.
    let mut required = vec![SENDER_FIELD];
    for input in inputs {
        schema = schema.property(input.name.as_str(), input.schema());
        if !required.contains(&input.name.as_str()) {
            required.push(input.name.as_str());
            schema = schema.required(input.name.as_str());
        }
    }

    RequestBodyBuilder::new()
        .required(Some(Required::True))
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(RefOr::T(Schema::Object(schema.build()))))
                .build(),
        )
        .build()
}

fn success_schema(outputs: &[Param]) -> RefOr<Schema> {
    let mut schema = ObjectBuilder::new()
        .schema_type(Type::Object)
        .property("success", typed(Type::Boolean))
        .property("transactionHash", typed(Type::String))
        .property("gasUsed", typed(Type::String));

    if !outputs.is_empty() {
        let mut result = ObjectBuilder::new().schema_type(Type::Object);
        for (index, output) in outputs.iter().enumerate() {
            result = result.property(
                output.name_or_positional("output", index),
                typed(WireType::from_solidity(&output.kind).schema_type()),
            );
        }
        schema = schema.property("result", RefOr::T(Schema::Object(result.build())));
    }

    RefOr::T(Schema::Object(schema.build()))
}

/// Adds one operation per exposed function of every contract.
///
/// Returns the number of operations generated, counting overloads that
/// replaced an earlier operation at the same path.
pub fn add_contract_paths(
    doc: &mut SpecDocument,
    contracts: &[ContractAbi],
    case: FunctionCase,
) -> usize {
    let mut generated = 0;

    for contract in contracts {
        for item in &contract.items {
            let Some(descriptor) = OperationDescriptor::derive(&contract.name, item, case) else {
                continue;
            };

            debug!(
                contract = %contract.name,
                function = %item.name,
                method = %descriptor.method,
                path = %descriptor.path,
                "Generated operation"
            );

            let operation = contract_operation(&contract.name, item, descriptor.method);
            if doc
                .insert_path(descriptor.path.clone(), descriptor.method.path_item(operation))
                .is_some()
            {
                debug!(path = %descriptor.path, "Path collision, later function wins");
            }
            generated += 1;
        }
    }

    generated
}

/// Adds the hand-authored endpoints after the contract paths.
pub fn add_auxiliary_paths(doc: &mut SpecDocument) {
    for (path, method, operation) in auxiliary_paths() {
        doc.insert_path(path, method.path_item(operation));
    }
}

/// Builds the complete English document for the loaded contracts.
#[must_use]
pub fn build_document(contracts: &[ContractAbi], case: FunctionCase) -> SpecDocument {
    let mut doc = base_document();
    let generated = add_contract_paths(&mut doc, contracts, case);
    add_auxiliary_paths(&mut doc);

    info!(
        contracts = contracts.len(),
        operations = generated,
        paths = doc.path_count(),
        "Built OpenAPI document"
    );

    doc
}
