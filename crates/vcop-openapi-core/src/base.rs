//! Static parts of the document: metadata, servers, components and the
//! hand-authored endpoints that do not come from any contract.

use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::info::{ContactBuilder, Info, InfoBuilder, LicenseBuilder};
use utoipa::openapi::path::{Operation, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::response::{Response, ResponseBuilder};
use utoipa::openapi::schema::{
    Array, Components, ComponentsBuilder, ObjectBuilder, Ref, Schema, Type,
};
use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme,
};
use utoipa::openapi::server::{Server, ServerBuilder};
use utoipa::openapi::{RefOr, Required};
use utoipa::PartialSchema;

use crate::document::{Method, SpecDocument};
use crate::models::{ErrorBody, HealthStatus, LiquidationOpportunity, Position};

/// Title of the English document.
pub const API_TITLE: &str = "VCOP Protocol API";

/// Version of the described API.
pub const API_VERSION: &str = "2.0.0";

/// Description of the English document.
pub const API_DESCRIPTION: &str = "Advanced DeFi Lending Protocol with Hybrid Architecture";

/// Name of the shared error schema.
pub const ERROR_SCHEMA: &str = "Error";

/// Security scheme attached to every contract operation.
pub const BEARER_AUTH: &str = "BearerAuth";

/// Security scheme for API-key clients.
pub const API_KEY_AUTH: &str = "ApiKeyAuth";

const JSON: &str = "application/json";

/// Builds the document every run starts from: metadata, servers and
/// components, with no paths yet.
#[must_use]
pub fn base_document() -> SpecDocument {
    SpecDocument::new(info(), servers(), components())
}

fn info() -> Info {
    InfoBuilder::new()
        .title(API_TITLE)
        .version(API_VERSION)
        .description(Some(API_DESCRIPTION))
        .terms_of_service(Some("https://vcop.finance/terms"))
        .contact(Some(
            ContactBuilder::new()
                .name(Some("VCOP Team"))
                .url(Some("https://vcop.finance"))
                .email(Some("dev@vcop.finance"))
                .build(),
        ))
        .license(Some(
            LicenseBuilder::new()
                .name("MIT")
                .url(Some("https://opensource.org/licenses/MIT"))
                .build(),
        ))
        .build()
}

fn servers() -> Vec<Server> {
    vec![
        ServerBuilder::new()
            .url("https://api.vcop.finance/v2")
            .description(Some("Production server"))
            .build(),
        ServerBuilder::new()
            .url("https://testnet-api.vcop.finance/v2")
            .description(Some("Testnet server"))
            .build(),
    ]
}

/// Component schemas and security schemes. Both maps serialize sorted by
/// name, whatever the registration order.
fn components() -> Components {
    ComponentsBuilder::new()
        .schema(ERROR_SCHEMA, ErrorBody::schema())
        .schema("Position", Position::schema())
        .schema("LiquidationOpportunity", LiquidationOpportunity::schema())
        .schema("HealthStatus", HealthStatus::schema())
        .security_scheme(
            API_KEY_AUTH,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
        )
        .security_scheme(
            BEARER_AUTH,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        )
        .build()
}

/// The bearer requirement every generated contract operation carries.
#[must_use]
pub fn bearer_requirement() -> SecurityRequirement {
    SecurityRequirement::new(BEARER_AUTH, Vec::<String>::new())
}

/// Schema of the given primitive type.
#[must_use]
pub fn typed(kind: Type) -> RefOr<Schema> {
    RefOr::T(Schema::Object(ObjectBuilder::new().schema_type(kind).build()))
}

/// Reference to a named component schema.
#[must_use]
pub fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

/// JSON response with the given description and schema.
#[must_use]
pub fn json_response(description: &str, schema: RefOr<Schema>) -> RefOr<Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
            .build(),
    )
}

/// JSON response carrying the shared error body.
#[must_use]
pub fn error_response(description: &str) -> RefOr<Response> {
    json_response(description, schema_ref(ERROR_SCHEMA))
}

fn array_of(name: &str) -> RefOr<Schema> {
    RefOr::T(Schema::Array(Array::new(schema_ref(name))))
}

/// Hand-authored endpoints, in the order they appear in the document.
#[must_use]
pub fn auxiliary_paths() -> Vec<(&'static str, Method, Operation)> {
    vec![
        ("/health", Method::Get, health()),
        ("/positions/{userAddress}", Method::Get, positions()),
        ("/liquidations", Method::Get, liquidations()),
    ]
}

fn health() -> Operation {
    OperationBuilder::new()
        .tag("System")
        .summary(Some("Health check"))
        .description(Some("Check API health status"))
        .response("200", json_response("API is healthy", schema_ref("HealthStatus")))
        .build()
}

fn positions() -> Operation {
    OperationBuilder::new()
        .tag("Positions")
        .summary(Some("Get user positions"))
        .description(Some("Retrieve all positions for a user"))
        .parameter(
            ParameterBuilder::new()
                .name("userAddress")
                .parameter_in(ParameterIn::Path)
                .required(Required::True)
                .schema(Some(typed(Type::String)))
                .description(Some("User's Ethereum address"))
                .build(),
        )
        .response("200", json_response("User positions", array_of("Position")))
        .build()
}

fn liquidations() -> Operation {
    OperationBuilder::new()
        .tag("Liquidations")
        .summary(Some("Get liquidation opportunities"))
        .description(Some("Retrieve current liquidation opportunities"))
        .parameter(
            ParameterBuilder::new()
                .name("minProfit")
                .parameter_in(ParameterIn::Query)
                .required(Required::False)
                .schema(Some(typed(Type::String)))
                .description(Some("Minimum profit threshold"))
                .build(),
        )
        .response(
            "200",
            json_response(
                "Liquidation opportunities",
                array_of("LiquidationOpportunity"),
            ),
        )
        .build()
}
