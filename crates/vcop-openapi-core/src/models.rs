//! Hand-authored API models referenced by the generated document.
//!
//! These describe the payloads of the auxiliary endpoints and the shared
//! error body. Their OpenAPI schemas are derived, so the Rust type is the
//! single source of truth for each schema.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every endpoint on failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({
    "error": "INVALID_PARAMETERS",
    "message": "amount must be a decimal string",
    "code": 400
}))]
pub struct ErrorBody {
    /// Machine-readable error identifier.
    pub error: String,

    /// Human-readable explanation.
    pub message: String,

    /// HTTP status code.
    pub code: i32,
}

/// A collateralized debt position.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Position identifier.
    pub id: String,

    /// Owner address.
    #[schema(example = "0x5FbDB2315678afecb367f032d93F642f64180aa3")]
    pub user: String,

    /// Collateral token address.
    pub collateral_token: String,

    /// Collateral amount, decimal string.
    pub collateral_amount: String,

    /// VCOP minted against the collateral, decimal string.
    pub vcop_minted: String,

    /// Current health factor, decimal string.
    pub health_factor: String,

    /// Health factor below which the position can be liquidated.
    pub liquidation_threshold: String,
}

/// A position that can currently be liquidated at a profit.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiquidationOpportunity {
    /// Owner of the position.
    pub user: String,

    /// Position identifier.
    pub position_id: String,

    /// Current health factor, decimal string.
    pub health_factor: String,

    /// Collateral value, decimal string.
    pub collateral_value: String,

    /// Outstanding debt, decimal string.
    pub debt_value: String,

    /// Profit expected by the liquidator, decimal string.
    pub expected_profit: String,

    /// Liquidation bonus, decimal string.
    pub liquidation_bonus: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Service status.
    #[schema(example = "ok")]
    pub status: String,

    /// Time the check was answered.
    pub timestamp: DateTime<Utc>,

    /// API version.
    #[schema(example = "2.0.0")]
    pub version: String,
}
