//! Order entity, request DTOs, and the response shape.
//!
//! The entity leaves `id` unset until the store assigns one on first save.
//! Request DTOs never carry an id, so callers cannot choose or change it.

use orders_core::error::CoreError;
use orders_core::order::{validate_notes, validate_status, validate_total};
use orders_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `orders` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Order {
    /// `None` until the order has been saved for the first time.
    pub id: Option<DbId>,
    pub notes: Option<String>,
    pub status: String,
    pub total: Decimal,
}

impl Order {
    /// Build an unsaved order from its three mutable fields.
    pub fn new(notes: Option<String>, status: String, total: Decimal) -> Self {
        Self {
            id: None,
            notes,
            status,
            total,
        }
    }

    /// Replace notes, status, and total in place. The id is left untouched.
    pub fn apply_update(&mut self, update: UpdateOrder) {
        self.notes = update.notes;
        self.status = update.status;
        self.total = update.total;
    }
}

impl From<CreateOrder> for Order {
    fn from(dto: CreateOrder) -> Self {
        Order::new(dto.notes, dto.status, dto.total)
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrder {
    #[validate(custom(function = "notes_rule"))]
    pub notes: Option<String>,
    #[validate(custom(function = "status_rule"))]
    pub status: String,
    #[validate(custom(function = "total_rule"))]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
}

/// DTO for replacing the fields of an existing order.
///
/// All three fields are replaced; omitted `notes` clears the stored value.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOrder {
    #[validate(custom(function = "notes_rule"))]
    pub notes: Option<String>,
    #[validate(custom(function = "status_rule"))]
    pub status: String,
    #[validate(custom(function = "total_rule"))]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
}

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

/// Wire representation of a persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: DbId,
    pub notes: Option<String>,
    pub status: String,
    /// Emitted as a JSON number carrying the stored digits and scale verbatim.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
}

impl TryFrom<Order> for OrderResponse {
    type Error = CoreError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let id = order.id.ok_or_else(|| {
            CoreError::Internal("persisted order is missing its id".to_string())
        })?;
        Ok(Self {
            id,
            notes: order.notes,
            status: order.status,
            total: order.total,
        })
    }
}

// ---------------------------------------------------------------------------
// Validator glue
// ---------------------------------------------------------------------------

fn rule_error(code: &'static str, err: CoreError) -> ValidationError {
    let message = match err {
        CoreError::Validation(msg) => msg,
        other => other.to_string(),
    };
    ValidationError::new(code).with_message(message.into())
}

fn notes_rule(notes: &str) -> Result<(), ValidationError> {
    validate_notes(Some(notes)).map_err(|e| rule_error("length", e))
}

fn status_rule(status: &str) -> Result<(), ValidationError> {
    validate_status(status).map_err(|e| rule_error("blank", e))
}

fn total_rule(total: &Decimal) -> Result<(), ValidationError> {
    validate_total(total).map_err(|e| rule_error("range", e))
}
