//! Shared domain primitives for the order service.
//!
//! Holds the identifier type, the domain error enum, and the field rules for
//! order payloads. Nothing here touches the database or HTTP.

pub mod error;
pub mod order;
pub mod types;
