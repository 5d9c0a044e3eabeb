//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs for create and update
//! - A `Serialize` response shape returned to API callers

pub mod order;
