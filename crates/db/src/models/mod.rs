//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//!
//! Campaigns and signatures are create-only: there are no update DTOs.

pub mod campaign;
pub mod flash_message;
pub mod session;
pub mod signature;
pub mod user;
