//! Domain logic for the sigcolle signature-collection service.
//!
//! Pure, IO-free building blocks shared by the database and HTTP layers:
//! common id/timestamp types, the domain error enum, campaign display
//! helpers, and Markdown rendering.

pub mod campaign;
pub mod error;
pub mod markdown;
pub mod types;
