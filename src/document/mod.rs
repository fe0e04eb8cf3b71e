//! Canonical document model: the structured record returned by the correction
//! model, the ordered correction ledger, and the upload transport envelope.

pub mod models;
pub mod schema;

pub use models::*;
pub use schema::*;
