//! Typed wire contracts for the concept content-management API.
//!
//! Every type in this crate mirrors a JSON payload produced or consumed by the
//! remote concept service, field for field. The crate carries no client, no
//! persistence and no validation of field contents; it only pins down the
//! shapes so a caller can rely on the compiler instead of stringly JSON.

mod errors;
mod models;
mod patch;

pub use errors::*;
pub use models::*;
pub use patch::Patch;
