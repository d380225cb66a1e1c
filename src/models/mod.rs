//! Data models for the concept API.
//!
//! These records match the service's JSON payloads exactly, key for key.

mod concept;
mod copyright;
mod draft;
mod search;

pub use concept::*;
pub use copyright::*;
pub use draft::*;
pub use search::*;
