//! linkboard/crates/lb-core/src/lib.rs
//!
//! The central domain models and interface definitions for Linkboard.

pub mod models;
pub mod traits;
pub mod error;

// Re-exporting for easier access in other crates
pub use models::*;
pub use traits::*;
pub use error::*;
