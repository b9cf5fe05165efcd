//! External service interactions
//!
//! - Serum protocol export to disk

pub mod export;

pub use export::{project_code, write_protocol};
