//! Domain-specific error types for cfl-edges
//!
//! # Error Categories
//!
//! - **ConvertError**: reading the edge dump, rewriting records, writing the CSV
//! - **PlanError**: loading and saving YAML plan files
//! - **LoadScriptError**: rendering and writing the bulk-load script
//!
//! All of them are fatal for a run. The binary wraps them in `anyhow` and exits
//! with a nonzero status.
//!
//! # Examples
//!
//! ```rust
//! use cfl_edges::errors::ConvertError;
//!
//! let err = ConvertError::MalformedRecord {
//!     line_number: 7,
//!     field_count: 3,
//!     line: "1,2,call_i".to_string(),
//! };
//! assert_eq!(err.error_code(), "MALFORMED_RECORD");
//! assert!(err.is_malformed_input());
//! ```

pub mod convert;
pub mod load_script;
pub mod plan;

pub use convert::ConvertError;
pub use load_script::LoadScriptError;
pub use plan::PlanError;
