pub mod common;
pub mod converter;
pub mod errors;
pub mod export;
pub mod generate_commands;
pub mod plan;
pub mod plan_execution;
pub mod record;

pub use converter::{convert, ConversionSummary};
