//! Report ingestion and normalization for the branchflow engine.
//!
//! This crate handles:
//! - Raw report text parsing (header/data split)
//! - Two-block table flattening into unified trade records
//! - Numeric coercion with the report's asymmetric error policy

pub mod normalizer;
pub mod report;

pub use normalizer::normalize;
pub use report::parse_report;
