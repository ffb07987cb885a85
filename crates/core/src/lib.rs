//! Core types and configuration for the branchflow engine.
//!
//! This crate provides shared types used across all other crates:
//! - Report data types (raw tables, trade records, broker aggregates)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, RankingConfig, ReportLayout};
pub use error::{Error, Result};
pub use types::*;
