//! Core types and configuration for wtfd.
//!
//! This crate provides the data model shared by every wtfd crate:
//! - [`types`]: Declarations, violations and skipped-file records
//! - [`config`]: Configuration loading from `.wtfd/wtfd.json` and the
//!   immutable [`ScanConfiguration`](config::ScanConfiguration)
//! - [`error`]: Recoverable errors surfaced as advisories

pub mod config;
pub mod error;
pub mod types;
