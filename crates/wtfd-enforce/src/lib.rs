//! Docstring enforcement for wtfd.
//!
//! Turns parsed declarations into violations and decides the run outcome:
//! - [`policy`]: which declarations are subject to the audit
//! - [`audit`]: per-file violation detection
//! - [`report`]: aggregation across files and the strict/permissive verdict
//! - [`engine`]: the collect → extract → audit → report pipeline

pub mod audit;
pub mod engine;
pub mod policy;
pub mod report;
