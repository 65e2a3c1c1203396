//! Core types for the storedash mock-data tooling.
//!
//! This crate provides the foundational types shared across the tooling:
//!
//! - [`StoreMetricsRecord`] - One store's metrics snapshot for a reporting period
//! - [`ServiceStatus`] - Two-state categorical status used by compliance fields
//! - [`SearchCriteria`] - Optional zone / store-label / date-range filter
//! - [`ColumnDescriptor`] / [`ColumnCatalog`] - Static table-column metadata
//!
//! # Architecture
//!
//! ```text
//! metrics-core (this crate)
//!    │
//!    ├─── mockdata-generator  (depends on metrics-core for the record shape)
//!    │
//!    └─── storedash-mock      (CLI; filters and exports records)
//! ```
//!
//! The record's serialized field names are the contract consumed by the
//! dashboard frontend. They must stay bit-for-bit stable: string-typed fields
//! stay strings (rates keep their trailing `%`, counts keep their decimal-digit
//! rendering) and numeric fields stay numeric.

pub mod columns;
pub mod record;
pub mod search;

// Re-exports for convenience
pub use columns::{CatalogError, ColumnCatalog, ColumnDescriptor, FixedSide};
pub use record::{ServiceStatus, StoreMetricsRecord, STORE_NAMES, ZONES};
pub use search::SearchCriteria;
