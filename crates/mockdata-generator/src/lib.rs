//! Mock record generator for the storedash dashboard.
//!
//! This crate produces batches of [`metrics_core::StoreMetricsRecord`] values
//! with every field drawn independently from its own fixed distribution. The
//! randomness source is an explicitly seeded RNG threaded through the
//! generator, so tests get reproducibility while the default call sites stay
//! non-deterministic.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────┐
//! │ MockDataGenerator │
//! │                   │
//! │  - rng (StdRng)   │
//! │  - sequence       │
//! └─────────┬─────────┘
//!           │  per-field samplers (percent, score, count, status, date)
//!           ▼
//!   StoreMetricsRecord { id, area, storeCode, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use mockdata_generator::MockDataGenerator;
//!
//! let mut generator = MockDataGenerator::seeded(42);
//! let record = generator.next_record();
//! assert_eq!(record.id, "44838");
//! ```
//!
//! The one-call default batch matches the dashboard contract: exactly 126
//! records, IDs contiguous from the fixed base offset.
//!
//! ```rust
//! let records = mockdata_generator::generate_mock_data();
//! assert_eq!(records.len(), 126);
//! ```

pub mod generator;
pub mod samplers;

// Re-exports for convenience
pub use generator::{
    generate_mock_data, GeneratorError, MockDataGenerator, RecordIterator, DEFAULT_RECORD_COUNT,
    ID_BASE_OFFSET,
};
