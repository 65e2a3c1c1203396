//! Storedash mock-data tooling.
//!
//! Generates batches of store performance records for the storedash dashboard
//! and exports them in consumer-ready formats.
//!
//! # Components
//!
//! - `metrics-core` - record schema, search criteria, column catalog
//! - `mockdata-generator` - seeded per-field samplers and the batch generator
//! - [`export`] - JSONL and CSV writers with throughput metrics
//!
//! # CLI Usage
//!
//! ```bash
//! # Default dashboard batch (126 records) as line-delimited JSON
//! storedash-mock generate --output batch.jsonl
//!
//! # Reproducible CSV batch, filtered to one zone
//! storedash-mock generate --output zone1.csv --format csv \
//!   --count 500 --seed 42 --area 1区
//!
//! # Column catalog as consumed by the table component
//! storedash-mock columns --format json
//! ```

pub mod export;

// Re-export the schema and generator crates for library consumers
pub use metrics_core;
pub use mockdata_generator;
