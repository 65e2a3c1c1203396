//! Main generator producing store metrics records.

use crate::samplers::{self, date, numeric, percent, status};
use metrics_core::{StoreMetricsRecord, STORE_NAMES, ZONES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of records the dashboard's default batch carries.
pub const DEFAULT_RECORD_COUNT: u64 = 126;

/// Base offset added to the 1-based sequence number to form record IDs.
pub const ID_BASE_OFFSET: u64 = 44837;

/// Error type for generator operations.
///
/// The default generation path is total; only the added configurability
/// (batch count, start sequence) can be invalid.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration is outside the supported domain
    #[error("Invalid generator configuration: {0}")]
    InvalidConfiguration(String),
}

/// Generator that produces store metrics records.
///
/// The randomness source is an explicit `StdRng`: [`MockDataGenerator::seeded`]
/// gives reproducible batches for tests, [`MockDataGenerator::new`] seeds from
/// OS entropy so consecutive runs differ, matching the dashboard contract.
///
/// Every field of a record is drawn independently from its own fixed
/// distribution. There is deliberately no cross-field correlation - a high
/// total score does not influence any rate field - and reimplementations must
/// not introduce one.
pub struct MockDataGenerator {
    /// Randomness source threaded through every sampler
    rng: StdRng,
    /// Next 1-based sequence number
    seq: u64,
}

impl MockDataGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seq: 1,
        }
    }

    /// Create a deterministic generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seq: 1,
        }
    }

    /// Set the starting sequence number for record numbering.
    ///
    /// Useful for producing a batch that continues an earlier one: IDs and
    /// store codes resume from `start`. The sequence is 1-based.
    pub fn with_start_sequence(mut self, start: u64) -> Result<Self, GeneratorError> {
        if start == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "start sequence is 1-based, got 0".to_string(),
            ));
        }
        if start > u64::MAX - ID_BASE_OFFSET {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "start sequence {start} overflows the record ID space"
            )));
        }
        self.seq = start;
        Ok(self)
    }

    /// Get the next sequence number to be assigned.
    pub fn current_sequence(&self) -> u64 {
        self.seq
    }

    /// Generate the next record.
    ///
    /// Cannot fail: every field distribution is total and the generator has
    /// no external inputs.
    pub fn next_record(&mut self) -> StoreMetricsRecord {
        let seq = self.seq;
        self.seq += 1;

        let rng = &mut self.rng;

        let total_score: i64 = rng.random_range(80..100);

        StoreMetricsRecord {
            id: (ID_BASE_OFFSET + seq).to_string(),
            area: samplers::pick(rng, &ZONES).to_string(),
            store_code: format!("S{seq:03}"),
            store_name: samplers::pick(rng, &STORE_NAMES).to_string(),
            report_date: date::report_date_string(rng),
            total_score,
            monthly_canceled_rate: percent::percent_string(rng, 0.0, 5.0),
            daily_canceled_rate: percent::percent_string(rng, 0.0, 5.0),
            monthly_merchant_refund_rate: percent::percent_string(rng, 0.0, 1.0),
            monthly_oos_refund_rate: percent::percent_string(rng, 0.0, 0.5),
            monthly_jd_oos_rate: percent::percent_string(rng, 0.0, 0.5),
            monthly_bad_reviews: numeric::count_string(rng, 5),
            monthly_bad_review_rate: percent::percent_string(rng, 0.0, 2.0),
            monthly_partial_refund_rate: percent::percent_string(rng, 0.0, 1.0),
            daily_meituan_rating: percent::rating_string(rng, 4.0, 5.0),
            daily_eleme_rating: percent::rating_string(rng, 4.0, 5.0),
            daily_meituan_reply_rate: percent::percent_string(rng, 80.0, 100.0),
            effect_reply: status::status(rng),
            monthly_meituan_punctuality_rate: percent::percent_string(rng, 90.0, 100.0),
            monthly_eleme_ontime_rate: percent::percent_string(rng, 90.0, 100.0),
            monthly_jd_fulfillment_rate: percent::percent_string(rng, 80.0, 100.0),
            meituan_comprehensive_experience_division: percent::rating_string(rng, 90.0, 95.0),
            monthly_avg_stock_rate: percent::percent_string(rng, 95.0, 100.0),
            monthly_avg_top500_stock_rate: percent::percent_string(rng, 95.0, 100.0),
            monthly_avg_direct_stock_rate: percent::percent_string(rng, 80.0, 100.0),
            daily_top500_stock_rate: percent::percent_string(rng, 95.0, 100.0),
            daily_warehouse_sold_out: numeric::count_string(rng, 200),
            daily_warehouse_stock_rate: percent::percent_string(rng, 95.0, 100.0),
            daily_direct_sold_out: numeric::count_string(rng, 50),
            daily_direct_stock_rate: percent::percent_string(rng, 80.0, 100.0),
            daily_hybrid_sold_out: numeric::count_string(rng, 20),
            daily_stock_availability: percent::percent_string(rng, 95.0, 100.0),
            daily_hybrid_stock_rate: percent::percent_string(rng, 90.0, 100.0),
            stock_no_location: numeric::count_string(rng, 10),
            expiry_management: status::status(rng),
            inventory_lock_orders: numeric::count_string(rng, 5),
            training_completed: status::status(rng),
            monthly_manhour_per100_orders: rng.random_range(5.0..10.0),
            monthly_total_loss: rng.random_range(-500.0..500.0),
            monthly_total_loss_rate: percent::percent_string(rng, -2.0, 2.0),
            monthly_avg_delivery_fee: rng.random_range(4.0..7.0),
            daily_avg_delivery_fee: rng.random_range(4.0..7.0),
            monthly_cumulative_cancel_rate_score: numeric::score_string(rng, 80.0, 100.0),
            monthly_merchant_liability_refund_rate_score: numeric::score_string(rng, 80.0, 100.0),
            monthly_stockout_refund_rate_score: numeric::score_string(rng, 80.0, 100.0),
            monthly_negative_review_rate_score: numeric::score_string(rng, 80.0, 100.0),
            monthly_partial_refund_rate_score: numeric::score_string(rng, 80.0, 100.0),
            daily_meituan_rating_score: numeric::score_string(rng, 60.0, 100.0),
            daily_eleme_rating_score: numeric::score_string(rng, 60.0, 100.0),
            monthly_meituan_delivery_punctuality_rate_score: numeric::score_string(
                rng, 80.0, 100.0,
            ),
            monthly_eleme_timely_delivery_rate_score: numeric::score_string(rng, 80.0, 100.0),
            valid_reply_weighting_penalty: status::penalty_string(rng, 5),
            monthly_average_stock_rate_weighting_penalty: status::penalty_string(rng, 5),
            monthly_average_top500_stock_rate_weighting_penalty: status::penalty_string(rng, 5),
            monthly_average_direct_stock_rate_weighting_penalty: status::penalty_string(rng, 5),
            new_product_compliance_listing_weighting_penalty: status::penalty_string(rng, 5),
            expiry_management_weighting_penalty: status::penalty_string(rng, 5),
            inventory_lock_weighting_penalty: status::penalty_string(rng, 5),
            monthly_cumulative_hundred_orders_manhour_weighting_penalty: status::penalty_string(
                rng, 5,
            ),
            // Textual copy of totalScore; the pre-penalty computation is a
            // placeholder in the observed data and is not reconstructed here
            total_score_without_weighting_penalty: format!("{total_score}.00"),
            monthly_cumulative_merchant_liability_refund_rate_weighting_penalty:
                status::penalty_string(rng, 5),
            monthly_cumulative_out_of_stock_refund_rate_weighting_penalty: status::penalty_string(
                rng, 5,
            ),
            meituan_complex_experience_score_weighting_penalty: status::penalty_string(rng, 5),
            meituan_rating_weighting_penalty: status::penalty_string(rng, 5),
            eleme_rating_weighting_penalty: status::penalty_string(rng, 5),
            partial_refund_weighting_penalty: status::penalty_string(rng, 5),
            training_completed_weighting_penalty: status::penalty_string(rng, 5),
            total_weighting_penalty: status::penalty_string(rng, 10),
        }
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Eagerly generate a batch of `count` records.
    ///
    /// The only failure mode is invalid configuration: a zero count or a
    /// batch that would run the sequence past the record ID space.
    pub fn generate_batch(&mut self, count: u64) -> Result<Vec<StoreMetricsRecord>, GeneratorError> {
        if count == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "record count must be positive".to_string(),
            ));
        }
        if self
            .seq
            .checked_add(count)
            .is_none_or(|end| end > u64::MAX - ID_BASE_OFFSET)
        {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "count {count} overflows the record ID space"
            )));
        }

        Ok(self.records(count).collect())
    }
}

impl Default for MockDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut MockDataGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = StoreMetricsRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

/// Generate the dashboard's default batch: exactly 126 records from an
/// entropy-seeded generator. Takes no input and cannot fail.
pub fn generate_mock_data() -> Vec<StoreMetricsRecord> {
    MockDataGenerator::new().records(DEFAULT_RECORD_COUNT).collect()
}
