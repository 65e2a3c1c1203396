//! The store metrics record - one row of the dashboard.
//!
//! The serialized shape of [`StoreMetricsRecord`] is consumed by the dashboard
//! frontend and must not drift: field names are the camelCase identifiers the
//! frontend was built against, rate fields are percentage strings with two
//! decimal digits, counts and sub-scores are decimal-digit strings, and the
//! three compliance fields serialize as the literal pair `正常`/`异常`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zone labels a store can be assigned to.
pub const ZONES: [&str; 5] = ["1区", "2区", "3区", "4区", "5区"];

/// Store name variants used by the mock catalog.
pub const STORE_NAMES: [&str; 26] = [
    "京东便利店（城东店）",
    "京东便利店（城西店）",
    "京东便利店（城南店）",
    "京东便利店（城北店）",
    "京东便利店（中心店）",
    "京东便利店（东湖店）",
    "京东便利店（西湖店）",
    "京东便利店（南湖店）",
    "京东便利店（北湖店）",
    "京东便利店（高新店）",
    "京东便利店（经开店）",
    "京东便利店（滨湖店）",
    "京东便利店（蜀山店）",
    "京东便利店（包河店）",
    "京东便利店（瑶海店）",
    "京东便利店（庐阳店）",
    "京东便利店（肥东店）",
    "京东便利店（肥西店）",
    "京东便利店（长丰店）",
    "京东便利店（庐江店）",
    "京东便利店（巢湖店）",
    "京东便利店（无为店）",
    "京东便利店（和县店）",
    "京东便利店（含山店）",
    "京东便利店（当涂店）",
    "京东便利店（芜湖店）",
];

/// Two-state status for compliance fields.
///
/// Serializes as the locale literals the dashboard renders directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Dimension is within expectations
    #[serde(rename = "正常")]
    Normal,

    /// Dimension needs attention
    #[serde(rename = "异常")]
    Abnormal,
}

impl ServiceStatus {
    /// The literal the status serializes to.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Normal => "正常",
            ServiceStatus::Abnormal => "异常",
        }
    }

    /// Whether the status is the normal state.
    pub fn is_normal(&self) -> bool {
        matches!(self, ServiceStatus::Normal)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One store's metrics snapshot for a reporting period.
///
/// Every field is mandatory; records are immutable once constructed. Field
/// representation follows the dashboard contract:
///
/// - Rate fields: strings matching `-?\d+\.\d{2}%` (only the loss rate may be
///   negative)
/// - Rating fields: strings with one decimal digit
/// - Count and sub-score fields: unsigned decimal-digit strings
/// - Penalty fields: `"0"` or a small decimal-digit magnitude
/// - Financial fields: raw `f64`, formatting is left to the consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreMetricsRecord {
    // Identity
    /// Numeric-looking unique identifier (base offset plus sequence number)
    pub id: String,
    /// Zone label, one of [`ZONES`]
    pub area: String,
    /// Store code, `S` plus a zero-padded 3-digit sequence number
    pub store_code: String,
    /// Store display name, one of [`STORE_NAMES`]
    pub store_name: String,
    /// Reporting date, `YYYY-MM-DD` within 2025
    pub report_date: String,

    // Overall score
    /// Overall score, integer in 80..=100
    pub total_score: i64,

    // Order quality rates
    /// Month-to-date order cancellation rate, 0-5%
    pub monthly_canceled_rate: String,
    /// Same-day order cancellation rate, 0-5%
    pub daily_canceled_rate: String,
    /// Merchant-liability refund rate, 0-1%
    pub monthly_merchant_refund_rate: String,
    /// Out-of-stock refund rate, 0-0.5%
    pub monthly_oos_refund_rate: String,
    /// JD channel out-of-stock rate, 0-0.5%
    pub monthly_jd_oos_rate: String,
    /// Month-to-date bad review count
    pub monthly_bad_reviews: String,
    /// Month-to-date bad review rate, 0-2%
    pub monthly_bad_review_rate: String,
    /// Partial refund rate, 0-1%
    pub monthly_partial_refund_rate: String,

    // Channel ratings and replies
    /// Meituan rating for the day, 4.0-5.0
    pub daily_meituan_rating: String,
    /// Eleme rating for the day, 4.0-5.0
    pub daily_eleme_rating: String,
    /// Meituan reply rate for the day, 80-100%
    pub daily_meituan_reply_rate: String,
    /// Effective-reply compliance status
    pub effect_reply: ServiceStatus,

    // Delivery performance
    /// Meituan delivery punctuality rate, 90-100%
    pub monthly_meituan_punctuality_rate: String,
    /// Eleme on-time delivery rate, 90-100%
    pub monthly_eleme_ontime_rate: String,
    /// JD fulfillment rate, 80-100%
    pub monthly_jd_fulfillment_rate: String,
    /// Meituan comprehensive experience score, 90.0-95.0
    pub meituan_comprehensive_experience_division: String,

    // Stock health
    /// Monthly average stock rate, 95-100%
    pub monthly_avg_stock_rate: String,
    /// Monthly average top-500 SKU stock rate, 95-100%
    pub monthly_avg_top500_stock_rate: String,
    /// Monthly average direct-sourced stock rate, 80-100%
    pub monthly_avg_direct_stock_rate: String,
    /// Same-day top-500 SKU stock rate, 95-100%
    pub daily_top500_stock_rate: String,
    /// Warehouse SKUs sold out today
    pub daily_warehouse_sold_out: String,
    /// Warehouse stock rate today, 95-100%
    pub daily_warehouse_stock_rate: String,
    /// Direct-sourced SKUs sold out today
    pub daily_direct_sold_out: String,
    /// Direct-sourced stock rate today, 80-100%
    pub daily_direct_stock_rate: String,
    /// Hybrid SKUs sold out today
    pub daily_hybrid_sold_out: String,
    /// Overall stock availability today, 95-100%
    pub daily_stock_availability: String,
    /// Hybrid stock rate today, 90-100%
    pub daily_hybrid_stock_rate: String,
    /// SKUs in stock without a shelf location
    pub stock_no_location: String,

    // Operations compliance
    /// Expiry management status
    pub expiry_management: ServiceStatus,
    /// Orders blocked by locked inventory
    pub inventory_lock_orders: String,
    /// Staff training completion status
    pub training_completed: ServiceStatus,

    // Financial
    /// Man-hours per 100 orders, 5.0-10.0
    pub monthly_manhour_per100_orders: f64,
    /// Month-to-date total loss amount, -500 to 500
    pub monthly_total_loss: f64,
    /// Month-to-date loss rate, -2 to 2%
    pub monthly_total_loss_rate: String,
    /// Average delivery fee this month, 4.0-7.0
    pub monthly_avg_delivery_fee: f64,
    /// Average delivery fee today, 4.0-7.0
    pub daily_avg_delivery_fee: f64,

    // Normalized sub-scores
    /// Cancellation-rate dimension score, 80-100
    pub monthly_cumulative_cancel_rate_score: String,
    /// Merchant-liability refund dimension score, 80-100
    pub monthly_merchant_liability_refund_rate_score: String,
    /// Stockout refund dimension score, 80-100
    pub monthly_stockout_refund_rate_score: String,
    /// Negative review dimension score, 80-100
    pub monthly_negative_review_rate_score: String,
    /// Partial refund dimension score, 80-100
    pub monthly_partial_refund_rate_score: String,
    /// Meituan rating dimension score, 60-100
    pub daily_meituan_rating_score: String,
    /// Eleme rating dimension score, 60-100
    pub daily_eleme_rating_score: String,
    /// Meituan delivery punctuality dimension score, 80-100
    pub monthly_meituan_delivery_punctuality_rate_score: String,
    /// Eleme timely delivery dimension score, 80-100
    pub monthly_eleme_timely_delivery_rate_score: String,

    // Weighting penalties ("0" = no deduction applied for the dimension)
    pub valid_reply_weighting_penalty: String,
    pub monthly_average_stock_rate_weighting_penalty: String,
    pub monthly_average_top500_stock_rate_weighting_penalty: String,
    pub monthly_average_direct_stock_rate_weighting_penalty: String,
    pub new_product_compliance_listing_weighting_penalty: String,
    pub expiry_management_weighting_penalty: String,
    pub inventory_lock_weighting_penalty: String,
    pub monthly_cumulative_hundred_orders_manhour_weighting_penalty: String,
    /// Pre-penalty total score; textually equals `totalScore` with two decimals
    pub total_score_without_weighting_penalty: String,
    pub monthly_cumulative_merchant_liability_refund_rate_weighting_penalty: String,
    pub monthly_cumulative_out_of_stock_refund_rate_weighting_penalty: String,
    pub meituan_complex_experience_score_weighting_penalty: String,
    pub meituan_rating_weighting_penalty: String,
    pub eleme_rating_weighting_penalty: String,
    pub partial_refund_weighting_penalty: String,
    pub training_completed_weighting_penalty: String,
    /// Sum-of-deductions field; "0" or a magnitude up to 9
    pub total_weighting_penalty: String,
}

impl StoreMetricsRecord {
    /// Render the display label the dashboard shows for the store.
    ///
    /// The record keeps `store_code` and `store_name` as plain data; markup
    /// around the label is a rendering concern and stays out of the model.
    pub fn store_label(&self) -> String {
        format!("[{}]{}", self.store_code, self.store_name)
    }
}
