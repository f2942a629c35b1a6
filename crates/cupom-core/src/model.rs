use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One parsed receipt line.
///
/// Aggregated entries share this shape: quantity, total and discount become
/// sums over the group, while `sequence` stays that of the first member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Position of the item as printed on the receipt.
    pub sequence: u32,
    /// 7-13 digit product code; empty when the receipt omits it.
    pub code: String,
    pub description: String,
    pub quantity: Decimal,
    /// Unit-of-measure abbreviation (e.g. "UN", "KG").
    pub unit: String,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    /// Taken from a "Seq.: N ... Desconto" annotation line; zero otherwise.
    #[serde(default)]
    pub discount: Decimal,
}

/// Fully processed receipt: final items plus summary totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CupomResult {
    pub item_count: usize,
    /// Sum of `total_price` over the final items, rounded to 2 decimals.
    pub grand_total: Decimal,
    /// Sum of `discount` over the final items, rounded to 2 decimals.
    pub total_discounts: Decimal,
    pub items: Vec<LineItem>,
}
