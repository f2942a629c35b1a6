use regex::Regex;
use std::sync::LazyLock;

/// Captured string fields of an item line, before numeric conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub sequence: String,
    pub code: String,
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub unit_price: String,
    pub total_price: String,
}

/// A strategy for recognizing one receipt-line layout.
///
/// The parser tries matchers in order and takes the first that recognizes a
/// line, so alternate issuer layouts slot in as additional implementations.
pub trait LineMatcher: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the captured fields when the line is an item line in this
    /// layout, None otherwise.
    fn match_line(&self, line: &str) -> Option<RawItem>;
}

/// sequence, optional 7-13 digit product code, free-text description
/// (non-greedy), quantity, unit token, unit price, total price. Decimal
/// fields accept "." or "," as the fractional separator.
static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<seq>\d+)\s+(?P<code>\d{7,13})?\s*(?P<desc>.*?)\s+(?P<qty>\d+[.,]\d+)\s+(?P<unit>\w+)\.?\s+(?P<unit_price>\d+[.,]\d+)\s+(?P<total>\d+[.,]\d+)\s*$",
    )
    .expect("item pattern is valid")
});

/// The column layout printed by Muffato-style supermarket receipts.
pub struct StandardReceiptMatcher;

impl LineMatcher for StandardReceiptMatcher {
    fn name(&self) -> &str {
        "standard"
    }

    fn match_line(&self, line: &str) -> Option<RawItem> {
        let caps = ITEM_RE.captures(line)?;
        Some(RawItem {
            sequence: caps["seq"].to_string(),
            code: caps
                .name("code")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            description: caps["desc"].trim().to_string(),
            quantity: caps["qty"].to_string(),
            unit: caps["unit"].to_string(),
            unit_price: caps["unit_price"].to_string(),
            total_price: caps["total"].to_string(),
        })
    }
}

/// The built-in matcher set, in trial order.
pub fn default_matchers() -> Vec<Box<dyn LineMatcher>> {
    vec![Box::new(StandardReceiptMatcher)]
}
