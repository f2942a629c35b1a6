use crate::model::{CupomResult, LineItem};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Description shown for a returned code the cupom does not contain.
pub const NOT_FOUND_PLACEHOLDER: &str = "ITEM NÃO ENCONTRADO";

/// Outcome of looking up one returned code against the processed cupom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReturnStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "DIVERGÊNCIA")]
    Divergencia,
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnStatus::Ok => write!(f, "OK"),
            ReturnStatus::Divergencia => write!(f, "DIVERGÊNCIA"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReturnRow {
    pub sequence: Option<u32>,
    pub code: String,
    pub description: String,
    pub unit_price: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub status: ReturnStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct DevolucaoReport {
    /// Distinct codes checked.
    pub checked: usize,
    pub divergences: usize,
    pub rows: Vec<ReturnRow>,
}

/// Compare a user-supplied list of product codes (one per line) against the
/// items of a processed cupom.
///
/// Codes are trimmed and deduplicated before lookup; rows come back sorted
/// by code so reports are reproducible.
pub fn compare_codes(codes_text: &str, result: &CupomResult) -> DevolucaoReport {
    let codes: BTreeSet<&str> = codes_text
        .lines()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    // Last occurrence wins when two final items share a code.
    let by_code: HashMap<&str, &LineItem> =
        result.items.iter().map(|i| (i.code.as_str(), i)).collect();

    let mut rows = Vec::with_capacity(codes.len());
    let mut divergences = 0;

    for code in &codes {
        match by_code.get(code) {
            Some(item) => rows.push(ReturnRow {
                sequence: Some(item.sequence),
                code: (*code).to_string(),
                description: item.description.clone(),
                unit_price: Some(item.unit_price),
                total_price: Some(item.total_price),
                status: ReturnStatus::Ok,
            }),
            None => {
                divergences += 1;
                rows.push(ReturnRow {
                    sequence: None,
                    code: (*code).to_string(),
                    description: NOT_FOUND_PLACEHOLDER.to_string(),
                    unit_price: None,
                    total_price: None,
                    status: ReturnStatus::Divergencia,
                });
            }
        }
    }

    DevolucaoReport {
        checked: codes.len(),
        divergences,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_result() -> CupomResult {
        let items = vec![
            LineItem {
                sequence: 1,
                code: "7891234567890".to_string(),
                description: "ARROZ 5KG".to_string(),
                quantity: dec!(2.000),
                unit: "UN".to_string(),
                unit_price: dec!(25.00),
                total_price: dec!(50.00),
                discount: dec!(0),
            },
            LineItem {
                sequence: 2,
                code: "7899999999999".to_string(),
                description: "FEIJAO 1KG".to_string(),
                quantity: dec!(1.000),
                unit: "UN".to_string(),
                unit_price: dec!(8.00),
                total_price: dec!(8.00),
                discount: dec!(0),
            },
        ];
        CupomResult {
            item_count: items.len(),
            grand_total: dec!(58.00),
            total_discounts: dec!(0),
            items,
        }
    }

    #[test]
    fn test_matched_code_reports_ok() {
        let report = compare_codes("7891234567890\n", &sample_result());
        assert_eq!(report.checked, 1);
        assert_eq!(report.divergences, 0);
        let row = &report.rows[0];
        assert_eq!(row.status, ReturnStatus::Ok);
        assert_eq!(row.sequence, Some(1));
        assert_eq!(row.description, "ARROZ 5KG");
        assert_eq!(row.unit_price, Some(dec!(25.00)));
    }

    #[test]
    fn test_unknown_code_reports_divergencia() {
        let report = compare_codes("1234567000000", &sample_result());
        assert_eq!(report.divergences, 1);
        let row = &report.rows[0];
        assert_eq!(row.status, ReturnStatus::Divergencia);
        assert_eq!(row.description, NOT_FOUND_PLACEHOLDER);
        assert_eq!(row.sequence, None);
        assert_eq!(row.unit_price, None);
    }

    #[test]
    fn test_codes_deduplicated_and_trimmed() {
        let report = compare_codes(
            "  7891234567890  \n7891234567890\n\n7899999999999",
            &sample_result(),
        );
        assert_eq!(report.checked, 2);
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn test_rows_sorted_by_code() {
        let report = compare_codes("7899999999999\n7891234567890", &sample_result());
        let codes: Vec<&str> = report.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["7891234567890", "7899999999999"]);
    }
}
