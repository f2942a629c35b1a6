use crate::model::LineItem;
use rust_decimal::Decimal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Merge items sharing (code, description, unit price) into single entries.
///
/// Quantities, totals and discounts are summed; the first member's sequence
/// and unit are kept. Output is sorted by that retained sequence, so the
/// receipt's visual order survives grouping. Pure: input items are not
/// mutated.
pub fn aggregate_items(items: &[LineItem]) -> Vec<LineItem> {
    let mut grouped: HashMap<(String, String, Decimal), LineItem> = HashMap::new();

    for item in items {
        let key = (
            item.code.clone(),
            item.description.clone(),
            item.unit_price,
        );
        match grouped.entry(key) {
            Entry::Occupied(mut e) => {
                let merged = e.get_mut();
                merged.quantity += item.quantity;
                merged.total_price += item.total_price;
                merged.discount += item.discount;
            }
            Entry::Vacant(e) => {
                e.insert(item.clone());
            }
        }
    }

    let mut merged: Vec<LineItem> = grouped.into_values().collect();
    merged.sort_by_key(|i| i.sequence);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(sequence: u32, code: &str, description: &str, unit_price: Decimal) -> LineItem {
        LineItem {
            sequence,
            code: code.to_string(),
            description: description.to_string(),
            quantity: dec!(1.000),
            unit: "UN".to_string(),
            unit_price,
            total_price: unit_price,
            discount: dec!(0),
        }
    }

    #[test]
    fn test_identical_items_merged() {
        let a = item(1, "7891234567890", "ARROZ 5KG", dec!(25.00));
        let mut b = item(3, "7891234567890", "ARROZ 5KG", dec!(25.00));
        b.discount = dec!(2.00);

        let merged = aggregate_items(&[a, b]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].sequence, 1);
        assert_eq!(merged[0].quantity, dec!(2.000));
        assert_eq!(merged[0].total_price, dec!(50.00));
        assert_eq!(merged[0].discount, dec!(2.00));
    }

    #[test]
    fn test_different_unit_price_kept_apart() {
        let a = item(1, "7891234567890", "ARROZ 5KG", dec!(25.00));
        let b = item(2, "7891234567890", "ARROZ 5KG", dec!(23.50));

        let merged = aggregate_items(&[a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_sorted_by_retained_sequence() {
        let items = [
            item(5, "111111111", "C", dec!(1.00)),
            item(2, "222222222", "A", dec!(2.00)),
            item(4, "333333333", "B", dec!(3.00)),
        ];
        let merged = aggregate_items(&items);
        let sequences: Vec<u32> = merged.iter().map(|i| i.sequence).collect();
        assert_eq!(sequences, vec![2, 4, 5]);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let items = [
            item(1, "7891234567890", "ARROZ 5KG", dec!(25.00)),
            item(2, "7891234567890", "ARROZ 5KG", dec!(25.00)),
            item(3, "7899999999999", "FEIJAO 1KG", dec!(8.00)),
        ];
        let once = aggregate_items(&items);
        let twice = aggregate_items(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_total_price_sum_conserved() {
        let items = [
            item(1, "7891234567890", "ARROZ 5KG", dec!(25.00)),
            item(2, "7891234567890", "ARROZ 5KG", dec!(25.00)),
            item(3, "7899999999999", "FEIJAO 1KG", dec!(8.00)),
        ];
        let before: Decimal = items.iter().map(|i| i.total_price).sum();
        let after: Decimal = aggregate_items(&items)
            .iter()
            .map(|i| i.total_price)
            .sum();
        assert_eq!(before, after);
    }

    #[test]
    fn test_input_not_mutated() {
        let items = vec![
            item(1, "7891234567890", "ARROZ 5KG", dec!(25.00)),
            item(2, "7891234567890", "ARROZ 5KG", dec!(25.00)),
        ];
        let snapshot = items.clone();
        let _ = aggregate_items(&items);
        assert_eq!(items, snapshot);
    }
}
