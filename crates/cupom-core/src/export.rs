use crate::devolucao::DevolucaoReport;
use crate::error::CupomError;
use crate::model::CupomResult;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const CUPOM_HEADER: [&str; 8] = [
    "Item",
    "Código",
    "Descrição",
    "Qtd",
    "Un",
    "V.Unit",
    "Desconto",
    "V.Total",
];

const DEVOLUCAO_HEADER: [&str; 6] = [
    "Item",
    "Código",
    "Descrição",
    "Valor Unitário",
    "Valor Total",
    "Status",
];

/// Format a decimal as Brazilian currency: `R$ 1234,56`.
pub fn format_currency(value: Decimal) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}

/// Write a processed cupom as semicolon-delimited CSV: header, one row per
/// item with raw numeric fields, a blank row, then three summary rows with
/// currency-formatted totals.
pub fn write_cupom_csv<W: Write>(mut writer: W, result: &CupomResult) -> Result<(), CupomError> {
    {
        let mut w = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(&mut writer);

        w.write_record(CUPOM_HEADER)?;

        for item in &result.items {
            w.write_record([
                item.sequence.to_string(),
                item.code.clone(),
                item.description.clone(),
                item.quantity.to_string(),
                item.unit.clone(),
                item.unit_price.to_string(),
                item.discount.to_string(),
                item.total_price.to_string(),
            ])?;
        }

        w.flush()?;
    }

    // Truly blank separator row; the csv writer would render a lone empty
    // field as `""`.
    writer.write_all(b"\n")?;

    let mut w = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(&mut writer);

    let count = result.item_count.to_string();
    w.write_record(["Total itens:", "", count.as_str(), "", "", "", "", ""])?;
    let discounts = format_currency(result.total_discounts);
    w.write_record(["Total descontos:", "", "", "", "", "", "", discounts.as_str()])?;
    let total = format_currency(result.grand_total);
    w.write_record(["Total geral:", "", "", "", "", "", "", total.as_str()])?;

    w.flush()?;
    Ok(())
}

/// Write a devolução comparison report as semicolon-delimited CSV. Prices
/// carry the currency format the comparison table shows; unmatched rows
/// leave their value columns empty.
pub fn write_devolucao_csv<W: Write>(
    writer: W,
    report: &DevolucaoReport,
) -> Result<(), CupomError> {
    let mut w = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    w.write_record(DEVOLUCAO_HEADER)?;

    for row in &report.rows {
        let sequence = row.sequence.map(|s| s.to_string()).unwrap_or_default();
        let unit_price = row.unit_price.map(format_currency).unwrap_or_default();
        let total_price = row.total_price.map(format_currency).unwrap_or_default();
        let status = row.status.to_string();
        w.write_record([
            sequence.as_str(),
            row.code.as_str(),
            row.description.as_str(),
            unit_price.as_str(),
            total_price.as_str(),
            status.as_str(),
        ])?;
    }

    w.flush()?;
    Ok(())
}

pub fn export_cupom(path: &Path, result: &CupomResult) -> Result<(), CupomError> {
    let file = File::create(path).map_err(|e| CupomError::Export {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    write_cupom_csv(file, result)
}

pub fn export_devolucao(path: &Path, report: &DevolucaoReport) -> Result<(), CupomError> {
    let file = File::create(path).map_err(|e| CupomError::Export {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    write_devolucao_csv(file, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devolucao::compare_codes;
    use crate::model::LineItem;
    use rust_decimal_macros::dec;

    fn sample_result() -> CupomResult {
        CupomResult {
            item_count: 1,
            grand_total: dec!(45.00),
            total_discounts: dec!(5.00),
            items: vec![LineItem {
                sequence: 1,
                code: "7891234567890".to_string(),
                description: "ARROZ TIPO 1 5KG".to_string(),
                quantity: dec!(2.000),
                unit: "UN".to_string(),
                unit_price: dec!(25.00),
                total_price: dec!(50.00),
                discount: dec!(5.00),
            }],
        }
    }

    fn render(result: &CupomResult) -> String {
        let mut buf = Vec::new();
        write_cupom_csv(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(45)), "R$ 45,00");
        assert_eq!(format_currency(dec!(1234.5)), "R$ 1234,50");
        assert_eq!(format_currency(dec!(0)), "R$ 0,00");
    }

    #[test]
    fn test_cupom_csv_header_and_row() {
        let csv = render(&sample_result());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Item;Código;Descrição;Qtd;Un;V.Unit;Desconto;V.Total");
        assert_eq!(lines[1], "1;7891234567890;ARROZ TIPO 1 5KG;2.000;UN;25.00;5.00;50.00");
    }

    #[test]
    fn test_cupom_csv_summary_rows() {
        let csv = render(&sample_result());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Total itens:;;1;;;;;");
        assert_eq!(lines[4], "Total descontos:;;;;;;;R$ 5,00");
        assert_eq!(lines[5], "Total geral:;;;;;;;R$ 45,00");
    }

    #[test]
    fn test_devolucao_csv_rows() {
        let report = compare_codes("7891234567890\n1111111111111", &sample_result());
        let mut buf = Vec::new();
        write_devolucao_csv(&mut buf, &report).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Item;Código;Descrição;Valor Unitário;Valor Total;Status"
        );
        assert_eq!(lines[1], ";1111111111111;ITEM NÃO ENCONTRADO;;;DIVERGÊNCIA");
        assert_eq!(
            lines[2],
            "1;7891234567890;ARROZ TIPO 1 5KG;R$ 25,00;R$ 50,00;OK"
        );
    }
}
