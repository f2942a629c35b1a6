use cupom_core::devolucao::DevolucaoReport;
use cupom_core::export::format_currency;
use cupom_core::model::CupomResult;

pub fn print_cupom(result: &CupomResult) {
    let desc_width = result
        .items
        .iter()
        .map(|i| i.description.chars().count())
        .max()
        .unwrap_or(0)
        .max("Descrição".chars().count());

    println!(
        "{:>4}  {:<13}  {:<desc_width$}  {:>9}  {:<3}  {:>10}  {:>10}  {:>10}",
        "Item", "Código", "Descrição", "Qtd", "Un", "V.Unit", "Desconto", "V.Total",
    );

    for item in &result.items {
        let desconto = if item.discount.is_zero() {
            "-".to_string()
        } else {
            format_currency(item.discount)
        };
        println!(
            "{:>4}  {:<13}  {:<desc_width$}  {:>9.3}  {:<3}  {:>10}  {:>10}  {:>10}",
            item.sequence,
            item.code,
            item.description,
            item.quantity,
            item.unit,
            format_currency(item.unit_price),
            desconto,
            format_currency(item.total_price),
        );
    }

    println!();
    println!(
        "Total: {} | Itens: {} | Descontos: {}",
        format_currency(result.grand_total),
        result.item_count,
        format_currency(result.total_discounts),
    );
}

pub fn print_devolucao(report: &DevolucaoReport) {
    let desc_width = report
        .rows
        .iter()
        .map(|r| r.description.chars().count())
        .max()
        .unwrap_or(0)
        .max("Descrição".chars().count());

    println!(
        "{:>4}  {:<13}  {:<desc_width$}  {:>12}  {:>12}  {:<12}",
        "Item", "Código", "Descrição", "Valor Unit", "Valor Total", "Status",
    );

    for row in &report.rows {
        let sequence = row.sequence.map(|s| s.to_string()).unwrap_or_default();
        let unit_price = row.unit_price.map(format_currency).unwrap_or_default();
        let total_price = row.total_price.map(format_currency).unwrap_or_default();
        println!(
            "{:>4}  {:<13}  {:<desc_width$}  {:>12}  {:>12}  {:<12}",
            sequence, row.code, row.description, unit_price, total_price, row.status,
        );
    }

    println!();
    println!("Itens verificados: {}", report.checked);
    println!("Divergências encontradas: {}", report.divergences);
}
