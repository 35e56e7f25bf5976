//! Output formatting module

use serde::Serialize;

use pourlog_domain::model::OrderRecord;
use pourlog_domain::service::Status;
use pourlog_types::{OutputFormat, Result};

#[derive(Serialize)]
struct OrderRow<'a> {
    #[serde(flatten)]
    order: &'a OrderRecord,
    stav: &'static str,
}

pub fn print_orders(format: OutputFormat, entries: &[(OrderRecord, Status)]) -> Result<()> {
    if format == OutputFormat::Json {
        let rows: Vec<OrderRow> = entries
            .iter()
            .map(|(order, status)| OrderRow {
                order,
                stav: status.label(),
            })
            .collect();
        let content = serde_json::to_string_pretty(&rows)?;
        println!("{}", content);
        return Ok(());
    }

    // Table format
    println!("\nPřehled objednávek");
    println!("==================");
    println!(
        "{:<10} {:<8} {:<6} {:<12} {:>10} {:>10} {:<10} {:<7} {}",
        "Datum", "Stav", "Objekt", "Typ betonu", "Objednáno", "Skutečně", "Vykládka", "Začátek", "Osoba"
    );
    println!("{}", "-".repeat(92));

    for (order, status) in entries {
        let date = order
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:<8} {:<6} {:<12} {:>10.1} {:>10.1} {:<10} {:<7} {}",
            date,
            status.label(),
            order.site.label(),
            order.concrete_type.label(),
            order.ordered_m3,
            order.actual_m3,
            order.delivery.label(),
            order.start_time.format("%H:%M").to_string(),
            order.person
        );
    }

    println!("{}", "-".repeat(92));
    println!("Celkem: {}", entries.len());

    Ok(())
}
