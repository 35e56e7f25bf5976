//! Excel export functionality
//!
//! Renders the order table as an xlsx workbook, either into memory (the
//! download stream) or to a file. The backing store is never touched.

use std::path::Path;

use chrono::{Datelike, NaiveDate, Timelike};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};

use pourlog_domain::model::OrderTable;
use pourlog_domain::service::classify;
use pourlog_types::{Error, Result};

/// Conventional download name for exported workbooks
pub const EXPORT_FILE_NAME: &str = "objednavky_betonu.xlsx";

/// Render the table into an in-memory xlsx byte stream.
pub fn export_to_buffer(table: &OrderTable, today: NaiveDate) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(table, today)?;
    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(e.to_string()))
}

/// Render the table into an xlsx file at `output_path`.
pub fn export_to_file(table: &OrderTable, today: NaiveDate, output_path: &Path) -> Result<()> {
    let mut workbook = build_workbook(table, today)?;
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;
    Ok(())
}

fn build_workbook(table: &OrderTable, today: NaiveDate) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_orders_sheet(sheet, table, today)?;

    Ok(workbook)
}

fn write_orders_sheet(sheet: &mut Worksheet, table: &OrderTable, today: NaiveDate) -> Result<()> {
    sheet
        .set_name("Objednávky")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let time_format = Format::new().set_num_format("hh:mm");

    // Fixed columns plus the derived status column at the end
    for (col, header) in OrderTable::COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }
    sheet
        .write_string_with_format(0, OrderTable::COLUMNS.len() as u16, "Stav", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    for (row_idx, record) in table.rows().iter().enumerate() {
        let row = (row_idx + 1) as u32;

        if let Some(date) = record.date {
            let cell = ExcelDateTime::from_ymd(
                date.year() as u16,
                date.month() as u8,
                date.day() as u8,
            )
            .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_datetime_with_format(row, 0, cell, &date_format)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }

        sheet
            .write_string(row, 1, record.site.label())
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 2, &record.element)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 3, record.concrete_type.label())
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_number(row, 4, record.ordered_m3)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_number(row, 5, record.actual_m3)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 6, record.delivery.label())
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 7, &record.person)
            .map_err(|e| Error::Excel(e.to_string()))?;

        let start = ExcelDateTime::from_hms(
            record.start_time.hour() as u16,
            record.start_time.minute() as u8,
            record.start_time.second(),
        )
        .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_datetime_with_format(row, 8, start, &time_format)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 9, &record.road_blockage)
            .map_err(|e| Error::Excel(e.to_string()))?;

        sheet
            .write_string(row, 10, &record.note)
            .map_err(|e| Error::Excel(e.to_string()))?;

        let status = classify(record.date, today);
        sheet
            .write_string(row, 11, status.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 12)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(3, 12)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(6, 12)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(7, 18)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(10, 40)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
