//! CSV-backed order store
//!
//! The backing file is a single CSV table with the fixed eleven-column
//! header. Loads read the whole file, saves rewrite it through a temp file
//! and rename so a crash cannot leave a truncated table behind.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};

use pourlog_domain::model::{ConcreteType, Delivery, OrderRecord, OrderTable, Site};
use pourlog_domain::repository::OrderStore;
use pourlog_types::{Result, StoreError};

/// Default backing file, kept next to the working directory like the
/// original order book.
pub const DEFAULT_DATA_FILE: &str = "objednavky_betonu.csv";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// File-backed implementation of `OrderStore`
pub struct CsvOrderStore {
    path: PathBuf,
}

impl CsvOrderStore {
    /// Create a store over `path`. The file is not touched until the first
    /// load or save.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderStore for CsvOrderStore {
    fn load(&self) -> Result<OrderTable> {
        if !self.path.exists() {
            return Ok(OrderTable::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        parse_table(&content).map_err(Into::into)
    }

    fn save(&self, table: &OrderTable) -> Result<()> {
        let content = render_table(table)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        // Write the full table to a sibling temp file, then rename over the
        // target so readers never observe a half-written table.
        let tmp_path = self.path.with_extension("csv.tmp");
        fs::write(&tmp_path, content).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }
}

fn parse_table(content: &str) -> std::result::Result<OrderTable, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| StoreError::Csv(e.to_string()))?;
    if !headers.iter().eq(OrderTable::COLUMNS) {
        return Err(StoreError::Corrupt {
            row: 1,
            message: format!("unexpected header: {:?}", headers),
        });
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 2; // header is row 1
        let record = result.map_err(|e| StoreError::Csv(e.to_string()))?;
        rows.push(parse_record(&record, row)?);
    }

    Ok(OrderTable::from_rows(rows))
}

fn parse_record(
    record: &csv::StringRecord,
    row: usize,
) -> std::result::Result<OrderRecord, StoreError> {
    // A blank date is a legal legacy row and classifies as "?"; any other
    // malformed cell means the table is damaged.
    let date_cell = cell(record, 0, row)?;
    let date = if date_cell.is_empty() {
        None
    } else {
        Some(
            NaiveDate::parse_from_str(date_cell, DATE_FORMAT).map_err(|e| {
                corrupt(row, format!("bad date {:?}: {}", date_cell, e))
            })?,
        )
    };

    let site: Site = cell(record, 1, row)?.parse().map_err(|e| corrupt(row, e))?;
    let element = cell(record, 2, row)?.to_string();
    let concrete_type: ConcreteType =
        cell(record, 3, row)?.parse().map_err(|e| corrupt(row, e))?;
    let ordered_m3 = parse_volume(cell(record, 4, row)?, row, OrderTable::COLUMNS[4])?;
    let actual_m3 = parse_volume(cell(record, 5, row)?, row, OrderTable::COLUMNS[5])?;
    let delivery: Delivery = cell(record, 6, row)?.parse().map_err(|e| corrupt(row, e))?;
    let person = cell(record, 7, row)?.to_string();
    let start_time = parse_time(cell(record, 8, row)?, row)?;
    let road_blockage = cell(record, 9, row)?.to_string();
    let note = cell(record, 10, row)?.to_string();

    Ok(OrderRecord {
        date,
        site,
        element,
        concrete_type,
        ordered_m3,
        actual_m3,
        delivery,
        person,
        start_time,
        road_blockage,
        note,
    })
}

fn cell<'a>(
    record: &'a csv::StringRecord,
    col: usize,
    row: usize,
) -> std::result::Result<&'a str, StoreError> {
    record.get(col).ok_or_else(|| StoreError::Corrupt {
        row,
        message: format!("missing column {}", OrderTable::COLUMNS[col]),
    })
}

fn corrupt(row: usize, message: String) -> StoreError {
    StoreError::Corrupt { row, message }
}

fn parse_volume(value: &str, row: usize, column: &str) -> std::result::Result<f64, StoreError> {
    value.parse::<f64>().map_err(|_| StoreError::Corrupt {
        row,
        message: format!("bad number in {}: {:?}", column, value),
    })
}

fn parse_time(value: &str, row: usize) -> std::result::Result<NaiveTime, StoreError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| StoreError::Corrupt {
            row,
            message: format!("bad time: {:?}", value),
        })
}

fn render_table(table: &OrderTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(OrderTable::COLUMNS)
        .map_err(|e| StoreError::Csv(e.to_string()))?;

    for record in table {
        let date = record
            .date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        let ordered = record.ordered_m3.to_string();
        let actual = record.actual_m3.to_string();
        let start = record.start_time.format(TIME_FORMAT).to_string();

        writer
            .write_record([
                date.as_str(),
                record.site.label(),
                record.element.as_str(),
                record.concrete_type.label(),
                ordered.as_str(),
                actual.as_str(),
                record.delivery.label(),
                record.person.as_str(),
                start.as_str(),
                record.road_blockage.as_str(),
                record.note.as_str(),
            ])
            .map_err(|e| StoreError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StoreError::Csv(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(date: Option<NaiveDate>, ordered: f64) -> OrderRecord {
        OrderRecord {
            date,
            site: Site::A,
            element: "pilíř P3".to_string(),
            concrete_type: ConcreteType::C20,
            ordered_m3: ordered,
            actual_m3: 0.0,
            delivery: Delivery::Pump24,
            person: "Dvořák".to_string(),
            start_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            road_blockage: "ul. Krátká".to_string(),
            note: "drát, vibrátor".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_returns_empty_table() {
        let dir = tempdir().unwrap();
        let store = CsvOrderStore::new(dir.path().join("missing.csv"));

        let table = store.load().unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = CsvOrderStore::new(dir.path().join("orders.csv"));

        let table = OrderTable::from_rows(vec![
            record(NaiveDate::from_ymd_opt(2024, 5, 15), 12.5),
            record(None, 7.0),
        ]);

        store.save(&table).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_fractional_volumes_survive_round_trip() {
        let dir = tempdir().unwrap();
        let store = CsvOrderStore::new(dir.path().join("orders.csv"));

        let mut row = record(NaiveDate::from_ymd_opt(2024, 6, 1), 0.1);
        row.actual_m3 = 33.3;
        store.save(&OrderTable::from_rows(vec![row])).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.rows()[0].ordered_m3, 0.1);
        assert_eq!(loaded.rows()[0].actual_m3, 33.3);
    }

    #[test]
    fn test_save_rewrites_whole_file() {
        let dir = tempdir().unwrap();
        let store = CsvOrderStore::new(dir.path().join("orders.csv"));

        let big = OrderTable::from_rows(vec![
            record(NaiveDate::from_ymd_opt(2024, 5, 15), 1.0),
            record(NaiveDate::from_ymd_opt(2024, 5, 16), 2.0),
        ]);
        store.save(&big).unwrap();

        let small = OrderTable::from_rows(vec![record(None, 3.0)]);
        store.save(&small).unwrap();

        assert_eq!(store.load().unwrap(), small);
    }

    #[test]
    fn test_header_is_written_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let store = CsvOrderStore::new(path.clone());

        store.save(&OrderTable::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let first_line = content.lines().next().unwrap();
        assert!(first_line.starts_with("Datum,Objekt,Konstrukce,Typ betonu"));
        assert!(first_line.ends_with("Poznámka"));
    }

    #[test]
    fn test_unexpected_header_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(&path, "Datum,Objekt\n2024-05-15,A\n").unwrap();

        let store = CsvOrderStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_bad_cells_are_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let store = CsvOrderStore::new(path.clone());
        let header = OrderTable::COLUMNS.join(",");

        // bad volume
        let bad_volume = format!(
            "{}\n2024-05-15,A,,C20/25,hodne,0,pumpa 24m,,07:30,,\n",
            header
        );
        fs::write(&path, bad_volume).unwrap();
        assert!(store.load().is_err());

        // bad concrete type
        let bad_enum = format!(
            "{}\n2024-05-15,A,,C99/99,1.0,0,pumpa 24m,,07:30,,\n",
            header
        );
        fs::write(&path, bad_enum).unwrap();
        assert!(store.load().is_err());

        // bad date (non-blank)
        let bad_date = format!(
            "{}\n15.05.2024,A,,C20/25,1.0,0,pumpa 24m,,07:30,,\n",
            header
        );
        fs::write(&path, bad_date).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_blank_date_loads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let header = OrderTable::COLUMNS.join(",");
        let content = format!("{}\n,B,,C12/15,2.5,0,pumpa 42m,,09:00,,\n", header);
        fs::write(&path, content).unwrap();

        let store = CsvOrderStore::new(path);
        let table = store.load().unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.rows()[0].date.is_none());
        assert_eq!(table.rows()[0].site, Site::B);
    }

    #[test]
    fn test_seconds_in_time_cell_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let header = OrderTable::COLUMNS.join(",");
        let content = format!(
            "{}\n2024-05-15,C,,C20/25,1.0,0,pumpa 56m,,07:30:00,,\n",
            header
        );
        fs::write(&path, content).unwrap();

        let store = CsvOrderStore::new(path);
        let table = store.load().unwrap();
        assert_eq!(
            table.rows()[0].start_time,
            NaiveTime::from_hms_opt(7, 30, 0).unwrap()
        );
    }
}
