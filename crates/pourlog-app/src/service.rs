//! Order submission and listing use cases
//!
//! Wraps an `OrderStore` with the full load-modify-save cycle. Mutations are
//! serialized behind a mutex, so two submissions in one process cannot race
//! on the read-modify-write; concurrent writers from separate processes
//! still follow last-save-wins.

use std::sync::Mutex;

use chrono::NaiveDate;

use crate::export;
use crate::validation::validate_submission;
use pourlog_domain::model::{OrderRecord, OrderTable};
use pourlog_domain::repository::OrderStore;
use pourlog_domain::service::{annotate, filter_by_status, Status, StatusFilter};
use pourlog_types::Result;

/// Application service over a single order store
pub struct OrderService {
    store: Box<dyn OrderStore>,
    write_guard: Mutex<()>,
}

impl OrderService {
    pub fn new(store: Box<dyn OrderStore>) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    /// Validate and persist one new order: load, append, save.
    pub fn submit(&self, record: OrderRecord, today: NaiveDate) -> Result<()> {
        validate_submission(&record, today)?;

        let _guard = self.write_guard.lock().unwrap();
        let table = self.store.load()?;
        let table = table.append(record);
        self.store.save(&table)
    }

    /// Load the table and return the filtered rows with their status.
    pub fn list(&self, filter: StatusFilter, today: NaiveDate) -> Result<Vec<(OrderRecord, Status)>> {
        let table = self.store.load()?;
        let view = filter_by_status(&table, today, filter);
        Ok(annotate(&view, today))
    }

    /// Load the table and render the filtered view as xlsx bytes.
    pub fn export(&self, filter: StatusFilter, today: NaiveDate) -> Result<Vec<u8>> {
        let table = self.store.load()?;
        let view = filter_by_status(&table, today, filter);
        export::export_to_buffer(&view, today)
    }
}
