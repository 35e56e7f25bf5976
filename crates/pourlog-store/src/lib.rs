//! Store backends for the pour-order table
//!
//! `CsvOrderStore` is the durable file-backed store; `MemoryOrderStore`
//! provides the same contract in process memory for tests and previews.

mod csv_store;
mod memory;

pub use csv_store::{CsvOrderStore, DEFAULT_DATA_FILE};
pub use memory::MemoryOrderStore;
