//! Store trait for the order table

use crate::model::OrderTable;
use pourlog_types::Error;

/// Durable store for the pour-order table
///
/// Every `load` re-reads the backing store in full and every `save` rewrites
/// it in full; there is no caching and no partial write.
pub trait OrderStore {
    /// Load the full table. A missing backing file yields an empty table
    /// with the fixed column schema; an unreadable or corrupt file is an
    /// error and no partial table is returned.
    fn load(&self) -> Result<OrderTable, Error>;

    /// Rewrite the backing store with the full table. On failure the prior
    /// contents are left as they were.
    fn save(&self, table: &OrderTable) -> Result<(), Error>;
}
