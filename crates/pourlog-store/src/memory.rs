//! In-memory order store
//!
//! Backend for tests and previews; same contract as the file store without
//! touching the filesystem.

use std::sync::RwLock;

use pourlog_domain::model::OrderTable;
use pourlog_domain::repository::OrderStore;
use pourlog_types::Error;

/// In-process implementation of `OrderStore`
#[derive(Default)]
pub struct MemoryOrderStore {
    table: RwLock<OrderTable>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: OrderTable) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }
}

impl OrderStore for MemoryOrderStore {
    fn load(&self) -> Result<OrderTable, Error> {
        Ok(self.table.read().unwrap().clone())
    }

    fn save(&self, table: &OrderTable) -> Result<(), Error> {
        *self.table.write().unwrap() = table.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pourlog_domain::model::{ConcreteType, Delivery, OrderRecord, Site};

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryOrderStore::new();
        assert!(store.load().unwrap().is_empty());

        let table = OrderTable::new().append(OrderRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 15),
            site: Site::D,
            element: String::new(),
            concrete_type: ConcreteType::C30D90,
            ordered_m3: 4.2,
            actual_m3: 4.0,
            delivery: Delivery::Pump56,
            person: String::new(),
            start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            road_blockage: String::new(),
            note: String::new(),
        });

        store.save(&table).unwrap();
        assert_eq!(store.load().unwrap(), table);
    }
}
