//! Domain model types

pub mod order;

pub use order::{ConcreteType, Delivery, OrderRecord, OrderTable, Site};
