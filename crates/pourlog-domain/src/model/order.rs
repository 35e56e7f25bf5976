use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Construction site the pour belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Site {
    A,
    B,
    C,
    D,
}

impl Site {
    pub const ALL: [Site; 4] = [Site::A, Site::B, Site::C, Site::D];

    pub fn label(&self) -> &'static str {
        match self {
            Site::A => "A",
            Site::B => "B",
            Site::C => "C",
            Site::D => "D",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Site::A),
            "B" | "b" => Ok(Site::B),
            "C" | "c" => Ok(Site::C),
            "D" | "d" => Ok(Site::D),
            other => Err(format!("unknown site: {}", other)),
        }
    }
}

/// Concrete strength class offered on the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcreteType {
    /// C12/15 (podkladní beton)
    #[serde(rename = "C12/15")]
    C12,
    /// C20/25
    #[serde(rename = "C20/25")]
    C20,
    /// C30/37 with 90-day strength verification
    #[serde(rename = "C30/37, 90d")]
    C30D90,
}

impl ConcreteType {
    pub const ALL: [ConcreteType; 3] = [ConcreteType::C12, ConcreteType::C20, ConcreteType::C30D90];

    pub fn label(&self) -> &'static str {
        match self {
            ConcreteType::C12 => "C12/15",
            ConcreteType::C20 => "C20/25",
            ConcreteType::C30D90 => "C30/37, 90d",
        }
    }
}

impl fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConcreteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ConcreteType::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown concrete type: {}", s))
    }
}

/// Delivery method (pump reach)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delivery {
    /// pumpa 24m
    #[serde(rename = "pumpa 24m")]
    Pump24,
    /// pumpa 42m
    #[serde(rename = "pumpa 42m")]
    Pump42,
    /// pumpa 56m
    #[serde(rename = "pumpa 56m")]
    Pump56,
}

impl Delivery {
    pub const ALL: [Delivery; 3] = [Delivery::Pump24, Delivery::Pump42, Delivery::Pump56];

    pub fn label(&self) -> &'static str {
        match self {
            Delivery::Pump24 => "pumpa 24m",
            Delivery::Pump42 => "pumpa 42m",
            Delivery::Pump56 => "pumpa 56m",
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Delivery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Delivery::ALL
            .iter()
            .copied()
            .find(|d| d.label() == s)
            .ok_or_else(|| format!("unknown delivery method: {}", s))
    }
}

/// One concrete-pour order (a single row of the order table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub date: Option<NaiveDate>,     // Datum
    pub site: Site,                  // Objekt
    pub element: String,             // Konstrukce
    pub concrete_type: ConcreteType, // Typ betonu
    pub ordered_m3: f64,             // Objednané množství [m3]
    pub actual_m3: f64,              // Skutečné množství [m3]
    pub delivery: Delivery,          // Typ vykládky
    pub person: String,              // Zodpovědná osoba
    pub start_time: NaiveTime,       // Začátek betonáže
    pub road_blockage: String,       // Blokace komunikace
    pub note: String,                // Poznámka
}

/// Insertion-ordered table of pour orders
///
/// Rows have no identity beyond their position; the table only ever grows by
/// appending at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTable {
    rows: Vec<OrderRecord>,
}

impl OrderTable {
    /// Backing-file column headers, in storage order
    pub const COLUMNS: [&'static str; 11] = [
        "Datum",
        "Objekt",
        "Konstrukce",
        "Typ betonu",
        "Objednané množství [m3]",
        "Skutečné množství [m3]",
        "Typ vykládky",
        "Zodpovědná osoba",
        "Začátek betonáže",
        "Blokace komunikace",
        "Poznámka",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<OrderRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[OrderRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return a new table with `record` appended; existing rows keep
    /// their order.
    pub fn append(&self, record: OrderRecord) -> OrderTable {
        let mut rows = self.rows.clone();
        rows.push(record);
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a OrderTable {
    type Item = &'a OrderRecord;
    type IntoIter = std::slice::Iter<'a, OrderRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
