//! Derived scheduling status for pour orders
//!
//! Status is a projection of the order date against a reference date. It is
//! computed at view time and never persisted, so it cannot go stale against
//! the table's actual dates.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{OrderRecord, OrderTable};

/// Scheduling status of an order relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No usable date on the record
    Unknown,
    Today,
    Tomorrow,
    Past,
    Planned,
}

impl Status {
    /// Display label as shown in the order overview
    pub fn label(&self) -> &'static str {
        match self {
            Status::Unknown => "?",
            Status::Today => "DNES",
            Status::Tomorrow => "ZÍTRA",
            Status::Past => "MINULOST",
            Status::Planned => "PLÁN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an order date against `today`.
///
/// Checks run in priority order: missing date, today, tomorrow, past,
/// then everything later than tomorrow is planned.
pub fn classify(date: Option<NaiveDate>, today: NaiveDate) -> Status {
    let Some(date) = date else {
        return Status::Unknown;
    };

    if date == today {
        Status::Today
    } else if Some(date) == today.succ_opt() {
        Status::Tomorrow
    } else if date < today {
        Status::Past
    } else {
        Status::Planned
    }
}

/// Filter selection for order listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Today,
    Tomorrow,
    Planned,
    Past,
    Unknown,
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Today => status == Status::Today,
            StatusFilter::Tomorrow => status == Status::Tomorrow,
            StatusFilter::Planned => status == Status::Planned,
            StatusFilter::Past => status == Status::Past,
            StatusFilter::Unknown => status == Status::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "vse",
            StatusFilter::Today => "dnes",
            StatusFilter::Tomorrow => "zitra",
            StatusFilter::Planned => "plan",
            StatusFilter::Past => "minulost",
            StatusFilter::Unknown => "neznamy",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vse" | "vše" | "all" => Ok(StatusFilter::All),
            "dnes" => Ok(StatusFilter::Today),
            "zitra" | "zítra" => Ok(StatusFilter::Tomorrow),
            "plan" | "plán" => Ok(StatusFilter::Planned),
            "minulost" => Ok(StatusFilter::Past),
            "neznamy" | "neznámý" => Ok(StatusFilter::Unknown),
            other => Err(format!("unknown status filter: {}", other)),
        }
    }
}

/// Project the sub-table whose computed status matches `filter`.
///
/// Read-only: row order is preserved and nothing is persisted. `All` returns
/// the table unchanged.
pub fn filter_by_status(table: &OrderTable, today: NaiveDate, filter: StatusFilter) -> OrderTable {
    if filter == StatusFilter::All {
        return table.clone();
    }

    OrderTable::from_rows(
        table
            .rows()
            .iter()
            .filter(|r| filter.matches(classify(r.date, today)))
            .cloned()
            .collect(),
    )
}

/// Pair every row with its computed status, preserving row order.
pub fn annotate(table: &OrderTable, today: NaiveDate) -> Vec<(OrderRecord, Status)> {
    table
        .rows()
        .iter()
        .map(|r| (r.clone(), classify(r.date, today)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConcreteType, Delivery, Site};
    use chrono::{Duration, NaiveTime};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    fn record(date: Option<NaiveDate>) -> OrderRecord {
        OrderRecord {
            date,
            site: Site::B,
            element: String::new(),
            concrete_type: ConcreteType::C12,
            ordered_m3: 5.0,
            actual_m3: 0.0,
            delivery: Delivery::Pump42,
            person: String::new(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            road_blockage: String::new(),
            note: String::new(),
        }
    }

    #[test]
    fn test_classify_pinned_cases() {
        let t = today();
        assert_eq!(classify(Some(t), t), Status::Today);
        assert_eq!(classify(Some(t + Duration::days(1)), t), Status::Tomorrow);
        assert_eq!(classify(Some(t - Duration::days(1)), t), Status::Past);
        assert_eq!(classify(Some(t + Duration::days(10)), t), Status::Planned);
        assert_eq!(classify(None, t), Status::Unknown);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let t = today();
        for offset in -30..30 {
            let d = Some(t + Duration::days(offset));
            assert_eq!(classify(d, t), classify(d, t));
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let t = today();
        let table = OrderTable::from_rows(vec![
            record(Some(t)),
            record(Some(t - Duration::days(3))),
            record(None),
        ]);
        assert_eq!(filter_by_status(&table, t, StatusFilter::All), table);
    }

    #[test]
    fn test_filter_keeps_matching_rows_in_order() {
        let t = today();
        let today_first = record(Some(t));
        let past = record(Some(t - Duration::days(2)));
        let today_second = record(Some(t));
        let table = OrderTable::from_rows(vec![
            today_first.clone(),
            past,
            today_second.clone(),
        ]);

        let filtered = filter_by_status(&table, t, StatusFilter::Today);
        assert_eq!(filtered.rows(), &[today_first, today_second]);

        assert!(filter_by_status(&table, t, StatusFilter::Tomorrow).is_empty());
    }

    #[test]
    fn test_annotate_pairs_rows_with_status() {
        let t = today();
        let table = OrderTable::from_rows(vec![record(Some(t)), record(None)]);
        let annotated = annotate(&table, t);
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].1, Status::Today);
        assert_eq!(annotated[1].1, Status::Unknown);
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("vse".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("DNES".parse::<StatusFilter>().unwrap(), StatusFilter::Today);
        assert_eq!("zítra".parse::<StatusFilter>().unwrap(), StatusFilter::Tomorrow);
        assert!("vcera".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Today.label(), "DNES");
        assert_eq!(Status::Tomorrow.label(), "ZÍTRA");
        assert_eq!(Status::Past.label(), "MINULOST");
        assert_eq!(Status::Planned.label(), "PLÁN");
        assert_eq!(Status::Unknown.label(), "?");
    }
}
