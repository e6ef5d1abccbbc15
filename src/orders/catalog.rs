use chrono::NaiveDate;

use crate::orders::order::JobOrder;

/// Insertion-ordered collection of job orders, built once at startup.
///
/// The catalog is read-only for the life of the process; every request
/// handler sees the same records in the same order. There is deliberately no
/// mutation API.
#[derive(Debug)]
pub struct OrderCatalog {
    orders: Vec<JobOrder>,
}

impl OrderCatalog {
    pub fn new(orders: Vec<JobOrder>) -> Self {
        Self { orders }
    }

    /// The reference data set served by the board.
    pub fn seeded() -> Self {
        Self::new(vec![
            JobOrder::pending("Fix Leaky Faucet", "Technician A", Some(ymd(2025, 9, 30))),
            JobOrder::completed("AC Unit Maintenance", "Technician B", ymd(2025, 9, 20)),
            JobOrder::overdue("Elevator Inspection", "Technician C", ymd(2025, 9, 15)),
        ])
    }

    pub fn all(&self) -> &[JobOrder] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// SAFETY: only called with hardcoded valid calendar dates
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is a valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::order::JobStatus;

    #[test]
    fn seeded_catalog_has_three_orders() {
        let catalog = OrderCatalog::seeded();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn seeded_catalog_preserves_insertion_order() {
        let catalog = OrderCatalog::seeded();
        let titles: Vec<&str> = catalog.all().iter().map(|o| o.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Fix Leaky Faucet", "AC Unit Maintenance", "Elevator Inspection"]
        );
    }

    #[test]
    fn seeded_catalog_statuses() {
        let catalog = OrderCatalog::seeded();
        let statuses: Vec<JobStatus> = catalog.all().iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![JobStatus::Pending, JobStatus::Completed, JobStatus::Overdue]
        );
    }

    #[test]
    fn seeded_dates_are_consistent_with_status() {
        for order in OrderCatalog::seeded().all() {
            if order.is_completed() {
                assert!(order.completion_date.is_some());
                assert!(order.expected_date.is_none());
            } else {
                assert!(order.completion_date.is_none());
            }
        }
    }

    #[test]
    fn empty_catalog() {
        let catalog = OrderCatalog::new(Vec::new());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.all().is_empty());
    }
}
