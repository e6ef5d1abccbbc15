pub mod catalog;
pub mod order;

pub use catalog::OrderCatalog;
pub use order::{JobOrder, JobStatus};
