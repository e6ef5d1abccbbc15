use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    Completed,
    Overdue,
}

impl JobStatus {
    /// CSS class used to tint the status label wherever it is displayed.
    pub fn color(&self) -> &'static str {
        match self {
            JobStatus::Pending => "text-yellow-600",
            JobStatus::Completed => "text-green-600",
            JobStatus::Overdue => "text-red-600",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "Pending"),
            JobStatus::Completed => write!(f, "Completed"),
            JobStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

/// A single maintenance task with its assignment and date metadata.
///
/// Records are only built through the status-specific constructors, which
/// keep the date fields consistent with the status: a completed order carries
/// a completion date and no expected date, an open order the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOrder {
    pub title: String,
    pub assigned_to: String,
    pub status: JobStatus,
    pub expected_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
}

impl JobOrder {
    /// An open order, optionally with a known due date.
    pub fn pending(
        title: impl Into<String>,
        assigned_to: impl Into<String>,
        expected_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            title: title.into(),
            assigned_to: assigned_to.into(),
            status: JobStatus::Pending,
            expected_date,
            completion_date: None,
        }
    }

    /// A finished order. The due date is dropped once work is done.
    pub fn completed(
        title: impl Into<String>,
        assigned_to: impl Into<String>,
        completion_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            assigned_to: assigned_to.into(),
            status: JobStatus::Completed,
            expected_date: None,
            completion_date: Some(completion_date),
        }
    }

    /// An order whose due date has passed without completion.
    pub fn overdue(
        title: impl Into<String>,
        assigned_to: impl Into<String>,
        expected_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            assigned_to: assigned_to.into(),
            status: JobStatus::Overdue,
            expected_date: Some(expected_date),
            completion_date: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }
}
