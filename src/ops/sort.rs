use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::item::Item;
use crate::model::list::TodoList;

/// Format used for due dates entered through the item form
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A sortable column of the item table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Task,
    DueDate,
    Status,
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortColumn::Task => write!(f, "Task"),
            SortColumn::DueDate => write!(f, "Due Date"),
            SortColumn::Status => write!(f, "Status"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Increasing,
    Decreasing,
}

/// One of the six ways the item table can be ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortCriterion {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub const TASK_INCREASING: SortCriterion = SortCriterion::increasing(SortColumn::Task);
    pub const TASK_DECREASING: SortCriterion = SortCriterion::decreasing(SortColumn::Task);
    pub const DUE_DATE_INCREASING: SortCriterion = SortCriterion::increasing(SortColumn::DueDate);
    pub const DUE_DATE_DECREASING: SortCriterion = SortCriterion::decreasing(SortColumn::DueDate);
    pub const STATUS_INCREASING: SortCriterion = SortCriterion::increasing(SortColumn::Status);
    pub const STATUS_DECREASING: SortCriterion = SortCriterion::decreasing(SortColumn::Status);

    pub const fn increasing(column: SortColumn) -> Self {
        SortCriterion {
            column,
            direction: SortDirection::Increasing,
        }
    }

    pub const fn decreasing(column: SortColumn) -> Self {
        SortCriterion {
            column,
            direction: SortDirection::Decreasing,
        }
    }

    /// Criterion after the user clicks a column header: the same column
    /// flips from increasing to decreasing, anything else starts increasing.
    pub fn after_click(column: SortColumn, current: Option<SortCriterion>) -> SortCriterion {
        if current == Some(SortCriterion::increasing(column)) {
            SortCriterion::decreasing(column)
        } else {
            SortCriterion::increasing(column)
        }
    }

    /// Compare two items under this criterion
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        // Decreasing variants run the same comparator with the operands swapped
        let (a, b) = match self.direction {
            SortDirection::Increasing => (a, b),
            SortDirection::Decreasing => (b, a),
        };
        match self.column {
            SortColumn::Task => a.description.cmp(&b.description),
            SortColumn::DueDate => compare_due_dates(&a.due_date, &b.due_date),
            SortColumn::Status => a.completed.cmp(&b.completed),
        }
    }
}

/// Real dates sort chronologically and ahead of free text like "Unknown";
/// two non-dates fall back to text order.
pub fn compare_due_dates(a: &str, b: &str) -> Ordering {
    match (parse_due_date(a), parse_due_date(b)) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

pub fn parse_due_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DUE_DATE_FORMAT).ok()
}

/// Stable sort of a list's items; ties keep their current relative order.
pub fn sort_items(list: &mut TodoList, criterion: SortCriterion) {
    list.sort_by(|a, b| criterion.compare(a, b));
}
