use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One entry in the priority list
///
/// No uniqueness constraint: duplicate priorities and titles are allowed,
/// and the only identifier an item has is its position in the stored list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityItem {
    /// Priority level; lower is more important
    pub priority: i64,

    /// Title of the item
    pub title: String,

    /// Local creation time
    pub created: DateTime<Local>,
}

impl PriorityItem {
    /// Create an item stamped with the current local time
    pub fn new(priority: i64, title: impl Into<String>) -> Self {
        Self {
            priority,
            title: title.into(),
            created: Local::now(),
        }
    }
}

/// Return the items sorted ascending by priority.
///
/// The sort is stable: items with equal priority keep their stored
/// (insertion) order.
pub fn sorted_by_priority(items: &[PriorityItem]) -> Vec<&PriorityItem> {
    let mut sorted: Vec<&PriorityItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.priority);
    sorted
}
