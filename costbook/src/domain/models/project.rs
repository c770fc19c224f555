use serde::{Deserialize, Serialize};

use super::ProjectId;

/// A project that hours and costs can be booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOption {
    pub id: ProjectId,
    pub title: String,
    /// Free-form status label, e.g. "planning", "in-progress", "completed".
    #[serde(default)]
    pub status: String,
}

impl ProjectOption {
    pub fn new(id: impl Into<ProjectId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: String::new(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}
