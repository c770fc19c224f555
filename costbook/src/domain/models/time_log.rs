use serde::{Deserialize, Serialize};
use time::Date;

use super::{iso_date, EntryId, MemberId, ProjectId, RateCard};

/// Hours a member spent on a project on a given day.
///
/// `member_name` and `member_role` are a snapshot taken when the entry was
/// logged. They are never re-resolved, so an entry keeps the role (and rate)
/// the member had at that time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogEntry {
    pub id: EntryId,
    pub project_id: ProjectId,
    pub member_id: MemberId,
    pub member_name: String,
    pub member_role: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimeLogEntry {
    /// Cost of this entry at the rate of its snapshotted role.
    pub fn cost(&self, rates: &RateCard) -> f64 {
        self.hours * rates.hourly_rate(&self.member_role)
    }
}

/// An unvalidated "log hours" submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLogDraft {
    pub project_id: ProjectId,
    pub member_id: Option<MemberId>,
    pub hours: f64,
    pub date: Option<Date>,
    pub description: Option<String>,
}

impl TimeLogDraft {
    pub fn new(project_id: impl Into<ProjectId>) -> Self {
        Self {
            project_id: project_id.into(),
            member_id: None,
            hours: 0.0,
            date: None,
            description: None,
        }
    }

    pub fn with_member(mut self, member_id: impl Into<MemberId>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_rate_card;
    use time::macros::date;

    fn entry(role: &str, hours: f64) -> TimeLogEntry {
        TimeLogEntry {
            id: EntryId::from("tl-1"),
            project_id: ProjectId::from("proj-1"),
            member_id: MemberId::from("member-1"),
            member_name: "Sarah Chen".to_string(),
            member_role: role.to_string(),
            date: date!(2026 - 01 - 28),
            hours,
            description: None,
        }
    }

    #[test]
    fn cost_uses_snapshotted_role_rate() {
        let rates = default_rate_card();
        assert_eq!(entry("Senior Developer", 8.0).cost(&rates), 800.0);
        assert_eq!(entry("Unknown", 8.0).cost(&rates), 0.0);
    }

    #[test]
    fn date_serializes_as_iso_calendar_date() {
        let json = serde_json::to_value(entry("Developer", 1.5)).unwrap();
        assert_eq!(json["date"], "2026-01-28");
        assert!(json.get("description").is_none());

        let back: TimeLogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back.date, date!(2026 - 01 - 28));
    }
}
