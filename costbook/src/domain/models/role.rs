use serde::{Deserialize, Serialize};

use super::{default_currency, RoleId};

pub const DEFAULT_CURRENCY: &str = "USD";

/// Hourly rate for a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCost {
    pub id: RoleId,
    pub role: String,
    pub hourly_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl RoleCost {
    pub fn new(id: impl Into<RoleId>, role: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            hourly_rate,
            currency: default_currency(),
        }
    }
}

/// The set of role rates used for labor cost lookups, keyed by role name.
///
/// Role names are unique within a card; [`crate::BudgetConfig`] enforces this
/// on every edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateCard(Vec<RoleCost>);

impl RateCard {
    pub fn new(roles: Vec<RoleCost>) -> Self {
        Self(roles)
    }

    /// Hourly rate for `role_name`, or 0 when no role matches.
    pub fn hourly_rate(&self, role_name: &str) -> f64 {
        self.find_by_name(role_name)
            .map(|r| r.hourly_rate)
            .unwrap_or(0.0)
    }

    pub fn find_by_name(&self, role_name: &str) -> Option<&RoleCost> {
        self.0.iter().find(|r| r.role == role_name)
    }

    pub fn find(&self, id: &RoleId) -> Option<&RoleCost> {
        self.0.iter().find(|r| &r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleCost> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn roles_mut(&mut self) -> &mut Vec<RoleCost> {
        &mut self.0
    }
}

impl FromIterator<RoleCost> for RateCard {
    fn from_iter<T: IntoIterator<Item = RoleCost>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The rate card the dashboard ships with.
pub fn default_rate_card() -> RateCard {
    [
        ("1", "Director", 150.0),
        ("2", "Senior Developer", 100.0),
        ("3", "Developer", 75.0),
        ("4", "Designer", 80.0),
        ("5", "Project Manager", 90.0),
        ("6", "QA Engineer", 60.0),
    ]
    .into_iter()
    .map(|(id, role, rate)| RoleCost::new(id, role, rate))
    .collect()
}
