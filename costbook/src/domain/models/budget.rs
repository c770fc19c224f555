use serde::{Deserialize, Serialize};

use super::{MemberId, ProjectId};

/// Cost rollup for a single project. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBudget {
    pub project_id: ProjectId,
    pub labor_cost: f64,
    pub additional_cost: f64,
    pub total_budget: f64,
    pub hours_logged: f64,
    pub member_costs: Vec<MemberCostSummary>,
}

impl ProjectBudget {
    pub fn member(&self, member_id: &MemberId) -> Option<&MemberCostSummary> {
        self.member_costs.iter().find(|m| &m.member_id == member_id)
    }
}

/// Per-member rollup within one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCostSummary {
    pub member_id: MemberId,
    pub member_name: String,
    pub member_role: String,
    pub hours_logged: f64,
    pub labor_cost: f64,
    pub additional_costs: f64,
    pub total_cost: f64,
}

impl MemberCostSummary {
    pub(crate) fn new(
        member_id: MemberId,
        member_name: impl Into<String>,
        member_role: impl Into<String>,
    ) -> Self {
        Self {
            member_id,
            member_name: member_name.into(),
            member_role: member_role.into(),
            hours_logged: 0.0,
            labor_cost: 0.0,
            additional_costs: 0.0,
            total_cost: 0.0,
        }
    }

    pub(crate) fn add_labor(&mut self, hours: f64, hourly_rate: f64) {
        self.hours_logged += hours;
        self.labor_cost += hours * hourly_rate;
        self.total_cost = self.labor_cost + self.additional_costs;
    }

    pub(crate) fn add_additional(&mut self, amount: f64) {
        self.additional_costs += amount;
        self.total_cost = self.labor_cost + self.additional_costs;
    }
}
