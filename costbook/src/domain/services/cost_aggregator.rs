use std::collections::HashMap;

use tracing::debug;

use crate::domain::models::{
    AdditionalCostEntry, MemberCostSummary, MemberId, ProjectBudget, ProjectId, RateCard,
    TimeLogEntry,
};

/// Compute the budget rollup for `project_id`.
///
/// Only entries booked against `project_id` are considered. Each time log is
/// rated by its own snapshotted `member_role` (0 when the card has no such
/// role), and members are grouped by `member_id` with the name and role of
/// their first entry.
///
/// A member-attributed cost only shows up in `member_costs` when that member
/// has logged time on the project. The project's `additional_cost` always
/// counts every cost entry, attributed or not.
///
/// `member_costs` is in order of each member's first time log.
pub fn compute_project_budget(
    project_id: &ProjectId,
    time_logs: &[TimeLogEntry],
    additional_costs: &[AdditionalCostEntry],
    rates: &RateCard,
) -> ProjectBudget {
    let mut member_costs: Vec<MemberCostSummary> = Vec::new();
    let mut index_by_member: HashMap<&MemberId, usize> = HashMap::new();

    for log in time_logs.iter().filter(|l| &l.project_id == project_id) {
        let idx = *index_by_member.entry(&log.member_id).or_insert_with(|| {
            member_costs.push(MemberCostSummary::new(
                log.member_id.clone(),
                log.member_name.as_str(),
                log.member_role.as_str(),
            ));
            member_costs.len() - 1
        });

        member_costs[idx].add_labor(log.hours, rates.hourly_rate(&log.member_role));
    }

    let mut additional_cost = 0.0;
    for cost in additional_costs.iter().filter(|c| &c.project_id == project_id) {
        additional_cost += cost.amount;

        let Some(member_id) = cost.attributed_member() else {
            continue;
        };
        match index_by_member.get(member_id) {
            Some(&idx) => member_costs[idx].add_additional(cost.amount),
            None => debug!(
                project = %project_id,
                member = %member_id,
                cost = %cost.id,
                "Member has no time logged on project, cost left out of member breakdown"
            ),
        }
    }

    let labor_cost: f64 = member_costs.iter().map(|m| m.labor_cost).sum();
    let hours_logged: f64 = member_costs.iter().map(|m| m.hours_logged).sum();

    ProjectBudget {
        project_id: project_id.clone(),
        labor_cost,
        additional_cost,
        total_budget: labor_cost + additional_cost,
        hours_logged,
        member_costs,
    }
}
