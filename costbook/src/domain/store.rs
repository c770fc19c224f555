use tracing::{debug, info};

use super::{
    error::is_positive,
    models::{
        find_member, normalize_description, AdditionalCostDraft, AdditionalCostEntry, EntryId,
        ProjectBudget, ProjectId, RateCard, TeamMember, TimeLogDraft, TimeLogEntry,
    },
    services::compute_project_budget,
    BudgetConfig, IdSource, SubmissionError, TimeOrderedIds,
};

/// Owns the time log and additional-cost collections.
///
/// Entries are only ever appended or removed. Budgets are recomputed from the
/// current entries on every call to [`BudgetStore::project_budget`].
#[derive(Debug)]
pub struct BudgetStore<I = TimeOrderedIds> {
    time_logs: Vec<TimeLogEntry>,
    additional_costs: Vec<AdditionalCostEntry>,
    ids: I,
}

impl Default for BudgetStore<TimeOrderedIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetStore<TimeOrderedIds> {
    pub fn new() -> Self {
        Self::with_ids(TimeOrderedIds::new())
    }
}

impl<I: IdSource> BudgetStore<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            time_logs: Vec::new(),
            additional_costs: Vec::new(),
            ids,
        }
    }

    /// Seed the store with existing entries, e.g. from a saved ledger.
    pub fn with_entries(
        mut self,
        time_logs: Vec<TimeLogEntry>,
        additional_costs: Vec<AdditionalCostEntry>,
    ) -> Self {
        self.time_logs = time_logs;
        self.additional_costs = additional_costs;
        self
    }

    pub fn time_logs(&self) -> &[TimeLogEntry] {
        &self.time_logs
    }

    pub fn additional_costs(&self) -> &[AdditionalCostEntry] {
        &self.additional_costs
    }

    pub fn project_time_logs<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> impl Iterator<Item = &'a TimeLogEntry> + 'a {
        self.time_logs
            .iter()
            .filter(move |l| &l.project_id == project_id)
    }

    pub fn project_additional_costs<'a>(
        &'a self,
        project_id: &'a ProjectId,
    ) -> impl Iterator<Item = &'a AdditionalCostEntry> + 'a {
        self.additional_costs
            .iter()
            .filter(move |c| &c.project_id == project_id)
    }

    pub fn project_budget(&self, project_id: &ProjectId, rates: &RateCard) -> ProjectBudget {
        compute_project_budget(project_id, &self.time_logs, &self.additional_costs, rates)
    }

    /// Validate a "log hours" draft and append it.
    ///
    /// The member's current name and role are copied onto the entry. On error
    /// the store is left untouched.
    pub fn add_time_log(
        &mut self,
        draft: &TimeLogDraft,
        members: &[TeamMember],
    ) -> Result<&TimeLogEntry, SubmissionError> {
        let entry = self
            .build_time_log(draft, members)
            .inspect_err(|e| debug!(project = %draft.project_id, "Time log declined: {e}"))?;

        info!(
            id = %entry.id,
            project = %entry.project_id,
            member = %entry.member_id,
            hours = entry.hours,
            "Logged hours"
        );
        self.time_logs.push(entry);

        Ok(&self.time_logs[self.time_logs.len() - 1])
    }

    /// Validate an "add cost" draft and append it.
    ///
    /// A member id that matches no team member is dropped, leaving the cost
    /// unattributed. On error the store is left untouched.
    pub fn add_additional_cost(
        &mut self,
        draft: &AdditionalCostDraft,
        config: &BudgetConfig,
        members: &[TeamMember],
    ) -> Result<&AdditionalCostEntry, SubmissionError> {
        let entry = self
            .build_additional_cost(draft, config, members)
            .inspect_err(|e| {
                debug!(project = %draft.project_id, "Additional cost declined: {e}");
            })?;

        info!(
            id = %entry.id,
            project = %entry.project_id,
            category = %entry.category_name,
            amount = entry.amount,
            "Added additional cost"
        );
        self.additional_costs.push(entry);

        Ok(&self.additional_costs[self.additional_costs.len() - 1])
    }

    /// Remove a time log. Unknown ids are a no-op; returns whether anything
    /// was removed.
    pub fn delete_time_log(&mut self, id: &EntryId) -> bool {
        let before = self.time_logs.len();
        self.time_logs.retain(|l| &l.id != id);
        log_delete("time log", id, before != self.time_logs.len())
    }

    /// Remove an additional cost. Unknown ids are a no-op; returns whether
    /// anything was removed.
    pub fn delete_additional_cost(&mut self, id: &EntryId) -> bool {
        let before = self.additional_costs.len();
        self.additional_costs.retain(|c| &c.id != id);
        log_delete("additional cost", id, before != self.additional_costs.len())
    }

    fn build_time_log(
        &mut self,
        draft: &TimeLogDraft,
        members: &[TeamMember],
    ) -> Result<TimeLogEntry, SubmissionError> {
        let member_id = draft
            .member_id
            .as_ref()
            .filter(|id| !id.is_empty())
            .ok_or(SubmissionError::MissingMember)?;
        if !is_positive(draft.hours) {
            return Err(SubmissionError::NonPositiveHours);
        }
        let date = draft.date.ok_or(SubmissionError::MissingDate)?;
        let member = find_member(members, member_id)
            .ok_or_else(|| SubmissionError::UnknownMember(member_id.clone()))?;

        Ok(TimeLogEntry {
            id: self.ids.next_entry_id(),
            project_id: draft.project_id.clone(),
            member_id: member.id.clone(),
            member_name: member.name.clone(),
            member_role: member.role.clone(),
            date,
            hours: draft.hours,
            description: normalize_description(draft.description.as_ref()),
        })
    }

    fn build_additional_cost(
        &mut self,
        draft: &AdditionalCostDraft,
        config: &BudgetConfig,
        members: &[TeamMember],
    ) -> Result<AdditionalCostEntry, SubmissionError> {
        let category_id = draft
            .category_id
            .as_ref()
            .filter(|id| !id.is_empty())
            .ok_or(SubmissionError::MissingCategory)?;
        if !is_positive(draft.amount) {
            return Err(SubmissionError::NonPositiveAmount);
        }
        let date = draft.date.ok_or(SubmissionError::MissingDate)?;
        let category = config
            .category(category_id)
            .ok_or_else(|| SubmissionError::UnknownCategory(category_id.clone()))?;

        let member = draft
            .member_id
            .as_ref()
            .filter(|id| !id.is_empty())
            .and_then(|id| find_member(members, id));

        Ok(AdditionalCostEntry {
            id: self.ids.next_entry_id(),
            project_id: draft.project_id.clone(),
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            date,
            amount: draft.amount,
            description: normalize_description(draft.description.as_ref()),
            member_id: member.map(|m| m.id.clone()),
            member_name: member.map(|m| m.name.clone()),
        })
    }
}

fn log_delete(kind: &str, id: &EntryId, removed: bool) -> bool {
    if removed {
        info!(%id, "Deleted {kind}");
    } else {
        debug!(%id, "Delete of unknown {kind} ignored");
    }
    removed
}
