use std::path::Path;

use anyhow::{bail, Context, Result};
use costbook::{
    models::{
        AdditionalCostCategory, AdditionalCostEntry, CategoryIcon, CategoryId, CostType,
        ProjectId, ProjectOption, RateCard, RoleCost, RoleId, TeamMember, TimeLogEntry,
    },
    BudgetConfig, BudgetConfigError, BudgetStore,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// On-disk ledger document.
///
/// `roles` and `categories` may be omitted, in which case the built-in rate
/// card and categories are used.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<RoleCost>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<AdditionalCostCategory>>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub projects: Vec<ProjectOption>,
    #[serde(default)]
    pub time_logs: Vec<TimeLogEntry>,
    #[serde(default)]
    pub additional_costs: Vec<AdditionalCostEntry>,
}

impl Ledger {
    /// Load a ledger. A missing file is an empty ledger.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Ledger not found, starting empty");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read ledger at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse ledger at {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save the ledger, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write ledger at {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Saved ledger");
        Ok(())
    }

    /// Assemble the in-memory book.
    pub fn open(self) -> Result<Book> {
        let config = match (self.roles, self.categories) {
            (None, None) => BudgetConfig::default(),
            (roles, categories) => {
                let defaults = BudgetConfig::default();
                let rates = roles
                    .map(RateCard::new)
                    .unwrap_or_else(|| defaults.rates().clone());
                let categories = categories.unwrap_or_else(|| defaults.categories().to_vec());
                BudgetConfig::new(rates, categories).context("Invalid rate card in ledger")?
            }
        };

        let flagged = flag_invalid_entries(&self.time_logs, &self.additional_costs);
        if flagged > 0 {
            warn!(flagged, "Ledger has entries with non-positive or non-finite values");
        }

        Ok(Book {
            config,
            members: self.members,
            projects: self.projects,
            store: BudgetStore::new().with_entries(self.time_logs, self.additional_costs),
        })
    }
}

/// Everything a command works with, loaded from one ledger.
#[derive(Debug)]
pub struct Book {
    pub config: BudgetConfig,
    pub members: Vec<TeamMember>,
    pub projects: Vec<ProjectOption>,
    pub store: BudgetStore,
}

impl Book {
    pub fn project(&self, id: &ProjectId) -> Option<&ProjectOption> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Display title for a project, falling back to its id.
    pub fn project_title(&self, id: &ProjectId) -> String {
        self.project(id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Reject unknown projects, unless the ledger lists no projects at all.
    pub fn require_project(&self, id: &ProjectId) -> Result<()> {
        if !self.projects.is_empty() && self.project(id).is_none() {
            bail!("Unknown project: {id}");
        }
        Ok(())
    }

    /// Rename a role and/or change its rate. Unset fields keep their value.
    pub fn update_role(
        &mut self,
        id: &RoleId,
        name: Option<String>,
        hourly_rate: Option<f64>,
    ) -> Result<()> {
        let mut role = self
            .config
            .rates()
            .find(id)
            .cloned()
            .ok_or_else(|| BudgetConfigError::RoleNotFound(id.clone()))?;
        if let Some(name) = name {
            role.role = name;
        }
        if let Some(hourly_rate) = hourly_rate {
            role.hourly_rate = hourly_rate;
        }

        self.config.update_role(role)?;
        Ok(())
    }

    /// Edit a cost category. Unset fields keep their value.
    pub fn update_category(
        &mut self,
        id: &CategoryId,
        name: Option<String>,
        default_amount: Option<f64>,
        icon: Option<CategoryIcon>,
        cost_type: Option<CostType>,
    ) -> Result<()> {
        let mut category = self
            .config
            .category(id)
            .cloned()
            .ok_or_else(|| BudgetConfigError::CategoryNotFound(id.clone()))?;
        if let Some(name) = name {
            category.name = name;
        }
        if let Some(default_amount) = default_amount {
            category.default_amount = default_amount;
        }
        if let Some(icon) = icon {
            category = category.with_icon(icon);
        }
        if let Some(cost_type) = cost_type {
            category = category.with_type(cost_type);
        }

        self.config.update_category(category)?;
        Ok(())
    }

    pub fn to_ledger(&self) -> Ledger {
        Ledger {
            roles: Some(self.config.rates().iter().cloned().collect()),
            categories: Some(self.config.categories().to_vec()),
            members: self.members.clone(),
            projects: self.projects.clone(),
            time_logs: self.store.time_logs().to_vec(),
            additional_costs: self.store.additional_costs().to_vec(),
        }
    }
}

/// Warn about each loaded entry whose hours or amount is not a positive
/// number. Such entries are still summed. Returns how many were flagged.
fn flag_invalid_entries(time_logs: &[TimeLogEntry], costs: &[AdditionalCostEntry]) -> usize {
    let valid = |v: f64| v.is_finite() && v > 0.0;

    let bad_logs = time_logs.iter().filter(|l| !valid(l.hours)).inspect(|l| {
        warn!(
            id = %l.id,
            project = %l.project_id,
            hours = l.hours,
            "Time log has invalid hours"
        );
    });
    let bad_costs = costs.iter().filter(|c| !valid(c.amount)).inspect(|c| {
        warn!(
            id = %c.id,
            project = %c.project_id,
            amount = c.amount,
            "Additional cost has invalid amount"
        );
    });

    bad_logs.count() + bad_costs.count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use costbook::{
        models::{EntryId, MemberId, TimeLogDraft},
        TimeOrderedIds,
    };
    use time::macros::date;

    const SAMPLE: &str = include_str!("../sample-ledger.toml");

    #[test]
    fn sample_ledger_budget() {
        let book = Ledger::parse(SAMPLE).unwrap().open().unwrap();
        let budget = book
            .store
            .project_budget(&ProjectId::from("proj-1"), book.config.rates());

        // 14h senior dev, 4h designer, 7h developer, 3h project manager.
        assert_eq!(budget.hours_logged, 28.0);
        assert_eq!(budget.labor_cost, 1400.0 + 320.0 + 525.0 + 270.0);
        assert_eq!(budget.additional_cost, 75.0 + 120.0 + 350.0);
        assert_eq!(budget.total_budget, 2515.0 + 545.0);

        let sarah = budget.member(&MemberId::from("member-1")).unwrap();
        assert_eq!(sarah.additional_costs, 120.0);
        assert_eq!(sarah.total_cost, 1520.0);
    }

    #[test]
    fn omitted_config_uses_defaults() {
        let book = Ledger::parse("").unwrap().open().unwrap();
        assert_eq!(book.config, BudgetConfig::default());
        assert!(book.store.time_logs().is_empty());
    }

    #[test]
    fn duplicate_roles_are_rejected() {
        let raw = r#"
            [[roles]]
            id = "1"
            role = "Developer"
            hourly_rate = 75

            [[roles]]
            id = "2"
            role = "Developer"
            hourly_rate = 90
        "#;
        assert!(Ledger::parse(raw).unwrap().open().is_err());
    }

    #[test]
    fn require_project_only_when_projects_listed() {
        let book = Ledger::parse(SAMPLE).unwrap().open().unwrap();
        assert!(book.require_project(&ProjectId::from("proj-1")).is_ok());
        assert!(book.require_project(&ProjectId::from("proj-9")).is_err());
        assert_eq!(book.project_title(&ProjectId::from("proj-9")), "proj-9");

        let empty = Ledger::default().open().unwrap();
        assert!(empty.require_project(&ProjectId::from("anything")).is_ok());
    }

    #[test]
    fn saved_ledger_keeps_new_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ledger.toml");

        let mut book = Ledger::parse(SAMPLE).unwrap().open().unwrap();
        let draft = TimeLogDraft::new("proj-2")
            .with_member("member-5")
            .with_hours(2.5)
            .with_date(date!(2026 - 02 - 02));
        let id = book.store.add_time_log(&draft, &book.members).unwrap().id.clone();
        book.store.delete_additional_cost(&EntryId::from("ac-4"));
        book.to_ledger().save(&path).unwrap();

        let reloaded = Ledger::load(&path).unwrap().open().unwrap();
        let entry = reloaded
            .store
            .time_logs()
            .iter()
            .find(|l| l.id == id)
            .unwrap();
        assert_eq!(entry.member_role, "QA Engineer");
        assert_eq!(entry.date, date!(2026 - 02 - 02));
        assert!(reloaded
            .store
            .additional_costs()
            .iter()
            .all(|c| c.id.as_str() != "ac-4"));
        assert_eq!(reloaded.config, book.config);
    }

    #[test]
    fn config_edits_survive_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.toml");

        let mut book = Ledger::parse(SAMPLE).unwrap().open().unwrap();
        let architect = book
            .config
            .add_role(&mut TimeOrderedIds::new(), "Architect", 120.0)
            .unwrap()
            .id
            .clone();
        book.update_role(&RoleId::from("3"), None, Some(85.0)).unwrap();
        assert!(book.config.delete_role(&RoleId::from("1")));
        book.update_category(
            &CategoryId::from("2"),
            Some("Meals".to_string()),
            None,
            None,
            Some(CostType::Fixed),
        )
        .unwrap();
        assert!(book.config.delete_category(&CategoryId::from("4")));
        book.to_ledger().save(&path).unwrap();

        let reloaded = Ledger::load(&path).unwrap().open().unwrap();
        let rates = reloaded.config.rates();
        assert_eq!(rates.find(&architect).unwrap().hourly_rate, 120.0);
        assert_eq!(rates.hourly_rate("Developer"), 85.0);
        assert!(rates.find_by_name("Director").is_none());

        let meals = reloaded.config.category(&CategoryId::from("2")).unwrap();
        assert_eq!(meals.name, "Meals");
        assert_eq!(meals.cost_type, CostType::Fixed);
        assert_eq!(meals.icon(), CategoryIcon::Food);
        assert!(reloaded.config.category(&CategoryId::from("4")).is_none());
    }

    #[test]
    fn book_updates_reject_unknown_ids_and_bad_values() {
        let mut book = Ledger::default().open().unwrap();

        assert!(book.update_role(&RoleId::from("99"), None, Some(10.0)).is_err());
        assert!(book.update_role(&RoleId::from("3"), None, Some(-1.0)).is_err());
        assert!(book
            .update_role(&RoleId::from("3"), Some("Designer".to_string()), None)
            .is_err());
        assert!(book
            .update_category(&CategoryId::from("x"), None, Some(5.0), None, None)
            .is_err());
        assert_eq!(book.config, BudgetConfig::default());
    }

    #[test]
    fn invalid_loaded_entries_are_flagged() {
        let mut ledger = Ledger::parse(SAMPLE).unwrap();
        assert_eq!(
            flag_invalid_entries(&ledger.time_logs, &ledger.additional_costs),
            0
        );

        ledger.time_logs[0].hours = -3.0;
        ledger.additional_costs[0].amount = f64::NAN;
        ledger.additional_costs[1].amount = 0.0;
        assert_eq!(
            flag_invalid_entries(&ledger.time_logs, &ledger.additional_costs),
            3
        );
    }

    #[test]
    fn missing_file_is_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::load(&dir.path().join("absent.toml")).unwrap();
        assert!(ledger.time_logs.is_empty());
        assert!(ledger.roles.is_none());
    }
}
