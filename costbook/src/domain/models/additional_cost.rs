use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

use super::{default_currency, iso_date, CategoryId, EntryId, MemberId, ProjectId};

/// How a category's amount is meant to be counted.
///
/// Descriptive only. Budgets always sum entry amounts at face value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CostType {
    #[default]
    Fixed,
    PerDay,
    PerPerson,
    PerHour,
}

/// Icons a category can be displayed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CategoryIcon {
    Car,
    Food,
    #[default]
    Package,
    Briefcase,
}

impl CategoryIcon {
    /// Resolve an icon tag, falling back to [`CategoryIcon::Package`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

pub(crate) fn default_icon_tag() -> String {
    CategoryIcon::Package.to_string()
}

/// A kind of non-labor expense, e.g. transport or software licenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCostCategory {
    pub id: CategoryId,
    pub name: String,
    /// Icon tag; unknown tags render as [`CategoryIcon::Package`].
    #[serde(default = "default_icon_tag")]
    pub icon: String,
    #[serde(rename = "type", default)]
    pub cost_type: CostType,
    pub default_amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl AdditionalCostCategory {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, default_amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: default_icon_tag(),
            cost_type: CostType::default(),
            default_amount,
            currency: default_currency(),
        }
    }

    pub fn with_icon(mut self, icon: CategoryIcon) -> Self {
        self.icon = icon.to_string();
        self
    }

    pub fn with_type(mut self, cost_type: CostType) -> Self {
        self.cost_type = cost_type;
        self
    }

    pub fn icon(&self) -> CategoryIcon {
        CategoryIcon::from_tag(&self.icon)
    }
}

/// The categories the dashboard ships with.
pub fn default_cost_categories() -> Vec<AdditionalCostCategory> {
    vec![
        AdditionalCostCategory::new("1", "Transport", 50.0)
            .with_icon(CategoryIcon::Car)
            .with_type(CostType::PerDay),
        AdditionalCostCategory::new("2", "Food & Meals", 25.0)
            .with_icon(CategoryIcon::Food)
            .with_type(CostType::PerPerson),
        AdditionalCostCategory::new("3", "Equipment", 500.0)
            .with_icon(CategoryIcon::Package)
            .with_type(CostType::Fixed),
        AdditionalCostCategory::new("4", "Software Licenses", 200.0)
            .with_icon(CategoryIcon::Briefcase)
            .with_type(CostType::Fixed),
    ]
}

/// A dated non-labor expense booked against a project.
///
/// `category_name` and `member_name` are snapshots taken at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCostEntry {
    pub id: EntryId,
    pub project_id: ProjectId,
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
}

impl AdditionalCostEntry {
    /// The member this cost is attributed to, if any.
    pub fn attributed_member(&self) -> Option<&MemberId> {
        self.member_id.as_ref().filter(|id| !id.is_empty())
    }
}

/// An unvalidated "add cost" submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalCostDraft {
    pub project_id: ProjectId,
    pub category_id: Option<CategoryId>,
    pub amount: f64,
    pub date: Option<Date>,
    pub description: Option<String>,
    pub member_id: Option<MemberId>,
}

impl AdditionalCostDraft {
    pub fn new(project_id: impl Into<ProjectId>) -> Self {
        Self {
            project_id: project_id.into(),
            category_id: None,
            amount: 0.0,
            date: None,
            description: None,
            member_id: None,
        }
    }

    /// Start a draft for `category`, prefilled with its default amount.
    pub fn for_category(
        project_id: impl Into<ProjectId>,
        category: &AdditionalCostCategory,
    ) -> Self {
        Self::new(project_id)
            .with_category(category.id.clone())
            .with_amount(category.default_amount)
    }

    pub fn with_category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
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

    pub fn with_member(mut self, member_id: impl Into<MemberId>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }
}
