use tracing::{debug, info};

use super::{
    error::is_positive,
    models::{
        default_cost_categories, default_rate_card, AdditionalCostCategory, CategoryIcon,
        CategoryId, CostType, RateCard, RoleCost, RoleId,
    },
    BudgetConfigError, IdSource,
};

/// Fields for a new cost category. Unset icon and type fall back to
/// `package` and `fixed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub icon: Option<CategoryIcon>,
    pub cost_type: Option<CostType>,
    pub default_amount: f64,
}

/// Rate card plus cost categories: everything budgets are priced with.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetConfig {
    rates: RateCard,
    categories: Vec<AdditionalCostCategory>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            rates: default_rate_card(),
            categories: default_cost_categories(),
        }
    }
}

impl BudgetConfig {
    /// Build a config, rejecting rate cards that list a role name twice.
    pub fn new(
        rates: RateCard,
        categories: Vec<AdditionalCostCategory>,
    ) -> Result<Self, BudgetConfigError> {
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = rates.iter().find(|r| !seen.insert(r.role.as_str())) {
            return Err(BudgetConfigError::DuplicateRole(dup.role.clone()));
        }

        Ok(Self { rates, categories })
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    pub fn categories(&self) -> &[AdditionalCostCategory] {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&AdditionalCostCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Icon for a category; unknown categories get the `package` icon.
    pub fn category_icon(&self, id: &CategoryId) -> CategoryIcon {
        self.category(id)
            .map(AdditionalCostCategory::icon)
            .unwrap_or_default()
    }

    // ========================================================================
    // Roles
    // ========================================================================

    pub fn add_role(
        &mut self,
        ids: &mut impl IdSource,
        role: &str,
        hourly_rate: f64,
    ) -> Result<&RoleCost, BudgetConfigError> {
        let role = role.trim();
        validate_role(role, hourly_rate)?;
        if self.rates.find_by_name(role).is_some() {
            return Err(BudgetConfigError::DuplicateRole(role.to_string()));
        }

        let roles = self.rates.roles_mut();
        roles.push(RoleCost::new(ids.next_id(), role, hourly_rate));
        info!(role, hourly_rate, "Added role");

        Ok(&roles[roles.len() - 1])
    }

    /// Replace the role with the same id. The name is trimmed first.
    pub fn update_role(&mut self, mut updated: RoleCost) -> Result<(), BudgetConfigError> {
        updated.role = updated.role.trim().to_string();
        validate_role(&updated.role, updated.hourly_rate)?;
        if self
            .rates
            .iter()
            .any(|r| r.id != updated.id && r.role == updated.role)
        {
            return Err(BudgetConfigError::DuplicateRole(updated.role));
        }

        let existing = self
            .rates
            .roles_mut()
            .iter_mut()
            .find(|r| r.id == updated.id)
            .ok_or_else(|| BudgetConfigError::RoleNotFound(updated.id.clone()))?;
        info!(role_id = %updated.id, role = %updated.role, "Updated role");
        *existing = updated;

        Ok(())
    }

    /// Remove a role. Returns whether anything was removed.
    pub fn delete_role(&mut self, id: &RoleId) -> bool {
        let roles = self.rates.roles_mut();
        let before = roles.len();
        roles.retain(|r| &r.id != id);

        let removed = roles.len() != before;
        if !removed {
            debug!(role_id = %id, "Delete of unknown role ignored");
        }
        removed
    }

    // ========================================================================
    // Cost categories
    // ========================================================================

    pub fn add_category(
        &mut self,
        ids: &mut impl IdSource,
        new: NewCategory,
    ) -> Result<&AdditionalCostCategory, BudgetConfigError> {
        let name = new.name.trim();
        validate_category(name, new.default_amount)?;

        let category = AdditionalCostCategory::new(ids.next_id(), name, new.default_amount)
            .with_icon(new.icon.unwrap_or_default())
            .with_type(new.cost_type.unwrap_or_default());
        info!(name = %category.name, default_amount = category.default_amount, "Added cost category");
        self.categories.push(category);

        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Replace the category with the same id. The name is trimmed first.
    pub fn update_category(
        &mut self,
        mut updated: AdditionalCostCategory,
    ) -> Result<(), BudgetConfigError> {
        updated.name = updated.name.trim().to_string();
        validate_category(&updated.name, updated.default_amount)?;

        let existing = self
            .categories
            .iter_mut()
            .find(|c| c.id == updated.id)
            .ok_or_else(|| BudgetConfigError::CategoryNotFound(updated.id.clone()))?;
        info!(category_id = %updated.id, name = %updated.name, "Updated cost category");
        *existing = updated;

        Ok(())
    }

    /// Remove a category. Returns whether anything was removed.
    ///
    /// Entries already booked under the category keep their snapshotted name.
    pub fn delete_category(&mut self, id: &CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| &c.id != id);

        let removed = self.categories.len() != before;
        if !removed {
            debug!(category_id = %id, "Delete of unknown category ignored");
        }
        removed
    }
}

fn validate_role(role: &str, hourly_rate: f64) -> Result<(), BudgetConfigError> {
    if role.trim().is_empty() {
        return Err(BudgetConfigError::EmptyRoleName);
    }
    if !is_positive(hourly_rate) {
        return Err(BudgetConfigError::NonPositiveRate);
    }
    Ok(())
}

fn validate_category(name: &str, default_amount: f64) -> Result<(), BudgetConfigError> {
    if name.trim().is_empty() {
        return Err(BudgetConfigError::EmptyCategoryName);
    }
    if !is_positive(default_amount) {
        return Err(BudgetConfigError::NonPositiveDefaultAmount);
    }
    Ok(())
}
