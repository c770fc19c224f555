use thiserror::Error;

use super::models::{CategoryId, MemberId, RoleId};

/// Why a time log or cost submission was declined.
///
/// A declined submission never touches the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("no team member selected")]
    MissingMember,
    #[error("unknown team member: {0}")]
    UnknownMember(MemberId),
    #[error("hours must be greater than zero")]
    NonPositiveHours,
    #[error("no cost category selected")]
    MissingCategory,
    #[error("unknown cost category: {0}")]
    UnknownCategory(CategoryId),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("no date selected")]
    MissingDate,
}

/// Errors from editing the rate card or the cost categories.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetConfigError {
    #[error("role name must not be empty")]
    EmptyRoleName,
    #[error("hourly rate must be greater than zero")]
    NonPositiveRate,
    #[error("role already exists: {0}")]
    DuplicateRole(String),
    #[error("role not found: {0}")]
    RoleNotFound(RoleId),
    #[error("category name must not be empty")]
    EmptyCategoryName,
    #[error("default amount must be greater than zero")]
    NonPositiveDefaultAmount,
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
}

/// `true` for finite values above zero; NaN and infinities never pass.
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
