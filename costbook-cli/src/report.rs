use costbook::{
    models::{
        AdditionalCostCategory, AdditionalCostEntry, ProjectBudget, ProjectOption, RateCard,
        TimeLogEntry,
    },
    BudgetConfig,
};
use itertools::Itertools;

/// `1234.5` -> `$1,234.50`
pub fn format_money(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let grouped = whole
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .join(",");
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}{symbol}{grouped}.{:02}", cents % 100)
}

/// `6.0` -> `6h`, `7.5` -> `7.5h`
pub fn format_hours(hours: f64) -> String {
    let formatted = format!("{hours:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}h")
}

pub fn budget_report(title: &str, budget: &ProjectBudget, symbol: &str) -> String {
    let money = |v: f64| format_money(v, symbol);

    let totals = [
        ("Total budget", money(budget.total_budget)),
        ("Labor cost", money(budget.labor_cost)),
        ("Additional", money(budget.additional_cost)),
        ("Hours logged", format_hours(budget.hours_logged)),
    ];
    let mut out = format!("{title} ({})\n", budget.project_id);
    for (label, value) in totals {
        out.push_str(&format!("  {label:<14} {value:>14}\n"));
    }

    if budget.member_costs.is_empty() {
        out.push_str("\n  No hours logged yet.\n");
        return out;
    }

    out.push_str(&format!(
        "\n  {:<18} {:<18} {:>7} {:>12} {:>12} {:>12}\n",
        "Member", "Role", "Hours", "Labor", "Additional", "Total"
    ));
    let rows = budget
        .member_costs
        .iter()
        .sorted_by(|a, b| b.total_cost.total_cmp(&a.total_cost))
        .map(|member| {
            format!(
                "  {:<18} {:<18} {:>7} {:>12} {:>12} {:>12}\n",
                member.member_name,
                member.member_role,
                format_hours(member.hours_logged),
                money(member.labor_cost),
                money(member.additional_costs),
                money(member.total_cost),
            )
        })
        .join("");
    out.push_str(&rows);

    out
}

/// Time logs, newest first, each priced at its snapshotted role's rate.
pub fn time_logs_report<'a>(
    logs: impl IntoIterator<Item = &'a TimeLogEntry>,
    rates: &RateCard,
    symbol: &str,
) -> String {
    let out = logs
        .into_iter()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .map(|log| {
            let member = format!("{} ({})", log.member_name, log.member_role);
            let line = format!(
                "{:<16} {}  {:<28} {:>6} {:>12}  {}",
                log.id.as_str(),
                log.date,
                member,
                format_hours(log.hours),
                format_money(log.cost(rates), symbol),
                log.description.as_deref().unwrap_or(""),
            );
            format!("{}\n", line.trim_end())
        })
        .join("");

    or_placeholder(out, "No time logged for this project.")
}

/// Additional costs, newest first.
pub fn costs_report<'a>(
    costs: impl IntoIterator<Item = &'a AdditionalCostEntry>,
    config: &BudgetConfig,
    symbol: &str,
) -> String {
    let out = costs
        .into_iter()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .map(|cost| {
            let category = format!(
                "[{}] {}",
                config.category_icon(&cost.category_id),
                cost.category_name
            );
            let mut line = format!(
                "{:<16} {}  {:<30} {:>12}  {}",
                cost.id.as_str(),
                cost.date,
                category,
                format_money(cost.amount, symbol),
                cost.description.as_deref().unwrap_or(""),
            );
            if let Some(name) = &cost.member_name {
                line.push_str(&format!(" ({name})"));
            }
            format!("{}\n", line.trim_end())
        })
        .join("");

    or_placeholder(out, "No additional costs for this project.")
}

pub fn roles_report(rates: &RateCard, symbol: &str) -> String {
    rates
        .iter()
        .map(|role| {
            format!(
                "{:<16} {:<20} {:>10}/h {}\n",
                role.id.as_str(),
                role.role,
                format_money(role.hourly_rate, symbol),
                role.currency
            )
        })
        .join("")
}

pub fn categories_report(categories: &[AdditionalCostCategory], symbol: &str) -> String {
    categories
        .iter()
        .map(|category| {
            format!(
                "{:<16} {:<20} {:<11} {:<10} {:>10} {}\n",
                category.id.as_str(),
                category.name,
                category.cost_type.to_string(),
                category.icon().to_string(),
                format_money(category.default_amount, symbol),
                category.currency
            )
        })
        .join("")
}

pub fn projects_report(projects: &[ProjectOption]) -> String {
    let out = projects
        .iter()
        .map(|project| {
            let line = format!(
                "{:<12} {:<30} {}",
                project.id.as_str(),
                project.title,
                project.status
            );
            format!("{}\n", line.trim_end())
        })
        .join("");

    or_placeholder(out, "No projects in ledger.")
}

fn or_placeholder(out: String, placeholder: &str) -> String {
    if out.is_empty() {
        format!("{placeholder}\n")
    } else {
        out
    }
}
