use std::path::PathBuf;

use clap::{Parser, Subcommand};
use costbook::models::{
    parse_iso_date, CategoryIcon, CategoryId, CostType, EntryId, MemberId, ProjectId, RoleId,
};
use time::Date;

#[derive(Debug, Parser)]
#[command(name = "costbook")]
#[command(about = "Project budgets from time logs and additional costs")]
pub struct Cli {
    /// Ledger file to read (and write back after changes)
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List projects
    Projects,
    /// List role hourly rates
    Roles,
    /// List additional-cost categories
    Categories,
    /// Show the budget summary for a project
    Budget {
        project: ProjectId,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List a project's time logs
    TimeLogs { project: ProjectId },
    /// List a project's additional costs
    Costs { project: ProjectId },
    /// Log hours for a team member
    LogHours {
        project: ProjectId,
        #[arg(long)]
        member: MemberId,
        #[arg(long)]
        hours: f64,
        /// Day worked, YYYY-MM-DD (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add an additional cost
    AddCost {
        project: ProjectId,
        #[arg(long)]
        category: CategoryId,
        /// Amount (defaults to the category's default amount)
        #[arg(long)]
        amount: Option<f64>,
        /// Team member the cost is attributed to
        #[arg(long)]
        member: Option<MemberId>,
        /// Day of the expense, YYYY-MM-DD (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a time log by id
    DeleteLog { id: EntryId },
    /// Delete an additional cost by id
    DeleteCost { id: EntryId },
    /// Add a role to the rate card
    AddRole {
        name: String,
        /// Hourly rate in USD
        #[arg(long)]
        rate: f64,
    },
    /// Rename a role or change its hourly rate
    UpdateRole {
        id: RoleId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        rate: Option<f64>,
    },
    /// Remove a role from the rate card
    DeleteRole { id: RoleId },
    /// Add an additional-cost category
    AddCategory {
        name: String,
        /// Amount prefilled when a cost is added in this category
        #[arg(long)]
        amount: f64,
        /// car, food, package or briefcase
        #[arg(long)]
        icon: Option<CategoryIcon>,
        /// fixed, per-day, per-person or per-hour
        #[arg(long = "type")]
        cost_type: Option<CostType>,
    },
    /// Change an additional-cost category
    UpdateCategory {
        id: CategoryId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        icon: Option<CategoryIcon>,
        #[arg(long = "type")]
        cost_type: Option<CostType>,
    },
    /// Remove an additional-cost category
    DeleteCategory { id: CategoryId },
    /// Print config path and create default file if missing
    ConfigPath,
}

fn parse_date(s: &str) -> Result<Date, String> {
    parse_iso_date(s).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_log_hours() {
        let cli = Cli::try_parse_from([
            "costbook",
            "--ledger",
            "book.toml",
            "log-hours",
            "proj-1",
            "--member",
            "member-1",
            "--hours",
            "7.5",
            "--date",
            "2026-01-28",
        ])
        .unwrap();

        assert_eq!(cli.ledger, Some(PathBuf::from("book.toml")));
        match cli.command {
            Commands::LogHours {
                project,
                member,
                hours,
                date,
                description,
            } => {
                assert_eq!(project.as_str(), "proj-1");
                assert_eq!(member.as_str(), "member-1");
                assert_eq!(hours, 7.5);
                assert_eq!(date, Some(date!(2026 - 01 - 28)));
                assert!(description.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_date() {
        let result = Cli::try_parse_from([
            "costbook", "add-cost", "proj-1", "--category", "1", "--date", "28.01.2026",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_role_commands() {
        let cli = Cli::try_parse_from(["costbook", "add-role", "Architect", "--rate", "120"])
            .unwrap();
        match cli.command {
            Commands::AddRole { name, rate } => {
                assert_eq!(name, "Architect");
                assert_eq!(rate, 120.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["costbook", "update-role", "3", "--rate", "85"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::UpdateRole { name: None, rate: Some(rate), .. } if rate == 85.0
        ));

        let cli = Cli::try_parse_from(["costbook", "delete-role", "6"]).unwrap();
        assert!(matches!(cli.command, Commands::DeleteRole { id } if id.as_str() == "6"));
    }

    #[test]
    fn parses_category_commands() {
        let cli = Cli::try_parse_from([
            "costbook",
            "add-category",
            "Hotel",
            "--amount",
            "140",
            "--icon",
            "briefcase",
            "--type",
            "per-day",
        ])
        .unwrap();
        match cli.command {
            Commands::AddCategory {
                name,
                amount,
                icon,
                cost_type,
            } => {
                assert_eq!(name, "Hotel");
                assert_eq!(amount, 140.0);
                assert_eq!(icon, Some(CategoryIcon::Briefcase));
                assert_eq!(cost_type, Some(CostType::PerDay));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli =
            Cli::try_parse_from(["costbook", "update-category", "2", "--icon", "food"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::UpdateCategory {
                icon: Some(CategoryIcon::Food),
                name: None,
                amount: None,
                cost_type: None,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["costbook", "delete-category", "4"]).unwrap();
        assert!(matches!(cli.command, Commands::DeleteCategory { .. }));
    }

    #[test]
    fn rejects_unknown_cost_type() {
        let result = Cli::try_parse_from([
            "costbook", "add-category", "Hotel", "--amount", "140", "--type", "weekly",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn budget_accepts_json_flag() {
        let cli = Cli::try_parse_from(["costbook", "budget", "proj-2", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Budget { json: true, .. }));
    }
}
