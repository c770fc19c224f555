mod cli;
mod config;
mod ledger;
mod report;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use costbook::{
    models::{AdditionalCostDraft, TimeLogDraft},
    NewCategory, SubmissionError, TimeOrderedIds,
};
use time::{Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Commands},
    config::Settings,
    ledger::Ledger,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    init_tracing(&settings.log_level);

    let ledger_path = cli
        .ledger
        .clone()
        .unwrap_or_else(|| settings.ledger_path.clone());
    tracing::debug!(ledger = %ledger_path.display(), "Using ledger");

    run(cli.command, &ledger_path, &settings)
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(command: Commands, ledger_path: &Path, settings: &Settings) -> Result<()> {
    let symbol = settings.currency_symbol.as_str();

    match command {
        Commands::ConfigPath => {
            let path = Settings::ensure_config_file()?;
            println!("{}", path.display());
        }
        Commands::Projects => {
            let book = Ledger::load(ledger_path)?.open()?;
            print!("{}", report::projects_report(&book.projects));
        }
        Commands::Roles => {
            let book = Ledger::load(ledger_path)?.open()?;
            print!("{}", report::roles_report(book.config.rates(), symbol));
        }
        Commands::Categories => {
            let book = Ledger::load(ledger_path)?.open()?;
            print!(
                "{}",
                report::categories_report(book.config.categories(), symbol)
            );
        }
        Commands::Budget { project, json } => {
            let book = Ledger::load(ledger_path)?.open()?;
            book.require_project(&project)?;
            let budget = book.store.project_budget(&project, book.config.rates());

            if json {
                println!("{}", serde_json::to_string_pretty(&budget)?);
            } else {
                print!(
                    "{}",
                    report::budget_report(&book.project_title(&project), &budget, symbol)
                );
            }
        }
        Commands::TimeLogs { project } => {
            let book = Ledger::load(ledger_path)?.open()?;
            book.require_project(&project)?;
            print!(
                "{}",
                report::time_logs_report(
                    book.store.project_time_logs(&project),
                    book.config.rates(),
                    symbol
                )
            );
        }
        Commands::Costs { project } => {
            let book = Ledger::load(ledger_path)?.open()?;
            book.require_project(&project)?;
            print!(
                "{}",
                report::costs_report(
                    book.store.project_additional_costs(&project),
                    &book.config,
                    symbol
                )
            );
        }
        Commands::LogHours {
            project,
            member,
            hours,
            date,
            description,
        } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            book.require_project(&project)?;

            let mut draft = TimeLogDraft::new(project)
                .with_member(member)
                .with_hours(hours)
                .with_date(date.unwrap_or_else(today));
            if let Some(description) = description {
                draft = draft.with_description(description);
            }

            let entry = book
                .store
                .add_time_log(&draft, &book.members)
                .context("Could not log hours")?;
            println!(
                "Logged {} for {} on {} ({})",
                report::format_hours(entry.hours),
                entry.member_name,
                entry.date,
                entry.id
            );

            book.to_ledger().save(ledger_path)?;
        }
        Commands::AddCost {
            project,
            category,
            amount,
            member,
            date,
            description,
        } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            book.require_project(&project)?;

            let mut draft = match book.config.category(&category) {
                Some(known) => AdditionalCostDraft::for_category(project, known),
                None if amount.is_none() => {
                    return Err(SubmissionError::UnknownCategory(category))
                        .context("Could not add cost");
                }
                None => AdditionalCostDraft::new(project).with_category(category),
            };
            draft = draft.with_date(date.unwrap_or_else(today));
            if let Some(amount) = amount {
                draft = draft.with_amount(amount);
            }
            if let Some(member) = member {
                draft = draft.with_member(member);
            }
            if let Some(description) = description {
                draft = draft.with_description(description);
            }

            let entry = book
                .store
                .add_additional_cost(&draft, &book.config, &book.members)
                .context("Could not add cost")?;
            println!(
                "Added {} {} on {} ({})",
                report::format_money(entry.amount, symbol),
                entry.category_name,
                entry.date,
                entry.id
            );

            book.to_ledger().save(ledger_path)?;
        }
        Commands::DeleteLog { id } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            if book.store.delete_time_log(&id) {
                book.to_ledger().save(ledger_path)?;
                println!("Deleted time log {id}");
            } else {
                println!("No time log with id {id}");
            }
        }
        Commands::DeleteCost { id } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            if book.store.delete_additional_cost(&id) {
                book.to_ledger().save(ledger_path)?;
                println!("Deleted additional cost {id}");
            } else {
                println!("No additional cost with id {id}");
            }
        }
        Commands::AddRole { name, rate } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            let role = book
                .config
                .add_role(&mut TimeOrderedIds::new(), &name, rate)
                .context("Could not add role")?;
            println!(
                "Added role {} at {}/h ({})",
                role.role,
                report::format_money(role.hourly_rate, symbol),
                role.id
            );

            book.to_ledger().save(ledger_path)?;
        }
        Commands::UpdateRole { id, name, rate } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            book.update_role(&id, name, rate)
                .context("Could not update role")?;
            book.to_ledger().save(ledger_path)?;
            println!("Updated role {id}");
        }
        Commands::DeleteRole { id } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            if book.config.delete_role(&id) {
                book.to_ledger().save(ledger_path)?;
                println!("Deleted role {id}");
            } else {
                println!("No role with id {id}");
            }
        }
        Commands::AddCategory {
            name,
            amount,
            icon,
            cost_type,
        } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            let new = NewCategory {
                name,
                icon,
                cost_type,
                default_amount: amount,
            };
            let category = book
                .config
                .add_category(&mut TimeOrderedIds::new(), new)
                .context("Could not add category")?;
            println!(
                "Added category {} ({}, default {}) ({})",
                category.name,
                category.cost_type,
                report::format_money(category.default_amount, symbol),
                category.id
            );

            book.to_ledger().save(ledger_path)?;
        }
        Commands::UpdateCategory {
            id,
            name,
            amount,
            icon,
            cost_type,
        } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            book.update_category(&id, name, amount, icon, cost_type)
                .context("Could not update category")?;
            book.to_ledger().save(ledger_path)?;
            println!("Updated category {id}");
        }
        Commands::DeleteCategory { id } => {
            let mut book = Ledger::load(ledger_path)?.open()?;
            if book.config.delete_category(&id) {
                book.to_ledger().save(ledger_path)?;
                println!("Deleted category {id}");
            } else {
                println!("No category with id {id}");
            }
        }
    }

    Ok(())
}

/// Today's date in the local timezone, falling back to UTC.
fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
