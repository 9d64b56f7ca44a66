//! Handlers for the `experiences` subcommands.

use tabled::{Table, Tabled};

use super::auth::require_authorized;
use super::{output, ExperienceArgs, ExperienceCommand};
use crate::app::App;
use crate::domain::ExperienceInput;
use crate::error::Result;

#[derive(Tabled)]
struct ExperienceRow {
    id: String,
    company: String,
    role: String,
    period: String,
}

/// Execute an experiences subcommand.
pub async fn execute(app: &App, command: &ExperienceCommand) -> Result<()> {
    match command {
        ExperienceCommand::List => {
            let mut experiences = app.experiences().refetch().await?;
            // The one client-side sort the views perform: most recent first.
            experiences.sort_by(|a, b| b.start_date.cmp(&a.start_date));
            let rows: Vec<ExperienceRow> = experiences
                .into_iter()
                .map(|e| ExperienceRow {
                    id: e.id,
                    company: e.company,
                    role: e.role,
                    period: format!(
                        "{} – {}",
                        e.start_date,
                        e.end_date.as_deref().unwrap_or("present")
                    ),
                })
                .collect();
            output::note(&Table::new(rows).to_string());
        }
        ExperienceCommand::Create(args) => {
            require_authorized(app, "/my-panel");
            let experience = app.experiences().create(&input_from(args)).await?;
            output::ok(&format!(
                "created experience {} at {} ({})",
                experience.role, experience.company, experience.id
            ));
        }
        ExperienceCommand::Update { id, args } => {
            require_authorized(app, "/my-panel");
            let experience = app.experiences().update(id, &input_from(args)).await?;
            output::ok(&format!(
                "updated experience {} at {} ({})",
                experience.role, experience.company, experience.id
            ));
        }
        ExperienceCommand::Delete { id } => {
            require_authorized(app, "/my-panel");
            app.experiences().delete(id).await?;
            output::ok(&format!("deleted experience {id}"));
        }
    }
    Ok(())
}

fn input_from(args: &ExperienceArgs) -> ExperienceInput {
    ExperienceInput {
        company: args.company.clone(),
        role: args.role.clone(),
        start_date: args.start_date.clone(),
        end_date: args.end_date.clone(),
        details: args.details.clone(),
    }
}
