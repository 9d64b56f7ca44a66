//! Handlers for the `projects` subcommands.

use tabled::{Table, Tabled};

use super::auth::require_authorized;
use super::{output, ProjectArgs, ProjectCommand};
use crate::app::App;
use crate::domain::ProjectInput;
use crate::error::Result;

#[derive(Tabled)]
struct ProjectRow {
    id: String,
    title: String,
    skills: String,
    url: String,
}

/// Execute a projects subcommand.
pub async fn execute(app: &App, command: &ProjectCommand) -> Result<()> {
    match command {
        ProjectCommand::List => {
            let projects = app.projects().refetch().await?;
            let rows: Vec<ProjectRow> = projects
                .into_iter()
                .map(|p| ProjectRow {
                    id: p.id,
                    title: p.title,
                    skills: p.skills.join(", "),
                    url: p.url.unwrap_or_default(),
                })
                .collect();
            output::note(&Table::new(rows).to_string());
        }
        ProjectCommand::Create(args) => {
            require_authorized(app, "/my-panel");
            let project = app.projects().create(&input_from(args)).await?;
            output::ok(&format!("created project {} ({})", project.title, project.id));
        }
        ProjectCommand::Update { id, args } => {
            require_authorized(app, "/my-panel");
            let project = app.projects().update(id, &input_from(args)).await?;
            output::ok(&format!("updated project {} ({})", project.title, project.id));
        }
        ProjectCommand::Delete { id } => {
            require_authorized(app, "/my-panel");
            app.projects().delete(id).await?;
            output::ok(&format!("deleted project {id}"));
        }
    }
    Ok(())
}

fn input_from(args: &ProjectArgs) -> ProjectInput {
    ProjectInput {
        title: args.title.clone(),
        description: args.description.clone(),
        skills: args
            .skills
            .as_deref()
            .map(|s| s.split(',').map(|t| t.trim().to_string()).collect())
            .unwrap_or_default(),
        url: args.url.clone(),
        image: args.image.clone(),
    }
}
