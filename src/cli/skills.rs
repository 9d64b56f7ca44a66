//! Handlers for the `skills` subcommands.

use tabled::{Table, Tabled};

use super::auth::require_authorized;
use super::{output, SkillArgs, SkillCommand};
use crate::app::App;
use crate::domain::SkillInput;
use crate::error::Result;

#[derive(Tabled)]
struct SkillRow {
    id: String,
    name: String,
    level: String,
}

/// Execute a skills subcommand.
pub async fn execute(app: &App, command: &SkillCommand) -> Result<()> {
    match command {
        SkillCommand::List => {
            let skills = app.skills().refetch().await?;
            let rows: Vec<SkillRow> = skills
                .into_iter()
                .map(|s| SkillRow {
                    id: s.id,
                    name: s.name,
                    level: s.level.to_string(),
                })
                .collect();
            output::note(&Table::new(rows).to_string());
        }
        SkillCommand::Create(args) => {
            require_authorized(app, "/my-panel");
            let skill = app.skills().create(&input_from(args)).await?;
            output::ok(&format!("created skill {} ({})", skill.name, skill.id));
        }
        SkillCommand::Update { id, args } => {
            require_authorized(app, "/my-panel");
            let skill = app.skills().update(id, &input_from(args)).await?;
            output::ok(&format!("updated skill {} ({})", skill.name, skill.id));
        }
        SkillCommand::Delete { id } => {
            require_authorized(app, "/my-panel");
            app.skills().delete(id).await?;
            output::ok(&format!("deleted skill {id}"));
        }
    }
    Ok(())
}

fn input_from(args: &SkillArgs) -> SkillInput {
    SkillInput {
        name: args.name.clone(),
        level: args.level,
        icon: args.icon.clone(),
    }
}
