//! Handler for the `portfolio` command.

use super::output;
use crate::app::App;
use crate::error::Result;

/// Execute the portfolio command.
pub async fn execute(app: &App) -> Result<()> {
    let portfolio = app.portfolio().refetch().await?;

    output::section(&portfolio.profile.name);
    output::key_value("title", &portfolio.profile.title);
    if let Some(bio) = &portfolio.profile.bio {
        output::key_value("bio", bio);
    }

    output::section("Projects");
    for project in &portfolio.projects {
        output::key_value(&project.id, &project.title);
    }

    output::section("Skills");
    for skill in &portfolio.skills {
        output::key_value(&skill.name, skill.level);
    }

    output::section("Experience");
    for experience in &portfolio.experiences {
        output::key_value(
            &experience.company,
            format!(
                "{} ({} – {})",
                experience.role,
                experience.start_date,
                experience.end_date.as_deref().unwrap_or("present")
            ),
        );
    }

    Ok(())
}
