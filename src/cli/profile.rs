//! Handlers for the `profile` subcommands.

use super::auth::require_authorized;
use super::{output, ProfileCommand, ProfileUpdateArgs};
use crate::app::App;
use crate::domain::ProfileInput;
use crate::error::Result;

/// Execute a profile subcommand.
pub async fn execute(app: &App, command: &ProfileCommand) -> Result<()> {
    match command {
        ProfileCommand::Show => {
            match app.profile().refetch().await? {
                Some(profile) => {
                    output::section(&profile.name);
                    output::key_value("title", &profile.title);
                    if let Some(bio) = &profile.bio {
                        output::key_value("bio", bio);
                    }
                    if let Some(avatar) = &profile.avatar_url {
                        output::key_value("avatar", avatar);
                    }
                    for link in &profile.social {
                        output::key_value(&link.platform, &link.url);
                    }
                }
                None => output::note("no profile configured"),
            }
        }
        ProfileCommand::Update(args) => {
            require_authorized(app, "/my-panel");
            let profile = app.profile().update(&input_from(app, args).await?).await?;
            output::ok(&format!("updated profile for {}", profile.name));
        }
    }
    Ok(())
}

/// Build the update input, carrying over the existing social links since
/// the mutation replaces the profile wholesale.
async fn input_from(app: &App, args: &ProfileUpdateArgs) -> Result<ProfileInput> {
    let existing = app.profile().refetch().await?;
    Ok(ProfileInput {
        name: args.name.clone(),
        title: args.title.clone(),
        bio: args.bio.clone(),
        avatar_url: args.avatar_url.clone(),
        social: existing.map(|p| p.social).unwrap_or_default(),
    })
}
