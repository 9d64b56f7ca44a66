//! Handler for the `status` command.

use super::output;
use crate::app::App;
use crate::auth::Access;
use crate::config::Config;
use crate::error::Result;

/// Execute the status command.
pub fn execute(app: &App, config: &Config) -> Result<()> {
    output::section("Session");
    output::key_value("endpoint", &config.network.graphql_url);
    output::key_value("state file", config.state_path().display());

    match app.tokens().get() {
        Some(_) if app.tokens().is_valid() => {
            let subject = app
                .tokens()
                .claims()
                .and_then(|c| c.sub)
                .unwrap_or_else(|| "unknown".to_string());
            output::ok(&format!("authenticated as {subject}"));
        }
        Some(_) => output::warn("stored token is expired or unreadable"),
        None => output::note("no stored token"),
    }

    match app.guard().evaluate("/my-panel") {
        Access::Granted => output::key_value("dashboard", "accessible"),
        Access::Redirect { to, .. } => output::key_value("dashboard", format!("redirects to {to}")),
    }

    if let Some(theme) = app.theme() {
        output::key_value("theme", theme.as_str());
    }

    Ok(())
}
