//! Handlers for `login` and `logout`, plus the guard check shared by the
//! dashboard commands.

use dialoguer::Password;

use super::{output, LoginArgs};
use crate::app::App;
use crate::auth::Access;
use crate::error::Result;

/// Execute the login command.
pub async fn login(app: &App, args: &LoginArgs) -> Result<()> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| std::io::Error::other(e.to_string()))?,
    };

    app.auth().login(&args.username, &password).await?;
    output::ok(&format!("logged in as {}", args.username));
    Ok(())
}

/// Execute the logout command.
pub async fn logout(app: &App) -> Result<()> {
    app.auth().logout().await;
    output::ok("logged out");
    Ok(())
}

/// Gate a dashboard command on the route guard. Prints the redirect the
/// rendering layer would perform and exits when unauthorized.
pub fn require_authorized(app: &App, requested_path: &str) {
    if let Access::Redirect { to, return_to } = app.guard().evaluate(requested_path) {
        output::error(&format!(
            "not authorized for {return_to}; log in first (redirect: {to})"
        ));
        std::process::exit(1);
    }
}
