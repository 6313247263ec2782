use anyhow::Result;
use owo_colors::OwoColorize;

use timesheet_core::TimesheetError;
use timesheet_core::remote::SheetsHub;
use timesheet_core::session::{SessionAction, SessionState, UserDetails, reduce_session};
use timesheet_google::GoogleHub;

use crate::render;

pub async fn run(hub: &GoogleHub) -> Result<()> {
    let session = SessionState::default();
    let session = reduce_session(&session, SessionAction::UserLoading);

    println!("Opening your browser for Google sign-in...");
    let session = match hub.sign_in().await {
        Ok(account) => reduce_session(
            &session,
            SessionAction::UserSuccess(UserDetails {
                username: account.username,
                email: account.email,
                logged_in: true,
            }),
        ),
        Err(err) => {
            // Config errors carry actionable setup instructions; everything
            // else collapses to the generic message.
            let message = match err {
                TimesheetError::Config(msg) => msg,
                _ => render::AUTH_ERROR_MSG.to_string(),
            };
            reduce_session(&session, SessionAction::UserError(message))
        }
    };

    if session.user.details.logged_in {
        println!(
            "Signed in as {} ({})",
            session.user.details.username.bold(),
            session.user.details.email.green(),
        );
    } else if let Some(error) = &session.user.error {
        println!("{}", error.red());
    }
    Ok(())
}
