use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use timesheet_core::ProfileField;
use timesheet_core::local::LocalStore;
use timesheet_core::session::{SessionAction, SessionState, reduce_session};

pub fn run(store: &LocalStore) -> Result<()> {
    let session = SessionState::default();
    let mut session = reduce_session(
        &session,
        SessionAction::SetProfileAll(store.load_profile()),
    );

    for field in ProfileField::ALL {
        let value: String = Input::new()
            .with_prompt(field.label())
            .with_initial_text(session.profile.get(field).to_string())
            .allow_empty(true)
            .interact_text()?;
        session = reduce_session(
            &session,
            SessionAction::SetProfileField {
                field,
                value: value.trim().to_string(),
            },
        );
    }

    store.save_profile(&session.profile)?;
    println!("{}", "Saved. These details pop back up next time.".green());
    if !session.profile.is_complete() {
        println!(
            "{} {}",
            "Still empty:".yellow(),
            session.profile.missing().join(", ")
        );
    }
    Ok(())
}
