use anyhow::Result;
use owo_colors::OwoColorize;

use timesheet_core::remote::SheetsHub;
use timesheet_google::GoogleHub;

pub async fn run(hub: &GoogleHub) -> Result<()> {
    match hub.sign_out().await {
        Ok(()) => println!("Logged out."),
        Err(_) => println!("{}", "Google logout error!".red()),
    }
    Ok(())
}
