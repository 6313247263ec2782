mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use timesheet_core::MonthYear;
use timesheet_core::local::LocalStore;
use timesheet_google::GoogleHub;

#[derive(Parser)]
#[command(name = "timesheet")]
#[command(about = "Mark leave and holiday days, then upload a formatted monthly timesheet to Google Sheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with Google
    Auth,

    /// Sign out and clear stored tokens
    Logout,

    /// Edit and save the project details written into the sheet header
    Profile,

    /// Show the calendar grid, summary, and Drive file for a month
    Status {
        /// Month to show (e.g. August2025), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Choose what marking a day edits: leaves or holiday
    Mode {
        /// "leaves" or "holiday"
        mode: String,

        /// Month to change (e.g. August2025), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Mark a day: cycles none -> half -> full in leaves mode, toggles in holiday mode
    Mark {
        /// Day of the month to mark
        day: u32,

        /// Month to change (e.g. August2025), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Build the batch update and push it to the month's spreadsheet
    Upload {
        /// Month to upload (e.g. August2025), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = LocalStore::open()?;

    match cli.command {
        Commands::Auth => commands::auth::run(&GoogleHub::from_config()?).await,
        Commands::Logout => commands::logout::run(&GoogleHub::from_config()?).await,
        Commands::Profile => commands::profile::run(&store),
        Commands::Status { month } => {
            commands::status::run(&store, resolve_month(month.as_deref())?).await
        }
        Commands::Mode { mode, month } => {
            commands::mode::run(&store, &mode, resolve_month(month.as_deref())?)
        }
        Commands::Mark { day, month } => {
            commands::mark::run(&store, day, resolve_month(month.as_deref())?)
        }
        Commands::Upload { month } => {
            commands::upload::run(
                &GoogleHub::from_config()?,
                &store,
                resolve_month(month.as_deref())?,
            )
            .await
        }
    }
}

fn resolve_month(arg: Option<&str>) -> Result<MonthYear> {
    match arg {
        Some(token) => Ok(token.parse()?),
        None => Ok(MonthYear::current()),
    }
}
