use anyhow::Result;

use timesheet_core::local::LocalStore;
use timesheet_core::{MarkMode, MonthYear, TimesheetAction, reduce};

use crate::render;

pub fn run(store: &LocalStore, mode: &str, month: MonthYear) -> Result<()> {
    let mode = match mode.to_ascii_lowercase().as_str() {
        "leaves" => MarkMode::Leaves,
        "holiday" => MarkMode::Holiday,
        other => anyhow::bail!("Unknown mode '{other}'. Use 'leaves' or 'holiday'."),
    };

    let state = store.load_or_init(month);
    let state = reduce(&state, TimesheetAction::SetMarkMode(mode));
    store.save_marks(month, &state)?;

    println!("{}", render::render_mode(mode));
    Ok(())
}
