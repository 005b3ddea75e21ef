//! `barbiere slots` — list bookable slots.

use crate::cli::{GlobalArgs, SlotsArgs};
use crate::commands::{Workspace, parse_date};
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::OutputManager;

pub fn execute(
    args: SlotsArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let date = parse_date(&args.date)?;

    let slots = workspace.schedule_service().available_slots(
        workspace.shop_id(),
        &args.barber,
        &args.service,
        date,
    )?;

    if output.wants_json() {
        return output.json(&slots);
    }

    if slots.is_empty() {
        output.info(&format!("No free slots on {date}"))?;
        return Ok(());
    }

    output.header(&format!("Free slots on {date}"))?;
    for slot in &slots {
        output.print(&format!(
            "  {} - {}  ({} min)",
            &slot.start_time[11..16],
            &slot.end_time[11..16],
            slot.duration_minutes
        ))?;
    }
    Ok(())
}
