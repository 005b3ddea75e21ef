//! `barbiere cancel` / `confirm` / `complete` — booking transitions.

use crate::cli::{BookingRefArgs, CancelArgs, GlobalArgs};
use crate::commands::Workspace;
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::OutputManager;

pub fn cancel(
    args: CancelArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    workspace
        .booking_service()
        .cancel_booking(workspace.shop_id(), &args.booking, &args.code)?;
    workspace.persist()?;
    output.success(&format!("Booking {} cancelled", args.booking))?;
    Ok(())
}

pub fn confirm(
    args: BookingRefArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let record = workspace
        .booking_service()
        .confirm_booking(workspace.shop_id(), &args.booking)?;
    workspace.persist()?;

    if output.wants_json() {
        return output.json(&record);
    }
    output.success(&format!(
        "Booking {} confirmed for {} at {}",
        record.id,
        record.customer_name,
        &record.start_time[11..16]
    ))?;
    Ok(())
}

pub fn complete(
    args: BookingRefArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    workspace
        .booking_service()
        .complete_booking(workspace.shop_id(), &args.booking)?;
    workspace.persist()?;
    output.success(&format!("Booking {} completed", args.booking))?;
    Ok(())
}
