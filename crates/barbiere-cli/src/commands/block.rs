//! `barbiere block` / `unblock` — availability exclusions.

use barbiere_core::application::BlockTimeSlotRequest;

use crate::cli::{BlockArgs, GlobalArgs, UnblockArgs};
use crate::commands::{Workspace, parse_date, parse_time};
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::OutputManager;

pub fn block(
    args: BlockArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let date = parse_date(&args.date)?;
    let (start_hour, start_minute) = parse_time(&args.time)?;

    let blocked = workspace.schedule_service().block_time_slot(
        workspace.shop_id(),
        BlockTimeSlotRequest {
            barber_id: args.barber,
            date,
            start_hour,
            start_minute,
            duration_minutes: args.duration,
            reason: args.reason,
        },
    )?;
    workspace.persist()?;

    output.success(&format!(
        "Blocked {} on {} ({})",
        blocked.time_slot(),
        date,
        blocked.reason()
    ))?;
    output.print(&format!("  blocked slot id: {}", blocked.id()))?;
    Ok(())
}

pub fn unblock(
    args: UnblockArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    workspace
        .schedule_service()
        .unblock_time_slot(workspace.shop_id(), &args.id)?;
    workspace.persist()?;
    output.success(&format!("Blocked slot {} removed", args.id))?;
    Ok(())
}
