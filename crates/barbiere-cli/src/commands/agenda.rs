//! `barbiere agenda` — the day's bookings.

use barbiere_adapters::SystemClock;
use barbiere_core::domain::Clock;

use crate::cli::{AgendaArgs, GlobalArgs};
use crate::commands::{Workspace, parse_date};
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::OutputManager;

pub fn execute(
    args: AgendaArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let date = match &args.date {
        Some(raw) => parse_date(raw)?,
        None => SystemClock::new().now().date(),
    };

    let bookings = workspace
        .booking_service()
        .daily_bookings(workspace.shop_id(), date)?;

    if output.wants_json() {
        return output.json(&bookings);
    }

    if bookings.is_empty() {
        output.info(&format!("No bookings on {date}"))?;
        return Ok(());
    }

    output.header(&format!(
        "Agenda for {} — {}",
        workspace.shop.name(),
        date
    ))?;
    for b in &bookings {
        output.print(&format!(
            "  {} - {}  {:<10} {:<18} {:<18} {}",
            &b.start_time[11..16],
            &b.end_time[11..16],
            b.status,
            b.barber_name,
            b.service_name,
            b.customer_name
        ))?;
        output.print(&format!("      id: {}", b.id))?;
    }
    Ok(())
}
