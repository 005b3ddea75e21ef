//! `barbiere book` — create a booking.

use barbiere_core::application::CreateBookingRequest;

use crate::cli::{BookArgs, GlobalArgs};
use crate::commands::{Workspace, parse_date, parse_time};
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::OutputManager;

pub fn execute(
    args: BookArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let date = parse_date(&args.date)?;
    let (start_hour, start_minute) = parse_time(&args.time)?;

    let record = workspace.booking_service().create_booking(
        workspace.shop_id(),
        CreateBookingRequest {
            barber_id: args.barber,
            service_id: args.service,
            customer_name: args.name,
            customer_phone: args.phone,
            customer_email: args.email,
            date,
            start_hour,
            start_minute,
        },
    )?;
    workspace.persist()?;

    if output.wants_json() {
        return output.json(&record);
    }

    output.success(&format!(
        "Booked {} with {} on {} at {}",
        record.service_name,
        record.barber_name,
        record.date,
        &record.start_time[11..16]
    ))?;
    output.print(&format!("  booking id:        {}", record.id))?;
    output.print(&format!("  cancellation code: {}", record.cancellation_code))?;
    output.info("Keep the cancellation code — it is required to cancel.")?;
    Ok(())
}
