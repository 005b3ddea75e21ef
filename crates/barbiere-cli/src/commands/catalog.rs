//! `barbiere barbers` / `services` / `add-service` — catalog management.

use barbiere_core::application::CreateServiceRequest;
use serde::Serialize;

use crate::cli::{AddServiceArgs, BarbersArgs, GlobalArgs};
use crate::commands::Workspace;
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::OutputManager;

#[derive(Serialize)]
struct BarberRow<'a> {
    id: &'a str,
    name: &'a str,
    is_active: bool,
}

pub fn barbers(
    args: BarbersArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let barbers = workspace
        .catalog_service()
        .list_barbers(workspace.shop_id(), !args.all)?;

    if output.wants_json() {
        let rows: Vec<BarberRow<'_>> = barbers
            .iter()
            .map(|b| BarberRow {
                id: b.id(),
                name: b.name(),
                is_active: b.is_active(),
            })
            .collect();
        return output.json(&rows);
    }

    output.header(&format!("Barbers at {}", workspace.shop.name()))?;
    for barber in &barbers {
        let marker = if barber.is_active() { " " } else { "✗" };
        output.print(&format!("  {marker} {}  {}", barber.id(), barber.name()))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ServiceRow<'a> {
    id: &'a str,
    name: &'a str,
    duration_minutes: u16,
    price: f64,
    currency: &'a str,
    is_active: bool,
}

pub fn services(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let services = workspace
        .catalog_service()
        .list_services(workspace.shop_id())?;

    if output.wants_json() {
        let rows: Vec<ServiceRow<'_>> = services
            .iter()
            .map(|s| ServiceRow {
                id: s.id(),
                name: s.name(),
                duration_minutes: s.duration_minutes(),
                price: s.price().amount(),
                currency: s.price().currency(),
                is_active: s.is_active(),
            })
            .collect();
        return output.json(&rows);
    }

    output.header(&format!("Services at {}", workspace.shop.name()))?;
    for service in &services {
        let marker = if service.is_active() { " " } else { "✗" };
        output.print(&format!(
            "  {marker} {}  {:<20} {:>3} min  {}",
            service.id(),
            service.name(),
            service.duration_minutes(),
            service.price()
        ))?;
    }
    Ok(())
}

pub fn add_service(
    args: AddServiceArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::open(global, config)?;
    let currency = args.currency.or_else(|| Some(config.currency.clone()));

    let service = workspace.catalog_service().create_service(
        workspace.shop_id(),
        CreateServiceRequest {
            name: args.name,
            description: args.description,
            duration_minutes: args.duration,
            price: args.price,
            currency,
        },
    )?;
    workspace.persist()?;

    output.success(&format!(
        "Service '{}' added ({} min, {})",
        service.name(),
        service.duration_minutes(),
        service.price()
    ))?;
    output.print(&format!("  service id: {}", service.id()))?;
    Ok(())
}
