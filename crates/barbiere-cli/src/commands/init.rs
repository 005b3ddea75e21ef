//! `barbiere init` — seed a demo tenant.

use barbiere_adapters::{JsonStore, UuidGenerator, fixtures};

use crate::cli::{GlobalArgs, InitArgs};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let path = global
        .data
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    let store = JsonStore::new(&path);

    if store.exists() {
        if !args.force {
            return Err(CliError::InvalidInput {
                message: format!(
                    "data file already exists at {} (use --force to overwrite)",
                    path.display()
                ),
            });
        }
        output.warning(&format!("Overwriting existing data file at {}", path.display()))?;
    }

    let state = fixtures::demo_tenant(&UuidGenerator::new())?;
    store.save(&state)?;

    output.success(&format!(
        "Shop '{}' ({}) created at {}",
        state.shop.name(),
        state.shop.slug(),
        path.display()
    ))?;
    for barber in &state.barbers {
        output.print(&format!("  barber  {}  {}", barber.id(), barber.name()))?;
    }
    for service in &state.services {
        output.print(&format!(
            "  service {}  {} ({} min, {})",
            service.id(),
            service.name(),
            service.duration_minutes(),
            service.price()
        ))?;
    }
    Ok(())
}
