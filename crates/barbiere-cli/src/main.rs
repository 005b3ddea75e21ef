//! # Barbiere CLI
//!
//! Back-office tool for the barbiere booking engine.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` (silently skipped when absent).
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration (defaults + file + `BARBIERE_*` env).
//! 5. Build the [`OutputManager`].
//! 6. Dispatch to the command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init. Production
    // deployments use real environment variables, not .env files.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap reports --help/--version through Err too; those go to
            // stdout and exit 0. Real parse failures exit 2.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
            };
            return handle_error(err, verbose);
        }
    };

    let output = OutputManager::new(&cli.global);

    match run(cli, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let global = cli.global;
    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &global, &config, &output),
        Commands::Slots(args) => commands::slots::execute(args, &global, &config, &output),
        Commands::Book(args) => commands::book::execute(args, &global, &config, &output),
        Commands::Cancel(args) => commands::booking_ops::cancel(args, &global, &config, &output),
        Commands::Confirm(args) => commands::booking_ops::confirm(args, &global, &config, &output),
        Commands::Complete(args) => {
            commands::booking_ops::complete(args, &global, &config, &output)
        }
        Commands::Agenda(args) => commands::agenda::execute(args, &global, &config, &output),
        Commands::Block(args) => commands::block::block(args, &global, &config, &output),
        Commands::Unblock(args) => commands::block::unblock(args, &global, &config, &output),
        Commands::Barbers(args) => commands::catalog::barbers(args, &global, &config, &output),
        Commands::Services => commands::catalog::services(&global, &config, &output),
        Commands::AddService(args) => {
            commands::catalog::add_service(args, &global, &config, &output)
        }
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    // Structured log event at the right severity first.
    err.log();

    // Then a user-facing message on stderr, colored only on a TTY.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // clap's internal consistency check — catches conflicts, missing
        // values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
