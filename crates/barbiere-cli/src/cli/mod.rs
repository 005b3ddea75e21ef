//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, and help text. No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "barbiere",
    bin_name = "barbiere",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "barbiere maintainers",
    about    = "\u{2702} Barbershop bookings from the terminal",
    long_about = "Barbiere manages one shop's barbers, services, availability \
                  and bookings against a local tenant data file.",
    after_help = "EXAMPLES:\n\
        \x20 barbiere init\n\
        \x20 barbiere slots --barber <ID> --service <ID> --date 2026-03-02\n\
        \x20 barbiere book --barber <ID> --service <ID> --date 2026-03-02 --time 10:00 \\\n\
        \x20          --name 'Anna Verdi' --phone '+39 333 123 4567'\n\
        \x20 barbiere cancel --booking <ID> --code A1B2C3\n\
        \x20 barbiere agenda --date 2026-03-02",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a demo shop data file.
    #[command(
        about = "Initialise a demo shop",
        after_help = "EXAMPLES:\n\
            \x20 barbiere init\n\
            \x20 barbiere init --data ./shop.json --force"
    )]
    Init(InitArgs),

    /// List available slots for a barber/service/day.
    #[command(
        about = "List bookable slots",
        after_help = "EXAMPLES:\n\
            \x20 barbiere slots --barber <ID> --service <ID> --date 2026-03-02"
    )]
    Slots(SlotsArgs),

    /// Create a booking.
    #[command(
        visible_alias = "b",
        about = "Book a slot",
        after_help = "EXAMPLES:\n\
            \x20 barbiere book --barber <ID> --service <ID> --date 2026-03-02 \\\n\
            \x20          --time 10:00 --name 'Anna Verdi' --phone '+39 333 123 4567'"
    )]
    Book(BookArgs),

    /// Cancel a booking with its cancellation code.
    #[command(about = "Cancel a booking")]
    Cancel(CancelArgs),

    /// Confirm a pending booking.
    #[command(about = "Confirm a pending booking")]
    Confirm(BookingRefArgs),

    /// Mark a booking as completed.
    #[command(about = "Complete a booking")]
    Complete(BookingRefArgs),

    /// Show the day's bookings.
    #[command(
        about = "Show the daily agenda",
        after_help = "EXAMPLES:\n\
            \x20 barbiere agenda\n\
            \x20 barbiere agenda --date 2026-03-02"
    )]
    Agenda(AgendaArgs),

    /// Block a time slot for a barber.
    #[command(
        about = "Block a time slot",
        after_help = "EXAMPLES:\n\
            \x20 barbiere block --barber <ID> --date 2026-03-02 --time 12:00 \\\n\
            \x20          --duration 60 --reason 'pausa pranzo'"
    )]
    Block(BlockArgs),

    /// Remove a blocked slot.
    #[command(about = "Remove a blocked slot")]
    Unblock(UnblockArgs),

    /// List the shop's barbers.
    #[command(about = "List barbers")]
    Barbers(BarbersArgs),

    /// List the shop's services.
    #[command(about = "List services")]
    Services,

    /// Add a service to the catalog.
    #[command(
        about = "Add a service",
        after_help = "EXAMPLES:\n\
            \x20 barbiere add-service --name 'Taglio Bambino' --duration 20 --price 18"
    )]
    AddService(AddServiceArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing data file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing data file")]
    pub force: bool,
}

// ── slots ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SlotsArgs {
    #[arg(long = "barber", value_name = "ID", help = "Barber id")]
    pub barber: String,

    #[arg(long = "service", value_name = "ID", help = "Service id")]
    pub service: String,

    /// Day to inspect, `YYYY-MM-DD`.
    #[arg(long = "date", value_name = "DATE", help = "Date (YYYY-MM-DD)")]
    pub date: String,
}

// ── book ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BookArgs {
    #[arg(long = "barber", value_name = "ID", help = "Barber id")]
    pub barber: String,

    #[arg(long = "service", value_name = "ID", help = "Service id")]
    pub service: String,

    #[arg(long = "date", value_name = "DATE", help = "Date (YYYY-MM-DD)")]
    pub date: String,

    /// Slot start, `HH:mm`. The slot length is the service duration.
    #[arg(long = "time", value_name = "TIME", help = "Start time (HH:mm)")]
    pub time: String,

    #[arg(long = "name", value_name = "NAME", help = "Customer name")]
    pub name: String,

    #[arg(long = "phone", value_name = "PHONE", help = "Customer phone number")]
    pub phone: String,

    #[arg(long = "email", value_name = "EMAIL", help = "Customer email (optional)")]
    pub email: Option<String>,
}

// ── cancel / confirm / complete ───────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CancelArgs {
    #[arg(long = "booking", value_name = "ID", help = "Booking id")]
    pub booking: String,

    /// The cancellation code returned when the booking was created.
    #[arg(long = "code", value_name = "CODE", help = "Cancellation code")]
    pub code: String,
}

#[derive(Debug, Args)]
pub struct BookingRefArgs {
    #[arg(long = "booking", value_name = "ID", help = "Booking id")]
    pub booking: String,
}

// ── agenda ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AgendaArgs {
    /// Day to show, `YYYY-MM-DD`. Defaults to today.
    #[arg(long = "date", value_name = "DATE", help = "Date (YYYY-MM-DD, default today)")]
    pub date: Option<String>,
}

// ── block / unblock ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BlockArgs {
    #[arg(long = "barber", value_name = "ID", help = "Barber id")]
    pub barber: String,

    #[arg(long = "date", value_name = "DATE", help = "Date (YYYY-MM-DD)")]
    pub date: String,

    #[arg(long = "time", value_name = "TIME", help = "Start time (HH:mm)")]
    pub time: String,

    #[arg(
        long = "duration",
        value_name = "MINUTES",
        help = "Length of the block in minutes"
    )]
    pub duration: u32,

    #[arg(long = "reason", value_name = "TEXT", help = "Why the slot is blocked")]
    pub reason: String,
}

#[derive(Debug, Args)]
pub struct UnblockArgs {
    #[arg(long = "id", value_name = "ID", help = "Blocked slot id")]
    pub id: String,
}

// ── barbers ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BarbersArgs {
    /// Include deactivated barbers.
    #[arg(long = "all", help = "Include inactive barbers")]
    pub all: bool,
}

// ── add-service ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AddServiceArgs {
    #[arg(long = "name", value_name = "NAME", help = "Service name")]
    pub name: String,

    #[arg(
        long = "description",
        value_name = "TEXT",
        default_value = "",
        help = "Service description"
    )]
    pub description: String,

    #[arg(long = "duration", value_name = "MINUTES", help = "Duration in minutes")]
    pub duration: u16,

    #[arg(long = "price", value_name = "AMOUNT", help = "Price amount")]
    pub price: f64,

    #[arg(long = "currency", value_name = "CODE", help = "3-letter currency code")]
    pub currency: Option<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_book_command() {
        let cli = Cli::parse_from([
            "barbiere", "book", "--barber", "b-1", "--service", "sv-1", "--date", "2026-03-02",
            "--time", "10:00", "--name", "Anna", "--phone", "+393331234567",
        ]);
        match cli.command {
            Commands::Book(args) => {
                assert_eq!(args.time, "10:00");
                assert_eq!(args.email, None);
            }
            other => panic!("expected Book, got {other:?}"),
        }
    }

    #[test]
    fn book_alias() {
        let cli = Cli::parse_from([
            "barbiere", "b", "--barber", "b-1", "--service", "sv-1", "--date", "2026-03-02",
            "--time", "10:00", "--name", "Anna", "--phone", "+393331234567",
        ]);
        assert!(matches!(cli.command, Commands::Book(_)));
    }

    #[test]
    fn agenda_date_is_optional() {
        let cli = Cli::parse_from(["barbiere", "agenda"]);
        match cli.command {
            Commands::Agenda(args) => assert!(args.date.is_none()),
            other => panic!("expected Agenda, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["barbiere", "--quiet", "--verbose", "services"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_data_flag_applies_everywhere() {
        let cli = Cli::parse_from(["barbiere", "services", "--data", "/tmp/shop.json"]);
        assert_eq!(
            cli.global.data.as_deref(),
            Some(std::path::Path::new("/tmp/shop.json"))
        );
    }
}
