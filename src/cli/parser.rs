use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtimeline
/// CLI application to manage fictional-world calendars with SQLite
#[derive(Parser)]
#[command(
    name = "rtimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timeline CLI: convert fictional-world dates and query event windows using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage worlds and their calendars
    World {
        /// Create a new world
        #[arg(long = "add", value_name = "NAME")]
        add: Option<String>,

        /// List all worlds and their calendars
        #[arg(long = "list")]
        list: bool,

        /// Update the calendar of an existing world
        #[arg(long = "set", value_name = "NAME")]
        set: Option<String>,

        /// Epoch display label (e.g. "Imperial Era")
        #[arg(long = "epoch")]
        epoch: Option<String>,

        #[arg(long = "seconds-per-hour", help = "Hour length in world-seconds")]
        seconds_per_hour: Option<i64>,

        #[arg(long = "hours-per-day", help = "Day length in hours")]
        hours_per_day: Option<i64>,

        #[arg(long = "days-per-month", help = "Month length in days")]
        days_per_month: Option<i64>,

        #[arg(long = "months-per-year", help = "Year length in months")]
        months_per_year: Option<i64>,
    },

    /// Add an event to a world's timeline
    Add {
        /// World name
        world: String,

        /// Event title
        title: String,

        /// Time point in world-seconds (negative = before the epoch)
        #[arg(long = "at", allow_hyphen_values = true)]
        at: Option<i64>,

        /// Time point as a date string ('BC 100-1-1', 'AD 3-2-5' or '-100-1-1')
        #[arg(long = "date", conflicts_with = "at", allow_hyphen_values = true)]
        date: Option<String>,
    },

    /// Delete an event by id
    Del {
        /// World name
        world: String,

        #[arg(long = "id", help = "Event id to delete")]
        id: i64,
    },

    /// List events inside a resolved time window
    List {
        /// World name (falls back to default_world from the config)
        world: Option<String>,

        /// Relative window: last N units counted back from the world's
        /// recorded maximum event time (e.g. '7d', '2 weeks', '1y')
        #[arg(long = "last", value_name = "EXPR")]
        last: Option<String>,

        /// Explicit window start in world-seconds
        #[arg(long = "from", allow_hyphen_values = true)]
        from: Option<i64>,

        /// Explicit window end in world-seconds
        #[arg(long = "to", allow_hyphen_values = true)]
        to: Option<i64>,

        /// No window at all: list the entire timeline
        #[arg(long = "unlimited", conflicts_with_all = ["last", "from", "to"])]
        unlimited: bool,

        /// Print raw timepoints instead of calendar dates
        #[arg(long = "raw")]
        raw: bool,
    },

    /// Convert between world-seconds and a structured calendar date
    Convert {
        /// World name (falls back to default_world from the config)
        world: Option<String>,

        /// Instant to convert into a date
        #[arg(long = "seconds", allow_hyphen_values = true)]
        seconds: Option<i64>,

        /// Date string to convert into world-seconds
        #[arg(long = "date", conflicts_with = "seconds", allow_hyphen_values = true)]
        date: Option<String>,
    },

    /// Resolve a query window without listing events
    Window {
        /// World name (falls back to default_world from the config)
        world: Option<String>,

        /// Relative window (e.g. '30d', '6 months')
        #[arg(long = "last", value_name = "EXPR")]
        last: Option<String>,

        #[arg(long = "from", allow_hyphen_values = true)]
        from: Option<i64>,

        #[arg(long = "to", allow_hyphen_values = true)]
        to: Option<i64>,

        #[arg(long = "unlimited", conflicts_with_all = ["last", "from", "to"])]
        unlimited: bool,

        /// Widen the window so currently stored events stay inside it
        #[arg(long = "clamp-selection")]
        clamp_selection: bool,

        /// Minimum window span in world-seconds (defaults from the config)
        #[arg(long = "min-span")]
        min_span: Option<i64>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz on Unix)
        #[arg(long)]
        compress: bool,
    },

    /// Export timeline events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict the export to one world
        #[arg(long)]
        world: Option<String>,

        #[arg(long = "from", allow_hyphen_values = true)]
        from: Option<i64>,

        #[arg(long = "to", allow_hyphen_values = true)]
        to: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
