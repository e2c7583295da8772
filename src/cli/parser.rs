use crate::export::ExportFormat;
use crate::models::EventCategory;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for wedplanner
#[derive(Parser)]
#[command(
    name = "wedplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan a wedding from the terminal: timeline, guest list, sitting plan and exports, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Work on this project instead of the default one
    #[arg(global = true, long = "project", value_name = "ID")]
    pub project: Option<i64>,

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

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the destination without asking")]
        force: bool,
    },

    /// Wedding projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Timeline / agenda of the current project
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Guest list
    Guest {
        #[command(subcommand)]
        action: GuestAction,
    },

    /// Guest categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Sitting plan: tables and guest assignment
    Table {
        #[command(subcommand)]
        action: TableAction,
    },

    /// Show or update the couple profile
    Profile {
        #[arg(long, help = "Bride name (empty string clears it)")]
        bride: Option<String>,

        #[arg(long, help = "Groom name (empty string clears it)")]
        groom: Option<String>,
    },

    /// Overview of the current project: date, couple, sections
    Overview,

    /// Export the sitting plan (one row per guest)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new wedding project
    Add {
        name: String,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Wedding date")]
        date: Option<String>,
    },
    /// List projects
    List,
    /// Set or clear the wedding date
    Date {
        id: i64,

        #[arg(value_name = "YYYY-MM-DD", required_unless_present = "clear")]
        date: Option<String>,

        #[arg(long, conflicts_with = "date")]
        clear: bool,
    },
    /// Rename a project
    Rename { id: i64, name: String },
    /// Delete a project and its timeline
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

/// Start / end / duration of a slot: exactly one of end or duration on add.
#[derive(Args, Debug, Clone, Default)]
pub struct SlotArgs {
    #[arg(long, value_name = "HH:MM", help = "Start time")]
    pub start: Option<String>,

    #[arg(long, value_name = "HH:MM", conflicts_with = "duration", help = "End time")]
    pub end: Option<String>,

    #[arg(
        long,
        value_name = "DURATION",
        help = "Duration: minutes (90), \"1h 30m\" or \"90 mins\""
    )]
    pub duration: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EventFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, help = "Description (empty string clears it)")]
    pub description: Option<String>,

    #[arg(long, value_enum, ignore_case = true)]
    pub category: Option<EventCategory>,

    #[arg(long, help = "Location (empty string clears it)")]
    pub location: Option<String>,
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Add a timeline event
    Add {
        #[command(flatten)]
        slot: SlotArgs,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Edit a timeline event (one of --start, --end, --duration per edit)
    Edit {
        id: i64,

        #[command(flatten)]
        slot: SlotArgs,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete a timeline event
    Del { id: i64 },
    /// Show the timeline of the current project
    List,
}

#[derive(Subcommand)]
pub enum GuestAction {
    /// Add a guest
    Add {
        name: String,

        #[arg(long, help = "Category id or name")]
        category: String,
    },
    /// Edit name and/or category
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Category id or name")]
        category: Option<String>,
    },
    /// Delete a guest
    Del { id: i64 },
    /// List guests
    List {
        #[arg(long, help = "Only guests of this category (id or name)")]
        category: Option<String>,

        #[arg(long, value_name = "TABLE_ID", help = "Only guests seated at this table")]
        table: Option<i64>,

        #[arg(long, conflicts_with = "table", help = "Only guests without a table")]
        unassigned: bool,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Add a guest category
    Add { name: String },
    /// List guest categories
    List,
    /// Delete an unused guest category
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum TableAction {
    /// Add a table
    Add { name: String },
    /// Rename a table
    Rename { id: i64, name: String },
    /// Delete a table (its guests are unassigned first)
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
    /// Seat a guest at a table
    Assign { guest_id: i64, table_id: i64 },
    /// Remove a guest from their table
    Remove { guest_id: i64 },
    /// Show every table with its guests
    List,
}
