use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mjournal
/// CLI maintenance journal backed by SQLite
#[derive(Parser)]
#[command(
    name = "mjournal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A maintenance journal CLI: track equipment, maintenance types and events, and see what is due",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Evaluate due dates at this instant instead of now (YYYY-MM-DD[ HH:MM[:SS]])
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Pending maintenance across all objects
    Dashboard {
        #[arg(long, help = "Maximum number of rows")]
        limit: Option<usize>,

        #[arg(long, help = "Also show items due within this many days")]
        horizon: Option<i64>,
    },

    /// Pending maintenance, optionally scoped to an object subtree
    Pending {
        #[arg(long = "object", help = "Only this object and everything below it")]
        object: Option<i64>,

        #[arg(long, help = "Maximum number of rows")]
        limit: Option<usize>,

        #[arg(long, help = "Also show items due within this many days")]
        horizon: Option<i64>,
    },

    /// Summary of one object: path, nested objects, recent events, pending items
    Summary {
        /// Object id
        object_id: i64,
    },

    /// Breadcrumb path from the root down to an object
    Path {
        /// Object id
        object_id: i64,
    },

    /// List top-level objects, or the direct children of --parent
    Objects {
        #[arg(long = "parent", help = "List the objects nested under this one")]
        parent: Option<i64>,
    },

    /// Events of an object and everything below it, newest first
    Events {
        /// Object id
        object_id: i64,

        #[arg(long, help = "Maximum number of rows")]
        limit: Option<usize>,
    },

    /// List maintenance types
    Types,

    /// List the maintenance types applicable to an object
    Links {
        /// Object id
        object_id: i64,
    },

    /// Record, edit or delete maintenance events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Create objects
    Object {
        #[command(subcommand)]
        action: ObjectAction,
    },

    /// Create maintenance types
    Type {
        #[command(subcommand)]
        action: TypeAction,
    },

    /// Declare or remove applicability of a type to an object
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Export the pending list or an event history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "events", requires = "object", help = "Export events instead of pending items")]
        events: bool,

        #[arg(long = "object", help = "Scope to this object and everything below it")]
        object: Option<i64>,

        #[arg(long, help = "Maximum number of pending rows")]
        limit: Option<usize>,

        #[arg(long, help = "Horizon in days for pending rows")]
        horizon: Option<i64>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Record a maintenance event
    Add {
        /// Object id
        object_id: i64,

        #[arg(long = "type", help = "Maintenance type id")]
        type_id: i64,

        #[arg(long, help = "When it was done (YYYY-MM-DD[ HH:MM[:SS]]), default now")]
        date: Option<String>,

        #[arg(long, default_value = "")]
        comment: String,
    },

    /// Edit an existing event
    Edit {
        /// Event id
        event_id: i64,

        #[arg(long = "type", help = "New maintenance type id")]
        type_id: Option<i64>,

        #[arg(long, help = "New date (YYYY-MM-DD[ HH:MM[:SS]])")]
        date: Option<String>,

        #[arg(long)]
        comment: Option<String>,
    },

    /// Delete an event
    Del {
        /// Event id
        event_id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ObjectAction {
    /// Create an object
    Add {
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long = "parent", help = "Parent object id")]
        parent: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum TypeAction {
    /// Create a maintenance type
    Add {
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long = "parent", help = "Parent type id")]
        parent: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum LinkAction {
    /// Make a type applicable to an object
    Add {
        /// Object id
        object_id: i64,

        #[arg(long = "type", help = "Maintenance type id")]
        type_id: i64,

        #[arg(long = "every", help = "Periodicity in days; omit for an unscheduled link")]
        every: Option<i64>,
    },

    /// Remove a link
    Del {
        /// Object id
        object_id: i64,

        #[arg(long = "type", help = "Maintenance type id")]
        type_id: i64,
    },
}
