use clap::{Parser, Subcommand};

/// Command-line interface definition for workhours
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily work time entries with lunch breaks and weekly totals (SQLite)",
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

    /// View or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Record a workday entry
    Add {
        /// Work date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long = "lunch", help = "Lunch break in minutes (default from config)")]
        lunch: Option<u32>,
    },

    /// List entries for a day, a range or a week
    List {
        #[arg(long, help = "Exact date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, requires = "to", conflicts_with_all = ["date", "week"], help = "Range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, requires = "from", help = "Range end, inclusive (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, conflicts_with = "date", help = "Any date of the week to list")]
        week: Option<String>,

        #[arg(long, help = "Print entries as JSON")]
        json: bool,
    },

    /// Weekly summary with per-day totals
    Week {
        /// Any date inside the week (default today)
        date: Option<String>,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// Change fields of an existing entry
    Edit {
        id: i64,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        lunch: Option<u32>,
    },

    /// Delete an entry by id
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
