use crate::core::import::ImportFormat;
use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for rWorkHistory
/// CLI application to track driver employment history with SQLite
#[derive(Parser)]
#[command(
    name = "rworkhistory",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employment-history tracker for driver onboarding: timelines, gaps and FMCSR coverage",
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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
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

        #[arg(long = "tracker", help = "Only rows about this tracker")]
        tracker: Option<String>,
    },

    /// Add an employment entry to a tracker, or edit one
    Add {
        /// Tracker (applicant) name; created on first use
        tracker: String,

        #[arg(long = "employer", help = "Employer name")]
        employer: Option<String>,

        #[arg(long = "title", help = "Job title / position held")]
        title: Option<String>,

        #[arg(long = "from", help = "Start date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "End date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(
            long = "explain",
            help = "Explanation for the gap between this entry and the next more recent one"
        )]
        explain: Option<String>,

        #[arg(long = "reason", help = "Reason for leaving")]
        reason: Option<String>,

        /// Employer was subject to the FMCSRs (`--fmcsr` alone means true)
        #[arg(
            long = "fmcsr",
            value_name = "BOOL",
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        fmcsr: Option<bool>,

        /// Position was a DOT safety-sensitive function (`--safety-sensitive` alone means true)
        #[arg(
            long = "safety-sensitive",
            value_name = "BOOL",
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        safety_sensitive: Option<bool>,

        /// Insert at this timeline index (0 = current employer); default: append as oldest
        #[arg(long = "at", conflicts_with = "edit")]
        at: Option<usize>,

        /// Entry index to edit (used with --edit)
        #[arg(long = "entry", help = "Entry index to edit (used with --edit)")]
        entry: Option<usize>,

        /// Enable edit mode (requires --entry)
        #[arg(
            long = "edit",
            requires = "entry",
            help = "Edit an existing entry instead of adding a new one"
        )]
        edit: bool,
    },

    /// Delete an employment entry, or a whole tracker
    Del {
        tracker: String,

        #[arg(long = "entry", help = "Entry index to delete; omit to delete the tracker")]
        entry: Option<usize>,
    },

    /// List trackers, or show the timeline of one tracker
    List {
        tracker: Option<String>,

        #[arg(long = "details", help = "Show job title, reason for leaving and gap explanations")]
        details: bool,
    },

    /// Validate an employment history (exit code 1 on blocking issues)
    Check {
        /// Tracker to validate
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        tracker: Option<String>,

        /// Validate a form export instead of a stored tracker
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, value_enum, requires = "file")]
        format: Option<ImportFormat>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Terminate or restore a tracker
    #[command(group(ArgGroup::new("status").required(true).args(["terminate", "restore"])))]
    Tracker {
        tracker: String,

        #[arg(long)]
        terminate: bool,

        #[arg(long)]
        restore: bool,
    },

    /// Import employment entries from a JSON or CSV form export
    Import {
        tracker: String,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Input format (default: from the file extension)
        #[arg(long, value_enum)]
        format: Option<ImportFormat>,

        /// Replace existing entries instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup (zip on Windows, tar.gz elsewhere)")]
        compress: bool,
    },

    /// Export timeline reports
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Only export this tracker")]
        tracker: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
