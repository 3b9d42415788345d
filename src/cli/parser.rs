use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rWorktime
/// CLI application to turn paired clock-in/clock-out timesheets into reports
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute per-employee working hours from a clock-in/clock-out timesheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-folder setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Without a subcommand the timesheet in the current folder is processed
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Working folder: searched for the timesheet, receives the archive
    #[arg(long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: String,

    /// Process this file instead of searching by pattern
    #[arg(long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Do not copy the original file into the archive
    #[arg(long = "no-copy")]
    pub no_copy: bool,

    /// Also print the report to stdout
    #[arg(long = "print")]
    pub print: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            file: None,
            no_copy: false,
            print: false,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a timesheet: compute hours, write report and log into the archive
    Run(RunArgs),

    /// Show how individual cell values are interpreted as times of day
    Parse {
        /// Raw cell values (e.g. 09:00, 1705, 1705.0, 8,5)
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        #[arg(long = "json", help = "Print the results as JSON")]
        json: bool,
    },

    /// Write a configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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
}
