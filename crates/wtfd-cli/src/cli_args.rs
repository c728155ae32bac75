use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "wtfd", version, about = "Forces developers to write docstrings")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log progress to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Report classes and functions without docstrings
    Check {
        /// Dotted module name to scan instead of the whole project (repeatable)
        #[arg(long = "app", value_name = "MODULE", env = "WTFD_APPS", value_delimiter = ',')]
        apps: Vec<String>,
        /// Exit non-zero when any docstring is missing
        #[arg(long, env = "WTFD_STRICT")]
        strict: bool,
        /// Additional declaration name to skip, case-insensitive (repeatable)
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,
        /// Project root
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// Abort on the first file that is not valid Python
        #[arg(long)]
        fail_on_parse_error: bool,
        /// Leave `__init__.py` and other dunder-named files out of the scan
        #[arg(long)]
        skip_dunder_files: bool,
    },

    /// Write a default .wtfd/wtfd.json
    Init,

    /// Print a shell completion script
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
