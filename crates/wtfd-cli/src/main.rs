//! wtfd CLI: forces developers to write docstrings.
//!
//! This binary provides the `wtfd` command: `check` scans a Python project for
//! classes and functions without docstrings. See `wtfd --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn wtfd_output::OutputFormatter> = if cli.json {
        Box::new(wtfd_output::json::JsonFormatter)
    } else {
        Box::new(wtfd_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            apps,
            strict,
            exclude,
            path,
            fail_on_parse_error,
            skip_dunder_files,
        } => commands::check::run(
            &*formatter,
            cli.verbose,
            commands::check::CheckOptions {
                apps,
                strict,
                exclude,
                path,
                fail_on_parse_error,
                skip_dunder_files,
            },
        ),
        Commands::Init => commands::init::run(cli.verbose),
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    std::process::exit(exit_code);
}
