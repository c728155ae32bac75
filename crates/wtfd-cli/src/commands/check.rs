use std::path::PathBuf;

use wtfd_core::config::{ParseErrorPolicy, ScanConfiguration, WtfdConfig};
use wtfd_enforce::engine::ScanEngine;
use wtfd_enforce::report::Outcome;
use wtfd_output::OutputFormatter;
use wtfd_parsers::resolver::SearchPathResolver;

/// Flags of `wtfd check`, layered over `.wtfd/wtfd.json`.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub apps: Vec<String>,
    pub strict: bool,
    pub exclude: Vec<String>,
    pub path: PathBuf,
    pub fail_on_parse_error: bool,
    pub skip_dunder_files: bool,
}

/// Run `wtfd check`: scan the project and report missing docstrings.
///
/// Exit codes: 0 clean or permissive, 1 strict-mode violations, 2 internal error.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, options: CheckOptions) -> i32 {
    let root = options.path.clone();
    if !root.is_dir() {
        eprintln!("wtfd check: {} is not a directory", root.display());
        return 2;
    }

    let config = build_configuration(&WtfdConfig::load(&root), options);
    if verbose {
        eprintln!(
            "wtfd check: root={} apps={:?} strict={}",
            config.project_root().display(),
            config.module_roots(),
            config.strict_mode()
        );
    }

    let resolver = SearchPathResolver::from_env(&root);
    let engine = ScanEngine::new(config, Box::new(resolver)).with_verbose(verbose);
    let report = match engine.run() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("wtfd check: {}", e);
            return 2;
        }
    };

    let output = formatter.format_report(&report);
    if !output.is_empty() {
        println!("{}", output.trim_end_matches('\n'));
    }

    match report.finalize() {
        Ok(Outcome::Clean) => {
            if verbose {
                eprintln!("wtfd check: all docstrings present");
            }
            0
        }
        Ok(Outcome::Reported(_)) => 0,
        Err(violation) => {
            eprintln!("wtfd: error: {} missing docstring(s)", violation.count);
            1
        }
    }
}

/// CLI flags win over the config file; boolean flags can only switch a setting on.
pub(crate) fn build_configuration(file: &WtfdConfig, options: CheckOptions) -> ScanConfiguration {
    let mut config = ScanConfiguration::from_config(options.path, file);
    if !options.apps.is_empty() {
        config = config.with_module_roots(options.apps);
    }
    if options.strict {
        config = config.with_strict_mode(true);
    }
    for name in &options.exclude {
        config = config.exclude(name);
    }
    if options.fail_on_parse_error {
        config = config.with_parse_errors(ParseErrorPolicy::Fail);
    }
    if options.skip_dunder_files {
        config = config.with_skip_dunder_files(true);
    }
    config
}
