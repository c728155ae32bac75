use std::fs;
use std::path::Path;

use wtfd_core::config::{WtfdConfig, CONFIG_DIR};
use wtfd_parsers::walker::IGNORE_FILENAME;

/// Run `wtfd init`: write a default `.wtfd/wtfd.json` and `.wtfdignore`.
pub fn run(verbose: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("wtfd init: failed to get current directory: {}", e);
            return 2;
        }
    };
    init_at(&cwd, verbose)
}

pub(crate) fn init_at(root: &Path, verbose: bool) -> i32 {
    let config_path = WtfdConfig::path_for(root);
    if config_path.exists() {
        eprintln!("wtfd init: {} already exists", config_path.display());
        return 2;
    }

    if let Err(e) = fs::create_dir_all(root.join(CONFIG_DIR)) {
        eprintln!("wtfd init: failed to create {}: {}", CONFIG_DIR, e);
        return 2;
    }

    let json = match serde_json::to_string_pretty(&WtfdConfig::default()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("wtfd init: failed to serialize config: {}", e);
            return 2;
        }
    };
    if let Err(e) = fs::write(&config_path, json + "\n") {
        eprintln!("wtfd init: failed to write config: {}", e);
        return 2;
    }

    create_ignore_file(root, verbose);

    if verbose {
        eprintln!("wtfd init: initialized in {}", root.display());
    }
    0
}

fn create_ignore_file(root: &Path, verbose: bool) {
    let ignore_path = root.join(IGNORE_FILENAME);
    if ignore_path.exists() {
        return;
    }

    let default_patterns = "\
__pycache__/
.venv/
venv/
build/
dist/
node_modules/
";

    match fs::write(&ignore_path, default_patterns) {
        Ok(_) => {
            if verbose {
                eprintln!("wtfd init: created {}", IGNORE_FILENAME);
            }
        }
        Err(e) => {
            eprintln!("wtfd init: warning: failed to create {}: {}", IGNORE_FILENAME, e);
        }
    }
}
