use std::fs;
use std::path::Path;

use conform_core::config::ConformConfig;

/// Run `conform init`: create the conform directory and write a default config.
pub fn run(verbose: bool, conform_dir: &Path) -> i32 {
    if conform_dir.exists() {
        eprintln!(
            "conform init: {} already exists",
            conform_dir.display()
        );
        return 2;
    }

    if let Err(e) = fs::create_dir_all(conform_dir) {
        eprintln!(
            "conform init: failed to create {}: {}",
            conform_dir.display(),
            e
        );
        return 2;
    }

    let config = ConformConfig {
        version: env!("CARGO_PKG_VERSION").to_string(),
        ..ConformConfig::default()
    };
    if let Err(e) = config.save(conform_dir) {
        eprintln!("conform init: failed to write config: {}", e);
        return 2;
    }

    if verbose {
        eprintln!("conform init: initialized in {}", conform_dir.display());
    }
    0
}
