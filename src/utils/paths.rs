use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".agro_core";
const CONFIG_FILE: &str = "config.json";
const CAMPANAS_FILE: &str = "campanas.json";
const SNAPSHOT_FILE: &str = "snapshot.json";

/// Returns the application data directory, defaulting to `~/.agro_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("AGRO_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Where the user-defined campaigns are kept.
pub fn campanas_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CAMPANAS_FILE)
}

/// Default location of the exported data snapshot.
pub fn snapshot_file_in(base: &std::path::Path) -> PathBuf {
    base.join(SNAPSHOT_FILE)
}
