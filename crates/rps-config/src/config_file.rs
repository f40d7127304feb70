use std::path::{Path, PathBuf};

pub(crate) const CONFIG_FILE: &str = "rps.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for rps.toml in:
/// 1. Current working directory
/// 2. Platform config directory (e.g. ~/.config/redux-rps/rps.toml)
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let global = crate::paths::config_dir()
        .ok()
        .map(|dir| dir.join(CONFIG_FILE));

    first_readable(&[Some(PathBuf::from(CONFIG_FILE)), global])
}

fn first_readable(candidates: &[Option<PathBuf>]) -> Option<String> {
    candidates.iter().flatten().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
