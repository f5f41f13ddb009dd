//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox `/host` is the folder Zellij was started from, usually
//! the user's home directory.

use std::path::PathBuf;

/// File name of the DAO cache inside the data directory.
pub const DATA_FILE_NAME: &str = "daos.json";

/// Returns the plugin data directory, `/host/.local/share/zellij/daospaces`.
///
/// # Examples
///
/// ```
/// use daospaces::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/daospaces");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("daospaces")
}

/// Location of the DAO cache: `override_path` (tilde-expanded) or the default
/// file in the data directory.
#[must_use]
pub fn default_data_file(override_path: Option<&str>) -> PathBuf {
    override_path
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map_or_else(|| get_data_dir().join(DATA_FILE_NAME), |p| PathBuf::from(expand_tilde(p)))
}

/// Rewrites `~` paths to their `/host` location in the sandbox.
///
/// # Examples
///
/// ```
/// use daospaces::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/spaces.json"), "/host/spaces.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_defaults_to_data_dir() {
        assert_eq!(
            default_data_file(None),
            PathBuf::from("/host/.local/share/zellij/daospaces/daos.json")
        );
        assert_eq!(default_data_file(Some("  ")), default_data_file(None));
    }

    #[test]
    fn data_file_override_is_tilde_expanded() {
        assert_eq!(
            default_data_file(Some("~/cache/daos.json")),
            PathBuf::from("/host/cache/daos.json")
        );
    }
}
