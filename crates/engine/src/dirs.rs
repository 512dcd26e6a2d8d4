//! XDG directory defaults
//!
//! The default hook search path follows the XDG Base Directory
//! specification via the `xdg` crate: `$XDG_DATA_HOME/grapnel/hooks`,
//! normally `~/.local/share/grapnel/hooks`. Callers prepend their own
//! overrides so earlier paths take precedence.

use std::path::PathBuf;
use xdg::BaseDirectories;

/// Get the grapnel data directory
///
/// Returns `$XDG_DATA_HOME/grapnel` or `~/.local/share/grapnel`
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    // xdg 3.0: with_prefix returns BaseDirectories, get_data_home returns Option<PathBuf>
    BaseDirectories::with_prefix("grapnel").get_data_home()
}

/// Default search path for candidate hook scripts
///
/// Returns `$XDG_DATA_HOME/grapnel/hooks` or `~/.local/share/grapnel/hooks`
#[must_use]
pub fn default_search_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("hooks"))
}

/// Build the ordered search-path list: caller overrides first, then the default
#[must_use]
pub fn search_paths(overrides: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = overrides.to_vec();
    if let Some(default) = default_search_path()
        && !paths.contains(&default)
    {
        paths.push(default);
    }
    paths
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_data_dir_contains_prefix() {
        let dir = data_dir().unwrap();
        assert!(dir.is_absolute());
        assert!(dir.to_string_lossy().contains("grapnel"));
    }

    #[test]
    fn test_default_search_path_is_under_data_dir() {
        let data = data_dir().unwrap();
        let search = default_search_path().unwrap();
        assert!(search.starts_with(&data));
        assert_eq!(search.file_name().and_then(|n| n.to_str()), Some("hooks"));
    }

    #[test]
    fn test_search_paths_put_overrides_first() {
        let overrides = vec![PathBuf::from("/custom/hooks")];
        let paths = search_paths(&overrides);
        assert_eq!(paths[0], PathBuf::from("/custom/hooks"));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_search_paths_deduplicate_default() {
        let default = default_search_path().unwrap();
        let paths = search_paths(std::slice::from_ref(&default));
        assert_eq!(paths, vec![default]);
    }

    #[test]
    fn test_search_paths_without_overrides() {
        assert_eq!(
            search_paths(&[]),
            vec![default_search_path().unwrap()]
        );
    }
}
