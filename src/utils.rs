//! Utility functions for path manipulation.

use std::path::PathBuf;

/// Joins a directory path with a file or subdirectory name.
///
/// Returns a platform-independent path string, handling the separator for
/// the current operating system.
///
/// # Panics
///
/// Panics if the resulting path contains invalid UTF-8 characters.
///
/// # Examples
///
/// ```
/// let path = get_path("/var/data", "store.json");
/// assert_eq!(path, "/var/data/store.json");
/// ```
pub fn get_path(dir_path: &str, subdir_path: &str) -> String {
    let path_buf: PathBuf = [dir_path, subdir_path].iter().collect();
    path_buf.to_str().unwrap().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_path_simple() {
        let path = get_path("/var/data", "store.json");
        #[cfg(unix)]
        assert_eq!(path, "/var/data/store.json");
        #[cfg(windows)]
        assert_eq!(path, "\\var\\data\\store.json");
    }

    #[test]
    fn test_get_path_relative() {
        let path = get_path(".", "data");
        #[cfg(unix)]
        assert_eq!(path, "./data");
        #[cfg(windows)]
        assert_eq!(path, ".\\data");
    }
}
