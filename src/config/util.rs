//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Returns the first `start/.../config_name` that exists. An absolute
/// `config_name` is returned as-is when it is a regular file.
///
/// # Example
/// ```text
/// /home/user/site/src/pages/  ← start
/// /home/user/site/site.toml   ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src/pages");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, dir.path().join("site.toml"));
    }

    #[test]
    fn test_nearest_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();
        fs::write(nested.join("site.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, nested.join("site.toml"));
    }

    #[test]
    fn test_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_absolute_directory_is_not_a_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::create_dir_all(&path).unwrap();
        assert_eq!(find_config_file(dir.path(), &path), None);
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("lucas-site-missing.toml")).unwrap();
        let found = find_config_file(dir.path(), Path::new("lucas-site-missing.toml"));
        assert_ne!(found, Some(dir.path().join("lucas-site-missing.toml")));
    }
}
