//! Blacklist management module
//!
//! Holds the list of known-weak passwords. A small built-in list is always
//! available; it can be replaced once per process by a list read from disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Environment variable naming the blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_METER_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

/// Used until a list is loaded with [`init_blacklist`].
pub const BUILTIN_BLACKLIST: [&str; 5] = ["password123", "123456", "qwerty", "letmein", "admin"];

static LOADED_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Loads the blacklist from the file named by [`get_blacklist_path`].
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or is empty.
/// The built-in list stays active in that case.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(get_blacklist_path())
}

/// Loads the blacklist from a specific file, one password per line.
///
/// Entries are trimmed and lower-cased; blank lines are skipped. Once a list
/// is loaded, further calls keep it and return its size.
///
/// # Example
///
/// ```rust,no_run
/// let count = pwd_meter::init_blacklist_from_path("/etc/myapp/blacklist.txt")?;
/// println!("{count} entries loaded");
/// # Ok::<(), pwd_meter::BlacklistError>(())
/// ```
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = LOADED_PASSWORDS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = LOADED_PASSWORDS.write().unwrap_or_else(PoisonError::into_inner);
        // first loaded list wins
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.len());
        }
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {}", count, path.display());

    Ok(count)
}

/// Returns a snapshot of the active blacklist.
pub fn get_blacklist() -> HashSet<String> {
    let guard = LOADED_PASSWORDS.read().unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(set) => set.clone(),
        None => BUILTIN_BLACKLIST.iter().map(|s| s.to_string()).collect(),
    }
}

/// Checks if a password is in the active blacklist.
///
/// The comparison is an exact match on the lower-cased password, never a
/// substring match.
pub fn is_blacklisted(password: &str) -> bool {
    let candidate = password.to_lowercase();
    let guard = LOADED_PASSWORDS.read().unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(set) => set.contains(&candidate),
        None => BUILTIN_BLACKLIST.contains(&candidate.as_str()),
    }
}

/// Drops any loaded list so the built-in one is active again.
#[cfg(test)]
pub(crate) fn reset_blacklist_for_testing() {
    let mut guard = LOADED_PASSWORDS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: env mutation only happens in #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: env mutation only happens in #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    fn tempfile_with(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_default() {
        remove_env(BLACKLIST_PATH_ENV);
        assert_eq!(get_blacklist_path(), PathBuf::from("./assets/blacklist.txt"));
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_from_env() {
        set_env(BLACKLIST_PATH_ENV, "/custom/path/blacklist.txt");
        assert_eq!(get_blacklist_path(), PathBuf::from("/custom/path/blacklist.txt"));
        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_builtin_list_is_active_by_default() {
        reset_blacklist_for_testing();
        for entry in BUILTIN_BLACKLIST {
            assert!(is_blacklisted(entry), "{entry} should be blacklisted");
        }
        assert!(is_blacklisted("LetMeIn"));
        assert!(is_blacklisted("QWERTY"));
        assert_eq!(get_blacklist().len(), 5);
    }

    #[test]
    #[serial]
    fn test_builtin_list_is_exact_match() {
        reset_blacklist_for_testing();
        assert!(!is_blacklisted("password"));
        assert!(!is_blacklisted("password123!"));
        assert!(!is_blacklisted("xadmin"));
        assert!(!is_blacklisted(""));
    }

    #[test]
    #[serial]
    fn test_init_blacklist_file_not_found() {
        reset_blacklist_for_testing();
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        let result = init_blacklist();
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));
        // failed load keeps the built-in list
        assert!(is_blacklisted("admin"));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_empty_file() {
        reset_blacklist_for_testing();
        let temp_file = tempfile_with(&["", "   "]);

        let result = init_blacklist_from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_init_blacklist_replaces_builtin() {
        reset_blacklist_for_testing();
        let temp_file = tempfile_with(&["  Hunter2 ", "", "trustno1"]);
        set_env(BLACKLIST_PATH_ENV, temp_file.path().to_str().unwrap());

        assert_eq!(init_blacklist().unwrap(), 2);
        assert!(is_blacklisted("hunter2"));
        assert!(is_blacklisted("TRUSTNO1"));
        assert!(!is_blacklisted("admin"));

        remove_env(BLACKLIST_PATH_ENV);
        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_init_blacklist_is_idempotent() {
        reset_blacklist_for_testing();
        let first = tempfile_with(&["one", "two"]);
        let second = tempfile_with(&["three"]);

        assert_eq!(init_blacklist_from_path(first.path()).unwrap(), 2);
        assert_eq!(init_blacklist_from_path(second.path()).unwrap(), 2);
        assert!(!is_blacklisted("three"));

        reset_blacklist_for_testing();
    }
}
