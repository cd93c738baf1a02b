//! Environment variable handling and `.env` loading.

use std::env;
use std::path::Path;

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// The stem hint pool: the values of `HINT1` and `HINT2`, skipping any that
/// are unset.
pub fn stem_hints() -> Vec<String> {
    ["HINT1", "HINT2"].iter().filter_map(|n| get_var(n)).collect()
}

/// Load environment variables from `.env` in the working directory.
pub fn load_dotenv() -> std::io::Result<()> {
    load_dotenv_from(Path::new(".env"))
}

/// Load `KEY=value` lines from a dotenv file. Comments and blank lines are
/// skipped, surrounding quotes are removed, and variables already present in
/// the environment are left untouched.
pub fn load_dotenv_from(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);

            if env::var(key).is_err() {
                env::set_var(key, value);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_dotenv_parses_and_respects_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "# comment\nPEPPERBOX_TEST_A=plain\nPEPPERBOX_TEST_B=\"quoted\"\nPEPPERBOX_TEST_C=ignored\n",
        )
        .unwrap();

        env::set_var("PEPPERBOX_TEST_C", "already-set");
        load_dotenv_from(&path).unwrap();

        assert_eq!(env::var("PEPPERBOX_TEST_A").unwrap(), "plain");
        assert_eq!(env::var("PEPPERBOX_TEST_B").unwrap(), "quoted");
        assert_eq!(env::var("PEPPERBOX_TEST_C").unwrap(), "already-set");
    }

    #[test]
    fn test_load_dotenv_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        assert!(load_dotenv_from(&dir.path().join("absent.env")).is_ok());
    }

    #[test]
    fn test_get_var_filters_empty() {
        env::set_var("PEPPERBOX_TEST_EMPTY", "");
        assert_eq!(get_var("PEPPERBOX_TEST_EMPTY"), None);
    }
}
