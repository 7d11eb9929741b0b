//! Filesystem utilities.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Check whether a path names a YAML file (`.yml` or `.yaml`).
pub fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml" | "yaml")
    )
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Replace a file's contents atomically.
///
/// The contents go to a temporary file in the same directory, which is then
/// renamed over `path`. An existing file keeps its permissions.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write file: {}", path.display()))?;

    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .with_context(|| format!("failed to copy permissions of {}", path.display()))?;
    }

    tmp.persist(path)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_yaml() {
        assert!(is_yaml(Path::new("ci.yml")));
        assert!(is_yaml(Path::new(".github/workflows/release.yaml")));
        assert!(!is_yaml(Path::new("README.md")));
        assert!(!is_yaml(Path::new("yml")));
        assert!(!is_yaml(Path::new("ci.YML")));
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ci.yml");
        fs::write(&path, "old\n").unwrap();

        write_atomic(&path, "new\r\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\r\n");
        // No temporary files left behind
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_creates_new_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.yml");

        write_atomic(&path, "content").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "content");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ci.yml");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_to_string(&tmp.path().join("missing.yml")).unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }
}
