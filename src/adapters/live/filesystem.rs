//! Live filesystem adapter using `std::fs`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
///
/// Overwrites go through a temporary sibling file followed by a rename,
/// so an interrupted or failed write leaves the target untouched.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let tmp = tmp_sibling(path);
        if let Err(err) = std::fs::write(&tmp, contents) {
            let _ = std::fs::remove_file(&tmp);
            return Err(err.into());
        }
        if let Err(err) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// The temporary file must live on the same filesystem as the target so
/// the final rename stays atomic.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_target(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("store").join("tasks.json")
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let path = temp_target("tally_livefs_parents");
        let fs = LiveFileSystem;

        fs.write(&path, "[]").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "[]");

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn overwrite_replaces_content_and_leaves_no_temp_file() {
        let path = temp_target("tally_livefs_overwrite");
        let fs = LiveFileSystem;

        fs.write(&path, "old").unwrap();
        fs.write(&path, "new").unwrap();

        assert_eq!(fs.read_to_string(&path).unwrap(), "new");
        assert!(!tmp_sibling(&path).exists());

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }
}
