//! Filesystem operations for pipeline steps
//!
//! Writes are flushed before a step reports completion; later steps depend
//! on files written by earlier ones.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use walkdir::WalkDir;

/// A copy/read/write/remove failure with the path it happened on
#[derive(Debug, Error)]
#[error("failed to {op} {path}: {source}")]
pub struct FsError {
    pub op: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FsError {
    fn new(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Recursively copy `src` into `dst`, overwriting existing files. Files whose
/// name ends in `exclude_suffix` are skipped; they are rendered as templates
/// instead of copied raw. Returns the number of files copied.
pub async fn copy_dir(
    src: &Path,
    dst: &Path,
    exclude_suffix: Option<&str>,
) -> Result<usize, FsError> {
    let mut copied = 0;

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            FsError::new("walk", path, e.into())
        })?;

        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .await
                .map_err(|e| FsError::new("create", &target, e))?;
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        if let Some(suffix) = exclude_suffix {
            let name = entry.file_name().to_string_lossy();
            if name.ends_with(suffix) {
                continue;
            }
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| FsError::new("create", parent.to_path_buf(), e))?;
        }
        fs::copy(entry.path(), &target)
            .await
            .map_err(|e| FsError::new("copy", &target, e))?;
        copied += 1;
    }

    Ok(copied)
}

/// Append one line to a file, creating it if absent. Duplicate appends on
/// repeated runs are an accepted limitation, not guarded against.
pub async fn append_line(path: &Path, line: &str) -> Result<(), FsError> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| FsError::new("append to", path.to_path_buf(), e))?;

    file.write_all(format!("{}\n", line).as_bytes())
        .await
        .map_err(|e| FsError::new("append to", path.to_path_buf(), e))?;
    file.flush()
        .await
        .map_err(|e| FsError::new("append to", path.to_path_buf(), e))
}

/// Remove a file or directory tree, tolerating a path that does not exist
pub async fn remove_existing(path: &Path) -> Result<(), FsError> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FsError::new("remove", path.to_path_buf(), e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };
    result.map_err(|e| FsError::new("remove", path.to_path_buf(), e))
}

/// Write a file, creating parent directories as needed
pub async fn write_file(path: &Path, contents: &str) -> Result<(), FsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| FsError::new("create", parent.to_path_buf(), e))?;
    }
    fs::write(path, contents)
        .await
        .map_err(|e| FsError::new("write", path.to_path_buf(), e))
}

pub async fn read_to_string(path: &Path) -> Result<String, FsError> {
    fs::read_to_string(path)
        .await
        .map_err(|e| FsError::new("read", path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copy_dir_excludes_template_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("skeleton");
        std::fs::create_dir_all(src.join("app/views")).unwrap();
        std::fs::write(src.join("app/api.js"), "api").unwrap();
        std::fs::write(src.join("app/main.js.tmpl"), "template").unwrap();

        let dst = dir.path().join("out");
        let copied = copy_dir(&src, &dst, Some(".tmpl")).await.unwrap();

        assert_eq!(copied, 1);
        assert!(dst.join("app/api.js").exists());
        assert!(!dst.join("app/main.js.tmpl").exists());
        // empty directories are materialized too
        assert!(dst.join("app/views").is_dir());
    }

    #[tokio::test]
    async fn test_copy_dir_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("skeleton");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("config.js"), "ours").unwrap();

        let dst = dir.path().join("out");
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(dst.join("config.js"), "theirs").unwrap();

        copy_dir(&src, &dst, None).await.unwrap();
        assert_eq!(std::fs::read_to_string(dst.join("config.js")).unwrap(), "ours");
    }

    #[tokio::test]
    async fn test_append_line_duplicates_on_repeat() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".gitignore");

        append_line(&path, ".env").await.unwrap();
        append_line(&path, ".env").await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, ".env\n.env\n");
    }

    #[tokio::test]
    async fn test_remove_existing_tolerates_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_existing(&dir.path().join("ghost")).await.is_ok());

        let tree = dir.path().join("tree");
        std::fs::create_dir_all(tree.join("nested")).unwrap();
        remove_existing(&tree).await.unwrap();
        assert!(!tree.exists());
    }
}
