//! Filesystem operations used by the pod installer

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
///
/// A missing file is reported as [`Error::NotFound`].
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Fail with [`Error::NotFound`] unless `path` exists as a file.
pub fn require_file(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    match fs::metadata(&native_path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(Error::NotFound { path: native_path }),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Create a directory and all of its missing parents.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Create or replace a symbolic link at `link` pointing to `target`.
///
/// Mirrors `ln -sf`: missing parent directories are created and anything
/// already at `link` (a previous link or a plain file) is removed first.
/// A real directory at `link` is left alone and the call fails.
pub fn symlink_force(target: &NormalizedPath, link: &NormalizedPath) -> Result<()> {
    let link_native = link.to_native();
    let target_native = target.to_native();

    if let Some(parent) = link.parent() {
        ensure_dir(&parent)?;
    }

    match fs::symlink_metadata(&link_native) {
        Ok(meta) if meta.file_type().is_symlink() || meta.is_file() => {
            tracing::debug!(link = %link, "Replacing existing link");
            remove_link(&link_native)?;
        }
        Ok(_) => {
            return Err(Error::Symlink {
                link: link_native,
                target: target_native,
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "a directory already exists at the link path",
                ),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(&link_native, e)),
    }

    create_symlink(&target_native, &link_native).map_err(|source| Error::Symlink {
        link: link_native.clone(),
        target: target_native.clone(),
        source,
    })
}

fn remove_link(path: &std::path::Path) -> Result<()> {
    // Windows directory symlinks must be removed with remove_dir.
    #[cfg(windows)]
    {
        if fs::remove_file(path).is_ok() {
            return Ok(());
        }
        fs::remove_dir(path).map_err(|e| Error::io(path, e))
    }
    #[cfg(not(windows))]
    {
        fs::remove_file(path).map_err(|e| Error::io(path, e))
    }
}

#[cfg(unix)]
fn create_symlink(target: &std::path::Path, link: &std::path::Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &std::path::Path, link: &std::path::Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a Podfile fragment is never observed
/// half-written.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
