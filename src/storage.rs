//! File input and output for the command-line front-end.

use anyhow::{Context, Result};
use getrandom::fill;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads an entire input file into memory.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Writes output to a file using atomic replace.
///
/// The data lands in a temporary file with a random name first, is synced,
/// and then atomically replaces the target. A crash mid-write leaves either
/// the old file or the new one, never a partial write. Parent directories
/// are created if missing.
pub fn write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = random_tmp_path(path)?;

    let mut tmp_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .context("failed to create temporary file")?;

    tmp_file.write_all(data)?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    if let Err(e) = atomic_replace(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    // fsync the directory so the rename itself is persisted
    if let Some(parent) = path.parent() {
        let dir = File::open(parent)?;
        dir.sync_all()?;
    }

    Ok(())
}

/// Builds a unique sibling path for the temporary file.
///
/// Format: `filename.tmp.<randomhex>`, with 64 bits of entropy in the suffix.
fn random_tmp_path(path: &Path) -> Result<PathBuf> {
    let mut buf = [0u8; 8];
    fill(&mut buf).context("OS random generator unavailable")?;

    let rand_string = buf.iter().map(|b| format!("{:02x}", b)).collect::<String>();

    let file_name = path
        .file_name()
        .context("output path has no file name")?
        .to_string_lossy();

    Ok(path.with_file_name(format!("{}.tmp.{}", file_name, rand_string)))
}

/// Atomically replaces the target file with the temporary file.
///
/// Uses the Windows `ReplaceFileW` API with `REPLACEFILE_WRITE_THROUGH` so
/// the swap is atomic and persisted.
#[cfg(target_os = "windows")]
fn atomic_replace(tmp_path: &Path, target: &Path) -> Result<()> {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use windows_sys::Win32::Storage::FileSystem::{REPLACEFILE_WRITE_THROUGH, ReplaceFileW};

    // ReplaceFileW fails if the target does not exist yet
    if !target.exists() {
        fs::rename(tmp_path, target)?;
        return Ok(());
    }

    fn to_wide(s: &OsStr) -> Vec<u16> {
        s.encode_wide().chain(std::iter::once(0)).collect()
    }

    let target_w = to_wide(target.as_os_str());
    let tmp_w = to_wide(tmp_path.as_os_str());

    // SAFETY:
    // - Strings are valid UTF-16 and null-terminated
    // - Pointers remain valid during the call
    // - Windows does not retain the pointers after return
    let result = unsafe {
        ReplaceFileW(
            target_w.as_ptr(),
            tmp_w.as_ptr(),
            std::ptr::null(),
            REPLACEFILE_WRITE_THROUGH,
            std::ptr::null(),
            std::ptr::null(),
        )
    };

    if result == 0 {
        let err = std::io::Error::last_os_error();
        return Err(err).context("atomic replace failed");
    }

    Ok(())
}

/// Atomically replaces the target file with the temporary file.
///
/// On Unix, `rename()` is atomic when both paths are on the same filesystem.
#[cfg(not(target_os = "windows"))]
fn atomic_replace(tmp_path: &Path, target: &Path) -> Result<()> {
    fs::rename(tmp_path, target)?;
    Ok(())
}
