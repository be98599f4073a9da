//! Mirroring of the static asset directory

use crate::{Result, SiteError};
use std::fs;
use std::path::Path;

/// Replace `dest` with a copy of `src`
///
/// `dest` is removed first when it exists, then every file and directory
/// under `src` is recreated below it. Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(SiteError::DirectoryNotFound(src.to_path_buf()));
    }

    if dest.exists() {
        log::debug!("removing {}", dest.display());
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    copy_dir_recursive(src, dest)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        if path.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_dir_recursive(&path, &target)?;
        } else if path.is_file() {
            log::debug!("copying {} -> {}", path.display(), target.display());
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
