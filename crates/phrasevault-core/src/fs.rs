//! Filesystem utilities for atomic writes.

use std::fs;
use std::io;
use std::path::Path;

/// Move the freshly written `temp_path` over `destination` in one step.
///
/// Windows refuses to rename onto an existing file, so when the first
/// rename fails the destination is unlinked and the rename tried once
/// more. A second failure removes the temp file so no `.tmp` litter is
/// left next to the store.
///
/// # Errors
///
/// Returns an error when both rename attempts fail.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let Err(first) = fs::rename(temp_path, destination) else {
        return Ok(());
    };

    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination).map_err(|second| {
        let _ = fs::remove_file(temp_path);
        io::Error::new(
            second.kind(),
            format!(
                "could not move {} over {}: {} (first attempt: {})",
                temp_path.display(),
                destination.display(),
                second,
                first
            ),
        )
    })
}
