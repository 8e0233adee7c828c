//! Output staging.
//!
//! The renderer never writes the output path directly. It renders into a
//! hidden sibling file which is renamed over the output only after a
//! successful run, so a failed or killed render leaves the previous artifact
//! (or nothing) in place.

use crate::executor::EngineError;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use tempfile::Builder;

/// Runs `render` against a staging path next to `output` and publishes the
/// result with a rename when it returns `Ok`.
pub fn write_artifact<F>(output: &Path, render: F) -> Result<(), EngineError>
where
    F: FnOnce(&Path) -> Result<(), EngineError>,
{
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    // Keep the extension; the renderer picks the format from it.
    let suffix = output
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let staging = Builder::new()
        .prefix(&format!(".{name}."))
        .suffix(&suffix)
        .tempfile_in(dir)?
        .into_temp_path();
    // Reserve the name only; the renderer creates the file itself.
    fs::remove_file(&staging)?;
    debug!("Staging {} at {}", output.display(), staging.display());

    render(&staging)?;

    if !staging.exists() {
        warn!(
            "Renderer reported success without writing {}; {} left unchanged",
            staging.display(),
            output.display()
        );
        return Ok(());
    }
    staging.persist(output).map_err(|e| EngineError::Io(e.error))?;
    Ok(())
}
