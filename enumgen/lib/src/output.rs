//! Writing generated headers to disk.
//!
//! ## Safety Guarantees
//!
//! - **Render before write**: the header is fully rendered in memory before
//!   the output path is touched.
//! - **No partial files**: content goes to a sibling temp file which is then
//!   renamed over the target; the temp file is removed on any failure.
//! - **No stale files**: if rendering fails, any existing file at the output
//!   path is deleted so downstream builds never pick up an outdated header.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::codegen::render;
use crate::errors::{EnumGenError, GenerationError};
use crate::schema::{EnumDefinition, load_definition};

/// Returns the temp file used while writing `path` (`side.h` -> `side.h.tmp`).
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Removes `path`, treating "already gone" as success.
fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Deletes whatever is at `path` after rendering failed.
fn discard_output(path: &Path) {
    if let Err(e) = remove_if_exists(path) {
        warn!(path = %path.display(), error = %e, "failed to remove stale output");
    }
}

/// Writes `content` to `path` via temp file + rename, creating parent
/// directories as needed.
///
/// ## Errors
///
/// Returns [`EnumGenError::Write`] if the parent directory cannot be created
/// or the temp file cannot be written or renamed.
pub fn write_output(path: &Path, content: &str) -> Result<(), EnumGenError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| EnumGenError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = fs::write(&temp_path, content)
        .map_err(|source| EnumGenError::Write {
            path: temp_path.clone(),
            source,
        })
        .and_then(|()| {
            fs::rename(&temp_path, path).map_err(|source| EnumGenError::Write {
                path: path.to_path_buf(),
                source,
            })
        });

    if result.is_err()
        && let Err(e) = remove_if_exists(&temp_path)
    {
        warn!(path = %temp_path.display(), error = %e, "failed to remove temp file");
    }

    result
}

/// Produces content with `produce` and writes it to `path`.
///
/// If `produce` fails, nothing is written and any existing file at `path`
/// is removed before the error is returned.
pub fn write_with<F>(path: &Path, produce: F) -> Result<String, EnumGenError>
where
    F: FnOnce() -> Result<String, GenerationError>,
{
    let content = match produce() {
        Ok(content) => content,
        Err(err) => {
            discard_output(path);
            return Err(err.into());
        }
    };

    write_output(path, &content)?;
    Ok(content)
}

/// Renders `def` and writes the header to `path`.
///
/// Returns the rendered header.
#[instrument(skip(def, path), fields(enum_name = def.enum_name(), path = %path.display()))]
pub fn generate_file(def: &EnumDefinition, path: &Path) -> Result<String, EnumGenError> {
    let content = write_with(path, || render(def))?;
    info!(bytes = content.len(), "wrote enum header");
    Ok(content)
}

/// Runs the whole pipeline: load `input`, render, and write to `output`.
///
/// A schema that fails to load leaves `output` untouched: nothing has been
/// written yet, and `output` may even be the schema itself. With `dry_run`
/// the header is rendered and returned but nothing on disk is created,
/// changed or deleted.
///
/// ## Examples
///
/// ```no_run
/// use std::path::Path;
/// use enumgen::output::generate;
///
/// let header = generate(Path::new("side.yaml"), Path::new("gen/side.h"), false).unwrap();
/// println!("{header}");
/// ```
pub fn generate(input: &Path, output: &Path, dry_run: bool) -> Result<String, EnumGenError> {
    let def = load_definition(input)?;

    if dry_run {
        return render(&def).map_err(EnumGenError::from);
    }

    generate_file(&def, output)
}
