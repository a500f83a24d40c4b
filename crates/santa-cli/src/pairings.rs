//! Saved pairings and the dry-run report.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use santa_core::Assignment;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::CliError;

/// File name of the saved pairings inside the output directory.
pub const PAIRINGS_FILE: &str = "unencrypted_pairings.json";

/// Write `assignment` to `<output_dir>/unencrypted_pairings.json`.
///
/// Creates the directory if needed. Keys are sorted and indented by four
/// spaces so that reruns with the same seed produce identical files.
pub fn save_pairings(output_dir: &Path, assignment: &Assignment) -> Result<PathBuf, CliError> {
    fs::create_dir_all(output_dir)
        .map_err(|source| CliError::Write { path: output_dir.to_path_buf(), source })?;

    let path = output_dir.join(PAIRINGS_FILE);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    assignment
        .serialize(&mut serializer)
        .map_err(|source| CliError::Json { path: path.clone(), source })?;
    buf.push(b'\n');

    fs::write(&path, buf).map_err(|source| CliError::Write { path: path.clone(), source })?;
    tracing::debug!("Saved unencrypted pairings to {}", path.display());
    Ok(path)
}

/// Load pairings saved by [`save_pairings`].
pub fn load_pairings(output_dir: &Path) -> Result<Assignment, CliError> {
    let path = output_dir.join(PAIRINGS_FILE);
    let contents = fs::read_to_string(&path)
        .map_err(|source| CliError::Read { path: path.clone(), source })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Json { path, source })
}

/// Write the numbered `giver -> receiver` listing shown on dry runs.
pub fn write_report<W: Write>(out: &mut W, assignment: &Assignment) -> Result<(), CliError> {
    writeln!(out, "Pairings:").map_err(CliError::Report)?;
    for (i, (giver, receiver)) in assignment.iter().enumerate() {
        writeln!(out, "\t{}. {giver} -> {receiver}", i + 1).map_err(CliError::Report)?;
    }
    Ok(())
}
