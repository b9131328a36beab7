//! Tabular export of sweep results.
//!
//! Both datasets share one two-column CSV shape with the header `r,x`. For the
//! Lyapunov profile the second column holds λ. Floats are written with Rust's
//! shortest round-trip formatting, so reading the file back gives the exact
//! same `f64` values.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use feigen_core::{BifurcationPoint, LyapunovPoint};
use thiserror::Error;

/// Column header shared by both datasets.
pub const HEADER: &str = "r,x";

/// Errors that can occur while writing a dataset.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `rows` as CSV with the given header.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_csv<W, I>(mut writer: W, header: &str, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (f64, f64)>,
{
    writeln!(writer, "{header}")?;
    for (first, second) in rows {
        writeln!(writer, "{first},{second}")?;
    }
    writer.flush()
}

/// Writes the bifurcation points to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn write_bifurcation(path: &Path, points: &[BifurcationPoint]) -> Result<(), ExportError> {
    write_file(path, points.iter().map(|p| (p.r, p.x)))
}

/// Writes the Lyapunov points to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn write_lyapunov(path: &Path, points: &[LyapunovPoint]) -> Result<(), ExportError> {
    write_file(path, points.iter().map(|p| (p.r, p.lambda)))
}

fn write_file<I>(path: &Path, rows: I) -> Result<(), ExportError>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_owned(),
            source,
        })?;
    }

    let write_error = |source: io::Error| ExportError::Write {
        path: path.to_owned(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    write_csv(BufWriter::new(file), HEADER, rows).map_err(write_error)
}
