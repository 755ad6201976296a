//! JSON load/store for vectors, matrices and elimination settings.
//!
//! A matrix file is an array of rows (`[[1, 2], [3, 4]]`), a vector file a
//! flat array of numbers.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use gauss::math::{Matrix, Vector};
use gauss::EliminationConfig;

pub(crate) fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}: {}", what, path.as_ref().display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}: {}", what, path.as_ref().display()))?;
    Ok(value)
}

pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix<f64>> {
    let rows: Vec<Vec<f64>> = read_json(&path, "matrix")?;
    let matrix = Matrix::try_from(rows)
        .with_context(|| format!("Invalid matrix in {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded {}x{} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.as_ref().display()
    );
    Ok(matrix)
}

pub fn load_vector<P: AsRef<Path>>(path: P) -> Result<Vector<f64>> {
    let values: Vec<f64> = read_json(path, "vector")?;
    Ok(Vector::from_vec(values))
}

pub fn load_elimination_config<P: AsRef<Path>>(path: P) -> Result<EliminationConfig> {
    read_json(path, "config")
}

/// Writes `matrix` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_matrix(matrix: &Matrix<f64>, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&matrix.to_rows())?;
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json)?;
        }
    }
    Ok(())
}
