//! Shared helpers for the end-to-end triaxial scenarios.
//!
//! Scenario configuration files live in `configs/` and are picked up by
//! extension: `.toml`, `.json`, `.yaml` or `.yml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use norsand_model::{Parameters, TestRecord};
use norsand_solvers::triaxial::Snapshot;
use serde::de::DeserializeOwned;

/// Errors that can occur when loading a scenario file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config extension: {0}")]
    Extension(String),
}

/// Returns the path of a file in the `configs/` directory.
#[must_use]
pub fn config_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("configs").join(name)
}

/// Loads a value from a file in `configs/`, choosing the format by extension.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, its extension is not
/// recognized, or its contents do not deserialize into `T`.
pub fn load<T: DeserializeOwned>(name: &str) -> Result<T, LoadError> {
    let path = config_path(name);
    let text = fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "toml" => Ok(toml::from_str(&text)?),
        "json" => Ok(serde_json::from_str(&text)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&text)?),
        other => Err(LoadError::Extension(other.to_owned())),
    }
}

/// Loads simulation parameters from a file in `configs/`.
///
/// # Errors
///
/// See [`load`].
pub fn load_parameters(name: &str) -> Result<Parameters, LoadError> {
    load(name)
}

/// Loads a sequence of lab-test records from a file in `configs/`.
///
/// # Errors
///
/// See [`load`].
pub fn load_records(name: &str) -> Result<Vec<TestRecord>, LoadError> {
    load(name)
}

/// Renders a history as comma-separated text with a header row.
#[must_use]
pub fn to_csv(history: &[Snapshot]) -> String {
    let mut out = Snapshot::COLUMNS.join(",");
    out.push('\n');

    for snapshot in history {
        let cells: Vec<String> = snapshot.row().iter().map(f64::to_string).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Returns the simulated record closest in axial strain to `target`.
#[must_use]
pub fn nearest_by_axial_strain(history: &[Snapshot], target: f64) -> Option<TestRecord> {
    history
        .iter()
        .min_by(|a, b| {
            let da = (a.eps1 - target).abs();
            let db = (b.eps1 - target).abs();
            da.total_cmp(&db)
        })
        .map(Snapshot::to_test_record)
}
