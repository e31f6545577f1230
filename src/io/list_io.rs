use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::ListFile;
use crate::model::item::Item;

/// Error type for list file I/O
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    TomlError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse {path}: {source}")]
    JsonError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unsupported list file extension: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("invalid list: {0}")]
    Invalid(String),
}

/// Read and validate a list file.
pub fn load_list(path: &Path) -> Result<ListFile, ListError> {
    let file = read_list(path)?;
    let problems = validate(&file);
    if let Some(first) = problems.into_iter().next() {
        return Err(ListError::Invalid(first));
    }
    Ok(file)
}

/// Parse a list file without validating it. `.toml` files carry items plus
/// settings; `.json` files are a bare array of items and use default settings.
pub fn read_list(path: &Path) -> Result<ListFile, ListError> {
    let text = fs::read_to_string(path).map_err(|e| ListError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str::<ListFile>(&text).map_err(|e| ListError::TomlError {
            path: path.to_path_buf(),
            source: e,
        })?,
        Some("json") => {
            let items: Vec<Item> =
                serde_json::from_str(&text).map_err(|e| ListError::JsonError {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            ListFile {
                items,
                ..ListFile::default()
            }
        }
        _ => return Err(ListError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(file)
}

/// Every problem with a list, in file order. Empty means valid.
pub fn validate(file: &ListFile) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for (i, item) in file.items.iter().enumerate() {
        if item.id.trim().is_empty() {
            problems.push(format!("item {} has an empty id", i + 1));
        } else if !seen.insert(item.id.as_str()) {
            problems.push(format!("duplicate id \"{}\" (item {})", item.id, i + 1));
        }
    }

    if file.ui.row_height < 2 {
        problems.push(format!(
            "ui.row_height must be at least 2, got {}",
            file.ui.row_height
        ));
    }

    problems
}

/// The list shown when no file is given.
pub fn demo_list() -> ListFile {
    let items = [
        ("insurance_type", "Insurance Type"),
        ("referrer", "Referrer"),
        ("accounting", "Accounting"),
        ("birthdate", "Birthdate"),
        ("hospital_stay_type", "Hospital Stay Type"),
        ("import_identifier", "Import Identifier"),
        ("encounter_status", "Encounter Status"),
        ("encounter_external_id", "Encounter External ID"),
    ]
    .into_iter()
    .map(|(id, label)| Item::new(id, label))
    .collect();

    let mut file = ListFile {
        items,
        ..ListFile::default()
    };
    file.list.title = "Columns".to_string();
    file
}
