//! pf-project: flowsheet interchange files and their validation.
//!
//! Files are YAML or JSON with snake_case keys and carry the node list, the
//! stream list and an optional analysis configuration.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_flowsheet};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file extension: {path}")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> ProjectResult<FlowsheetFile> {
    let file: FlowsheetFile = serde_yaml::from_str(content)?;
    validate_flowsheet(&file)?;
    Ok(file)
}

pub fn from_json_str(content: &str) -> ProjectResult<FlowsheetFile> {
    let file: FlowsheetFile = serde_json::from_str(content)?;
    validate_flowsheet(&file)?;
    Ok(file)
}

pub fn load_yaml(path: &Path) -> ProjectResult<FlowsheetFile> {
    from_yaml_str(&std::fs::read_to_string(path)?)
}

pub fn save_yaml(path: &Path, file: &FlowsheetFile) -> ProjectResult<()> {
    validate_flowsheet(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<FlowsheetFile> {
    from_json_str(&std::fs::read_to_string(path)?)
}

pub fn save_json(path: &Path, file: &FlowsheetFile) -> ProjectResult<()> {
    validate_flowsheet(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.yaml`/`.yml` or `.json`.
pub fn load(path: &Path) -> ProjectResult<FlowsheetFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}
