//! Flowsheet loading, saving, validation, and introspection.

use std::path::Path;

use pf_analysis::AnalysisConfig;
use pf_chem::{Chemical, ChemicalTable};
use pf_graph::{EquipmentCategory, EquipmentKind};
use pf_project::schema::FlowsheetFile;

use crate::error::{AppError, AppResult};

/// Interchange formats recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(AppError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Summary of a flowsheet for listing.
#[derive(Debug, Clone)]
pub struct FlowsheetSummary {
    pub name: String,
    pub version: u32,
    pub node_count: usize,
    pub stream_count: usize,
    pub has_config: bool,
    /// Node count per category, in category order; empty categories omitted.
    pub categories: Vec<(EquipmentCategory, usize)>,
}

fn read(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate a flowsheet file (YAML or JSON by extension).
pub fn load_flowsheet(path: &Path) -> AppResult<FlowsheetFile> {
    let format = FileFormat::from_path(path)?;
    let content = read(path)?;
    let file = match format {
        FileFormat::Yaml => pf_project::from_yaml_str(&content)?,
        FileFormat::Json => pf_project::from_json_str(&content)?,
    };
    Ok(file)
}

/// Save a flowsheet file in the format its extension names.
pub fn save_flowsheet(path: &Path, file: &FlowsheetFile) -> AppResult<()> {
    pf_project::validate_flowsheet(file).map_err(pf_project::ProjectError::from)?;
    let content = match FileFormat::from_path(path)? {
        FileFormat::Yaml => serde_yaml::to_string(file)
            .map_err(|e| AppError::Project(format!("Failed to serialize flowsheet: {}", e)))?,
        FileFormat::Json => serde_json::to_string_pretty(file)
            .map_err(|e| AppError::Project(format!("Failed to serialize flowsheet: {}", e)))?,
    };

    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Load a standalone analysis configuration. Missing keys take their defaults.
pub fn load_config(path: &Path) -> AppResult<AnalysisConfig> {
    let format = FileFormat::from_path(path)?;
    let content = read(path)?;
    let config: AnalysisConfig = match format {
        FileFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config YAML: {}", e)))?,
        FileFormat::Json => serde_json::from_str(&content)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config JSON: {}", e)))?,
    };
    config.validate()?;
    Ok(config)
}

pub fn summarize(file: &FlowsheetFile) -> FlowsheetSummary {
    let categories = [
        EquipmentCategory::RawMaterial,
        EquipmentCategory::Reactor,
        EquipmentCategory::HeatExchanger,
        EquipmentCategory::Separation,
        EquipmentCategory::Basic,
        EquipmentCategory::Analysis,
    ]
    .into_iter()
    .map(|category| {
        let count = file
            .nodes
            .iter()
            .filter(|n| n.kind.category() == category)
            .count();
        (category, count)
    })
    .filter(|(_, count)| *count > 0)
    .collect();

    FlowsheetSummary {
        name: file.name.clone(),
        version: file.version,
        node_count: file.nodes.len(),
        stream_count: file.streams.len(),
        has_config: file.config.is_some(),
        categories,
    }
}

/// Reference chemicals matching `query` (all of them for an empty query).
pub fn list_chemicals(query: &str) -> Vec<Chemical> {
    ChemicalTable::builtin().search(query).cloned().collect()
}

/// Every equipment kind with its category.
pub fn list_kinds() -> Vec<(EquipmentKind, EquipmentCategory)> {
    EquipmentKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.category()))
        .collect()
}
