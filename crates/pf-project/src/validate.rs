//! Flowsheet file validation logic.

use std::collections::HashSet;

use pf_graph::{EquipmentCategory, EquipmentKind};

use crate::schema::{CompositionDef, FlowsheetFile, NodeDef, StreamDef};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Parameter {field} does not apply to {kind} node {id}")]
    NotApplicable {
        id: String,
        kind: EquipmentKind,
        field: &'static str,
    },

    #[error("Invalid analysis configuration: {0}")]
    Config(String),

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: String, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: impl Fn() -> String, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field(), value, "must be finite"))
    }
}

/// Check a flowsheet file before it is compiled into a snapshot.
///
/// Streams may name nodes that are not in the file; analysis reports those
/// as warnings instead.
pub fn validate_flowsheet(file: &FlowsheetFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut node_ids = HashSet::new();
    for node in &file.nodes {
        if !node_ids.insert(&node.id) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: "nodes".to_string(),
            });
        }
        validate_node(node)?;
    }

    let mut stream_ids = HashSet::new();
    for stream in &file.streams {
        if !stream_ids.insert(&stream.id) {
            return Err(ValidationError::DuplicateId {
                id: stream.id.clone(),
                context: "streams".to_string(),
            });
        }
        validate_stream(stream)?;
    }

    if let Some(config) = &file.config {
        config
            .validate()
            .map_err(|e| ValidationError::Config(e.to_string()))?;
    }

    Ok(())
}

fn validate_node(node: &NodeDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("node '{}' {}", node.id, name);

    finite(|| field("temperature_c"), node.temperature_c)?;
    finite(|| field("pressure"), node.pressure)?;
    finite(|| field("flow_rate"), node.flow_rate)?;

    if let Some(cp) = node.heat_capacity {
        if !(cp.is_finite() && cp > 0.0) {
            return Err(invalid(field("heat_capacity"), cp, "must be positive"));
        }
    }

    applies(
        node,
        "efficiency",
        node.efficiency,
        &[EquipmentCategory::Separation, EquipmentCategory::Basic],
    )?;
    applies(node, "heat_duty", node.heat_duty, &[EquipmentCategory::HeatExchanger])?;
    applies(
        node,
        "reference_temperature_c",
        node.reference_temperature_c,
        &[EquipmentCategory::HeatExchanger],
    )?;
    applies(node, "reaction_rate", node.reaction_rate, &[EquipmentCategory::Reactor])?;

    if let Some(eff) = node.efficiency {
        if !(0.0..=1.0).contains(&eff) {
            return Err(invalid(field("efficiency"), eff, "must be within [0, 1]"));
        }
    }

    if let Some(composition) = &node.composition {
        validate_composition(&field("composition"), composition)?;
    }

    Ok(())
}

/// A category-specific parameter must be finite and belong to the node's category.
fn applies(
    node: &NodeDef,
    name: &'static str,
    value: Option<f64>,
    allowed: &[EquipmentCategory],
) -> Result<(), ValidationError> {
    match value {
        Some(_) if !allowed.contains(&node.kind.category()) => Err(ValidationError::NotApplicable {
            id: node.id.clone(),
            kind: node.kind,
            field: name,
        }),
        Some(v) => finite(|| format!("node '{}' {}", node.id, name), v),
        None => Ok(()),
    }
}

fn validate_stream(stream: &StreamDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("stream '{}' {}", stream.id, name);

    for (name, value) in [
        ("total_flow", stream.total_flow),
        ("temperature_c", stream.temperature_c),
        ("pressure", stream.pressure),
    ] {
        if let Some(v) = value {
            finite(|| field(name), v)?;
        }
    }

    if let Some(composition) = &stream.composition {
        validate_composition(&field("composition"), composition)?;
    }

    Ok(())
}

fn validate_composition(context: &str, composition: &CompositionDef) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for c in &composition.components {
        if !seen.insert(&c.chemical_id) {
            return Err(ValidationError::DuplicateId {
                id: c.chemical_id.clone(),
                context: context.to_string(),
            });
        }
        for (name, value) in [
            ("mole_fraction", c.mole_fraction),
            ("mass_flow", c.mass_flow),
            ("temperature_c", c.temperature_c),
            ("pressure", c.pressure),
        ] {
            finite(|| format!("{} {} {}", context, c.chemical_id, name), value)?;
        }
    }

    for (name, value) in [("vapor", composition.vapor), ("liquid", composition.liquid)] {
        if let Some(v) = value {
            finite(|| format!("{} {}", context, name), v)?;
        }
    }

    Ok(())
}
