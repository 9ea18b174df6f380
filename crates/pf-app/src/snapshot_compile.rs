//! Compilation of flowsheet files into analysis snapshots.

use pf_chem::{ComponentFraction, Composition, PhaseSplit};
use pf_graph::{
    EquipmentCategory, EquipmentDetail, EquipmentNode, FlowsheetSnapshot, ProcessConditions,
    Stream,
};
use pf_project::schema::{CompositionDef, FlowsheetFile, NodeDef, StreamDef};

use crate::error::AppResult;

/// Compile a validated flowsheet file into an immutable snapshot.
///
/// Node and stream order follows the file.
pub fn compile_flowsheet(file: &FlowsheetFile) -> AppResult<FlowsheetSnapshot> {
    let nodes = file
        .nodes
        .iter()
        .map(compile_node)
        .collect::<AppResult<Vec<_>>>()?;
    let streams = file.streams.iter().map(compile_stream).collect();

    Ok(FlowsheetSnapshot::new(nodes, streams)?)
}

/// Build one equipment node; the detail block is chosen by the kind's category.
pub fn compile_node(def: &NodeDef) -> AppResult<EquipmentNode> {
    let mut conditions = ProcessConditions::new(def.temperature_c, def.pressure, def.flow_rate);
    conditions.heat_capacity = def.heat_capacity;
    if let Some(composition) = &def.composition {
        conditions.composition = compile_composition(composition);
    }

    let node = EquipmentNode::new(
        def.id.as_str(),
        def.kind,
        def.name.as_str(),
        conditions,
        detail_for(def),
    )?;
    Ok(node.at(def.position.x, def.position.y))
}

/// Flat optional parameters regrouped into the category's detail block.
///
/// Parameters that do not belong to the category are dropped; file
/// validation rejects them before this point.
pub fn detail_for(def: &NodeDef) -> EquipmentDetail {
    match def.kind.category() {
        EquipmentCategory::RawMaterial => EquipmentDetail::RawMaterial,
        EquipmentCategory::Reactor => EquipmentDetail::Reactor {
            reaction_rate: def.reaction_rate,
        },
        EquipmentCategory::HeatExchanger => EquipmentDetail::HeatExchanger {
            heat_duty: def.heat_duty,
            reference_temperature_c: def.reference_temperature_c,
        },
        EquipmentCategory::Separation => EquipmentDetail::Separation {
            efficiency: def.efficiency,
        },
        EquipmentCategory::Basic => EquipmentDetail::Basic {
            efficiency: def.efficiency,
        },
        EquipmentCategory::Analysis => EquipmentDetail::Analysis,
    }
}

pub fn compile_stream(def: &StreamDef) -> Stream {
    let mut stream = Stream::new(def.id.as_str(), def.source.as_str(), def.target.as_str());
    stream.total_flow = def.total_flow;
    stream.temperature_c = def.temperature_c;
    stream.pressure = def.pressure;
    if let Some(composition) = &def.composition {
        stream.composition = compile_composition(composition);
    }
    stream
}

/// A missing side of the phase split reads as zero.
pub fn compile_composition(def: &CompositionDef) -> Composition {
    let components = def
        .components
        .iter()
        .map(|c| ComponentFraction {
            chemical_id: c.chemical_id.as_str().into(),
            mole_fraction: c.mole_fraction,
            mass_flow: c.mass_flow,
            temperature_c: c.temperature_c,
            pressure: c.pressure,
        })
        .collect();

    let composition = Composition::new(components);
    if def.vapor.is_none() && def.liquid.is_none() {
        return composition;
    }
    composition.with_phase_split(PhaseSplit::new(
        def.vapor.unwrap_or(0.0),
        def.liquid.unwrap_or(0.0),
    ))
}
