//! Graph validation logic.

use std::collections::HashSet;

use pf_chem::Composition;
use pf_core::NodeId;

use crate::equipment::EquipmentKind;
use crate::error::{GraphError, GraphResult};
use crate::node::EquipmentNode;
use crate::params::{EquipmentDetail, ProcessConditions};
use crate::stream::Stream;

/// Check that a node's parameters fit its kind and are numerically sane.
pub(crate) fn validate_node_params(
    node: &NodeId,
    kind: EquipmentKind,
    conditions: &ProcessConditions,
    detail: &EquipmentDetail,
) -> GraphResult<()> {
    if detail.category() != kind.category() {
        return Err(GraphError::ParamsMismatch {
            node: node.clone(),
            kind,
            detail: detail.category(),
        });
    }

    let invalid = |what: &'static str, value: f64| GraphError::InvalidNodeParameter {
        node: node.clone(),
        what,
        value,
    };

    let finite = |what: &'static str, value: f64| {
        if value.is_finite() {
            Ok(())
        } else {
            Err(invalid(what, value))
        }
    };

    finite("temperature", conditions.temperature_c)?;
    finite("pressure", conditions.pressure)?;
    finite("flow rate", conditions.flow_rate)?;

    if let Some(cp) = conditions.heat_capacity {
        if !(cp.is_finite() && cp > 0.0) {
            return Err(invalid("heat capacity", cp));
        }
    }

    if let Some(eff) = detail.efficiency() {
        if !(eff.is_finite() && (0.0..=1.0).contains(&eff)) {
            return Err(invalid("efficiency", eff));
        }
    }

    if let Some(rate) = detail.reaction_rate() {
        finite("reaction rate", rate)?;
    }
    if let Some(duty) = detail.heat_duty() {
        finite("heat duty", duty)?;
    }
    if let Some(t_ref) = detail.reference_temperature_c() {
        finite("reference temperature", t_ref)?;
    }

    if let Some((what, value)) = first_non_finite(&conditions.composition) {
        return Err(invalid(what, value));
    }

    Ok(())
}

/// Check that recorded stream conditions are finite.
pub(crate) fn validate_stream(stream: &Stream) -> GraphResult<()> {
    let invalid = |what: &'static str, value: f64| GraphError::InvalidStreamParameter {
        stream: stream.id.clone(),
        what,
        value,
    };

    for (what, value) in [
        ("temperature", stream.temperature_c),
        ("pressure", stream.pressure),
        ("total flow", stream.total_flow),
    ] {
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(invalid(what, v));
            }
        }
    }

    if let Some((what, value)) = first_non_finite(&stream.composition) {
        return Err(invalid(what, value));
    }

    Ok(())
}

/// Node ids and stream ids must each be unique.
pub(crate) fn validate_unique_ids(nodes: &[EquipmentNode], streams: &[Stream]) -> GraphResult<()> {
    let mut node_ids = HashSet::new();
    for node in nodes {
        if !node_ids.insert(node.id()) {
            return Err(GraphError::DuplicateNodeId {
                id: node.id().clone(),
            });
        }
    }

    let mut stream_ids = HashSet::new();
    for stream in streams {
        if !stream_ids.insert(&stream.id) {
            return Err(GraphError::DuplicateStreamId {
                id: stream.id.clone(),
            });
        }
    }

    Ok(())
}

fn first_non_finite(composition: &Composition) -> Option<(&'static str, f64)> {
    for c in composition.components() {
        for (what, value) in [
            ("mole fraction", c.mole_fraction),
            ("component mass flow", c.mass_flow),
            ("component temperature", c.temperature_c),
            ("component pressure", c.pressure),
        ] {
            if !value.is_finite() {
                return Some((what, value));
            }
        }
    }

    if let Some(split) = composition.phase_split() {
        if !split.vapor.is_finite() {
            return Some(("vapor fraction", split.vapor));
        }
        if !split.liquid.is_finite() {
            return Some(("liquid fraction", split.liquid));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_chem::{ComponentFraction, PhaseSplit};

    fn conditions() -> ProcessConditions {
        ProcessConditions::new(25.0, 1.0, 10.0)
    }

    #[test]
    fn validate_accepts_plain_node() {
        let detail = EquipmentDetail::empty_for(EquipmentKind::Flash.category());
        assert!(
            validate_node_params(&"f".into(), EquipmentKind::Flash, &conditions(), &detail).is_ok()
        );
    }

    #[test]
    fn validate_rejects_non_finite_conditions() {
        let detail = EquipmentDetail::RawMaterial;
        let mut c = conditions();
        c.pressure = f64::INFINITY;
        let err = validate_node_params(&"t".into(), EquipmentKind::FeedTank, &c, &detail)
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidNodeParameter {
                what: "pressure",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_bad_efficiency_and_heat_capacity() {
        let detail = EquipmentDetail::Basic {
            efficiency: Some(1.2),
        };
        assert!(
            validate_node_params(&"p".into(), EquipmentKind::Pump, &conditions(), &detail).is_err()
        );

        let detail = EquipmentDetail::Basic { efficiency: None };
        let c = conditions().with_heat_capacity(0.0);
        assert!(validate_node_params(&"p".into(), EquipmentKind::Pump, &c, &detail).is_err());
    }

    #[test]
    fn validate_allows_unnormalized_composition() {
        let detail = EquipmentDetail::Separation { efficiency: None };
        let c = conditions().with_composition(
            Composition::new(vec![
                ComponentFraction::new("water", 0.9),
                ComponentFraction::new("ethanol", 0.9),
            ])
            .with_phase_split(PhaseSplit::new(0.4, 0.6)),
        );
        assert!(
            validate_node_params(&"d".into(), EquipmentKind::Distillation, &c, &detail).is_ok()
        );
    }

    #[test]
    fn validate_rejects_nan_in_phase_split() {
        let detail = EquipmentDetail::Separation { efficiency: None };
        let c = conditions()
            .with_composition(Composition::default().with_phase_split(PhaseSplit::new(f64::NAN, 0.5)));
        let err = validate_node_params(&"d".into(), EquipmentKind::Absorber, &c, &detail)
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidNodeParameter {
                what: "vapor fraction",
                ..
            }
        ));
    }

    #[test]
    fn validate_stream_rejects_nan_flow() {
        let s = Stream::new("s", "a", "b").with_total_flow(f64::NAN);
        assert!(matches!(
            validate_stream(&s),
            Err(GraphError::InvalidStreamParameter { .. })
        ));
        assert!(validate_stream(&Stream::new("s", "a", "b")).is_ok());
    }

    #[test]
    fn duplicate_stream_ids_are_rejected() {
        let streams = vec![Stream::new("s", "a", "b"), Stream::new("s", "b", "a")];
        assert!(matches!(
            validate_unique_ids(&[], &streams),
            Err(GraphError::DuplicateStreamId { .. })
        ));
    }
}
