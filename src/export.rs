//! JSON export — serialize a graph and its measure for visualization.
//!
//! Rendering itself is a downstream concern; this module produces the data
//! handoff: node positions, edge action/distance attributes, the action
//! vocabulary, and a caller-named per-node measure, as one JSON document.
//!
//! ```text
//! GridGraph + EmpowermentMap → export_json() → one JSON document
//!   → consumed by plotting / layout tooling
//! ```

use std::io::Write;

use serde::Serialize;

use crate::empowerment::EmpowermentMap;
use crate::graph::GridGraph;
use crate::{Error, Result};

/// One node in the dump: its identity, layout position, and measure value.
#[derive(Debug, Serialize)]
struct NodeDump {
    id: (i32, i32),
    pos: (i32, i32),
    value: f64,
}

/// One edge in the dump.
#[derive(Debug, Serialize)]
struct EdgeDump {
    src: (i32, i32),
    dst: (i32, i32),
    action: &'static str,
    distance: f64,
}

#[derive(Debug, Serialize)]
struct GraphDump<'a> {
    measure: &'a str,
    actions: Vec<&'static str>,
    nodes: Vec<NodeDump>,
    edges: Vec<EdgeDump>,
}

/// Export a graph and a per-node measure as a JSON document.
///
/// `measure_name` is the caller-chosen attribute key (e.g.
/// `"3_step_empowerment"`); the core does not name the measure itself.
/// Every node must have a value in `values` — a partial mapping is an error.
pub fn export_json(
    graph: &GridGraph,
    measure_name: &str,
    values: &EmpowermentMap,
    writer: &mut dyn Write,
) -> Result<()> {
    let mut nodes = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let value = values.get(node).copied().ok_or(Error::NodeNotFound(*node))?;
        nodes.push(NodeDump { id: node.pos(), pos: node.pos(), value });
    }

    let edges = graph
        .edges()
        .map(|e| EdgeDump {
            src: e.src.pos(),
            dst: e.dst.pos(),
            action: e.action.as_str(),
            distance: e.distance,
        })
        .collect();

    let dump = GraphDump {
        measure: measure_name,
        actions: graph.actions().iter().map(|a| a.as_str()).collect(),
        nodes,
        edges,
    };

    serde_json::to_writer_pretty(&mut *writer, &dump)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Format a value to a fixed number of significant figures, with very small
/// magnitudes collapsed to `"0"`. For measure labels on rendered figures.
pub fn sigfigs(value: f64, sig_figs: u32) -> String {
    const MIN_VALUE: f64 = 1e-6;
    if value.abs() < MIN_VALUE {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor();
    let factor = 10f64.powf(f64::from(sig_figs) - 1.0 - magnitude);
    let rounded = (value * factor).round() / factor;
    format!("{rounded}")
}

// ============================================================================
// Tests
// ============================================================================
