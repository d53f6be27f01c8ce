//! Floors command implementation

use crate::output::OutputWriter;
use crate::output_types::FloorRow;
use anyhow::Result;
use floornav_routing::NavigationBundle;

pub fn execute(bundle: &NavigationBundle, output: &OutputWriter) -> Result<()> {
    let rows: Vec<FloorRow> = bundle.floor_stats().into_iter().map(FloorRow::from).collect();

    output.section("Floors");
    output.table(rows)?;

    let graph = bundle.graph();
    output.kv("Building nodes", graph.node_count());
    output.kv("Building edges", graph.edge_count());
    output.kv("Stair crossings", graph.crossings());
    output.kv("Built at", bundle.built_at().format("%Y-%m-%d %H:%M:%S UTC"));

    Ok(())
}
