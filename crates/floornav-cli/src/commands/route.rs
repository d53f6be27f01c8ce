//! Route command implementation

use crate::cli::RouteArgs;
use crate::output::OutputWriter;
use crate::output_types::{format_point, RouteOutput, SegmentRow, StairRow};
use anyhow::Result;
use floornav_routing::{NavigationBundle, Route};

pub fn execute(args: RouteArgs, bundle: &NavigationBundle, output: &OutputWriter) -> Result<()> {
    let route = bundle.navigate(args.start.trim(), args.end.trim())?;
    print_route(route, output)
}

/// Shared by the route and exit commands
pub fn print_route(route: Route, output: &OutputWriter) -> Result<()> {
    if output.is_json() {
        return output.result(RouteOutput::from(route));
    }

    output.success(format!(
        "Route from {} to {}",
        route.start.display_name(),
        route.end.display_name()
    ));
    output.kv("Start", format!("{} on {}", format_point(&route.start.centroid), route.start.floor));
    output.kv("End", format!("{} on {}", format_point(&route.end.centroid), route.end.floor));
    output.kv("Total weight", format!("{:.2}", route.total_weight));
    output.kv("Floor changes", route.floor_changes());

    output.section("Segments");
    output.table(SegmentRow::from_route(&route))?;

    output.section("Stairs");
    output.table(StairRow::from_route(&route))?;

    Ok(())
}
