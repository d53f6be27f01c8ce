//! Exit command implementation

use super::route::print_route;
use crate::cli::ExitArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use floornav_routing::NavigationBundle;

pub fn execute(args: ExitArgs, bundle: &NavigationBundle, output: &OutputWriter) -> Result<()> {
    let route = bundle.find_nearest_exit(args.start.trim())?;
    print_route(route, output)
}
