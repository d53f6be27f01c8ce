//! Rooms command implementation

use crate::cli::RoomsArgs;
use crate::output::OutputWriter;
use crate::output_types::RoomRow;
use anyhow::{bail, Result};
use floornav_core::models::{Category, FloorId};
use floornav_routing::{NavigationBundle, MAX_SEARCH_RESULTS};

pub fn execute(args: RoomsArgs, bundle: &NavigationBundle, output: &OutputWriter) -> Result<()> {
    let floor = args.floor.map(FloorId::new);
    if let Some(id) = &floor {
        if bundle.floor(id).is_none() {
            bail!("Unknown floor: {}", id);
        }
    }

    let category = match args.category.as_deref() {
        Some(tag) => match Category::parse(tag) {
            Some(category) => Some(category),
            None => bail!("Unknown category: {}. Use room, stair, emergency_exit or corridor", tag),
        },
        None => None,
    };

    let rooms = match &args.search {
        Some(query) => {
            let found = bundle.rooms().search(query, category, floor.as_ref());
            if found.len() == MAX_SEARCH_RESULTS {
                output.warning(format!("Showing the first {} matches", MAX_SEARCH_RESULTS));
            }
            found
        }
        None => bundle
            .rooms()
            .list(floor.as_ref())
            .into_iter()
            .filter(|r| category.map_or(true, |c| r.category == c))
            .collect(),
    };

    let rows: Vec<RoomRow> = rooms.into_iter().map(RoomRow::from).collect();
    output.info(format!("{} rooms", rows.len()));
    output.table(rows)
}
