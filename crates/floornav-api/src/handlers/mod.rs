mod floors;
mod health;
mod reload;
mod rooms;
mod routes;

pub use floors::list_floors;
pub use health::health_check;
pub use reload::reload;
pub use rooms::{list_room_types, list_rooms, search_rooms};
pub use routes::{find_exit, find_path};
