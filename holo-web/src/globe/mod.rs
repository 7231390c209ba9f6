//! Globe module - sphere geometry and points of interest
//!
//! Re-exports only. All logic in submodules.

mod coordinates;
mod poi;

pub use coordinates::{angle_to_viewer, lat_lon_to_vector3, view_direction, world_rotation};
pub use poi::{closest_to_view, Poi, PoiSelector, POIS};
