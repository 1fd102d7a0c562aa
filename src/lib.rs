//! Galaxy flight duration calculator.
//!
//! The workspace crates are re-exported here so front-ends and integration
//! tests depend on a single library: coordinates and clock types in
//! [`core`], distances in [`distance`], the flight formula in [`flight`],
//! the ship speed cache in [`ships`], server metadata and player settings in
//! [`config`], the overlay render model in [`overlay`] and CSV/JSON output
//! in [`export`].

pub use gfd_config as config;
pub use gfd_core as core;
pub use gfd_distance as distance;
pub use gfd_export as export;
pub use gfd_flight as flight;
pub use gfd_overlay as overlay;
pub use gfd_ships as ships;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
