//! Ship catalog and the persisted ship speed cache.

pub mod cache;
pub mod catalog;
pub mod source;

pub use cache::{
    CACHE_VERSION, CacheError, CacheSnapshot, FleetDataError, FleetDataSource, Freshness,
    RefreshOutcome, ShipSpeedCache, ShipSpeedRecord,
};
pub use catalog::{ShipClass, UnknownShip};
pub use source::{JsonFleetTable, StaticFleetTable, parse_fleet_table};
