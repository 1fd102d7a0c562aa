//! Overlay state for the galaxy view: localized labels, recompute
//! signalling, and the render model derived from the current inputs.

pub mod info;
pub mod locale;
pub mod model;
pub mod signal;

pub use info::info_summary;
pub use locale::{BuiltinLocale, Catalog, Localizer, NameForm, ShipNames, TextKey};
pub use model::{
    DistanceView, Emphasis, FleetSpeedView, GalaxyView, ModifierView, OverlayError,
    OverlayInputs, RenderModel, ShipLine, ShipWarning, describe_difference, fleet_table,
    recompute,
};
pub use signal::{NavigationWatcher, RecomputeTrigger, SignalHub, SubscriptionId};
