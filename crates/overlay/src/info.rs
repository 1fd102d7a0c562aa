//! Plain-text dump of stored speeds and universe settings.

use gfd_config::ServerMetadata;
use gfd_ships::ShipSpeedCache;

use crate::locale::{Localizer, NameForm, TextKey};

/// Saved ship speeds with their last update, followed by the universe
/// settings the calculator uses.
pub fn info_summary(
    server: &ServerMetadata,
    cache: &ShipSpeedCache,
    locale: &dyn Localizer,
) -> String {
    let mut out = format!(
        "{} ({}):\n",
        locale.text(TextKey::SavedSpeeds),
        cache.last_refreshed_marker().unwrap_or("-")
    );
    for record in cache.records() {
        out.push_str(&format!(
            "  {}: {}\n",
            locale.ship_name(record.ship, NameForm::Full),
            record.speed
        ));
    }

    let flag = |on: bool| u8::from(on);
    out.push_str(&format!("\n{}:\n", locale.text(TextKey::UniverseSettings)));
    out.push_str(&format!(
        "  {}: {}/{}/{}\n",
        locale.text(TextKey::FleetSpeeds),
        server.fleet_speed.peaceful,
        server.fleet_speed.war,
        server.fleet_speed.holding
    ));
    out.push_str(&format!(
        "  {}: {}/{}\n",
        locale.text(TextKey::Donut),
        flag(server.donut_galaxy),
        flag(server.donut_system)
    ));
    out.push_str(&format!(
        "  {}: {}\n",
        locale.text(TextKey::GalaxyCount),
        server.galaxy_count
    ));
    out.push_str(&format!(
        "  {}: {}/{}\n",
        locale.text(TextKey::IgnoreSystemsSetting),
        flag(server.ignore_empty_systems),
        flag(server.ignore_inactive_systems)
    ));
    out
}
