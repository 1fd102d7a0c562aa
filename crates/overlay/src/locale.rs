//! Localized labels looked up by stable identifiers.

use std::collections::HashMap;
use std::path::Path;

use gfd_config::{ConfigError, ShipSlot, load_document};
use gfd_flight::{FleetSpeedType, TripDirective};
use gfd_ships::ShipClass;
use serde::Deserialize;

/// Identifier of a translatable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextKey {
    Distance,
    CoordsDifference,
    Galaxy,
    Galaxies,
    System,
    Systems,
    PositionFixed,
    IgnoreSystems,
    SelectedSpeed,
    Peaceful,
    War,
    Holding,
    FleetSpeed,
    OneWay,
    TwoWay,
    Arrival,
    Return,
    SpeedModifier,
    Selected,
    ShipSuffix,
    First,
    Second,
    Third,
    Speed,
    SpeedNeverRefreshed,
    SpeedStale,
    SavedSpeeds,
    UniverseSettings,
    FleetSpeeds,
    Donut,
    GalaxyCount,
    IgnoreSystemsSetting,
}

impl TextKey {
    pub fn for_fleet_speed(kind: FleetSpeedType) -> Self {
        match kind {
            FleetSpeedType::Peaceful => Self::Peaceful,
            FleetSpeedType::War => Self::War,
            FleetSpeedType::Holding => Self::Holding,
        }
    }

    pub fn for_directive(directive: TripDirective) -> Self {
        match directive {
            TripDirective::OneWay => Self::OneWay,
            TripDirective::TwoWay => Self::TwoWay,
            TripDirective::Arrival => Self::Arrival,
            TripDirective::Return => Self::Return,
        }
    }

    pub fn for_slot(slot: ShipSlot) -> Self {
        match slot {
            ShipSlot::First => Self::First,
            ShipSlot::Second => Self::Second,
            ShipSlot::Third => Self::Third,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameForm {
    Full,
    Short,
}

pub trait Localizer {
    fn text(&self, key: TextKey) -> &str;
    fn ship_name(&self, ship: ShipClass, form: NameForm) -> &str;
}

/// Translations shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinLocale {
    #[default]
    English,
    German,
    French,
    Italian,
    BrazilianPortuguese,
    Slovenian,
}

impl BuiltinLocale {
    /// Locale for a language code; unsupported languages get English.
    pub fn for_language(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" => Self::German,
            "fr" => Self::French,
            "it" => Self::Italian,
            "br" | "pt-br" => Self::BrazilianPortuguese,
            "si" | "sl" => Self::Slovenian,
            _ => Self::English,
        }
    }
}

impl Localizer for BuiltinLocale {
    fn text(&self, key: TextKey) -> &str {
        match self {
            Self::English => english_text(key),
            Self::German => german_text(key),
            Self::French => french_text(key),
            Self::Italian => italian_text(key),
            Self::BrazilianPortuguese => portuguese_text(key),
            Self::Slovenian => slovenian_text(key),
        }
    }

    fn ship_name(&self, ship: ShipClass, form: NameForm) -> &str {
        let (full, short) = match self {
            Self::English => english_ship(ship),
            Self::German => german_ship(ship),
            Self::French => french_ship(ship),
            Self::Italian => italian_ship(ship),
            Self::BrazilianPortuguese => portuguese_ship(ship),
            Self::Slovenian => slovenian_ship(ship),
        };
        match form {
            NameForm::Full => full,
            NameForm::Short => short,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShipNames {
    pub full: String,
    pub short: String,
}

/// Translation table loaded from a document. Missing entries fall back to
/// English.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub texts: HashMap<TextKey, String>,
    #[serde(default)]
    pub ships: HashMap<ShipClass, ShipNames>,
}

impl Catalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_document(path)
    }
}

impl Localizer for Catalog {
    fn text(&self, key: TextKey) -> &str {
        self.texts
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| english_text(key))
    }

    fn ship_name(&self, ship: ShipClass, form: NameForm) -> &str {
        match (self.ships.get(&ship), form) {
            (Some(names), NameForm::Full) => names.full.as_str(),
            (Some(names), NameForm::Short) => names.short.as_str(),
            (None, _) => BuiltinLocale::English.ship_name(ship, form),
        }
    }
}

fn english_text(key: TextKey) -> &'static str {
    match key {
        TextKey::Distance => "Distance",
        TextKey::CoordsDifference => "Difference in position",
        TextKey::Galaxy => "galaxy",
        TextKey::Galaxies => "galaxies",
        TextKey::System => "system",
        TextKey::Systems => "systems",
        TextKey::PositionFixed => "Position co-ordinates are always set to 16!",
        TextKey::IgnoreSystems => "Ignore systems (empty/inactive)",
        TextKey::SelectedSpeed => "Selected speed",
        TextKey::Peaceful => "Peaceful",
        TextKey::War => "War",
        TextKey::Holding => "Holding",
        TextKey::FleetSpeed => "fleet speed.",
        TextKey::OneWay => "One way flight duration selected",
        TextKey::TwoWay => "Two way flight duration selected",
        TextKey::Arrival => "Arrival time selected",
        TextKey::Return => "Return time selected",
        TextKey::SpeedModifier => "Speed modifier",
        TextKey::Selected => "Selected",
        TextKey::ShipSuffix => " ship:",
        TextKey::First => "first",
        TextKey::Second => "second",
        TextKey::Third => "third",
        TextKey::Speed => "Speed",
        TextKey::SpeedNeverRefreshed => {
            "WARNING: Ship's speed is not updated!\nGo to Fleet page to update speed values."
        }
        TextKey::SpeedStale => "Ship speeds were last updated on another day.",
        TextKey::SavedSpeeds => "Saved speed values",
        TextKey::UniverseSettings => "Universe Settings",
        TextKey::FleetSpeeds => "Peaceful/War/Holding Fleet Speed",
        TextKey::Donut => "Donut Galaxy/System",
        TextKey::GalaxyCount => "Number of galaxies",
        TextKey::IgnoreSystemsSetting => "Ignore Empty/Inactive Systems",
    }
}

fn german_text(key: TextKey) -> &'static str {
    match key {
        TextKey::Distance => "Entfernung",
        TextKey::CoordsDifference => "Unterschied in der Position",
        TextKey::Galaxy => "Galaxie",
        TextKey::Galaxies => "Galaxien",
        TextKey::System => "System",
        TextKey::Systems => "Systeme",
        TextKey::PositionFixed => "Positionskoordinaten sind immer auf 16 gesetzt!",
        TextKey::IgnoreSystems => "Ignoriere Systeme (leer/inaktiv)",
        TextKey::SelectedSpeed => "Ausgewählte Geschwindigkeit",
        TextKey::Peaceful => "friedlich",
        TextKey::War => "krieg",
        TextKey::Holding => "halten",
        TextKey::FleetSpeed => "Flottengeschwindigkeit.",
        TextKey::OneWay => "Einweg-Flugdauer ausgewählt",
        TextKey::TwoWay => "Zweiweg-Flugdauer ausgewählt",
        TextKey::Arrival => "Ankunftszeit ausgewählt",
        TextKey::Return => "Rückflugzeit ausgewählt",
        TextKey::SpeedModifier => "Geschwindigkeitsmodifikator",
        TextKey::Selected => "Ausgewählt",
        TextKey::ShipSuffix => " Schiff:",
        TextKey::First => "erste",
        TextKey::Second => "zweite",
        TextKey::Third => "dritte",
        TextKey::Speed => "Geschwindigkeit",
        TextKey::SpeedNeverRefreshed => concat!(
            "WARNUNG: Die Geschwindigkeit des Schiffs wird nicht aktualisiert!\n",
            "Gehen Sie zur Flotten-Seite, um die Geschwindigkeitswerte zu aktualisieren."
        ),
        TextKey::SpeedStale => "Die Geschwindigkeiten stammen von einem anderen Tag.",
        TextKey::SavedSpeeds => "Gespeicherte Geschwindigkeitswerte",
        TextKey::UniverseSettings => "Universumseinstellungen",
        TextKey::FleetSpeeds => "Friedliche/Kriegerische/Halten Flottengeschwindigkeit",
        TextKey::Donut => "Donut-Galaxie/System",
        TextKey::GalaxyCount => "Anzahl der Galaxien",
        TextKey::IgnoreSystemsSetting => "Leere/Inaktive Systeme ignorieren",
    }
}

fn french_text(key: TextKey) -> &'static str {
    match key {
        TextKey::Distance => "Distance",
        TextKey::CoordsDifference => "Différence de position",
        TextKey::Galaxy => "galaxie",
        TextKey::Galaxies => "galaxies",
        TextKey::System => "système",
        TextKey::Systems => "systèmes",
        TextKey::PositionFixed => "Les coordonnées de position sont toujours réglées sur 16 !",
        TextKey::IgnoreSystems => "Ignorer les systèmes (vides/inactifs)",
        TextKey::SelectedSpeed => "Vitesse sélectionnée",
        TextKey::Peaceful => "pacifique",
        TextKey::War => "guerre",
        TextKey::Holding => "attente",
        TextKey::FleetSpeed => "vitesse de la flotte.",
        TextKey::OneWay => "Durée de vol à sens unique sélectionnée",
        TextKey::TwoWay => "Durée de vol aller-retour sélectionnée",
        TextKey::Arrival => "Heure d'arrivée sélectionnée",
        TextKey::Return => "Heure de retour sélectionnée",
        TextKey::SpeedModifier => "Modificateur de vitesse",
        TextKey::Selected => "Sélectionné",
        TextKey::ShipSuffix => " vaisseau:",
        TextKey::First => "premier",
        TextKey::Second => "deuxième",
        TextKey::Third => "troisième",
        TextKey::Speed => "vitesse",
        TextKey::SpeedNeverRefreshed => concat!(
            "ATTENTION : La vitesse du vaisseau n'est pas mise à jour !\n",
            "Allez à la page de la flotte pour mettre à jour les valeurs de vitesse."
        ),
        TextKey::SpeedStale => "Les vitesses des vaisseaux datent d'un autre jour.",
        TextKey::SavedSpeeds => "Valeurs de vitesse enregistrées",
        TextKey::UniverseSettings => "Paramètres de l'univers",
        TextKey::FleetSpeeds => "Vitesse de la flotte pacifique/guerrière/d'attente",
        TextKey::Donut => "Galaxie/système Donut",
        TextKey::GalaxyCount => "Nombre de galaxies",
        TextKey::IgnoreSystemsSetting => "Ignorer les systèmes vides/inactifs",
    }
}

fn italian_text(key: TextKey) -> &'static str {
    match key {
        TextKey::Distance => "Distanza",
        TextKey::CoordsDifference => "Differenza di posizione",
        TextKey::Galaxy => "galassia",
        TextKey::Galaxies => "galassie",
        TextKey::System => "sistema",
        TextKey::Systems => "sistemi",
        TextKey::PositionFixed => "Le coordinate di posizione sono sempre impostate su 16!",
        TextKey::IgnoreSystems => "Ignora sistemi (vuoti/inattivi)",
        TextKey::SelectedSpeed => "Velocità di flotta selezionata",
        TextKey::Peaceful => "Pacifica",
        TextKey::War => "Guerra",
        TextKey::Holding => "Stazionamento",
        TextKey::FleetSpeed => "",
        TextKey::OneWay => "Durata selezionata del volo in andata",
        TextKey::TwoWay => "Durata selezionata del volo andata e ritorno",
        TextKey::Arrival => "Orario di arrivo selezionato",
        TextKey::Return => "Orario di ritorno selezionato",
        TextKey::SpeedModifier => "Modificatore di velocità",
        TextKey::Selected => "Nave selezionata",
        TextKey::ShipSuffix => ":",
        TextKey::First => "primo",
        TextKey::Second => "secondo",
        TextKey::Third => "terzo",
        TextKey::Speed => "Velocità",
        TextKey::SpeedNeverRefreshed => concat!(
            "ATTENZIONE: La velocità della nave non è aggiornata!\n",
            "Vai alla pagina Flotta per aggiornare i valori di velocità."
        ),
        TextKey::SpeedStale => "Le velocità delle navi risalgono a un altro giorno.",
        TextKey::SavedSpeeds => "Valori di velocità salvati",
        TextKey::UniverseSettings => "Impostazioni universo",
        TextKey::FleetSpeeds => "Velocità della flotta Pacifica/Guerra/Stazionamento",
        TextKey::Donut => "Galassia/Sistema circolare",
        TextKey::GalaxyCount => "Numero di galassie",
        TextKey::IgnoreSystemsSetting => "Ignora Sistemi Vuoti/Inattivi",
    }
}

fn portuguese_text(key: TextKey) -> &'static str {
    match key {
        TextKey::Distance => "Distância",
        TextKey::CoordsDifference => "Diferença de posição",
        TextKey::Galaxy => "galáxia",
        TextKey::Galaxies => "galáxias",
        TextKey::System => "sistema",
        TextKey::Systems => "sistemas",
        TextKey::PositionFixed => "As coordenadas da posição são sempre definidas como 16!",
        TextKey::IgnoreSystems => "Ignorar sistemas (vazios/inativos)",
        TextKey::SelectedSpeed => "Velocidade selecionada",
        TextKey::Peaceful => "pacífica",
        TextKey::War => "agressiva",
        TextKey::Holding => "manter",
        TextKey::FleetSpeed => "",
        TextKey::OneWay => "Duração do voo só de ida selecionada",
        TextKey::TwoWay => "Duração do voo ida e volta selecionada",
        TextKey::Arrival => "Hora de chegada selecionada",
        TextKey::Return => "Tempo de retorno selecionado",
        TextKey::SpeedModifier => "Modificador de velocidade",
        TextKey::Selected => "Selecionado",
        TextKey::ShipSuffix => " nave:",
        TextKey::First => "primeira",
        TextKey::Second => "segunda",
        TextKey::Third => "terceira",
        TextKey::Speed => "Velocidade",
        TextKey::SpeedNeverRefreshed => concat!(
            "AVISO: A velocidade da nave não é atualizada! ",
            "Vá para a página Fleet (Frota) para atualizar os valores de velocidade."
        ),
        TextKey::SpeedStale => "As velocidades das naves são de outro dia.",
        TextKey::SavedSpeeds => "Valores de velocidade salvos",
        TextKey::UniverseSettings => "Configurações do universo",
        TextKey::FleetSpeeds => "Velocidade da frota pacífica/agressiva/manter",
        TextKey::Donut => "Galáxia/sistema circular",
        TextKey::GalaxyCount => "Número de galáxias",
        TextKey::IgnoreSystemsSetting => "Ignorar sistemas vazios/inativos",
    }
}

fn slovenian_text(key: TextKey) -> &'static str {
    match key {
        TextKey::Distance => "Razdalja",
        TextKey::CoordsDifference => "Razlika v poziciji",
        TextKey::Galaxy => "galaksija",
        TextKey::Galaxies => "galaksije",
        TextKey::System => "osončje",
        TextKey::Systems => "osončij",
        TextKey::PositionFixed => "Koordinate za pozicijo so vedno nastavljene na 16!",
        TextKey::IgnoreSystems => "Ignoriraj osončja (prazna/neaktivna)",
        TextKey::SelectedSpeed => "Izbrana hitrost",
        TextKey::Peaceful => "miroljubna",
        TextKey::War => "vojna",
        TextKey::Holding => "obrambna",
        TextKey::FleetSpeed => "hitrost.",
        TextKey::OneWay => "Izbrano je trajanje leta v eno smer",
        TextKey::TwoWay => "Izbrano je trajanje leta v obe smeri",
        TextKey::Arrival => "Izbran je čas prihoda",
        TextKey::Return => "Izbran je čas vrnitve",
        TextKey::SpeedModifier => "Modifikator hitrosti",
        TextKey::Selected => "Izbrana",
        TextKey::ShipSuffix => " ladja:",
        TextKey::First => "prva",
        TextKey::Second => "druga",
        TextKey::Third => "tretja",
        TextKey::Speed => "Hitrost",
        TextKey::SpeedNeverRefreshed => concat!(
            "POZOR: Hitrost ladje ni posodobljena!\n",
            "Pojdite na stran Flote, da posodobite vrednosti hitrosti."
        ),
        TextKey::SpeedStale => "Hitrosti ladij so z drugega dne.",
        TextKey::SavedSpeeds => "Shranjene vrednosti hitrosti",
        TextKey::UniverseSettings => "Nastavitve vesolja",
        TextKey::FleetSpeeds => "Miroljubna/vojna/obrambna hitrost flote",
        TextKey::Donut => "Krožna galaksija/osončja",
        TextKey::GalaxyCount => "Števijo galaksij",
        TextKey::IgnoreSystemsSetting => "Ignoriraj prazna/neaktivna osončja",
    }
}

fn english_ship(ship: ShipClass) -> (&'static str, &'static str) {
    match ship {
        ShipClass::LightFighter => ("Light Fighter", "LF"),
        ShipClass::HeavyFighter => ("Heavy Fighter", "HF"),
        ShipClass::Cruiser => ("Cruiser", "Cruiser"),
        ShipClass::Battleship => ("Battleship", "BS"),
        ShipClass::Battlecruiser => ("Battlecruiser", "BC"),
        ShipClass::Bomber => ("Bomber", "Bomber"),
        ShipClass::Destroyer => ("Destroyer", "Destro."),
        ShipClass::Deathstar => ("Deathstar", "RIP"),
        ShipClass::Reaper => ("Reaper", "Reaper"),
        ShipClass::Pathfinder => ("Pathfinder", "PF"),
        ShipClass::SmallCargo => ("Small Cargo", "SC"),
        ShipClass::LargeCargo => ("Large Cargo", "LC"),
        ShipClass::ColonyShip => ("Colony Ship", "Colony S."),
        ShipClass::Recycler => ("Recycler", "Recycler"),
        ShipClass::EspionageProbe => ("Espionage Probe", "Probe"),
    }
}

fn german_ship(ship: ShipClass) -> (&'static str, &'static str) {
    match ship {
        ShipClass::LightFighter => ("Leichter Jäger", "L. Jäger"),
        ShipClass::HeavyFighter => ("Schwerer Jäger", "S. Jäger"),
        ShipClass::Cruiser => ("Kreuzer", "Kreuzer"),
        ShipClass::Battleship => ("Schlachtschiff", "SS"),
        ShipClass::Battlecruiser => ("Schlachtkreuzer", "SK"),
        ShipClass::Bomber => ("Bomber", "Bomber"),
        ShipClass::Destroyer => ("Zerstörer", "Zerstörer"),
        ShipClass::Deathstar => ("Todesstern", "RIP"),
        ShipClass::Reaper => ("Reaper", "Reaper"),
        ShipClass::Pathfinder => ("Pathfinder", "PF"),
        ShipClass::SmallCargo => ("Kleiner Transporter", "KT"),
        ShipClass::LargeCargo => ("Großer Transporter", "GT"),
        ShipClass::ColonyShip => ("Kolonieschiff", "Kolonies."),
        ShipClass::Recycler => ("Recycler", "Recycler"),
        ShipClass::EspionageProbe => ("Spionagesonde", "Sonde"),
    }
}

fn french_ship(ship: ShipClass) -> (&'static str, &'static str) {
    match ship {
        ShipClass::LightFighter => ("Chasseur léger", "C. léger"),
        ShipClass::HeavyFighter => ("Chasseur lourd", "C. lourd"),
        ShipClass::Cruiser => ("Croiseur", "Croiseur"),
        ShipClass::Battleship => ("Vaisseau de bataille", "VB"),
        ShipClass::Battlecruiser => ("Traqueur", "Traqueur"),
        ShipClass::Bomber => ("Bombardier", "Bombar."),
        ShipClass::Destroyer => ("Destructeur", "Destru."),
        ShipClass::Deathstar => ("Étoile de la mort", "RIP"),
        ShipClass::Reaper => ("Faucheur", "Faucheur"),
        ShipClass::Pathfinder => ("Éclaireur", "Éclaireur"),
        ShipClass::SmallCargo => ("Petit transporteur", "PT"),
        ShipClass::LargeCargo => ("Grand transporteur", "GT"),
        ShipClass::ColonyShip => ("Vaisseau de colonisation", "V. de colo."),
        ShipClass::Recycler => ("Recycleur", "Recycleur"),
        ShipClass::EspionageProbe => ("Sonde d'espionnage", "Sonde"),
    }
}

fn italian_ship(ship: ShipClass) -> (&'static str, &'static str) {
    match ship {
        ShipClass::LightFighter => ("Caccia Leggero", "Caccia L"),
        ShipClass::HeavyFighter => ("Caccia Pesante", "Caccia P"),
        ShipClass::Cruiser => ("Incrociatore", "Incroc."),
        ShipClass::Battleship => ("Nave da battaglia", "Nave Batt"),
        ShipClass::Battlecruiser => ("Incrociatore da Battaglia", "Incr Batt"),
        ShipClass::Bomber => ("Bombardiere", "Bomb"),
        ShipClass::Destroyer => ("Corazzata", "Corazzata"),
        ShipClass::Deathstar => ("Morte Nera", "RIP"),
        ShipClass::Reaper => ("Reaper", "Reaper"),
        ShipClass::Pathfinder => ("Pathfinder", "PF"),
        ShipClass::SmallCargo => ("Cargo leggero", "Cargo L"),
        ShipClass::LargeCargo => ("Cargo Pesante", "Cargo P"),
        ShipClass::ColonyShip => ("Colonizzatrice", "Colonizz."),
        ShipClass::Recycler => ("Riciclatrici", "Ricicl"),
        ShipClass::EspionageProbe => ("Sonda spia", "Sonda"),
    }
}

fn portuguese_ship(ship: ShipClass) -> (&'static str, &'static str) {
    match ship {
        ShipClass::LightFighter => ("Caça Ligeiro", "CL"),
        ShipClass::HeavyFighter => ("Caça Pesado", "CP"),
        ShipClass::Cruiser => ("Cruzador", "Cruzador"),
        ShipClass::Battleship => ("Nave de Batalha", "NB"),
        ShipClass::Battlecruiser => ("Interceptador", "Inter"),
        ShipClass::Bomber => ("Bombardeiro", "BB"),
        ShipClass::Destroyer => ("Destruidor", "DD"),
        ShipClass::Deathstar => ("Estrela da Morte", "EdM"),
        ShipClass::Reaper => ("Ceifeira", "Ceifeira"),
        ShipClass::Pathfinder => ("Explorador", "Explor"),
        ShipClass::SmallCargo => ("Cargueiro Pequeno", "Cargo P"),
        ShipClass::LargeCargo => ("Cargueiro Grande", "Cargo G"),
        ShipClass::ColonyShip => ("Nave Colonizadora", "Nave Colo"),
        ShipClass::Recycler => ("Reciclador", "Reciclador"),
        ShipClass::EspionageProbe => ("Sonda de Espionagem", "Sonda"),
    }
}

fn slovenian_ship(ship: ShipClass) -> (&'static str, &'static str) {
    match ship {
        ShipClass::LightFighter => ("Lahek lovec", "L. lovec"),
        ShipClass::HeavyFighter => ("Težki lovec", "T. lovec"),
        ShipClass::Cruiser => ("Križarka", "Križarka"),
        ShipClass::Battleship => ("Bojna ladja", "BL"),
        ShipClass::Battlecruiser => ("Bojna križarka", "BK"),
        ShipClass::Bomber => ("Bombnik", "Bombnik"),
        ShipClass::Destroyer => ("Uničevalec", "Unič."),
        ShipClass::Deathstar => ("Zvezda smrti", "RIP"),
        ShipClass::Reaper => ("Kombajn", "Kombajn"),
        ShipClass::Pathfinder => ("Iskalec sledi", "IS"),
        ShipClass::SmallCargo => ("Majhna tovorna ladja", "MTL"),
        ShipClass::LargeCargo => ("Velika tovorna ladja", "VTL"),
        ShipClass::ColonyShip => ("Kolonizacijska ladja", "Koloni. l."),
        ShipClass::Recycler => ("Recikler", "Recikler"),
        ShipClass::EspionageProbe => ("Vohunska sonda", "Sonda"),
    }
}
