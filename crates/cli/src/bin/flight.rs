use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{Local, Timelike};
use clap::{Parser, ValueEnum};
use galaxy_flight_duration::config::{PlayerSettings, ShipSlot, load_server_metadata};
use galaxy_flight_duration::core::{ClockTime, Coordinate};
use galaxy_flight_duration::distance::IgnoredSystems;
use galaxy_flight_duration::export;
use galaxy_flight_duration::flight::{FleetSpeedType, SpeedScale, TripDirective};
use galaxy_flight_duration::overlay::{
    BuiltinLocale, Catalog, GalaxyView, Localizer, OverlayInputs, RecomputeTrigger, RenderModel,
    ShipLine, ShipWarning, TextKey, fleet_table, info_summary, recompute,
};
use galaxy_flight_duration::ships::{ShipClass, ShipSpeedCache};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Flight durations from your planet to the system open in the galaxy view"
)]
struct Cli {
    /// Server metadata file (TOML, JSON or YAML)
    #[arg(long)]
    server: PathBuf,

    /// Origin planet as `g:s:p`
    #[arg(long)]
    from: Option<Coordinate>,

    /// Galaxy view destination as `g:s` (position is always 16)
    #[arg(long)]
    to: Option<String>,

    /// Ship per slot, by name (`lightFighter`) or id (`204`); up to three
    #[arg(long = "ship")]
    ships: Vec<ShipClass>,

    /// What to show for each ship
    #[arg(long, value_enum)]
    directive: Option<DirectiveArg>,

    /// Which server fleet speed applies
    #[arg(long, value_enum)]
    fleet_speed: Option<FleetSpeedArg>,

    /// Speed modifier step (0 = 100%, 1 = 90% or 95% for the General class)
    #[arg(long)]
    modifier: Option<usize>,

    /// Player has the General class (5% modifier steps)
    #[arg(long, default_value_t = false)]
    general: bool,

    /// Stored player settings (JSON); flags above override it
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Ship speed cache (JSON); defaults to manufacturer speeds
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Empty systems that may be skipped on the way
    #[arg(long)]
    empty: Option<u32>,

    /// Inactive systems that may be skipped on the way
    #[arg(long)]
    inactive: Option<u32>,

    /// Label language (`en`, `de`, `fr`, `it`, `br`, `si`)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Translation catalog overriding the built-in labels
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Current time as `HH:MM:SS` (defaults to the local clock)
    #[arg(long)]
    now: Option<ClockTime>,

    /// Today's marker for speed freshness (defaults to the local date)
    #[arg(long)]
    day: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the output to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// List every ship class instead of the three selected ones
    #[arg(long, default_value_t = false)]
    all_ships: bool,

    /// Print saved speeds and universe settings, then exit
    #[arg(long, default_value_t = false)]
    info: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum DirectiveArg {
    OneWay,
    TwoWay,
    Arrival,
    Return,
}

impl From<DirectiveArg> for TripDirective {
    fn from(arg: DirectiveArg) -> Self {
        match arg {
            DirectiveArg::OneWay => Self::OneWay,
            DirectiveArg::TwoWay => Self::TwoWay,
            DirectiveArg::Arrival => Self::Arrival,
            DirectiveArg::Return => Self::Return,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum FleetSpeedArg {
    Peaceful,
    War,
    Holding,
}

impl From<FleetSpeedArg> for FleetSpeedType {
    fn from(arg: FleetSpeedArg) -> Self {
        match arg {
            FleetSpeedArg::Peaceful => Self::Peaceful,
            FleetSpeedArg::War => Self::War,
            FleetSpeedArg::Holding => Self::Holding,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let server = load_server_metadata(&cli.server)
        .with_context(|| format!("loading server metadata from {}", cli.server.display()))?;
    let cache = match &cli.cache {
        Some(path) => ShipSpeedCache::load_json(path)
            .with_context(|| format!("loading speed cache from {}", path.display()))?,
        None => ShipSpeedCache::new(),
    };
    let locale = load_locale(&cli)?;
    let mut out = export::output_writer(cli.output.as_deref())
        .context("opening output destination")?;

    if cli.info {
        write!(out, "{}", info_summary(&server, &cache, locale.as_ref()))?;
        out.flush()?;
        return Ok(());
    }

    let (Some(origin), Some(to)) = (cli.from, cli.to.as_deref()) else {
        bail!("--from and --to are required unless --info is given");
    };
    let view = parse_view(to)?;
    let settings = player_settings(&cli)?;
    let ignored = (cli.empty.is_some() || cli.inactive.is_some()).then(|| IgnoredSystems {
        empty: cli.empty.unwrap_or_default(),
        inactive: cli.inactive.unwrap_or_default(),
    });
    let day = cli
        .day
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let now = match cli.now {
        Some(now) => now,
        None => local_clock()?,
    };

    let inputs = OverlayInputs {
        server: &server,
        origin,
        view,
        settings: &settings,
        general_class: cli.general,
        ignored,
        now: Some(now),
        day_marker: Some(&day),
    };
    debug!(%origin, galaxy = view.galaxy, system = view.system, "computing flight durations");

    let locale = locale.as_ref();
    match cli.format {
        OutputFormat::Csv => {
            let lines = if cli.all_ships {
                fleet_table(&inputs, &cache, locale)?
            } else {
                recompute(RecomputeTrigger::InitialLoad, &inputs, &cache, locale)?.ships
            };
            export::csv::write_flight_table(out, &lines)?;
        }
        OutputFormat::Json => {
            let model = recompute(RecomputeTrigger::InitialLoad, &inputs, &cache, locale)?;
            export::json::write_render_model(out, &model)?;
        }
        OutputFormat::Text => {
            let model = recompute(RecomputeTrigger::InitialLoad, &inputs, &cache, locale)?;
            let lines = if cli.all_ships {
                Some(fleet_table(&inputs, &cache, locale)?)
            } else {
                None
            };
            print_text(&mut out, &model, lines.as_deref(), locale)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn load_locale(cli: &Cli) -> anyhow::Result<Box<dyn Localizer>> {
    let locale: Box<dyn Localizer> = match &cli.catalog {
        Some(path) => Box::new(
            Catalog::load(path)
                .with_context(|| format!("loading catalog from {}", path.display()))?,
        ),
        None => Box::new(BuiltinLocale::for_language(&cli.lang)),
    };
    Ok(locale)
}

/// Parse a galaxy view selection, `g:s`.
fn parse_view(text: &str) -> anyhow::Result<GalaxyView> {
    let Some((galaxy, system)) = text.trim().split_once(':') else {
        bail!("galaxy view must look like `g:s`, got `{text}`");
    };
    let view = GalaxyView {
        galaxy: galaxy.parse().context("galaxy must be a number")?,
        system: system.parse().context("system must be a number")?,
    };
    if view.galaxy == 0 || view.system == 0 {
        bail!("galaxy and system must be at least 1");
    }
    Ok(view)
}

fn player_settings(cli: &Cli) -> anyhow::Result<PlayerSettings> {
    let mut settings = match &cli.settings {
        Some(path) => PlayerSettings::load_json(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => PlayerSettings::default(),
    };
    if cli.ships.len() > ShipSlot::ALL.len() {
        bail!("at most {} ships can be selected", ShipSlot::ALL.len());
    }
    for (slot, ship) in ShipSlot::ALL.into_iter().zip(&cli.ships) {
        settings.select_ship(slot, *ship);
    }
    if let Some(directive) = cli.directive {
        let directive = TripDirective::from(directive);
        settings.briefing = TripDirective::ALL
            .iter()
            .position(|candidate| *candidate == directive)
            .unwrap_or_default();
    }
    if let Some(kind) = cli.fleet_speed {
        let kind = FleetSpeedType::from(kind);
        settings.fleet_speed_type = FleetSpeedType::ALL
            .iter()
            .position(|candidate| *candidate == kind)
            .unwrap_or_default();
    }
    if let Some(modifier) = cli.modifier {
        settings.speed_modifier = modifier;
    }
    settings.normalize(SpeedScale::for_general_class(cli.general));
    Ok(settings)
}

fn local_clock() -> anyhow::Result<ClockTime> {
    let now = Local::now();
    Ok(ClockTime::new(now.hour(), now.minute(), now.second())?)
}

fn print_text(
    out: &mut impl Write,
    model: &RenderModel,
    all_ships: Option<&[ShipLine]>,
    locale: &dyn Localizer,
) -> io::Result<()> {
    let delta = model.distance.report.effective();
    writeln!(
        out,
        "{}: {}  ({}:{}:{})",
        locale.text(TextKey::Distance),
        model.distance.report.distance,
        delta.g,
        delta.s,
        delta.p
    )?;
    writeln!(
        out,
        "{} x{}  |  {}  |  {} {}%",
        locale.text(TextKey::for_fleet_speed(model.fleet_speed.kind)),
        model.fleet_speed.multiplier,
        model.directive_title,
        locale.text(TextKey::SpeedModifier),
        model.speed_modifier.percent
    )?;
    let lines = all_ships.unwrap_or(&model.ships);
    for line in lines {
        writeln!(out, "{:<10} {:>10}  {}", line.label, line.speed, line.briefing)?;
    }
    match lines.iter().find_map(|line| line.warning) {
        Some(ShipWarning::SpeedNeverRefreshed) => {
            writeln!(out, "{}", locale.text(TextKey::SpeedNeverRefreshed))?
        }
        Some(ShipWarning::SpeedStale) => writeln!(out, "{}", locale.text(TextKey::SpeedStale))?,
        None => {}
    }
    Ok(())
}
