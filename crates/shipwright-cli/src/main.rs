use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shipwright_lib::{
    compose_armament, run_search, ArmamentSpec, Catalog, ChassisLayout, Design, EngineParity,
    Error as LibError, Interval, IntervalMode, SearchParams,
};

mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Exhaustive loadout search for a fixed armament"
)]
struct Cli {
    /// Fixed engine count, e.g. `4` or `2:6`.
    #[arg(short = 'f', long, value_parser = exact_i32, default_value = "2:6")]
    fixed_engines: Interval<i32>,

    /// Vectoring engine count, e.g. `8` or `1:32`.
    #[arg(short = 'e', long, value_parser = exact_i32, default_value = "1:32")]
    engines: Interval<i32>,

    /// Thrust-to-weight ratio constraint; a bare value means at least.
    #[arg(short = 't', long, value_parser = at_least_f32, default_value = "1.1:")]
    twr: Interval<f32>,

    /// Horizontal thrust-to-weight ratio constraint; a bare value means at least.
    #[arg(long, value_parser = at_least_f32, default_value = "0:")]
    horizontal_twr: Interval<f32>,

    /// Hourly fuel usage constraint in tons; a bare value means at most.
    #[arg(short = 'F', long, value_parser = at_most_f32, default_value = "0:")]
    fuel_usage: Interval<f32>,

    /// Cost constraint in gold; a bare value means at most.
    #[arg(short = 'c', long, value_parser = at_most_i32, default_value = "0:")]
    cost: Interval<i32>,

    /// Combat endurance target in seconds.
    #[arg(short = 'T', long, default_value_t = 200.0)]
    combat_time: f32,

    /// Armor layers to fit, 0 to 16.
    #[arg(short = 'a', long, value_parser = armor_layers, default_value_t = 0.0)]
    armor: f32,

    /// Fire suppressors to fit.
    #[arg(short = 'x', long, default_value_t = 2)]
    extinguishers: u32,

    /// Flat mass offset applied to every candidate, in tons.
    #[arg(long, default_value_t = 0.0)]
    extra_mass: f32,

    /// Flat power draw offset applied to every candidate.
    #[arg(long, default_value_t = 0.0)]
    extra_power: f32,

    /// Fraction of the power draw that must be generated.
    #[arg(short = 'p', long, default_value_t = 1.0)]
    power_fraction: f32,

    /// Consider large fuel tanks; a second pass still surfaces
    /// small-tank-only designs.
    #[arg(long)]
    big_tanks: bool,

    /// Consider large fixed engines and enumerate the fixed split.
    #[arg(long)]
    big_engines: bool,

    /// Explicit chassis layout as `groups:l1,l2,l3,l4`.
    #[arg(long, value_parser = chassis_layout)]
    chassis: Option<ChassisLayout>,

    /// Parity required of the small vectoring engine count.
    #[arg(long, value_enum, default_value = "any")]
    parity: ParityArg,

    /// Stop after this many reported designs.
    #[arg(short = 'n', long = "matches")]
    matches: Option<usize>,

    /// Report only the first design.
    #[arg(short = '1', long = "first", conflicts_with = "matches")]
    first: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "pretty")]
    format: OutputFormat,

    /// List the known gun names and exit.
    #[arg(long)]
    list_guns: bool,

    /// Armament tokens, e.g. `2:130mm 1:57mm`.
    #[arg(value_name = "COUNT:GUN", required_unless_present = "list_guns")]
    armament: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ParityArg {
    Any,
    Even,
    Odd,
}

impl From<ParityArg> for EngineParity {
    fn from(parity: ParityArg) -> Self {
        match parity {
            ParityArg::Any => EngineParity::Any,
            ParityArg::Even => EngineParity::Even,
            ParityArg::Odd => EngineParity::Odd,
        }
    }
}

fn exact_i32(text: &str) -> Result<Interval<i32>, String> {
    Interval::parse(text, IntervalMode::Exact).map_err(|error| error.to_string())
}

fn at_most_i32(text: &str) -> Result<Interval<i32>, String> {
    Interval::parse(text, IntervalMode::AtMost).map_err(|error| error.to_string())
}

fn at_least_f32(text: &str) -> Result<Interval<f32>, String> {
    Interval::parse(text, IntervalMode::AtLeast).map_err(|error| error.to_string())
}

fn at_most_f32(text: &str) -> Result<Interval<f32>, String> {
    Interval::parse(text, IntervalMode::AtMost).map_err(|error| error.to_string())
}

fn armor_layers(text: &str) -> Result<f32, String> {
    let layers: f32 = text
        .parse()
        .map_err(|_| format!("invalid layer count '{text}'"))?;
    if !layers.is_finite() || !(0.0..=16.0).contains(&layers) {
        return Err(format!("layer count must be within 0..=16, got '{text}'"));
    }
    Ok(layers)
}

fn chassis_layout(text: &str) -> Result<ChassisLayout, String> {
    ChassisLayout::parse(text).map_err(|error| error.to_string())
}

const NO_DESIGN_EXIT: u8 = 1;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("shipwright: {error:#}");
            let code = error
                .downcast_ref::<LibError>()
                .map(LibError::exit_code)
                .unwrap_or(2);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let catalog = Catalog::builtin().context("failed to build the part catalog")?;

    if cli.list_guns {
        for name in catalog.gun_names() {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut base = Design::new(&catalog);
    for token in &cli.armament {
        let spec = ArmamentSpec::parse(token)?;
        compose_armament(&catalog, &mut base, &spec)
            .with_context(|| format!("failed to compose armament '{token}'"))?;
    }

    let num_matches = if cli.first {
        1
    } else {
        cli.matches.unwrap_or(usize::MAX)
    };
    let params = SearchParams {
        twr: cli.twr,
        horizontal_twr: cli.horizontal_twr,
        engines: cli.engines,
        fixed_engines: cli.fixed_engines,
        fuel_usage: cli.fuel_usage,
        cost: cli.cost,
        combat_time: cli.combat_time,
        power_fraction: cli.power_fraction,
        armor_layers: cli.armor,
        extra_mass: cli.extra_mass,
        extra_power: cli.extra_power,
        extinguishers: cli.extinguishers,
        num_matches,
        engine_parity: cli.parity.into(),
        use_big_tanks: cli.big_tanks,
        use_big_engines: cli.big_engines,
        chassis: cli.chassis.unwrap_or_default(),
    };

    let mut reporter = output::reporter(cli.format);
    let accepted = run_search(&catalog, &base, &params, reporter.as_mut())?;
    if accepted == 0 {
        eprintln!("shipwright: no feasible design within the given constraints");
        return Ok(ExitCode::from(NO_DESIGN_EXIT));
    }

    info!(accepted, "search complete");
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
