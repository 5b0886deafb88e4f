//! `rfcalc` command-line entry point.

use clap::{ArgAction, Args, Parser, Subcommand};
use rfcalc_engine::{
    CapacityParams, CoverageParams, DensityParams, DimensioningParams, LinkParams,
    ShannonParams, TrafficParams,
};
use rfcalc_runner::logging::init_logging;
use rfcalc_runner::{
    load_scenarios, render_report, run_scenarios, Calculation, PowerInput, Scenario,
    ScenarioError, ScenarioReport,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "rfcalc", version, about = "RF and wireless network calculators")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert between dB, dBm, W and mW
    Power(PowerArgs),
    /// Size an access point deployment
    Dimension(DimensionArgs),
    /// Estimate bitrate and bandwidth for a device population
    Traffic(TrafficArgs),
    /// Shannon capacity, practical speed and transfer time
    Throughput(ThroughputArgs),
    /// Free-space path loss, Fresnel zone and link budget
    Link(LinkArgs),
    /// Evaluate every scenario in a YAML file
    Batch {
        /// Path to the scenario file
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct PowerArgs {
    /// Level in dB (re 1 W)
    #[arg(long, allow_negative_numbers = true)]
    db: Option<f64>,
    /// Level in dBm
    #[arg(long, allow_negative_numbers = true)]
    dbm: Option<f64>,
    /// Power in watts
    #[arg(long, allow_negative_numbers = true)]
    watts: Option<f64>,
}

#[derive(Args, Debug)]
struct DimensionArgs {
    /// Floor area to cover (m²)
    #[arg(long)]
    area: Option<f64>,
    /// Coverage radius of one AP (m)
    #[arg(long)]
    radius: Option<f64>,
    /// Total users
    #[arg(long)]
    users: Option<u64>,
    /// Users served per AP
    #[arg(long)]
    users_per_ap: Option<u64>,
    /// Zone area for density sizing (m²)
    #[arg(long)]
    zone_area: Option<f64>,
    /// Required APs per 10 000 m²
    #[arg(long = "aps-per-10k")]
    aps_per_10k: Option<f64>,
}

#[derive(Args, Debug)]
struct TrafficArgs {
    /// Simultaneously active devices
    #[arg(long)]
    devices: Option<u64>,
    /// Bytes per device in the window
    #[arg(long)]
    bytes: Option<f64>,
    /// Window length (s)
    #[arg(long, allow_negative_numbers = true)]
    window: Option<f64>,
}

#[derive(Args, Debug)]
struct ThroughputArgs {
    /// Channel bandwidth (MHz)
    #[arg(long)]
    bandwidth: Option<f64>,
    /// SNR (dB)
    #[arg(long, allow_negative_numbers = true)]
    snr: Option<f64>,
    /// File size (MB)
    #[arg(long)]
    file_size: Option<f64>,
}

#[derive(Args, Debug)]
struct LinkArgs {
    /// Distance between antennas (m)
    #[arg(long)]
    distance: Option<f64>,
    /// Frequency (GHz)
    #[arg(long)]
    frequency: Option<f64>,
    /// TX power (dBm)
    #[arg(long, allow_negative_numbers = true)]
    tx_power: Option<f64>,
    /// Gain of each antenna (dB)
    #[arg(long, allow_negative_numbers = true)]
    gain: Option<f64>,
    /// Cable attenuation (dB)
    #[arg(long)]
    cable: Option<f64>,
}

impl DimensionArgs {
    fn into_params(self) -> DimensioningParams {
        let defaults = DimensioningParams::default();
        DimensioningParams {
            coverage: CoverageParams {
                area_size_m2: self.area.unwrap_or(defaults.coverage.area_size_m2),
                ap_radius_m: self.radius.unwrap_or(defaults.coverage.ap_radius_m),
            },
            capacity: CapacityParams {
                total_users: self.users.unwrap_or(defaults.capacity.total_users),
                users_per_ap: self.users_per_ap.unwrap_or(defaults.capacity.users_per_ap),
            },
            density: DensityParams {
                zone_area_m2: self.zone_area.unwrap_or(defaults.density.zone_area_m2),
                aps_per_10k_m2: self.aps_per_10k.unwrap_or(defaults.density.aps_per_10k_m2),
            },
        }
    }
}

impl TrafficArgs {
    fn into_params(self) -> TrafficParams {
        let defaults = TrafficParams::default();
        TrafficParams {
            active_devices: self.devices.unwrap_or(defaults.active_devices),
            bytes_per_device: self.bytes.unwrap_or(defaults.bytes_per_device),
            window_seconds: self.window.unwrap_or(defaults.window_seconds),
        }
    }
}

impl ThroughputArgs {
    fn into_params(self) -> ShannonParams {
        let defaults = ShannonParams::default();
        ShannonParams {
            bandwidth_mhz: self.bandwidth.unwrap_or(defaults.bandwidth_mhz),
            snr_db: self.snr.unwrap_or(defaults.snr_db),
            file_size_mb: self.file_size.unwrap_or(defaults.file_size_mb),
        }
    }
}

impl LinkArgs {
    fn into_params(self) -> LinkParams {
        let defaults = LinkParams::default();
        LinkParams {
            distance_m: self.distance.unwrap_or(defaults.distance_m),
            frequency_ghz: self.frequency.unwrap_or(defaults.frequency_ghz),
            tx_power_dbm: self.tx_power.unwrap_or(defaults.tx_power_dbm),
            antenna_gain_db: self.gain.unwrap_or(defaults.antenna_gain_db),
            cable_attenuation_db: self.cable.unwrap_or(defaults.cable_attenuation_db),
        }
    }
}

fn single(name: &str, calculation: Calculation) -> Vec<Scenario> {
    vec![Scenario {
        name: name.to_string(),
        calculation,
    }]
}

fn scenarios_for(command: Command) -> Result<Vec<Scenario>, ScenarioError> {
    let scenarios = match command {
        Command::Power(args) => single(
            "power",
            Calculation::Power(PowerInput {
                db: args.db,
                dbm: args.dbm,
                watts: args.watts,
            }),
        ),
        Command::Dimension(args) => {
            single("dimension", Calculation::Dimensioning(args.into_params()))
        }
        Command::Traffic(args) => single("traffic", Calculation::Traffic(args.into_params())),
        Command::Throughput(args) => {
            single("throughput", Calculation::Throughput(args.into_params()))
        }
        Command::Link(args) => single("link", Calculation::Link(args.into_params())),
        Command::Batch { file } => load_scenarios(file)?,
    };
    Ok(scenarios)
}

fn print_reports(reports: &[ScenarioReport], json: bool) -> Result<(), ScenarioError> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            print!("{}", render_report(report));
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<bool, ScenarioError> {
    let scenarios = scenarios_for(cli.command)?;
    debug!("Running {} scenarios", scenarios.len());

    let reports = run_scenarios(&scenarios);
    print_reports(&reports, cli.json)?;
    Ok(reports.iter().all(ScenarioReport::is_ok))
}

fn fatal_message(e: &ScenarioError) -> String {
    match e.field() {
        Some(field) => format!("Error: {} (input: {})", e, field),
        None => format!("Error: {}", e),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", fatal_message(&e));
            ExitCode::FAILURE
        }
    }
}
