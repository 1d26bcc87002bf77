use super::{Cli, CliError, Command, DoseInput, MissionArgs};
use crate::dosimetry::{
    biology::{AgeGroup, CellType, Organ, Sex, compute_dna_damage, compute_organ_risk},
    dose::{DoseResult, MissionParameters, compute_dose},
    environment::{FlightRoute, adjust_for_environment, compute_flight_dose},
    shielding::ShieldingMaterial,
};
use crate::flux::{
    Dataset, Experiment, FluxReading, Particle, default_file_name, export_csv, fetch_dataset,
    flux_provider, kp_provider,
};
use crate::{info, log, warn};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use strum_macros::Display;

/// What `explore` ended up showing.
#[derive(Debug, Display, PartialEq, Eq)]
pub(super) enum ExploreOutcome {
    #[strum(to_string = "Failed to retrieve data for {particle} from {experiment}")]
    FetchFailed { experiment: Experiment, particle: Particle },
    #[strum(to_string = "No datasets found for this selection.")]
    NoDatasets,
    #[strum(to_string = "No valid flux data available.")]
    NoValidPoints,
    #[strum(to_string = "{points} points listed")]
    Listed { points: usize },
}

/// Executes the parsed command line.
///
/// # Errors
/// Invalid parameters, HTTP client setup failures and CSV write failures. Upstream fetch
/// failures are not errors: they are reported and replaced by fallback values.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Dose { mission } => {
            let (reading, result) = mission_dose(&cli, mission).await?;
            print_flux(&reading);
            print_dose(mission, &result);
        }
        Command::Dna { dose, cell } => {
            let cell_type = CellType::parse(cell)?;
            let total_dose = resolve_total_dose(&cli, dose).await?;
            let damage = compute_dna_damage(total_dose, cell_type)?;
            let profile = cell_type.profile();
            println!("Cell type:           {cell_type}");
            println!("DSB per Gy:          {}", profile.dsb_per_gray());
            println!("Repair efficiency:   {:.0} %", profile.repair_efficiency() * 100.0);
            println!("Double-strand breaks {:.4}", damage.dsb());
            println!("Repaired:            {:.4}", damage.repaired());
            println!("Remaining:           {:.4}", damage.remaining());
        }
        Command::Organ { dose, age, sex, organ } => {
            let (age, sex, organ) = (AgeGroup::parse(age)?, Sex::parse(sex)?, Organ::parse(organ)?);
            let total_dose = resolve_total_dose(&cli, dose).await?;
            let risk = compute_organ_risk(total_dose, age, sex, organ)?;
            println!("{organ} (weight {}), {sex}, {age}", organ.weight());
            println!("Effective dose:      {:.6} mSv", risk.effective_dose());
            println!("Organ risk:          {:.6} %", risk.organ_risk());
        }
        Command::Environment { dose, altitude_km, latitude_deg } => {
            let total_dose = resolve_total_dose(&cli, dose).await?;
            let adjustment = adjust_for_environment(total_dose, *altitude_km, *latitude_deg)?;
            println!("Altitude factor:     {:.4} ({altitude_km} km)", adjustment.altitude_factor());
            println!("Latitude factor:     {:.4} ({latitude_deg}°)", adjustment.latitude_factor());
            println!("Adjusted dose:       {:.6} mSv", adjustment.adjusted_dose());
        }
        Command::Flight { route } => {
            let route = FlightRoute::parse(route)?;
            println!("{route}: {} h, {:.4} mSv", route.hours(), compute_flight_dose(route));
        }
        Command::Kp { offline } => {
            let provider = kp_provider(cli.noaa_client()?);
            let reading = if *offline { provider.offline() } else { provider.read().await };
            let kp = *reading.value();
            println!("Kp index:            {:.2} [{}]", kp.value(), reading.provenance());
            println!("Storm level:         {}", kp.storm_level());
        }
        Command::Explore { experiment, particle, csv, download } => {
            let dataset = fetch_dataset(cli.crdb_client()?, *experiment, *particle).await;
            let target = if *download {
                Some(PathBuf::from(default_file_name(*experiment, *particle)))
            } else {
                csv.clone()
            };
            explore(&dataset, *experiment, *particle, target)?;
        }
        Command::List => list_tables(),
    }
    Ok(())
}

async fn mission_dose(
    cli: &Cli,
    mission: &MissionArgs,
) -> Result<(FluxReading, DoseResult), CliError> {
    let params = MissionParameters::new(mission.days, ShieldingMaterial::parse(&mission.shielding)?)?;
    let provider = flux_provider(cli.noaa_client()?, &mission.energy_channel);
    let reading = if mission.offline { provider.offline() } else { provider.read().await };
    let result = compute_dose(&reading, &params)?;
    Ok((reading, result))
}

async fn resolve_total_dose(cli: &Cli, input: &DoseInput) -> Result<f64, CliError> {
    if let Some(total_dose) = input.total_dose {
        return Ok(total_dose);
    }
    let (reading, result) = mission_dose(cli, &input.mission).await?;
    print_flux(&reading);
    info!(
        "Using total dose {:.6} mSv of a {}-day mission ({} shielding)",
        result.total_dose(),
        input.mission.days,
        input.mission.shielding
    );
    Ok(result.total_dose())
}

fn print_flux(reading: &FluxReading) {
    println!(
        "Proton flux:         {:.4} protons/cm²/s/sr [{}, {}]",
        reading.value(),
        reading.provenance(),
        reading.obtained_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
}

fn print_dose(mission: &MissionArgs, result: &DoseResult) {
    println!("Mission:             {} days, shielding {}", mission.days, mission.shielding);
    println!("Daily dose:          {:.6} mSv", result.daily_dose());
    println!("Total dose:          {:.6} mSv", result.total_dose());
    println!("Cancer risk:         {:.6} %", result.risk_percent());
}

pub(super) fn explore(
    dataset: &Dataset,
    experiment: Experiment,
    particle: Particle,
    csv_target: Option<PathBuf>,
) -> Result<ExploreOutcome, CliError> {
    let spectrum = dataset.value();
    let points = spectrum.points();
    if dataset.is_fallback() {
        let outcome = ExploreOutcome::FetchFailed { experiment, particle };
        warn!("{outcome}");
        return Ok(outcome);
    }
    if points.is_empty() {
        let outcome = if spectrum.dataset_count() == 0 {
            ExploreOutcome::NoDatasets
        } else {
            ExploreOutcome::NoValidPoints
        };
        info!("{outcome}");
        return Ok(outcome);
    }
    println!("{particle} flux from {experiment} ({} points)", points.len());
    println!("{:>16} {:>16}", "Energy (GeV/n)", "Flux");
    for point in points {
        println!("{:>16.6e} {:>16.6e}", point.energy(), point.flux());
    }
    if let Some(path) = csv_target {
        export_csv(points, &path)?;
        log!("Wrote {} rows to {}", points.len(), path.display());
    }
    Ok(ExploreOutcome::Listed { points: points.len() })
}

fn list_tables() {
    println!("Shielding (factor)");
    for material in ShieldingMaterial::iter() {
        println!("  {material:<24} {}", material.factor());
    }
    println!("Cell types (DSB/Gy, repair efficiency)");
    for cell in CellType::iter() {
        let profile = cell.profile();
        println!("  {cell:<24} {} {}", profile.dsb_per_gray(), profile.repair_efficiency());
    }
    println!("Age groups (factor)");
    for age in AgeGroup::iter() {
        println!("  {age:<24} {}", age.factor());
    }
    println!("Sex (factor)");
    for sex in Sex::iter() {
        println!("  {sex:<24} {}", sex.factor());
    }
    println!("Organs (tissue weight)");
    for organ in Organ::iter() {
        println!("  {organ:<24} {}", organ.weight());
    }
    println!("Flight routes (hours)");
    for route in FlightRoute::iter() {
        println!("  {route:<24} {}", route.hours());
    }
    println!("Experiments");
    for experiment in Experiment::iter() {
        println!("  {experiment}");
    }
    println!("Particles (code)");
    for particle in Particle::iter() {
        println!("  {particle:<24} {}", particle.code());
    }
}
