use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use qed_xsec::config::{PhysicalConstants, ELECTRON_MASS_GEV};
use qed_xsec::cross_section::{compton_energy, klein_nishina, CrossSectionEngine};
use qed_xsec::kinematics::FourVector;
use qed_xsec::particles::{Lepton, Photon, SpinDensityMatrix};

#[derive(Parser)]
#[command(name = "qed-xsec")]
#[command(about = "Tree-level QED differential cross sections")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// JSON file with alpha_qed and hbarc_sqr (default: built-in values)
    #[arg(short, long)]
    constants: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compton scattering off a lepton at rest
    Compton {
        /// Incident photon energy in GeV
        #[arg(short, long, default_value = "0.001")]
        energy: f64,

        /// Photon scattering angle in degrees
        #[arg(short, long, default_value = "90")]
        angle: f64,

        /// Lepton mass in GeV
        #[arg(short, long, default_value_t = ELECTRON_MASS_GEV)]
        mass: f64,
    },
    /// Scan the Compton cross section over the full angular range
    Scan {
        /// Incident photon energy in GeV
        #[arg(short, long, default_value = "0.001")]
        energy: f64,

        /// Number of angles between 0 and 180 degrees
        #[arg(short, long, default_value = "19")]
        points: usize,

        /// Lepton mass in GeV
        #[arg(short, long, default_value_t = ELECTRON_MASS_GEV)]
        mass: f64,
    },
    /// Print the physical constants, or write them as JSON
    Constants {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    let constants = match &cli.constants {
        Some(path) => PhysicalConstants::load(path)
            .with_context(|| format!("Failed to load constants from {}", path.display()))?,
        None => PhysicalConstants::default(),
    };
    let engine = CrossSectionEngine::new(constants);

    info!("Starting qed-xsec v{}", qed_xsec::VERSION);

    match cli.command {
        Commands::Compton { energy, angle, mass } => {
            let row = compton_at(&engine, energy, angle, mass)?;
            println!("theta = {:.2} deg, k' = {:.6e} GeV", angle, row.k_out);
            println!("  engine:         {:.6e} ub/sr", row.value);
            println!("  Klein-Nishina:  {:.6e} ub/sr", row.klein_nishina);
            Ok(())
        }
        Commands::Scan {
            energy,
            points,
            mass,
        } => scan(&engine, energy, points, mass),
        Commands::Constants { output } => {
            match output {
                Some(path) => {
                    engine
                        .constants()
                        .save(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote constants to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(engine.constants())?),
            }
            Ok(())
        }
    }
}

struct ComptonRow {
    angle: f64,
    k_out: f64,
    value: f64,
    klein_nishina: f64,
}

/// Compton scattering of a photon along +z off a lepton at rest, photon
/// scattered by `angle` degrees in the x-z plane.
fn compton_at(engine: &CrossSectionEngine, energy: f64, angle: f64, mass: f64) -> Result<ComptonRow> {
    if energy <= 0.0 || mass <= 0.0 {
        anyhow::bail!("energy and mass must be positive, got {} and {}", energy, mass);
    }
    let theta = angle.to_radians();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let k_out = compton_energy(energy, cos_theta, mass);

    let g_in = Photon::new(FourVector::new(energy, 0.0, 0.0, energy));
    let e_in = Lepton::at_rest(mass);
    let g_out = Photon::new(FourVector::new(k_out, k_out * sin_theta, 0.0, k_out * cos_theta))
        .with_sdm(SpinDensityMatrix::identity());
    let e_out = Lepton::new(
        FourVector::new(mass + energy - k_out, -k_out * sin_theta, 0.0, energy - k_out * cos_theta),
        mass,
    )
    .with_sdm(SpinDensityMatrix::identity());

    let result = engine.compton(&g_in, &e_in, &g_out, &e_out);
    if let Some(warning) = &result.warning {
        warn!("{}", warning);
    }
    Ok(ComptonRow {
        angle,
        k_out,
        value: result.value(),
        klein_nishina: klein_nishina(energy, k_out, cos_theta, mass, engine.constants()),
    })
}

fn scan(engine: &CrossSectionEngine, energy: f64, points: usize, mass: f64) -> Result<()> {
    if points < 2 {
        anyhow::bail!("a scan needs at least 2 points, got {}", points);
    }
    let angles: Vec<f64> = (0..points)
        .map(|i| 180.0 * i as f64 / (points - 1) as f64)
        .collect();
    info!("Scanning {} angles at k = {} GeV", points, energy);

    #[cfg(feature = "parallel")]
    let rows: Vec<ComptonRow> = {
        use rayon::prelude::*;
        angles
            .par_iter()
            .map(|&angle| compton_at(engine, energy, angle, mass))
            .collect::<Result<_>>()?
    };
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<ComptonRow> = angles
        .iter()
        .map(|&angle| compton_at(engine, energy, angle, mass))
        .collect::<Result<_>>()?;

    println!("{:>8} {:>14} {:>14} {:>14}", "deg", "k' [GeV]", "ub/sr", "KN ub/sr");
    for row in &rows {
        println!(
            "{:>8.2} {:>14.6e} {:>14.6e} {:>14.6e}",
            row.angle, row.k_out, row.value, row.klein_nishina
        );
    }
    Ok(())
}
