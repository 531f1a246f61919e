use orbitsim::{bench_step_curve, ScenarioConfig, Simulation};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/; the built-in solar system is used when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Timestep in seconds when no scenario file is given
    #[arg(short, long, default_value_t = 3600.0)]
    timestep: f64,

    /// Number of steps to run
    #[arg(short, long, default_value_t = 24 * 365)]
    steps: u64,

    /// Time `step` across debris counts instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step_curve()?;
        return Ok(());
    }

    let mut sim = match &args.file_name {
        Some(file_name) => Simulation::from_config(&load_scenario_from_yaml(file_name)?)?,
        None => Simulation::construct(args.timestep)?,
    };

    for _ in 0..args.steps {
        sim.step();
    }

    let days = (sim.current_time() - sim.start_time()) / SECONDS_PER_DAY;
    info!(steps = sim.elapsed_steps(), days, "run finished");
    for b in sim.bodies() {
        info!(
            name = %b.name,
            x = b.x.x,
            y = b.x.y,
            z = b.x.z,
            speed = b.v.norm(),
            "body"
        );
    }

    sim.destroy();
    Ok(())
}
