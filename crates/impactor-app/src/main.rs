use std::time::{Duration, Instant};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use impactor_app::config::{FrameLoopConfig, DEFAULT_FRAME_RATE, MAX_FRAME_RATE};
use impactor_app::state::AppState;
use impactor_app::{control, headless, AppError};
use impactor_core::commands::SimCommand;
use impactor_core::constants::DEFAULT_DIAMETER_KM;
use impactor_core::enums::SimPhase;
use impactor_neo::request::api_key_from_env;
use impactor_neo::{HttpNeoClient, NeoStore};
use impactor_sim::SimConfig;

#[derive(Parser)]
#[command(name = "impactor", version, about = "Asteroid impact simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch one asteroid and print the impact record as JSON
    Simulate {
        /// Asteroid diameter in km (0.5 to 10, step 0.5)
        #[arg(long, default_value_t = DEFAULT_DIAMETER_KM)]
        diameter: f64,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Frames per second (1 to 1000)
        #[arg(
            long,
            default_value_t = DEFAULT_FRAME_RATE,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_FRAME_RATE))
        )]
        fps: u32,
        /// Run on the frame-loop thread in real time instead of fixed steps
        #[arg(long)]
        realtime: bool,
    },
    /// List near-Earth objects approaching on a date
    Feed {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Simulate {
            diameter,
            seed,
            fps,
            realtime,
        } => {
            let sim = SimConfig {
                seed,
                diameter_km: diameter,
                ..SimConfig::default()
            };
            if realtime {
                simulate_realtime(FrameLoopConfig {
                    sim,
                    frame_rate: fps,
                })
            } else {
                let outcome = headless::run(sim, fps)?;
                log::info!("finished after {} frames", outcome.frames);
                println!("{}", serde_json::to_string_pretty(&outcome.record)?);
                Ok(())
            }
        }
        Command::Feed { date } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            print_feed(date)
        }
    }
}

fn simulate_realtime(config: FrameLoopConfig) -> Result<(), AppError> {
    let state = AppState::new();
    let timeout = config.sim.flight_duration + Duration::from_secs(5);
    control::start_simulation(&state, config)?;
    control::send_command(&state, SimCommand::Launch)?;

    let deadline = Instant::now() + timeout;
    let mut record = None;
    while Instant::now() < deadline {
        if let Some(snapshot) = control::get_snapshot(&state)? {
            if snapshot.phase == SimPhase::Impacted {
                record = snapshot.impact;
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    control::stop_simulation(&state)?;

    let record = record.ok_or(AppError::NoImpact(timeout.as_secs_f64()))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn print_feed(date: NaiveDate) -> Result<(), AppError> {
    let client = HttpNeoClient::new()?;
    let mut store = NeoStore::new();
    store.fetch(&client, date, &api_key_from_env())?;

    let objects = store.objects_for(date);
    println!("{} near-Earth objects on {date}", objects.len());
    for neo in objects {
        let approach = neo.first_approach();
        let velocity = approach.and_then(|a| a.velocity_km_s());
        let miss = approach.and_then(|a| a.miss_distance_km());
        println!(
            "{:<28} {:>7.3} km  {:>8} km/s  {:>14} km{}",
            neo.name,
            neo.mean_diameter_km(),
            velocity.map_or("-".to_string(), |v| format!("{v:.2}")),
            miss.map_or("-".to_string(), |m| format!("{m:.0}")),
            if neo.is_potentially_hazardous_asteroid {
                "  HAZARDOUS"
            } else {
                ""
            },
        );
    }
    Ok(())
}
