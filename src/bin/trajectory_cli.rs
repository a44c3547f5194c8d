use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter, Log, Metadata, Record};
use nalgebra::Point2;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;

use ballistic_trajectory::{
    HarmonicWander, LaunchParameters, LiveProjectile, MotionGenerator, PhysicalConstants,
    Rect, SolverConfig, Target, Trajectory, TrajectorySolver,
};

#[derive(Parser)]
#[command(name = "trajectory-cli")]
#[command(version = "0.1.0")]
#[command(about = "Sphere trajectory calculator with atmospheric drag", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full trajectory down to the launch altitude
    Trajectory {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Time step (seconds)
        #[arg(long, default_value = "0.1")]
        time_step: f64,

        /// Report absolute altitudes instead of height above launch
        #[arg(long)]
        absolute: bool,

        /// Iteration cap for the integration loop
        #[arg(long, default_value = "100000")]
        max_steps: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Fly a single live projectile frame by frame
    Live {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Frame time step (seconds)
        #[arg(long, default_value = "0.1")]
        frame_dt: f64,

        /// Ground altitude (meters), defaults to the launch altitude
        #[arg(long)]
        ground: Option<f64>,

        /// Target center as X,Y (meters)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        target: Option<Point2<f64>>,

        /// Target half size (meters)
        #[arg(long, default_value = "10.0")]
        target_size: f64,

        /// Let the target wander vertically from a random phase
        #[arg(long)]
        wander: bool,

        /// Print every frame
        #[arg(long)]
        frames: bool,
    },

    /// Display engine information
    Info,
}

#[derive(clap::Args)]
struct LaunchArgs {
    /// Launch altitude (meters)
    #[arg(long, default_value = "1609.0")]
    altitude: f64,

    /// Launch angle (degrees)
    #[arg(short = 'a', long, default_value = "40.0", allow_hyphen_values = true)]
    angle: f64,

    /// Launch speed (m/s)
    #[arg(short = 's', long, default_value = "100.0")]
    velocity: f64,

    /// Named projectile profile
    #[arg(short = 'p', long, default_value = "cannonball")]
    profile: Profile,

    /// JSON profile file, overrides --profile
    #[arg(long)]
    profile_file: Option<PathBuf>,
}

impl LaunchArgs {
    fn constants(&self) -> Result<PhysicalConstants, Box<dyn Error>> {
        match &self.profile_file {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                Ok(PhysicalConstants::from_json_str(&json)?)
            }
            None => Ok(match self.profile {
                Profile::Baseball => PhysicalConstants::baseball(),
                Profile::Cannonball => PhysicalConstants::cannonball(),
            }),
        }
    }

    fn parameters(&self) -> LaunchParameters {
        LaunchParameters::new(self.altitude, self.angle, self.velocity)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    Baseball,
    Cannonball,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Serialize)]
struct PointRow {
    t: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    ax: f64,
    ay: f64,
}

#[derive(Debug, Serialize)]
struct TrajectoryReport {
    points: usize,
    apex_height: f64,
    apex_time: f64,
    range: f64,
    time_of_flight: f64,
    impact_speed: f64,
    trajectory: Vec<PointRow>,
}

impl TrajectoryReport {
    fn new(trajectory: &Trajectory) -> Self {
        let apex = trajectory.apex();
        Self {
            points: trajectory.len(),
            apex_height: apex.position.y,
            apex_time: apex.time,
            range: trajectory.range(),
            time_of_flight: trajectory.time_of_flight(),
            impact_speed: trajectory.impact_speed(),
            trajectory: trajectory
                .iter()
                .map(|p| PointRow {
                    t: p.time,
                    x: p.position.x,
                    y: p.position.y,
                    vx: p.velocity.x,
                    vy: p.velocity.y,
                    ax: p.acceleration.x,
                    ay: p.acceleration.y,
                })
                .collect(),
        }
    }
}

/// Minimal stderr logger for the command line
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

fn parse_point(s: &str) -> Result<Point2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad X '{}': {}", x, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad Y '{}': {}", y, e))?;
    Ok(Point2::new(x, y))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Trajectory {
            launch,
            time_step,
            absolute,
            max_steps,
            output,
        } => {
            let config = SolverConfig {
                time_step_s: time_step,
                normalized: !absolute,
                max_steps,
            };
            let solver = TrajectorySolver::new(launch.constants()?, config);
            let trajectory = launch.parameters().solve(&solver)?;
            display_trajectory(&trajectory, output)?;
        }

        Commands::Live {
            launch,
            frame_dt,
            ground,
            target,
            target_size,
            wander,
            frames,
        } => {
            if !(frame_dt.is_finite() && frame_dt > 0.0) {
                return Err(format!("frame dt must be positive, got {}", frame_dt).into());
            }
            let constants = launch.constants()?;
            let params = launch.parameters();
            params.validate()?;
            let ground = ground.unwrap_or(params.altitude_m);

            let mut projectile =
                LiveProjectile::fire(params.altitude_m, params.angle_deg, params.velocity_mps, &constants);
            let mut target = target.map(|center| {
                if wander {
                    Target::spawn(&mut rand::thread_rng(), center, target_size, 0.0)
                } else {
                    Target::new(Rect::centered(center, target_size), 0.0, 0.0)
                }
            });
            let motion: Box<dyn MotionGenerator> = if wander {
                Box::new(HarmonicWander::default())
            } else {
                Box::new(|_: f64| 0.0)
            };

            let mut count = 0usize;
            let mut hit_at = None;
            loop {
                projectile.advance(frame_dt);
                count += 1;
                if let Some(t) = target.as_mut() {
                    t.advance(frame_dt, motion.as_ref());
                    if t.check_hit(std::iter::once(projectile.bounds())) {
                        info!("target hit at t={:.3} s", projectile.point().time);
                        hit_at = Some(projectile.point().time);
                    }
                }
                let p = projectile.point();
                if frames {
                    println!(
                        "{:>8.3} {:>10.3} {:>10.3} {:>9.3} {:>9.3}",
                        p.time, p.position.x, p.position.y, p.velocity.x, p.velocity.y
                    );
                }
                if projectile.is_grounded(ground) {
                    break;
                }
                if count >= SolverConfig::default().max_steps {
                    return Err(format!("projectile did not land within {} frames", count).into());
                }
            }

            let p = projectile.point();
            println!("Frames:       {}", count);
            println!("Landed at:    x={:.2} m, y={:.2} m, t={:.3} s", p.position.x, p.position.y, p.time);
            if target.is_some() {
                match hit_at {
                    Some(t) => println!("Target:       HIT at {:.3} s", t),
                    None => println!("Target:       MISS"),
                }
            }
        }

        Commands::Info => {
            let c = PhysicalConstants::cannonball();
            let b = PhysicalConstants::baseball();
            println!("Ballistic Trajectory v{}", env!("CARGO_PKG_VERSION"));
            println!("Point-mass sphere flight, RK4 integration, standard atmosphere drag.");
            println!();
            println!("Profiles:");
            println!("  cannonball  d={:.5} m  m={:.4} kg", c.diameter_m, c.mass_kg);
            println!("  baseball    d={:.5} m  m={:.4} kg", b.diameter_m, b.mass_kg);
            println!("Gravity:      {} m/s^2", c.gravity_m_s2);
            println!("Sea level:    {} kg/m^3", c.sea_level_density_kg_m3);
        }
    }

    Ok(())
}

fn display_trajectory(trajectory: &Trajectory, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&TrajectoryReport::new(trajectory))?);
        }

        OutputFormat::Csv => {
            println!("t,x,y,vx,vy,ax,ay");
            for p in trajectory {
                println!(
                    "{},{},{},{},{},{},{}",
                    p.time, p.position.x, p.position.y, p.velocity.x, p.velocity.y,
                    p.acceleration.x, p.acceleration.y
                );
            }
        }

        OutputFormat::Table => {
            println!(
                "{:>8} {:>10} {:>10} {:>9} {:>9} {:>9} {:>9}",
                "t", "x", "y", "vx", "vy", "ax", "ay"
            );
            for p in trajectory {
                println!(
                    "{:>8.3} {:>10.3} {:>10.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
                    p.time, p.position.x, p.position.y, p.velocity.x, p.velocity.y,
                    p.acceleration.x, p.acceleration.y
                );
            }
            let apex = trajectory.apex();
            println!();
            println!("Points:         {:>10}", trajectory.len());
            println!("Apex:           {:>10.3} m at {:.3} s", apex.position.y, apex.time);
            println!("Range:          {:>10.3} m", trajectory.range());
            println!("Time of flight: {:>10.3} s", trajectory.time_of_flight());
            println!("Impact speed:   {:>10.3} m/s", trajectory.impact_speed());
        }
    }

    Ok(())
}
