use anyhow::Context;
use clap::Parser;
use critter_ik::{CreatureConfig, Orbit, TickOutcome};
use glam::Vec2;
use std::path::PathBuf;

/// Headless driver: walks a creature around a circular target path and logs its pose.
#[derive(Parser, Debug)]
#[command(name = "critter-demo", version, about)]
struct Args {
    /// RON creature description; the built-in snake is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(short, long, default_value_t = 300)]
    ticks: u32,

    /// Radius of the target path.
    #[arg(short, long, default_value_t = 240.0)]
    radius: f32,

    /// Radians the target advances per tick.
    #[arg(long, default_value_t = 0.02)]
    step: f32,

    /// Log the pose every this many ticks.
    #[arg(long, default_value_t = 30)]
    log_every: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CreatureConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CreatureConfig::snake(Vec2::ZERO),
    };
    let mut critter = config.build().context("building creature")?;
    let mut target = Orbit::new(Vec2::ZERO, args.radius, args.step);

    log::info!(
        "simulating {} ticks: {} segments, {} limbs",
        args.ticks,
        critter.skeleton().len(),
        critter.limbs().len()
    );

    let log_every = args.log_every.max(1);
    for tick in 1..=args.ticks {
        if critter.tick(&mut target) == TickOutcome::Skipped {
            continue;
        }

        if tick % log_every == 0 {
            let pose = critter.pose();
            let tail = pose.bones.last().map(|b| b.end).unwrap_or(pose.head.position);
            let planted = critter
                .limbs()
                .iter()
                .filter(|l| l.is_weight_bearing())
                .count();
            log::info!(
                "tick {:>4}: head ({:>7.1}, {:>7.1}) heading {:>6.3} speed {:>5.2} tail ({:>7.1}, {:>7.1}) planted {}/{}",
                tick,
                pose.head.position.x,
                pose.head.position.y,
                pose.head.angle,
                critter.speed(),
                tail.x,
                tail.y,
                planted,
                critter.limbs().len()
            );
        }
    }

    Ok(())
}
