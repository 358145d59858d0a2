//Mandelbrot Set
extern crate sdl2;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use mandelbrot::driver;
use mandelbrot::{ColorPolicy, Error, FrameRenderer, Profile};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Render the Mandelbrot set in a window. R re-renders, ESC quits.
#[derive(Parser, Debug)]
struct Cli {
    /// Built-in profile (banded, grayscale)
    #[arg(long, default_value = "banded")]
    profile: String,
    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,
    /// Iteration budget
    #[arg(long)]
    budget: Option<u32>,
    /// Color policy, overriding the profile's
    #[arg(long)]
    policy: Option<ColorPolicy>,
    /// Milliseconds to sleep between event polls
    #[arg(long, default_value_t = driver::DEFAULT_TICK.as_millis() as u64)]
    tick_ms: u64,
}

fn profile_from(cli: &Cli) -> Result<Profile, Error> {
    let mut profile = Profile::by_name(&cli.profile)?;
    if cli.width.is_some() || cli.height.is_some() {
        let width = cli.width.unwrap_or(profile.raster.width);
        let height = cli.height.unwrap_or(profile.raster.height);
        profile = profile.with_raster(width, height)?;
    }
    if let Some(budget) = cli.budget {
        profile = profile.with_budget(budget)?;
    }
    if let Some(policy) = cli.policy {
        profile = profile.with_policy(policy);
    }
    Ok(profile)
}

fn run(cli: Cli) -> Result<usize, Error> {
    let profile = profile_from(&cli)?;
    info!(
        profile = profile.name,
        width = profile.raster.width,
        height = profile.raster.height,
        budget = profile.budget,
        policy = %profile.policy,
        "starting"
    );

    let renderer = FrameRenderer::new(&profile)?;

    let sdl_context = sdl2::init().map_err(Error::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;
    let window = video_subsystem
        .window(profile.title, profile.raster.width, profile.raster.height)
        .position_centered()
        .build()
        .map_err(|e| Error::Sdl(e.to_string()))?;
    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| Error::Sdl(e.to_string()))?;
    let mut pump = sdl_context.event_pump().map_err(Error::Sdl)?;

    driver::run(
        &renderer,
        &mut canvas,
        &mut pump,
        profile.budget,
        Duration::from_millis(cli.tick_ms),
    )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(frames) => {
            info!(frames, "Exiting...");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
