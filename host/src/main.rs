use anyhow::{bail, Context, Result};
use loop_core::fixed::FixedSteps;
use loop_core::game_loop::GameLoop;
use loop_core::interpolated::InterpolatedSteps;
use loop_core::variable::VariableSteps;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{info, Level};

mod pit;

use pit::Pit;

fn main() -> Result<()> {
    // Parse simple CLI flags for the run configuration
    let mut variant = String::from("interpolated");
    let mut seconds = 5.0f64;
    let mut rate = 60u32;
    let mut maximum_step: Option<f64> = None;
    let mut balls = 100usize;
    let mut seed = 42u64;
    {
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--loop" => {
                    variant = args.next().context("--loop needs a value")?;
                }
                "--seconds" => {
                    let v = args.next().context("--seconds needs a value")?;
                    seconds = v.parse().with_context(|| format!("invalid --seconds '{v}'"))?;
                }
                "--rate" => {
                    let v = args.next().context("--rate needs a value")?;
                    rate = v.parse().with_context(|| format!("invalid --rate '{v}'"))?;
                }
                "--max-step" => {
                    let v = args.next().context("--max-step needs a value")?;
                    let step = v
                        .parse()
                        .with_context(|| format!("invalid --max-step '{v}'"))?;
                    maximum_step = Some(step);
                }
                "--balls" => {
                    let v = args.next().context("--balls needs a value")?;
                    balls = v.parse().with_context(|| format!("invalid --balls '{v}'"))?;
                }
                "--seed" => {
                    let v = args.next().context("--seed needs a value")?;
                    seed = v.parse().with_context(|| format!("invalid --seed '{v}'"))?;
                }
                other => bail!(
                    "unknown flag '{other}' (flags: --loop variable|fixed|interpolated, \
                     --seconds, --rate, --max-step, --balls, --seed)"
                ),
            }
        }
    }
    if rate == 0 {
        bail!("--rate must be at least 1");
    }
    if !seconds.is_finite() || seconds < 0.0 {
        bail!("--seconds must be a non-negative number");
    }

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    info!("looplab starting...");

    let pit = Rc::new(RefCell::new(Pit::new(balls, seed)));
    let last_fps = Rc::new(RefCell::new(0u32));

    // Wire the pit into the loop's callback slots
    let mut game_loop: Box<dyn GameLoop> = {
        let sim = pit.clone();
        let update = move |dt: f64| sim.borrow_mut().advance(dt);
        let snap = pit.clone();
        let render = move || snap.borrow_mut().present();
        let blend = pit.clone();
        let interpolate = move |alpha: f64| blend.borrow_mut().blend(alpha);
        let fps_sink = last_fps.clone();
        let report_fps = move |fps: u32| {
            *fps_sink.borrow_mut() = fps;
            info!("fps: {fps}");
        };
        match variant.as_str() {
            "variable" => Box::new(VariableSteps::new(update, render, report_fps)),
            "fixed" => Box::new(FixedSteps::new(update, render, report_fps)),
            "interpolated" => Box::new(InterpolatedSteps::new(
                update,
                render,
                interpolate,
                report_fps,
            )),
            other => {
                bail!("unknown loop variant '{other}' (expected variable, fixed or interpolated)")
            }
        }
    };
    if let Some(step) = maximum_step {
        game_loop.set_maximum_step(step);
    }

    info!(
        "driving '{}' at {}Hz for {}s ({} balls, seed {})",
        game_loop,
        rate,
        seconds,
        pit.borrow().ball_count(),
        seed
    );

    // Tick off a single monotonic origin; spin_sleep keeps the cadence honest
    let period = Duration::from_secs_f64(1.0 / f64::from(rate));
    let deadline = Duration::from_secs_f64(seconds);
    let start = Instant::now();
    let mut ticks = 0u64;
    let mut next_tick = Duration::ZERO;
    while start.elapsed() < deadline {
        game_loop.tick(start.elapsed().as_nanos() as u64);
        ticks += 1;
        next_tick += period;
        let now = start.elapsed();
        if next_tick > now {
            spin_sleep::sleep(next_tick - now);
        }
    }
    game_loop.stop();

    let pit = pit.borrow();
    info!(
        "done: {} ticks, {} steps, last fps {}, shown checksum {:016x}",
        ticks,
        pit.steps_taken(),
        *last_fps.borrow(),
        pit.shown_checksum()
    );

    Ok(())
}
