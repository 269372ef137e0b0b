//! Breakout entry point
//!
//! Runs a headless session: the autopilot plays, the log presenter reports.
//!
//! Usage: `breakout [seed] [--turbo] [--max-ticks=N]`

use std::error::Error;
use std::time::Duration;

use breakout::demo::{Autopilot, LogPresenter};
use breakout::{Session, SessionHandle, SessionOutcome, Settings, ThreadPacer};

const DEFAULT_SEED: u64 = 1;
/// Autopilot polls several times per tick at launch speed
const AUTOPILOT_INTERVAL: Duration = Duration::from_millis(25);

struct Args {
    seed: u64,
    turbo: bool,
    max_ticks: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: DEFAULT_SEED,
        turbo: false,
        max_ticks: None,
    };

    for arg in std::env::args().skip(1) {
        if arg == "--turbo" {
            args.turbo = true;
        } else if let Some(n) = arg.strip_prefix("--max-ticks=") {
            let n = n.parse().map_err(|_| format!("bad tick count: {}", n))?;
            args.max_ticks = Some(n);
        } else {
            args.seed = arg.parse().map_err(|_| format!("unrecognized argument: {}", arg))?;
        }
    }

    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = parse_args()?;
    log::info!(
        "Breakout (headless) starting, seed {}{}",
        args.seed,
        if args.turbo { ", turbo" } else { "" }
    );

    let handle = SessionHandle::new(Settings::default())?;
    let mut pilot = Autopilot::new(handle.clone(), args.seed);
    if let Some(limit) = args.max_ticks {
        pilot = pilot.with_tick_limit(limit);
    }

    let outcome = if args.turbo {
        // Autopilot steps in place of the sleep, on the loop thread
        let pacer = move |_: Duration| {
            if let Err(e) = pilot.step() {
                log::warn!("Autopilot step failed: {}", e);
            }
        };
        Session::new(handle, LogPresenter::new(), pacer).run()?
    } else {
        let input = pilot.spawn(AUTOPILOT_INTERVAL);
        let result = Session::new(handle.clone(), LogPresenter::new(), ThreadPacer).run();
        handle.request_shutdown();
        match input.join() {
            Ok(Err(e)) => log::warn!("Autopilot stopped: {}", e),
            Err(_) => log::error!("Autopilot thread panicked"),
            Ok(Ok(())) => {}
        }
        result?
    };

    match outcome {
        SessionOutcome::Won { score } => println!("YOU WIN! Final score: {}", score),
        SessionOutcome::Lost { score } => println!("GAME OVER. Final score: {}", score),
        SessionOutcome::Shutdown => println!("Session closed."),
    }

    Ok(())
}
