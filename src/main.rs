//! Dino Dash entry point
//!
//! Native builds run headless autopilot sessions and log the outcome:
//!
//! ```text
//! dino-dash [seed] [max_ticks] [runs] [tuning.json]
//! ```
//!
//! The browser build is driven through `dino_dash::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    env_logger::init();
    log::info!("Dino Dash (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (seed, max_ticks, runs) = match parse_cli(&args) {
        Ok(values) => values,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let tuning = match args.get(3) {
        Some(path) => match load_tuning(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("Could not load tuning from {}: {}", path, err);
                return ExitCode::FAILURE;
            }
        },
        None => dino_dash::Tuning::default(),
    };

    let controller = match dino_dash::SessionController::with_tuning(tuning, seed) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("Invalid tuning: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let best = run_autopilot(controller, max_ticks, runs);
    println!("Best score over {} run(s) with seed {}: {}", runs, seed, best);
    ExitCode::SUCCESS
}

/// Seed, tick limit and run count from the positional arguments
#[cfg(not(target_arch = "wasm32"))]
fn parse_cli(args: &[String]) -> Result<(u64, u64, u32), String> {
    Ok((
        parse_arg(args, 0, "seed", 42)?,
        parse_arg(args, 1, "max_ticks", 10_000)?,
        parse_arg(args, 2, "runs", 1)?,
    ))
}

/// Positional argument `index`, or `default` when it is absent
#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T>(args: &[String], index: usize, name: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.get(index) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|err| format!("Invalid {} {:?}: {}", name, raw, err)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<dino_dash::Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(dino_dash::Tuning::from_json(&json)?)
}

/// Play `runs` sessions back to back, restarting after each crash
#[cfg(not(target_arch = "wasm32"))]
fn run_autopilot(mut controller: dino_dash::SessionController, max_ticks: u64, runs: u32) -> u32 {
    use dino_dash::autopilot::should_jump;
    use dino_dash::sim::SessionMode;

    controller.activate();
    controller.trigger();

    let mut finished = 0;
    let mut ticks = 0u64;
    while finished < runs && ticks < max_ticks {
        let Some(snapshot) = controller.snapshot() else {
            break;
        };
        if snapshot.mode == SessionMode::GameOver {
            println!("Run {} ended with score {}", finished + 1, snapshot.score);
            finished += 1;
            if finished < runs {
                controller.trigger();
            }
            continue;
        }

        let speed = controller.world().map(|w| w.scroll_speed).unwrap_or_default();
        if should_jump(&snapshot, speed, controller.tuning()) {
            controller.trigger();
        }
        controller.tick();
        ticks += 1;
    }

    if ticks >= max_ticks {
        let score = controller.snapshot().map(|s| s.score).unwrap_or_default();
        log::info!("Tick limit {} reached, current score {}", max_ticks, score);
    }
    let best = controller.best_score();
    controller.deactivate();
    best
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point lives in dino_dash::web, this is just to satisfy the compiler
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_missing_arg_uses_default() {
        assert_eq!(parse_arg::<u64>(&args(&[]), 0, "seed", 42), Ok(42));
        assert_eq!(parse_arg::<u32>(&args(&["7"]), 2, "runs", 1), Ok(1));
    }

    #[test]
    fn test_valid_arg_is_parsed() {
        assert_eq!(parse_arg::<u64>(&args(&["9", "500"]), 1, "max_ticks", 10), Ok(500));
    }

    #[test]
    fn test_bad_arg_is_an_error() {
        let err = parse_arg::<u64>(&args(&["abc"]), 0, "seed", 42).unwrap_err();
        assert!(err.contains("seed"));
        assert!(err.contains("abc"));
        assert!(parse_arg::<u32>(&args(&["1", "2", "-3"]), 2, "runs", 1).is_err());
    }

    #[test]
    fn test_cli_rejects_garbage_instead_of_defaulting() {
        assert!(parse_cli(&args(&["abc", "xyz"])).is_err());
        assert_eq!(parse_cli(&args(&[])), Ok((42, 10_000, 1)));
        assert_eq!(parse_cli(&args(&["5", "100"])), Ok((5, 100, 1)));
    }
}
