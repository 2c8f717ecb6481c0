use lottery::constants::SIMULATION_TOLERANCE;
use lottery::simulation::cross_validate;
use lottery::types::{DrawRequest, Method};

const USAGE: &str = "Usage: lottery-odds --entrants N [--friends N] [--winners N] [--tickets N] [--method M] [--simulate] [--trials N] [--seed S] [--json]";

struct Args {
    request: DrawRequest,
    method: Method,
    simulate: bool,
    trials: Option<usize>,
    seed: Option<u64>,
    json: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(raw) = value else {
        eprintln!("Missing value for {}", flag);
        std::process::exit(1);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, raw);
        std::process::exit(1);
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut request = DrawRequest::default();
    let mut method = Method::Auto;
    let mut simulate = false;
    let mut trials: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--entrants" => {
                i += 1;
                request.entrants = Some(parse_value("--entrants", args.get(i)));
            }
            "--friends" => {
                i += 1;
                request.friends = Some(parse_value("--friends", args.get(i)));
            }
            "--winners" => {
                i += 1;
                request.winners = Some(parse_value("--winners", args.get(i)));
            }
            "--tickets" => {
                i += 1;
                request.tickets = Some(parse_value("--tickets", args.get(i)));
            }
            "--method" => {
                i += 1;
                method = parse_value("--method", args.get(i));
            }
            "--trials" => {
                i += 1;
                trials = Some(parse_value("--trials", args.get(i)));
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_value("--seed", args.get(i)));
            }
            "--simulate" => {
                simulate = true;
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --entrants N    Size of the draw pool (required)");
                println!("  --friends N     Entrants in the group (default: 1)");
                println!("  --winners N     Sequential draws without replacement (default: 1)");
                println!("  --tickets N     Tickets per friend win (default: unlimited)");
                println!("  --method M      enumerate, closed-form or auto (default: auto)");
                println!("  --simulate      Cross-check against a Monte-Carlo simulation");
                println!("  --trials N      Simulated drawings (default: LOTTERY_SIM_TRIALS or 1000000)");
                println!("  --seed S        Simulation seed (default: LOTTERY_SIM_SEED or 42)");
                println!("  --json          Print a JSON report");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !simulate && (trials.is_some() || seed.is_some()) {
        eprintln!("Error: --trials and --seed require --simulate");
        std::process::exit(1);
    }

    Args {
        request,
        method,
        simulate,
        trials,
        seed,
        json,
    }
}

fn main() {
    lottery::env_config::init_tracing();
    let threads = lottery::env_config::init_rayon_threads();
    let Args {
        request,
        method,
        simulate,
        trials,
        seed,
        json,
    } = parse_args();

    let report = match lottery::api_computations::evaluate(&request, method) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error ({:?}): {}", e.kind(), e);
            std::process::exit(1);
        }
    };

    let validation = if simulate {
        let trials = trials.unwrap_or_else(lottery::env_config::simulation_trials);
        let seed = seed.unwrap_or_else(lottery::env_config::simulation_seed);
        if !json {
            println!("Simulating {} drawings ({} threads)...", trials, threads);
        }
        match cross_validate(&report.config, method, trials, seed, SIMULATION_TOLERANCE) {
            Ok(v) => Some(v),
            Err(e) => {
                eprintln!("Error ({:?}): {}", e.kind(), e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    if json {
        let out = serde_json::json!({
            "report": report,
            "validation": validation,
        });
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let cfg = &report.config;
    println!(
        "Entrants: {}  Friends: {}  Winners: {}  Tickets/win: {}",
        cfg.entrants, cfg.friends, cfg.winners, cfg.tickets_per_win
    );
    match (report.scenarios_enumerated, report.scenarios_sufficient) {
        (Some(total), Some(kept)) => {
            println!("  Method:     enumerate ({} of {} scenarios sufficient)", kept, total)
        }
        _ => println!("  Method:     closed form"),
    }
    println!("  Probability: {:.12}", report.probability);

    if let Some(v) = validation {
        println!(
            "  Simulated:   {:.6} ({} / {} in {:.1} ms)",
            v.simulated.probability,
            v.simulated.successes,
            v.simulated.trials,
            v.simulated.elapsed.as_secs_f64() * 1000.0
        );
        println!(
            "  Plausible:   {} (tolerance {})",
            if v.plausible { "yes" } else { "NO" },
            v.tolerance
        );
        if !v.plausible {
            std::process::exit(2);
        }
    }
}
