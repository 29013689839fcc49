// Volume Dashboard Runner
//
// Usage:
//   cargo run --bin dashboard                        # default preset, one render
//   cargo run --bin dashboard -- SUPPORT             # pick a preset by name
//   cargo run --bin dashboard -- --list              # list presets
//   cargo run --bin dashboard -- --watch             # re-render every 15s
//   cargo run --bin dashboard -- --trials 200        # mean ± 95% CI over 200 runs
//   cargo run --bin dashboard -- --seed 42 --table   # reproducible run + raw table
//   cargo run --bin dashboard -- --start 08:00 --end 12:00 --rate 300 --pattern "U-Shape"

mod presets;
mod render;
mod series;
mod summary;

use chrono::NaiveTime;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use presets::{presets, Preset};
use volume_engine::{ArrivalPattern, SimulationRun, VolumeSimulation};

/// Fixed wall-clock delay between re-renders in watch mode.
const REFRESH_SECS: u64 = 15;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    filter: Option<String>,
    seed: Option<u64>,
    trials: usize,
    watch: bool,
    table: bool,
    jsonl: bool,
    list: bool,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    rate: Option<f64>,
    pattern: Option<ArrivalPattern>,
}

fn parse_time(raw: &str, flag: &str) -> NaiveTime {
    match NaiveTime::parse_from_str(raw, "%H:%M") {
        Ok(t) => t,
        Err(_) => {
            eprintln!("Invalid {} time {:?}, expected HH:MM", flag, raw);
            std::process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        filter: None,
        seed: None,
        trials: 0,
        watch: false,
        table: false,
        jsonl: false,
        list: false,
        start: None,
        end: None,
        rate: None,
        pattern: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().ok();
                }
            }
            "--trials" => {
                i += 1;
                if i < args.len() {
                    cli.trials = args[i].parse().unwrap_or(0);
                }
            }
            "--start" => {
                i += 1;
                if i < args.len() {
                    cli.start = Some(parse_time(&args[i], "--start"));
                }
            }
            "--end" => {
                i += 1;
                if i < args.len() {
                    cli.end = Some(parse_time(&args[i], "--end"));
                }
            }
            "--rate" => {
                i += 1;
                if i < args.len() {
                    cli.rate = args[i].parse().ok();
                }
            }
            "--pattern" => {
                i += 1;
                if i < args.len() {
                    cli.pattern = Some(ArrivalPattern::from_name(&args[i]));
                }
            }
            "--watch" => {
                cli.watch = true;
            }
            "--table" => {
                cli.table = true;
            }
            "--jsonl" => {
                cli.jsonl = true;
            }
            "--list" => {
                cli.list = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    env_logger::init();
    let cli = parse_args();
    let all = presets();

    if cli.list {
        println!("\n  {:<22} {:<30} {:>13} {:>8}  {}", "Preset", "Label", "Window", "Per hr", "Pattern");
        println!("  {}", "-".repeat(88));
        for p in &all {
            println!(
                "  {:<22} {:<30} {:>5}-{:<7} {:>8.0}  {}",
                p.name,
                p.label,
                p.start.format("%H:%M"),
                p.end.format("%H:%M"),
                p.contacts_per_hour,
                p.pattern.label(),
            );
        }
        println!();
        return;
    }

    let preset: &Preset = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            match all.iter().find(|p| {
                p.name.to_lowercase().contains(&f_lower) || p.label.to_lowercase().contains(&f_lower)
            }) {
                Some(p) => p,
                None => {
                    eprintln!("No preset matches filter: {:?} (try --list)", f);
                    std::process::exit(1);
                }
            }
        }
        None => &all[0],
    };

    let mut config = preset.config();
    if let Some(start) = cli.start {
        config.open = start;
    }
    if let Some(end) = cli.end {
        config.close = end;
    }
    if let Some(rate) = cli.rate {
        config.contacts_per_hour = rate;
    }
    if let Some(pattern) = cli.pattern.clone() {
        config.pattern = pattern;
    }

    println!("\n  Volume Dashboard — {}", preset.label);
    println!(
        "  Window: {}-{} | {:.0} contacts/hr | Pattern: {} | Channels: {}",
        config.open.format("%H:%M"),
        config.close.format("%H:%M"),
        config.contacts_per_hour,
        config.pattern.label(),
        config.mix.channel_names().join(", "),
    );
    println!();

    let sim = VolumeSimulation::new(config);

    if cli.trials > 0 {
        run_summary(&sim, cli.trials, cli.seed);
        return;
    }

    if cli.watch {
        println!("  Refreshing every {}s, Ctrl-C to stop.\n", REFRESH_SECS);
        loop {
            let run = run_once(&sim, cli.seed);
            println!("  ── {} ──────────────────────────────────────", chrono::Local::now().format("%H:%M:%S"));
            render::render_chart(&run.table);
            if cli.table {
                render::render_table(&run.table);
            }
            std::thread::sleep(Duration::from_secs(REFRESH_SECS));
        }
    }

    let run = run_once(&sim, cli.seed);
    render::render_curve(&run);
    render::render_chart(&run.table);
    if cli.table {
        render::render_table(&run.table);
    }
    if cli.jsonl {
        let path = results_path("run", "jsonl");
        match series::write_jsonl(&path, &run) {
            Ok(()) => println!("  Intervals saved to: {}", path.display()),
            Err(e) => eprintln!("  Warning: failed to write JSONL: {}", e),
        }
    }
}

/// One simulation run; config errors are terminal.
fn run_once(sim: &VolumeSimulation, seed: Option<u64>) -> SimulationRun {
    let result = match seed {
        Some(s) => sim.run_seeded(s),
        None => sim.run(),
    };
    match result {
        Ok(run) => {
            if let Some(sum) = run.mix_rescaled {
                eprintln!("  Warning: channel mix summed to {}, shares rescaled to 100", sum);
            }
            run
        }
        Err(e) => {
            eprintln!("  Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_summary(sim: &VolumeSimulation, trials: usize, seed: Option<u64>) {
    let base_seed = seed.unwrap_or_else(rand::random);
    let report = match summary::run_trials(sim, trials, base_seed) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("  Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("  Trials: {} | Base seed: {}", report.n_trials, report.base_seed);
    println!("\n  {:<8} {:>9} {:>8} {:>19}", "Interval", "Mean", "StdDev", "95% CI");
    println!("  {}", "-".repeat(48));
    for interval in &report.intervals {
        println!(
            "  {:<8} {:>9.1} {:>8.2} {:>8.1} - {:>8.1}",
            interval.label,
            interval.total.mean,
            interval.total.std_dev,
            interval.total.ci_lower,
            interval.total.ci_upper,
        );
    }
    println!("  {}", "-".repeat(48));
    println!(
        "  {:<8} {:>9.1} {:>8.2} {:>8.1} - {:>8.1}\n",
        "Total",
        report.grand_total.mean,
        report.grand_total.std_dev,
        report.grand_total.ci_lower,
        report.grand_total.ci_upper,
    );

    let path = results_path("summary", "json");
    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("  Warning: failed to serialize report: {}", e);
            return;
        }
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("  Warning: failed to create {}: {}", parent.display(), e);
            return;
        }
    }
    match std::fs::write(&path, &json) {
        Ok(()) => println!("  Results saved to: {}", path.display()),
        Err(e) => eprintln!("  Warning: failed to write report: {}", e),
    }
}

fn results_path(kind: &str, ext: &str) -> std::path::PathBuf {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    std::path::Path::new("volume-results").join(format!("{}-{}.{}", kind, ts, ext))
}
