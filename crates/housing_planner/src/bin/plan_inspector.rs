//! # Plan Inspector
//!
//! Command-line tool that generates a plan and prints it floor by floor.
//!
//! ## Usage
//!
//! ```bash
//! plan_inspector --config housing.toml
//! plan_inspector --width 12 --length 8 --kernel 2 --seed 42
//! ```

use housing_planner::layout::placements;
use housing_planner::{generate_with, PlannerConfig, Primitive, SeededSource, WindowBounds};

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         GENERIC HOUSING PLAN INSPECTOR                           ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().collect();

    // Config file first, flags override it
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => match args.get(i + 1).map(PlannerConfig::load) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                println!("Error: {e}");
                std::process::exit(1);
            }
            None => {
                println!("Error: --config needs a path");
                std::process::exit(1);
            }
        },
        None => PlannerConfig::default(),
    };

    let mut show_layout = false;
    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).and_then(|v| v.parse::<usize>().ok());
        match args[i].as_str() {
            "--width" | "-w" => {
                config.width = value.unwrap_or(config.width);
                i += 1;
            }
            "--length" | "-l" => {
                config.length = value.unwrap_or(config.length);
                i += 1;
            }
            "--kernel" | "-k" => {
                config.kernel_size = value.unwrap_or(config.kernel_size);
                i += 1;
            }
            "--max-floors" | "-m" => {
                config.max_floors = value.unwrap_or(config.max_floors);
                i += 1;
            }
            "--seed" | "-s" => {
                config.seed = args.get(i + 1).and_then(|v| v.parse().ok()).or(config.seed);
                i += 1;
            }
            "--config" | "-c" => i += 1,
            "--inclusive" => config.window_bounds = WindowBounds::Inclusive,
            "--layout" => show_layout = true,
            "--help" | "-h" => {
                println!("Usage: plan_inspector [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <FILE>        TOML config file");
                println!("  -w, --width <CELLS>        Grid width (default: 20)");
                println!("  -l, --length <CELLS>       Grid length (default: 20)");
                println!("  -k, --kernel <CELLS>       Kernel size (default: 2)");
                println!("  -m, --max-floors <NUM>     Floor cap (default: 64)");
                println!("  -s, --seed <SEED>          Random seed");
                println!("      --inclusive            Sweep windows up to the far edge");
                println!("      --layout               Print placement summary");
                println!("  -h, --help                 Show this help");
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let seed = config.plan_seed().unwrap_or_default();

    println!("┌─ CONFIGURATION ─────────────────────────────────────────────────┐");
    println!("│ Grid:               {} x {}", config.width, config.length);
    println!("│ Kernel:             {}", config.kernel_size);
    println!("│ Max Floors:         {}", config.max_floors);
    println!("│ Window Bounds:      {:?}", config.window_bounds);
    println!("│ Seed:               {}", seed.value());
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();

    let mut source = SeededSource::new(seed);
    let plan = match generate_with(&config, &mut source) {
        Ok(plan) => plan,
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    };

    print!("{plan}");
    println!();

    println!("┌─ FLOORS ────────────────────────────────────────────────────────┐");
    for (index, stats) in plan.stats().iter().enumerate() {
        println!(
            "│ Floor {:>3}:          house {:>5}  balcony {:>5}  void {:>5}",
            index, stats.house, stats.balcony, stats.void
        );
    }
    println!("└──────────────────────────────────────────────────────────────────┘");

    if show_layout {
        match placements(&plan, &config.layout) {
            Ok(list) => {
                let plates = list
                    .iter()
                    .filter(|p| matches!(p.primitive, Primitive::Plate { .. }))
                    .count();
                println!();
                println!(
                    "Placements: {} ({} cubes, {} plates)",
                    list.len(),
                    list.len() - plates,
                    plates
                );
            }
            Err(e) => {
                println!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
