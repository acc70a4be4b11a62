//! CLI for the dot-product reduction benchmarks.
//!
//! Usage:
//!   vec-reduce              # Bench all tiers
//!   vec-reduce --list       # List available tiers
//!   vec-reduce vector       # Bench a single tier
//!   vec-reduce --verify     # Cross-tier verification only
//!   vec-reduce --help       # Show help

use std::env;
use vec_reduce::reduce::verify_tiers;
use vec_reduce::registry::{find_reducer, reducer_names};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut run_verify = false;
    let mut sizes: Vec<usize> = vec![64, 256, 1024, 4096, 16384];
    let mut runs: usize = 30;
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut tier_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--verify" => run_verify = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--iter" | "-r" => {
                i += 1;
                if i < args.len() {
                    runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                tier_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        vec_reduce::tui::print_help();
        return;
    }

    if show_list {
        vec_reduce::tui::print_tiers();
        return;
    }

    if run_verify {
        match verify_tiers() {
            Ok(()) => println!("All tiers verified against the scalar baseline."),
            Err(e) => {
                eprintln!("Verification failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(name) = &tier_filter {
        if find_reducer(name).is_none() {
            eprintln!("Tier '{}' not found.", name);
            eprintln!("Available: {:?}", reducer_names());
            std::process::exit(1);
        }
    }

    vec_reduce::tui::print_header();
    vec_reduce::tui::run_and_display(
        &sizes,
        runs,
        seed,
        csv_path.as_deref(),
        tier_filter.as_deref(),
    );

    println!("Note: Speedup is relative to the scalar baseline.");
}
