//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::reduce::bench;
use crate::registry::{all_reducers, default_reducer};
use crate::utils::bench::{export_csv, format_measurement, time_seed, RawTimingData};
use crate::utils::timer::VariantResult;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the kernel info box
pub fn print_kernel_info_box() {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let tiers_str = all_reducers()
        .iter()
        .map(|r| r.name())
        .collect::<Vec<_>>()
        .join(", ");
    let kernel_line = "Kernel:   dot product (f32 reduction)";
    let contract_line = "Contract: dot(a, b, n) -> f32";
    let default_line = format!("Default tier for this target: {}", default_reducer().name());
    let tier_line = format!("Tiers: {}", tiers_str);

    let content_width = [
        kernel_line.len(),
        contract_line.len(),
        default_line.len(),
        tier_line.len(),
    ]
    .iter()
    .cloned()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(kernel_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(contract_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(&default_line, content_width),
        width = content_width
    );
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&tier_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size
pub fn print_results_table(results: &[VariantResult], size: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    // Compact columns: 12+12+12+9+9+10 = 64 chars + 6 spaces + 2 indent = 72
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg.as_nanos() as f64)
        .unwrap_or(1.0);

    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!("  Size: {} ({} runs)", size, results[0].runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Tier",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = baseline_time / result.avg.as_nanos().max(1) as f64;

        let avg_ns = result.avg.as_nanos() as f64;
        let std_dev_ns = result.std_dev.as_nanos() as f64;

        let cv = if avg_ns > 0.0 {
            std_dev_ns / avg_ns
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&result.name, variant_col_width),
            format_measurement(result.avg),
            format_measurement(result.min),
            format_measurement(result.max),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Dot-Product Reduction Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: vec-reduce [OPTIONS] [TIER]");
    println!();
    println!("Options:");
    println!("  --list, -l     List available reduction tiers");
    println!("  --help, -h     Show this help message");
    println!("  --verify       Check all tiers against the scalar baseline and exit");
    println!("  --sizes SIZES  Comma-separated input sizes (default: 64,256,1024,4096,16384)");
    println!("  --iter N, -r   Number of measurement runs per tier (default: 30)");
    println!("  --seed N       Random seed for reproducible benchmarks (default: time-based)");
    println!("  --csv PATH     Export raw timings to CSV");
    println!();
    println!("Arguments:");
    println!("  TIER           Name of a single tier to benchmark (omit for all)");
    println!();
    println!("Examples:");
    println!("  vec-reduce                    # Bench all tiers");
    println!("  vec-reduce vector             # Bench only the vector tier");
    println!("  vec-reduce --list             # List tiers");
    println!("  vec-reduce --sizes 128,512    # Custom sizes");
    println!("  vec-reduce --seed 12345       # Reproducible run");
    println!("  vec-reduce --csv data.csv     # Export raw timings to CSV");
}

/// Print the list of available tiers
pub fn print_tiers() {
    let default_name = default_reducer().name();
    println!("Available tiers:");
    println!();
    for reducer in all_reducers() {
        let marker = if reducer.name() == default_name {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<12} - {}{}",
            reducer.name(),
            reducer.description(),
            marker
        );
    }
}

/// Run the benchmarks and display results, one table per input size.
/// If csv_path is provided, also exports raw data to CSV.
pub fn run_and_display(
    sizes: &[usize],
    runs: usize,
    seed: Option<u64>,
    csv_path: Option<&str>,
    only: Option<&str>,
) {
    print_kernel_info_box();

    let seed = seed.unwrap_or_else(time_seed);
    let mut raw_data = Vec::new();

    for &size in sizes {
        let results = bench::run_benchmarks(size, runs, seed, only);
        print_results_table(&results, size);

        for r in &results {
            raw_data.push(RawTimingData {
                variant_name: r.name.clone(),
                input_size: size,
                avg_nanos: r.avg_exact as u64,
                result_sample: r.result_sample,
            });
        }
    }

    if let Some(path) = csv_path {
        match export_csv(path, &raw_data) {
            Ok(()) => println!("  Raw data exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
        println!();
    }
}
