//! Terminal output for the CLI.

use crate::registry::{KernelRegistry, KernelRunner};
use crate::utils::bench::{format_measurement, unit_name};
use crate::utils::timer::VariantResult;
use terminal_size::{terminal_size, Width};

/// Current terminal width, constrained to a sane range.
fn term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate with ellipsis if `s` exceeds `width` (character-wise).
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

pub fn print_header() {
    let width = term_width().min(80);
    let title = " matvec-bench ";
    let padding = width.saturating_sub(title.len() + 2) / 2;
    let right_padding = width.saturating_sub(padding + title.len());

    let border = "═".repeat(width);
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

/// Info box for one kernel family.
pub fn print_kernel_info_box(kernel: &dyn KernelRunner) {
    let max_content_width = term_width().saturating_sub(4).max(40);

    let name_line = format!("Kernel:   {}", kernel.name());
    let cat_line = format!("Category: {}", kernel.category());
    let desc_line = kernel.description().to_string();
    let var_line = format!("Variants: {}", kernel.available_variants().join(", "));

    let content_width = [
        name_line.len(),
        cat_line.len(),
        desc_line.len(),
        var_line.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [&name_line, &cat_line, &desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Results table for one input size. Speedup and the result-error column
/// are relative to the first row, which is always the reference variant.
pub fn print_results_table(results: &[VariantResult], size: usize, show_size: bool) {
    if results.is_empty() {
        return;
    }

    let variant_col_width = term_width().saturating_sub(72).max(15);
    let table_width = variant_col_width + 70;

    let baseline_avg = results[0].stats.avg;
    let baseline_output = results[0].result_sample;

    if show_size {
        println!(
            "  Size: {} ({} samples, unit: {})",
            size,
            results[0].samples,
            unit_name()
        );
    }
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
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
        let speedup = if result.stats.avg > 0.0 {
            baseline_avg / result.stats.avg
        } else {
            0.0
        };

        let cv = if result.stats.avg > 0.0 {
            result.stats.std_dev as f64 / result.stats.avg
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_output) {
            (Some(out), Some(base)) => {
                let diff = (out - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        let display_name = if result.name.starts_with("c-") {
            match crate::utils::C_COMPILER_NAME {
                Some(c) => format!("{} ({})", result.name, c),
                None => result.name.clone(),
            }
        } else {
            result.name.clone()
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.stats.avg as u64),
            format_measurement(result.stats.min),
            format_measurement(result.stats.max),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Status block for the modeled device and the build.
pub fn print_hardware() {
    println!(
        "Device model: {}x{} worker array, one dot-product worker per output row",
        crate::accel::HEIGHT,
        crate::accel::WIDTH
    );
    match (crate::utils::C_KERNELS_AVAILABLE, crate::utils::C_COMPILER_NAME) {
        (true, Some(cc)) => println!("C kernels:    enabled ({})", cc),
        _ => println!("C kernels:    disabled (no C compiler at build time)"),
    }
    println!("Measurement:  {}", unit_name());
}

pub fn print_help() {
    println!("Usage: mvbench [OPTIONS] [KERNEL]");
    println!();
    println!("Options:");
    println!("  --list, -l          List all available kernels");
    println!("  --help, -h          Show this help message");
    println!("  --hardware, -w      Show the modeled device and build status");
    println!("  --sizes SIZES       Comma-separated input sizes (default: 16,64,256,1024)");
    println!("  --iter N, -r N      Measurement samples per variant (default: 30)");
    println!("  --seed N, -s N      Seed for input data and trials (default: time-based)");
    println!("  --n-matrices N, -m  Random matrices for the trial harness (default: 1)");
    println!("  --n-vectors N, -n   Vectors streamed per matrix (default: 1)");
    println!("  --csv PATH          Export raw benchmark rows to a CSV file");
    println!();
    println!("Arguments:");
    println!("  KERNEL              Benchmark only this kernel family (omit for all)");
    println!();
    println!("Examples:");
    println!("  mvbench                     # verify + benchmark everything, then trials");
    println!("  mvbench matvec              # benchmark only matvec");
    println!("  mvbench -m 8 -n 64 -s 42    # bigger, reproducible trial run");
    println!("  mvbench --sizes 16,32       # custom sizes");
    println!("  mvbench --csv runs.csv      # export raw rows");
}

pub fn print_available_kernels(registry: &KernelRegistry) {
    println!("Available kernels:");
    println!();
    for kernel in registry.all() {
        println!(
            "  {:<14} [{}] - {}",
            kernel.name(),
            kernel.category(),
            kernel.description()
        );
    }
}
