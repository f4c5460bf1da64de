//! Benchmark and verification CLI.
//!
//! Usage:
//!   mvbench                 # verify + benchmark all kernels, then trials
//!   mvbench matvec          # benchmark one kernel family
//!   mvbench --list          # list kernel families
//!   mvbench -m 4 -n 16      # trial harness dimensions
//!   mvbench --help          # full flag reference

use matvec_bench::harness::{self, TrialOpts};
use matvec_bench::registry::{build_registry, KernelRunner};
use matvec_bench::tui;
use matvec_bench::utils::bench::time_seed;
use matvec_bench::utils::csv::{export_csv, CsvRow};
use matvec_bench::utils::timer::{measure_variants, TimingConfig};
use std::env;
use std::process;

#[derive(Debug)]
struct Cli {
    list: bool,
    help: bool,
    hardware: bool,
    sizes: Vec<usize>,
    samples: usize,
    seed: Option<u64>,
    n_matrices: usize,
    n_vectors: usize,
    csv_path: Option<String>,
    kernel: Option<String>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            list: false,
            help: false,
            hardware: false,
            sizes: vec![16, 64, 256, 1024],
            samples: 30,
            seed: None,
            n_matrices: 1,
            n_vectors: 1,
            csv_path: None,
            kernel: None,
        }
    }
}

fn parse_positive(value: Option<&String>, flag: &str) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!(
            "{flag} must be a strictly positive integer, got '{value}'"
        )),
    }
}

fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut cli = Cli::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => cli.list = true,
            "--help" | "-h" => cli.help = true,
            "--hardware" | "-w" => cli.hardware = true,
            "--sizes" => {
                i += 1;
                let value = args.get(i).ok_or("--sizes needs a value")?;
                cli.sizes = value
                    .split(',')
                    .map(|s| {
                        s.trim()
                            .parse::<usize>()
                            .map_err(|_| format!("invalid size '{}'", s.trim()))
                    })
                    .collect::<Result<Vec<usize>, String>>()?;
                if cli.sizes.is_empty() {
                    return Err("--sizes needs at least one size".to_string());
                }
            }
            "--iter" | "-r" => {
                i += 1;
                cli.samples = parse_positive(args.get(i), "--iter")?;
            }
            "--seed" | "-s" => {
                i += 1;
                let value = args.get(i).ok_or("--seed needs a value")?;
                cli.seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("--seed must be an integer, got '{value}'"))?,
                );
            }
            "--n-matrices" | "-m" => {
                i += 1;
                cli.n_matrices = parse_positive(args.get(i), "--n-matrices")?;
            }
            "--n-vectors" | "-n" => {
                i += 1;
                cli.n_vectors = parse_positive(args.get(i), "--n-vectors")?;
            }
            "--csv" => {
                i += 1;
                cli.csv_path = Some(args.get(i).ok_or("--csv needs a path")?.clone());
            }
            arg if !arg.starts_with('-') => cli.kernel = Some(arg.to_string()),
            arg => return Err(format!("unknown option: {arg}")),
        }
        i += 1;
    }

    Ok(cli)
}

fn run_kernel(
    kernel: &dyn KernelRunner,
    sizes: &[usize],
    seed: u64,
    config: &TimingConfig,
    csv_rows: &mut Vec<CsvRow>,
) {
    tui::print_kernel_info_box(kernel);

    match kernel.verify() {
        Ok(()) => println!("  verification: all variants agree with 'original'"),
        Err(e) => {
            eprintln!("  verification FAILED: {e}");
            process::exit(1);
        }
    }
    println!();

    for &size in sizes {
        let results = measure_variants(kernel.variant_closures(size, seed), config);
        tui::print_results_table(&results, size, true);

        for result in &results {
            csv_rows.push(CsvRow {
                kernel: kernel.name().to_string(),
                variant: result.name.clone(),
                input_size: size,
                avg: result.stats.avg,
                result_sample: result.result_sample,
            });
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Try 'mvbench --help'.");
            process::exit(1);
        }
    };

    if cli.help {
        tui::print_help();
        return;
    }

    let registry = build_registry();

    if cli.list {
        tui::print_available_kernels(&registry);
        return;
    }

    if cli.hardware {
        tui::print_hardware();
        return;
    }

    let seed = cli.seed.unwrap_or_else(time_seed);
    let config = TimingConfig {
        samples: cli.samples,
        ..TimingConfig::default()
    };

    tui::print_header();
    eprintln!("Seed: {seed}");
    println!();

    let mut csv_rows: Vec<CsvRow> = Vec::new();

    match &cli.kernel {
        Some(name) => match registry.find(name) {
            Some(kernel) => run_kernel(kernel, &cli.sizes, seed, &config, &mut csv_rows),
            None => {
                eprintln!("Kernel '{name}' not found.");
                eprintln!("Available: {:?}", registry.list_names());
                process::exit(1);
            }
        },
        None => {
            for kernel in registry.all() {
                run_kernel(kernel.as_ref(), &cli.sizes, seed, &config, &mut csv_rows);
            }

            let opts = TrialOpts {
                n_matrices: cli.n_matrices,
                n_vectors: cli.n_vectors,
                seed,
            };
            match harness::run_trials(&opts) {
                Ok(stats) => harness::print_results(&stats),
                Err(e) => {
                    eprintln!("trial harness failed: {e}");
                    process::exit(1);
                }
            }
        }
    }

    if let Some(path) = &cli.csv_path {
        if let Err(e) = export_csv(path, &csv_rows) {
            eprintln!("could not write CSV '{path}': {e}");
            process::exit(1);
        }
        eprintln!("Raw rows written to {path}");
    }

    println!();
    println!("Note: Speedup is relative to the first variant ('original').");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, String> {
        let mut full = vec!["mvbench".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        parse_args(&full)
    }

    #[test]
    fn defaults_without_flags() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.sizes, vec![16, 64, 256, 1024]);
        assert_eq!(cli.samples, 30);
        assert_eq!(cli.n_matrices, 1);
        assert_eq!(cli.n_vectors, 1);
        assert!(cli.seed.is_none());
        assert!(cli.kernel.is_none());
        assert!(!cli.list && !cli.help && !cli.hardware);
    }

    #[test]
    fn trial_flags_short_and_long() {
        let cli = parse(&["-m", "4", "-n", "8", "-s", "42"]).unwrap();
        assert_eq!(cli.n_matrices, 4);
        assert_eq!(cli.n_vectors, 8);
        assert_eq!(cli.seed, Some(42));

        let cli = parse(&["--n-matrices", "2", "--n-vectors", "3", "--seed", "7"]).unwrap();
        assert_eq!(cli.n_matrices, 2);
        assert_eq!(cli.n_vectors, 3);
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn rejects_non_positive_counts() {
        assert!(parse(&["-m", "0"]).unwrap_err().contains("strictly positive"));
        assert!(parse(&["-n", "-3"]).unwrap_err().contains("strictly positive"));
        assert!(parse(&["--iter", "abc"]).unwrap_err().contains("strictly positive"));
    }

    #[test]
    fn rejects_missing_values_and_unknown_flags() {
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--csv"]).is_err());
        assert!(parse(&["--frobnicate"]).unwrap_err().contains("unknown option"));
    }

    #[test]
    fn sizes_list_parses_and_validates() {
        let cli = parse(&["--sizes", "16, 32,64"]).unwrap();
        assert_eq!(cli.sizes, vec![16, 32, 64]);
        assert!(parse(&["--sizes", "16,x"]).unwrap_err().contains("invalid size"));
    }

    #[test]
    fn positional_selects_the_kernel() {
        let cli = parse(&["matvec", "--iter", "5"]).unwrap();
        assert_eq!(cli.kernel.as_deref(), Some("matvec"));
        assert_eq!(cli.samples, 5);
    }

    #[test]
    fn mode_flags() {
        assert!(parse(&["--list"]).unwrap().list);
        assert!(parse(&["-w"]).unwrap().hardware);
        assert!(parse(&["--help"]).unwrap().help);
        assert_eq!(
            parse(&["--csv", "out.csv"]).unwrap().csv_path.as_deref(),
            Some("out.csv")
        );
    }
}
