//! CSV export of raw benchmark rows.

use std::io::Write;

/// One exported row: a (kernel, variant, size) cell of the benchmark grid.
pub struct CsvRow {
    pub kernel: String,
    pub variant: String,
    pub input_size: usize,
    pub avg: f64,
    pub result_sample: Option<f64>,
}

/// Write rows as `kernel,variant,compiler,input_size,avg_<unit>,result`.
/// The compiler column is only filled for the C variants.
pub fn export_csv(path: &str, rows: &[CsvRow]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(
        file,
        "kernel,variant,compiler,input_size,avg_{},result",
        crate::utils::bench::unit_name()
    )?;

    for row in rows {
        let compiler = if row.variant.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("unknown")
        } else {
            ""
        };

        writeln!(
            file,
            "{},{},{},{},{:.1},{}",
            row.kernel,
            row.variant,
            compiler,
            row.input_size,
            row.avg,
            row.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}
