//! Golden-value oracle for one worker of the array.
//!
//! Prints the expected accumulator for the stimulus window of the worker
//! under test: one plain decimal integer on stdout, nothing else, so the
//! output can be diffed against what the testbench reports for that
//! worker.

use matvec_bench::stimulus;

/// Worker under test. The array has workers 0..=15; worker 0 holds the
/// last window of the stimulus matrix.
const WID: i64 = 0;

fn main() {
    println!("{}", stimulus::golden(WID));
}
