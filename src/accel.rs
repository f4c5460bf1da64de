//! Software model of the worker-array matrix-vector accelerator.
//!
//! The modeled device is a fixed 16x16 array: one worker per output row,
//! each holding a private bank of 16 coefficients and folding it with the
//! broadcast input vector. Two quirks of the real device are kept:
//!
//! * Coefficients stream in row-major order but fill the banks back to
//!   front, so worker 0 ends up with the LAST matrix row.
//! * Results come back in worker order, which is therefore reversed row
//!   order. [`WorkerArray::compute_raw`] exposes that wire order;
//!   [`WorkerArray::compute`] un-reverses it into the driver view.

use crate::math::dot_product::dot_product_original;
use thiserror::Error;

pub const HEIGHT: usize = 16;
pub const WIDTH: usize = 16;
pub const FLAT_LEN: usize = HEIGHT * WIDTH;
/// One worker per output row.
pub const WORKERS: usize = HEIGHT;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccelError {
    #[error("matrix has {got} coefficients, the 16x16 array takes exactly 256")]
    MatrixShape { got: usize },
    #[error("input vector has {got} elements, the array width is 16")]
    VectorShape { got: usize },
    #[error("output has {got} slots, the array produces 16 results")]
    OutputShape { got: usize },
    #[error("no matrix programmed")]
    NotProgrammed,
}

/// Flat (0-based, row-major) coefficient range landing in worker `w`'s bank.
pub fn worker_slice(w: usize) -> std::ops::Range<usize> {
    let start = FLAT_LEN - (w + 1) * WIDTH;
    start..start + WIDTH
}

pub struct WorkerArray {
    banks: Vec<[f32; WIDTH]>,
    programmed: bool,
}

impl WorkerArray {
    pub fn new() -> Self {
        Self {
            banks: vec![[0.0; WIDTH]; WORKERS],
            programmed: false,
        }
    }

    /// Load a row-major 16x16 coefficient matrix into the worker banks.
    pub fn program(&mut self, mat: &[f32]) -> Result<(), AccelError> {
        if mat.len() != FLAT_LEN {
            return Err(AccelError::MatrixShape { got: mat.len() });
        }
        for (w, bank) in self.banks.iter_mut().enumerate() {
            bank.copy_from_slice(&mat[worker_slice(w)]);
        }
        self.programmed = true;
        Ok(())
    }

    /// Run the array; results land in wire order, `raw[w]` being worker
    /// `w`'s accumulator.
    pub fn compute_raw(&self, vec: &[f32], raw: &mut [f32]) -> Result<(), AccelError> {
        if !self.programmed {
            return Err(AccelError::NotProgrammed);
        }
        if vec.len() != WIDTH {
            return Err(AccelError::VectorShape { got: vec.len() });
        }
        if raw.len() != WORKERS {
            return Err(AccelError::OutputShape { got: raw.len() });
        }
        for (bank, acc) in self.banks.iter().zip(raw.iter_mut()) {
            *acc = dot_product_original(bank, vec);
        }
        Ok(())
    }

    /// Run the array and un-reverse the results into row order, the view a
    /// driver hands back to callers: worker `w` lands at `out[15 - w]`.
    pub fn compute(&self, vec: &[f32], out: &mut [f32]) -> Result<(), AccelError> {
        if out.len() != HEIGHT {
            return Err(AccelError::OutputShape { got: out.len() });
        }
        let mut raw = [0.0f32; WORKERS];
        self.compute_raw(vec, &mut raw)?;
        for (w, acc) in raw.into_iter().enumerate() {
            out[HEIGHT - 1 - w] = acc;
        }
        Ok(())
    }

    /// Worker `w`'s coefficient bank.
    pub fn bank(&self, w: usize) -> &[f32] {
        &self.banks[w]
    }
}

impl Default for WorkerArray {
    fn default() -> Self {
        Self::new()
    }
}

/// Variant-table entry: program the array with `mat` and compute in one
/// call. Only the 16x16 geometry exists on the device.
///
/// # Panics
/// Panics when the slice shapes do not match the array geometry, like the
/// other kernel variants do.
pub fn matvec_worker_array(mat: &[f32], vec: &[f32], out: &mut [f32]) {
    let mut array = WorkerArray::new();
    array
        .program(mat)
        .expect("worker-array kernel needs a 16x16 matrix");
    array
        .compute(vec, out)
        .expect("worker-array kernel needs width-16 vector and height-16 output");
}
