//! Execution strategies for full-grid passes.
//!
//! Every engine pass (resample, index, colorize) computes each output cell
//! independently, so the same per-row closure can run single-threaded or on
//! the rayon pool. The output buffer is partitioned into disjoint row
//! slices, so parallel workers never contend on a write.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Execution strategy for a grid pass.
///
/// Both modes run identical per-pixel arithmetic; selecting one is a
/// configuration choice, not a change of algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded reference path.
    Scalar,
    /// Row-parallel path on the rayon thread pool.
    #[default]
    Parallel,
}

impl ExecutionMode {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "scalar" | "sequential" => Self::Scalar,
            _ => Self::Parallel,
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Run `f(row_index, row_slice)` once per row of `buf`.
///
/// `row_len` is the slice length per row and must be non-zero and divide
/// `buf.len()` evenly.
pub fn for_each_row<T, F>(mode: ExecutionMode, buf: &mut [T], row_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    match mode {
        ExecutionMode::Scalar => {
            for (row, chunk) in buf.chunks_mut(row_len).enumerate() {
                f(row, chunk);
            }
        }
        ExecutionMode::Parallel => {
            buf.par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(row, chunk)| f(row, chunk));
        }
    }
}

/// Fallible variant of [`for_each_row`]; the first error aborts the pass.
pub fn try_for_each_row<T, E, F>(
    mode: ExecutionMode,
    buf: &mut [T],
    row_len: usize,
    f: F,
) -> Result<(), E>
where
    T: Send,
    E: Send,
    F: Fn(usize, &mut [T]) -> Result<(), E> + Sync + Send,
{
    match mode {
        ExecutionMode::Scalar => buf
            .chunks_mut(row_len)
            .enumerate()
            .try_for_each(|(row, chunk)| f(row, chunk)),
        ExecutionMode::Parallel => buf
            .par_chunks_mut(row_len)
            .enumerate()
            .try_for_each(|(row, chunk)| f(row, chunk)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_modes_visit_every_row() {
        for mode in [ExecutionMode::Scalar, ExecutionMode::Parallel] {
            let mut buf = vec![0u32; 12];
            for_each_row(mode, &mut buf, 4, |row, chunk| {
                for (col, cell) in chunk.iter_mut().enumerate() {
                    *cell = (row * 4 + col) as u32;
                }
            });
            let expected: Vec<u32> = (0..12).collect();
            assert_eq!(buf, expected, "mode {}", mode);
        }
    }

    #[test]
    fn test_try_variant_propagates_error() {
        for mode in [ExecutionMode::Scalar, ExecutionMode::Parallel] {
            let mut buf = vec![0u8; 8];
            let result = try_for_each_row(mode, &mut buf, 2, |row, _chunk| {
                if row == 2 {
                    Err("boom")
                } else {
                    Ok(())
                }
            });
            assert_eq!(result, Err("boom"), "mode {}", mode);
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(ExecutionMode::from_str("scalar"), ExecutionMode::Scalar);
        assert_eq!(ExecutionMode::from_str("SEQUENTIAL"), ExecutionMode::Scalar);
        assert_eq!(ExecutionMode::from_str("parallel"), ExecutionMode::Parallel);
        assert_eq!(ExecutionMode::from_str("anything"), ExecutionMode::Parallel);
    }
}
