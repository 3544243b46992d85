// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error type for the checked resampler API.
//!
//! The unchecked hot-path methods treat size and coefficient-count
//! mismatches as programmer errors (`debug_assert!`). The `try_*` methods
//! and configuration loaders report them through [`Error`] instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("expected {expected} coefficients, got {actual}")]
    CoefficientCount { expected: usize, actual: usize },

    #[error("block must produce at least one sample")]
    EmptyBlock,

    #[error("block size mismatch: {input} input samples for {output} output samples")]
    BlockSize { input: usize, output: usize },

    #[error("band size mismatch: {low} low-band samples, {high} high-band samples")]
    BandSize { low: usize, high: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
