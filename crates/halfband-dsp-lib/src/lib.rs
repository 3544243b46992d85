// SPDX-License-Identifier: LGPL-3.0-or-later

//! # halfband-dsp-lib
//!
//! Low-level kernels for 2x resampling with polyphase IIR half-band
//! filters built from cascaded first-order allpass sections.
//!
//! This crate provides the primitives used by `halfband-dsp-units` to
//! build complete up/downsamplers:
//!
//! - **Types**: [`types::AllpassCascade`], coefficients plus per-stage memory
//! - **Cascade**: the stage recursion on a pair of polyphase samples
//! - **Block kernels**: downsample, spectrum split, in-place and upsample
//!
//! ## Design
//!
//! Block kernels use runtime SIMD dispatch via the `multiversion` crate.
//! Each annotated function is compiled for AVX2+FMA, AVX, SSE4.1, and
//! NEON targets; the best variant is selected automatically at startup.
//! The per-sample stage recursion is `#[inline(always)]` so it is compiled
//! into every variant.

pub mod cascade;
pub mod types;
