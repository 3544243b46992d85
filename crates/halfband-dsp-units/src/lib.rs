// SPDX-License-Identifier: LGPL-3.0-or-later

//! # halfband-dsp-units
//!
//! 2x resampling processors built on the polyphase allpass kernels of
//! [`halfband_dsp_lib`]. It includes:
//!
//! - **Downsampler2x**: decimation by 2, optionally split into a low band
//!   and a spectrum-flipped high band
//! - **Upsampler2x**: interpolation by 2
//! - **HalfbandCoefs**: coefficient sets loadable from configuration
//! - **Reference tables**: ready-made half-band coefficient sets
//!
//! ## Coefficients
//!
//! Filter coefficients come from an external half-band designer; this
//! crate does not compute them. Every coefficient must lie in `(0, 1)`
//! for the filter to be stable, which is not checked.
//!
//! ## Real-time use
//!
//! All processors keep their state in fixed-size arrays and never
//! allocate, lock, or log on the sample path. An instance serves one
//! stream; callers sharing it between threads must serialize access.

pub mod consts;
pub mod error;
pub mod sampling;

pub use error::{Error, Result};
