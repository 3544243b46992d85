// SPDX-License-Identifier: LGPL-3.0-or-later

//! 2x upsampler with a polyphase IIR half-band filter.
//!
//! Uses the same allpass cascade as the downsampler: every input sample
//! drives both polyphase paths and each path produces one of the two
//! output samples, so the anti-imaging filter runs at the input rate.

use halfband_dsp_lib::cascade::upsample_x2;
use halfband_dsp_lib::types::AllpassCascade;

use super::check_up;
use super::coefs::{HalfbandCoefs, coefs_array};
use crate::error::Result;

/// Half-band 2x upsampler with `N` allpass stages.
#[derive(Debug, Clone)]
pub struct Upsampler2x<const N: usize> {
    cascade: AllpassCascade<N>,
    configured: bool,
}

impl<const N: usize> Default for Upsampler2x<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Upsampler2x<N> {
    /// Number of allpass stages.
    pub const STAGES: usize = N;

    /// Create an upsampler with zero coefficients and cleared state.
    pub fn new() -> Self {
        Self {
            cascade: AllpassCascade::new(),
            configured: false,
        }
    }

    /// Create a configured upsampler from a coefficient set.
    pub fn from_config(coefs: &HalfbandCoefs) -> Result<Self> {
        let mut us = Self::new();
        us.set_coefs(coefs.as_array::<N>()?);
        Ok(us)
    }

    /// Load filter coefficients. The filter state is kept.
    pub fn set_coefs(&mut self, coefs: &[f64; N]) {
        self.cascade.set_coefs(coefs);
        self.configured = true;
        log::debug!("upsampler: loaded {} coefficients", N);
    }

    /// Load filter coefficients from a slice of runtime length.
    ///
    /// # Errors
    /// [`Error::CoefficientCount`](crate::Error::CoefficientCount) if
    /// `coefs.len() != N`; the current coefficients are kept.
    pub fn try_set_coefs(&mut self, coefs: &[f64]) -> Result<()> {
        let coefs = coefs_array::<N>(coefs)?;
        self.set_coefs(coefs);
        Ok(())
    }

    /// Current coefficients, narrowed to `f32`.
    pub fn coefs(&self) -> &[f32; N] {
        &self.cascade.coefs
    }

    /// Whether coefficients have been loaded since construction.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Clear the filter state. Coefficients are kept.
    pub fn reset(&mut self) {
        self.cascade.reset();
        log::trace!("upsampler: state cleared");
    }

    /// Upsample one sample into two.
    #[inline]
    pub fn process_sample(&mut self, input: f32) -> [f32; 2] {
        let mut even = input;
        let mut odd = input;
        self.cascade.process_pair(&mut even, &mut odd);
        [even, odd]
    }

    /// Upsample `src` into `dst`; `dst.len()` must be `2 * src.len()`.
    pub fn process_block(&mut self, dst: &mut [f32], src: &[f32]) {
        debug_assert!(!src.is_empty(), "empty block");
        debug_assert_eq!(dst.len(), src.len() * 2, "dst length must be 2 * src length");

        let c = &mut self.cascade;
        upsample_x2(dst, src, &c.coefs, &mut c.x, &mut c.y);
    }

    /// Checked [`process_block`](Self::process_block).
    ///
    /// # Errors
    /// [`Error::EmptyBlock`](crate::Error::EmptyBlock) or
    /// [`Error::BlockSize`](crate::Error::BlockSize); state is untouched
    /// on error.
    pub fn try_process_block(&mut self, dst: &mut [f32], src: &[f32]) -> Result<()> {
        check_up(src.len(), dst.len())?;
        self.process_block(dst, src);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HALFBAND_8, HALFBAND_12};
    use crate::error::Error;
    use crate::sampling::Downsampler2x;
    use float_cmp::assert_approx_eq;
    use std::f32::consts::PI;

    fn rms(buf: &[f32]) -> f32 {
        (buf.iter().map(|s| s * s).sum::<f32>() / buf.len() as f32).sqrt()
    }

    #[test]
    fn test_golden_impulse() {
        let mut us = Upsampler2x::<2>::new();
        us.set_coefs(&[0.3, 0.8]);
        let out = us.process_sample(1.0);
        assert_approx_eq!(f32, out[0], 0.3, epsilon = 1e-6);
        assert_approx_eq!(f32, out[1], 0.8, epsilon = 1e-6);

        let out = us.process_sample(0.0);
        // (0 - 0.3) * 0.3 + 1 and (0 - 0.8) * 0.8 + 1
        assert_approx_eq!(f32, out[0], 0.91, epsilon = 1e-6);
        assert_approx_eq!(f32, out[1], 0.36, epsilon = 1e-6);
    }

    #[test]
    fn test_block_matches_samples() {
        let src: Vec<f32> = (0..64).map(|i| (i as f32 * 0.37).sin()).collect();

        let mut a = Upsampler2x::<8>::new();
        a.set_coefs(&HALFBAND_8);
        let mut block = vec![0.0f32; 128];
        a.process_block(&mut block, &src);

        let mut b = Upsampler2x::<8>::new();
        b.set_coefs(&HALFBAND_8);
        let samples: Vec<f32> = src.iter().flat_map(|&s| b.process_sample(s)).collect();

        assert_eq!(block, samples);
    }

    #[test]
    fn test_dc_gain() {
        let mut us = Upsampler2x::<12>::new();
        us.set_coefs(&HALFBAND_12);
        let src = vec![0.5f32; 4096];
        let mut dst = vec![0.0f32; 8192];
        us.process_block(&mut dst, &src);
        for &s in &dst[8000..] {
            assert_approx_eq!(f32, s, 0.5, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_sine_round_trip_level() {
        let mut us = Upsampler2x::<12>::new();
        us.set_coefs(&HALFBAND_12);
        let mut ds = Downsampler2x::<12>::new();
        ds.set_coefs(&HALFBAND_12);

        // 0.05 of the base rate sits deep in the passband.
        let src: Vec<f32> = (0..4096).map(|i| (2.0 * PI * 0.05 * i as f32).sin()).collect();
        let mut up = vec![0.0f32; 8192];
        let mut down = vec![0.0f32; 4096];
        us.process_block(&mut up, &src);
        ds.process_block(&mut down, &up);

        assert_approx_eq!(f32, rms(&up[2048..]), rms(&src[1024..]), epsilon = 0.01);
        assert_approx_eq!(f32, rms(&down[1024..]), rms(&src[1024..]), epsilon = 0.01);
    }

    #[test]
    fn test_try_process_block() {
        let mut us = Upsampler2x::<8>::new();
        assert_eq!(us.try_process_block(&mut [], &[]), Err(Error::EmptyBlock));
        let mut dst = [0.0f32; 5];
        assert_eq!(
            us.try_process_block(&mut dst, &[0.0; 3]),
            Err(Error::BlockSize {
                input: 3,
                output: 5
            })
        );
        let mut dst = [0.0f32; 6];
        assert!(us.try_process_block(&mut dst, &[0.0; 3]).is_ok());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "dst length must be 2 * src length")]
    fn test_process_block_wrong_size_panics() {
        let mut us = Upsampler2x::<8>::new();
        let src = vec![0.0; 32];
        let mut dst = vec![0.0; 32]; // Wrong: should be 64
        us.process_block(&mut dst, &src);
    }

    #[test]
    fn test_config_and_reset() {
        let cfg = HalfbandCoefs::from(HALFBAND_8);
        let mut us = Upsampler2x::<8>::from_config(&cfg).unwrap();
        assert!(us.is_configured());
        assert!(Upsampler2x::<4>::from_config(&cfg).is_err());
        assert!(us.try_set_coefs(&[0.5; 3]).is_err());

        let first = us.process_sample(1.0);
        us.process_sample(0.25);
        us.reset();
        assert_eq!(us.process_sample(1.0), first);
        assert_eq!(us.coefs()[7], HALFBAND_8[7] as f32);
    }
}
