// SPDX-License-Identifier: LGPL-3.0-or-later

//! 2x downsampler with a polyphase IIR half-band filter.
//!
//! The anti-aliasing filter is a pair of allpass chains working at the
//! output rate, one per polyphase branch of the input. Averaging both
//! branches gives the lower half of the spectrum; their difference gives
//! the complementary upper half, spectrum-flipped by the decimation.
//!
//! The filter is recursive, so its state carries over between calls and
//! the phase response is not linear.

use halfband_dsp_lib::cascade::{
    downsample_x2, downsample_x2_in_place, downsample_x2_split, downsample_x2_split_in_place,
};
use halfband_dsp_lib::types::AllpassCascade;

use super::coefs::{HalfbandCoefs, coefs_array};
use super::{check_down, check_split};
use crate::error::Result;

/// Half-band 2x downsampler with `N` allpass stages.
///
/// # Examples
/// ```
/// use halfband_dsp_units::consts::HALFBAND_8;
/// use halfband_dsp_units::sampling::Downsampler2x;
///
/// let mut ds = Downsampler2x::<8>::new();
/// ds.set_coefs(&HALFBAND_8);
///
/// let input = vec![0.5f32; 256];
/// let mut output = vec![0.0f32; 128];
/// ds.process_block(&mut output, &input);
/// ```
#[derive(Debug, Clone)]
pub struct Downsampler2x<const N: usize> {
    cascade: AllpassCascade<N>,
    configured: bool,
}

impl<const N: usize> Default for Downsampler2x<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Downsampler2x<N> {
    /// Number of allpass stages.
    pub const STAGES: usize = N;

    /// Create a downsampler with zero coefficients and cleared state.
    ///
    /// Zero coefficients turn every stage into a plain delay, so output is
    /// well defined but not band-limited until [`set_coefs`](Self::set_coefs)
    /// is called.
    pub fn new() -> Self {
        Self {
            cascade: AllpassCascade::new(),
            configured: false,
        }
    }

    /// Create a configured downsampler from a coefficient set.
    pub fn from_config(coefs: &HalfbandCoefs) -> Result<Self> {
        let mut ds = Self::new();
        ds.set_coefs(coefs.as_array::<N>()?);
        Ok(ds)
    }

    /// Load filter coefficients.
    ///
    /// The filter state is kept, so coefficients can be swapped while a
    /// stream is running. Each coefficient must lie in `(0, 1)`; this is
    /// not checked.
    pub fn set_coefs(&mut self, coefs: &[f64; N]) {
        self.cascade.set_coefs(coefs);
        self.configured = true;
        log::debug!("downsampler: loaded {} coefficients", N);
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

    /// Clear the filter state, as if it had processed silence forever.
    /// Coefficients are kept.
    pub fn reset(&mut self) {
        self.cascade.reset();
        log::trace!("downsampler: state cleared");
    }

    /// Downsample one pair of samples `[even, odd]` into one output sample.
    #[inline]
    pub fn process_sample(&mut self, input: &[f32; 2]) -> f32 {
        let (spl_0, spl_1) = self.run(input);
        0.5 * (spl_0 + spl_1)
    }

    /// Split one pair of samples into `(low, high)` half-band samples.
    ///
    /// `low` is identical to [`process_sample`](Self::process_sample).
    /// `high` is the complementary upper band, critically sampled, which
    /// mirrors its spectrum: `fs/4..fs/2` becomes `fs/4..0`.
    #[inline]
    pub fn process_sample_split(&mut self, input: &[f32; 2]) -> (f32, f32) {
        let (spl_0, spl_1) = self.run(input);
        let low = 0.5 * (spl_0 + spl_1);
        (low, spl_0 - low)
    }

    /// Downsample `src` into `dst`.
    ///
    /// `src.len()` must be `2 * dst.len()` and `dst` must not be empty.
    /// Equivalent to calling [`process_sample`](Self::process_sample) on
    /// each consecutive pair.
    pub fn process_block(&mut self, dst: &mut [f32], src: &[f32]) {
        debug_assert!(!dst.is_empty(), "empty block");
        debug_assert_eq!(src.len(), dst.len() * 2, "src length must be 2 * dst length");

        let c = &mut self.cascade;
        downsample_x2(dst, src, &c.coefs, &mut c.x, &mut c.y);
    }

    /// Downsample `buf` in place; the output lands in `buf[..buf.len() / 2]`.
    ///
    /// `buf.len()` must be even and non-zero.
    pub fn process_block_in_place(&mut self, buf: &mut [f32]) {
        debug_assert!(!buf.is_empty(), "empty block");
        debug_assert!(buf.len() % 2 == 0, "buffer length must be even");

        let c = &mut self.cascade;
        downsample_x2_in_place(buf, 0, &c.coefs, &mut c.x, &mut c.y);
    }

    /// Downsample `count` pairs starting at `buf[src_start]` into
    /// `buf[dst_start..dst_start + count]`, within the same buffer.
    ///
    /// The output region may overlap the input as long as it does not start
    /// after it (`dst_start <= src_start`). An output region placed entirely
    /// after the input does not overlap it; split the buffer with
    /// [`slice::split_at_mut`] and use [`process_block`](Self::process_block).
    ///
    /// # Panics
    /// Panics if `dst_start > src_start` or `src_start + 2 * count` exceeds
    /// `buf.len()`.
    pub fn process_block_overlapping(
        &mut self,
        buf: &mut [f32],
        dst_start: usize,
        src_start: usize,
        count: usize,
    ) {
        debug_assert!(count > 0, "empty block");
        assert!(dst_start <= src_start, "output must not start after input");

        let window = &mut buf[dst_start..src_start + count * 2];
        let c = &mut self.cascade;
        downsample_x2_in_place(window, src_start - dst_start, &c.coefs, &mut c.x, &mut c.y);
    }

    /// Split `src` into low and high half bands.
    ///
    /// `low` and `high` must have the same non-zero length and
    /// `src.len()` must be twice that.
    pub fn process_block_split(&mut self, low: &mut [f32], high: &mut [f32], src: &[f32]) {
        debug_assert!(!low.is_empty(), "empty block");
        debug_assert_eq!(low.len(), high.len(), "low/high length mismatch");
        debug_assert_eq!(src.len(), low.len() * 2, "src length must be 2 * dst length");

        let c = &mut self.cascade;
        downsample_x2_split(low, high, src, &c.coefs, &mut c.x, &mut c.y);
    }

    /// Split `buf` in place: the low band lands in `buf[..high.len()]`.
    ///
    /// `buf.len()` must be `2 * high.len()` and non-zero.
    pub fn process_block_split_in_place(&mut self, buf: &mut [f32], high: &mut [f32]) {
        debug_assert!(!high.is_empty(), "empty block");
        debug_assert_eq!(buf.len(), high.len() * 2, "buffer length must be 2 * high length");

        let c = &mut self.cascade;
        downsample_x2_split_in_place(buf, 0, high, &c.coefs, &mut c.x, &mut c.y);
    }

    /// Split `high.len()` pairs starting at `buf[src_start]`; the low band
    /// lands in `buf[dst_start..dst_start + high.len()]`, the high band in
    /// `high`.
    ///
    /// Same overlap rule as
    /// [`process_block_overlapping`](Self::process_block_overlapping).
    ///
    /// # Panics
    /// Panics if `dst_start > src_start` or `src_start + 2 * high.len()`
    /// exceeds `buf.len()`.
    pub fn process_block_split_overlapping(
        &mut self,
        buf: &mut [f32],
        high: &mut [f32],
        dst_start: usize,
        src_start: usize,
    ) {
        debug_assert!(!high.is_empty(), "empty block");
        assert!(dst_start <= src_start, "output must not start after input");

        let window = &mut buf[dst_start..src_start + high.len() * 2];
        let c = &mut self.cascade;
        downsample_x2_split_in_place(
            window,
            src_start - dst_start,
            high,
            &c.coefs,
            &mut c.x,
            &mut c.y,
        );
    }

    /// Checked [`process_block`](Self::process_block).
    ///
    /// # Errors
    /// [`Error::EmptyBlock`](crate::Error::EmptyBlock) or
    /// [`Error::BlockSize`](crate::Error::BlockSize); state is untouched
    /// on error.
    pub fn try_process_block(&mut self, dst: &mut [f32], src: &[f32]) -> Result<()> {
        check_down(src.len(), dst.len())?;
        self.process_block(dst, src);
        Ok(())
    }

    /// Checked [`process_block_split`](Self::process_block_split).
    ///
    /// # Errors
    /// [`Error::BandSize`](crate::Error::BandSize) in addition to the
    /// errors of [`try_process_block`](Self::try_process_block).
    pub fn try_process_block_split(
        &mut self,
        low: &mut [f32],
        high: &mut [f32],
        src: &[f32],
    ) -> Result<()> {
        check_split(low.len(), high.len())?;
        check_down(src.len(), low.len())?;
        self.process_block_split(low, high, src);
        Ok(())
    }

    /// Run one input pair through the cascade. The later sample of the
    /// pair drives the first path.
    #[inline(always)]
    fn run(&mut self, input: &[f32; 2]) -> (f32, f32) {
        let mut spl_0 = input[1];
        let mut spl_1 = input[0];
        self.cascade.process_pair(&mut spl_0, &mut spl_1);
        (spl_0, spl_1)
    }
}
