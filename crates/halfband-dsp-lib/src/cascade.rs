// SPDX-License-Identifier: LGPL-3.0-or-later

//! Polyphase allpass cascade processing.
//!
//! A 2x half-band IIR filter is split into two polyphase paths, each a
//! chain of first-order allpass sections running at the low rate. The
//! stages of both paths are stored interleaved in a single coefficient
//! array: stage 0 belongs to the first path, stage 1 to the second,
//! stage 2 to the first again, and so on. Every stage computes:
//! ```text
//!   t    = (s - y[i]) * c[i] + x[i]
//!   x[i] = s
//!   y[i] = t
//!   s    = t
//! ```
//! after which the roles of the two running samples swap for stage `i + 1`.
//!
//! The stage order and the role swap define the transfer function; running
//! the stages in another order, or as two independent chains with a
//! different coefficient assignment, yields a different filter.

use multiversion::multiversion;

/// Run two polyphase samples through an allpass cascade.
///
/// `spl_a` enters stage 0, `spl_b` enters stage 1; on return each holds the
/// output of its own path. `coefs`, `x` and `y` must have the same length.
#[inline(always)]
pub fn apply_cascade(
    spl_a: &mut f32,
    spl_b: &mut f32,
    coefs: &[f32],
    x: &mut [f32],
    y: &mut [f32],
) {
    debug_assert_eq!(x.len(), coefs.len(), "x memory length != stage count");
    debug_assert_eq!(y.len(), coefs.len(), "y memory length != stage count");

    let mut cur = spl_a;
    let mut other = spl_b;
    for ((&c, xm), ym) in coefs.iter().zip(x.iter_mut()).zip(y.iter_mut()) {
        let tmp = (*cur - *ym) * c + *xm;
        *xm = *cur;
        *ym = tmp;
        *cur = tmp;
        core::mem::swap(&mut cur, &mut other);
    }
}

/// Downsample `src` by 2 into `dst`.
///
/// Each input pair `[even, odd]` is fed to the cascade as `(odd, even)`;
/// the output is the mean of both path outputs.
/// `src.len()` must be `2 * dst.len()`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn downsample_x2(dst: &mut [f32], src: &[f32], coefs: &[f32], x: &mut [f32], y: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len() * 2, "src length must be 2 * dst length");

    for (out, pair) in dst.iter_mut().zip(src.chunks_exact(2)) {
        let mut spl_0 = pair[1];
        let mut spl_1 = pair[0];
        apply_cascade(&mut spl_0, &mut spl_1, coefs, x, y);
        *out = 0.5 * (spl_0 + spl_1);
    }
}

/// Downsample `src` by 2, splitting the spectrum in two halves.
///
/// `low` receives the same signal as [`downsample_x2`]. `high` receives
/// the complementary upper half band, critically sampled, so its spectrum
/// is mirrored (`fs/4..fs/2` maps to `fs/4..0`).
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn downsample_x2_split(
    low: &mut [f32],
    high: &mut [f32],
    src: &[f32],
    coefs: &[f32],
    x: &mut [f32],
    y: &mut [f32],
) {
    debug_assert_eq!(low.len(), high.len(), "low/high length mismatch");
    debug_assert_eq!(src.len(), low.len() * 2, "src length must be 2 * dst length");

    for ((l, h), pair) in low
        .iter_mut()
        .zip(high.iter_mut())
        .zip(src.chunks_exact(2))
    {
        let mut spl_0 = pair[1];
        let mut spl_1 = pair[0];
        apply_cascade(&mut spl_0, &mut spl_1, coefs, x, y);
        *l = 0.5 * (spl_0 + spl_1);
        *h = spl_0 - *l;
    }
}

/// Downsample by 2 within a single buffer.
///
/// Pairs are read from `buf[src_offset..]` and the results written to
/// `buf[..(buf.len() - src_offset) / 2]`. Output `n` lands at index `n`,
/// never past `src_offset + 2 * n`, so it only overwrites samples that
/// have already been consumed.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn downsample_x2_in_place(
    buf: &mut [f32],
    src_offset: usize,
    coefs: &[f32],
    x: &mut [f32],
    y: &mut [f32],
) {
    debug_assert!(src_offset <= buf.len(), "source offset out of range");
    debug_assert!((buf.len() - src_offset) % 2 == 0, "source length must be even");

    let count = (buf.len() - src_offset) / 2;
    for pos in 0..count {
        let i = src_offset + pos * 2;
        let mut spl_0 = buf[i + 1];
        let mut spl_1 = buf[i];
        apply_cascade(&mut spl_0, &mut spl_1, coefs, x, y);
        buf[pos] = 0.5 * (spl_0 + spl_1);
    }
}

/// Split within a single buffer.
///
/// Pairs are read from `buf[src_offset..]`; the low band is written to
/// `buf[..high.len()]` and the high band to `high`. As with
/// [`downsample_x2_in_place`], each low-band sample only overwrites input
/// that has already been consumed.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn downsample_x2_split_in_place(
    buf: &mut [f32],
    src_offset: usize,
    high: &mut [f32],
    coefs: &[f32],
    x: &mut [f32],
    y: &mut [f32],
) {
    debug_assert!(src_offset <= buf.len(), "source offset out of range");
    debug_assert_eq!(
        buf.len() - src_offset,
        high.len() * 2,
        "source length must be 2 * high length"
    );

    for (pos, h) in high.iter_mut().enumerate() {
        let i = src_offset + pos * 2;
        let mut spl_0 = buf[i + 1];
        let mut spl_1 = buf[i];
        apply_cascade(&mut spl_0, &mut spl_1, coefs, x, y);
        let l = 0.5 * (spl_0 + spl_1);
        buf[pos] = l;
        *h = spl_0 - l;
    }
}

/// Upsample `src` by 2 into `dst`.
///
/// Each input sample drives both paths; the path outputs become the
/// even and odd output samples. `dst.len()` must be `2 * src.len()`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn upsample_x2(dst: &mut [f32], src: &[f32], coefs: &[f32], x: &mut [f32], y: &mut [f32]) {
    debug_assert_eq!(dst.len(), src.len() * 2, "dst length must be 2 * src length");

    for (pair, &s) in dst.chunks_exact_mut(2).zip(src.iter()) {
        let mut even = s;
        let mut odd = s;
        apply_cascade(&mut even, &mut odd, coefs, x, y);
        pair[0] = even;
        pair[1] = odd;
    }
}
