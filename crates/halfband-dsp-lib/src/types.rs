// SPDX-License-Identifier: LGPL-3.0-or-later

//! Core data types for the allpass cascade kernels.

use crate::cascade::apply_cascade;

/// Coefficients and per-stage memory of an `N`-stage polyphase allpass
/// cascade.
///
/// Each stage `i` is a first-order allpass section running at the
/// decimated rate:
/// ```text
///   y[i] = (in - y_prev[i]) * coefs[i] + x_prev[i]
/// ```
/// `x` holds the previous input fed to each stage, `y` the previous
/// output. Even stages run on the first polyphase path, odd stages on the
/// second one.
///
/// All three arrays share the same length `N`, so a cascade can never be
/// run with mismatched state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllpassCascade<const N: usize> {
    /// Allpass coefficients, one per stage. Expected in `(0, 1)`.
    pub coefs: [f32; N],
    /// Previous input of each stage.
    pub x: [f32; N],
    /// Previous output of each stage.
    pub y: [f32; N],
}

impl<const N: usize> Default for AllpassCascade<N> {
    fn default() -> Self {
        Self {
            coefs: [0.0; N],
            x: [0.0; N],
            y: [0.0; N],
        }
    }
}

impl<const N: usize> AllpassCascade<N> {
    /// Number of allpass stages.
    pub const STAGES: usize = N;

    /// Create a cascade with zero coefficients and cleared memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load coefficients, narrowing them to `f32`. Memory is kept.
    pub fn set_coefs(&mut self, coefs: &[f64; N]) {
        for (dst, &src) in self.coefs.iter_mut().zip(coefs.iter()) {
            *dst = src as f32;
        }
    }

    /// Clear the stage memory, as if the cascade had processed silence
    /// forever. Coefficients are kept.
    pub fn reset(&mut self) {
        self.x = [0.0; N];
        self.y = [0.0; N];
    }

    /// Run both polyphase paths through all `N` stages.
    #[inline(always)]
    pub fn process_pair(&mut self, spl_a: &mut f32, spl_b: &mut f32) {
        apply_cascade(spl_a, spl_b, &self.coefs, &mut self.x, &mut self.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cleared() {
        let c = AllpassCascade::<4>::default();
        assert_eq!(c.coefs, [0.0; 4]);
        assert_eq!(c.x, [0.0; 4]);
        assert_eq!(c.y, [0.0; 4]);
        assert_eq!(AllpassCascade::<4>::STAGES, 4);
    }

    #[test]
    fn test_set_coefs_narrows_and_keeps_memory() {
        let mut c = AllpassCascade::<2>::new();
        c.x = [1.0, 2.0];
        c.y = [3.0, 4.0];
        c.set_coefs(&[0.25, 0.1]);
        assert_eq!(c.coefs, [0.25, 0.1f64 as f32]);
        assert_eq!(c.x, [1.0, 2.0]);
        assert_eq!(c.y, [3.0, 4.0]);
    }

    #[test]
    fn test_reset_keeps_coefs() {
        let mut c = AllpassCascade::<2>::new();
        c.set_coefs(&[0.3, 0.8]);
        let (mut a, mut b) = (1.0, -1.0);
        c.process_pair(&mut a, &mut b);
        assert_ne!(c.x, [0.0; 2]);

        c.reset();
        assert_eq!(c.x, [0.0; 2]);
        assert_eq!(c.y, [0.0; 2]);
        assert_eq!(c.coefs, [0.3f64 as f32, 0.8f64 as f32]);
    }
}
