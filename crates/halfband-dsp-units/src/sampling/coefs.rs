// SPDX-License-Identifier: LGPL-3.0-or-later

//! Serializable half-band coefficient sets.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A list of allpass coefficients as produced by an external filter
/// designer, ready to be stored in or loaded from configuration.
///
/// Serialized as a plain sequence of numbers:
/// ```
/// use halfband_dsp_units::sampling::HalfbandCoefs;
///
/// let coefs: HalfbandCoefs = serde_json::from_str("[0.3, 0.8]").unwrap();
/// assert_eq!(coefs.as_slice(), &[0.3, 0.8]);
/// ```
///
/// Coefficients must lie in `(0, 1)` for a stable filter. This is the
/// designer's responsibility and is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HalfbandCoefs(Vec<f64>);

impl HalfbandCoefs {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of allpass stages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the coefficients as a fixed-size array of `N` stages.
    pub fn as_array<const N: usize>(&self) -> Result<&[f64; N]> {
        coefs_array(&self.0)
    }
}

/// View a runtime-length coefficient slice as `N` stages.
pub(crate) fn coefs_array<const N: usize>(coefs: &[f64]) -> Result<&[f64; N]> {
    coefs.try_into().map_err(|_| Error::CoefficientCount {
        expected: N,
        actual: coefs.len(),
    })
}

impl From<Vec<f64>> for HalfbandCoefs {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for HalfbandCoefs {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl AsRef<[f64]> for HalfbandCoefs {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HALFBAND_8;

    #[test]
    fn test_as_array_matching_length() {
        let coefs = HalfbandCoefs::from(HALFBAND_8);
        let arr: &[f64; 8] = coefs.as_array().unwrap();
        assert_eq!(arr, &HALFBAND_8);
    }

    #[test]
    fn test_as_array_wrong_length() {
        let coefs = HalfbandCoefs::new(vec![0.1, 0.5, 0.9]);
        assert_eq!(
            coefs.as_array::<4>(),
            Err(Error::CoefficientCount {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let coefs = HalfbandCoefs::from(HALFBAND_8);
        let text = serde_json::to_string(&coefs).unwrap();
        assert!(text.starts_with('['));
        let back: HalfbandCoefs = serde_json::from_str(&text).unwrap();
        assert_eq!(back, coefs);
    }

    #[test]
    fn test_json_rejects_non_numbers() {
        assert!(serde_json::from_str::<HalfbandCoefs>(r#"["a", 0.5]"#).is_err());
        assert!(serde_json::from_str::<HalfbandCoefs>(r#"{"coefs": [0.5]}"#).is_err());
    }

    #[test]
    fn test_empty() {
        let coefs = HalfbandCoefs::default();
        assert!(coefs.is_empty());
        assert_eq!(coefs.len(), 0);
        assert!(coefs.as_array::<0>().is_ok());
    }
}
