// SPDX-License-Identifier: LGPL-3.0-or-later

//! Sampling utilities.
//!
//! - **Downsampler2x**: 2x decimation and half-band spectrum split
//! - **Upsampler2x**: 2x interpolation
//! - **HalfbandCoefs**: serializable coefficient sets for both

pub mod coefs;
pub mod downsampler;
pub mod upsampler;
pub use coefs::HalfbandCoefs;
pub use downsampler::Downsampler2x;
pub use upsampler::Upsampler2x;

use crate::error::{Error, Result};

/// Validate block sizes for a 2x decimation.
fn check_down(input: usize, output: usize) -> Result<()> {
    if output == 0 {
        return Err(Error::EmptyBlock);
    }
    if input != output * 2 {
        return Err(Error::BlockSize { input, output });
    }
    Ok(())
}

/// Validate block sizes for a 2x interpolation.
fn check_up(input: usize, output: usize) -> Result<()> {
    if input == 0 {
        return Err(Error::EmptyBlock);
    }
    if output != input * 2 {
        return Err(Error::BlockSize { input, output });
    }
    Ok(())
}

fn check_split(low: usize, high: usize) -> Result<()> {
    if low != high {
        return Err(Error::BandSize { low, high });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_down() {
        assert_eq!(check_down(8, 4), Ok(()));
        assert_eq!(check_down(0, 0), Err(Error::EmptyBlock));
        assert_eq!(check_down(4, 0), Err(Error::EmptyBlock));
        assert_eq!(
            check_down(9, 4),
            Err(Error::BlockSize {
                input: 9,
                output: 4
            })
        );
    }

    #[test]
    fn test_check_up() {
        assert_eq!(check_up(4, 8), Ok(()));
        assert_eq!(check_up(0, 8), Err(Error::EmptyBlock));
        assert_eq!(
            check_up(4, 4),
            Err(Error::BlockSize {
                input: 4,
                output: 4
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Error::BlockSize {
            input: 9,
            output: 4,
        };
        assert_eq!(
            err.to_string(),
            "block size mismatch: 9 input samples for 4 output samples"
        );
        let err = Error::CoefficientCount {
            expected: 8,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected 8 coefficients, got 3");
    }
}
