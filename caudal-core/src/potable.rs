use crate::tables::{PotablePipe, POTABLE_SCHEDULE};
use serde::Serialize;
use std::f64::consts::PI;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq)]
pub enum PotableSizingError {
    #[error("design flow and maximum velocity must be finite and positive")]
    InvalidInput,
    #[error("no commercial pipe has an internal diameter of {required_mm:.2} mm or more")]
    NoSuitablePipe {
        /// Theoretical internal diameter the schedule failed to cover [mm].
        required_mm: f64,
    },
}

/// Outcome of sizing a pressurized potable-water pipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PotableWaterResult {
    /// Minimum theoretical internal diameter [mm].
    pub theoretical_diameter_mm: f64,
    /// Smallest commercial pipe whose internal diameter covers the
    /// theoretical requirement.
    pub pipe: PotablePipe,
}

/// Size a pressurized potable-water pipe from the continuity equation.
///
/// The minimum flow area for `design_flow_lps` at `max_velocity_mps` fixes a
/// theoretical internal diameter; the smallest schedule entry at or above it
/// is selected. [`PotableSizingError::NoSuitablePipe`] means the required
/// diameter exceeds the largest stocked pipe, so a higher permitted velocity
/// is needed rather than different inputs.
pub fn size_potable_water(
    design_flow_lps: f64,
    max_velocity_mps: f64,
) -> Result<PotableWaterResult, PotableSizingError> {
    if !design_flow_lps.is_finite()
        || !max_velocity_mps.is_finite()
        || design_flow_lps <= 0.0
        || max_velocity_mps <= 0.0
    {
        return Err(PotableSizingError::InvalidInput);
    }

    let flow_m3s = design_flow_lps / 1000.0;
    let min_area_m2 = flow_m3s / max_velocity_mps;
    let theoretical_diameter_mm = (4.0 * min_area_m2 / PI).sqrt() * 1000.0;

    debug!(theoretical_diameter_mm, "selecting commercial potable pipe");

    POTABLE_SCHEDULE
        .iter()
        .find(|pipe| pipe.id_mm >= theoretical_diameter_mm)
        .map(|pipe| PotableWaterResult {
            theoretical_diameter_mm,
            pipe: *pipe,
        })
        .ok_or(PotableSizingError::NoSuitablePipe {
            required_mm: theoretical_diameter_mm,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_worked_example() {
        // 1.5 l/s at 2.0 m/s needs ~30.90 mm; the 1 1/4" pipe (35.0 mm id)
        // is the first schedule entry that covers it.
        let result = size_potable_water(1.5, 2.0).unwrap();

        assert_approx_eq!(f64, result.theoretical_diameter_mm, 30.902, epsilon = 1e-3);
        assert_eq!(result.pipe.nominal, "1 1/4\"");
        assert_approx_eq!(f64, result.pipe.id_mm, 35.0);
    }

    #[test]
    fn test_smallest_pipe_for_small_flow() {
        let result = size_potable_water(0.1, 2.0).unwrap();
        assert_eq!(result.pipe.nominal, "1/2\"");
    }

    #[test]
    fn test_selection_is_first_fit() {
        let result = size_potable_water(1.5, 2.0).unwrap();
        for pipe in POTABLE_SCHEDULE {
            if pipe.id_mm < result.pipe.id_mm {
                assert!(pipe.id_mm < result.theoretical_diameter_mm);
            }
        }
    }

    #[test]
    fn test_no_suitable_pipe() {
        // At 0.01 m/s a 1.5 l/s flow needs ~437 mm, beyond the 4" pipe.
        let err = size_potable_water(1.5, 0.01).unwrap_err();
        match err {
            PotableSizingError::NoSuitablePipe { required_mm } => {
                assert!(required_mm > 102.2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(size_potable_water(0.0, 2.0), Err(PotableSizingError::InvalidInput));
        assert_eq!(size_potable_water(1.5, 0.0), Err(PotableSizingError::InvalidInput));
        assert_eq!(size_potable_water(-1.0, 2.0), Err(PotableSizingError::InvalidInput));
        assert_eq!(size_potable_water(f64::NAN, 2.0), Err(PotableSizingError::InvalidInput));
        assert_eq!(size_potable_water(1.5, f64::INFINITY), Err(PotableSizingError::InvalidInput));
    }
}
