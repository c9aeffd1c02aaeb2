use crate::tables::SANITARY_DIAMETERS_MM;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq)]
pub enum DrainageSizingError {
    #[error(
        "flow, slope and Manning coefficient must be finite and positive, and the fill ratio strictly between 0 and 100 %"
    )]
    InvalidInput,
    #[error("no commercial pipe carries {required_capacity_lps:.2} l/s at the given slope and fill ratio")]
    NoSuitablePipe {
        /// Capacity the largest stocked diameter failed to reach [l/s].
        required_capacity_lps: f64,
    },
}

/// Outcome of sizing a gravity sanitary drain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrainageResult {
    /// Selected commercial diameter [mm].
    pub recommended_diameter_mm: f64,
    /// Velocity of the design flow through the wetted section [m/s].
    pub flow_velocity: f64,
    /// Manning capacity of the selected pipe at the target fill ratio [l/s].
    pub pipe_capacity_lps: f64,
    /// Water depth (tirante) at the target fill ratio [mm].
    pub water_height_mm: f64,
}

/// Wetted cross-section of a partially filled circular pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WettedSection {
    /// Wetted area [m²].
    pub area_m2: f64,
    /// Wetted perimeter [m].
    pub perimeter_m: f64,
}

impl WettedSection {
    /// Hydraulic radius: wetted area over wetted perimeter [m].
    pub fn hydraulic_radius(&self) -> f64 {
        self.area_m2 / self.perimeter_m
    }
}

/// Wetted geometry for water depth `depth_m` in a circular pipe of diameter
/// `diameter_m`.
///
/// The perimeter is non-zero whenever `0 < depth_m < diameter_m`, since the
/// central angle is then strictly inside `(0, 2π)`.
pub fn wetted_section(diameter_m: f64, depth_m: f64) -> WettedSection {
    // The clamp guards the acos argument against floating-point overshoot at
    // the empty/full extremes.
    let acos_arg = (1.0 - 2.0 * depth_m / diameter_m).clamp(-1.0, 1.0);
    let theta = 2.0 * acos_arg.acos();

    WettedSection {
        area_m2: diameter_m.powi(2) / 8.0 * (theta - theta.sin()),
        perimeter_m: diameter_m / 2.0 * theta,
    }
}

/// Manning capacity of a wetted section [m³/s], for roughness `manning_n` and
/// slope in m/m.
pub fn manning_capacity(section: &WettedSection, manning_n: f64, slope_m_per_m: f64) -> f64 {
    section.area_m2 * (1.0 / manning_n) * section.hydraulic_radius().powf(2.0 / 3.0) * slope_m_per_m.sqrt()
}

/// Size a gravity sanitary drain with the Manning equation.
///
/// Walks the stocked diameters in ascending order and selects the first whose
/// capacity at the target fill ratio meets the design flow. The reported
/// velocity is the design flow over the wetted area at the target fill ratio
/// of the selected pipe, which is the operating velocity convention of the
/// sizing method, below the full-capacity velocity for that section.
/// [`DrainageSizingError::NoSuitablePipe`] signals that a steeper slope (or
/// revised inputs) is required.
pub fn size_drainage(
    design_flow_lps: f64,
    slope_percent: f64,
    manning_n: f64,
    fill_ratio_percent: f64,
) -> Result<DrainageResult, DrainageSizingError> {
    let inputs = [design_flow_lps, slope_percent, manning_n, fill_ratio_percent];
    if inputs.iter().any(|v| !v.is_finite() || *v <= 0.0) || fill_ratio_percent >= 100.0 {
        return Err(DrainageSizingError::InvalidInput);
    }

    let design_flow_m3s = design_flow_lps / 1000.0;
    let slope_m_per_m = slope_percent / 100.0;
    let fill_ratio = fill_ratio_percent / 100.0;

    for &diameter_mm in SANITARY_DIAMETERS_MM {
        let diameter_m = diameter_mm / 1000.0;
        let depth_m = diameter_m * fill_ratio;

        let section = wetted_section(diameter_m, depth_m);
        let capacity_m3s = manning_capacity(&section, manning_n, slope_m_per_m);

        debug!(diameter_mm, capacity_m3s, "evaluated sanitary diameter");

        if capacity_m3s >= design_flow_m3s {
            return Ok(DrainageResult {
                recommended_diameter_mm: diameter_mm,
                flow_velocity: design_flow_m3s / section.area_m2,
                pipe_capacity_lps: capacity_m3s * 1000.0,
                water_height_mm: depth_m * 1000.0,
            });
        }
    }

    Err(DrainageSizingError::NoSuitablePipe {
        required_capacity_lps: design_flow_lps,
    })
}
